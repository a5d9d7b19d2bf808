// 错误类型定义
// 区分参数校验错误、网关业务错误 (success=false) 与传输层错误

use thiserror::Error;

use crate::models::Envelope;

/// 库内统一的结果类型
pub type Result<T> = std::result::Result<T, Error>;

/// Tripay 客户端错误
///
/// 校验错误在发出任何网络请求之前同步返回; 业务错误携带网关返回的原始响应;
/// 其余变体来自底层 HTTP 传输或 JSON 解析, 原样向上传递。
#[must_use = "errors should be handled or propagated"]
#[derive(Debug, Error)]
pub enum Error {
    /// 参数校验失败 (非法支付渠道、订单项为空、per_page 超限等)
    #[error("{0}")]
    Validation(String),

    /// 网关返回 `success: false`
    #[error("Request failed: {message}")]
    Remote {
        /// 网关返回的错误信息
        message: String,
        /// 完整的原始响应
        envelope: Box<Envelope>,
    },

    /// 回调签名与载荷不匹配
    #[error("Callback signature mismatch")]
    InvalidSignature,

    /// HTTP 请求失败 (连接失败、超时、TLS 错误等)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// 响应体不是合法 JSON 或与声明的结构不符
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// 请求路径无法拼接到基础 URL 上
    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// 创建校验错误
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    /// 是否为参数校验错误
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// 是否为网关业务错误
    pub fn is_remote(&self) -> bool {
        matches!(self, Error::Remote { .. })
    }

    /// 是否为传输层错误 (网络、解析、URL)
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Decode(_) | Error::Url(_))
    }

    /// 网关业务错误对应的原始响应
    pub fn envelope(&self) -> Option<&Envelope> {
        match self {
            Error::Remote { envelope, .. } => Some(&**envelope),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = Error::validation("Parameter order_items is empty");
        assert!(err.is_validation());
        assert!(!err.is_remote());
        assert!(!err.is_transport());
        assert_eq!(err.to_string(), "Parameter order_items is empty");

        let decode = serde_json::from_str::<Envelope>("not json").unwrap_err();
        let err = Error::from(decode);
        assert!(err.is_transport());
        assert!(err.envelope().is_none());
    }

    #[test]
    fn test_remote_error_keeps_envelope() {
        let envelope = Envelope {
            success: false,
            message: "Invalid API key".to_string(),
            data: serde_json::Value::Null,
            pagination: None,
        };
        let err = Error::Remote {
            message: envelope.message.clone(),
            envelope: Box::new(envelope),
        };

        assert!(err.is_remote());
        assert_eq!(err.to_string(), "Request failed: Invalid API key");
        assert_eq!(err.envelope().unwrap().message, "Invalid API key");
    }
}
