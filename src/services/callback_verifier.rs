// 回调验证服务
// 负责校验网关推送的支付状态通知签名并解析载荷

use reqwest::header::HeaderMap;

use crate::error::{Error, Result};
use crate::models::{
    Callback, CALLBACK_EVENT_HEADER, CALLBACK_SIGNATURE_HEADER, PAYMENT_STATUS_EVENT,
};
use crate::utils::{callback_signature, verify_callback_signature};

/// 回调验证服务
#[derive(Clone)]
pub struct CallbackVerifier {
    private_key: String,
}

impl CallbackVerifier {
    /// 创建新的回调验证服务实例
    ///
    /// # Arguments
    /// * `private_key` - 商户私钥
    pub fn new(private_key: impl Into<String>) -> Self {
        Self {
            private_key: private_key.into(),
        }
    }

    /// 计算回调原始请求体的签名
    pub fn signature(&self, raw_body: &[u8]) -> Result<String> {
        callback_signature(raw_body, &self.private_key)
    }

    /// 验证回调签名
    pub fn verify(&self, raw_body: &[u8], signature: &str) -> bool {
        verify_callback_signature(raw_body, signature, &self.private_key)
    }

    /// 验证并解析回调载荷
    ///
    /// # Arguments
    /// * `raw_body` - 回调原始请求体
    /// * `signature` - `X-Callback-Signature` 请求头
    /// * `event` - `X-Callback-Event` 请求头 (可选)
    ///
    /// # Returns
    /// * 解析后的回调; 事件类型未知时返回校验错误, 签名不匹配时返回 `InvalidSignature`
    pub fn parse(&self, raw_body: &[u8], signature: &str, event: Option<&str>) -> Result<Callback> {
        if let Some(event) = event {
            if event != PAYMENT_STATUS_EVENT {
                log::debug!("Rejecting callback with unknown event {}", event);
                return Err(Error::validation(format!("Unrecognized callback event: {}", event)));
            }
        }

        if !self.verify(raw_body, signature) {
            log::debug!("Rejecting callback with invalid signature");
            return Err(Error::InvalidSignature);
        }

        let callback: Callback = serde_json::from_slice(raw_body)?;
        log::debug!(
            "Verified callback {} ({})",
            callback.reference,
            callback.status
        );

        Ok(callback)
    }

    /// 从回调请求头中读取签名与事件类型后验证并解析载荷
    ///
    /// ```
    /// use reqwest::header::{HeaderMap, HeaderValue};
    /// use tripay::models::{CALLBACK_EVENT_HEADER, CALLBACK_SIGNATURE_HEADER};
    /// use tripay::CallbackVerifier;
    ///
    /// let verifier = CallbackVerifier::new("private-key");
    /// let raw = br#"{"reference":"T1","merchant_ref":"X1","payment_method":"BRI Virtual Account","payment_method_code":"BRIVA","total_amount":10000,"fee_merchant":0,"fee_customer":0,"total_fee":0,"amount_received":10000,"is_closed_payment":1,"status":"PAID"}"#;
    ///
    /// let mut headers = HeaderMap::new();
    /// let signature = verifier.signature(raw).unwrap();
    /// headers.insert(CALLBACK_SIGNATURE_HEADER, HeaderValue::from_str(&signature).unwrap());
    /// headers.insert(CALLBACK_EVENT_HEADER, HeaderValue::from_static("payment_status"));
    ///
    /// let callback = verifier.parse_headers(&headers, raw).unwrap();
    /// assert!(callback.is_paid());
    /// ```
    ///
    /// # Returns
    /// * 缺少签名头或签名不匹配时返回 `InvalidSignature`
    pub fn parse_headers(&self, headers: &HeaderMap, raw_body: &[u8]) -> Result<Callback> {
        let signature = headers
            .get(CALLBACK_SIGNATURE_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(Error::InvalidSignature)?;
        let event = match headers.get(CALLBACK_EVENT_HEADER) {
            Some(value) => Some(
                value
                    .to_str()
                    .map_err(|_| Error::validation("Invalid callback event header"))?,
            ),
            None => None,
        };

        self.parse(raw_body, signature, event)
    }
}
