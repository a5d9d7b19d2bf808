// 请求管线
// 负责拼接基础 URL、附加认证头、发送请求并把 success=false 转换为业务错误

mod builder;
#[cfg(test)]
pub(crate) mod mock;
mod transport;

pub use builder::*;
pub use transport::*;

use std::sync::Arc;
use std::time::Instant;

use reqwest::Method;

use crate::config::BaseOptions;
use crate::error::{Error, Result};
use crate::models::Envelope;

/// 生产环境基础 URL
pub const PRODUCTION_BASE_URL: &str = "https://tripay.co.id/api/";

/// 沙箱环境基础 URL
pub const SANDBOX_BASE_URL: &str = "https://tripay.co.id/api-sandbox/";

/// 请求执行器
///
/// 只保存基础 URL、令牌与传输层, 本身无可变状态; 每次调用通过
/// [`RequestBuilder`] 生成独立的 [`ApiRequest`]。
#[derive(Clone)]
pub struct Requester {
    base_url: &'static str,
    api_token: Option<String>,
    transport: Arc<dyn Transport>,
}

impl Requester {
    /// 使用默认 HTTP 传输创建执行器
    pub fn new(options: &BaseOptions) -> Self {
        Self::with_transport(options, Arc::new(HttpTransport::new()))
    }

    /// 使用指定传输创建执行器
    ///
    /// # Arguments
    /// * `options` - 令牌与环境配置
    /// * `transport` - 传输实现
    pub fn with_transport(options: &BaseOptions, transport: Arc<dyn Transport>) -> Self {
        let base_url = if options.sandbox {
            SANDBOX_BASE_URL
        } else {
            PRODUCTION_BASE_URL
        };

        Self {
            base_url,
            api_token: Some(options.api_token.clone()).filter(|token| !token.is_empty()),
            transport,
        }
    }

    /// 当前使用的基础 URL
    pub fn base_url(&self) -> &str {
        self.base_url
    }

    /// 由构建器生成请求
    pub fn build(&self, builder: RequestBuilder) -> Result<ApiRequest> {
        builder.build(self.base_url, self.api_token.as_deref())
    }

    /// 执行请求
    ///
    /// 请求以引用传入, 失败时调用方仍持有原请求, 可检查或重新发送。
    ///
    /// # Arguments
    /// * `request` - 已构建的请求
    ///
    /// # Returns
    /// * `success: true` 的响应信封; `success: false` 返回 [`Error::Remote`]
    pub async fn execute(&self, request: &ApiRequest) -> Result<Envelope> {
        let start_time = Instant::now();
        let raw = self.transport.send(request).await?;
        let envelope: Envelope = serde_json::from_slice(&raw)?;

        log::debug!(
            "{} {} {}ms - success={}",
            request.method,
            request.path_and_query(),
            start_time.elapsed().as_millis(),
            envelope.success
        );

        if !envelope.success {
            return Err(Error::Remote {
                message: envelope.message.clone(),
                envelope: Box::new(envelope),
            });
        }

        Ok(envelope)
    }

    /// 构建并执行请求
    pub async fn send(&self, builder: RequestBuilder) -> Result<Envelope> {
        let request = self.build(builder)?;
        self.execute(&request).await
    }

    /// GET 请求
    pub async fn get(&self, path: &str, params: Params) -> Result<Envelope> {
        self.send(RequestBuilder::new(Method::GET, path).set_params(params))
            .await
    }
}
