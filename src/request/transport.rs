// HTTP 传输层
// 定义可注入的传输接口与基于 reqwest 的默认实现

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::request::ApiRequest;

/// 传输接口
///
/// 负责把构建好的请求发送出去并返回原始响应体; 不做重试、不解析响应。
#[async_trait]
pub trait Transport: Send + Sync {
    /// 发送请求并返回响应体字节
    async fn send(&self, request: &ApiRequest) -> Result<Vec<u8>>;
}

/// 基于 reqwest 的 HTTP 传输
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// 使用默认 reqwest 客户端
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定超时时间创建传输
    ///
    /// # Arguments
    /// * `timeout` - 单次请求超时时间
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// 使用调用方配置好的 reqwest 客户端
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest) -> Result<Vec<u8>> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone());

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        log::debug!(
            "{} {} - {}",
            request.method,
            request.url.path(),
            response.status().as_u16()
        );

        // 网关在非 2xx 响应中同样返回 JSON 信封, 交由上层判断 success
        Ok(response.bytes().await?.to_vec())
    }
}
