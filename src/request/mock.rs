// 测试用传输
// 记录发出的请求并按顺序返回预置响应

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::{Error, Result};
use crate::request::{ApiRequest, Transport};

/// 记录请求并回放预置响应的传输
#[derive(Debug, Default)]
pub struct MockTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<Vec<u8>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置一个原始响应体
    pub fn push_raw(&self, body: impl Into<Vec<u8>>) {
        self.responses.lock().unwrap().push_back(body.into());
    }

    /// 预置成功响应
    pub fn push_success(&self, data: Value) {
        self.push_json(json!({ "success": true, "message": "Success", "data": data }));
    }

    /// 预置失败响应
    pub fn push_failure(&self, message: &str) {
        self.push_json(json!({ "success": false, "message": message }));
    }

    pub fn push_json(&self, envelope: Value) {
        self.push_raw(envelope.to_string());
    }

    /// 已发送的请求
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// 最后一次发送的请求
    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &ApiRequest) -> Result<Vec<u8>> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::validation("MockTransport has no queued response"))
    }
}
