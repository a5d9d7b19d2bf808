// 请求构建器
// 累积查询参数与请求体, 生成一次性的不可变请求

use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, AUTHORIZATION, CONTENT_TYPE, USER_AGENT,
};
use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use crate::error::{Error, Result};

/// 查询参数
///
/// 保留插入顺序; 同名参数后写覆盖先写。值为 `None` 的参数在编码时省略。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, Option<Value>)>,
}

impl Params {
    /// 创建空参数集
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置参数
    pub fn set(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_opt(key, Some(value))
    }

    /// 设置可选参数, `None` 表示不发送
    pub fn set_opt<V: Into<Value>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.insert(key.into(), value.map(Into::into));
        self
    }

    /// 合并另一组参数, 同名参数以 `other` 为准
    pub fn merge(&mut self, other: Params) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    fn insert(&mut self, key: String, value: Option<Value>) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// 读取参数原始值
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_ref())
    }

    /// 是否没有任何参数
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 规范化为查询字符串键值对
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter_map(|(key, value)| {
                value
                    .as_ref()
                    .map(|value| (key.clone(), normalize_param(value)))
            })
            .collect()
    }
}

/// 将参数值转换为线路格式
///
/// 布尔值编码为 "1"/"0", null 编码为空字符串, 数组逐项转换后以逗号连接。
pub fn normalize_param(value: &Value) -> String {
    match value {
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => "0".to_string(),
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(normalize_param)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// 已构建完成的请求, 交给传输层发送
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP 方法
    pub method: Method,
    /// 完整 URL (含查询参数)
    pub url: Url,
    /// 请求头
    pub headers: HeaderMap,
    /// JSON 请求体 (仅 POST)
    pub body: Option<Value>,
}

impl ApiRequest {
    /// 相对基础 URL 的路径与查询字符串
    pub fn path_and_query(&self) -> String {
        match self.url.query() {
            Some(query) => format!("{}?{}", self.url.path(), query),
            None => self.url.path().to_string(),
        }
    }

    /// 请求体中的字段
    pub fn body_field(&self, key: &str) -> Option<&Value> {
        self.body.as_ref().and_then(|body| body.get(key))
    }
}

/// 请求构建器
///
/// 每次调用新建一个构建器, 参数与请求体不会在调用之间共享。
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    path: String,
    params: Params,
    body: Map<String, Value>,
}

impl RequestBuilder {
    /// 创建指定方法与路径的构建器
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: Params::new(),
            body: Map::new(),
        }
    }

    /// GET 请求
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST 请求
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// 替换请求体
    pub fn set_body(mut self, body: Map<String, Value>) -> Self {
        self.body = body;
        self
    }

    /// 以可序列化结构替换请求体
    pub fn set_json<T: Serialize>(self, body: &T) -> Result<Self> {
        match serde_json::to_value(body)? {
            Value::Object(map) => Ok(self.set_body(map)),
            other => Err(Error::validation(format!(
                "Request body must be a JSON object, got {}",
                other
            ))),
        }
    }

    /// 合并查询参数
    pub fn set_params(mut self, params: Params) -> Self {
        self.params.merge(params);
        self
    }

    /// 当前查询参数
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// 当前请求体
    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    /// 生成不可变请求
    ///
    /// # Arguments
    /// * `base_url` - 基础 URL (以 `/` 结尾)
    /// * `api_token` - API 令牌 (可选)
    pub fn build(self, base_url: &str, api_token: Option<&str>) -> Result<ApiRequest> {
        let mut url = Url::parse(base_url)?.join(&self.path)?;

        let pairs = self.params.to_query_pairs();
        if pairs.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(pairs);
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate, br"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&user_agent())
                .map_err(|e| Error::validation(format!("Invalid User-Agent header: {}", e)))?,
        );

        if let Some(token) = api_token.filter(|token| !token.is_empty()) {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| Error::validation("API token contains invalid header characters"))?;
            headers.insert(AUTHORIZATION, value);
        }

        let body = if self.method == Method::POST {
            Some(Value::Object(self.body))
        } else {
            None
        };

        Ok(ApiRequest {
            method: self.method,
            url,
            headers,
            body,
        })
    }
}

/// 库标识 User-Agent, 包含版本与运行平台
pub fn user_agent() -> String {
    format!(
        "tripay-rust/{} ({} {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const BASE: &str = "https://tripay.co.id/api-sandbox/";

    #[test]
    fn test_normalize_params() {
        let params = Params::new()
            .set("a", true)
            .set("b", false)
            .set("c", Value::Null)
            .set_opt("d", None::<String>);

        let request = RequestBuilder::get("merchant/transactions")
            .set_params(params)
            .build(BASE, None)
            .unwrap();

        assert_eq!(request.url.query(), Some("a=1&b=0&c="));
        assert_eq!(
            request.path_and_query(),
            "/api-sandbox/merchant/transactions?a=1&b=0&c="
        );
    }

    #[test]
    fn test_normalize_values() {
        assert_eq!(normalize_param(&json!(10000)), "10000");
        assert_eq!(normalize_param(&json!("BRIVA")), "BRIVA");
        assert_eq!(normalize_param(&json!([true, null, 3, "x"])), "1,,3,x");
        assert_eq!(normalize_param(&json!([[false], "y"])), "0,y");
    }

    #[test]
    fn test_params_merge_overwrites() {
        let mut params = Params::new().set("page", 1).set("sort", "asc");
        params.merge(Params::new().set("page", 2).set("code", "BRIVA"));

        assert_eq!(params.get("page"), Some(&json!(2)));
        assert_eq!(
            params.to_query_pairs(),
            vec![
                ("page".to_string(), "2".to_string()),
                ("sort".to_string(), "asc".to_string()),
                ("code".to_string(), "BRIVA".to_string()),
            ]
        );

        // 后写的 None 会移除先前的值
        params.merge(Params::new().set_opt("sort", None::<&str>));
        assert!(params.get("sort").is_none());
        assert_eq!(params.to_query_pairs().len(), 2);
    }

    #[test]
    fn test_build_without_params_has_no_query() {
        let request = RequestBuilder::get("merchant/payment-channel")
            .build(BASE, None)
            .unwrap();

        assert_eq!(request.url.as_str(), "https://tripay.co.id/api-sandbox/merchant/payment-channel");
        assert!(request.body.is_none());
    }

    #[test]
    fn test_headers() {
        let request = RequestBuilder::get("merchant/payment-channel")
            .build(BASE, Some("DEV-token"))
            .unwrap();

        assert_eq!(request.headers[AUTHORIZATION], "Bearer DEV-token");
        assert_eq!(request.headers[CONTENT_TYPE], "application/json");
        assert_eq!(request.headers[ACCEPT], "application/json, text/plain, */*");
        assert_eq!(request.headers[ACCEPT_ENCODING], "gzip, deflate, br");

        let agent = request.headers[USER_AGENT].to_str().unwrap();
        assert!(agent.starts_with(&format!("tripay-rust/{}", env!("CARGO_PKG_VERSION"))));
        assert!(agent.contains(std::env::consts::OS));

        // 未配置令牌时不发送 Authorization
        let anonymous = RequestBuilder::get("merchant/payment-channel")
            .build(BASE, None)
            .unwrap();
        assert!(anonymous.headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_body_only_for_post() {
        let mut body = Map::new();
        body.insert("merchant_ref".to_string(), json!("X1"));

        let post = RequestBuilder::post("transaction/create")
            .set_body(body.clone())
            .build(BASE, None)
            .unwrap();
        assert_eq!(post.body_field("merchant_ref"), Some(&json!("X1")));

        let get = RequestBuilder::get("transaction/detail")
            .set_body(body)
            .build(BASE, None)
            .unwrap();
        assert!(get.body.is_none());
    }

    #[test]
    fn test_set_body_replaces() {
        let mut first = Map::new();
        first.insert("a".to_string(), json!(1));
        let mut second = Map::new();
        second.insert("b".to_string(), json!(2));

        let builder = RequestBuilder::post("x")
            .set_body(first)
            .set_body(second)
            .set_params(Params::new().set("page", 1))
            .set_params(Params::new().set("sort", "desc"));
        assert!(builder.body().get("a").is_none());
        assert_eq!(builder.params().get("page"), Some(&json!(1)));
        assert_eq!(builder.params().get("sort"), Some(&json!("desc")));
        assert_eq!(builder.body().get("b"), Some(&json!(2)));

        assert!(RequestBuilder::post("x").set_json(&vec![1, 2]).is_err());
    }
}
