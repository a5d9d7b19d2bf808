// 配置管理模块
// 负责加载 Tripay 凭据与运行环境配置

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// 客户端基础配置
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BaseOptions {
    /// API 令牌
    pub api_token: String,
    /// 是否使用沙箱环境 (默认 false)
    #[serde(default)]
    pub sandbox: bool,
}

impl BaseOptions {
    /// 生产环境配置
    pub fn production(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            sandbox: false,
        }
    }

    /// 沙箱环境配置
    pub fn sandbox(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            sandbox: true,
        }
    }
}

/// 交易客户端配置 (需要签名凭据)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionOptions {
    /// API 令牌
    pub api_token: String,
    /// 是否使用沙箱环境
    #[serde(default)]
    pub sandbox: bool,
    /// 商户私钥 (用于签名)
    pub private_key: String,
    /// 商户代码
    pub merchant_code: String,
}

impl TransactionOptions {
    /// 对应的基础配置
    pub fn base(&self) -> BaseOptions {
        BaseOptions {
            api_token: self.api_token.clone(),
            sandbox: self.sandbox,
        }
    }
}

/// 应用程序配置结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API 令牌
    pub api_token: String,
    /// 是否使用沙箱环境
    pub sandbox: bool,
    /// 商户私钥
    pub private_key: Option<String>,
    /// 商户代码
    pub merchant_code: Option<String>,
    /// 请求超时时间 (秒)
    pub timeout: u64,
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok(); // 加载.env文件，忽略错误

        Ok(Config {
            api_token: env::var("TRIPAY_API_TOKEN")
                .context("TRIPAY_API_TOKEN environment variable is required")?,
            sandbox: parse_bool(
                &env::var("TRIPAY_SANDBOX").unwrap_or_else(|_| "true".to_string()),
            )
            .context("Invalid TRIPAY_SANDBOX")?,
            private_key: env::var("TRIPAY_PRIVATE_KEY").ok(),
            merchant_code: env::var("TRIPAY_MERCHANT_CODE").ok(),
            timeout: env::var("TRIPAY_TIMEOUT")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("Invalid TRIPAY_TIMEOUT")?,
        })
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        if self.api_token.trim().is_empty() {
            anyhow::bail!("API token cannot be empty");
        }

        if self.timeout == 0 {
            anyhow::bail!("Timeout cannot be 0");
        }

        Ok(())
    }

    /// 请求超时时间
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// 基础客户端配置
    pub fn base_options(&self) -> BaseOptions {
        BaseOptions {
            api_token: self.api_token.clone(),
            sandbox: self.sandbox,
        }
    }

    /// 交易客户端配置, 缺少私钥或商户代码时返回错误
    pub fn transaction_options(&self) -> Result<TransactionOptions> {
        let private_key = self
            .private_key
            .clone()
            .filter(|key| !key.is_empty())
            .context("TRIPAY_PRIVATE_KEY is required for transactions")?;
        let merchant_code = self
            .merchant_code
            .clone()
            .filter(|code| !code.is_empty())
            .context("TRIPAY_MERCHANT_CODE is required for transactions")?;

        Ok(TransactionOptions {
            api_token: self.api_token.clone(),
            sandbox: self.sandbox,
            private_key,
            merchant_code,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_token: String::new(),
            sandbox: true,
            private_key: None,
            merchant_code: None,
            timeout: 30,
        }
    }
}

/// 解析布尔型环境变量 (true/false/1/0/yes/no)
fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected a boolean, got {:?}", other),
    }
}
