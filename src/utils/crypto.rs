// 签名工具函数
// 提供交易创建签名与回调签名的 HMAC-SHA256 计算和验证

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{Error, Result};
use crate::models::PaymentMethod;

type HmacSha256 = Hmac<Sha256>;

/// 交易签名参数
#[derive(Debug, Clone, Copy)]
pub struct SignatureParams<'a> {
    /// 商户私钥
    pub private_key: &'a str,
    /// 商户代码
    pub merchant_code: &'a str,
    /// 商户订单号
    pub merchant_ref: &'a str,
    /// 支付金额 (封闭支付)
    pub amount: Option<i64>,
    /// 支付渠道 (开放支付)
    pub channel: Option<PaymentMethod>,
}

fn new_mac(secret: &str) -> Result<HmacSha256> {
    HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| Error::validation("Invalid HMAC key"))
}

/// 生成HMAC-SHA256签名
///
/// # Arguments
/// * `message` - 要签名的消息
/// * `secret` - 签名密钥
///
/// # Returns
/// * 十六进制格式的签名字符串
pub fn generate_hmac_signature(message: &[u8], secret: &str) -> Result<String> {
    let mut mac = new_mac(secret)?;
    mac.update(message);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// 生成交易签名
///
/// 签名内容为 `merchant_code + merchant_ref + X`, 其中 X 优先取金额,
/// 金额缺失 (或为 0) 时取渠道代码。
///
/// # Arguments
/// * `params` - 签名参数
///
/// # Returns
/// * 十六进制签名; 金额与渠道都缺失时返回校验错误
pub fn generate_signature(params: &SignatureParams<'_>) -> Result<String> {
    let suffix = match (params.amount, params.channel) {
        (Some(amount), _) if amount != 0 => amount.to_string(),
        (_, Some(channel)) => channel.as_str().to_string(),
        _ => return Err(Error::validation("amount or channel is required")),
    };

    let message = format!("{}{}{}", params.merchant_code, params.merchant_ref, suffix);
    generate_hmac_signature(message.as_bytes(), params.private_key)
}

/// 计算回调签名
///
/// 必须对收到的原始请求体字节计算, 重新序列化后的 JSON 与网关签名时的字节可能不同。
///
/// # Arguments
/// * `raw_body` - 回调原始请求体
/// * `private_key` - 商户私钥
///
/// # Returns
/// * 十六进制签名
pub fn callback_signature(raw_body: &[u8], private_key: &str) -> Result<String> {
    generate_hmac_signature(raw_body, private_key)
}

/// 验证回调签名 (常量时间比较)
///
/// # Arguments
/// * `raw_body` - 回调原始请求体
/// * `signature` - 请求头中的十六进制签名
/// * `private_key` - 商户私钥
///
/// # Returns
/// * 签名是否有效; 非法十六进制视为无效
pub fn verify_callback_signature(raw_body: &[u8], signature: &str, private_key: &str) -> bool {
    let Ok(expected) = hex::decode(signature.trim()) else {
        return false;
    };
    let Ok(mut mac) = new_mac(private_key) else {
        return false;
    };

    mac.update(raw_body);
    mac.verify_slice(&expected).is_ok()
}
