// 数据验证工具函数
// 在发出请求之前检查参数取值范围与必填集合

use chrono::{DateTime, TimeZone};

use crate::error::{Error, Result};
use crate::models::{OrderItem, PaymentMethod};

/// 开放支付付款列表每页最大数量
pub const MAX_PER_PAGE: u32 = 100;

/// 校验支付渠道代码
///
/// # Arguments
/// * `code` - 渠道代码字符串
///
/// # Returns
/// * 对应的支付渠道
pub fn validate_payment_method(code: &str) -> Result<PaymentMethod> {
    code.parse()
}

/// 校验每页数量
///
/// # Arguments
/// * `per_page` - 每页数量
pub fn validate_per_page(per_page: u32) -> Result<()> {
    if per_page > MAX_PER_PAGE {
        return Err(Error::validation(format!(
            "Parameter per_page is too big, maximum is {} item per_page",
            MAX_PER_PAGE
        )));
    }

    Ok(())
}

/// 校验订单项不为空
///
/// # Arguments
/// * `items` - 订单项列表
pub fn validate_order_items(items: &[OrderItem]) -> Result<()> {
    if items.is_empty() {
        return Err(Error::validation("Parameter order_items is empty"));
    }

    Ok(())
}

/// 校验作为单个路径段拼接到 URL 中的标识符
///
/// 拒绝空值、`.`/`..` 以及会改变路径结构的字符 (`/`、`\`、`?`、`#`、`%`)。
///
/// # Arguments
/// * `name` - 参数名 (用于错误信息)
/// * `value` - 标识符
pub fn validate_path_segment(name: &str, value: &str) -> Result<()> {
    let invalid = value.is_empty()
        || value == "."
        || value == ".."
        || value
            .chars()
            .any(|c| matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_control());

    if invalid {
        return Err(Error::validation(format!("Parameter {} is invalid", name)));
    }

    Ok(())
}

/// 按网关要求的 `YYYY-MM-DD HH:mm:ss` 格式输出时间
///
/// # Arguments
/// * `date` - 任意时区的时间, 按其自身时区的本地时间输出
pub fn format_wire_datetime<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y-%m-%d %H:%M:%S").to_string()
}
