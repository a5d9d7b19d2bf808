// 商户接口数据模型
// 定义支付渠道、手续费计算、订单项与商户交易列表的数据结构

use serde::{Deserialize, Serialize};

use crate::models::{Pagination, PaymentMethod, PaymentStatus, SortOrder};

/// 手续费 (固定金额 + 百分比)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelFee {
    /// 固定手续费
    pub flat: i64,
    /// 百分比手续费
    pub percent: f64,
}

/// 合计手续费 (网关以字符串返回百分比)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TotalChannelFee {
    /// 固定手续费
    pub flat: i64,
    /// 百分比手续费
    pub percent: String,
}

/// 商户可用的支付渠道
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentChannel {
    /// 渠道分组 (Virtual Account、Convenience Store、E-Wallet 等)
    pub group: String,
    /// 渠道代码
    pub code: String,
    /// 渠道名称
    pub name: String,
    /// 渠道类型 (direct / redirect)
    #[serde(rename = "type")]
    pub channel_type: String,
    /// 商户承担的手续费
    pub fee_merchant: ChannelFee,
    /// 客户承担的手续费
    pub fee_customer: ChannelFee,
    /// 合计手续费
    pub total_fee: TotalChannelFee,
    /// 最低手续费
    pub minimum_fee: Option<i64>,
    /// 最高手续费
    pub maximum_fee: Option<i64>,
    /// 渠道图标
    pub icon_url: String,
    /// 是否启用
    pub active: bool,
}

/// 手续费计算规则
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeeRule {
    /// 固定手续费
    pub flat: i64,
    /// 百分比手续费
    pub percent: String,
    /// 最低手续费
    pub min: Option<i64>,
    /// 最高手续费
    pub max: Option<i64>,
}

/// 手续费计算结果 (按承担方拆分)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeeSplit {
    /// 商户承担部分
    pub merchant: i64,
    /// 客户承担部分
    pub customer: i64,
}

/// 单个渠道的手续费计算
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeeCalculation {
    /// 渠道代码
    pub code: String,
    /// 渠道名称
    pub name: String,
    /// 手续费规则
    pub fee: FeeRule,
    /// 计算出的手续费
    pub total_fee: FeeSplit,
}

/// 订单项
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// 商品 SKU
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// 商品名称
    pub name: String,
    /// 单价
    pub price: i64,
    /// 数量
    pub quantity: u32,
    /// 小计
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<i64>,
    /// 商品页面链接
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    /// 商品图片链接
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl OrderItem {
    /// 创建订单项
    pub fn new(name: impl Into<String>, price: i64, quantity: u32) -> Self {
        Self {
            sku: None,
            name: name.into(),
            price,
            quantity,
            subtotal: None,
            product_url: None,
            image_url: None,
        }
    }

    /// 设置 SKU
    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    /// 设置商品页面链接
    pub fn with_product_url(mut self, url: impl Into<String>) -> Self {
        self.product_url = Some(url.into());
        self
    }

    /// 设置商品图片链接
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// 单价 × 数量
    pub fn line_total(&self) -> i64 {
        self.price * i64::from(self.quantity)
    }
}

/// 商户交易列表中的单条交易
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MerchantTransaction {
    /// 网关交易参考号
    pub reference: String,
    /// 商户订单号
    pub merchant_ref: String,
    /// 渠道选择方式
    pub payment_selection_type: String,
    /// 渠道代码
    pub payment_method: String,
    /// 渠道名称
    pub payment_name: String,
    /// 客户姓名
    pub customer_name: String,
    /// 客户邮箱
    pub customer_email: String,
    /// 客户电话
    pub customer_phone: Option<String>,
    /// 回调地址
    pub callback_url: Option<String>,
    /// 支付完成后的跳转地址
    pub return_url: Option<String>,
    /// 交易金额
    pub amount: i64,
    /// 商户手续费
    pub fee_merchant: i64,
    /// 客户手续费
    pub fee_customer: i64,
    /// 合计手续费
    pub total_fee: i64,
    /// 商户实收金额
    pub amount_received: i64,
    /// 支付码
    pub pay_code: Option<String>,
    /// 支付链接
    pub pay_url: Option<String>,
    /// 收银台链接
    pub checkout_url: String,
    /// 订单项
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
    /// 支付状态
    pub status: PaymentStatus,
    /// 备注
    pub note: Option<String>,
    /// 创建时间 (Unix 时间戳)
    pub created_at: i64,
    /// 过期时间 (Unix 时间戳)
    pub expired_at: i64,
    /// 支付时间 (Unix 时间戳)
    pub paid_at: Option<i64>,
}

/// 商户交易列表
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MerchantTransactions {
    /// 交易列表
    pub data: Vec<MerchantTransaction>,
    /// 分页信息
    pub pagination: Pagination,
}

/// 商户交易列表查询参数
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionListParams {
    /// 页码
    pub page: Option<u32>,
    /// 每页数量
    pub per_page: Option<u32>,
    /// 排序方向
    pub sort: Option<SortOrder>,
    /// 网关交易参考号
    pub reference: Option<String>,
    /// 商户订单号
    pub merchant_ref: Option<String>,
    /// 渠道过滤
    pub method: Option<PaymentMethod>,
    /// 状态过滤
    pub status: Option<PaymentStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payment_channel_from_wire() {
        let raw = json!({
            "group": "Virtual Account",
            "code": "BRIVA",
            "name": "BRI Virtual Account",
            "type": "direct",
            "fee_merchant": { "flat": 0, "percent": 0 },
            "fee_customer": { "flat": 4250, "percent": 0 },
            "total_fee": { "flat": 4250, "percent": "0.00" },
            "minimum_fee": null,
            "maximum_fee": null,
            "icon_url": "https://tripay.co.id/images/payment-channel/briva.png",
            "active": true
        });

        let channel: PaymentChannel = serde_json::from_value(raw).unwrap();
        assert_eq!(channel.code, "BRIVA");
        assert_eq!(channel.channel_type, "direct");
        assert_eq!(channel.fee_customer.flat, 4250);
        assert_eq!(channel.total_fee.percent, "0.00");
        assert_eq!(channel.minimum_fee, None);
        assert!(channel.active);
    }

    #[test]
    fn test_order_item_skips_missing_fields() {
        let item = OrderItem::new("Kaos", 50_000, 2).with_sku("TS-01");
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(
            value,
            json!({ "sku": "TS-01", "name": "Kaos", "price": 50000, "quantity": 2 })
        );
        assert_eq!(item.line_total(), 100_000);
    }
}
