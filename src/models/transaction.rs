// 交易数据模型
// 定义封闭支付 (固定金额) 与开放支付 (可重复收款) 的请求/响应结构

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::models::{OrderItem, Pagination, PaymentInstruction, PaymentMethod, PaymentStatus};

/// 创建封闭支付请求参数
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedPaymentParams {
    /// 支付渠道
    pub method: PaymentMethod,
    /// 商户订单号
    pub merchant_ref: String,
    /// 支付金额
    pub amount: i64,
    /// 客户姓名
    pub customer_name: String,
    /// 客户邮箱
    pub customer_email: String,
    /// 客户电话
    pub customer_phone: String,
    /// 回调地址 (可选，覆盖商户默认配置)
    pub callback_url: Option<String>,
    /// 支付完成后的跳转地址
    pub return_url: Option<String>,
    /// 过期时间 (Unix 时间戳，可选，默认 24 小时后)
    pub expired_time: Option<i64>,
}

/// 创建封闭支付的请求体
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ClosedPaymentBody<'a> {
    pub method: PaymentMethod,
    pub merchant_ref: &'a str,
    pub amount: i64,
    pub customer_name: &'a str,
    pub customer_email: &'a str,
    pub customer_phone: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<&'a str>,
    pub expired_time: i64,
    pub signature: String,
    pub order_items: Vec<OrderItem>,
}

/// 封闭支付交易
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClosedTransaction {
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
    /// 支付状态
    pub status: PaymentStatus,
    /// 过期时间 (Unix 时间戳)
    pub expired_time: i64,
    /// 订单项
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
    /// 支付说明
    #[serde(default)]
    pub instructions: Vec<PaymentInstruction>,
    /// QRIS 字符串
    #[serde(default)]
    pub qr_string: Option<String>,
    /// QRIS 图片链接
    #[serde(default)]
    pub qr_url: Option<String>,
}

/// 封闭支付交易详情
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClosedTransactionDetail {
    /// 交易信息
    #[serde(flatten)]
    pub transaction: ClosedTransaction,
    /// 支付时间 (Unix 时间戳，未支付时为空)
    #[serde(default)]
    pub paid_at: Option<i64>,
    /// 备注
    #[serde(default)]
    pub note: Option<String>,
}

/// 创建开放支付请求参数
#[derive(Debug, Clone, PartialEq)]
pub struct OpenPaymentParams {
    /// 支付渠道
    pub method: PaymentMethod,
    /// 商户订单号
    pub merchant_ref: String,
    /// 客户姓名
    pub customer_name: String,
}

/// 创建开放支付的请求体
#[derive(Debug, Clone, Serialize)]
pub(crate) struct OpenPaymentBody<'a> {
    pub method: PaymentMethod,
    pub merchant_ref: &'a str,
    pub customer_name: &'a str,
    pub signature: String,
}

/// 开放支付
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpenTransaction {
    /// 开放支付 UUID
    pub uuid: String,
    /// 商户订单号
    pub merchant_ref: String,
    /// 客户姓名
    pub customer_name: String,
    /// 渠道名称
    pub payment_name: String,
    /// 渠道代码
    pub payment_method: String,
    /// 支付码
    pub pay_code: Option<String>,
    /// QRIS 字符串
    #[serde(default)]
    pub qr_string: Option<String>,
    /// QRIS 图片链接
    #[serde(default)]
    pub qr_url: Option<String>,
}

/// 开放支付收到的单笔付款
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpenTransactionPayment {
    /// 网关交易参考号
    pub reference: String,
    /// 商户订单号
    pub merchant_ref: String,
    /// 渠道代码
    pub payment_method: String,
    /// 渠道名称
    pub payment_name: String,
    /// 客户姓名
    pub customer_name: String,
    /// 付款金额
    pub amount: i64,
    /// 商户手续费
    pub fee_merchant: i64,
    /// 客户手续费
    pub fee_customer: i64,
    /// 合计手续费
    pub total_fee: i64,
    /// 商户实收金额
    pub amount_received: i64,
    /// 收银台链接
    pub checkout_url: String,
    /// 支付状态
    pub status: PaymentStatus,
    /// 支付时间 (Unix 时间戳)
    pub paid_at: Option<i64>,
}

/// 开放支付付款列表
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpenTransactionPayments {
    /// 付款列表
    pub data: Vec<OpenTransactionPayment>,
    /// 分页信息 (网关可能不返回)
    pub pagination: Option<Pagination>,
}

/// 开放支付付款列表查询参数
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpenPaymentListParams {
    /// 网关交易参考号
    pub reference: Option<String>,
    /// 商户订单号
    pub merchant_ref: Option<String>,
    /// 开始时间
    pub start_date: Option<DateTime<Local>>,
    /// 结束时间
    pub end_date: Option<DateTime<Local>>,
    /// 每页数量 (最大 100)
    pub per_page: Option<u32>,
}
