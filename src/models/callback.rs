// 回调通知数据模型
// 定义网关推送的支付状态通知载荷

use serde::{Deserialize, Serialize};

use crate::models::PaymentStatus;

/// 回调签名所在的请求头 (小写形式, 可直接作为 HeaderName 使用)
pub const CALLBACK_SIGNATURE_HEADER: &str = "x-callback-signature";

/// 回调事件类型所在的请求头
pub const CALLBACK_EVENT_HEADER: &str = "x-callback-event";

/// 支付状态变更事件
pub const PAYMENT_STATUS_EVENT: &str = "payment_status";

/// 支付状态回调载荷
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Callback {
    /// 网关交易参考号
    pub reference: String,
    /// 商户订单号
    pub merchant_ref: String,
    /// 渠道名称
    pub payment_method: String,
    /// 渠道代码
    pub payment_method_code: String,
    /// 客户支付总额
    pub total_amount: i64,
    /// 商户手续费
    pub fee_merchant: i64,
    /// 客户手续费
    pub fee_customer: i64,
    /// 合计手续费
    pub total_fee: i64,
    /// 商户实收金额
    pub amount_received: i64,
    /// 是否为封闭支付 (1 = 封闭, 0 = 开放)
    pub is_closed_payment: u8,
    /// 支付状态
    pub status: PaymentStatus,
    /// 支付成功时间 (Unix 时间戳)
    pub paid_at: Option<i64>,
    /// 备注
    pub note: Option<String>,
}

impl Callback {
    /// 是否来自封闭支付
    pub fn is_closed_payment(&self) -> bool {
        self.is_closed_payment == 1
    }

    /// 是否已支付成功
    pub fn is_paid(&self) -> bool {
        self.status == PaymentStatus::Paid
    }
}
