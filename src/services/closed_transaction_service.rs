// 封闭支付交易服务
// 负责累积订单项、签名并创建固定金额交易, 以及查询交易详情

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::config::TransactionOptions;
use crate::error::Result;
use crate::models::{
    ClosedPaymentBody, ClosedPaymentParams, ClosedTransaction, ClosedTransactionDetail, OrderItem,
};
use crate::request::{Params, RequestBuilder, Requester, Transport};
use crate::utils::{generate_signature, validate_order_items, SignatureParams};

/// 未指定过期时间时的默认有效期 (24 小时)
pub const DEFAULT_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// 封闭支付交易服务
#[derive(Clone)]
pub struct ClosedTransactionService {
    request: Requester,
    private_key: String,
    merchant_code: String,
    order_items: Vec<OrderItem>,
}

impl ClosedTransactionService {
    /// 创建新的封闭支付服务实例
    pub fn new(options: TransactionOptions) -> Self {
        let request = Requester::new(&options.base());
        Self::from_parts(options, request)
    }

    /// 使用指定传输创建封闭支付服务
    pub fn with_transport(options: TransactionOptions, transport: Arc<dyn Transport>) -> Self {
        let request = Requester::with_transport(&options.base(), transport);
        Self::from_parts(options, request)
    }

    fn from_parts(options: TransactionOptions, request: Requester) -> Self {
        Self {
            request,
            private_key: options.private_key,
            merchant_code: options.merchant_code,
            order_items: Vec::new(),
        }
    }

    /// 添加一个订单项
    pub fn add_order_item(&mut self, item: OrderItem) -> &mut Self {
        self.order_items.push(item);
        self
    }

    /// 批量添加订单项
    pub fn add_order_items(&mut self, items: impl IntoIterator<Item = OrderItem>) -> &mut Self {
        self.order_items.extend(items);
        self
    }

    /// 当前累积的订单项
    pub fn order_items(&self) -> &[OrderItem] {
        &self.order_items
    }

    /// 创建封闭支付交易
    ///
    /// 签名成功后累积的订单项被取出, 之后无论请求成功与否都会清空,
    /// 请求失败后需要重新添加订单项; 发送前的校验失败不影响已添加的订单项。
    ///
    /// # Arguments
    /// * `params` - 交易参数
    ///
    /// # Returns
    /// * 创建的交易; 订单项为空时返回校验错误且不发送请求
    pub async fn create(&mut self, params: ClosedPaymentParams) -> Result<ClosedTransaction> {
        validate_order_items(&self.order_items)?;

        let signature = generate_signature(&SignatureParams {
            private_key: &self.private_key,
            merchant_code: &self.merchant_code,
            merchant_ref: &params.merchant_ref,
            amount: Some(params.amount),
            channel: None,
        })?;
        let order_items = std::mem::take(&mut self.order_items);

        log::debug!(
            "Creating closed transaction {} with {} order items",
            params.merchant_ref,
            order_items.len()
        );

        let body = ClosedPaymentBody {
            method: params.method,
            merchant_ref: &params.merchant_ref,
            amount: params.amount,
            customer_name: &params.customer_name,
            customer_email: &params.customer_email,
            customer_phone: &params.customer_phone,
            callback_url: params.callback_url.as_deref(),
            return_url: params.return_url.as_deref(),
            expired_time: params
                .expired_time
                .unwrap_or_else(|| (Utc::now() + Duration::seconds(DEFAULT_EXPIRY_SECONDS)).timestamp()),
            signature,
            order_items,
        };

        let builder = RequestBuilder::post("transaction/create").set_json(&body)?;
        let response = self.request.send(builder).await?;
        response.data()
    }

    /// 查询交易详情 (也可用于检查支付状态)
    ///
    /// # Arguments
    /// * `reference` - 网关交易参考号
    ///
    /// # Returns
    /// * 交易详情
    pub async fn detail(&self, reference: &str) -> Result<ClosedTransactionDetail> {
        let params = Params::new().set("reference", reference);

        let response = self.request.get("transaction/detail", params).await?;
        response.data()
    }
}
