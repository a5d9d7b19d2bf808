// 开放支付交易服务
// 负责创建可重复收款的支付码, 查询开放支付详情及其收到的付款

use std::sync::Arc;

use crate::config::TransactionOptions;
use crate::error::Result;
use crate::models::{
    OpenPaymentBody, OpenPaymentListParams, OpenPaymentParams, OpenTransaction,
    OpenTransactionPayments,
};
use crate::request::{Params, RequestBuilder, Requester, Transport};
use crate::utils::{
    format_wire_datetime, generate_signature, validate_path_segment, validate_per_page,
    SignatureParams,
};

/// 开放支付交易服务
#[derive(Clone)]
pub struct OpenTransactionService {
    request: Requester,
    private_key: String,
    merchant_code: String,
}

impl OpenTransactionService {
    /// 创建新的开放支付服务实例
    pub fn new(options: TransactionOptions) -> Self {
        let request = Requester::new(&options.base());
        Self::from_parts(options, request)
    }

    /// 使用指定传输创建开放支付服务
    pub fn with_transport(options: TransactionOptions, transport: Arc<dyn Transport>) -> Self {
        let request = Requester::with_transport(&options.base(), transport);
        Self::from_parts(options, request)
    }

    fn from_parts(options: TransactionOptions, request: Requester) -> Self {
        Self {
            request,
            private_key: options.private_key,
            merchant_code: options.merchant_code,
        }
    }

    /// 创建开放支付
    ///
    /// # Arguments
    /// * `params` - 渠道、商户订单号、客户姓名
    ///
    /// # Returns
    /// * 创建的开放支付 (含 UUID 与支付码)
    pub async fn create(&self, params: OpenPaymentParams) -> Result<OpenTransaction> {
        // 开放支付没有固定金额, 以渠道代码参与签名
        let signature = generate_signature(&SignatureParams {
            private_key: &self.private_key,
            merchant_code: &self.merchant_code,
            merchant_ref: &params.merchant_ref,
            amount: None,
            channel: Some(params.method),
        })?;

        let body = OpenPaymentBody {
            method: params.method,
            merchant_ref: &params.merchant_ref,
            customer_name: &params.customer_name,
            signature,
        };

        let builder = RequestBuilder::post("open-payment/create").set_json(&body)?;
        let response = self.request.send(builder).await?;
        response.data()
    }

    /// 查询开放支付详情
    ///
    /// # Arguments
    /// * `uuid` - 开放支付 UUID; 含路径分隔符等字符时返回校验错误
    pub async fn detail(&self, uuid: &str) -> Result<OpenTransaction> {
        validate_path_segment("uuid", uuid)?;
        let path = format!("open-payment/{}/detail", uuid);

        let response = self.request.get(&path, Params::new()).await?;
        response.data()
    }

    /// 查询开放支付收到的付款列表
    ///
    /// # Arguments
    /// * `uuid` - 开放支付 UUID
    /// * `params` - 过滤条件; `per_page` 超过 100 时在发送前返回校验错误
    ///
    /// # Returns
    /// * 付款列表与分页信息
    pub async fn list(&self, uuid: &str, params: OpenPaymentListParams) -> Result<OpenTransactionPayments> {
        validate_path_segment("uuid", uuid)?;
        if let Some(per_page) = params.per_page {
            validate_per_page(per_page)?;
        }

        let query = Params::new()
            .set_opt("reference", params.reference)
            .set_opt("merchant_ref", params.merchant_ref)
            .set_opt("start_date", params.start_date.as_ref().map(format_wire_datetime))
            .set_opt("end_date", params.end_date.as_ref().map(format_wire_datetime))
            .set_opt("per_page", params.per_page);

        let path = format!("open-payment/{}/transactions", uuid);
        let response = self.request.get(&path, query).await?;
        let (data, pagination) = response.into_parts()?;

        Ok(OpenTransactionPayments { data, pagination })
    }
}
