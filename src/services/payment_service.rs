// 支付说明服务
// 负责查询各支付渠道的付款步骤

use std::sync::Arc;

use crate::config::BaseOptions;
use crate::error::Result;
use crate::models::{PaymentInstruction, PaymentInstructionParams};
use crate::request::{Params, Requester, Transport};

/// 支付说明服务
#[derive(Clone)]
pub struct PaymentService {
    request: Requester,
}

impl PaymentService {
    /// 创建新的支付服务实例
    pub fn new(options: BaseOptions) -> Self {
        Self {
            request: Requester::new(&options),
        }
    }

    /// 使用指定传输创建支付服务
    pub fn with_transport(options: BaseOptions, transport: Arc<dyn Transport>) -> Self {
        Self {
            request: Requester::with_transport(&options, transport),
        }
    }

    /// 获取支付渠道的付款说明
    ///
    /// # Arguments
    /// * `params` - 渠道代码、支付码、金额、是否允许 HTML
    ///
    /// # Returns
    /// * 支付说明列表
    pub async fn instructions(&self, params: PaymentInstructionParams) -> Result<Vec<PaymentInstruction>> {
        let query = Params::new()
            .set("code", params.code.as_str())
            .set_opt("pay_code", params.pay_code)
            .set_opt("amount", params.amount)
            .set_opt("allow_html", params.allow_html);

        let response = self.request.get("payment/instruction", query).await?;
        response.data()
    }
}
