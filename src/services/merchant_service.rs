// 商户接口服务
// 负责查询支付渠道、计算手续费以及获取商户交易列表

use std::sync::Arc;

use crate::config::BaseOptions;
use crate::error::Result;
use crate::models::{
    FeeCalculation, MerchantTransactions, PaymentChannel, PaymentMethod, TransactionListParams,
};
use crate::request::{Params, Requester, Transport};

/// 商户接口服务
#[derive(Clone)]
pub struct MerchantService {
    request: Requester,
}

impl MerchantService {
    /// 创建新的商户服务实例
    pub fn new(options: BaseOptions) -> Self {
        Self {
            request: Requester::new(&options),
        }
    }

    /// 使用指定传输创建商户服务
    pub fn with_transport(options: BaseOptions, transport: Arc<dyn Transport>) -> Self {
        Self {
            request: Requester::with_transport(&options, transport),
        }
    }

    /// 获取商户账户下已启用的支付渠道及其手续费
    ///
    /// # Arguments
    /// * `code` - 渠道代码 (可选，只查询指定渠道)
    ///
    /// # Returns
    /// * 支付渠道列表
    pub async fn payment_channel(&self, code: Option<PaymentMethod>) -> Result<Vec<PaymentChannel>> {
        let params = Params::new().set_opt("code", code.map(|c| c.as_str()));

        let response = self.request.get("merchant/payment-channel", params).await?;
        response.data()
    }

    /// 按金额计算各渠道手续费
    ///
    /// # Arguments
    /// * `amount` - 交易金额
    /// * `code` - 渠道代码 (可选)
    ///
    /// # Returns
    /// * 手续费计算结果列表
    pub async fn fee_calc(&self, amount: i64, code: Option<PaymentMethod>) -> Result<Vec<FeeCalculation>> {
        let params = Params::new()
            .set_opt("code", code.map(|c| c.as_str()))
            .set("amount", amount.to_string());

        let response = self.request.get("merchant/fee-calculator", params).await?;
        response.data()
    }

    /// 获取商户交易列表
    ///
    /// # Arguments
    /// * `params` - 查询参数 (页码、排序、过滤条件)
    ///
    /// # Returns
    /// * 交易列表与分页信息; 网关未返回分页时使用默认分页
    pub async fn transactions(&self, params: TransactionListParams) -> Result<MerchantTransactions> {
        let query = Params::new()
            .set_opt("page", params.page.map(|p| p.to_string()))
            .set_opt("per_page", params.per_page.map(|p| p.to_string()))
            .set_opt("sort", params.sort.map(|s| s.as_str()))
            .set_opt("reference", params.reference)
            .set_opt("merchant_ref", params.merchant_ref)
            .set_opt("method", params.method.map(|m| m.as_str()))
            .set_opt("status", params.status.map(|s| s.as_str()));

        let response = self.request.get("merchant/transactions", query).await?;
        let (data, pagination) = response.into_parts()?;

        Ok(MerchantTransactions {
            data,
            pagination: pagination.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Pagination, PaymentStatus, SortOrder};
    use crate::request::mock::MockTransport;
    use serde_json::json;

    fn setup_test_service() -> (MerchantService, Arc<MockTransport>) {
        let transport = Arc::new(MockTransport::new());
        let service =
            MerchantService::with_transport(BaseOptions::sandbox("DEV-token"), transport.clone());
        (service, transport)
    }

    fn channel_json() -> serde_json::Value {
        json!({
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
        })
    }

    #[tokio::test]
    async fn test_payment_channel() {
        let (service, transport) = setup_test_service();
        transport.push_success(json!([channel_json()]));

        let channels = service.payment_channel(Some(PaymentMethod::BriVa)).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, reqwest::Method::GET);
        assert_eq!(
            request.path_and_query(),
            "/api-sandbox/merchant/payment-channel?code=BRIVA"
        );
        assert_eq!(request.headers["authorization"], "Bearer DEV-token");

        assert_eq!(channels.len(), 1);
        let channel = &channels[0];
        assert_eq!(channel.group, "Virtual Account");
        assert_eq!(channel.code, "BRIVA");
        assert_eq!(channel.channel_type, "direct");
        assert_eq!(channel.fee_merchant.flat, 0);
        assert_eq!(channel.fee_customer.flat, 4250);
        assert_eq!(channel.total_fee.percent, "0.00");
        assert_eq!(channel.maximum_fee, None);
        assert!(channel.icon_url.ends_with("briva.png"));
        assert!(channel.active);
    }

    #[tokio::test]
    async fn test_payment_channel_without_code() {
        let (service, transport) = setup_test_service();
        transport.push_success(json!([]));

        let channels = service.payment_channel(None).await.unwrap();

        assert!(channels.is_empty());
        assert_eq!(transport.last_request().url.query(), None);
    }

    #[tokio::test]
    async fn test_fee_calc() {
        let (service, transport) = setup_test_service();
        transport.push_success(json!([{
            "code": "QRIS",
            "name": "QRIS",
            "fee": { "flat": 750, "percent": "0.70", "min": null, "max": null },
            "total_fee": { "merchant": 0, "customer": 820 }
        }]));

        let fees = service.fee_calc(10_000, Some(PaymentMethod::Qris)).await.unwrap();

        assert_eq!(
            transport.last_request().url.query(),
            Some("code=QRIS&amount=10000")
        );
        assert_eq!(fees[0].fee.percent, "0.70");
        assert_eq!(fees[0].total_fee.customer, 820);
    }

    #[tokio::test]
    async fn test_transactions_with_filters() {
        let (service, transport) = setup_test_service();
        transport.push_json(json!({
            "success": true,
            "message": "Success",
            "data": [],
            "pagination": {
                "sort": "desc",
                "offset": { "from": 1, "to": 10 },
                "current_page": 2,
                "previous_page": 1,
                "next_page": null,
                "last_page": 2,
                "per_page": 10,
                "total_records": 15
            }
        }));

        let params = TransactionListParams {
            page: Some(2),
            per_page: Some(10),
            sort: Some(SortOrder::Desc),
            method: Some(PaymentMethod::Ovo),
            status: Some(PaymentStatus::Paid),
            ..Default::default()
        };
        let result = service.transactions(params).await.unwrap();

        assert_eq!(
            transport.last_request().url.query(),
            Some("page=2&per_page=10&sort=desc&method=OVO&status=PAID")
        );
        assert_eq!(result.pagination.current_page, 2);
        assert_eq!(result.pagination.next_page, None);
    }

    #[tokio::test]
    async fn test_transactions_default_pagination() {
        let (service, transport) = setup_test_service();
        transport.push_success(json!([{
            "reference": "T0001000000000000006",
            "merchant_ref": "INV345675",
            "payment_selection_type": "static",
            "payment_method": "BRIVA",
            "payment_name": "BRI Virtual Account",
            "customer_name": "Nama Pelanggan",
            "customer_email": "emailpelanggan@domain.com",
            "customer_phone": null,
            "callback_url": null,
            "return_url": null,
            "amount": 1000000,
            "fee_merchant": 1500,
            "fee_customer": 0,
            "total_fee": 1500,
            "amount_received": 998500,
            "pay_code": "57585748548596587",
            "pay_url": null,
            "checkout_url": "https://tripay.co.id/checkout/T0001000000000000006",
            "order_items": [{ "sku": null, "name": "Produk", "price": 1000000, "quantity": 1, "subtotal": 1000000 }],
            "status": "PAID",
            "note": null,
            "created_at": 1582855837,
            "expired_at": 1582942237,
            "paid_at": 1582855900
        }]));

        let result = service.transactions(TransactionListParams::default()).await.unwrap();

        assert_eq!(transport.last_request().url.query(), None);
        assert_eq!(result.data.len(), 1);
        assert_eq!(result.data[0].status, PaymentStatus::Paid);
        assert_eq!(result.data[0].order_items[0].sku, None);
        assert_eq!(result.pagination, Pagination::default());
    }

    #[tokio::test]
    async fn test_remote_error() {
        let (service, transport) = setup_test_service();
        transport.push_failure("Invalid API key");

        let err = service.payment_channel(None).await.unwrap_err();

        assert!(err.is_remote());
        assert_eq!(err.envelope().unwrap().message, "Invalid API key");
    }
}
