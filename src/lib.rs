//! Tripay 支付网关客户端
//!
//! 提供商户接口 (支付渠道、手续费、交易列表)、支付说明、封闭与开放支付交易,
//! 以及回调签名验证。
//!
//! ```no_run
//! use tripay::{BaseOptions, MerchantService, PaymentMethod};
//!
//! # async fn run() -> tripay::Result<()> {
//! let merchant = MerchantService::new(BaseOptions::sandbox("DEV-token"));
//! let channels = merchant.payment_channel(Some(PaymentMethod::BriVa)).await?;
//! println!("{} channels", channels.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod request;
pub mod services;
pub mod utils;

pub use config::{BaseOptions, Config, TransactionOptions};
pub use error::{Error, Result};
pub use models::{
    Callback, ClosedPaymentParams, ClosedTransaction, ClosedTransactionDetail, Envelope,
    FeeCalculation, MerchantTransactions, OpenPaymentListParams, OpenPaymentParams,
    OpenTransaction, OpenTransactionPayments, OrderItem, Pagination, PaymentChannel,
    PaymentInstruction, PaymentInstructionParams, PaymentMethod, PaymentStatus, SortOrder,
    TransactionListParams,
};
pub use request::{HttpTransport, Transport};
pub use services::{
    CallbackVerifier, ClosedTransactionService, MerchantService, OpenTransactionService,
    PaymentService,
};
