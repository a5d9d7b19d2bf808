// 服务层模块
// 每个服务对应网关的一组接口

pub mod callback_verifier;
pub mod closed_transaction_service;
pub mod merchant_service;
pub mod open_transaction_service;
pub mod payment_service;

// 重新导出服务
pub use callback_verifier::CallbackVerifier;
pub use closed_transaction_service::{ClosedTransactionService, DEFAULT_EXPIRY_SECONDS};
pub use merchant_service::MerchantService;
pub use open_transaction_service::OpenTransactionService;
pub use payment_service::PaymentService;
