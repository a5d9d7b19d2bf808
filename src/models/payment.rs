// 支付渠道与支付说明数据模型
// 定义支付渠道枚举、支付状态以及支付说明接口的请求/响应结构

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// 支付渠道代码
///
/// 网关支持的渠道是固定集合, 所有渠道参数在发出请求之前都以此枚举表示。
/// 从字符串解析时未知代码返回 [`Error::Validation`]。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Maybank 虚拟账户
    #[serde(rename = "MYBVA")]
    Mybva,
    /// Permata 虚拟账户
    #[serde(rename = "PERMATAVA")]
    PermataVa,
    /// BNI 虚拟账户
    #[serde(rename = "BNIVA")]
    BniVa,
    /// BRI 虚拟账户
    #[serde(rename = "BRIVA")]
    BriVa,
    /// Mandiri 虚拟账户
    #[serde(rename = "MANDIRIVA")]
    MandiriVa,
    /// BCA 虚拟账户
    #[serde(rename = "BCAVA")]
    BcaVa,
    /// Sinarmas 虚拟账户
    #[serde(rename = "SMSVA")]
    SmsVa,
    /// Muamalat 虚拟账户
    #[serde(rename = "MUAMALATVA")]
    MuamalatVa,
    /// CIMB Niaga 虚拟账户
    #[serde(rename = "CIMBVA")]
    CimbVa,
    /// BSI 虚拟账户
    #[serde(rename = "BSIVA")]
    BsiVa,
    /// OCBC NISP 虚拟账户
    #[serde(rename = "OCBCVA")]
    OcbcVa,
    /// Danamon 虚拟账户
    #[serde(rename = "DANAMONVA")]
    DanamonVa,
    /// BNC 虚拟账户
    #[serde(rename = "BNCVA")]
    BncVa,
    /// BSI 虚拟账户 (开放支付)
    #[serde(rename = "BSIVAOP")]
    BsiVaOp,
    /// Alfamart 便利店
    #[serde(rename = "ALFAMART")]
    Alfamart,
    /// Indomaret 便利店
    #[serde(rename = "INDOMARET")]
    Indomaret,
    /// Alfamidi 便利店
    #[serde(rename = "ALFAMIDI")]
    Alfamidi,
    /// OVO 电子钱包
    #[serde(rename = "OVO")]
    Ovo,
    /// QRIS
    #[serde(rename = "QRIS")]
    Qris,
    /// QRIS (自定义)
    #[serde(rename = "QRISC")]
    QrisC,
    /// QRIS 2
    #[serde(rename = "QRIS2")]
    Qris2,
    /// ShopeePay 电子钱包
    #[serde(rename = "SHOPEEPAY")]
    ShopeePay,
    /// QRIS (ShopeePay)
    #[serde(rename = "QRIS_SHOPEEPAY")]
    QrisShopeePay,
}

impl PaymentMethod {
    /// 全部支持的渠道
    pub const ALL: [PaymentMethod; 23] = [
        PaymentMethod::Mybva,
        PaymentMethod::PermataVa,
        PaymentMethod::BniVa,
        PaymentMethod::BriVa,
        PaymentMethod::MandiriVa,
        PaymentMethod::BcaVa,
        PaymentMethod::SmsVa,
        PaymentMethod::MuamalatVa,
        PaymentMethod::CimbVa,
        PaymentMethod::BsiVa,
        PaymentMethod::OcbcVa,
        PaymentMethod::DanamonVa,
        PaymentMethod::BncVa,
        PaymentMethod::BsiVaOp,
        PaymentMethod::Alfamart,
        PaymentMethod::Indomaret,
        PaymentMethod::Alfamidi,
        PaymentMethod::Ovo,
        PaymentMethod::Qris,
        PaymentMethod::QrisC,
        PaymentMethod::Qris2,
        PaymentMethod::ShopeePay,
        PaymentMethod::QrisShopeePay,
    ];

    /// 线路上使用的渠道代码
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Mybva => "MYBVA",
            PaymentMethod::PermataVa => "PERMATAVA",
            PaymentMethod::BniVa => "BNIVA",
            PaymentMethod::BriVa => "BRIVA",
            PaymentMethod::MandiriVa => "MANDIRIVA",
            PaymentMethod::BcaVa => "BCAVA",
            PaymentMethod::SmsVa => "SMSVA",
            PaymentMethod::MuamalatVa => "MUAMALATVA",
            PaymentMethod::CimbVa => "CIMBVA",
            PaymentMethod::BsiVa => "BSIVA",
            PaymentMethod::OcbcVa => "OCBCVA",
            PaymentMethod::DanamonVa => "DANAMONVA",
            PaymentMethod::BncVa => "BNCVA",
            PaymentMethod::BsiVaOp => "BSIVAOP",
            PaymentMethod::Alfamart => "ALFAMART",
            PaymentMethod::Indomaret => "INDOMARET",
            PaymentMethod::Alfamidi => "ALFAMIDI",
            PaymentMethod::Ovo => "OVO",
            PaymentMethod::Qris => "QRIS",
            PaymentMethod::QrisC => "QRISC",
            PaymentMethod::Qris2 => "QRIS2",
            PaymentMethod::ShopeePay => "SHOPEEPAY",
            PaymentMethod::QrisShopeePay => "QRIS_SHOPEEPAY",
        }
    }

    /// 检查是否为虚拟账户渠道
    pub fn is_virtual_account(&self) -> bool {
        self.as_str().contains("VA")
    }

    /// 检查是否为 QRIS 渠道
    pub fn is_qris(&self) -> bool {
        self.as_str().starts_with("QRIS")
    }
}

impl FromStr for PaymentMethod {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .iter()
            .find(|method| method.as_str() == code)
            .copied()
            .ok_or_else(|| Error::validation(format!("Invalid payment method code: {}", code)))
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 支付状态 (由网关维护, 客户端只读取)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    /// 待支付
    Unpaid,
    /// 已支付
    Paid,
    /// 已退款
    Refund,
    /// 已过期
    Expired,
    /// 失败
    Failed,
}

impl PaymentStatus {
    /// 线路上使用的状态字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "UNPAID",
            PaymentStatus::Paid => "PAID",
            PaymentStatus::Refund => "REFUND",
            PaymentStatus::Expired => "EXPIRED",
            PaymentStatus::Failed => "FAILED",
        }
    }

    /// 是否为终态
    pub fn is_final(&self) -> bool {
        !matches!(self, PaymentStatus::Unpaid)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 支付说明查询参数
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentInstructionParams {
    /// 支付渠道
    pub code: PaymentMethod,
    /// 支付码 (用于将说明中的占位符替换为实际支付码)
    pub pay_code: Option<String>,
    /// 支付金额
    pub amount: Option<i64>,
    /// 是否允许说明中包含 HTML
    pub allow_html: Option<bool>,
}

impl PaymentInstructionParams {
    /// 仅指定渠道的查询参数
    pub fn new(code: PaymentMethod) -> Self {
        Self {
            code,
            pay_code: None,
            amount: None,
            allow_html: None,
        }
    }
}

/// 支付说明
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentInstruction {
    /// 说明标题
    pub title: String,
    /// 支付步骤
    pub steps: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_payment_methods() {
        for method in PaymentMethod::ALL {
            let parsed: PaymentMethod = method.as_str().parse().unwrap();
            assert_eq!(parsed, method);
        }
    }

    #[test]
    fn test_reject_unknown_payment_method() {
        let err = "custom".parse::<PaymentMethod>().unwrap_err();
        assert!(err.is_validation());

        // 大小写敏感
        assert!("briva".parse::<PaymentMethod>().is_err());
        assert!("".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_payment_method_serde_uses_wire_code() {
        let json = serde_json::to_string(&PaymentMethod::QrisShopeePay).unwrap();
        assert_eq!(json, "\"QRIS_SHOPEEPAY\"");

        let method: PaymentMethod = serde_json::from_str("\"BRIVA\"").unwrap();
        assert_eq!(method, PaymentMethod::BriVa);
    }

    #[test]
    fn test_payment_method_groups() {
        assert!(PaymentMethod::BriVa.is_virtual_account());
        assert!(PaymentMethod::BsiVaOp.is_virtual_account());
        assert!(!PaymentMethod::Alfamart.is_virtual_account());
        assert!(PaymentMethod::QrisShopeePay.is_qris());
        assert!(!PaymentMethod::ShopeePay.is_qris());
    }

    #[test]
    fn test_payment_status() {
        let status: PaymentStatus = serde_json::from_str("\"EXPIRED\"").unwrap();
        assert_eq!(status, PaymentStatus::Expired);
        assert!(status.is_final());
        assert!(!PaymentStatus::Unpaid.is_final());
        assert_eq!(PaymentStatus::Refund.to_string(), "REFUND");
    }
}
