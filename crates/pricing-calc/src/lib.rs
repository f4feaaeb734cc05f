//! # Pricing Calculation Engine
//!
//! B2B 報價計算引擎：利潤區間 → 物流 → 類目費 → 動態費用 → 平台服務費 → 建議零售價

pub mod calculator;
pub mod category_fee;
pub mod diagnostics;
pub mod expenses;
pub mod margin;
pub mod pvp;
pub mod rounding;
pub mod route_cost;

// Re-export 主要類型
pub use calculator::PriceCalculator;
pub use diagnostics::RuleDiagnostics;
pub use route_cost::RouteCostCalculator;

use pricing_core::PriceBreakdown;
use serde::Serialize;

/// 批次報價結果
#[derive(Debug, Clone, Serialize)]
pub struct BatchResult {
    /// 報價明細（與輸入順序相同）
    pub breakdowns: Vec<PriceBreakdown>,

    /// 規則警告（index 為輸入位置）
    pub warnings: Vec<(usize, PricingWarning)>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl BatchResult {
    /// 創建空的批次結果
    pub fn empty() -> Self {
        Self {
            breakdowns: Vec::new(),
            warnings: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 是否有錯誤等級的警告
    pub fn has_errors(&self) -> bool {
        self.warnings
            .iter()
            .any(|(_, w)| w.severity == WarningSeverity::Error)
    }
}

/// 報價規則警告
///
/// 警告只供顯示，不影響計算結果。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingWarning {
    /// 相關規則或物件
    pub subject: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl PricingWarning {
    pub fn new(subject: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            subject,
            message,
            severity,
        }
    }

    pub fn info(subject: String, message: String) -> Self {
        Self::new(subject, message, WarningSeverity::Info)
    }

    pub fn warning(subject: String, message: String) -> Self {
        Self::new(subject, message, WarningSeverity::Warning)
    }

    pub fn error(subject: String, message: String) -> Self {
        Self::new(subject, message, WarningSeverity::Error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningSeverity {
    Info,
    Warning,
    Error,
}
