//! # Pricing Core
//!
//! 報價核心資料模型與類型定義

pub mod breakdown;
pub mod category;
pub mod config;
pub mod expense;
pub mod input;
pub mod margin;
pub mod money;
pub mod route;
pub mod segment;

// Re-export 主要類型
pub use breakdown::{ExpenseLine, PriceBreakdown, RouteCost, SegmentCost};
pub use category::CategoryRate;
pub use config::{PricingConfig, PvpBracket};
pub use expense::{DynamicExpense, ExpenseKind, ExpenseOperation};
pub use input::{BreakdownInput, QuoteForm};
pub use margin::MarginRange;
pub use route::Route;
pub use segment::{SegmentKind, ShippingSegment};

/// 報價錯誤類型
///
/// 只出現在資料載入／驗證邊界，計算本身不會失敗。
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("未知的運輸段類型: {0}")]
    UnknownSegmentKind(String),

    #[error("無效的路線: {0}")]
    InvalidRoute(String),

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("JSON 解析錯誤: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PricingError>;
