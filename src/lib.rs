//! # B2B Pricing
//!
//! 跨境 B2B2C 報價引擎：出廠成本 → 利潤 → 物流 → 費用 → B2B 價格 → 建議零售價

pub use pricing_calc::{
    BatchResult, PriceCalculator, PricingWarning, RouteCostCalculator, RuleDiagnostics,
    WarningSeverity,
};
pub use pricing_core::{
    BreakdownInput, CategoryRate, DynamicExpense, ExpenseKind, ExpenseLine, ExpenseOperation,
    MarginRange, PriceBreakdown, PricingConfig, PricingError, PvpBracket, QuoteForm, Route,
    RouteCost, SegmentCost, SegmentKind, ShippingSegment,
};

/// 以預設配置計算單筆報價
pub fn quote(input: &BreakdownInput) -> PriceBreakdown {
    PriceCalculator::default().calculate(input)
}

/// 以預設配置計算路線運費（重量需由呼叫端保證為正）
pub fn route_cost(route: &Route, weight_kg: rust_decimal::Decimal) -> RouteCost {
    RouteCostCalculator::compute(Some(route), weight_kg)
}
