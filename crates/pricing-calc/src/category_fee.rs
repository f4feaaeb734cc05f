//! 類目費計算

use pricing_core::CategoryRate;
use pricing_core::money::percent_of;
use rust_decimal::Decimal;

/// 類目費
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoryFee {
    pub fixed: Decimal,
    pub percentage: Decimal,
    pub total: Decimal,
}

/// 類目費計算器
pub struct CategoryFeeCalculator;

impl CategoryFeeCalculator {
    /// 固定費 + 出廠成本 × 百分比；沒有費率或已停用時為 0
    pub fn apply(rate: Option<&CategoryRate>, factory_cost: Decimal) -> CategoryFee {
        match rate {
            Some(rate) if rate.is_active => {
                let fixed = rate.fixed_fee;
                let percentage = percent_of(factory_cost, rate.percentage_fee);
                CategoryFee {
                    fixed,
                    percentage,
                    total: fixed.saturating_add(percentage),
                }
            }
            _ => CategoryFee::default(),
        }
    }
}
