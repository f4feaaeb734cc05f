//! 建議零售價（PVP）

use pricing_core::PvpBracket;
use rust_decimal::Decimal;

/// 零售價計算結果（未四捨五入）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PvpQuote {
    pub margin_percent: Decimal,
    pub suggested_price: Decimal,
    pub profit: Decimal,
}

/// 建議零售價計算器
pub struct PvpCalculator;

impl PvpCalculator {
    /// 依 B2B 價格查級距，計算建議零售價
    pub fn quote(
        brackets: &[PvpBracket],
        default_percent: Decimal,
        b2b_price: Decimal,
    ) -> PvpQuote {
        let margin_percent = brackets
            .iter()
            .find(|b| b.contains(b2b_price))
            .map(|b| b.margin_percent)
            .unwrap_or(default_percent);

        let multiplier = Decimal::ONE.saturating_add(margin_percent / Decimal::ONE_HUNDRED);
        let suggested_price = b2b_price.saturating_mul(multiplier);

        PvpQuote {
            margin_percent,
            suggested_price,
            profit: suggested_price.saturating_sub(b2b_price),
        }
    }
}
