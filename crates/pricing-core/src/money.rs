//! 金額運算
//!
//! 報價計算不可失敗，極端輸入一律飽和在 `Decimal::MAX` / `Decimal::MIN`。

use rust_decimal::Decimal;

/// value × percent / 100
///
/// 乘積溢位時先除後乘，結果仍溢位則飽和。
pub fn percent_of(value: Decimal, percent: Decimal) -> Decimal {
    match value.checked_mul(percent) {
        Some(product) => product / Decimal::ONE_HUNDRED,
        None => (value / Decimal::ONE_HUNDRED).saturating_mul(percent),
    }
}
