//! 金額四捨五入

use rust_decimal::{Decimal, RoundingStrategy};

/// 金額小數位數
pub const CURRENCY_DP: u32 = 2;

/// 四捨五入到 2 位小數（0.5 一律往正方向進位），結果固定保留 2 位
///
/// 負數的 0.5 往零靠近：-1.005 → -1.00。
/// 超出 2 位小數表示範圍的極大值保持原有位數。
pub fn round_currency(value: Decimal) -> Decimal {
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };

    let mut rounded = value.round_dp_with_strategy(CURRENCY_DP, strategy);
    rounded.rescale(CURRENCY_DP);
    rounded
}
