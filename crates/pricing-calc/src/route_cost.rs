//! 路線運費彙總

use pricing_core::{Route, RouteCost, SegmentCost};
use rust_decimal::Decimal;

/// 路線運費計算器
pub struct RouteCostCalculator;

impl RouteCostCalculator {
    /// 計算路線運費
    ///
    /// 只有啟用的運輸段計入；各段運費為 max(每公斤運費 × 重量, 最低收費)，
    /// 天數視為依序串接而相加。沒有路線時回傳空結果。
    ///
    /// 金額與天數都以飽和加法累計，極端輸入不會溢位。
    ///
    /// 重量不在此處做預設處理，呼叫端須自行保證重量為正。
    pub fn compute(route: Option<&Route>, weight_kg: Decimal) -> RouteCost {
        let Some(route) = route else {
            return RouteCost::empty();
        };

        let mut result = RouteCost::empty();

        for segment in route.active_segments() {
            let cost = segment.cost_for(weight_kg);

            result.total_cost = result.total_cost.saturating_add(cost);
            result.total_days_min =
                result.total_days_min.saturating_add(segment.estimated_days_min);
            result.total_days_max =
                result.total_days_max.saturating_add(segment.estimated_days_max);
            result.per_segment.push(SegmentCost {
                kind: segment.kind,
                label: segment.kind.label().to_string(),
                cost,
                days_min: segment.estimated_days_min,
                days_max: segment.estimated_days_max,
            });
        }

        tracing::debug!(
            "路線 {} 運費: {} ({} 段, {}-{} 天)",
            route.name,
            result.total_cost,
            result.per_segment.len(),
            result.total_days_min,
            result.total_days_max
        );

        result
    }
}
