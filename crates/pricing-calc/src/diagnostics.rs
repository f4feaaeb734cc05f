//! 報價規則檢查
//!
//! 找出會讓結果依賴輸入順序或資料形狀不正確的規則。檢查結果只是警告，
//! 計算仍照常進行。

use pricing_core::BreakdownInput;

use crate::PricingWarning;

/// 規則檢查器
pub struct RuleDiagnostics;

impl RuleDiagnostics {
    /// 檢查報價輸入
    ///
    /// # 參數
    /// * `check_overlaps` - 是否檢查重疊的利潤區間（兩兩比對）
    pub fn inspect(input: &BreakdownInput, check_overlaps: bool) -> Vec<PricingWarning> {
        let mut warnings = Vec::new();

        for range in input.margin_ranges.iter().filter(|r| r.is_active) {
            if range.is_inverted() {
                warnings.push(PricingWarning::warning(
                    format!("margin_range:{}", range.id),
                    format!(
                        "利潤區間上限 {:?} 不大於下限 {}，永遠不會命中",
                        range.max_cost, range.min_cost
                    ),
                ));
            }
        }

        if check_overlaps {
            let active: Vec<_> = input
                .margin_ranges
                .iter()
                .filter(|r| r.is_active && !r.is_inverted())
                .collect();

            for (i, first) in active.iter().enumerate() {
                for second in active.iter().skip(i + 1) {
                    if first.overlaps(second) {
                        warnings.push(PricingWarning::warning(
                            format!("margin_range:{}", second.id),
                            format!(
                                "利潤區間 [{}, {:?}) 與 [{}, {:?}) 重疊，將以列表中較前者為準",
                                first.min_cost, first.max_cost, second.min_cost, second.max_cost
                            ),
                        ));
                    }
                }
            }
        }

        if let Some(route) = &input.route {
            if let Err(e) = route.validate() {
                warnings.push(PricingWarning::error(format!("route:{}", route.id), e.to_string()));
            }

            if !route.is_active {
                warnings.push(PricingWarning::info(
                    format!("route:{}", route.id),
                    format!("路線 {} 已停用，仍依其運輸段計算運費", route.name),
                ));
            }

            for segment in route.active_segments() {
                if !segment.has_valid_transit_days() {
                    warnings.push(PricingWarning::warning(
                        format!("route:{}", route.id),
                        format!(
                            "運輸段 {} 的預估天數 {}-{} 顛倒",
                            segment.kind, segment.estimated_days_min, segment.estimated_days_max
                        ),
                    ));
                }
            }
        }

        for warning in &warnings {
            tracing::warn!("{}: {}", warning.subject, warning.message);
        }

        warnings
    }
}
