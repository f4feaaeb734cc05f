//! 利潤區間解析與受保護利潤

use pricing_core::MarginRange;
use pricing_core::money::percent_of;
use rust_decimal::Decimal;

/// 利潤解析結果
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMargin {
    /// 命中的區間
    pub range: Option<MarginRange>,
    /// 利潤率（百分比）
    pub percent: Decimal,
    /// 利潤金額
    pub value: Decimal,
    /// 成本 + 利潤
    pub subtotal: Decimal,
}

/// 利潤區間解析器
pub struct MarginResolver;

impl MarginResolver {
    /// 依列表順序找出第一個包含成本的啟用區間
    ///
    /// 區間重疊時結果取決於順序，重疊檢查見 `RuleDiagnostics`。
    pub fn find_range(ranges: &[MarginRange], factory_cost: Decimal) -> Option<&MarginRange> {
        ranges
            .iter()
            .find(|r| r.is_active && r.contains(factory_cost))
    }

    /// 計算受保護利潤
    ///
    /// 只依出廠成本與利潤率計算，不受後續物流、費用影響。
    pub fn resolve(
        ranges: &[MarginRange],
        factory_cost: Decimal,
        fallback_percent: Decimal,
    ) -> ResolvedMargin {
        let range = Self::find_range(ranges, factory_cost).cloned();
        let percent = range
            .as_ref()
            .map(|r| r.margin_percent)
            .unwrap_or(fallback_percent);

        let value = percent_of(factory_cost, percent);

        tracing::debug!(
            "利潤: 成本 {} × {}% = {} ({})",
            factory_cost,
            percent,
            value,
            if range.is_some() { "區間" } else { "預設" }
        );

        ResolvedMargin {
            range,
            percent,
            value,
            subtotal: factory_cost.saturating_add(value),
        }
    }
}
