//! B2B 報價主計算器

use pricing_core::input::normalize_weight;
use pricing_core::money::percent_of;
use pricing_core::{BreakdownInput, PriceBreakdown, PricingConfig};
use rayon::prelude::*;

use crate::category_fee::CategoryFeeCalculator;
use crate::diagnostics::RuleDiagnostics;
use crate::expenses::ExpenseChain;
use crate::margin::MarginResolver;
use crate::pvp::PvpCalculator;
use crate::rounding::round_currency;
use crate::route_cost::RouteCostCalculator;
use crate::{BatchResult, PricingWarning};

/// B2B 報價計算器
///
/// 純函數式計算：同樣的輸入永遠得到同樣的明細，不會失敗。
#[derive(Debug, Clone, Default)]
pub struct PriceCalculator {
    config: PricingConfig,
}

impl PriceCalculator {
    /// 創建新的報價計算器
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// 獲取配置引用
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// 主報價計算入口
    ///
    /// 步驟順序固定，每一步的結果都是下一步的輸入，調換順序會改變金額。
    pub fn calculate(&self, input: &BreakdownInput) -> PriceBreakdown {
        let factory_cost = input.factory_cost;
        let weight_kg = normalize_weight(input.weight_kg);

        tracing::info!("開始報價計算：成本 {}，重量 {} kg", factory_cost, weight_kg);

        // Step 1-2: 利潤區間與受保護利潤
        let fallback_margin = input
            .profit_margin
            .unwrap_or(self.config.default_profit_margin);
        let margin = MarginResolver::resolve(&input.margin_ranges, factory_cost, fallback_margin);

        // Step 3: 物流
        let logistics = RouteCostCalculator::compute(input.route.as_ref(), weight_kg);

        // Step 4: 類目費
        let category = CategoryFeeCalculator::apply(input.category_rate.as_ref(), factory_cost);
        tracing::debug!(
            "類目費: {} + {} = {}",
            category.fixed,
            category.percentage,
            category.total
        );

        // Step 5-6: 累計金額與動態費用
        let seed = margin
            .subtotal
            .saturating_add(logistics.total_cost)
            .saturating_add(category.total);
        let expenses = ExpenseChain::apply(&input.expenses, seed);

        // Step 7: 平台服務費（只在所有費用之後計算一次）
        let platform_fee_percent = input
            .platform_fee_percent
            .unwrap_or(self.config.platform_fee_percent);
        let platform_fee = percent_of(expenses.running_total, platform_fee_percent);
        tracing::debug!(
            "平台服務費: {} × {}% = {}",
            expenses.running_total,
            platform_fee_percent,
            platform_fee
        );

        // Step 8: B2B 價格
        let b2b_price = expenses.running_total.saturating_add(platform_fee);

        // Step 9: 建議零售價
        let pvp = PvpCalculator::quote(
            &self.config.pvp_brackets,
            self.config.pvp_default_percent,
            b2b_price,
        );
        tracing::debug!("零售價: {} (+{}%)", pvp.suggested_price, pvp.margin_percent);

        // Step 10: 輸出時才四捨五入，且只處理部分欄位
        let breakdown = PriceBreakdown {
            factory_cost,
            weight_kg,
            applied_margin_range: margin.range,
            margin_percent: margin.percent,
            margin_value: round_currency(margin.value),
            subtotal_with_margin: round_currency(margin.subtotal),
            logistics_cost: logistics.total_cost,
            logistics_segments: logistics.per_segment,
            transit_days_min: logistics.total_days_min,
            transit_days_max: logistics.total_days_max,
            category_fixed_fee: category.fixed,
            category_percentage_fee: category.percentage,
            category_total_fee: category.total,
            expenses_cost: expenses.expenses_cost,
            expense_lines: expenses.lines,
            platform_fee_percent,
            platform_fee,
            subtotal_before_fee: expenses.running_total,
            b2b_price: round_currency(b2b_price),
            suggested_pvp: round_currency(pvp.suggested_price),
            pvp_margin_percent: pvp.margin_percent,
            profit_amount: round_currency(pvp.profit),
        };

        tracing::info!(
            "報價完成：B2B {}，建議零售價 {}",
            breakdown.b2b_price,
            breakdown.suggested_pvp
        );

        breakdown
    }

    /// 計算並通知呼叫端
    ///
    /// 回呼只收到唯讀的明細，無法改變回傳結果。
    pub fn calculate_and_notify<F>(&self, input: &BreakdownInput, on_result: F) -> PriceBreakdown
    where
        F: FnOnce(&PriceBreakdown),
    {
        let breakdown = self.calculate(input);
        on_result(&breakdown);
        breakdown
    }

    /// 檢查報價規則
    pub fn inspect(&self, input: &BreakdownInput) -> Vec<PricingWarning> {
        RuleDiagnostics::inspect(input, self.config.warn_on_overlapping_ranges)
    }

    /// 批次報價
    ///
    /// 各筆互相獨立，平行計算；結果與輸入順序相同。
    pub fn calculate_batch(&self, inputs: &[BreakdownInput]) -> BatchResult {
        tracing::info!("開始批次報價：{} 筆", inputs.len());

        let start_time = std::time::Instant::now();

        let breakdowns: Vec<PriceBreakdown> =
            inputs.par_iter().map(|input| self.calculate(input)).collect();

        let warnings: Vec<(usize, PricingWarning)> = inputs
            .par_iter()
            .enumerate()
            .flat_map_iter(|(idx, input)| {
                self.inspect(input)
                    .into_iter()
                    .map(move |warning| (idx, warning))
            })
            .collect();

        let mut result = BatchResult::empty();
        result.breakdowns = breakdowns;
        result.warnings = warnings;
        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!(
            "批次報價完成，耗時 {:?}，警告 {} 筆",
            start_time.elapsed(),
            result.warnings.len()
        );

        result
    }
}
