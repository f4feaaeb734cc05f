//! 報價輸入與寬鬆解析
//!
//! 使用者輸入中途常是不完整的數字，解析失敗時一律退回安全預設值
//! （成本 → 0、重量 → 1），不產生錯誤。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::category::CategoryRate;
use crate::expense::DynamicExpense;
use crate::margin::MarginRange;
use crate::route::Route;

/// 解析小數，失敗回傳 None
fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// 解析成本，失敗時為 0
pub fn parse_cost(raw: &str) -> Decimal {
    parse_decimal(raw).unwrap_or(Decimal::ZERO)
}

/// 解析重量，失敗或非正數時為 1
pub fn parse_weight(raw: &str) -> Decimal {
    normalize_weight(parse_decimal(raw).unwrap_or(Decimal::ONE))
}

/// 解析百分比，失敗時為 0
pub fn parse_percent(raw: &str) -> Decimal {
    parse_decimal(raw).unwrap_or(Decimal::ZERO)
}

/// 非正數重量視為 1 公斤
pub fn normalize_weight(weight_kg: Decimal) -> Decimal {
    if weight_kg > Decimal::ZERO {
        weight_kg
    } else {
        Decimal::ONE
    }
}

/// 報價計算輸入
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BreakdownInput {
    /// 出廠成本
    pub factory_cost: Decimal,

    /// 重量（公斤）
    pub weight_kg: Decimal,

    /// 運輸路線
    pub route: Option<Route>,

    /// 類目費率
    pub category_rate: Option<CategoryRate>,

    /// 動態費用（依序套用）
    #[serde(default)]
    pub expenses: Vec<DynamicExpense>,

    /// 利潤區間（依序比對，第一個命中者生效）
    #[serde(default)]
    pub margin_ranges: Vec<MarginRange>,

    /// 覆寫預設利潤率
    pub profit_margin: Option<Decimal>,

    /// 覆寫平台服務費率
    pub platform_fee_percent: Option<Decimal>,
}

impl BreakdownInput {
    /// 創建新的報價輸入
    pub fn new(factory_cost: Decimal, weight_kg: Decimal) -> Self {
        Self {
            factory_cost,
            weight_kg,
            ..Self::default()
        }
    }

    /// 建構器模式：設置路線
    pub fn with_route(mut self, route: Route) -> Self {
        self.route = Some(route);
        self
    }

    /// 建構器模式：設置類目費率
    pub fn with_category_rate(mut self, rate: CategoryRate) -> Self {
        self.category_rate = Some(rate);
        self
    }

    /// 建構器模式：設置動態費用
    pub fn with_expenses(mut self, expenses: Vec<DynamicExpense>) -> Self {
        self.expenses = expenses;
        self
    }

    /// 建構器模式：設置利潤區間
    pub fn with_margin_ranges(mut self, ranges: Vec<MarginRange>) -> Self {
        self.margin_ranges = ranges;
        self
    }

    /// 建構器模式：覆寫預設利潤率
    pub fn with_profit_margin(mut self, percent: Decimal) -> Self {
        self.profit_margin = Some(percent);
        self
    }

    /// 建構器模式：覆寫平台服務費率
    pub fn with_platform_fee_percent(mut self, percent: Decimal) -> Self {
        self.platform_fee_percent = Some(percent);
        self
    }
}

/// 表單原始輸入（未解析的字串）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteForm {
    pub factory_cost: String,
    pub weight_kg: String,
    pub profit_margin: String,
    pub platform_fee_percent: String,
}

impl QuoteForm {
    /// 轉換為計算輸入
    ///
    /// 空白的利潤率／服務費欄位表示沿用引擎配置。
    pub fn to_input(&self) -> BreakdownInput {
        let mut input = BreakdownInput::new(
            parse_cost(&self.factory_cost),
            parse_weight(&self.weight_kg),
        );

        if !self.profit_margin.trim().is_empty() {
            input.profit_margin = Some(parse_percent(&self.profit_margin));
        }
        if !self.platform_fee_percent.trim().is_empty() {
            input.platform_fee_percent = Some(parse_percent(&self.platform_fee_percent));
        }

        input
    }
}
