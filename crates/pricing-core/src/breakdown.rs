//! 報價明細（計算結果，不持久化）

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::margin::MarginRange;
use crate::segment::SegmentKind;

/// 單一運輸段的運費
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentCost {
    pub kind: SegmentKind,
    pub label: String,
    pub cost: Decimal,
    pub days_min: u32,
    pub days_max: u32,
}

/// 路線運費彙總
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteCost {
    /// 各啟用段運費
    pub per_segment: Vec<SegmentCost>,

    /// 運費合計
    pub total_cost: Decimal,

    /// 最短運輸天數（各段相加）
    pub total_days_min: u32,

    /// 最長運輸天數（各段相加）
    pub total_days_max: u32,
}

impl RouteCost {
    /// 空結果（沒有路線或沒有啟用段）
    pub fn empty() -> Self {
        Self::default()
    }

    /// 依出貨日期推算到貨區間（超出日期範圍時為 `NaiveDate::MAX`）
    pub fn delivery_window(&self, ship_date: NaiveDate) -> (NaiveDate, NaiveDate) {
        let arrive = |days: u32| {
            ship_date
                .checked_add_signed(Duration::days(i64::from(days)))
                .unwrap_or(NaiveDate::MAX)
        };
        (arrive(self.total_days_min), arrive(self.total_days_max))
    }
}

/// 單筆動態費用的帶號金額
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseLine {
    pub expense_id: Uuid,
    pub name: String,
    pub amount: Decimal,
}

/// B2B 報價明細
///
/// 帶 `rounded` 註記的欄位已四捨五入到 2 位小數，其餘欄位保持原始精度。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// 出廠成本
    pub factory_cost: Decimal,

    /// 計算使用的重量（公斤）
    pub weight_kg: Decimal,

    /// 命中的利潤區間（None 表示使用預設利潤率）
    pub applied_margin_range: Option<MarginRange>,

    /// 使用的利潤率（百分比）
    pub margin_percent: Decimal,

    /// 利潤金額（rounded）
    pub margin_value: Decimal,

    /// 成本 + 利潤，受保護的利潤底線（rounded）
    pub subtotal_with_margin: Decimal,

    /// 物流費
    pub logistics_cost: Decimal,

    /// 物流明細
    pub logistics_segments: Vec<SegmentCost>,

    /// 最短運輸天數
    pub transit_days_min: u32,

    /// 最長運輸天數
    pub transit_days_max: u32,

    /// 類目固定費
    pub category_fixed_fee: Decimal,

    /// 類目百分比費
    pub category_percentage_fee: Decimal,

    /// 類目費合計
    pub category_total_fee: Decimal,

    /// 動態費用合計（帶號）
    pub expenses_cost: Decimal,

    /// 動態費用明細
    pub expense_lines: Vec<ExpenseLine>,

    /// 平台服務費率（百分比）
    pub platform_fee_percent: Decimal,

    /// 平台服務費
    pub platform_fee: Decimal,

    /// 平台服務費前小計
    pub subtotal_before_fee: Decimal,

    /// 最終 B2B 價格（rounded）
    pub b2b_price: Decimal,

    /// 建議零售價（rounded）
    pub suggested_pvp: Decimal,

    /// 零售利潤率（百分比）
    pub pvp_margin_percent: Decimal,

    /// 零售利潤金額（rounded）
    pub profit_amount: Decimal,
}

impl PriceBreakdown {
    /// 是否使用了利潤區間規則（否則為預設利潤率）
    pub fn used_margin_range(&self) -> bool {
        self.applied_margin_range.is_some()
    }
}
