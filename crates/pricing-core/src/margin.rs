//! 利潤區間模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 依出廠成本分段的利潤率規則
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginRange {
    /// 規則ID
    pub id: Uuid,

    /// 區間下限（含）
    pub min_cost: Decimal,

    /// 區間上限（不含），None 表示無上限
    pub max_cost: Option<Decimal>,

    /// 利潤率（百分比）
    pub margin_percent: Decimal,

    /// 是否啟用
    pub is_active: bool,
}

impl MarginRange {
    /// 創建新的利潤區間
    pub fn new(min_cost: Decimal, max_cost: Option<Decimal>, margin_percent: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            min_cost,
            max_cost,
            margin_percent,
            is_active: true,
        }
    }

    /// 建構器模式：設置為停用
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// 檢查成本是否落在 [min_cost, max_cost) 內
    pub fn contains(&self, cost: Decimal) -> bool {
        self.min_cost <= cost && self.max_cost.map_or(true, |max| cost < max)
    }

    /// 檢查兩個區間是否重疊
    pub fn overlaps(&self, other: &MarginRange) -> bool {
        let self_below_other_max = other.max_cost.map_or(true, |max| self.min_cost < max);
        let other_below_self_max = self.max_cost.map_or(true, |max| other.min_cost < max);
        self_below_other_max && other_below_self_max
    }

    /// 檢查上下限是否顛倒（空區間）
    pub fn is_inverted(&self) -> bool {
        self.max_cost.is_some_and(|max| max <= self.min_cost)
    }
}
