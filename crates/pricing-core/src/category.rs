//! 類目費率模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 類目費率（固定費 + 出廠成本百分比）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRate {
    /// 類目ID
    pub category_id: String,

    /// 固定費
    pub fixed_fee: Decimal,

    /// 百分比費率（以出廠成本計）
    pub percentage_fee: Decimal,

    /// 是否啟用
    pub is_active: bool,
}

impl CategoryRate {
    /// 創建新的類目費率
    pub fn new(category_id: String, fixed_fee: Decimal, percentage_fee: Decimal) -> Self {
        Self {
            category_id,
            fixed_fee,
            percentage_fee,
            is_active: true,
        }
    }

    /// 建構器模式：設置為停用
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}
