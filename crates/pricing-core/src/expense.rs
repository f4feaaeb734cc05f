//! 動態費用模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::percent_of;

/// 費用計算方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseKind {
    /// 固定金額
    Fixed,
    /// 當前累計金額的百分比
    PercentOfRunningTotal,
}

/// 費用方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseOperation {
    /// 加價
    Add,
    /// 扣減
    Subtract,
}

/// 動態費用規則
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynamicExpense {
    /// 規則ID
    pub id: Uuid,

    /// 顯示名稱
    pub name: String,

    /// 計算方式
    pub kind: ExpenseKind,

    /// 金額或百分比
    pub amount: Decimal,

    /// 加減方向
    pub operation: ExpenseOperation,

    /// 是否啟用
    pub is_active: bool,
}

impl DynamicExpense {
    /// 創建固定金額費用
    pub fn fixed(name: String, amount: Decimal) -> Self {
        Self::new(name, ExpenseKind::Fixed, amount)
    }

    /// 創建累計百分比費用
    pub fn percent(name: String, percent: Decimal) -> Self {
        Self::new(name, ExpenseKind::PercentOfRunningTotal, percent)
    }

    fn new(name: String, kind: ExpenseKind, amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            kind,
            amount,
            operation: ExpenseOperation::Add,
            is_active: true,
        }
    }

    /// 建構器模式：設置為扣減
    pub fn subtract(mut self) -> Self {
        self.operation = ExpenseOperation::Subtract;
        self
    }

    /// 建構器模式：設置為停用
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// 以當前累計金額計算帶正負號的費用
    pub fn signed_amount(&self, running_total: Decimal) -> Decimal {
        let raw = match self.kind {
            ExpenseKind::Fixed => self.amount,
            ExpenseKind::PercentOfRunningTotal => percent_of(running_total, self.amount),
        };

        match self.operation {
            ExpenseOperation::Add => raw,
            ExpenseOperation::Subtract => -raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fixed_amount_ignores_running_total() {
        let expense = DynamicExpense::fixed("Packaging".to_string(), dec!(2.5));
        assert_eq!(expense.signed_amount(dec!(1000)), dec!(2.5));
    }

    #[test]
    fn test_percent_of_running_total() {
        let expense = DynamicExpense::percent("Insurance".to_string(), dec!(10));
        assert_eq!(expense.signed_amount(dec!(250)), dec!(25));
    }

    #[test]
    fn test_subtract_negates() {
        let expense = DynamicExpense::fixed("Promo".to_string(), dec!(5)).subtract();
        assert_eq!(expense.operation, ExpenseOperation::Subtract);
        assert_eq!(expense.signed_amount(dec!(100)), dec!(-5));
    }

    #[test]
    fn test_percent_of_huge_total_saturates() {
        let expense = DynamicExpense::percent("Surcharge".to_string(), Decimal::MAX).subtract();
        assert_eq!(expense.signed_amount(Decimal::MAX), Decimal::MIN);
    }
}
