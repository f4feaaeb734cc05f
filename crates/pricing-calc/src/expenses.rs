//! 動態費用鏈

use pricing_core::{DynamicExpense, ExpenseLine};
use rust_decimal::Decimal;

/// 費用鏈套用結果
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseOutcome {
    /// 套用後的累計金額
    pub running_total: Decimal,
    /// 帶號費用合計
    pub expenses_cost: Decimal,
    /// 各筆費用
    pub lines: Vec<ExpenseLine>,
}

/// 動態費用鏈
pub struct ExpenseChain;

impl ExpenseChain {
    /// 依序套用啟用的費用
    ///
    /// 百分比費用以「前面費用已累加後」的金額為基數，而非起始小計。
    pub fn apply(expenses: &[DynamicExpense], seed: Decimal) -> ExpenseOutcome {
        let mut running_total = seed;
        let mut expenses_cost = Decimal::ZERO;
        let mut lines = Vec::new();

        for expense in expenses.iter().filter(|e| e.is_active) {
            let amount = expense.signed_amount(running_total);

            running_total = running_total.saturating_add(amount);
            expenses_cost = expenses_cost.saturating_add(amount);

            tracing::debug!("費用 {}: {} → 累計 {}", expense.name, amount, running_total);

            lines.push(ExpenseLine {
                expense_id: expense.id,
                name: expense.name.clone(),
                amount,
            });
        }

        ExpenseOutcome {
            running_total,
            expenses_cost,
            lines,
        }
    }
}
