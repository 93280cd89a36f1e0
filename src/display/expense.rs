//! Expense display formatting
//!
//! Formats the expense list as a table, marking the row being edited.

use crate::models::Expense;
use crate::services::BudgetState;

/// Format the expense list as a table
pub fn format_expense_list(state: &BudgetState, symbol: &str, uppercase: bool) -> String {
    if state.is_empty() {
        return "No expenses added yet.\n".to_string();
    }

    let rows: Vec<(String, String, String)> = state
        .expenses()
        .iter()
        .map(|e| {
            (
                e.id.to_string(),
                e.display_title(uppercase),
                e.amount.format_with_symbol(symbol),
            )
        })
        .collect();

    // Calculate column widths
    let id_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(2).max(2);
    let title_width = rows
        .iter()
        .map(|r| r.1.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "  {:<id_width$}  {:<title_width$}  {:>12}\n",
        "ID",
        "Title",
        "Amount",
        id_width = id_width,
        title_width = title_width,
    ));
    output.push_str(&format!(
        "  {:-<id_width$}  {:-<title_width$}  {:->12}\n",
        "",
        "",
        "",
        id_width = id_width,
        title_width = title_width,
    ));

    for (expense, (id, title, amount)) in state.expenses().iter().zip(&rows) {
        let marker = if state.is_editing(expense.id) { "*" } else { " " };
        output.push_str(&format!(
            "{} {:<id_width$}  {:<title_width$}  {:>12}\n",
            marker,
            id,
            title,
            amount,
            id_width = id_width,
            title_width = title_width,
        ));
    }

    let count = state.len();
    output.push_str(&format!(
        "\n{} expense{}",
        count,
        if count == 1 { "" } else { "s" }
    ));
    if let Some(id) = state.editing_id() {
        output.push_str(&format!(", editing {}", id));
    }
    output.push('\n');

    output
}

/// Describe the expense loaded into the form when an edit begins
pub fn format_edit_prompt(expense: &Expense) -> String {
    format!(
        "Editing {}: title \"{}\", amount {}\nSubmit with: add <title> <amount>, or 'cancel'\n",
        expense.id,
        expense.title,
        expense.amount.to_input_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        let state = BudgetState::default();
        assert_eq!(format_expense_list(&state, "$", true), "No expenses added yet.\n");
    }

    #[test]
    fn test_list_in_insertion_order() {
        let mut state = BudgetState::default();
        state.submit_expense("Coffee", "4.50").unwrap();
        state.submit_expense("Rent", "900").unwrap();

        let text = format_expense_list(&state, "$", true);
        let coffee = text.find("COFFEE").unwrap();
        let rent = text.find("RENT").unwrap();
        assert!(coffee < rent);
        assert!(text.contains("$900.00"));
        assert!(text.contains("2 expenses"));
    }

    #[test]
    fn test_list_marks_edited_row() {
        let mut state = BudgetState::default();
        let tea = state.submit_expense("Tea", "2").unwrap();
        state.begin_edit(tea.id).unwrap();

        let text = format_expense_list(&state, "$", false);
        assert!(text.contains("* #1"));
        assert!(text.contains("Tea"));
        assert!(text.contains("editing #1"));
    }

    #[test]
    fn test_edit_prompt() {
        let mut state = BudgetState::default();
        let tea = state.submit_expense("Tea", "2").unwrap();
        let text = format_edit_prompt(&tea);
        assert!(text.starts_with("Editing #1: title \"Tea\", amount 2.00"));
    }
}
