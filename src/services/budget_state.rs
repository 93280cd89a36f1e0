//! Budget state
//!
//! Owns the session's budget and expense list and enforces the rules for
//! setting the budget and adding, editing, and deleting expenses. Totals are
//! derived on demand and never stored.

use tracing::{debug, warn};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{AmountPolicy, Expense, ExpenseId, Money};

use super::summary::BudgetSummary;

/// Whether an expense is currently being revised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Idle,
    Editing(ExpenseId),
}

impl EditMode {
    /// The id being edited, if any
    pub fn id(&self) -> Option<ExpenseId> {
        match self {
            Self::Idle => None,
            Self::Editing(id) => Some(*id),
        }
    }
}

/// Result of a delete request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeleteOutcome {
    /// The expense that was removed, if the id existed
    pub removed: Option<Expense>,
    /// True when the removed expense was being edited; callers should clear
    /// their edit input fields
    pub edit_cancelled: bool,
}

/// The in-memory budget for one session
#[derive(Debug, Clone)]
pub struct BudgetState {
    budget: Money,
    expenses: Vec<Expense>,
    edit_mode: EditMode,
    policy: AmountPolicy,
    next_id: ExpenseId,
}

impl BudgetState {
    /// Create an empty state with a zero budget
    pub fn new(policy: AmountPolicy) -> Self {
        Self {
            budget: Money::zero(),
            expenses: Vec::new(),
            edit_mode: EditMode::Idle,
            policy,
            next_id: ExpenseId::new(1),
        }
    }

    /// The validation policy applied to amounts
    pub fn policy(&self) -> AmountPolicy {
        self.policy
    }

    /// Current budget
    pub fn budget(&self) -> Money {
        self.budget
    }

    /// Expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of recorded expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// True when no expenses are recorded
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Look up an expense by id
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Position of an expense in the list
    pub fn position(&self, id: ExpenseId) -> Option<usize> {
        self.expenses.iter().position(|e| e.id == id)
    }

    /// Current edit mode
    pub fn edit_mode(&self) -> EditMode {
        self.edit_mode
    }

    /// The id being edited, if any
    pub fn editing_id(&self) -> Option<ExpenseId> {
        self.edit_mode.id()
    }

    /// Check whether a specific expense is being edited
    pub fn is_editing(&self, id: ExpenseId) -> bool {
        self.edit_mode == EditMode::Editing(id)
    }

    /// Sum of all expense amounts
    pub fn total_expenses(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Budget minus total expenses; may be negative
    pub fn balance(&self) -> Money {
        self.budget - self.total_expenses()
    }

    /// Snapshot of the derived totals
    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary::new(self.budget, self.total_expenses(), self.expenses.len())
    }

    /// Replace the budget with the parsed input
    ///
    /// The previous budget is overwritten, never accumulated. On failure the
    /// budget is left untouched.
    pub fn set_budget(&mut self, input: &str) -> TrackerResult<Money> {
        let amount = Money::parse(input).map_err(|e| {
            warn!(input, error = %e, "rejected budget input");
            TrackerError::InvalidAmount(format!("Budget {}", e))
        })?;

        if !self.policy.accepts(amount) {
            warn!(%amount, policy = %self.policy, "rejected budget amount");
            return Err(TrackerError::InvalidAmount(format!(
                "Budget {} (got {})",
                self.policy.requirement(),
                amount
            )));
        }

        self.budget = amount;
        debug!(budget = %amount, "budget set");
        Ok(amount)
    }

    /// Add a new expense, or update `editing` in place when given
    ///
    /// An update keeps the expense's id and position. A successful update of
    /// the expense in the edit slot returns the state to [`EditMode::Idle`].
    pub fn add_or_update_expense(
        &mut self,
        title: &str,
        amount_input: &str,
        editing: Option<ExpenseId>,
    ) -> TrackerResult<Expense> {
        let amount = self.parse_expense(title, amount_input)?;

        match editing {
            Some(id) => self.update_expense(id, title, amount),
            None => self.push_expense(title, amount),
        }
    }

    /// Submit the expense form: updates the expense being edited, otherwise adds
    pub fn submit_expense(&mut self, title: &str, amount_input: &str) -> TrackerResult<Expense> {
        self.add_or_update_expense(title, amount_input, self.editing_id())
    }

    /// Remove an expense; an unknown id is a no-op
    pub fn delete_expense(&mut self, id: ExpenseId) -> DeleteOutcome {
        let Some(index) = self.position(id) else {
            debug!(%id, "delete ignored, expense not present");
            return DeleteOutcome::default();
        };

        let removed = self.expenses.remove(index);
        let edit_cancelled = self.is_editing(id);
        if edit_cancelled {
            self.edit_mode = EditMode::Idle;
        }

        debug!(%id, edit_cancelled, "expense deleted");
        DeleteOutcome {
            removed: Some(removed),
            edit_cancelled,
        }
    }

    /// Enter edit mode for an expense, returning it for pre-filling inputs
    ///
    /// Replaces any edit already in progress.
    pub fn begin_edit(&mut self, id: ExpenseId) -> TrackerResult<Expense> {
        let expense = self
            .get(id)
            .cloned()
            .ok_or_else(|| TrackerError::expense_not_found(id.to_string()))?;

        if let Some(previous) = self.editing_id().filter(|prev| *prev != id) {
            debug!(%previous, "previous edit replaced");
        }
        self.edit_mode = EditMode::Editing(id);
        debug!(%id, "edit started");
        Ok(expense)
    }

    /// Leave edit mode; the expense list is untouched
    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.editing_id() {
            debug!(%id, "edit cancelled");
        }
        self.edit_mode = EditMode::Idle;
    }

    fn parse_expense(&self, title: &str, amount_input: &str) -> TrackerResult<Money> {
        let amount = Money::parse(amount_input).map_err(|e| {
            warn!(input = amount_input, error = %e, "rejected expense amount input");
            if title.trim().is_empty() {
                TrackerError::InvalidExpense("Expense title cannot be empty".into())
            } else {
                TrackerError::InvalidExpense(format!("Expense amount {}", e))
            }
        })?;

        Expense::validate_fields(title, amount, self.policy).map_err(|e| {
            warn!(error = %e, "rejected expense");
            TrackerError::InvalidExpense(e.to_string())
        })?;

        Ok(amount)
    }

    /// Total expenses with `amount` standing in for the expense at
    /// `replacing`, or `None` when it does not fit in a `Money`
    fn checked_total_with(&self, amount: Money, replacing: Option<usize>) -> Option<Money> {
        self.expenses
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != replacing)
            .try_fold(amount, |total, (_, e)| total.checked_add(e.amount))
    }

    fn ensure_total_fits(&self, amount: Money, replacing: Option<usize>) -> TrackerResult<()> {
        if self.checked_total_with(amount, replacing).is_none() {
            warn!(%amount, "rejected expense, total would overflow");
            return Err(TrackerError::InvalidExpense(format!(
                "Expense amount {} is too large for the running total",
                amount
            )));
        }
        Ok(())
    }

    fn push_expense(&mut self, title: &str, amount: Money) -> TrackerResult<Expense> {
        self.ensure_total_fits(amount, None)?;

        let id = self.next_id;
        self.next_id = id.next();

        let expense = Expense::new(id, title, amount);
        self.expenses.push(expense.clone());
        debug!(%id, amount = %expense.amount, "expense added");
        Ok(expense)
    }

    fn update_expense(
        &mut self,
        id: ExpenseId,
        title: &str,
        amount: Money,
    ) -> TrackerResult<Expense> {
        // The edit slot never holds a missing id: every removal clears it
        let Some(index) = self.position(id) else {
            warn!(%id, "update target does not exist");
            return Err(TrackerError::expense_not_found(id.to_string()));
        };
        self.ensure_total_fits(amount, Some(index))?;

        let expense = &mut self.expenses[index];
        expense.revise(title, amount);
        let updated = expense.clone();

        if self.is_editing(id) {
            self.edit_mode = EditMode::Idle;
        }
        debug!(%id, amount = %updated.amount, "expense updated");
        Ok(updated)
    }
}

impl Default for BudgetState {
    fn default() -> Self {
        Self::new(AmountPolicy::default())
    }
}
