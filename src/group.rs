use chrono::Utc;
use serde::Deserialize;
use tracing::debug;

use crate::balance::compute_balances;
use crate::error::GroupError;
use crate::schemas::{Balance, Expense, Group, Participant, ParticipantId, Settlement};
use crate::settlement::compute_settlements;

/// Expense as submitted, before it gets an id.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub payer_id: ParticipantId,
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
}

impl Group {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Group {
            id: id.into(),
            name: name.into(),
            participants: vec![],
            expenses: vec![],
            next_sequence: 0,
        }
    }

    // Millis alone collide when two entries land in the same millisecond
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_sequence += 1;
        format!(
            "{prefix}-{}-{}",
            Utc::now().timestamp_millis(),
            self.next_sequence
        )
    }

    pub fn participant(&self, id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn add_participant(&mut self, name: &str) -> Result<Participant, GroupError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GroupError::EmptyName);
        }
        let participant = Participant {
            id: self.next_id("p"),
            name: name.to_string(),
        };
        debug!(group = %self.id, participant = %participant.id, "participant added");
        self.participants.push(participant.clone());
        Ok(participant)
    }

    /// Participants who paid for something stay until those expenses are
    /// removed, so no amount is ever left without a payer.
    pub fn remove_participant(&mut self, id: &str) -> Result<Participant, GroupError> {
        let index = self
            .participants
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| GroupError::UnknownParticipant(id.to_string()))?;
        if self.expenses.iter().any(|e| e.payer_id == id) {
            return Err(GroupError::ParticipantHasExpenses(id.to_string()));
        }
        debug!(group = %self.id, participant = %id, "participant removed");
        Ok(self.participants.remove(index))
    }

    pub fn add_expense(&mut self, new_expense: NewExpense) -> Result<Expense, GroupError> {
        if self.participants.len() < 2 {
            return Err(GroupError::NotEnoughParticipants);
        }
        if !new_expense.amount.is_finite() || new_expense.amount <= 0.0 {
            return Err(GroupError::InvalidAmount(new_expense.amount));
        }
        if self.participant(&new_expense.payer_id).is_none() {
            return Err(GroupError::UnknownParticipant(new_expense.payer_id));
        }

        let description = new_expense
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        let expense = Expense {
            id: self.next_id("e"),
            payer_id: new_expense.payer_id,
            amount: new_expense.amount,
            description,
        };
        debug!(group = %self.id, expense = %expense.id, amount = expense.amount, "expense added");
        self.expenses.push(expense.clone());
        Ok(expense)
    }

    pub fn remove_expense(&mut self, id: &str) -> Result<Expense, GroupError> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| GroupError::UnknownExpense(id.to_string()))?;
        Ok(self.expenses.remove(index))
    }

    pub fn reset(&mut self) {
        self.participants.clear();
        self.expenses.clear();
    }

    pub fn balances(&self) -> Vec<Balance> {
        compute_balances(&self.participants, &self.expenses)
    }

    pub fn settlements(&self) -> Vec<Settlement> {
        compute_settlements(&self.participants, &self.expenses)
    }
}
