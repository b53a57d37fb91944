use serde::{Deserialize, Serialize};

pub type ParticipantId = String;
pub type ExpenseId = String;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,
    pub payer_id: ParticipantId,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// What a participant paid and how far that is from the equal share.
/// Positive means the group owes them money.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Balance {
    pub participant: Participant,
    pub paid: f64,
    pub balance: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    pub from_id: ParticipantId,
    pub to_id: ParticipantId,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub participants: Vec<Participant>,
    pub expenses: Vec<Expense>,
    #[serde(skip)]
    pub(crate) next_sequence: u64,
}
