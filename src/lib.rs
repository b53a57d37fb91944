pub mod api;
pub mod balance;
pub mod config;
pub mod error;
pub mod group;
pub mod logging;
pub mod schemas;
pub mod settlement;

pub use balance::compute_balances;
pub use schemas::{Balance, Expense, Group, Participant, Settlement};
pub use settlement::compute_settlements;
