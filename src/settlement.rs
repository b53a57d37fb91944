use tracing::{debug, warn};

use crate::balance::compute_balances;
use crate::schemas::{Expense, Participant, ParticipantId, Settlement};

/// Upper bound on matching rounds, so drifting floating-point balances can't
/// keep the loop alive.
pub const MAX_ITERATIONS: usize = 100;

/// Residual balances smaller than this, in currency units, count as settled.
pub const TOLERANCE: f64 = 1.0;

#[derive(Clone, Debug)]
struct PersonalBalance<'a> {
    id: &'a ParticipantId,
    balance: f64,
}

/// Computes the transfers that bring every participant to the equal share.
///
/// Greedy: each round pays as much as possible from the largest debtor to the
/// largest creditor, so the biggest imbalances are resolved first. The result
/// is usually short but not guaranteed minimal. Stops once every balance is
/// within [`TOLERANCE`] of zero, or after [`MAX_ITERATIONS`] rounds.
///
/// Amounts are not validated; non-finite input yields meaningless transfers.
pub fn compute_settlements(participants: &[Participant], expenses: &[Expense]) -> Vec<Settlement> {
    let mut people: Vec<PersonalBalance> = compute_balances(participants, expenses)
        .into_iter()
        .zip(participants)
        .map(|(balance, participant)| PersonalBalance {
            id: &participant.id,
            balance: balance.balance,
        })
        .collect();
    if people.is_empty() {
        return Vec::new();
    }

    let mut settlements = Vec::new();
    let mut converged = false;

    for _ in 0..MAX_ITERATIONS {
        // Stable, so ties keep the input order
        people.sort_by(|a, b| a.balance.total_cmp(&b.balance));
        let last = people.len() - 1;
        let (debtor, creditor) = (people[0].balance, people[last].balance);

        if debtor.abs() < TOLERANCE && creditor.abs() < TOLERANCE {
            converged = true;
            break;
        }

        let amount = debtor.abs().min(creditor);
        if amount > 0.0 {
            settlements.push(Settlement {
                from_id: people[0].id.clone(),
                to_id: people[last].id.clone(),
                amount,
            });
        }
        people[0].balance += amount;
        people[last].balance -= amount;
    }

    if converged {
        debug!(
            participants = participants.len(),
            expenses = expenses.len(),
            transfers = settlements.len(),
            "settlement computed"
        );
    } else {
        warn!(
            participants = participants.len(),
            transfers = settlements.len(),
            "settlement stopped at the iteration ceiling before converging"
        );
    }

    settlements
}
