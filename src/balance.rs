use std::collections::HashMap;

use crate::schemas::{Balance, Expense, Participant};

/// Computes every participant's balance against the equal share of the total
/// spent, in participant order.
///
/// Expenses whose payer is not among `participants` still count towards the
/// total but are credited to nobody.
pub fn compute_balances(participants: &[Participant], expenses: &[Expense]) -> Vec<Balance> {
    if participants.is_empty() {
        return Vec::new();
    }

    let mut paid_by: HashMap<&str, f64> = HashMap::with_capacity(participants.len());
    let mut total_spent = 0.0;
    for expense in expenses {
        total_spent += expense.amount;
        paid_by
            .entry(expense.payer_id.as_str())
            .and_modify(|v| *v += expense.amount)
            .or_insert(expense.amount);
    }
    let average = total_spent / participants.len() as f64;

    participants
        .iter()
        .map(|participant| {
            let paid = paid_by.get(participant.id.as_str()).copied().unwrap_or(0.0);
            Balance {
                participant: participant.clone(),
                paid,
                balance: paid - average,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn participant(id: &str) -> Participant {
        Participant {
            id: id.to_string(),
            name: id.to_lowercase(),
        }
    }

    fn expense(payer: &str, amount: f64) -> Expense {
        Expense {
            id: format!("e-{payer}-{amount}"),
            payer_id: payer.to_string(),
            amount,
            description: None,
        }
    }

    #[rstest]
    #[case::nothing_spent(&["A", "B"], vec![], vec![(0.0, 0.0), (0.0, 0.0)])]
    #[case::single_payer(&["A", "B"], vec![expense("A", 100.0)], vec![(100.0, 50.0), (0.0, -50.0)])]
    #[case::repeated_payer(
        &["A", "B", "C"],
        vec![expense("A", 30.0), expense("A", 60.0)],
        vec![(90.0, 60.0), (0.0, -30.0), (0.0, -30.0)]
    )]
    #[case::everyone_paid_the_same(
        &["A", "B"],
        vec![expense("A", 100.0), expense("B", 100.0)],
        vec![(100.0, 0.0), (100.0, 0.0)]
    )]
    #[case::unknown_payer_counts_towards_total(
        &["A", "B"],
        vec![expense("A", 40.0), expense("Z", 60.0)],
        vec![(40.0, -10.0), (0.0, -50.0)]
    )]
    fn balance_cases(
        #[case] ids: &[&str],
        #[case] expenses: Vec<Expense>,
        #[case] expected: Vec<(f64, f64)>,
    ) {
        let participants: Vec<Participant> = ids.iter().map(|id| participant(id)).collect();

        let balances = compute_balances(&participants, &expenses);

        let actual: Vec<(f64, f64)> = balances.iter().map(|b| (b.paid, b.balance)).collect();
        assert_eq!(actual, expected);
        for (balance, participant) in balances.iter().zip(&participants) {
            assert_eq!(&balance.participant, participant);
        }
    }

    #[test]
    fn no_participants_means_no_balances() {
        assert!(compute_balances(&[], &[expense("A", 10.0)]).is_empty());
    }

    proptest! {
        #[test]
        fn balances_sum_to_zero(
            member_count in 1usize..=8,
            amounts in prop::collection::vec(1u32..=100_000, 0..=40),
            payer_indexes in prop::collection::vec(0usize..=7, 0..=40),
        ) {
            let ids = ["A", "B", "C", "D", "E", "F", "G", "H"];
            let participants: Vec<Participant> =
                ids[..member_count].iter().map(|id| participant(id)).collect();
            let expenses: Vec<Expense> = amounts
                .iter()
                .enumerate()
                .map(|(idx, &amount)| {
                    let payer = payer_indexes.get(idx).copied().unwrap_or(0) % member_count;
                    expense(ids[payer], f64::from(amount) / 100.0)
                })
                .collect();

            let total: f64 = compute_balances(&participants, &expenses)
                .iter()
                .map(|b| b.balance)
                .sum();

            prop_assert!(total.abs() < 1e-6, "balances summed to {}", total);
        }
    }
}
