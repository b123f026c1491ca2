//! Event-level money totals.

use super::errors::{PayoutError, PayoutResult};
use super::models::EventFinancials;
use crate::types::Money;

/// Collected money, house fee and prize pool for an event
///
/// The prize pool is what remains after lineage and expenses, never below
/// zero. The house keeps the lineage as profit.
///
/// # Errors
///
/// * `PayoutError::InvalidAmount` - A negative fee or expense
pub fn event_financials(
    entrants: usize,
    entry_fee: Money,
    lineage_per_entry: Money,
    other_expenses: Money,
) -> PayoutResult<EventFinancials> {
    for amount in [entry_fee, lineage_per_entry, other_expenses] {
        if amount < 0 {
            return Err(PayoutError::InvalidAmount(amount));
        }
    }

    let entrants = entrants as Money;
    let total_collected = entrants * entry_fee;
    let lineage = entrants * lineage_per_entry;

    Ok(EventFinancials {
        total_collected,
        lineage,
        prize_pool: (total_collected - lineage - other_expenses).max(0),
        expenses: other_expenses,
        profit: lineage,
    })
}
