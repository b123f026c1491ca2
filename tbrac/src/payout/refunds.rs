//! Refunds for brackets that did not fill.

use super::errors::{PayoutError, PayoutResult};
use super::models::{BracketPurchase, RefundResult};
use crate::bracket::BracketSize;
use crate::types::Money;
use log::{debug, error};

/// Refund bracket entries that cannot be placed in a full bracket
///
/// `floor(actual_entries / size)` brackets run; the entries beyond them are
/// refunded. Refunds are allocated walking `purchases` in the order given,
/// each bowler giving back up to every bracket they paid for, until the extra
/// count is used up.
///
/// # Arguments
///
/// * `purchases` - Bracket purchases per bowler
/// * `entry_fee` - Fee per bracket entry
/// * `size` - Entrants needed to fill one bracket
/// * `actual_entries` - Bracket entries sold
///
/// # Errors
///
/// * `PayoutError::InvalidAmount` - Negative entry fee
/// * `PayoutError::RefundShortfall` - Purchases account for fewer entries than
///   `actual_entries`; the caller's bookkeeping is inconsistent
pub fn calculate_bracket_refunds(
    purchases: &[BracketPurchase],
    entry_fee: Money,
    size: BracketSize,
    actual_entries: usize,
) -> PayoutResult<Vec<RefundResult>> {
    if entry_fee < 0 {
        return Err(PayoutError::InvalidAmount(entry_fee));
    }

    let per_bracket = size.entrants();
    let complete_brackets = actual_entries / per_bracket;
    let mut remaining = (actual_entries - complete_brackets * per_bracket) as u32;

    debug!(
        "{} entries for {}-bowler brackets: {} complete, {} to refund",
        actual_entries, per_bracket, complete_brackets, remaining
    );

    let refunds: Vec<RefundResult> = purchases
        .iter()
        .map(|purchase| {
            let refunded = purchase.brackets_paid.min(remaining);
            remaining -= refunded;
            RefundResult {
                bowler_id: purchase.bowler_id,
                brackets_paid: purchase.brackets_paid,
                brackets_entered: purchase.brackets_paid - refunded,
                refund_amount: Money::from(refunded) * entry_fee,
            }
        })
        .collect();

    if remaining > 0 {
        error!(
            "Refund allocation exhausted entries with {} bracket(s) unrefunded",
            remaining
        );
        return Err(PayoutError::RefundShortfall { remaining });
    }

    Ok(refunds)
}

/// Total money refunded
pub fn total_refunds(refunds: &[RefundResult]) -> Money {
    refunds.iter().map(|r| r.refund_amount).sum()
}
