//! Payout records for finishing places.

use super::errors::{PayoutError, PayoutResult};
use super::models::{EventPayoutSummary, OwedSummary, PayoutRecord, PayoutSource, PayoutStructure};
use crate::types::BowlerId;
use chrono::{DateTime, Utc};

/// English ordinal for a place: 1st, 2nd, 3rd, 4th, 11th, 21st, ...
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Create unpaid payout records for the finishers
///
/// `placements[0]` finished first. Places without a tier are not paid and
/// tiers without a finisher are left unawarded.
pub fn award_payouts(
    structure: &PayoutStructure,
    placements: &[BowlerId],
    source: PayoutSource,
) -> Vec<PayoutRecord> {
    structure
        .tiers
        .iter()
        .zip(placements)
        .map(|(tier, &bowler_id)| PayoutRecord {
            bowler_id,
            source,
            place: tier.place,
            amount: tier.amount,
            description: format!("{} place", ordinal(tier.place)),
            paid: false,
            paid_at: None,
        })
        .collect()
}

impl PayoutRecord {
    /// Mark the payout handed over
    ///
    /// # Errors
    ///
    /// * `PayoutError::AlreadyPaid` - Payout was marked paid before
    pub fn mark_paid(&self, at: DateTime<Utc>) -> PayoutResult<PayoutRecord> {
        if self.paid {
            return Err(PayoutError::AlreadyPaid {
                bowler_id: self.bowler_id,
                place: self.place,
            });
        }
        Ok(PayoutRecord {
            paid: true,
            paid_at: Some(at),
            ..self.clone()
        })
    }
}

/// One bowler's winnings, paid and still owed
pub fn bowler_owed(records: &[PayoutRecord], bowler_id: BowlerId) -> OwedSummary {
    let (total, paid) = records
        .iter()
        .filter(|r| r.bowler_id == bowler_id)
        .fold((0, 0), |(total, paid), r| {
            (total + r.amount, if r.paid { paid + r.amount } else { paid })
        });

    OwedSummary {
        total,
        paid,
        owed: total - paid,
    }
}

/// Totals over every payout of an event
pub fn event_payout_summary(records: &[PayoutRecord]) -> EventPayoutSummary {
    let total = records.iter().map(|r| r.amount).sum();
    let paid_amount = records.iter().filter(|r| r.paid).map(|r| r.amount).sum();

    EventPayoutSummary {
        total,
        paid_amount,
        pending: total - paid_amount,
        payout_count: records.len(),
    }
}
