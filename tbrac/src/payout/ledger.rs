//! Append-only money ledger.

use super::awards::ordinal;
use super::errors::{PayoutError, PayoutResult};
use super::models::{
    EntrantBalance, LedgerSummary, MoneyTransaction, NewTransaction, PayoutRecord, PayoutSource,
    RefundResult, TransactionId, TransactionKind,
};
use crate::types::{BowlerId, Money};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered, append-only list of money movements.
///
/// Totals are folds over the transactions and are never stored, so they
/// cannot drift from the history. Corrections are new offsetting
/// transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyLedger {
    transactions: Vec<MoneyTransaction>,
}

impl MoneyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded transactions, oldest first
    pub fn transactions(&self) -> &[MoneyTransaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn next_id(&self) -> TransactionId {
        self.transactions.last().map_or(1, |t| t.id + 1)
    }

    /// Append a transaction, returning the new ledger
    ///
    /// # Arguments
    ///
    /// * `transaction` - Transaction to record
    ///
    /// # Returns
    ///
    /// * `PayoutResult<MoneyLedger>` - Ledger with the transaction appended
    ///
    /// # Errors
    ///
    /// * `PayoutError::InvalidAmount` - Amount is zero or negative
    pub fn add_transaction(&self, transaction: NewTransaction) -> PayoutResult<MoneyLedger> {
        if transaction.amount <= 0 {
            return Err(PayoutError::InvalidAmount(transaction.amount));
        }

        let mut ledger = self.clone();
        ledger.transactions.push(MoneyTransaction {
            id: self.next_id(),
            bowler_id: transaction.bowler_id,
            kind: transaction.kind,
            amount: transaction.amount,
            description: transaction.description,
            source: transaction.source,
            created_at: transaction.created_at,
        });
        Ok(ledger)
    }

    /// Money received from entries
    pub fn total_in(&self) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.kind.is_inflow())
            .map(|t| t.amount)
            .sum()
    }

    /// Money paid out as payouts or refunds
    pub fn total_out(&self) -> Money {
        self.transactions
            .iter()
            .filter(|t| !t.kind.is_inflow())
            .map(|t| t.amount)
            .sum()
    }

    pub fn balance(&self) -> Money {
        self.total_in() - self.total_out()
    }

    pub fn summary(&self) -> LedgerSummary {
        let mut summary = LedgerSummary::default();
        for t in &self.transactions {
            match t.kind {
                TransactionKind::Entry => {
                    summary.total_in += t.amount;
                    summary.entries += 1;
                }
                TransactionKind::Payout => {
                    summary.total_out += t.amount;
                    summary.payouts += 1;
                }
                TransactionKind::Refund => {
                    summary.total_out += t.amount;
                    summary.refunds += 1;
                }
            }
        }
        summary.balance = summary.total_in - summary.total_out;
        summary
    }

    /// Paid, received and net per bowler
    pub fn by_entrant(&self) -> BTreeMap<BowlerId, EntrantBalance> {
        let mut balances: BTreeMap<BowlerId, EntrantBalance> = BTreeMap::new();
        for t in &self.transactions {
            let balance = balances.entry(t.bowler_id).or_default();
            if t.kind.is_inflow() {
                balance.paid += t.amount;
                balance.net -= t.amount;
            } else {
                balance.received += t.amount;
                balance.net += t.amount;
            }
        }
        balances
    }

    /// Balance for one bowler; zero if they never appear
    pub fn entrant_summary(&self, bowler_id: BowlerId) -> EntrantBalance {
        self.by_entrant()
            .remove(&bowler_id)
            .unwrap_or_default()
    }

    /// Record a refund transaction for every non-zero refund
    pub fn record_refunds(
        &self,
        refunds: &[RefundResult],
        source: Option<PayoutSource>,
        at: DateTime<Utc>,
    ) -> PayoutResult<MoneyLedger> {
        refunds
            .iter()
            .filter(|r| r.refund_amount > 0)
            .try_fold(self.clone(), |ledger, refund| {
                let brackets = refund.brackets_paid - refund.brackets_entered;
                let mut transaction = NewTransaction::new(
                    refund.bowler_id,
                    TransactionKind::Refund,
                    refund.refund_amount,
                    format!("Refund for {} unfilled bracket entries", brackets),
                    at,
                );
                transaction.source = source;
                ledger.add_transaction(transaction)
            })
    }

    /// Record a payout transaction for every payout record with money on it
    pub fn record_payouts(&self, records: &[PayoutRecord], at: DateTime<Utc>) -> PayoutResult<MoneyLedger> {
        records
            .iter()
            .filter(|r| r.amount > 0)
            .try_fold(self.clone(), |ledger, record| {
                ledger.add_transaction(
                    NewTransaction::new(
                        record.bowler_id,
                        TransactionKind::Payout,
                        record.amount,
                        format!("{} place, {}", ordinal(record.place), record.source),
                        at,
                    )
                    .with_source(record.source),
                )
            })
    }
}
