//! Payout and ledger data models.

use crate::types::{BowlerId, BracketId, Money, SidepotId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ledger transaction ID (sequential within a ledger, starting at 1)
pub type TransactionId = u64;

/// One paid place
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoutTier {
    /// 1 = first place
    pub place: u32,
    pub amount: Money,
    /// Share of the pool this tier was computed from
    pub percentage: f64,
}

/// Prize pool split into paid places
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutStructure {
    pub total_prize_pool: Money,
    pub tiers: Vec<PayoutTier>,
}

impl PayoutStructure {
    /// Amount paid for a place (1-indexed)
    pub fn payout_for_place(&self, place: u32) -> Option<Money> {
        self.tiers.iter().find(|t| t.place == place).map(|t| t.amount)
    }

    /// Sum of every tier
    pub fn distributed(&self) -> Money {
        self.tiers.iter().map(|t| t.amount).sum()
    }
}

/// A bowler's bracket purchases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketPurchase {
    pub bowler_id: BowlerId,
    pub brackets_paid: u32,
}

/// Refund owed to one bowler after brackets are filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundResult {
    pub bowler_id: BowlerId,
    pub brackets_paid: u32,
    /// Brackets the bowler actually plays in
    pub brackets_entered: u32,
    pub refund_amount: Money,
}

/// Money in and out of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFinancials {
    pub total_collected: Money,
    /// House fee
    pub lineage: Money,
    pub prize_pool: Money,
    pub expenses: Money,
    pub profit: Money,
}

/// Ledger transaction kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Money in
    Entry,
    Payout,
    Refund,
}

impl TransactionKind {
    /// Whether the transaction adds to the ledger balance
    pub fn is_inflow(self) -> bool {
        matches!(self, TransactionKind::Entry)
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Entry => write!(f, "entry"),
            TransactionKind::Payout => write!(f, "payout"),
            TransactionKind::Refund => write!(f, "refund"),
        }
    }
}

/// Competition a transaction or payout belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "id")]
pub enum PayoutSource {
    Bracket(BracketId),
    Sidepot(SidepotId),
}

impl std::fmt::Display for PayoutSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayoutSource::Bracket(id) => write!(f, "bracket {}", id),
            PayoutSource::Sidepot(id) => write!(f, "sidepot {}", id),
        }
    }
}

/// Recorded ledger transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyTransaction {
    pub id: TransactionId,
    pub bowler_id: BowlerId,
    pub kind: TransactionKind,
    /// Always positive; `kind` gives the direction
    pub amount: Money,
    pub description: String,
    pub source: Option<PayoutSource>,
    pub created_at: DateTime<Utc>,
}

/// Transaction request, before the ledger assigns an ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub bowler_id: BowlerId,
    pub kind: TransactionKind,
    pub amount: Money,
    pub description: String,
    pub source: Option<PayoutSource>,
    pub created_at: DateTime<Utc>,
}

impl NewTransaction {
    pub fn new(
        bowler_id: BowlerId,
        kind: TransactionKind,
        amount: Money,
        description: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            bowler_id,
            kind,
            amount,
            description: description.into(),
            source: None,
            created_at,
        }
    }

    pub fn with_source(mut self, source: PayoutSource) -> Self {
        self.source = Some(source);
        self
    }
}

/// One bowler's money position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrantBalance {
    pub paid: Money,
    pub received: Money,
    /// `received - paid`
    pub net: Money,
}

/// Ledger totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub total_in: Money,
    pub total_out: Money,
    pub balance: Money,
    pub entries: usize,
    pub payouts: usize,
    pub refunds: usize,
}

/// Prize owed to a bowler for a finishing place
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutRecord {
    pub bowler_id: BowlerId,
    pub source: PayoutSource,
    pub place: u32,
    pub amount: Money,
    pub description: String,
    pub paid: bool,
    pub paid_at: Option<DateTime<Utc>>,
}

/// What one bowler has won and been paid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwedSummary {
    pub total: Money,
    pub paid: Money,
    pub owed: Money,
}

/// Payout totals for an event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPayoutSummary {
    pub total: Money,
    pub paid_amount: Money,
    pub pending: Money,
    pub payout_count: usize,
}
