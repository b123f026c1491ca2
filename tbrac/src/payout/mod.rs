//! Payout module: prize tiers, refunds, event totals and the money ledger.
//!
//! - Standard and custom payout tables that always reconcile to the pool
//! - Refunds for bracket entries that did not fill a bracket
//! - Event financials (collected, lineage, prize pool)
//! - Payout records per finishing place, with paid tracking
//! - Append-only ledger whose totals are always folds over its history
//!
//! ## Example
//!
//! ```
//! use tbrac::payout::{event_financials, payout_structure};
//!
//! let financials = event_financials(8, 5, 0, 0).unwrap();
//! let structure = payout_structure(financials.prize_pool, 8, None).unwrap();
//! let amounts: Vec<i64> = structure.tiers.iter().map(|t| t.amount).collect();
//! assert_eq!(amounts, vec![30, 10]);
//! ```

pub mod awards;
pub mod errors;
pub mod financials;
pub mod ledger;
pub mod models;
pub mod refunds;
pub mod structure;

pub use awards::{award_payouts, bowler_owed, event_payout_summary, ordinal};
pub use errors::{PayoutError, PayoutResult};
pub use financials::event_financials;
pub use ledger::MoneyLedger;
pub use models::{
    BracketPurchase, EntrantBalance, EventFinancials, EventPayoutSummary, LedgerSummary,
    MoneyTransaction, NewTransaction, OwedSummary, PayoutRecord, PayoutSource, PayoutStructure,
    PayoutTier, RefundResult, TransactionId, TransactionKind,
};
pub use refunds::{calculate_bracket_refunds, total_refunds};
pub use structure::{
    STANDARD_PAYOUT_RATIOS, calculate_bracket_payouts, payout_structure, standard_ratios,
};
