//! Payout tiers.
//!
//! Tier amounts are computed in whole parts-per-million of the pool, so float
//! error in a ratio like 0.15 never moves a unit of money between places.

use super::errors::{PayoutError, PayoutResult};
use super::models::{PayoutStructure, PayoutTier};
use crate::bracket::BracketSize;
use crate::types::Money;

const PPM: i64 = 1_000_000;

const WINNER_TAKES_ALL: &[f64] = &[1.0];

/// Standard payout ratios, keyed by entrant count
pub const STANDARD_PAYOUT_RATIOS: [(usize, &[f64]); 6] = [
    (4, &[1.0]),
    (8, &[0.75, 0.25]),
    (12, &[0.6, 0.25, 0.15]),
    (16, &[0.5, 0.25, 0.15, 0.1]),
    (32, &[0.4, 0.2, 0.12, 0.08, 0.05, 0.05, 0.05, 0.05]),
    (
        64,
        &[
            0.25, 0.15, 0.1, 0.08, 0.06, 0.06, 0.05, 0.05, 0.04, 0.04, 0.03, 0.03, 0.02, 0.02,
            0.01, 0.01,
        ],
    ),
];

/// Ratios for the largest standard size at or below `entrants`
///
/// Fewer than four entrants is winner-takes-all.
pub fn standard_ratios(entrants: usize) -> &'static [f64] {
    STANDARD_PAYOUT_RATIOS
        .iter()
        .rev()
        .find(|(size, _)| *size <= entrants)
        .map_or(WINNER_TAKES_ALL, |(_, ratios)| *ratios)
}

fn to_ppm(ratio: f64) -> PayoutResult<i64> {
    if !(0.0..=1.0).contains(&ratio) {
        return Err(PayoutError::RatioOutOfRange(ratio));
    }
    Ok((ratio * PPM as f64).round() as i64)
}

/// Split a prize pool into paid places
///
/// Each tier gets `floor(pool * ratio)`; the rounding remainder goes to first
/// place so the tiers always sum to exactly `prize_pool`.
///
/// # Arguments
///
/// * `prize_pool` - Money to distribute
/// * `entrants` - Entrant count used to pick the standard table
/// * `custom_ratios` - Ratios to use instead of the standard table
///
/// # Returns
///
/// * `PayoutResult<PayoutStructure>` - Tiers in place order
///
/// # Errors
///
/// * `PayoutError::NegativePool` - Pool below zero
/// * `PayoutError::EmptyRatios` - Custom ratio list is empty
/// * `PayoutError::RatioOutOfRange` - A ratio outside 0..=1
/// * `PayoutError::RatiosExceedPool` - Ratios sum to more than 1
pub fn payout_structure(
    prize_pool: Money,
    entrants: usize,
    custom_ratios: Option<&[f64]>,
) -> PayoutResult<PayoutStructure> {
    if prize_pool < 0 {
        return Err(PayoutError::NegativePool(prize_pool));
    }

    let ratios = custom_ratios.unwrap_or_else(|| standard_ratios(entrants));
    if ratios.is_empty() {
        return Err(PayoutError::EmptyRatios);
    }

    let parts = ratios
        .iter()
        .map(|&r| to_ppm(r))
        .collect::<PayoutResult<Vec<i64>>>()?;
    if parts.iter().sum::<i64>() > PPM {
        return Err(PayoutError::RatiosExceedPool(ratios.iter().sum()));
    }

    let mut tiers: Vec<PayoutTier> = ratios
        .iter()
        .zip(&parts)
        .enumerate()
        .map(|(index, (&percentage, &part))| PayoutTier {
            place: index as u32 + 1,
            amount: (i128::from(prize_pool) * i128::from(part) / i128::from(PPM)) as Money,
            percentage,
        })
        .collect();

    let remainder = prize_pool - tiers.iter().map(|t| t.amount).sum::<Money>();
    if let Some(first) = tiers.first_mut() {
        first.amount += remainder;
    }

    Ok(PayoutStructure {
        total_prize_pool: prize_pool,
        tiers,
    })
}

/// Standard payouts for a full bracket
pub fn calculate_bracket_payouts(prize_pool: Money, size: BracketSize) -> PayoutResult<PayoutStructure> {
    payout_structure(prize_pool, size.entrants(), None)
}
