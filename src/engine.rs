use crate::position::{Position, Purchase, Target};
use serde::Serialize;

// A raw share count this close above a whole number is representation noise
const MARGIN_ERROR_SHARES: f64 = 0.000000001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Feasibility {
    Computed,
    AlreadyAchieved,
    Impossible,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Outcome {
    pub shares_to_buy: u64,
    pub total_shares: f64,
    pub total_cost: f64,
    pub resulting_average: f64,
    pub feasibility: Feasibility,
}

impl Outcome {
    pub fn purchase_cost(&self, purchase: &Purchase) -> f64 {
        self.shares_to_buy as f64 * purchase.price
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableRow {
    pub target: Target,
    pub outcome: Outcome,
}

/// Real-valued solution of `(S*A + x*P) / (S + x) = T` for `x`.
///
/// Only meaningful when `P < T < A`, callers must check the regime first.
pub fn raw_shares(position: &Position, purchase: &Purchase, target: &Target) -> f64 {
    position.shares * (position.average_cost - target.average_cost)
        / (target.average_cost - purchase.price)
}

/// Whole shares to buy at `purchase` to bring `position` down to `target`.
///
/// A target at or below the purchase price can never be reached and a target
/// at or above the current average needs no purchase; both report zero shares
/// and are told apart by the returned `Feasibility`.
pub fn shares_required(
    position: &Position,
    purchase: &Purchase,
    target: &Target,
) -> (u64, Feasibility) {
    if target.average_cost <= purchase.price {
        return (0, Feasibility::Impossible);
    }
    if target.average_cost >= position.average_cost {
        return (0, Feasibility::AlreadyAchieved);
    }

    let raw = raw_shares(position, purchase, target).max(0.0);
    // No share count we can represent gets there
    if !raw.is_finite() || raw >= u64::MAX as f64 {
        return (0, Feasibility::Impossible);
    }

    // Round up, fractional shares cannot be bought. P < T < A always needs at least one.
    let shares = (raw - MARGIN_ERROR_SHARES).ceil().max(1.0);
    (shares as u64, Feasibility::Computed)
}

pub fn compute_outcome(position: &Position, purchase: &Purchase, shares_to_buy: u64) -> Outcome {
    let bought = shares_to_buy as f64;
    let after = position.with_purchase(bought, purchase.price);

    Outcome {
        shares_to_buy,
        total_shares: after.shares,
        total_cost: position.total_cost() + purchase.price * bought,
        resulting_average: after.average_cost,
        feasibility: Feasibility::Computed,
    }
}

pub fn compute_target(position: &Position, purchase: &Purchase, target: &Target) -> Outcome {
    let (shares_to_buy, feasibility) = shares_required(position, purchase, target);
    Outcome {
        feasibility,
        ..compute_outcome(position, purchase, shares_to_buy)
    }
}

/// One row per candidate, in the order given.
pub fn compute_table(
    position: &Position,
    purchase: &Purchase,
    candidates: &[Target],
) -> Vec<TableRow> {
    candidates
        .iter()
        .map(|target| TableRow {
            target: *target,
            outcome: compute_target(position, purchase, target),
        })
        .collect()
}
