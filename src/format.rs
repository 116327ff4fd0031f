use crate::engine::{Feasibility, Outcome, TableRow};
use crate::position::{Position, Purchase, Target};
use serde::Serialize;

// Inserts a comma every three digits of an unsigned integer digit string
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// US dollars, two decimals, e.g. `$1,800.00`.
pub fn format_currency(value: f64) -> String {
    let text = format!("{:.2}", value.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let rounds_to_zero = text.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !rounds_to_zero { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(whole), cents)
}

/// Whole shares, rounded down.
pub fn format_shares(value: f64) -> String {
    let whole = value.floor();
    let sign = if whole < 0.0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(&format!("{:.0}", whole.abs())))
}

pub fn format_share_count(count: u64) -> String {
    group_thousands(&count.to_string())
}

pub fn summary_sentence(target: &Target, purchase: &Purchase, shares_to_buy: u64) -> String {
    format!(
        "To reach target average of {}, buy {} shares at {}",
        format_currency(target.average_cost),
        format_share_count(shares_to_buy),
        format_currency(purchase.price)
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub shares_to_buy: String,
    pub total_shares_after: String,
    pub total_cost_after: String,
    pub new_average_after: String,
}

impl From<&Outcome> for Summary {
    fn from(outcome: &Outcome) -> Self {
        Summary {
            shares_to_buy: format_share_count(outcome.shares_to_buy),
            total_shares_after: format_shares(outcome.total_shares),
            total_cost_after: format_currency(outcome.total_cost),
            new_average_after: format_currency(outcome.resulting_average),
        }
    }
}

/// Display text for one comparison row: target, shares, purchase cost, new average.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowCells {
    pub target: String,
    pub shares: String,
    pub cost: String,
    pub average: String,
}

pub fn row_cells(row: &TableRow, position: &Position, purchase: &Purchase) -> RowCells {
    let target = format_currency(row.target.average_cost);
    match row.outcome.feasibility {
        Feasibility::Impossible => RowCells {
            target,
            shares: "Not possible".to_string(),
            cost: "-".to_string(),
            average: "-".to_string(),
        },
        Feasibility::AlreadyAchieved => RowCells {
            target,
            shares: "Already achieved".to_string(),
            cost: format_currency(0.0),
            average: format_currency(position.average_cost),
        },
        Feasibility::Computed => RowCells {
            target,
            shares: format_share_count(row.outcome.shares_to_buy),
            cost: format_currency(row.outcome.purchase_cost(purchase)),
            average: format_currency(row.outcome.resulting_average),
        },
    }
}
