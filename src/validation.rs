use crate::position::{Position, Purchase, Target};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Current shares must be greater than zero")]
    Shares,
    #[error("Current average cost must be greater than zero")]
    AverageCost,
    #[error("Purchase price must be greater than zero")]
    PurchasePrice,
    #[error("Target average must be greater than zero")]
    TargetAverage,
    #[error("Target average must be greater than purchase price")]
    TargetNotAbovePrice,
}

/// Form fields as typed by the user.
#[derive(Debug, Clone)]
pub struct RawInputs {
    pub current_shares: String,
    pub current_average: String,
    pub buy_price: String,
    pub target_average: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inputs {
    pub position: Position,
    pub purchase: Purchase,
    pub target: Target,
}

// Blank or unreadable text counts as zero
fn parse_field(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

fn positive(value: f64, err: InputError) -> Result<f64, InputError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(err)
    }
}

/// Checks the fields in form order and stops at the first failing rule.
pub fn validate(raw: &RawInputs) -> Result<Inputs, InputError> {
    let shares = positive(parse_field(&raw.current_shares), InputError::Shares)?;
    let average = positive(parse_field(&raw.current_average), InputError::AverageCost)?;
    let price = positive(parse_field(&raw.buy_price), InputError::PurchasePrice)?;
    let target = positive(parse_field(&raw.target_average), InputError::TargetAverage)?;

    if target <= price {
        return Err(InputError::TargetNotAbovePrice);
    }

    Ok(Inputs {
        position: Position::new(shares, average),
        purchase: Purchase::new(price),
        target: Target::new(target),
    })
}

/// Candidate levels must be finite and positive to reach the engine.
pub fn validate_candidates(levels: &[f64]) -> Result<Vec<Target>, InputError> {
    levels
        .iter()
        .map(|level| {
            if level.is_finite() && *level > 0.0 {
                Ok(Target::new(*level))
            } else {
                Err(InputError::TargetAverage)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(shares: &str, average: &str, price: &str, target: &str) -> RawInputs {
        RawInputs {
            current_shares: shares.to_string(),
            current_average: average.to_string(),
            buy_price: price.to_string(),
            target_average: target.to_string(),
        }
    }

    #[test]
    fn accepts_well_formed_inputs() {
        let inputs = validate(&raw("100", " 10.00 ", "8", "9.5")).unwrap();
        assert_eq!(inputs.position, Position::new(100.0, 10.0));
        assert_eq!(inputs.purchase, Purchase::new(8.0));
        assert_eq!(inputs.target, Target::new(9.5));
    }

    #[test]
    fn each_field_has_its_own_error() {
        assert_eq!(validate(&raw("0", "10", "8", "9")), Err(InputError::Shares));
        assert_eq!(validate(&raw("100", "-1", "8", "9")), Err(InputError::AverageCost));
        assert_eq!(validate(&raw("100", "10", "", "9")), Err(InputError::PurchasePrice));
        assert_eq!(validate(&raw("100", "10", "8", "abc")), Err(InputError::TargetAverage));
        assert_eq!(
            validate(&raw("100", "10", "8", "8")),
            Err(InputError::TargetNotAbovePrice)
        );
    }

    #[test]
    fn first_failing_rule_wins() {
        assert_eq!(validate(&raw("", "", "", "")), Err(InputError::Shares));
        assert_eq!(validate(&raw("5", "0", "0", "0")), Err(InputError::AverageCost));
        assert_eq!(validate(&raw("5", "5", "9", "-2")), Err(InputError::TargetAverage));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert_eq!(validate(&raw("inf", "10", "8", "9")), Err(InputError::Shares));
        assert_eq!(validate(&raw("100", "NaN", "8", "9")), Err(InputError::AverageCost));
    }

    #[test]
    fn messages_name_the_field() {
        assert_eq!(
            InputError::Shares.to_string(),
            "Current shares must be greater than zero"
        );
        assert_eq!(
            InputError::TargetNotAbovePrice.to_string(),
            "Target average must be greater than purchase price"
        );
    }

    #[test]
    fn target_above_average_passes_validation() {
        // the engine reports this one as already achieved
        assert!(validate(&raw("100", "10", "8", "11")).is_ok());
    }

    #[test]
    fn candidates_must_be_positive() {
        let targets = validate_candidates(&[9.0, 8.75]).unwrap();
        assert_eq!(targets, vec![Target::new(9.0), Target::new(8.75)]);
        assert!(validate_candidates(&[]).unwrap().is_empty());
        assert_eq!(
            validate_candidates(&[9.0, 0.0]),
            Err(InputError::TargetAverage)
        );
    }
}
