use crate::config::Settings;
use crate::engine::{compute_table, compute_target, Outcome};
use crate::format::{row_cells, summary_sentence, RowCells, Summary};
use crate::position::Target;
use crate::validation::{validate, validate_candidates, RawInputs};
use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A form value, sent either as typed text or as a JSON number.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum Field {
    Number(f64),
    Text(String),
}

impl Field {
    fn into_text(self) -> String {
        match self {
            Field::Number(value) => value.to_string(),
            Field::Text(text) => text,
        }
    }
}

fn text(field: Option<Field>) -> String {
    field.map(Field::into_text).unwrap_or_default()
}

#[derive(Deserialize)]
pub struct Body {
    current_shares: Option<Field>,
    current_average: Option<Field>,
    buy_price: Option<Field>,
    target_average: Option<Field>,
    targets: Option<Vec<f64>>,
}

#[derive(Serialize)]
pub struct Row {
    pub target: Target,
    pub outcome: Outcome,
    pub cells: RowCells,
}

#[derive(Serialize)]
pub struct Calculation {
    pub generated_at: DateTime<Utc>,
    pub message: String,
    pub outcome: Outcome,
    pub summary: Summary,
    pub table: Vec<Row>,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum Response<T> {
    Success(T),
    Error(String),
}

pub async fn calculate(
    State(settings): State<Arc<Settings>>,
    Json(payload): Json<Body>,
) -> (StatusCode, Json<Response<Calculation>>) {
    info!("Calculation requested");

    let raw = RawInputs {
        current_shares: text(payload.current_shares),
        current_average: text(payload.current_average),
        buy_price: text(payload.buy_price),
        target_average: text(payload.target_average),
    };

    let inputs = match validate(&raw) {
        Ok(inputs) => inputs,
        Err(e) => {
            warn!("Rejected input: {}", e);
            return (StatusCode::BAD_REQUEST, Json(Response::Error(e.to_string())));
        }
    };

    let candidates = match payload.targets {
        Some(levels) => match validate_candidates(&levels) {
            Ok(targets) => targets,
            Err(e) => {
                warn!("Rejected candidate targets {:?}: {}", levels, e);
                return (StatusCode::BAD_REQUEST, Json(Response::Error(e.to_string())));
            }
        },
        None => settings.candidate_targets.clone(),
    };

    let position = inputs.position;
    let purchase = inputs.purchase;

    let outcome = compute_target(&position, &purchase, &inputs.target);
    debug!(
        shares_to_buy = outcome.shares_to_buy,
        feasibility = ?outcome.feasibility,
        resulting_average = outcome.resulting_average,
        "Computed target"
    );

    let table = compute_table(&position, &purchase, &candidates)
        .iter()
        .map(|row| Row {
            target: row.target,
            outcome: row.outcome,
            cells: row_cells(row, &position, &purchase),
        })
        .collect::<Vec<_>>();
    debug!("Generated comparison table with {} rows", table.len());

    let calculation = Calculation {
        generated_at: Utc::now(),
        message: summary_sentence(&inputs.target, &purchase, outcome.shares_to_buy),
        outcome,
        summary: Summary::from(&outcome),
        table,
    };

    (StatusCode::OK, Json(Response::Success(calculation)))
}
