use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::model::{Category, Record, RecordId};
use crate::pipeline::stage1_normalize::{Resolution, resolve};

/// Four-quarter accumulation for one canonical indicator.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorCell {
    pub target: [f64; 4],
    pub target_denom: [f64; 4],
    pub accomp: [f64; 4],
    pub accomp_denom: [f64; 4],
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matrix {
    order: Vec<String>,
    cells: BTreeMap<String, IndicatorCell>,
}

impl Matrix {
    fn seeded(category: Category) -> Self {
        let mut matrix = Matrix::default();
        if category.def().preseed {
            for name in category.canonical_indicators() {
                matrix.cell_mut(name);
            }
        }
        matrix
    }

    fn cell_mut(&mut self, name: &str) -> &mut IndicatorCell {
        if !self.cells.contains_key(name) {
            self.order.push(name.to_string());
        }
        self.cells.entry(name.to_string()).or_default()
    }

    pub fn get(&self, name: &str) -> Option<&IndicatorCell> {
        self.cells.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cells.contains_key(name)
    }

    /// Indicator names in insertion order (seeded rows first).
    pub fn indicators(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    UnrecognizedIndicator,
    ReservedIndicator,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DroppedRecord {
    pub id: RecordId,
    pub indicator: String,
    pub reason: DropReason,
}

#[derive(Debug, Clone)]
pub struct MatrixOutput {
    pub matrix: Matrix,
    pub dropped: Vec<DroppedRecord>,
}

pub fn build_matrix(records: &[Record], category: Category) -> MatrixOutput {
    let mut matrix = Matrix::seeded(category);
    let mut dropped = Vec::new();

    for record in records {
        let name = match resolve(category, &record.indicator) {
            Resolution::Accepted(name) => name,
            Resolution::Unrecognized(name) => {
                dropped.push(DroppedRecord {
                    id: record.id,
                    indicator: name,
                    reason: DropReason::UnrecognizedIndicator,
                });
                continue;
            }
            Resolution::Reserved(name) => {
                dropped.push(DroppedRecord {
                    id: record.id,
                    indicator: name,
                    reason: DropReason::ReservedIndicator,
                });
                continue;
            }
        };

        // duplicates for the same slot overwrite, last record wins
        let q = record.quarter.index();
        let cell = matrix.cell_mut(&name);
        cell.target[q] = record.target;
        cell.target_denom[q] = record.target_denom;
        cell.accomp[q] = record.accomp;
        cell.accomp_denom[q] = record.accomp_denom;
    }

    if !dropped.is_empty() {
        debug!(
            "{}: {} record(s) excluded from the matrix",
            category,
            dropped.len()
        );
    }

    MatrixOutput { matrix, dropped }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_matrix.rs"]
mod tests;
