use crate::error::EntryError;
use crate::model::{Category, Quarter, Record, RecordId};
use crate::pipeline::stage1_normalize::{Resolution, resolve};

/// Unvalidated form input for one record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryDraft {
    pub id: Option<RecordId>,
    pub indicator: String,
    pub quarter: String,
    pub target: f64,
    pub target_denom: f64,
    pub accomp: f64,
    pub accomp_denom: f64,
    pub remarks: String,
}

pub fn prepare_entry(
    category: Category,
    draft: &EntryDraft,
    existing: &[Record],
) -> Result<Record, EntryError> {
    let raw = draft.indicator.trim();
    if raw.is_empty() {
        return Err(EntryError::MissingIndicator);
    }
    let quarter: Quarter = draft.quarter.parse()?;

    let indicator = match resolve(category, raw) {
        Resolution::Accepted(name) => name,
        Resolution::Unrecognized(name) => {
            return Err(EntryError::UnknownResearchIndicator {
                indicator: name,
                allowed: category.canonical_indicators().join(", "),
            });
        }
        Resolution::Reserved(name) => return Err(EntryError::ReservedIndicator(name)),
    };
    if indicator.is_empty() {
        return Err(EntryError::MissingIndicator);
    }

    let target = non_negative("target", draft.target)?;
    let target_denom = non_negative("targetDenom", draft.target_denom)?;
    let accomp = non_negative("accomp", draft.accomp)?;
    let accomp_denom = non_negative("accompDenom", draft.accomp_denom)?;

    let (target, target_denom, accomp, accomp_denom) = if category.is_no_denominator(&indicator) {
        (target.round(), 0.0, accomp.round(), 0.0)
    } else {
        (target, target_denom.round(), accomp, accomp_denom.round())
    };

    Ok(Record {
        id: draft.id.unwrap_or_else(|| next_id(existing)),
        indicator,
        quarter,
        target,
        target_denom,
        accomp,
        accomp_denom,
        remarks: draft.remarks.trim().to_string(),
    })
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, EntryError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(EntryError::InvalidValue { field, value })
    }
}

pub fn next_id(existing: &[Record]) -> RecordId {
    existing.iter().map(|r| r.id).max().map_or(1, |max| max + 1)
}

/// Replaces the record with the same id in place, or appends it.
pub fn upsert(records: &mut Vec<Record>, record: Record) {
    match records.iter_mut().find(|r| r.id == record.id) {
        Some(slot) => *slot = record,
        None => records.push(record),
    }
}

pub fn remove(records: &mut Vec<Record>, id: RecordId) -> Result<Record, EntryError> {
    let idx = records
        .iter()
        .position(|r| r.id == id)
        .ok_or(EntryError::UnknownRecord(id))?;
    Ok(records.remove(idx))
}

#[cfg(test)]
#[path = "../../tests/src_inline/store/entry.rs"]
mod tests;
