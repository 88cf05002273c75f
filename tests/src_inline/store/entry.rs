use super::*;

fn draft(indicator: &str, quarter: &str) -> EntryDraft {
    EntryDraft {
        id: None,
        indicator: indicator.to_string(),
        quarter: quarter.to_string(),
        target: 10.0,
        target_denom: 20.0,
        accomp: 9.0,
        accomp_denom: 20.0,
        remarks: "  note ".to_string(),
    }
}

#[test]
fn test_prepare_primary_entry() {
    let record = prepare_entry(Category::Primary, &draft(" Licensure ", "q2"), &[]).unwrap();
    assert_eq!(record.id, 1);
    assert_eq!(record.indicator, "Licensure");
    assert_eq!(record.quarter, Quarter::Q2);
    assert_eq!(record.target_denom, 20.0);
    assert_eq!(record.remarks, "note");
}

#[test]
fn test_missing_indicator_and_bad_quarter() {
    assert_eq!(
        prepare_entry(Category::Primary, &draft("   ", "Q1"), &[]),
        Err(EntryError::MissingIndicator)
    );
    assert_eq!(
        prepare_entry(Category::Primary, &draft("Licensure", "Q5"), &[]),
        Err(EntryError::InvalidQuarter("Q5".to_string()))
    );
}

#[test]
fn test_research_entry_normalized_or_rejected() {
    let record = prepare_entry(Category::Research, &draft("OC1 legacy", "Q1"), &[]).unwrap();
    assert_eq!(record.indicator, "Research Utilization");
    // no-denominator: whole numbers, denominators dropped
    assert_eq!(record.target_denom, 0.0);
    assert_eq!(record.accomp_denom, 0.0);

    let err = prepare_entry(Category::Research, &draft("xyz", "Q1"), &[]).unwrap_err();
    assert!(matches!(err, EntryError::UnknownResearchIndicator { .. }));
}

#[test]
fn test_extension_reserved_rejected() {
    let err = prepare_entry(Category::Extension, &draft("OP1 - Licensure", "Q1"), &[]).unwrap_err();
    assert_eq!(err, EntryError::ReservedIndicator("Licensure".to_string()));

    let rating = draft("OC3: Satisfactory Rating", "Q1");
    let ok = prepare_entry(Category::Extension, &rating, &[]).unwrap();
    assert_eq!(ok.indicator, "Satisfactory Rating");
}

#[test]
fn test_no_denominator_rounds_counts() {
    let mut d = draft("Number of trainees weighted by the length of experience", "Q3");
    d.target = 49.6;
    d.accomp = 44.4;
    let record = prepare_entry(Category::Extension, &d, &[]).unwrap();
    assert_eq!(record.target, 50.0);
    assert_eq!(record.accomp, 44.0);
    assert_eq!(record.target_denom, 0.0);
}

#[test]
fn test_negative_value_rejected() {
    let mut d = draft("Licensure", "Q1");
    d.accomp = -1.0;
    assert_eq!(
        prepare_entry(Category::Primary, &d, &[]),
        Err(EntryError::InvalidValue {
            field: "accomp",
            value: -1.0
        })
    );
}

#[test]
fn test_upsert_and_remove() {
    let mut records = Vec::new();
    let first = prepare_entry(Category::Primary, &draft("Licensure", "Q1"), &records).unwrap();
    upsert(&mut records, first);
    let second = prepare_entry(Category::Primary, &draft("Employability", "Q1"), &records).unwrap();
    assert_eq!(second.id, 2);
    upsert(&mut records, second);

    let mut edit = draft("Licensure", "Q1");
    edit.id = Some(1);
    edit.target = 42.0;
    let edited = prepare_entry(Category::Primary, &edit, &records).unwrap();
    upsert(&mut records, edited);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].target, 42.0);

    let removed = remove(&mut records, 2).unwrap();
    assert_eq!(removed.indicator, "Employability");
    assert_eq!(remove(&mut records, 2), Err(EntryError::UnknownRecord(2)));
}
