use super::*;
use crate::model::{Category, Record, Settings};
use crate::pipeline::stage5_report::assemble;

fn records() -> Vec<Record> {
    vec![Record {
        id: 1,
        indicator: "Licensure".to_string(),
        quarter: Quarter::Q1,
        target: 40.0,
        target_denom: 50.0,
        accomp: 35.0,
        accomp_denom: 50.0,
        remarks: "Licensure Q1".to_string(),
    }]
}

#[test]
fn test_text_report_layout() {
    let model = assemble(Category::Primary, &records(), &Settings::default());
    let text = render_report_text(&model);
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("CHED Performance"));
    assert_eq!(lines.next(), Some("================"));
    assert!(text.contains("1 row(s) — dataset: CHED"));
    assert!(text.contains("40/50 (80.0%)"));
    assert!(text.contains("35/50 (70.0%)"));
    assert!(text.contains("Q1=behind"));
    assert!(text.contains("Remarks         Licensure Q1"));
    assert!(text.contains("Accreditation\n"));
}

#[test]
fn test_text_report_empty_extension() {
    let model = assemble(Category::Extension, &[], &Settings::default());
    let text = render_report_text(&model);
    assert!(text.contains("No data — dataset: EXTENSION"));
    assert!(text.ends_with("No indicators to report.\n"));
}

#[test]
fn test_pad() {
    assert_eq!(pad("ab", 4), "ab  ");
    assert_eq!(pad("abcd", 4), "abcd ");
}

#[test]
fn test_record_list() {
    assert_eq!(render_record_list(Category::Primary, &[]), "No records.\n");
    let list = records();
    let text = render_record_list(Category::Primary, &list);
    assert_eq!(
        text,
        "1       Q1  Licensure  target 40/50  accomp 35/50  Licensure Q1\n"
    );
}

#[test]
fn test_record_list_normalizes_and_hides_excluded() {
    let entry = |id: u64, indicator: &str| Record {
        id,
        indicator: indicator.to_string(),
        quarter: Quarter::Q3,
        target: 8.0,
        target_denom: 0.0,
        accomp: 7.0,
        accomp_denom: 0.0,
        remarks: String::new(),
    };

    let research = vec![entry(12, "OP1 legacy"), entry(13, "xyz")];
    assert_eq!(
        render_record_list(Category::Research, &research),
        "12      Q3  Completed Research  target 8/-  accomp 7/-\n"
    );

    let extension = vec![entry(20, "OP1 - Licensure"), entry(21, "OC2: Trainings")];
    assert_eq!(
        render_record_list(Category::Extension, &extension),
        "21      Q3  Trainings  target 8/-  accomp 7/-\n"
    );

    assert_eq!(
        render_record_list(Category::Research, &[entry(31, "oops")]),
        "No records.\n"
    );
}
