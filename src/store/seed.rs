use crate::model::{Category, Quarter, Record};
use crate::store::entry::next_id;

type SampleRow = (&'static str, Quarter, f64, f64, f64, f64, &'static str);

const PRIMARY_SAMPLE: &[SampleRow] = &[
    ("Licensure", Quarter::Q1, 40.0, 50.0, 35.0, 50.0, "Licensure Q1"),
    ("Licensure", Quarter::Q2, 45.0, 50.0, 46.0, 50.0, ""),
    ("Employability", Quarter::Q1, 80.0, 100.0, 76.0, 100.0, ""),
    ("CHED-RDC", Quarter::Q1, 3.0, 5.0, 2.0, 5.0, ""),
    ("Accreditation", Quarter::Q1, 1.0, 2.0, 1.0, 2.0, ""),
];

const RESEARCH_SAMPLE: &[SampleRow] = &[
    ("Research Utilization", Quarter::Q1, 12.0, 0.0, 10.0, 0.0, "Utilization sample"),
    ("Completed Research", Quarter::Q1, 8.0, 0.0, 7.0, 0.0, ""),
    ("Research Published", Quarter::Q1, 5.0, 7.0, 3.0, 7.0, "Published (has denom)"),
];

const EXTENSION_SAMPLE: &[SampleRow] = &[
    (
        "Number of active partnerships as a result of extension activities",
        Quarter::Q1,
        10.0,
        0.0,
        8.0,
        0.0,
        "Partnerships stable",
    ),
    (
        "Number of trainees weighted by the length of experience",
        Quarter::Q2,
        50.0,
        0.0,
        45.0,
        0.0,
        "",
    ),
    ("Satisfactory Rating", Quarter::Q1, 80.0, 100.0, 78.0, 100.0, ""),
];

pub fn sample_rows(category: Category) -> &'static [SampleRow] {
    match category {
        Category::Primary => PRIMARY_SAMPLE,
        Category::Research => RESEARCH_SAMPLE,
        Category::Extension => EXTENSION_SAMPLE,
    }
}

/// Appends the category's sample records with fresh ids; returns how many were added.
pub fn seed_records(category: Category, records: &mut Vec<Record>) -> usize {
    let rows = sample_rows(category);
    for &(indicator, quarter, target, target_denom, accomp, accomp_denom, remarks) in rows {
        let id = next_id(records);
        records.push(Record {
            id,
            indicator: indicator.to_string(),
            quarter,
            target,
            target_denom,
            accomp,
            accomp_denom,
            remarks: remarks.to_string(),
        });
    }
    rows.len()
}
