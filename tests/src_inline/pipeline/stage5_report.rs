use super::*;
use crate::model::settings::MAX_DECIMALS;

fn rec(
    id: u64,
    indicator: &str,
    quarter: Quarter,
    target: f64,
    target_denom: f64,
    accomp: f64,
    accomp_denom: f64,
    remarks: &str,
) -> Record {
    Record {
        id,
        indicator: indicator.to_string(),
        quarter,
        target,
        target_denom,
        accomp,
        accomp_denom,
        remarks: remarks.to_string(),
    }
}

fn primary_records() -> Vec<Record> {
    vec![
        rec(1, "Licensure", Quarter::Q1, 40.0, 50.0, 35.0, 50.0, "Licensure Q1"),
        rec(2, "Licensure", Quarter::Q2, 45.0, 50.0, 46.0, 40.0, ""),
        rec(3, "Employability", Quarter::Q1, 80.0, 100.0, 76.0, 100.0, ""),
    ]
}

#[test]
fn test_assemble_is_deterministic() {
    let settings = Settings::default();
    for category in Category::ALL {
        let records = primary_records();
        let a = assemble(category, &records, &settings);
        let b = assemble(category, &records, &settings);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}

#[test]
fn test_primary_rows_follow_canonical_order() {
    let model = assemble(Category::Primary, &primary_records(), &Settings::default());
    let names: Vec<&str> = model.rows.iter().map(|r| r.indicator.as_str()).collect();
    assert_eq!(
        names,
        vec!["Licensure", "Employability", "CHED-RDC", "Accreditation"]
    );
    assert_eq!(model.title, "CHED Performance");
    assert_eq!(model.record_count, 3);

    let licensure = &model.rows[0];
    // target denominators repeat (50, 50), accomplishment ones differ (50, 40)
    assert_eq!(licensure.total_target.display, "85/50");
    assert_eq!(licensure.total_accomp.display, "81/90");
    assert_eq!(licensure.total_accomp.percent_display, "90.0%");
    assert_eq!(licensure.status, Status::Behind);
    assert_eq!(licensure.remarks_text(), "Licensure Q1");

    let empty = &model.rows[2];
    assert_eq!(empty.total_target.display, "-");
    assert_eq!(empty.status, Status::NotApplicable);
}

#[test]
fn test_research_no_denominator_row() {
    let records = vec![
        rec(1, "Completed Research", Quarter::Q3, 8.0, 0.0, 7.0, 0.0, ""),
        rec(2, "something else", Quarter::Q1, 1.0, 0.0, 1.0, 0.0, ""),
        rec(3, "OP2", Quarter::Q1, 5.0, 7.0, 3.0, 7.0, "has denom"),
    ];
    let model = assemble(Category::Research, &records, &Settings::default());
    assert_eq!(model.rows.len(), 3);
    assert_eq!(model.dropped.len(), 1);

    let completed = &model.rows[1];
    assert_eq!(completed.indicator, "Completed Research");
    assert_eq!(completed.total_target.display, "8/8");
    assert_eq!(completed.total_target.percent_display, "100.0%");
    assert_eq!(completed.quarter(Quarter::Q3).accomp.display, "7");

    let published = &model.rows[2];
    assert!(!published.no_denominator);
    assert_eq!(published.quarter(Quarter::Q1).target.display, "5/7 (71.4%)");
}

#[test]
fn test_extension_rows_in_first_seen_order() {
    let records = vec![
        rec(1, "Satisfactory Rating", Quarter::Q1, 80.0, 100.0, 78.0, 100.0, ""),
        rec(2, "OP1 - Licensure", Quarter::Q1, 40.0, 50.0, 35.0, 50.0, ""),
        rec(
            3,
            "OC1 - Number of active partnerships as a result of extension activities",
            Quarter::Q1,
            10.0,
            0.0,
            8.0,
            0.0,
            "Partnerships stable",
        ),
    ];
    let model = assemble(Category::Extension, &records, &Settings::default());
    let names: Vec<&str> = model.rows.iter().map(|r| r.indicator.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Satisfactory Rating",
            "Number of active partnerships as a result of extension activities"
        ]
    );
    assert!(model.rows.iter().all(|r| r.indicator != "Licensure"));
    assert!(model.rows[1].no_denominator);
    assert_eq!(model.rows[1].remarks_text(), "Partnerships stable");
    assert_eq!(
        model.chart.wrapped_labels[1],
        vec![
            "Number of active partnerships",
            "as a result of",
            "extension activities"
        ]
    );
}

#[test]
fn test_chart_series() {
    let model = assemble(Category::Primary, &primary_records(), &Settings::default());
    let overall = model.chart.series(ChartView::Overall);
    assert_eq!(overall.view, ChartView::Overall);
    assert_eq!(overall.target.len(), 4);
    assert_eq!(overall.target[0], 170.0);
    assert_eq!(overall.accomp[0], 90.0);
    assert_eq!(overall.target_raw[0], "85/50");
    assert_eq!(overall.target_raw[2], "-");
    assert_eq!(overall.target[2], 0.0);
    assert_eq!(overall.accomp_colors()[0], crate::model::status::BEHIND_COLOR);

    let q2 = model.chart.series(ChartView::Quarter(Quarter::Q2));
    assert_eq!(q2.target[0], 90.0);
    assert_eq!(q2.accomp[0], 115.0);
    assert_eq!(q2.accomp_raw[0], "46/40");
    assert_eq!(q2.accomp_status[0], Status::OnTrack);
}

#[test]
fn test_chart_precision_is_one_past_display() {
    let records = vec![rec(1, "CHED-RDC", Quarter::Q1, 2.0, 3.0, 1.0, 3.0, "")];
    let model = assemble(Category::Primary, &records, &Settings::default());
    let overall = model.chart.series(ChartView::Overall);
    assert_eq!(overall.target[2], 66.67);
    assert_eq!(model.rows[2].total_target.percent, Some(66.7));
}

#[test]
fn test_unclamped_settings_are_clamped_on_assemble() {
    let records = vec![rec(1, "CHED-RDC", Quarter::Q1, 2.0, 3.0, 1.0, 3.0, "")];
    let settings = Settings {
        decimals: 400,
        ..Settings::default()
    };
    let model = assemble(Category::Primary, &records, &settings);
    assert_eq!(model.settings.decimals, MAX_DECIMALS);
    let total = &model.rows[2].total_target;
    assert!(total.percent.is_some_and(f64::is_finite));
    assert_eq!(total.percent_display, "66.666667%");
    assert!(model.chart.overall.target.iter().all(|v| v.is_finite()));
}

#[test]
fn test_percent_axis_max() {
    let settings = Settings::default();
    let model = assemble(Category::Primary, &primary_records(), &settings);
    // 170 * 1.2 = 204 -> 210
    assert_eq!(model.chart.overall.percent_axis_max(&settings), 210.0);

    let empty = assemble(Category::Research, &[], &settings);
    assert_eq!(empty.chart.overall.percent_axis_max(&settings), 120.0);
}

#[test]
fn test_status_line() {
    let settings = Settings::default();
    let model = assemble(Category::Primary, &primary_records(), &settings);
    assert_eq!(model.status_line(), "3 row(s) — dataset: CHED");
    let empty = assemble(Category::Extension, &[], &settings);
    assert_eq!(empty.status_line(), "No data — dataset: EXTENSION");
    assert!(empty.rows.is_empty());
}

#[test]
fn test_chart_view_parse_and_serialize() {
    assert_eq!("overall".parse::<ChartView>().unwrap(), ChartView::Overall);
    assert_eq!(
        "q3".parse::<ChartView>().unwrap(),
        ChartView::Quarter(Quarter::Q3)
    );
    assert!("Q5".parse::<ChartView>().is_err());
    assert_eq!(
        serde_json::to_string(&ChartView::Quarter(Quarter::Q1)).unwrap(),
        "\"Q1\""
    );
}
