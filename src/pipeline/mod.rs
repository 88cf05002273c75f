pub mod stage1_normalize;
pub mod stage2_denominator;
pub mod stage3_matrix;
pub mod stage4_metrics;
pub mod stage5_report;
pub mod stage6_export;
