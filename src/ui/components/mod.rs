pub mod impact_summary;
pub mod metric_badge;
