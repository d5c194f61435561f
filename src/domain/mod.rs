//! Data model and pure impact logic live here.

pub mod app_state;
pub mod entities;
pub mod impact;

pub use app_state::AppState;
#[allow(unused_imports)]
pub use entities::{AnalyticsPayload, ImpactKey, ImpactVerdict, PlayerId, StatSnapshot, TeamId};
#[allow(unused_imports)]
pub use impact::{
    classify, format_signed, is_negative_impact, summarize, win_pct_delta, Direction,
    ImpactSummary, ImpactTone, MetricBadge, RenderModel,
};
