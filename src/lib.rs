//! GTM Planner - scenario-planning engine for user acquisition and retention
//!
//! This library provides:
//! - Month-by-month funnel projections from a historical verified-user baseline
//! - Baseline extrapolation via compound monthly growth
//! - Churn and organic-share trajectories by linear interpolation
//! - Revenue projection from a per-month ARPU schedule
//! - Aggregate KPIs: total spend, total revenue, blended CAC, ROI
//! - A scenario runner for batch what-if evaluation

pub mod error;
pub mod inputs;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use error::ModelError;
pub use inputs::{
    ArpuSchedule, Assumptions, BaselineSeries, CurveParams, DirectSeries, FunnelRates,
    HorizonConfig,
};
pub use projection::{project, MonthlyRecord, Projection, ProjectionEngine, SummaryKpis};
pub use scenario::ScenarioRunner;
