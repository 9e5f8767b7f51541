//! Scenario input structures and data loading

mod data;
pub mod loader;

pub use data::{
    ArpuSchedule, Assumptions, BaselineSeries, CurveParams, DirectSeries, FunnelRates,
    HorizonConfig, DEFAULT_DURATION_MONTHS,
};
pub use loader::{load_baseline, load_baseline_from_reader, load_direct, load_direct_from_reader};
