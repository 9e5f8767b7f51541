//! Month-by-month projection pipeline
//!
//! Data flows strictly forward: baseline extension, curve generation, funnel
//! projection, revenue, then KPI aggregation. Every run is an independent
//! pure computation over its inputs.

pub mod baseline;
pub mod curve;
mod engine;
mod records;
pub mod summary;

pub use engine::ProjectionEngine;
pub use records::{MonthlyRecord, Projection, SpendBasis};
pub use summary::{summarize, SummaryKpis};

use crate::error::ModelError;
use crate::inputs::{Assumptions, BaselineSeries, HorizonConfig};

/// Run a full scenario in one call: projection plus summary KPIs.
///
/// This is the entry point the presentation layer invokes on every input
/// change; there is no hidden state between calls.
pub fn project(
    horizon: &HorizonConfig,
    assumptions: &Assumptions,
    baseline: &BaselineSeries,
) -> Result<(Projection, SummaryKpis), ModelError> {
    let engine = ProjectionEngine::new(assumptions.clone(), *horizon)?;
    let projection = engine.project(baseline)?;
    let kpis = summarize(&projection)?;
    Ok((projection, kpis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{ArpuSchedule, CurveParams, FunnelRates};
    use approx::assert_relative_eq;

    #[test]
    fn test_project_end_to_end() {
        let horizon = HorizonConfig::new(2).unwrap();
        let assumptions = Assumptions {
            rates: FunnelRates {
                install_to_signup: 0.3,
                signup_to_verified: 0.4,
                verified_to_active: 1.0,
                monthly_growth: 0.1,
                android_share: 0.7,
                ios_share: 0.3,
                cpi_android: 8.0,
                cpi_ios: 25.0,
            },
            curves: CurveParams {
                churn_start: 0.0,
                churn_end: 0.0,
                organic_start: 0.0,
                organic_end: 0.0,
            },
            arpu: ArpuSchedule::constant(100.0, 2).unwrap(),
        };
        let baseline = BaselineSeries::new(vec![1000.0]).unwrap();

        let (projection, kpis) = project(&horizon, &assumptions, &baseline).unwrap();

        assert_eq!(projection.records.len(), 2);
        assert_relative_eq!(kpis.total_verified_users, 2100.0, max_relative = 1e-12);
        // 2100 verified / 0.12 conversion = 17500 installs at blended CPI 13.1
        assert_relative_eq!(kpis.total_installs, 17500.0, max_relative = 1e-12);
        assert_relative_eq!(kpis.total_spend, 17500.0 * 13.1, max_relative = 1e-12);
        assert_relative_eq!(kpis.total_revenue, 210000.0, max_relative = 1e-12);
    }
}
