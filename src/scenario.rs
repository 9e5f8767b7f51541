//! Scenario runner for batch what-if projections
//!
//! Pre-loads the baseline once, then allows running many scenarios with
//! different assumptions without re-reading input files.

use crate::error::ModelError;
use crate::inputs::{Assumptions, BaselineSeries, HorizonConfig};
use crate::projection::{project, Projection, SummaryKpis};

/// Result of one scenario run: the monthly series plus its KPIs
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub projection: Projection,
    pub kpis: SummaryKpis,
}

/// Pre-loaded runner for evaluating many assumption sets against one baseline
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(baseline, HorizonConfig::default());
/// for assumptions in candidates {
///     let outcome = runner.run(&assumptions)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    baseline: BaselineSeries,
    horizon: HorizonConfig,
}

impl ScenarioRunner {
    pub fn new(baseline: BaselineSeries, horizon: HorizonConfig) -> Self {
        Self { baseline, horizon }
    }

    /// Run a single scenario with the given assumptions
    pub fn run(&self, assumptions: &Assumptions) -> Result<ScenarioOutcome, ModelError> {
        let (projection, kpis) = project(&self.horizon, assumptions, &self.baseline)?;
        Ok(ScenarioOutcome { projection, kpis })
    }

    /// Run multiple scenarios in input order
    pub fn run_scenarios(
        &self,
        scenarios: &[Assumptions],
    ) -> Result<Vec<ScenarioOutcome>, ModelError> {
        scenarios.iter().map(|a| self.run(a)).collect()
    }

    pub fn baseline(&self) -> &BaselineSeries {
        &self.baseline
    }

    pub fn horizon(&self) -> &HorizonConfig {
        &self.horizon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{ArpuSchedule, CurveParams, FunnelRates};

    fn assumptions_with_churn(churn_end: f64, duration: usize) -> Assumptions {
        Assumptions {
            rates: FunnelRates {
                install_to_signup: 0.3,
                signup_to_verified: 0.4,
                verified_to_active: 0.9,
                monthly_growth: 0.1,
                android_share: 0.7,
                ios_share: 0.3,
                cpi_android: 8.0,
                cpi_ios: 25.0,
            },
            curves: CurveParams {
                churn_start: 0.25,
                churn_end,
                organic_start: 0.05,
                organic_end: 0.20,
            },
            arpu: ArpuSchedule::constant(250.0, duration).unwrap(),
        }
    }

    #[test]
    fn test_lower_churn_retains_more_users() {
        let baseline = BaselineSeries::new(vec![1000.0, 1240.0]).unwrap();
        let runner = ScenarioRunner::new(baseline, HorizonConfig::default());

        let scenarios = [
            assumptions_with_churn(0.05, 24),
            assumptions_with_churn(0.20, 24),
        ];
        let outcomes = runner.run_scenarios(&scenarios).unwrap();
        assert_eq!(outcomes.len(), 2);

        let retained_low_churn: f64 = outcomes[0]
            .projection
            .records
            .iter()
            .map(|r| r.retained_users)
            .sum();
        let retained_high_churn: f64 = outcomes[1]
            .projection
            .records
            .iter()
            .map(|r| r.retained_users)
            .sum();

        assert!(retained_low_churn > retained_high_churn);
        // Acquisition is unaffected by churn
        assert_eq!(
            outcomes[0].kpis.total_verified_users,
            outcomes[1].kpis.total_verified_users
        );
    }

    #[test]
    fn test_invalid_scenario_propagates() {
        let baseline = BaselineSeries::new(vec![1000.0]).unwrap();
        let runner = ScenarioRunner::new(baseline, HorizonConfig::default());

        let mut bad = assumptions_with_churn(0.05, 24);
        bad.rates.cpi_android = -1.0;
        assert!(runner.run(&bad).is_err());
    }
}
