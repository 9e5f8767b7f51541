//! KPI aggregation over a projection
//!
//! Reduces the monthly series to headline figures. Policy decisions for the
//! two divide-by-zero cases: blended CAC and ROI both signal DivisionByZero
//! rather than returning a sentinel.

use serde::{Deserialize, Serialize};

use super::records::{Projection, SpendBasis};
use crate::error::ModelError;

/// Headline figures derived from the full monthly series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryKpis {
    pub total_verified_users: f64,
    pub total_installs: f64,
    pub total_spend: f64,
    pub total_revenue: f64,

    /// Total spend per verified user, blended across platforms
    pub blended_cac: f64,

    /// (revenue - spend) / spend, as a percentage
    pub roi_percent: f64,
}

/// Reduce a projection to its summary KPIs
pub fn summarize(projection: &Projection) -> Result<SummaryKpis, ModelError> {
    let total_installs: f64 = projection.records.iter().map(|r| r.total_installs).sum();
    let total_verified_users: f64 = projection.records.iter().map(|r| r.verified_users).sum();
    let total_revenue: f64 = projection.records.iter().map(|r| r.revenue).sum();

    // Cost mix is applied to aggregate installs, not per month
    let total_spend = match &projection.spend_basis {
        SpendBasis::BlendedCpi { unit_cost } => total_installs * unit_cost,
        SpendBasis::Supplied { monthly_spend } => monthly_spend.iter().sum(),
    };

    if total_verified_users == 0.0 {
        return Err(ModelError::DivisionByZero("total verified users"));
    }
    let blended_cac = total_spend / total_verified_users;

    if total_spend == 0.0 {
        return Err(ModelError::DivisionByZero("total spend"));
    }
    let roi_percent = (total_revenue - total_spend) / total_spend * 100.0;

    Ok(SummaryKpis {
        total_verified_users,
        total_installs,
        total_spend,
        total_revenue,
        blended_cac,
        roi_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::records::MonthlyRecord;
    use approx::assert_relative_eq;

    fn record(month: u32, installs: f64, verified: f64, revenue: f64) -> MonthlyRecord {
        MonthlyRecord {
            month,
            paid_installs: installs,
            organic_installs: 0.0,
            total_installs: installs,
            verified_users: verified,
            retained_users: verified,
            revenue,
        }
    }

    #[test]
    fn test_blended_spend_applied_to_aggregate_installs() {
        let projection = Projection {
            records: vec![
                record(1, 4000.0, 500.0, 0.0),
                record(2, 6000.0, 700.0, 0.0),
            ],
            spend_basis: SpendBasis::BlendedCpi { unit_cost: 13.1 },
        };

        let kpis = summarize(&projection).unwrap();
        assert_relative_eq!(kpis.total_installs, 10000.0);
        assert_relative_eq!(kpis.total_spend, 131000.0, max_relative = 1e-12);
        assert_relative_eq!(kpis.blended_cac, 131000.0 / 1200.0, max_relative = 1e-12);
    }

    #[test]
    fn test_direct_spend_is_summed_column() {
        let projection = Projection {
            records: vec![
                record(1, 4000.0, 500.0, 0.0),
                record(2, 6000.0, 700.0, 0.0),
            ],
            spend_basis: SpendBasis::Supplied {
                monthly_spend: vec![40000.0, 60000.0],
            },
        };

        let kpis = summarize(&projection).unwrap();
        assert_relative_eq!(kpis.total_spend, 100000.0);
    }

    #[test]
    fn test_roi_fifty_percent() {
        let projection = Projection {
            records: vec![record(1, 10000.0, 1200.0, 150000.0)],
            spend_basis: SpendBasis::Supplied {
                monthly_spend: vec![100000.0],
            },
        };

        let kpis = summarize(&projection).unwrap();
        assert_relative_eq!(kpis.total_revenue, 150000.0);
        assert_relative_eq!(kpis.roi_percent, 50.0);
    }

    #[test]
    fn test_zero_verified_users_signals() {
        let projection = Projection {
            records: vec![record(1, 100.0, 0.0, 0.0)],
            spend_basis: SpendBasis::BlendedCpi { unit_cost: 10.0 },
        };

        assert_eq!(
            summarize(&projection).unwrap_err(),
            ModelError::DivisionByZero("total verified users")
        );
    }

    #[test]
    fn test_zero_spend_signals() {
        let projection = Projection {
            records: vec![record(1, 100.0, 50.0, 10.0)],
            spend_basis: SpendBasis::Supplied {
                monthly_spend: vec![0.0],
            },
        };

        assert_eq!(
            summarize(&projection).unwrap_err(),
            ModelError::DivisionByZero("total spend")
        );
    }
}
