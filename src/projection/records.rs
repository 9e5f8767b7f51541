//! Projection output structures

use serde::{Deserialize, Serialize};

/// A single month of projection output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Projection month (1-indexed for display)
    pub month: u32,

    /// Paid installs implied by the funnel inversion
    pub paid_installs: f64,

    /// Organic/referral installs, proportional to the paid base
    pub organic_installs: f64,

    /// Paid plus organic installs
    pub total_installs: f64,

    /// Verified users after re-applying the funnel to total installs
    pub verified_users: f64,

    /// Verified users still active after churn
    pub retained_users: f64,

    /// Monthly revenue from retained users
    pub revenue: f64,
}

/// How total spend is derived when aggregating a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SpendBasis {
    /// Modeled variant: aggregate installs times a share-weighted unit cost
    BlendedCpi { unit_cost: f64 },

    /// Direct-data variant: spend was supplied per month and is summed as-is
    Supplied { monthly_spend: Vec<f64> },
}

/// Complete projection: the ordered monthly series plus its spend basis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projection {
    pub records: Vec<MonthlyRecord>,
    pub spend_basis: SpendBasis,
}

impl Projection {
    /// Derive summary KPIs from the monthly series
    pub fn summary(&self) -> Result<super::SummaryKpis, crate::error::ModelError> {
        super::summary::summarize(self)
    }

    /// Fixed-width month table for console display
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{:>5} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14}\n",
            "Month", "Paid", "Organic", "Installs", "Verified", "Retained", "Revenue"
        ));
        out.push_str(&"-".repeat(96));
        out.push('\n');
        for row in &self.records {
            out.push_str(&format!(
                "{:>5} {:>14.1} {:>14.1} {:>14.1} {:>14.1} {:>14.1} {:>14.2}\n",
                row.month,
                row.paid_installs,
                row.organic_installs,
                row.total_installs,
                row.verified_users,
                row.retained_users,
                row.revenue,
            ));
        }
        out
    }
}
