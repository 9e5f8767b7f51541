//! Core projection engine for monthly acquisition and retention
//!
//! Implements the funnel recurrence: a baseline verified-user count is
//! inverted through the install->signup->verified funnel to get paid
//! installs, organic installs are layered on proportionally, and the funnel
//! is re-applied to the inflated install count. Organic volume therefore
//! amplifies verified users above the baseline whenever the organic share is
//! positive; that amplification is an intentional modeling choice.

use log::debug;

use super::baseline::extend;
use super::curve::interpolate;
use super::records::{MonthlyRecord, Projection, SpendBasis};
use crate::error::ModelError;
use crate::inputs::{Assumptions, BaselineSeries, DirectSeries, HorizonConfig};

/// Main projection engine
///
/// Construction validates every assumption against the horizon, so a built
/// engine can only fail at run time on divide-by-zero conditions.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    assumptions: Assumptions,
    horizon: HorizonConfig,
}

impl ProjectionEngine {
    pub fn new(assumptions: Assumptions, horizon: HorizonConfig) -> Result<Self, ModelError> {
        assumptions.validate(&horizon)?;
        Ok(Self {
            assumptions,
            horizon,
        })
    }

    pub fn horizon(&self) -> &HorizonConfig {
        &self.horizon
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Project the full horizon from a historical verified-user baseline
    pub fn project(&self, baseline: &BaselineSeries) -> Result<Projection, ModelError> {
        let duration = self.horizon.duration;
        if baseline.len() > duration {
            return Err(ModelError::invalid(format!(
                "baseline has {} months but horizon is {}",
                baseline.len(),
                duration
            )));
        }

        let rates = &self.assumptions.rates;
        let conversion = rates.conversion_product();
        if conversion == 0.0 {
            return Err(ModelError::DivisionByZero("funnel conversion product"));
        }

        let base = extend(baseline.values(), duration, rates.monthly_growth)?;
        let churn = interpolate(
            self.assumptions.curves.churn_start,
            self.assumptions.curves.churn_end,
            duration,
        )?;
        let organic = interpolate(
            self.assumptions.curves.organic_start,
            self.assumptions.curves.organic_end,
            duration,
        )?;
        let arpu = self.assumptions.arpu.values();

        debug!(
            "projecting {} months from {} baseline months (conversion product {:.4})",
            duration,
            baseline.len(),
            conversion
        );

        let mut records = Vec::with_capacity(duration);
        for i in 0..duration {
            // Funnel inversion: installs needed to produce the baseline count
            let paid = base[i] / conversion;
            let organic_installs = paid * organic[i];
            let total = paid + organic_installs;
            // Re-apply the funnel to the inflated install count
            let verified = total * conversion;
            let retained = retain(verified, rates.verified_to_active, churn[i]);

            records.push(MonthlyRecord {
                month: (i + 1) as u32,
                paid_installs: paid,
                organic_installs,
                total_installs: total,
                verified_users: verified,
                retained_users: retained,
                revenue: retained * arpu[i],
            });
        }

        Ok(Projection {
            records,
            spend_basis: SpendBasis::BlendedCpi {
                unit_cost: rates.blended_cpi(),
            },
        })
    }

    /// Project from pre-split actuals: installs, spend, and verified users
    /// are supplied per month, so only retention and revenue are computed
    pub fn project_direct(&self, direct: &DirectSeries) -> Result<Projection, ModelError> {
        let duration = self.horizon.duration;
        if direct.len() != duration {
            return Err(ModelError::invalid(format!(
                "direct series has {} months but horizon is {}",
                direct.len(),
                duration
            )));
        }

        let rates = &self.assumptions.rates;
        let churn = interpolate(
            self.assumptions.curves.churn_start,
            self.assumptions.curves.churn_end,
            duration,
        )?;
        let arpu = self.assumptions.arpu.values();

        debug!("projecting {} months from direct-data series", duration);

        let mut records = Vec::with_capacity(duration);
        for i in 0..duration {
            let verified = direct.verified_users[i];
            let retained = retain(verified, rates.verified_to_active, churn[i]);

            records.push(MonthlyRecord {
                month: (i + 1) as u32,
                paid_installs: direct.installs[i],
                organic_installs: 0.0,
                total_installs: direct.installs[i],
                verified_users: verified,
                retained_users: retained,
                revenue: retained * arpu[i],
            });
        }

        Ok(Projection {
            records,
            spend_basis: SpendBasis::Supplied {
                monthly_spend: direct.spend.clone(),
            },
        })
    }
}

/// Retention step shared by both variants: verified users surviving churn
fn retain(verified_users: f64, verified_to_active: f64, churn: f64) -> f64 {
    verified_users * verified_to_active * (1.0 - churn)
}
