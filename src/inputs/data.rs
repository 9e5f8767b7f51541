//! Scenario input structures
//!
//! All inputs are plain value records validated up front. Rates are fractions
//! in [0, 1] internally; the CLI converts from the 0-100 percentage scale.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Default projection horizon in months
pub const DEFAULT_DURATION_MONTHS: usize = 24;

/// Projection horizon configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HorizonConfig {
    /// Number of months to project
    pub duration: usize,
}

impl HorizonConfig {
    pub fn new(duration: usize) -> Result<Self, ModelError> {
        if duration < 1 {
            return Err(ModelError::invalid("duration must be at least 1 month"));
        }
        Ok(Self { duration })
    }
}

impl Default for HorizonConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION_MONTHS,
        }
    }
}

/// Historical verified-customer counts, one per month, oldest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineSeries {
    values: Vec<f64>,
}

impl BaselineSeries {
    /// Build a baseline series, rejecting empty or negative data
    pub fn new(values: Vec<f64>) -> Result<Self, ModelError> {
        if values.is_empty() {
            return Err(ModelError::invalid("baseline series is empty"));
        }
        if let Some(v) = values.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(ModelError::invalid(format!(
                "baseline values must be finite and non-negative, got {}",
                v
            )));
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Pre-split actuals for the direct-data variant: installs, spend, and
/// verified users are already known per month, so no funnel inversion runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectSeries {
    pub installs: Vec<f64>,
    pub spend: Vec<f64>,
    pub verified_users: Vec<f64>,
}

impl DirectSeries {
    pub fn new(
        installs: Vec<f64>,
        spend: Vec<f64>,
        verified_users: Vec<f64>,
    ) -> Result<Self, ModelError> {
        if installs.is_empty() {
            return Err(ModelError::invalid("direct series is empty"));
        }
        if installs.len() != spend.len() || installs.len() != verified_users.len() {
            return Err(ModelError::invalid(format!(
                "direct series columns must have equal length (installs {}, spend {}, verified {})",
                installs.len(),
                spend.len(),
                verified_users.len()
            )));
        }
        let all_non_negative = installs
            .iter()
            .chain(spend.iter())
            .chain(verified_users.iter())
            .all(|v| v.is_finite() && *v >= 0.0);
        if !all_non_negative {
            return Err(ModelError::invalid(
                "direct series values must be finite and non-negative",
            ));
        }
        Ok(Self {
            installs,
            spend,
            verified_users,
        })
    }

    pub fn len(&self) -> usize {
        self.installs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.installs.is_empty()
    }
}

/// Funnel conversion rates, growth, and acquisition cost parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FunnelRates {
    /// Install -> signup conversion, fraction in [0, 1]
    pub install_to_signup: f64,

    /// Signup -> verified conversion, fraction in [0, 1]
    pub signup_to_verified: f64,

    /// Verified -> active conversion, fraction in [0, 1]
    pub verified_to_active: f64,

    /// Compound monthly growth applied beyond the baseline, >= 0
    pub monthly_growth: f64,

    /// Android share of installs, complementary with ios_share
    pub android_share: f64,

    /// iOS share of installs
    pub ios_share: f64,

    /// Cost per Android install, positive currency
    pub cpi_android: f64,

    /// Cost per iOS install, positive currency
    pub cpi_ios: f64,
}

impl FunnelRates {
    /// Derive the iOS share as the complement of the Android share
    pub fn with_android_share(mut self, android_share: f64) -> Self {
        self.android_share = android_share;
        self.ios_share = 1.0 - android_share;
        self
    }

    /// Share-weighted cost per install across platforms
    pub fn blended_cpi(&self) -> f64 {
        self.android_share * self.cpi_android + self.ios_share * self.cpi_ios
    }

    /// Product of the install->signup and signup->verified conversions
    pub fn conversion_product(&self) -> f64 {
        self.install_to_signup * self.signup_to_verified
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        check_fraction("install_to_signup", self.install_to_signup)?;
        check_fraction("signup_to_verified", self.signup_to_verified)?;
        check_fraction("verified_to_active", self.verified_to_active)?;
        check_fraction("android_share", self.android_share)?;
        check_fraction("ios_share", self.ios_share)?;
        if !self.monthly_growth.is_finite() || self.monthly_growth < 0.0 {
            return Err(ModelError::invalid(format!(
                "monthly_growth must be >= 0, got {}",
                self.monthly_growth
            )));
        }
        if (self.android_share + self.ios_share - 1.0).abs() > 1e-9 {
            return Err(ModelError::invalid(format!(
                "android_share + ios_share must equal 1, got {} + {}",
                self.android_share, self.ios_share
            )));
        }
        if !(self.cpi_android > 0.0) || !(self.cpi_ios > 0.0) {
            return Err(ModelError::invalid(format!(
                "CPI values must be positive, got android {} / ios {}",
                self.cpi_android, self.cpi_ios
            )));
        }
        Ok(())
    }
}

/// Start/end pairs for the churn and organic-share trajectories
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CurveParams {
    pub churn_start: f64,
    pub churn_end: f64,
    pub organic_start: f64,
    pub organic_end: f64,
}

impl CurveParams {
    pub fn validate(&self) -> Result<(), ModelError> {
        check_fraction("churn_start", self.churn_start)?;
        check_fraction("churn_end", self.churn_end)?;
        check_fraction("organic_start", self.organic_start)?;
        check_fraction("organic_end", self.organic_end)?;
        Ok(())
    }
}

/// Average revenue per user for each projected month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArpuSchedule {
    values: Vec<f64>,
}

impl ArpuSchedule {
    /// Constant ARPU across the horizon (the documented default)
    pub fn constant(value: f64, duration: usize) -> Result<Self, ModelError> {
        Self::new(vec![value; duration])
    }

    /// Per-month ARPU values; length must match the horizon duration
    pub fn new(values: Vec<f64>) -> Result<Self, ModelError> {
        if let Some(v) = values.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(ModelError::invalid(format!(
                "ARPU values must be finite and non-negative, got {}",
                v
            )));
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Container for all scenario assumptions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assumptions {
    pub rates: FunnelRates,
    pub curves: CurveParams,
    pub arpu: ArpuSchedule,
}

impl Assumptions {
    /// Validate every parameter against the given horizon
    pub fn validate(&self, horizon: &HorizonConfig) -> Result<(), ModelError> {
        if horizon.duration < 1 {
            return Err(ModelError::invalid("duration must be at least 1 month"));
        }
        self.rates.validate()?;
        self.curves.validate()?;
        if self.arpu.len() != horizon.duration {
            return Err(ModelError::invalid(format!(
                "ARPU schedule has {} months but horizon is {}",
                self.arpu.len(),
                horizon.duration
            )));
        }
        Ok(())
    }
}

fn check_fraction(name: &str, value: f64) -> Result<(), ModelError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ModelError::invalid(format!(
            "{} must be a fraction in [0, 1], got {}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rates() -> FunnelRates {
        FunnelRates {
            install_to_signup: 0.3,
            signup_to_verified: 0.4,
            verified_to_active: 0.9,
            monthly_growth: 0.1,
            android_share: 0.7,
            ios_share: 0.3,
            cpi_android: 8.0,
            cpi_ios: 25.0,
        }
    }

    #[test]
    fn test_valid_rates_pass() {
        assert!(test_rates().validate().is_ok());
    }

    #[test]
    fn test_blended_cpi() {
        // 0.7 * 8 + 0.3 * 25 = 13.1
        assert!((test_rates().blended_cpi() - 13.1).abs() < 1e-12);
    }

    #[test]
    fn test_shares_must_be_complementary() {
        let mut rates = test_rates();
        rates.ios_share = 0.5;
        assert!(matches!(
            rates.validate(),
            Err(ModelError::InvalidArgument(_))
        ));

        let fixed = rates.with_android_share(0.7);
        assert!(fixed.validate().is_ok());
    }

    #[test]
    fn test_rate_out_of_range_rejected() {
        let mut rates = test_rates();
        rates.install_to_signup = 1.2;
        assert!(rates.validate().is_err());

        let mut rates = test_rates();
        rates.monthly_growth = -0.1;
        assert!(rates.validate().is_err());

        let mut rates = test_rates();
        rates.cpi_ios = 0.0;
        assert!(rates.validate().is_err());
    }

    #[test]
    fn test_zero_duration_rejected() {
        assert!(HorizonConfig::new(0).is_err());
        assert!(HorizonConfig::new(1).is_ok());
        assert_eq!(HorizonConfig::default().duration, 24);
    }

    #[test]
    fn test_baseline_rejects_empty_and_negative() {
        assert!(BaselineSeries::new(vec![]).is_err());
        assert!(BaselineSeries::new(vec![10.0, -1.0]).is_err());
        assert!(BaselineSeries::new(vec![10.0, 12.5]).is_ok());
    }

    #[test]
    fn test_direct_series_requires_equal_columns() {
        let ok = DirectSeries::new(vec![1.0, 2.0], vec![10.0, 20.0], vec![0.5, 1.0]);
        assert!(ok.is_ok());

        let ragged = DirectSeries::new(vec![1.0, 2.0], vec![10.0], vec![0.5, 1.0]);
        assert!(ragged.is_err());
    }

    #[test]
    fn test_arpu_constant() {
        let arpu = ArpuSchedule::constant(250.0, 24).unwrap();
        assert_eq!(arpu.len(), 24);
        assert!(arpu.values().iter().all(|&v| v == 250.0));
        assert!(ArpuSchedule::constant(-1.0, 24).is_err());
    }
}
