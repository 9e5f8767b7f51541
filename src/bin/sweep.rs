//! Sweep a grid of churn-end and monthly-growth assumptions
//!
//! Runs every combination as an independent scenario and writes the KPIs per
//! cell to sweep_output.csv for side-by-side comparison.
//! Accepts config via environment variables:
//!   GROWTH_CSV, DURATION, ARPU,
//!   CHURN_END_MIN, CHURN_END_MAX, CHURN_END_STEPS,
//!   GROWTH_MIN, GROWTH_MAX, GROWTH_STEPS

use std::env;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use rayon::prelude::*;

use gtm_planner::projection::curve::interpolate;
use gtm_planner::inputs::load_baseline;
use gtm_planner::{
    ArpuSchedule, Assumptions, CurveParams, FunnelRates, HorizonConfig, ScenarioRunner,
};

fn env_f64(name: &str, default: f64) -> f64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn main() -> Result<()> {
    env_logger::init();

    let start = Instant::now();
    let growth_csv = env::var("GROWTH_CSV").unwrap_or_else(|_| "growth_overview.csv".into());
    let duration = env_usize("DURATION", 24);
    let arpu = env_f64("ARPU", 0.0);

    println!("Loading baseline from {}...", growth_csv);
    let baseline = load_baseline(&growth_csv)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("failed to load {}", growth_csv))?;
    println!("Loaded {} baseline months", baseline.len());

    let horizon = HorizonConfig::new(duration)?;
    let runner = ScenarioRunner::new(baseline, horizon);

    // Grid axes, fractions
    let churn_ends = interpolate(
        env_f64("CHURN_END_MIN", 0.02),
        env_f64("CHURN_END_MAX", 0.20),
        env_usize("CHURN_END_STEPS", 10),
    )?;
    let growth_rates = interpolate(
        env_f64("GROWTH_MIN", 0.0),
        env_f64("GROWTH_MAX", 0.25),
        env_usize("GROWTH_STEPS", 11),
    )?;

    let mut grid = Vec::with_capacity(churn_ends.len() * growth_rates.len());
    for &churn_end in &churn_ends {
        for &growth in &growth_rates {
            grid.push((churn_end, growth));
        }
    }

    println!("Running {} scenarios...", grid.len());
    let sweep_start = Instant::now();

    // Each cell is an independent pure run, safe to evaluate in parallel
    let results: Vec<Result<_, gtm_planner::ModelError>> = grid
        .par_iter()
        .map(|&(churn_end, growth)| {
            let assumptions = Assumptions {
                rates: FunnelRates {
                    install_to_signup: 0.30,
                    signup_to_verified: 0.40,
                    verified_to_active: 0.90,
                    monthly_growth: growth,
                    android_share: 0.70,
                    ios_share: 0.30,
                    cpi_android: 8.0,
                    cpi_ios: 25.0,
                },
                curves: CurveParams {
                    churn_start: 0.25,
                    churn_end,
                    organic_start: 0.05,
                    organic_end: 0.20,
                },
                arpu: ArpuSchedule::constant(arpu, duration)?,
            };
            let outcome = runner.run(&assumptions)?;
            Ok((churn_end, growth, outcome.kpis))
        })
        .collect();

    println!("Sweep complete in {:?}", sweep_start.elapsed());

    let output_path = "sweep_output.csv";
    let mut file = File::create(output_path).context("failed to create sweep_output.csv")?;
    writeln!(
        file,
        "ChurnEnd,MonthlyGrowth,TotalInstalls,TotalVerified,TotalSpend,TotalRevenue,BlendedCAC,ROIPercent"
    )?;

    for result in results {
        let (churn_end, growth, kpis) = result?;
        writeln!(
            file,
            "{:.4},{:.4},{:.2},{:.2},{:.2},{:.2},{:.4},{:.2}",
            churn_end,
            growth,
            kpis.total_installs,
            kpis.total_verified_users,
            kpis.total_spend,
            kpis.total_revenue,
            kpis.blended_cac,
            kpis.roi_percent,
        )?;
    }

    println!("Output written to {}", output_path);
    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
