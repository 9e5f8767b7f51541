//! GTM Planner CLI
//!
//! Runs a single acquisition/retention scenario from exported worksheet data
//! and prints the monthly series plus summary KPIs. Percentage flags use the
//! 0-100 scale and are converted to fractions internally.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;

use gtm_planner::inputs::{load_baseline, load_direct};
use gtm_planner::{
    ArpuSchedule, Assumptions, CurveParams, FunnelRates, HorizonConfig, Projection,
    ProjectionEngine, SummaryKpis,
};

#[derive(Debug, Parser)]
#[command(name = "gtm-planner", about = "GTM scenario planner", version)]
struct Args {
    /// CSV with the historical "Total Verified Customers" baseline
    #[arg(long, conflicts_with = "direct_csv")]
    growth_csv: Option<PathBuf>,

    /// CSV with pre-split Installs/Spend/Verified Users columns
    #[arg(long)]
    direct_csv: Option<PathBuf>,

    /// Android cost per install
    #[arg(long, default_value_t = 8.0)]
    cpi_android: f64,

    /// iOS cost per install
    #[arg(long, default_value_t = 25.0)]
    cpi_ios: f64,

    /// Install -> signup conversion, percent
    #[arg(long, default_value_t = 30.0)]
    install_to_signup: f64,

    /// Signup -> verified conversion, percent
    #[arg(long, default_value_t = 40.0)]
    signup_to_verified: f64,

    /// Verified -> active conversion, percent
    #[arg(long, default_value_t = 90.0)]
    verified_to_active: f64,

    /// Churn at month 1, percent
    #[arg(long, default_value_t = 25.0)]
    churn_start: f64,

    /// Churn at the final month, percent
    #[arg(long, default_value_t = 5.0)]
    churn_end: f64,

    /// Compound monthly growth beyond the baseline, percent
    #[arg(long, default_value_t = 10.0)]
    monthly_growth: f64,

    /// Organic/referral share at month 1, percent
    #[arg(long, default_value_t = 5.0)]
    organic_start: f64,

    /// Organic/referral share at the final month, percent
    #[arg(long, default_value_t = 20.0)]
    organic_end: f64,

    /// Android share of installs, percent; iOS share is the complement
    #[arg(long, default_value_t = 70.0)]
    android_share: f64,

    /// Average revenue per retained user per month
    #[arg(long, default_value_t = 0.0)]
    arpu: f64,

    /// Projection horizon in months
    #[arg(long, default_value_t = 24)]
    duration: usize,

    /// Output CSV path for the full monthly series
    #[arg(long, default_value = "projection_output.csv")]
    out: PathBuf,

    /// Emit records and KPIs as JSON instead of the console table
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    records: &'a [gtm_planner::MonthlyRecord],
    kpis: &'a SummaryKpis,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let android_share = args.android_share / 100.0;
    let assumptions = Assumptions {
        rates: FunnelRates {
            install_to_signup: args.install_to_signup / 100.0,
            signup_to_verified: args.signup_to_verified / 100.0,
            verified_to_active: args.verified_to_active / 100.0,
            monthly_growth: args.monthly_growth / 100.0,
            android_share,
            ios_share: 1.0 - android_share,
            cpi_android: args.cpi_android,
            cpi_ios: args.cpi_ios,
        },
        curves: CurveParams {
            churn_start: args.churn_start / 100.0,
            churn_end: args.churn_end / 100.0,
            organic_start: args.organic_start / 100.0,
            organic_end: args.organic_end / 100.0,
        },
        arpu: ArpuSchedule::constant(args.arpu, args.duration)?,
    };
    let horizon = HorizonConfig::new(args.duration)?;
    let engine = ProjectionEngine::new(assumptions, horizon)?;

    let projection = match (&args.growth_csv, &args.direct_csv) {
        (Some(path), None) => {
            let baseline = load_baseline(path)
                .map_err(|e| anyhow::anyhow!("{e}"))
                .with_context(|| format!("failed to load baseline from {}", path.display()))?;
            engine.project(&baseline)?
        }
        (None, Some(path)) => {
            let direct = load_direct(path)
                .map_err(|e| anyhow::anyhow!("{e}"))
                .with_context(|| format!("failed to load direct data from {}", path.display()))?;
            engine.project_direct(&direct)?
        }
        _ => bail!("provide exactly one of --growth-csv or --direct-csv"),
    };

    let kpis = projection.summary()?;

    if args.json {
        let output = JsonOutput {
            records: &projection.records,
            kpis: &kpis,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("GTM Scenario Planner v{}", env!("CARGO_PKG_VERSION"));
        println!("========================\n");
        print!("{}", projection.render_table());
        print_summary(&kpis);
    }

    write_csv(&args.out, &projection)?;
    if !args.json {
        println!("\nFull results written to: {}", args.out.display());
    }

    Ok(())
}

fn print_summary(kpis: &SummaryKpis) {
    println!("\nSummary:");
    println!("  Total Installs:       {:.0}", kpis.total_installs);
    println!("  Total Verified Users: {:.0}", kpis.total_verified_users);
    println!("  Total Spend:          {:.0}", kpis.total_spend);
    println!("  Total Revenue:        {:.0}", kpis.total_revenue);
    println!("  Blended CAC:          {:.2}", kpis.blended_cac);
    println!("  ROI:                  {:.1}%", kpis.roi_percent);
}

fn write_csv(path: &PathBuf, projection: &Projection) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("unable to create {}", path.display()))?;

    writeln!(
        file,
        "Month,PaidInstalls,OrganicInstalls,TotalInstalls,VerifiedUsers,RetainedUsers,Revenue"
    )?;
    for row in &projection.records {
        writeln!(
            file,
            "{},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4}",
            row.month,
            row.paid_installs,
            row.organic_installs,
            row.total_installs,
            row.verified_users,
            row.retained_users,
            row.revenue,
        )?;
    }
    Ok(())
}
