//! roi-runner: headless evaluation runner for the EcoRater ROI model.
//!
//! Usage:
//!   roi-runner --industry sector31 --revenue 250000000 --maturity developing --carbon-price 65
//!   roi-runner --industry sector11 --revenue 50000000 --maturity beginning --carbon-price 50 --procurement-view
//!   roi-runner ... --json

use anyhow::Result;
use ecorater_core::{
    financials::RoiResult,
    model::RoiModel,
    procurement::{procurement_view, ProcurementParams, ProcurementView},
    profile::CompanyProfile,
    reference::ReferenceData,
};
use std::env;

const USAGE: &str = "\
roi-runner — EcoRater advisory ROI calculator

Required:
  --industry <code>          industry code (e.g. sector31)
  --revenue <amount>         annual revenue
  --maturity <code>          maturity level (beginning|developing|established|advanced|leading)
  --carbon-price <amount>    internal carbon price per metric ton CO2e

Optional:
  --suppliers <count>        supplier count (informational)
  --procurement <amount>     procurement spend override
  --investment <amount>      year-1 investment override
  --reference <path>         reference tables JSON (defaults to built-in)
  --procurement-view         also render the procurement budget view
  --team-size <count>        procurement view: team size override
  --budget-percent <frac>    procurement view: budget fraction of spend
  --savings-allocation <frac> procurement view: savings share to budget
  --hourly-rate <amount>     procurement view: loaded hourly staff cost
  --json                     emit the result as JSON instead of tables";

#[derive(serde::Serialize)]
struct RunnerOutput<'a> {
    result: &'a RoiResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    procurement_view: Option<&'a ProcurementView>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let industry = parse_str(&args, "--industry");
    let maturity = parse_str(&args, "--maturity");
    let revenue = parse_opt::<f64>(&args, "--revenue");
    let carbon_price = parse_opt::<f64>(&args, "--carbon-price");

    let (industry, maturity, revenue, carbon_price) =
        match (industry, maturity, revenue, carbon_price) {
            (Some(i), Some(m), Some(r), Some(c)) => (i, m, r, c),
            _ => {
                eprintln!("{USAGE}");
                std::process::exit(2);
            }
        };

    let reference = match parse_str(&args, "--reference") {
        Some(path) => ReferenceData::load(&path)?,
        None => ReferenceData::builtin(),
    };

    let mut profile = CompanyProfile::new(revenue, &industry, &maturity, carbon_price);
    profile.supplier_count = parse_opt(&args, "--suppliers");
    profile.procurement_spend_override = parse_opt(&args, "--procurement");
    profile.custom_investment_year1 = parse_opt(&args, "--investment");

    let model = RoiModel::new(reference);
    let result = model.evaluate(&profile)?;

    let view = if args.iter().any(|a| a == "--procurement-view") {
        let params = ProcurementParams {
            team_size: parse_opt(&args, "--team-size"),
            budget_percent: parse_opt(&args, "--budget-percent"),
            savings_allocation_percent: parse_opt(&args, "--savings-allocation"),
            hourly_rate: parse_opt(&args, "--hourly-rate"),
        };
        Some(procurement_view(&result, &params)?)
    } else {
        None
    };

    if args.iter().any(|a| a == "--json") {
        let output = RunnerOutput {
            result: &result,
            procurement_view: view.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_summary(&profile, &result);
    if let Some(view) = &view {
        print_procurement_view(view);
    }

    Ok(())
}

fn print_summary(profile: &CompanyProfile, result: &RoiResult) {
    println!("=== ROI SUMMARY ===");
    println!("  industry:          {}", result.industry.name);
    println!("  maturity:          {}", profile.maturity_code);
    println!("  revenue:           ${:.0}", result.revenue);
    println!("  procurement spend: ${:.0}", result.procurement_spend);
    println!(
        "  supply chain CO2e: {:.0} t/year",
        result.supply_chain_emissions / 1000.0
    );
    println!();

    println!("=== BENEFIT BREAKDOWN ===");
    println!(
        "  {:<22} {:>14} {:>14} {:>14}",
        "category", "year 1", "year 2", "year 3"
    );
    let rows: [(&str, fn(&ecorater_core::benefits::YearlyBenefit) -> f64); 5] = [
        ("procurement savings", |b| b.procurement_savings),
        ("carbon value", |b| b.carbon_value_impact),
        ("risk mitigation", |b| b.risk_mitigation_value),
        ("brand value", |b| b.brand_value_impact),
        ("total", |b| b.total),
    ];
    for (label, pick) in rows {
        println!(
            "  {:<22} {:>14} {:>14} {:>14}",
            label,
            format!("${:.0}", pick(&result.benefits[0])),
            format!("${:.0}", pick(&result.benefits[1])),
            format!("${:.0}", pick(&result.benefits[2])),
        );
    }
    println!();

    println!("=== INVESTMENT SCHEDULE ===");
    println!("  year 1:            ${:.0}", result.service_investment.year1);
    println!("  year 2:            ${:.0}", result.service_investment.year2);
    println!("  year 3:            ${:.0}", result.service_investment.year3);
    println!("  total:             ${:.0}", result.total_investment);
    println!();

    println!("=== FINANCIAL METRICS ===");
    println!("  total benefits:    ${:.0}", result.total_benefits);
    println!("  net benefits:      ${:.0}", result.net_benefits);
    println!("  roi ratio:         {:.2}x", result.roi_ratio);
    println!("  npv (10%):         ${:.0}", result.npv);
    if result.recovered_within_horizon {
        println!("  payback:           month {}", result.payback_months);
    } else {
        println!("  payback:           not within 36 months");
    }
}

fn print_procurement_view(view: &ProcurementView) {
    println!();
    println!("=== PROCUREMENT BUDGET IMPACT ===");
    println!("  team size:         {} staff", view.team_size);
    println!("  annual budget:     ${:.0}", view.annual_budget);
    println!(
        "  {:<22} {:>14} {:>14} {:>14} {:>14}",
        "category", "year 1", "year 2", "year 3", "total"
    );
    let rows = [
        ("direct savings", &view.direct_savings),
        ("budget allocation", &view.budget_enhancement),
        ("productivity", &view.productivity_savings),
        ("total benefits", &view.total_benefits),
        ("investment", &view.investment),
    ];
    for (label, totals) in rows {
        println!(
            "  {:<22} {:>14} {:>14} {:>14} {:>14}",
            label,
            format!("${:.0}", totals.year1),
            format!("${:.0}", totals.year2),
            format!("${:.0}", totals.year3),
            format!("${:.0}", totals.total),
        );
    }
    println!("  procurement ROI:   {:.2}x", view.roi_ratio);
    println!(
        "  budget impact:     {:.1}% of the 3-year department budget",
        view.budget_impact_percent
    );
}

fn parse_str(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}

fn parse_opt<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
}
