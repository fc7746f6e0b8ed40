//! Terminal version of the AI search ROI calculator.
//!
//! # Usage
//!
//! ```bash
//! # List benchmark presets
//! cargo run --bin roi -- presets
//!
//! # Estimate from a preset, overriding some values
//! cargo run --bin roi -- estimate --industry "Cybersecurity" --mention-rate 20
//!
//! # Machine-readable output
//! cargo run --bin roi -- estimate --traffic 80000 --cpc 9.5 --json
//!
//! # Step-by-step prompts
//! cargo run --bin roi -- wizard
//! ```
//!
//! # Features
//!
//! - **Presets**: Benchmark catalog as a table
//! - **Estimate**: One-shot calculation from flags
//! - **Wizard**: Interactive prompts prefilled from the chosen benchmark
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use ai_search_roi::application::services::CalculatorService;
use ai_search_roi::domain::input::RawInput;
use ai_search_roi::domain::report::Report;
use ai_search_roi::utils::format::{format_count, format_dollars, format_dollars_full};
use ai_search_roi::utils::site::parse_site;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use comfy_table::{Cell, Table, modifiers::UTF8_ROUND_CORNERS};
use dialoguer::{Input, Select};
use tracing_subscriber::EnvFilter;

/// Estimate revenue lost to AI search.
#[derive(Parser)]
#[command(name = "roi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// List industry benchmark presets
    Presets,

    /// Calculate from command-line flags
    Estimate(EstimateArgs),

    /// Enter values interactively
    Wizard,
}

/// Flags for a one-shot estimate. Omitted metrics come from the preset.
#[derive(Args)]
struct EstimateArgs {
    /// Industry preset name (unknown names are used as a custom label)
    #[arg(short, long)]
    industry: Option<String>,

    /// Website shown in the report
    #[arg(short, long, default_value = "")]
    website: String,

    /// Monthly organic visits
    #[arg(long)]
    traffic: Option<f64>,

    /// Average cost-per-click ($)
    #[arg(long)]
    cpc: Option<f64>,

    /// Cost per lead ($)
    #[arg(long)]
    cpl: Option<f64>,

    /// Visitor-to-lead conversion rate (%)
    #[arg(long)]
    conversion: Option<f64>,

    /// Share of queries shifting to AI search (%, 10-60)
    #[arg(long)]
    ai_shift: Option<f64>,

    /// How often AI answers cite the brand (%, 0-100)
    #[arg(short, long, default_value_t = 0.0)]
    mention_rate: f64,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let calculator = CalculatorService::new();

    match cli.command {
        Commands::Presets => print_presets(&calculator),
        Commands::Estimate(args) => estimate(&calculator, args)?,
        Commands::Wizard => wizard(&calculator)?,
    }

    Ok(())
}

/// Prints the benchmark catalog.
fn print_presets(calculator: &CalculatorService) {
    let mut table = Table::new();
    table.apply_modifier(UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new("Industry"),
        Cell::new("CPC ($)"),
        Cell::new("CPL ($)"),
        Cell::new("Traffic"),
        Cell::new("Conversion (%)"),
        Cell::new("AI Shift (%)"),
    ]);

    for preset in calculator.presets() {
        table.add_row(vec![
            Cell::new(preset.name),
            Cell::new(preset.default_cpc),
            Cell::new(preset.default_cpl),
            Cell::new(format_count(f64::from(preset.default_traffic))),
            Cell::new(preset.default_conversion),
            Cell::new(preset.ai_shift),
        ]);
    }

    println!("{table}");
}

/// Runs one estimate from flags.
///
/// # Flow
///
/// 1. Prefill from the named preset (or the default preset)
/// 2. Override with any metric flags given
/// 3. Clamp and calculate
fn estimate(calculator: &CalculatorService, args: EstimateArgs) -> Result<()> {
    if !args.website.trim().is_empty() {
        parse_site(&args.website).context("Invalid --website")?;
    }

    let base = calculator.initial().input;
    let industry = args
        .industry
        .unwrap_or_else(|| calculator.default_preset().name.to_string());
    let prefill = calculator.prefill(&industry, base);

    let mut raw = RawInput::from(prefill.input);
    raw.monthly_organic_traffic = args.traffic.or(raw.monthly_organic_traffic);
    raw.avg_cpc = args.cpc.or(raw.avg_cpc);
    raw.cost_per_lead = args.cpl.or(raw.cost_per_lead);
    raw.conversion_rate = args.conversion.or(raw.conversion_rate);
    raw.ai_shift_pct = args.ai_shift.or(raw.ai_shift_pct);
    raw.ai_mention_rate = Some(args.mention_rate);

    let report = calculator.report(&args.website, &prefill.industry, raw.clamp());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if prefill.is_custom() {
            println!(
                "{}",
                format!(
                    "⚠️  '{}' is not a benchmark preset; using entered values",
                    prefill.industry
                )
                .yellow()
            );
        }
        print_report(&report);
    }

    Ok(())
}

/// Interactive two-step flow: website, then industry and metrics.
fn wizard(calculator: &CalculatorService) -> Result<()> {
    println!("{}", "How Much Is AI Search Costing You?".bright_blue().bold());
    println!();

    let website: String = Input::new()
        .with_prompt("Your website")
        .validate_with(|value: &String| parse_site(value).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;

    let names: Vec<&str> = calculator.presets().iter().map(|p| p.name).collect();
    let selection = Select::new()
        .with_prompt("Industry")
        .items(&names)
        .default(0)
        .interact()?;

    let prefill = calculator.prefill(names[selection], calculator.initial().input);
    let defaults = prefill.input;

    println!();
    println!(
        "{}",
        "We pre-filled industry benchmarks. Adjust the numbers to match your business."
            .bright_white()
    );

    let raw = RawInput {
        monthly_organic_traffic: Some(prompt_number(
            "Monthly organic traffic",
            defaults.monthly_organic_traffic,
        )?),
        avg_cpc: Some(prompt_number("Average CPC ($)", defaults.avg_cpc)?),
        cost_per_lead: Some(prompt_number("Cost per lead ($)", defaults.cost_per_lead)?),
        conversion_rate: Some(prompt_number(
            "Conversion rate (%)",
            defaults.conversion_rate,
        )?),
        ai_shift_pct: Some(prompt_number(
            "Traffic shifting to AI search (%, 10-60)",
            defaults.ai_shift_pct,
        )?),
        ai_mention_rate: Some(prompt_number(
            "AI mention rate (%, 0-100)",
            defaults.ai_mention_rate,
        )?),
    };

    println!();
    let report = calculator.report(&website, &prefill.industry, raw.clamp());
    print_report(&report);

    Ok(())
}

fn prompt_number(prompt: &str, default: f64) -> Result<f64> {
    let value: f64 = Input::new()
        .with_prompt(prompt)
        .default(default)
        .interact_text()?;
    Ok(value)
}

/// Prints the results cards.
fn print_report(report: &Report) {
    let input = &report.input;
    let result = &report.result;
    let upside = &report.opportunity;

    println!(
        "{} {}",
        "AI Search Impact for".bright_white().bold(),
        report.website.cyan().bold()
    );
    println!(
        "{}",
        format!(
            "{} · {} monthly organic visitors · {}% AI mention rate",
            report.industry,
            format_count(input.monthly_organic_traffic),
            input.ai_mention_rate
        )
        .dimmed()
    );
    println!();

    println!(
        "  Queries shifting to AI:  {}",
        format_count(result.estimated_ai_queries).bright_white()
    );
    println!(
        "  Monthly lost clicks:     {}",
        format_count(result.lost_clicks as f64).bright_white()
    );
    println!(
        "  Monthly lost leads:      {}",
        format_count(result.lost_leads).bright_white()
    );
    println!();

    println!("{}", "Cost-per-click view".bright_white().bold());
    println!(
        "  Monthly: {}   Annual: {}   3-Year: {}",
        format_dollars_full(result.monthly_loss_cpc),
        format_dollars(result.annual_loss_cpc).red().bold(),
        format_dollars(result.three_year_loss_cpc)
    );
    println!("{}", "Cost-per-lead view".bright_white().bold());
    println!(
        "  Monthly: {}   Annual: {}   3-Year: {}",
        format_dollars_full(result.monthly_loss_cpl),
        format_dollars(result.annual_loss_cpl).red().bold(),
        format_dollars(result.three_year_loss_cpl)
    );
    println!(
        "{}",
        "  3-year figures assume 15% YoY growth in AI search adoption".dimmed()
    );
    println!();

    println!("{}", "The upside: get cited in AI results".green().bold());
    println!(
        "  Up to {} clicks/month, {} leads worth {}/month in pipeline value",
        format_count(upside.potential_clicks as f64).green(),
        format_count(upside.potential_leads).green(),
        format_dollars_full(upside.monthly_pipeline_value).green().bold()
    );
}
