//! carry-drift CLI - interest rate differential and carry analysis
//!
//! ## Example Usage
//!
//! ```bash
//! # Analyse a pasted rate table from a file
//! carry-drift analyze rates.txt --min-differential 0.25
//!
//! # Read from stdin, skip commentary, export everything as CSV
//! pbpaste | carry-drift analyze --no-commentary -o carry_trade_analysis.csv
//!
//! # Show the parsed rates only
//! carry-drift rates rates.txt
//!
//! # List the pair catalog
//! carry-drift pairs
//! ```

use carry_drift::catalog::PairCatalog;
use carry_drift::classifier::{PairDifferential, Position};
use carry_drift::commentary::{high_impact_context, RiskSentiment};
use carry_drift::config::{AnalysisConfig, PairUniverse};
use carry_drift::engine::{CarryAnalysis, CarryEngine};
use carry_drift::error::CarryError;
use carry_drift::export;
use carry_drift::parser::RateTable;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

const SAMPLE_INPUT: &str = "Federal Reserve 5.50%
European Central Bank 4.50%
Bank of England 5.25%
Reserve Bank of Australia 4.35%
Reserve Bank of New Zealand 5.50%
Bank of Japan 0.10%
Bank of Canada 5.00%
Swiss National Bank 1.75%";

/// carry-drift: find FX pairs that earn or pay carry
#[derive(Parser)]
#[command(name = "carry-drift")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Interest rate differential and carry analysis for major FX pairs",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse a central bank rate table
    Analyze {
        /// Rate table file (reads stdin when omitted)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Minimum absolute rate differential in percent (0-10)
        #[arg(short = 'm', long)]
        min_differential: Option<f64>,

        /// Hide trend bias and risk commentary
        #[arg(long)]
        no_commentary: bool,

        /// Evaluate every currency permutation instead of the standard pair list
        #[arg(long)]
        all_permutations: bool,

        /// Show the strategy watchlist
        #[arg(short = 'w', long)]
        watchlist: bool,

        /// Export all records (.csv or .json)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Show the parsed interest rates, highest first
    Rates {
        /// Rate table file (reads stdin when omitted)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// List the currency pairs that are evaluated
    Pairs {
        /// List every currency permutation instead of the standard pair list
        #[arg(long)]
        all_permutations: bool,
    },

    /// Show version, configuration and the expected input format
    Info,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".carry-drift").join("config.toml"))
}

/// Load configuration from the given path, or the default location, falling back to defaults.
fn load_config(path: Option<&Path>) -> AnalysisConfig {
    if let Some(config_path) = path {
        match fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => return config,
                Err(e) => {
                    eprintln!("{} Failed to parse config: {}", "Warning:".yellow(), e);
                }
            },
            Err(e) => {
                eprintln!("{} Failed to read config: {}", "Warning:".yellow(), e);
            }
        }
    } else if let Some(default_config) = default_config_path() {
        if default_config.exists() {
            if let Ok(contents) = fs::read_to_string(&default_config) {
                if let Ok(config) = toml::from_str(&contents) {
                    return config;
                }
            }
        }
    }

    AnalysisConfig::default()
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref());

    if cli.verbose {
        println!(
            "{} v{}",
            "carry-drift".cyan().bold(),
            env!("CARGO_PKG_VERSION")
        );
    }

    let result = match cli.command {
        Commands::Analyze {
            input,
            min_differential,
            no_commentary,
            all_permutations,
            watchlist,
            output,
        } => {
            let mut config = config;
            if let Some(min) = min_differential {
                config.min_differential = min;
            }
            if no_commentary {
                config.show_commentary = false;
            }
            if all_permutations {
                config.pair_universe = PairUniverse::Permutations;
            }
            analyze(AnalyzeConfig {
                input,
                watchlist,
                output,
                verbose: cli.verbose,
                config,
            })
        }
        Commands::Rates { input } => show_rates(input.as_deref(), &config),
        Commands::Pairs { all_permutations } => show_pairs(all_permutations, &config),
        Commands::Info => show_info(&config),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(hint) = input_hint(e.as_ref()) {
            eprintln!("{}", hint);
        }
        process::exit(1);
    }
}

/// Extra guidance printed after errors caused by the pasted text itself
fn input_hint(err: &(dyn std::error::Error + 'static)) -> Option<&'static str> {
    err.downcast_ref::<CarryError>()
        .filter(|e| e.is_input_error())
        .map(|_| {
            "Make sure the data includes central bank names and interest rates \
             in percentage format."
        })
}

struct AnalyzeConfig {
    input: Option<PathBuf>,
    watchlist: bool,
    output: Option<PathBuf>,
    verbose: bool,
    config: AnalysisConfig,
}

fn read_input(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn analyze(cfg: AnalyzeConfig) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(cfg.input.as_deref())?;
    let show_commentary = cfg.config.show_commentary;
    let engine = CarryEngine::new(cfg.config)?;
    let analysis = engine.run(&text)?;

    println!(
        "{} Found interest rates for {} currencies",
        "✓".green().bold(),
        analysis.rates.len()
    );
    if cfg.verbose {
        println!(
            "  {} {}  {} {}",
            "Pairs evaluated:".bold(),
            engine.pairs().len(),
            "Min differential:".bold(),
            engine.config().min_differential
        );
    }
    println!();
    print_rates(&analysis.rates);

    let report = &analysis.report;
    if report.is_empty() {
        println!(
            "{}",
            "No pairs found meeting the minimum rate differential criteria.".yellow()
        );
        return Ok(());
    }

    println!("{}", "Earn Interest Opportunities".green().bold());
    println!("{}", "===========================".green());
    print_side(
        "By going LONG",
        &report.earning(Position::Long),
        show_commentary,
        "No long positions earn interest",
    );
    print_side(
        "By going SHORT",
        &report.earning(Position::Short),
        show_commentary,
        "No short positions earn interest",
    );

    println!("{}", "Pay Interest Positions".red().bold());
    println!("{}", "======================".red());
    print_side(
        "By going LONG",
        &report.paying(Position::Long),
        show_commentary,
        "No long positions pay interest",
    );
    print_side(
        "By going SHORT",
        &report.paying(Position::Short),
        show_commentary,
        "No short positions pay interest",
    );

    if show_commentary {
        print_high_impact(&analysis);
    }

    if cfg.watchlist {
        print_watchlist(&engine, &analysis);
    }

    let summary = report.summary();
    println!("{}", "Summary".bold());
    println!("{}", "=======".dimmed());
    println!("  {} {}", "Total opportunities:".bold(), summary.total_opportunities);
    println!("  {} {}", "Earn opportunities:".bold(), summary.earn_opportunities);
    println!("  {} {}", "High impact pairs:".bold(), summary.high_impact_pairs);
    println!("  {} {}", "Moderate pairs:".bold(), summary.moderate_pairs);
    println!();

    if let Some(output_path) = cfg.output {
        let is_json = output_path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            export::write_json_file(report.records(), &output_path)?;
        } else {
            export::write_csv_file(report.records(), &output_path)?;
        }
        println!(
            "{} Results saved to: {}",
            "✓".green().bold(),
            output_path.display()
        );
    }

    Ok(())
}

fn print_rates(rates: &RateTable) {
    println!("{}", "Current Interest Rates".bold());
    println!("{}", "======================".dimmed());
    for (currency, rate) in rates.sorted_by_rate() {
        println!("  {:<6} {:>7.2}%", currency.to_string().cyan(), rate);
    }
    println!();
}

fn print_side(title: &str, records: &[&PairDifferential], show_commentary: bool, empty: &str) {
    println!("{}", title.bold());
    if records.is_empty() {
        println!("  {}", empty.dimmed());
        println!();
        return;
    }

    for r in records {
        let diff = format!("{:+.3}%", r.differential);
        let diff = if r.is_earning() { diff.green() } else { diff.red() };
        print!(
            "  {:<8} {:<20} {:>9}  base {:>5.2}  quote {:>5.2}",
            r.pair.to_string(),
            r.description,
            diff,
            r.base_rate,
            r.quote_rate
        );
        if show_commentary {
            if let Some(trend) = &r.trend {
                print!("  {} ({} risk)", trend.trend_bias, trend.risk_level);
            }
        }
        println!();
    }
    println!();
}

fn print_high_impact(analysis: &CarryAnalysis) {
    let high_impact = analysis.report.high_impact();
    if high_impact.is_empty() {
        return;
    }

    println!("{}", "High Impact Carry Pairs (|Differential| > 2%)".cyan().bold());
    println!(
        "{}",
        "These pairs show strong trend characteristics and require careful risk management".dimmed()
    );
    for r in high_impact {
        println!("  {} {:+.3}% differential", r.pair.to_string().bold(), r.differential);
        if let Some(trend) = &r.trend {
            println!("    {} {}", "Trend bias:".bold(), trend.trend_bias);
            println!("    {} {}", "Risk level:".bold(), trend.risk_level);
            println!("    {} {}", "Market behavior:".bold(), trend.market_behavior);
            println!(
                "    {} {}",
                "Trading implication:".bold(),
                trend.tier.trading_implication()
            );
        }
        println!(
            "    {} {}",
            "Trading context:".bold(),
            high_impact_context(r.differential).yellow()
        );
        if let Some(sentiment) = RiskSentiment::of(&r.pair) {
            println!("    {} {}", "Risk sentiment:".bold(), sentiment);
        }
    }
    println!();
}

fn print_watchlist(engine: &CarryEngine, analysis: &CarryAnalysis) {
    println!("{}", "Strategy Watchlist".magenta().bold());
    println!("{}", "==================".magenta());
    for group in engine.watchlist(analysis) {
        println!(
            "  {} {}",
            group.tier.label().bold(),
            format!("- {}", group.tier.strategy_note()).dimmed()
        );
        if group.records.is_empty() {
            println!("    {}", "none".dimmed());
        }
        for r in group.records {
            println!("    {:<8} {:+.3}%", r.pair.to_string(), r.differential);
        }
    }
    println!();
}

fn show_rates(
    input: Option<&Path>,
    config: &AnalysisConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let engine = CarryEngine::new(config.clone())?;
    let observations = engine.parser().parse_observations(&text)?;
    let rates: RateTable = observations.iter().map(|o| (o.currency, o.rate)).collect();

    println!(
        "{} Matched {} lines, {} currencies",
        "✓".green().bold(),
        observations.len(),
        rates.len()
    );
    println!();
    print_rates(&rates);
    Ok(())
}

fn show_pairs(
    all_permutations: bool,
    config: &AnalysisConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let banks = config.bank_catalog();
    let pairs = if all_permutations {
        PairCatalog::permutations(&banks.currencies())
    } else {
        config.pair_catalog(&banks)?
    };

    println!("{} ({} pairs)", "Currency Pairs".bold(), pairs.len());
    println!("{}", "==============".dimmed());
    for pair in pairs.iter() {
        let sentiment = RiskSentiment::of(pair)
            .map(|s| s.label().to_string())
            .unwrap_or_default();
        println!("  {:<8} {}", pair.to_string(), sentiment.dimmed());
    }
    println!();
    Ok(())
}

fn show_info(config: &AnalysisConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "{} {}",
        "carry-drift".cyan().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
    println!("{}", env!("CARGO_PKG_DESCRIPTION"));
    println!();

    println!("{}", "Configuration".bold());
    println!("{}", "=============".dimmed());
    if let Some(path) = default_config_path() {
        println!("  {} {}", "Default config:".bold(), path.display());
    }
    println!("  {} {}", "Min differential:".bold(), config.min_differential);
    println!("  {} {}", "Commentary:".bold(), config.show_commentary);
    println!("  {} {:?}", "Pair universe:".bold(), config.pair_universe);
    println!(
        "  {} large > {}, moderate > {}",
        "Trend tiers:".bold(),
        config.trend.large,
        config.trend.moderate
    );
    println!();

    println!("{}", "Central Banks".bold());
    println!("{}", "=============".dimmed());
    let engine = CarryEngine::new(config.clone())?;
    for (name, currency) in engine.parser().banks().iter() {
        println!("  {:<30} {}", name, currency);
    }
    println!();

    println!("{}", "Sample Input".bold());
    println!("{}", "============".dimmed());
    for line in SAMPLE_INPUT.lines() {
        println!("  {}", line);
    }
    println!();

    Ok(())
}
