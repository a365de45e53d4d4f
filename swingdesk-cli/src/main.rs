//! SwingDesk CLI — structure analysis and trade planning commands.
//!
//! Commands:
//! - `analyze` — read candles from CSV, print the structure context, risk
//!   advice, and (if a setup fires) a sized trade plan
//! - `demo` — same pipeline over a deterministic synthetic series

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use swingdesk_core::data::{load_candles_csv, synthetic_series, SyntheticConfig};
use swingdesk_core::domain::{CandleSeries, Timeframe};
use swingdesk_core::journal::{Decision, JournalEntry, TradeJournal};
use swingdesk_core::risk::{PositionSizer, RiskAdvisor, RiskFlags, TradePlan};
use swingdesk_core::signals::{BreakoutRange, PullbackEma21, SignalProvider};
use swingdesk_core::structure::StructureAnalyzer;
use swingdesk_core::AppConfig;

#[derive(Parser)]
#[command(
    name = "swingdesk",
    about = "SwingDesk CLI — swing-trading market-context engine"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a candle CSV and print context, advice, and a sized plan.
    Analyze {
        /// Path to a candle CSV (ts,open,high,low,close,volume).
        #[arg(long)]
        csv: PathBuf,

        /// Symbol label for output and journaling.
        #[arg(long, default_value = "BTCUSDT")]
        symbol: String,

        /// Timeframe: 4h or 1d.
        #[arg(long, default_value = "4h")]
        timeframe: Timeframe,

        /// Setup to evaluate: breakout or pullback.
        #[arg(long, default_value = "breakout")]
        setup: String,

        /// Breakout reference window, in bars.
        #[arg(long, default_value_t = 20)]
        window: usize,

        /// Account capital. Overrides the config value.
        #[arg(long)]
        capital: Option<f64>,

        /// The proposed trade opposes the higher-timeframe trend.
        #[arg(long, default_value_t = false)]
        against_htf: bool,

        /// A news event is imminent.
        #[arg(long, default_value_t = false)]
        near_news: bool,

        /// Optional TOML config file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Append the plan to this journal CSV (requires --decision).
        #[arg(long)]
        journal: Option<PathBuf>,

        /// Journal decision: accepted or rejected.
        #[arg(long)]
        decision: Option<String>,
    },
    /// Run the pipeline over a deterministic synthetic series.
    Demo {
        /// Number of synthetic bars.
        #[arg(long, default_value_t = 240)]
        bars: usize,

        /// Random seed for the generator.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Timeframe: 4h or 1d.
        #[arg(long, default_value = "4h")]
        timeframe: Timeframe,

        /// Account capital.
        #[arg(long, default_value_t = 1000.0)]
        capital: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            csv,
            symbol,
            timeframe,
            setup,
            window,
            capital,
            against_htf,
            near_news,
            config,
            journal,
            decision,
        } => {
            let config = match config {
                Some(path) => AppConfig::load(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => AppConfig::default(),
            };
            let capital = capital.unwrap_or(config.base_capital);

            let series = load_candles_csv(&csv)
                .with_context(|| format!("loading candles from {}", csv.display()))?;

            let provider = build_provider(&setup, window)?;
            let flags = RiskFlags {
                against_htf,
                near_news,
            };
            let decision = decision.as_deref().map(parse_decision).transpose()?;
            if journal.is_some() && decision.is_none() {
                bail!("--journal requires --decision (accepted or rejected)");
            }

            let outcome = analyze(
                &series,
                provider.as_ref(),
                flags,
                capital,
                config.min_rr,
            )?;
            print_outcome(&symbol, timeframe, &series, &outcome)?;

            if let (Some(path), Some(decision)) = (journal, decision) {
                let Some(plan) = &outcome.plan else {
                    bail!("no setup fired; nothing to journal");
                };
                let entry = journal_entry(&symbol, timeframe, provider.name(), &outcome, plan, decision);
                TradeJournal::new(&path)
                    .append(&entry)
                    .with_context(|| format!("appending to journal {}", path.display()))?;
                println!("Journaled to: {}", path.display());
            }
            Ok(())
        }
        Commands::Demo {
            bars,
            seed,
            timeframe,
            capital,
        } => {
            let series = synthetic_series(
                bars,
                timeframe,
                SyntheticConfig {
                    seed,
                    ..Default::default()
                },
            );
            let provider = BreakoutRange::new(20);
            let outcome = analyze(&series, &provider, RiskFlags::default(), capital, 1.5)?;
            print_outcome("SYNTH", timeframe, &series, &outcome)
        }
    }
}

struct Outcome {
    context: swingdesk_core::StructureContext,
    htf_trend: swingdesk_core::structure::Direction,
    advice: swingdesk_core::RiskAdvice,
    plan: Option<TradePlan>,
    sizing: Option<swingdesk_core::Sizing>,
}

fn analyze(
    series: &CandleSeries,
    provider: &dyn SignalProvider,
    flags: RiskFlags,
    capital: f64,
    min_rr: f64,
) -> Result<Outcome> {
    let analyzer = StructureAnalyzer::new(series)?;
    let context = analyzer.context();
    let htf_trend = analyzer.htf_trend();
    let advice = RiskAdvisor::new().recommend(&context, flags);

    let (plan, sizing) = match provider.signal(series) {
        Some(proposal) => {
            let plan = TradePlan::from_entry_stop(proposal.entry, proposal.stop, min_rr);
            let sizing = PositionSizer::new(capital).size(plan.entry, plan.stop, advice.percent);
            (Some(plan), Some(sizing))
        }
        None => (None, None),
    };

    Ok(Outcome {
        context,
        htf_trend,
        advice,
        plan,
        sizing,
    })
}

fn build_provider(setup: &str, window: usize) -> Result<Box<dyn SignalProvider>> {
    match setup {
        "breakout" => Ok(Box::new(BreakoutRange::new(window))),
        "pullback" => Ok(Box::new(PullbackEma21)),
        _ => bail!("unknown setup '{setup}'. Valid: breakout, pullback"),
    }
}

fn parse_decision(s: &str) -> Result<Decision> {
    match s {
        "accepted" => Ok(Decision::Accepted),
        "rejected" => Ok(Decision::Rejected),
        _ => bail!("unknown decision '{s}'. Valid: accepted, rejected"),
    }
}

fn print_outcome(
    symbol: &str,
    timeframe: Timeframe,
    series: &CandleSeries,
    outcome: &Outcome,
) -> Result<()> {
    println!("=== {symbol} {} ({} bars) ===", timeframe.as_str(), series.len());
    println!("last close: {:.4}", series.last().close);
    println!("context: {}", serde_json::to_string_pretty(&outcome.context)?);
    println!("htf trend: {:?}", outcome.htf_trend);
    println!(
        "risk: {:?} {:.1}% ({})",
        outcome.advice.bracket, outcome.advice.percent, outcome.advice.reason
    );

    match (&outcome.plan, &outcome.sizing) {
        (Some(plan), Some(sizing)) => {
            println!(
                "plan: {:?} entry {:.4} stop {:.4} tp1 {:.4} tp2 {:.4} tp3 {:.4}",
                plan.direction, plan.entry, plan.stop, plan.tp1, plan.tp2, plan.tp3
            );
            if !plan.meets_min_rr() {
                println!("warning: rr to tp1 {:.2} below minimum {:.2}", plan.rr_to_tp1(), plan.rr_min);
            }
            println!(
                "size: qty {:.6} risking ${:.2}",
                sizing.quantity, sizing.risk_dollars
            );
        }
        _ => println!("plan: no setup fired"),
    }
    Ok(())
}

fn journal_entry(
    symbol: &str,
    timeframe: Timeframe,
    setup: &str,
    outcome: &Outcome,
    plan: &TradePlan,
    decision: Decision,
) -> JournalEntry {
    let sizing = outcome.sizing.unwrap_or(swingdesk_core::Sizing::zero());
    JournalEntry {
        time: Utc::now().to_rfc3339(),
        symbol: symbol.to_string(),
        tf: timeframe.as_str().to_string(),
        setup: setup.to_string(),
        entry: plan.entry,
        stop: plan.stop,
        tp1: plan.tp1,
        tp2: plan.tp2,
        tp3: plan.tp3,
        rr_min: plan.rr_min,
        risk_percent: outcome.advice.percent,
        risk_dollars: sizing.risk_dollars,
        qty: sizing.quantity,
        decision,
    }
}
