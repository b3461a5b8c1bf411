use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use safe_dial::{
    parse_moves, simulate, solve, verify, CountingRule, DialConfig, InputSource, Report,
    DEFAULT_SIZE, DEFAULT_START, EXAMPLE_CROSSINGS, EXAMPLE_INPUT, EXAMPLE_LANDINGS,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dial", about = "Count how often a circular dial reaches zero")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read rotation commands and print the zero counts.
    Solve {
        /// Puzzle input, one `L<n>` or `R<n>` per line (`-` reads stdin).
        #[arg(default_value = "-")]
        input: PathBuf,
        /// Number of positions on the dial.
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: u32,
        /// Position before the first move.
        #[arg(long, default_value_t = DEFAULT_START)]
        start: u32,
        /// Print only the answer for this rule.
        #[arg(long, value_enum)]
        rule: Option<RuleArg>,
        /// Cross-check the closed form against a click-by-click simulation.
        #[arg(long = "verify")]
        check: bool,
    },
    /// Run the built-in worked example and check its known answers.
    Selftest,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RuleArg {
    /// Moves that end on zero
    Landing,
    /// Every click that reaches zero
    Crossing,
}

impl From<RuleArg> for CountingRule {
    fn from(arg: RuleArg) -> Self {
        match arg {
            RuleArg::Landing => CountingRule::Landing,
            RuleArg::Crossing => CountingRule::Crossing,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            input,
            size,
            start,
            rule,
            check,
        } => run_solve(input, size, start, rule.map(CountingRule::from), check)?,
        Commands::Selftest => run_selftest()?,
    }

    Ok(())
}

fn run_solve(
    input: PathBuf,
    size: u32,
    start: u32,
    rule: Option<CountingRule>,
    check: bool,
) -> Result<()> {
    let config = DialConfig::new(size, start).context("invalid dial settings")?;
    let source = InputSource::from(input);
    let text = source.read_to_string()?;

    let moves =
        parse_moves(&text).with_context(|| format!("failed to parse moves from {source}"))?;
    let report = if check {
        verify(&moves, &config).context("verification failed")?
    } else {
        simulate(&moves, &config)?
    };

    match rule {
        Some(rule) => print_answer(rule, &report),
        None => CountingRule::ALL
            .iter()
            .for_each(|rule| print_answer(*rule, &report)),
    }

    Ok(())
}

fn run_selftest() -> Result<()> {
    let report = solve(EXAMPLE_INPUT, &DialConfig::default()).context("example failed to run")?;

    if report.landings != EXAMPLE_LANDINGS {
        bail!(
            "landing rule returned {}, expected {}",
            report.landings,
            EXAMPLE_LANDINGS
        );
    }
    if report.crossings != EXAMPLE_CROSSINGS {
        bail!(
            "crossing rule returned {}, expected {}",
            report.crossings,
            EXAMPLE_CROSSINGS
        );
    }

    let moves = parse_moves(EXAMPLE_INPUT)?;
    verify(&moves, &DialConfig::default()).context("closed form disagrees with simulation")?;

    info!("selftest passed");
    println!(
        "selftest ok: landing={} crossing={}",
        report.landings, report.crossings
    );
    Ok(())
}

fn print_answer(rule: CountingRule, report: &Report) {
    println!("{}: {}", rule.label(), report.get(rule));
}
