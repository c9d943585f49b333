//! Annuity Planner CLI
//!
//! Runs the retirement savings planner and prints loan amortization schedules

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use annuity_planner::config::{load_config, load_scenarios};
use annuity_planner::report::{
    render_planner_report, render_schedule_summary, write_json, write_planner_csv,
    write_schedule_csv, write_schedule_tsv,
};
use annuity_planner::{generate_schedule, RetirementPlanner, RunConfig};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "annuity-planner",
    about = "Real-return retirement savings planner and loan amortization schedules"
)]
struct Cli {
    /// JSON run configuration; reference values are used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Write output to this file instead of stdout
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Required monthly savings for each market scenario
    Plan(PlanArgs),
    /// Amortization schedule for a fixed-rate loan
    Schedule(ScheduleArgs),
    /// Planner report followed by the loan schedule
    All {
        #[command(flatten)]
        plan: PlanArgs,
        #[command(flatten)]
        schedule: ScheduleArgs,
    },
}

#[derive(clap::Args, Debug)]
struct PlanArgs {
    /// CSV file with Label,NominalAnnualRate,InflationAnnualRate columns
    #[arg(long)]
    scenarios: Option<PathBuf>,
    #[arg(long, help = "Desired monthly income in retirement")]
    payment: Option<f64>,
    #[arg(long, help = "Number of monthly payouts")]
    payout_periods: Option<u32>,
    #[arg(long, help = "Number of monthly contributions before retirement")]
    savings_periods: Option<u32>,
}

#[derive(clap::Args, Debug)]
struct ScheduleArgs {
    #[arg(long, help = "Loan principal")]
    principal: Option<f64>,
    #[arg(long, help = "Loan term in monthly periods")]
    term: Option<u32>,
    #[arg(long, help = "Annual loan rate as a fraction, e.g. 0.04")]
    annual_rate: Option<f64>,
    /// Print totals after the table (text format only)
    #[arg(long)]
    summary: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Csv,
    Json,
}

impl PlanArgs {
    fn apply(&self, config: &mut RunConfig) -> anyhow::Result<()> {
        if let Some(path) = &self.scenarios {
            config.scenarios = load_scenarios(path)
                .with_context(|| format!("failed to load scenarios from {}", path.display()))?;
        }
        if let Some(payment) = self.payment {
            config.retirement.monthly_payment = payment;
        }
        if let Some(periods) = self.payout_periods {
            config.retirement.payout_periods = periods;
        }
        if let Some(periods) = self.savings_periods {
            config.retirement.savings_periods = periods;
        }
        Ok(())
    }
}

impl ScheduleArgs {
    fn apply(&self, config: &mut RunConfig) {
        if let Some(principal) = self.principal {
            config.loan.principal = principal;
        }
        if let Some(term) = self.term {
            config.loan.term_periods = term;
        }
        if let Some(rate) = self.annual_rate {
            config.loan.annual_rate = rate;
        }
    }
}

fn run_plan(config: &RunConfig, format: OutputFormat, out: &mut dyn Write) -> anyhow::Result<()> {
    let planner = RetirementPlanner::new(config.planner_config())?;
    let reports = planner.evaluate_all(&config.scenarios())?;

    match format {
        OutputFormat::Text => {
            out.write_all(render_planner_report(&reports, &config.display).as_bytes())?
        }
        OutputFormat::Csv => write_planner_csv(out, &reports, &config.display)?,
        OutputFormat::Json => write_json(out, &reports)?,
    }
    Ok(())
}

fn run_schedule(
    config: &RunConfig,
    format: OutputFormat,
    summary: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let schedule = generate_schedule(&config.loan_parameters())?;
    let precision = config.display.amount_precision;

    match format {
        OutputFormat::Text => {
            write_schedule_tsv(out, &schedule, precision)?;
            if summary {
                writeln!(out)?;
                out.write_all(render_schedule_summary(&schedule.summary(), precision).as_bytes())?;
            }
        }
        OutputFormat::Csv => write_schedule_csv(out, &schedule, precision)?,
        OutputFormat::Json => write_json(out, &schedule)?,
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => RunConfig::default(),
    };

    match &cli.command {
        Command::Plan(args) => args.apply(&mut config)?,
        Command::Schedule(args) => args.apply(&mut config),
        Command::All { plan, schedule } => {
            plan.apply(&mut config)?;
            schedule.apply(&mut config);
        }
    }

    // Reject bad input before anything is written
    config.validate()?;

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("unable to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    match &cli.command {
        Command::Plan(_) => run_plan(&config, cli.format, &mut out)?,
        Command::Schedule(args) => run_schedule(&config, cli.format, args.summary, &mut out)?,
        Command::All { schedule, .. } => {
            run_plan(&config, cli.format, &mut out)?;
            run_schedule(&config, cli.format, schedule.summary, &mut out)?;
        }
    }

    out.flush()?;
    if let Some(path) = &cli.output {
        log::info!("Output written to {}", path.display());
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
