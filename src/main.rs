use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result, miette};
use payoff::application::batch::BatchRunner;
use payoff::application::config::{DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS, SolverConfig};
use payoff::application::solver::PayoffSolver;
use payoff::domain::loan::{AnnualRate, PERIODS_PER_YEAR, PaymentRate, PeriodCount, Principal};
use payoff::domain::schedule::Statement;
use payoff::interfaces::csv::result_writer::ResultWriter;
use payoff::interfaces::csv::scenario_reader::ScenarioReader;
use payoff::interfaces::report::{OutputFormat, render_solution, render_statement};
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Finds the lowest fixed monthly payment that clears a credit card balance.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    solve: SolveArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Month-by-month balance when paying only a fraction of it each month
    Statement(StatementArgs),
    /// Solve every scenario in a CSV file and write the results as CSV
    Batch(BatchArgs),
}

#[derive(Args)]
struct SolveArgs {
    /// Balance owed at the start
    #[arg(long, required = true, allow_negative_numbers = true)]
    principal: Option<f64>,

    /// Nominal annual interest rate, e.g. 0.2 for 20%
    #[arg(long, required = true, allow_negative_numbers = true)]
    annual_rate: Option<f64>,

    #[command(flatten)]
    solver: SolverArgs,

    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
}

#[derive(Args)]
struct SolverArgs {
    /// Largest residual balance accepted as paid off
    #[arg(long, env = "PAYOFF_EPSILON", default_value_t = DEFAULT_EPSILON, allow_negative_numbers = true)]
    epsilon: f64,

    /// Number of monthly payments
    #[arg(long, env = "PAYOFF_PERIODS", default_value_t = PERIODS_PER_YEAR)]
    periods: u32,

    /// Give up after this many bisection steps
    #[arg(long, env = "PAYOFF_MAX_ITERATIONS", default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,
}

impl SolverArgs {
    fn config(&self) -> Result<SolverConfig> {
        SolverConfig::new(self.epsilon, self.periods, self.max_iterations).into_diagnostic()
    }
}

#[derive(Args)]
struct StatementArgs {
    /// Balance owed at the start
    #[arg(long, allow_negative_numbers = true)]
    balance: f64,

    /// Nominal annual interest rate, e.g. 0.2 for 20%
    #[arg(long, allow_negative_numbers = true)]
    annual_rate: f64,

    /// Fraction of the balance paid each month, e.g. 0.04
    #[arg(long, allow_negative_numbers = true)]
    payment_rate: f64,

    /// Number of months to report
    #[arg(long, default_value_t = PERIODS_PER_YEAR)]
    periods: u32,

    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
}

#[derive(Args)]
struct BatchArgs {
    /// Input scenarios CSV file (principal, annual_rate, epsilon)
    input: PathBuf,

    #[command(flatten)]
    solver: SolverArgs,
}

fn init_tracing() {
    // Logs go to stderr so stdout only carries results.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal()),
        )
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Statement(args)) => run_statement(args),
        Some(Command::Batch(args)) => run_batch(args),
        None => run_solve(cli.solve),
    }
}

fn run_solve(args: SolveArgs) -> Result<()> {
    let principal = args
        .principal
        .ok_or_else(|| miette!("--principal is required"))?;
    let annual_rate = args
        .annual_rate
        .ok_or_else(|| miette!("--annual-rate is required"))?;

    let solver = PayoffSolver::new(args.solver.config()?);
    let solution = solver
        .find_minimum_payment(principal, annual_rate)
        .into_diagnostic()?;

    println!("{}", render_solution(&solution, args.format).into_diagnostic()?);
    Ok(())
}

fn run_statement(args: StatementArgs) -> Result<()> {
    let balance = Principal::new(args.balance).into_diagnostic()?;
    let rate = AnnualRate::new(args.annual_rate).into_diagnostic()?;
    let payment_rate = PaymentRate::new(args.payment_rate).into_diagnostic()?;
    let periods = PeriodCount::new(args.periods).into_diagnostic()?;

    let statement = Statement::build(balance, rate, payment_rate, periods).into_diagnostic()?;
    println!("{}", render_statement(&statement, args.format).into_diagnostic()?);
    Ok(())
}

fn run_batch(args: BatchArgs) -> Result<()> {
    let runner = BatchRunner::new(PayoffSolver::new(args.solver.config()?));

    let file = File::open(args.input).into_diagnostic()?;
    let reader = ScenarioReader::new(file);

    let stdout = io::stdout();
    let mut writer = ResultWriter::new(stdout.lock());
    runner
        .run(reader.scenarios(), &mut writer)
        .into_diagnostic()?;
    let mut sink = writer.finish().into_diagnostic()?;
    sink.flush().into_diagnostic()?;

    Ok(())
}
