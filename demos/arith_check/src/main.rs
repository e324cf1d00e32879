use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::debug;

mod cases;

use cases::{table, Case, Op, Outcome, SuiteOptions};

/// Check the bitwise add/subtract/divide primitives against native operators
///
/// Prints one line per case: the bitwise result and whether it matches the
/// native operator. Run with RUST_LOG=trace to see the division steps.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the built-in case tables (default)
    Suite(SuiteArgs),

    /// Evaluate a single case
    Eval {
        /// Operation to run
        #[arg(value_enum)]
        op: Op,

        /// Left operand (dividend for div)
        #[arg(allow_negative_numbers = true)]
        a: i32,

        /// Right operand (divisor for div)
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
}

#[derive(clap::Args, Debug, Default)]
struct SuiteArgs {
    /// Append a zero-divisor case to the division table
    #[arg(long, default_value_t = false)]
    include_zero_divisor: bool,

    /// Append i32 boundary cases to every table
    #[arg(long, default_value_t = false)]
    boundaries: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default())
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    let args = Args::parse();
    match args.command.unwrap_or(Command::Suite(SuiteArgs::default())) {
        Command::Suite(suite) => run_suite(SuiteOptions {
            include_zero_divisor: suite.include_zero_divisor,
            boundaries: suite.boundaries,
        }),
        Command::Eval { op, a, b } => run_eval(Case::new(op, a, b)),
    }
}

fn run_suite(opts: SuiteOptions) -> Result<()> {
    let mut failures = 0usize;

    for (i, op) in [Op::Add, Op::Div, Op::Sub].into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", op.heading());

        let cases = table(op, opts);
        debug!("{:?}: {} cases", op, cases.len());
        for case in cases {
            let outcome = case.evaluate();
            if !outcome.is_expected() {
                failures += 1;
            }
            println!("{}", case.report(&outcome));
        }
    }

    if failures > 0 {
        bail!("{} case(s) did not match the native operator", failures);
    }
    Ok(())
}

fn run_eval(case: Case) -> Result<()> {
    let outcome = case.evaluate();
    if let Outcome::Rejected(err) = outcome {
        return Err(err).with_context(|| format!("evaluating {}", case));
    }

    println!("{}", case.report(&outcome));
    if !outcome.is_expected() {
        bail!("{} did not match the native operator", case);
    }
    Ok(())
}
