//! Command-line driver for the salary split engine.
//!
//! # Responsibility
//! - Wire a SQLite-backed adapter into `FieldStore`.
//! - Print allocation and projection output for quick local checks.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::warn;
use salary_split_core::db::open_db;
use salary_split_core::{
    coerce_number, default_log_level, evaluate, format_number, init_logging, BucketId,
    EngineInput, FieldStore, Frequency, SqliteKvAdapter, StoreError,
};

#[derive(Parser, Debug)]
#[command(name = "salary-split", version, about = "Split a salary across allocation buckets")]
struct Cli {
    /// SQLite database holding the bucket list.
    #[arg(
        long,
        global = true,
        env = "SALARY_SPLIT_DB",
        default_value = "./salary_split.sqlite3",
        value_name = "PATH"
    )]
    db: PathBuf,

    /// Absolute directory for rolling log files (logging is off when unset).
    #[arg(long, global = true, env = "SALARY_SPLIT_LOG_DIR", value_name = "DIR")]
    log_dir: Option<String>,

    /// trace|debug|info|warn|error (default depends on build mode).
    #[arg(long, global = true, env = "SALARY_SPLIT_LOG_LEVEL", value_name = "LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a health-check response.
    Ping,
    /// Print the core crate version.
    Version,
    /// List buckets in display order.
    #[command(alias = "ls")]
    List,
    /// Append a bucket with default settings.
    #[command(alias = "new")]
    Add,
    /// Set one bucket attribute (title, kind or amount).
    Set(SetArgs),
    /// Remove a bucket.
    #[command(alias = "rm")]
    Remove(RemoveArgs),
    /// Show allocations, remainder and projection for a salary.
    Report(ReportArgs),
}

#[derive(Args, Debug)]
struct SetArgs {
    id: String,
    /// title | kind | amount
    field: String,
    value: String,
}

#[derive(Args, Debug)]
struct RemoveArgs {
    id: String,
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Salary as typed by the user; thousands separators are allowed.
    #[arg(long, default_value = "")]
    salary: String,

    /// Bucket id to project.
    #[arg(long)]
    select: Option<String>,

    /// daily | weekly | monthly
    #[arg(long)]
    frequency: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    match cli.command {
        Commands::Ping => {
            println!("salary_split_core ping={}", salary_split_core::ping());
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Version => {
            println!("salary_split_core version={}", salary_split_core::core_version());
            return Ok(ExitCode::SUCCESS);
        }
        _ => {}
    }

    let conn = open_db(&cli.db)
        .with_context(|| format!("failed to open database `{}`", cli.db.display()))?;
    let mut store = FieldStore::load(SqliteKvAdapter::new(&conn));

    let code = match cli.command {
        Commands::Ping | Commands::Version => ExitCode::SUCCESS,
        Commands::List => {
            print_buckets(&store);
            ExitCode::SUCCESS
        }
        Commands::Add => match store.create() {
            Ok(id) => {
                println!("{id}");
                ExitCode::SUCCESS
            }
            Err(StoreError::CapacityExceeded { capacity }) => {
                eprintln!("cannot add bucket: limit of {capacity} reached");
                ExitCode::FAILURE
            }
        },
        Commands::Set(args) => {
            let id = BucketId::new(args.id);
            if !store.update_raw(&id, &args.field, &args.value) {
                eprintln!("nothing changed: unknown bucket `{id}` or field `{}`", args.field);
            }
            ExitCode::SUCCESS
        }
        Commands::Remove(args) => {
            let id = BucketId::new(args.id);
            if !store.delete(&id) {
                eprintln!("nothing removed: unknown bucket `{id}`");
            }
            ExitCode::SUCCESS
        }
        Commands::Report(args) => {
            print_report(&store, &args);
            ExitCode::SUCCESS
        }
    };

    if !store.is_durable() {
        warn!("event=cli_exit module=cli status=degraded reason=write_failed");
        eprintln!("warning: last change was not saved to `{}`", cli.db.display());
    }
    Ok(code)
}

fn print_buckets(store: &FieldStore<SqliteKvAdapter<'_>>) {
    if store.is_empty() {
        println!("(no buckets)");
        return;
    }
    for bucket in store.buckets() {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            bucket.id,
            bucket.title,
            bucket.kind.as_str(),
            bucket.amount,
            bucket.color
        );
    }
}

fn print_report(store: &FieldStore<SqliteKvAdapter<'_>>, args: &ReportArgs) {
    let selected = args.select.as_deref().map(BucketId::from);
    let output = evaluate(&EngineInput {
        salary: coerce_number(&args.salary),
        buckets: store.buckets(),
        selected: selected.as_ref(),
        frequency: Frequency::parse(args.frequency.as_deref()),
    });

    println!("Salary\t{}", format_number(output.allocation.salary));
    for slice in output.allocation.slices(&store.config().palette) {
        println!("{}\t{}", slice.label, format_number(slice.value));
    }
    println!("1 Month\t{}", format_number(output.projection.monthly));
    println!("1 Year\t{}", format_number(output.projection.yearly));
}
