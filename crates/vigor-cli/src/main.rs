use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

mod commands;
mod store;

/// Score functional assessments and summarise patient histories.
#[derive(Parser, Debug)]
#[command(name = "vigor")]
#[command(version)]
struct Args {
    /// Clinic configuration file
    #[arg(long, global = true, env = "VIGOR_CONFIG")]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the protocol catalog
    Protocols,

    /// Score one protocol execution
    Score {
        /// Measurement payload (JSON, tagged by "protocol")
        #[arg(long)]
        measurements: PathBuf,

        /// Patient profile (JSON)
        #[arg(long)]
        profile: PathBuf,

        /// History file to prepend the new entry to
        #[arg(long)]
        history: Option<PathBuf>,

        /// Completion time (RFC 3339); defaults to now
        #[arg(long)]
        at: Option<jiff::Timestamp>,

        /// Score even when measurements fail range validation
        #[arg(long)]
        allow_out_of_range: bool,
    },

    /// Latest entry per protocol
    Latest {
        #[arg(long)]
        history: PathBuf,
    },

    /// One protocol's entries, oldest first
    Series {
        #[arg(long)]
        history: PathBuf,

        #[arg(long)]
        protocol: String,
    },

    /// Completion percentage of the protocol catalog
    Progress {
        #[arg(long)]
        history: PathBuf,
    },

    /// Report summary for a patient history
    Report {
        #[arg(long)]
        history: PathBuf,
    },

    /// Display label for a classification code
    Label { code: String },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if args.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let config = commands::resolve_config(args.config.as_deref())?;

    let output = match args.command {
        Command::Protocols => commands::protocols()?,
        Command::Score {
            measurements,
            profile,
            history,
            at,
            allow_out_of_range,
        } => commands::score(&commands::ScoreRequest {
            measurements,
            profile,
            history,
            completed_at: at.unwrap_or_else(jiff::Timestamp::now),
            allow_out_of_range,
        })?,
        Command::Latest { history } => commands::latest(&history, &config)?,
        Command::Series { history, protocol } => commands::series(&history, &protocol)?,
        Command::Progress { history } => commands::progress(&history)?,
        Command::Report { history } => {
            commands::report(&history, &config, jiff::Timestamp::now())?
        }
        Command::Label { code } => commands::label(&code, &config),
    };

    println!("{output}");
    Ok(())
}
