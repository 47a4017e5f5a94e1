//! CLI argument definitions for the queue board.

use std::net::SocketAddr;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "examq",
    version,
    about = "Exam-day queue board over the clinic roster sheet",
    long_about = "Filters the clinic roster to today's reservations, orders the\n\
                  checked-in by arrival, and recommends who each exam station\n\
                  should call next. Runs as an HTTP bridge for the sheet webhook\n\
                  or as a one-shot board renderer over a CSV export."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the webhook/polling HTTP bridge.
    Serve(ServeArgs),

    /// Render today's board once from a CSV roster export.
    Board(BoardArgs),

    /// List the roster sheet's expected column layout.
    Columns,
}

#[derive(Parser)]
pub struct ServeArgs {
    /// Address to listen on.
    #[arg(long = "bind", default_value = "127.0.0.1:8787")]
    pub bind: SocketAddr,

    /// CSV roster export used when the pushed-update cache is cold.
    #[arg(long = "roster", value_name = "CSV")]
    pub roster: PathBuf,

    /// Seconds a pushed sheet update stays servable.
    #[arg(long = "ttl-secs", default_value_t = 600)]
    pub ttl_secs: u64,

    /// Fix "today" instead of reading the clock (for rehearsals and tests).
    #[arg(long = "today", value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,
}

#[derive(Parser)]
pub struct BoardArgs {
    /// CSV roster export to render.
    #[arg(value_name = "CSV")]
    pub roster: PathBuf,

    /// Fix "today" instead of reading the clock.
    #[arg(long = "today", value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
