use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use engine::{Currency, Money};

use crate::i18n::Language;

#[derive(Debug, Parser)]
#[command(name = "splitsafe", disable_version_flag = true)]
#[command(about = "Track shared expenses and settle them with a short list of transfers")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Optional config file path (TOML).
    #[arg(long, global = true)]
    pub config: Option<String>,
    /// Override the expense file location.
    #[arg(long, global = true)]
    pub state: Option<String>,
    /// Override the display language (en, th, zh).
    #[arg(long, global = true)]
    pub lang: Option<Language>,
    /// Override the display currency (USD, THB, CNY).
    #[arg(long, global = true)]
    pub currency: Option<Currency>,
    /// Override the log level (error, warn, info, debug, trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record an expense paid by one participant.
    Add(AddArgs),
    /// Delete the expense at the position shown by `list`.
    Remove { index: usize },
    /// Delete every expense.
    Clear,
    /// Show recorded expenses, the total and the participant count.
    List,
    /// Show who pays whom to split the total equally.
    Settle,
    /// Show what each participant paid against the equal share.
    Balances,
    /// Write the settlement transfers as CSV.
    Export {
        /// Destination file; stdout when omitted.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Append expenses from a SplitSafe web app JSON export.
    Import { path: PathBuf },
}

#[derive(Debug, Args)]
pub struct AddArgs {
    pub payer: String,
    #[arg(allow_hyphen_values = true)]
    pub amount: Money,
    /// Optional description.
    #[arg(long)]
    pub note: Option<String>,
}
