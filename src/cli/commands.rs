//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "aptledger")]
#[command(about = "Per-building record store", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new ledger
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Storage quota in bytes
        #[arg(long)]
        quota: Option<usize>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Show or update a building's dues schedule
    Dues {
        /// Building id
        tenant: String,

        /// New monthly fee
        #[arg(long)]
        fee: Option<f64>,

        /// New start month (YYYY-MM)
        #[arg(long)]
        start: Option<String>,

        /// Record a payment from this user for the current month
        #[arg(long, requires = "amount")]
        pay: Option<String>,

        /// Payment amount
        #[arg(long, requires = "pay")]
        amount: Option<f64>,
    },

    /// Show or set a building's opening balance
    Balance {
        /// Building id
        tenant: String,

        /// New opening balance
        #[arg(allow_hyphen_values = true)]
        value: Option<f64>,
    },

    /// Show a read-tracking map, or mark an item read
    Read {
        /// Building id
        tenant: String,

        /// Content kind (board, forum)
        kind: String,

        /// Item id to mark as read now
        #[arg(long)]
        mark: Option<String>,
    },

    /// Print a record family as JSON
    Show {
        /// finance, firms, board, forum, buildings, users
        family: String,

        /// Building id (not needed for buildings and users)
        tenant: Option<String>,
    },

    /// Opening balance, finance totals and current balance
    Summary {
        /// Building id
        tenant: String,
    },
}
