use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::api::smoke::SmokeTarget;
use crate::db::tables::KnownTable;

#[derive(Parser, Debug)]
#[command(name = "cvking", about = "maintenance and debugging tools for the CVKing job board")]
pub struct Cli {
    /// Config file (defaults to $CONFIG_PATH, then config/cvking.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every table in the connected database
    Tables,
    /// Show the columns of one table, or of every known table
    Describe { table: Option<KnownTable> },
    /// Count rows in one table, or in every known table
    Count { table: Option<KnownTable> },
    /// List user accounts (without password hashes)
    Users {
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    /// Replace a user's password with a fresh bcrypt hash
    SetPassword { email: String, password: String },
    /// List subscription plans
    Plans,
    /// Create the FREE subscription plan if it is missing
    SeedPlan,
    /// Log in and exercise the REST endpoints
    Smoke {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
        /// Steps to run after login (default: all)
        #[arg(long = "target", value_enum)]
        targets: Vec<SmokeTarget>,
        /// Job id used by the default application payload
        #[arg(long)]
        job_id: Option<i64>,
        /// JSON file replacing the default job payload
        #[arg(long)]
        job_payload: Option<PathBuf>,
        /// JSON file replacing the default application payload
        #[arg(long)]
        application_payload: Option<PathBuf>,
        /// File replacing the default upload
        #[arg(long)]
        upload_file: Option<PathBuf>,
    },
    /// Check a file against the upload size and type rules
    Validate {
        path: PathBuf,
        #[arg(long)]
        max_size_mb: Option<u64>,
        #[arg(long)]
        mime: Option<String>,
    },
    /// Validate and upload a file, printing the URL it was stored under
    Upload {
        path: PathBuf,
        #[arg(long = "type", default_value = crate::upload::DEFAULT_UPLOAD_TYPE)]
        upload_type: String,
        #[arg(long)]
        mime: Option<String>,
        #[arg(long)]
        max_size_mb: Option<u64>,
        /// Log in first with the smoke credentials
        #[arg(long)]
        login: bool,
    },
    /// Show whether header and footer render for each path
    Layout {
        #[arg(required = true)]
        paths: Vec<String>,
    },
}
