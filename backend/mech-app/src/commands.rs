use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create an account and its directory entry, then sign in
    Register {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },

    /// Sign in with a username and password
    SignIn {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        /// Sign out again once signed in
        #[arg(long)]
        sign_out: bool,
    },

    /// Upload one or more swing or pitch videos and list this run's uploads
    Upload {
        /// swing or pitch
        #[arg(long)]
        kind: String,
        /// Video file on disk; repeat to upload several in order
        #[arg(long, required = true)]
        file: Vec<PathBuf>,
        /// camera or library
        #[arg(long, default_value = "library")]
        source: String,
    },

    /// Show the player card: stats, achievements and monthly progress
    Profile,

    /// Show analysis reports
    Analysis {
        /// Show a single report by position
        #[arg(long)]
        index: Option<usize>,
    },
}
