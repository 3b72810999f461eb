use clap::{Parser, Subcommand};

/// CyberHQ — incident tracking API
#[derive(Parser)]
#[command(name = "cyberhq", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the API server
    Serve {
        /// Port to bind (overrides CYBERHQ_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the stored-credential digest for a password.
    /// Useful when extending the reporter fixtures.
    HashPassword { password: String },
}
