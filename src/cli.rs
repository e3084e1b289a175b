use clap::{Args, Parser, Subcommand};

pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/books/v1/volumes";

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Sync(SyncArgs),
    Lookup(LookupArgs),
}

#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Input list of raw ISBNs, one per line (blank lines ignored).
    #[arg(long)]
    pub input: String,

    /// Library collection JSON file (created if absent).
    #[arg(long)]
    pub library: String,

    /// Catalog endpoint (must be http/https).
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Per-request timeout for catalog lookups, in seconds.
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Raw ISBN to look up.
    #[arg(long)]
    pub isbn: String,

    /// Catalog endpoint (must be http/https).
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Per-request timeout for catalog lookups, in seconds.
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,
}
