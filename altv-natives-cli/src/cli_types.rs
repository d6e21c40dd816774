//! CLI argument definitions.

use clap::Parser;

#[derive(Parser)]
#[command(name = "altv-natives")]
#[command(about = "Generate TypeScript declarations for alt:V natives", long_about = None)]
pub(crate) struct Cli {
    /// Generate the legacy `natives` module (alt-client imports, explicit void results)
    #[arg(long)]
    pub legacy: bool,

    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long)]
    pub verbose: bool,
}
