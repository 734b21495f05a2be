//! express-setup - Interactive scaffolding for Express projects

use anyhow::Result;
use clap::{ArgAction, Parser};
use setup_core::SetupConfig;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "express-setup")]
#[command(about = "Interactive CLI for setting up Express projects with TypeScript/JavaScript")]
#[command(version, disable_version_flag = true)]
pub struct Args {
    /// Output the current version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    Args::parse();

    // Configuration errors surface before any question is asked
    let config = SetupConfig::from_env()?;

    let result = setup_core::run(&config, CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
