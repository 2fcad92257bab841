use anyhow::{Context, Result};
use clap::Parser;
use std::io::{IsTerminal, Write};
use tracing::info;

use splicer::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let ansi = !cli.no_color && std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();
    splicer::logging::init_logging(cli.verbose, ansi);

    info!("splicer v{} on {}", splicer::version(), std::env::consts::OS);

    let report = match splicer::run(&cli) {
        Ok(report) => report,
        Err(e) => {
            let context = match e.path() {
                Some(path) => format!("Splice failed on {}", path.display()),
                None => "Splice failed".to_string(),
            };
            return Err(e).context(context);
        }
    };

    if cli.dry_run && !cli.json {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(report.content.as_bytes())
            .context("Failed to write dry-run output")?;
        stdout.flush()?;
    } else if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.summary());
    }

    Ok(())
}
