use anyhow::Result;
use clap::Parser;
use std::io;
use std::process;

use antumbra::ack;
use antumbra::identity::{BuildIdentity, APPLICATION_VERSION};
use antumbra::report::{self, ReportFormat};

#[derive(Parser)]
#[command(name = "antumbra")]
#[command(about = "Reports the build identity of the Antumbra CLI binary")]
#[command(version = APPLICATION_VERSION)]
struct Cli {
  /// Report format
  #[arg(long, value_enum, default_value = "text")]
  format: ReportFormat,

  /// Exit immediately instead of waiting for a keypress
  #[arg(
    long,
    env = "ANTUMBRA_NO_WAIT",
    value_parser = clap::builder::BoolishValueParser::new()
  )]
  no_wait: bool,

  /// Diagnostic output on stderr
  #[arg(long)]
  verbose: bool,
}

fn main() {
  let cli = Cli::parse();

  if let Err(e) = run(cli) {
    penumbra::error(&format!("{e}"));
    process::exit(1);
  }
}

fn run(cli: Cli) -> Result<()> {
  if cli.verbose {
    penumbra::banner("Antumbra build report");
  }

  let identity = BuildIdentity::current();

  if cli.verbose {
    match &identity.executable_path {
      Some(path) => {
        penumbra::verbose(&format!("resolved executable path: {}", path.display()));
      }
      None => penumbra::verbose("executable path unavailable; reporting placeholder"),
    }
  }

  {
    let mut stdout = io::stdout().lock();
    match cli.format {
      ReportFormat::Text => report::render(&identity, &mut stdout)?,
      ReportFormat::Json => report::render_json(&identity, &mut stdout)?,
    }
  }

  if cli.verbose && cli.no_wait {
    penumbra::verbose("acknowledgment wait skipped");
  }
  ack::await_acknowledgment(cli.no_wait)?;

  Ok(())
}
