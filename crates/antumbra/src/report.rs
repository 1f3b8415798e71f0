use clap::ValueEnum;
use std::io::{self, Write};
use thiserror::Error;

use crate::identity::BuildIdentity;

/// Placeholder line used when the platform could not report the
/// binary's on-disk location.
pub const PATH_UNAVAILABLE: &str = "(executable path unavailable)";

#[derive(Debug, Error)]
pub enum ReportError {
  #[error("failed to write report: {0}")]
  Io(#[from] io::Error),
  #[error("failed to serialize report: {0}")]
  Json(#[from] serde_json::Error),
}

/// Output format for the identity report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
  Text,
  Json,
}

/// Render the identity banner to `sink` and flush it.
///
/// Four lines, always in this order: name concatenated with version
/// (no separator, kept as the original banner prints it), the
/// executable path or its placeholder, name alone, version alone.
pub fn render<W: Write>(identity: &BuildIdentity, sink: &mut W) -> Result<(), ReportError> {
  writeln!(sink, "{}{}", identity.name, identity.version)?;
  match &identity.executable_path {
    Some(path) => writeln!(sink, "{}", path.display())?,
    None => writeln!(sink, "{PATH_UNAVAILABLE}")?,
  }
  writeln!(sink, "{}", identity.name)?;
  writeln!(sink, "{}", identity.version)?;
  sink.flush()?;
  Ok(())
}

/// Render the identity as one pretty-printed JSON document, then
/// flush. Absent paths serialize as `null`.
pub fn render_json<W: Write>(identity: &BuildIdentity, sink: &mut W) -> Result<(), ReportError> {
  let body = serde_json::to_string_pretty(identity)?;
  writeln!(sink, "{body}")?;
  sink.flush()?;
  Ok(())
}
