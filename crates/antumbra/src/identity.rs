use serde::Serialize;
use std::env;
use std::path::PathBuf;

/// Application name baked in at build time.
pub const APPLICATION_NAME: &str = "Antumbra CLI";

/// Display version baked in at build time. Free-form by design and
/// deliberately not tied to the cargo package version.
pub const APPLICATION_VERSION: &str = "V1.0-DEVELOPMENT";

/// Static identity of the running binary.
///
/// Constructed once per process during startup and read-only
/// afterwards. `executable_path` is best-effort: on platforms that
/// cannot report the executing binary's location it is absent, which
/// is a valid state rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildIdentity {
  pub name: String,
  pub version: String,
  pub executable_path: Option<PathBuf>,
}

impl BuildIdentity {
  /// Build an identity from explicit parts. An empty path is
  /// normalized to absent so downstream rendering never sees
  /// `Some("")`.
  pub fn new(
    name: impl Into<String>,
    version: impl Into<String>,
    executable_path: Option<PathBuf>,
  ) -> Self {
    Self {
      name: name.into(),
      version: version.into(),
      executable_path: executable_path.filter(|p| !p.as_os_str().is_empty()),
    }
  }

  /// Identity of the current process. Never fails: a failed
  /// self-location lookup degrades the path to absent.
  pub fn current() -> Self {
    Self::new(APPLICATION_NAME, APPLICATION_VERSION, env::current_exe().ok())
  }
}
