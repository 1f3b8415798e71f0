//! Penumbra - stderr logging for the Antumbra tools.
//!
//! Level-prefixed, colored log lines, written to stderr only so that
//! stdout stays reserved for each tool's report output.
//!
//! Levels: `verbose()` and `error()`. Framed output: `banner()`.

use colored::*;

/// Core output function: write a message to stderr, one line at a time.
pub fn log(message: &str) {
  for line in message.lines() {
    eprintln!("{line}");
  }
}

/// Write a message with a colored level tag in front of every line.
fn tagged(color: Color, tag: &str, message: &str) {
  let prefix = format!("[{}]", tag.color(color).bold());
  for line in message.lines() {
    log(&format!("{prefix} {line}"));
  }
}

/// Diagnostic chatter, shown only when a tool opts into it.
pub fn verbose(message: &str) {
  tagged(Color::Cyan, "verb", message);
}

/// Something went wrong.
pub fn error(message: &str) {
  tagged(Color::Red, "fail", message);
}

/// A line of border characters for framing banner output.
pub fn banner_line(width: usize, border: char) -> String {
  border.to_string().repeat(width)
}

/// Log a message framed above and below by border lines.
pub fn banner(message: &str) {
  let border = banner_line(42, '-');
  log(&border);
  log(message);
  log(&border);
}
