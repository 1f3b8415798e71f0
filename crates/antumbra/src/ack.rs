use console::Term;
use std::io::{self, IsTerminal, Read};

/// Prompt shown before the blocking keypress read.
const PROMPT: &str = "Press any key to continue . . . ";

/// Block until a single acknowledgment arrives, then return.
///
/// With an attached terminal this prompts on stderr and consumes one
/// keypress. Without one (piped stdin, CI) it consumes at most one
/// byte from stdin instead, so EOF satisfies the wait and automated
/// runs never hang. `skip` bypasses the wait entirely.
pub fn await_acknowledgment(skip: bool) -> io::Result<()> {
  if skip {
    return Ok(());
  }

  if io::stdin().is_terminal() {
    let term = Term::stderr();
    term.write_str(PROMPT)?;
    term.read_key()?;
    term.write_line("")?;
    return Ok(());
  }

  acknowledge_from(&mut io::stdin().lock())
}

/// Consume one acknowledgment byte from `reader`. EOF counts as an
/// acknowledgment.
pub fn acknowledge_from<R: Read>(reader: &mut R) -> io::Result<()> {
  let mut buf = [0u8; 1];
  let _consumed = reader.read(&mut buf)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Cursor;

  #[test]
  fn consumes_exactly_one_byte() {
    let mut input = Cursor::new(b"xyz".to_vec());
    acknowledge_from(&mut input).unwrap();
    assert_eq!(input.position(), 1);
  }

  #[test]
  fn eof_counts_as_acknowledgment() {
    let mut input = Cursor::new(Vec::new());
    acknowledge_from(&mut input).unwrap();
  }

  #[test]
  fn skip_returns_without_reading() {
    await_acknowledgment(true).unwrap();
  }
}
