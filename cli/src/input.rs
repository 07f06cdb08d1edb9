use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Prints a prompt and reads one raw line from stdin.
///
/// Returns `None` on EOF so the caller can abort the current operation
/// (or the whole menu loop) cleanly.
pub fn read_line(prompt: &str) -> Result<Option<String>> {
  print!("{prompt}");
  io::stdout().flush()?;
  let mut line = String::new();
  if io::stdin().lock().read_line(&mut line)? == 0 {
    return Ok(None);
  }
  Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
}

/// Parses a string as an unsigned decimal integer. Surrounding whitespace
/// is tolerated; anything else (sign, empty, non-digits) is rejected.
pub fn parse_uint(text: &str) -> Option<u64> {
  let text = text.trim();
  if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
    return None;
  }
  text.parse().ok()
}

/// Keeps prompting until the user enters a strictly positive integer.
/// Returns `None` on EOF.
pub fn read_positive(prompt: &str) -> Result<Option<u64>> {
  loop {
    let Some(line) = read_line(prompt)? else {
      return Ok(None);
    };
    match parse_uint(&line) {
      Some(n) if n > 0 => return Ok(Some(n)),
      _ => println!("[note] please enter a positive integer"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_uint() {
    assert_eq!(parse_uint("42"), Some(42));
    assert_eq!(parse_uint("  7 "), Some(7));
    assert_eq!(parse_uint("0"), Some(0));
    assert_eq!(parse_uint(""), None);
    assert_eq!(parse_uint("   "), None);
    assert_eq!(parse_uint("-3"), None);
    assert_eq!(parse_uint("+3"), None);
    assert_eq!(parse_uint("3a"), None);
    assert_eq!(parse_uint("3 4"), None);
  }
}
