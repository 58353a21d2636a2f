//! Terminal rendering of the multi-file choice

use std::io::{self, BufRead, Write};

use clip64_core::DropPrompt;

/// Prints the three fixed choices and reads one from stdin
///
/// Returns `None` when no recognisable index was entered (blank line,
/// non-numeric input, or end-of-input), which the caller maps to the
/// "nothing happened" outcome.
pub fn ask(prompt: &DropPrompt) -> io::Result<Option<usize>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(
        out,
        "You dropped {} files, but only one can be converted at a time.",
        prompt.paths().len()
    )?;
    for (index, label) in prompt.choices().iter().enumerate() {
        writeln!(out, "  {index}) {label}")?;
    }
    write!(out, "Choice: ")?;
    out.flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }

    Ok(parse_choice(&line))
}

fn parse_choice(line: &str) -> Option<usize> {
    line.trim().parse::<usize>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_digits() {
        assert_eq!(parse_choice("1\n"), Some(1));
        assert_eq!(parse_choice("  2  "), Some(2));
        assert_eq!(parse_choice("0"), Some(0));
    }

    #[test]
    fn test_parse_rejects_non_indices() {
        assert_eq!(parse_choice(""), None);
        assert_eq!(parse_choice("\n"), None);
        assert_eq!(parse_choice("one"), None);
        assert_eq!(parse_choice("-1"), None);
        assert_eq!(parse_choice("1.5"), None);
    }
}
