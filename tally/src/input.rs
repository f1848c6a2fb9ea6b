//! Bounded reading of whitespace-separated integer input.

use std::io::Read;

use anyhow::{Context, Result, bail};
use tracing::debug;

/// Read whitespace-separated `i64` values from `reader`.
///
/// At most `limit_bytes` bytes are consumed. Longer input is rejected
/// rather than truncated: cutting mid-token would silently change a value.
pub fn read_values<R: Read>(reader: R, limit_bytes: usize) -> Result<Vec<i64>> {
    let mut contents = String::new();
    reader
        .take((limit_bytes as u64).saturating_add(1))
        .read_to_string(&mut contents)
        .context("read input values")?;
    if contents.len() > limit_bytes {
        bail!("input exceeds {limit_bytes} bytes (raise input_limit_bytes in tally.toml)");
    }
    let values = parse_values(&contents)?;
    debug!(count = values.len(), "parsed input values");
    Ok(values)
}

/// Parse every whitespace-separated token in `contents` as an `i64`.
pub fn parse_values(contents: &str) -> Result<Vec<i64>> {
    contents
        .split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .with_context(|| format!("invalid integer '{token}'"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_whitespace_separated_integers() {
        let values = read_values(Cursor::new("3 4 2\n-1"), 100).expect("read");
        assert_eq!(values, vec![3, 4, 2, -1]);
    }

    #[test]
    fn accepts_empty_input() {
        let values = read_values(Cursor::new(""), 100).expect("read");
        assert!(values.is_empty());
    }

    #[test]
    fn accepts_input_exactly_at_the_limit() {
        let values = read_values(Cursor::new("123"), 3).expect("read");
        assert_eq!(values, vec![123]);
    }

    #[test]
    fn rejects_input_over_the_limit() {
        let err = read_values(Cursor::new("12345 6"), 4).expect_err("expected limit error");
        assert!(err.to_string().contains("exceeds 4 bytes"));
    }

    #[test]
    fn rejects_non_integer_tokens() {
        let err = read_values(Cursor::new("3 x 4"), 100).expect_err("expected parse error");
        assert!(format!("{err:#}").contains("invalid integer 'x'"));
    }

    #[test]
    fn rejects_values_out_of_i64_range() {
        let err =
            read_values(Cursor::new("9223372036854775808"), 100).expect_err("expected overflow");
        assert!(format!("{err:#}").contains("invalid integer"));
    }
}
