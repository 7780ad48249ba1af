//! Capacity quantity parsing
//!
//! Converts human-readable capacity strings (e.g. "100Gi", "1Ti") into a
//! canonical byte count.

use crate::error::{Error, Result};

/// Parse a capacity string (e.g. "100Gi", "1Ti") to bytes
pub fn parse_capacity(s: &str) -> Result<u64> {
    let s = s.trim();
    if s.is_empty() {
        return Err(Error::CapacityParse("empty capacity string".into()));
    }

    // Find where the number ends and unit begins
    let mut num_end = 0;
    for (i, c) in s.char_indices() {
        if !c.is_ascii_digit() && c != '.' {
            num_end = i;
            break;
        }
        num_end = i + 1;
    }

    let num_str = &s[..num_end];
    let unit_str = s[num_end..].trim();

    let num: f64 = num_str
        .parse()
        .map_err(|_| Error::CapacityParse(format!("invalid number: {}", num_str)))?;

    let multiplier: u64 = match unit_str.to_uppercase().as_str() {
        "" | "B" => 1,
        "K" | "KB" | "KI" | "KIB" => 1024,
        "M" | "MB" | "MI" | "MIB" => 1024 * 1024,
        "G" | "GB" | "GI" | "GIB" => 1024 * 1024 * 1024,
        "T" | "TB" | "TI" | "TIB" => 1024 * 1024 * 1024 * 1024,
        "P" | "PB" | "PI" | "PIB" => 1024 * 1024 * 1024 * 1024 * 1024,
        _ => {
            return Err(Error::CapacityParse(format!(
                "unknown unit: {}",
                unit_str
            )))
        }
    };

    Ok((num * multiplier as f64) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_capacity() {
        assert_eq!(parse_capacity("100").unwrap(), 100);
        assert_eq!(parse_capacity("100B").unwrap(), 100);
        assert_eq!(parse_capacity("1K").unwrap(), 1024);
        assert_eq!(parse_capacity("1Ki").unwrap(), 1024);
        assert_eq!(parse_capacity("1M").unwrap(), 1024 * 1024);
        assert_eq!(parse_capacity("1G").unwrap(), 1024 * 1024 * 1024);
        assert_eq!(parse_capacity("1Gi").unwrap(), 1024 * 1024 * 1024);
        assert_eq!(parse_capacity("100Gi").unwrap(), 100 * 1024 * 1024 * 1024);
        assert_eq!(parse_capacity("1T").unwrap(), 1024 * 1024 * 1024 * 1024);
        assert_eq!(parse_capacity("2.5Gi").unwrap(), 2_684_354_560);

        assert!(parse_capacity("").is_err());
        assert!(parse_capacity("abc").is_err());
        assert!(parse_capacity("100X").is_err());
    }
}
