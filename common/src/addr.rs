//! # Address Normalization
//!
//! Every address that crosses a source boundary (scanner output, agent
//! inventory) passes through [`normalize`] before it is compared, so the
//! reconciler always matches like against like.

/// Canonical form of an interface address.
///
/// Trims surrounding whitespace and nothing else. Some dashboards strip
/// everything outside `[0-9.]` here, which silently mangles IPv6 and
/// hostname forms, so the character set is deliberately left alone.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize("  10.0.0.5 \n"), "10.0.0.5");
    }

    #[test]
    fn preserves_non_dotted_forms() {
        assert_eq!(normalize("fe80::1%eth0"), "fe80::1%eth0");
        assert_eq!(normalize("printer.local"), "printer.local");
    }

    #[test]
    fn whitespace_only_becomes_empty() {
        assert_eq!(normalize("   "), "");
    }
}
