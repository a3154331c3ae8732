//! Apex-domain reduction.
//!
//! A queried name is reduced to its last two dot-separated labels,
//! lowercased. This is a deliberately coarse heuristic: names under
//! multi-label public suffixes (e.g. `example.co.uk`) collapse to the
//! suffix side. Good enough for grouping query-log noise; not a
//! registrable-domain algorithm.

/// Reduce a DNS name to its apex domain.
///
/// Example: `Tracking.Ads.Example.COM` -> `example.com`. Names with fewer
/// than two labels pass through lowercased.
#[must_use]
pub fn apex_domain(name: &str) -> String {
    let lower = name.to_ascii_lowercase();
    let labels: Vec<&str> = lower.split('.').collect();
    if labels.len() <= 2 {
        return lower;
    }
    labels[labels.len() - 2..].join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_subdomain_collapses() {
        assert_eq!(apex_domain("a.b.c.example.com"), "example.com");
    }

    #[test]
    fn apex_passes_through() {
        assert_eq!(apex_domain("example.com"), "example.com");
    }

    #[test]
    fn lowercased() {
        assert_eq!(apex_domain("Ads.EXAMPLE.Com"), "example.com");
    }

    #[test]
    fn single_label() {
        assert_eq!(apex_domain("localhost"), "localhost");
    }

    #[test]
    fn known_coarse_for_two_label_suffixes() {
        // documented simplification, not a bug
        assert_eq!(apex_domain("shop.example.co.uk"), "co.uk");
    }
}
