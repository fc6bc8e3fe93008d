//! Summary of a completed run.

use std::fmt;

/// Counts reported after both listings are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitReport {
    pub products: usize,
    pub categories: usize,
}

impl fmt::Display for SplitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Extracted {} products and {} unique clean categories.",
            self.products, self.categories
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line() {
        let report = SplitReport {
            products: 12,
            categories: 3,
        };
        assert_eq!(
            report.to_string(),
            "Extracted 12 products and 3 unique clean categories."
        );
    }

    #[test]
    fn test_zero_counts() {
        assert_eq!(
            SplitReport::default().to_string(),
            "Extracted 0 products and 0 unique clean categories."
        );
    }
}
