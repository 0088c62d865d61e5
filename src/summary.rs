use std::fmt;

use crate::models::StrikeFund;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub with_coordinates: usize,
    pub thematic: usize,
}

/// Counts records by placement. The two sub-counts are not checked against
/// `total`.
pub fn summarize(funds: &[StrikeFund]) -> Summary {
    Summary {
        total: funds.len(),
        with_coordinates: funds.iter().filter(|f| f.has_coordinates()).count(),
        thematic: funds.iter().filter(|f| f.is_thematic()).count(),
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Found {} strike funds", self.total)?;
        writeln!(f, "- {} funds with coordinates", self.with_coordinates)?;
        write!(f, "- {} thematic funds", self.thematic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::funds::build_records;
    use rstest::rstest;

    #[test]
    fn dataset_counts_partition_total() {
        let funds = build_records();
        let summary = summarize(&funds);

        assert_eq!(summary.total, funds.len());
        assert_eq!(summary.with_coordinates, 123);
        assert_eq!(summary.thematic, 16);
        assert_eq!(summary.with_coordinates + summary.thematic, summary.total);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(3, 0)]
    #[case(0, 2)]
    #[case(4, 5)]
    fn counts_follow_placement(#[case] located: usize, #[case] thematic: usize) {
        let funds: Vec<StrikeFund> = (0..located)
            .map(|i| StrikeFund::located(&format!("loc {i}"), "https://example.org", 48.8, 2.3))
            .chain((0..thematic).map(|i| StrikeFund::thematic(&format!("theme {i}"), "https://example.org")))
            .collect();

        assert_eq!(
            summarize(&funds),
            Summary {
                total: located + thematic,
                with_coordinates: located,
                thematic,
            }
        );
    }

    #[test]
    fn display_matches_report_lines() {
        let summary = Summary {
            total: 139,
            with_coordinates: 123,
            thematic: 16,
        };

        assert_eq!(
            summary.to_string(),
            "Found 139 strike funds\n- 123 funds with coordinates\n- 16 thematic funds"
        );
    }
}
