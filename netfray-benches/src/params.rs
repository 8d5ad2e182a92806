//! Benchmark parameter types.
//!
//! Each type renders as a compact Criterion parameter label.

use std::fmt;

/// Parameters for a preferential attachment benchmark run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttachmentBenchParams {
    /// Size of the seed complete graph.
    pub initial_size: usize,
    /// Final node count.
    pub end_size: usize,
}

impl fmt::Display for AttachmentBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m={},n={}", self.initial_size, self.end_size)
    }
}

/// Parameters for an Erdos-Renyi benchmark run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErdosRenyiBenchParams {
    /// Node count.
    pub node_count: usize,
    /// Edge probability.
    pub probability: f64,
}

impl fmt::Display for ErdosRenyiBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}", self.node_count, self.probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AttachmentBenchParams { initial_size: 3, end_size: 500 }, "m=3,n=500")]
    #[case(AttachmentBenchParams { initial_size: 1, end_size: 1 }, "m=1,n=1")]
    fn attachment_labels(#[case] params: AttachmentBenchParams, #[case] expected: &str) {
        assert_eq!(params.to_string(), expected);
    }

    #[test]
    fn erdos_renyi_label() {
        let params = ErdosRenyiBenchParams {
            node_count: 200,
            probability: 0.05,
        };
        assert_eq!(params.to_string(), "n=200,p=0.05");
    }
}
