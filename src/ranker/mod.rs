//! Heuristic algorithm ranking
//!
//! Scores every catalog entry matching the fingerprint's problem type,
//! drops hard exclusions and returns the best candidates with the reasons
//! behind each score.

mod rules;

pub use rules::{
    score_candidate, Eligibility, ImbalanceMatching, BASE_SCORE, IMBALANCE_BONUS,
    IMBALANCE_MARKERS, INTERPRETABILITY_BONUS, MISSING_VALUE_PENALTY, SMALL_DATA_PENALTY,
    TINY_DATA_DEEP_PENALTY, UNDERFIT_PENALTY,
};

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::debug;

use crate::catalog::{AlgorithmCatalog, AlgorithmDescriptor};
use crate::profiler::DatasetFingerprint;

/// A scored, eligible candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRecommendation {
    pub algorithm: Arc<AlgorithmDescriptor>,
    pub score: f64,
    /// Justifications in the order the rules fired
    pub reasons: Vec<String>,
}

/// Scoring outcome for a candidate, excluded ones included
#[derive(Debug, Clone)]
pub struct CandidateEvaluation {
    pub algorithm: Arc<AlgorithmDescriptor>,
    pub eligibility: Eligibility,
}

/// Ranks catalog entries against dataset fingerprints
#[derive(Debug, Clone)]
pub struct HeuristicRanker {
    catalog: Arc<AlgorithmCatalog>,
    matching: ImbalanceMatching,
}

impl HeuristicRanker {
    pub fn new(catalog: Arc<AlgorithmCatalog>) -> Self {
        Self {
            catalog,
            matching: ImbalanceMatching::default(),
        }
    }

    /// Choose how the imbalance bonus selects candidates
    pub fn with_imbalance_matching(mut self, matching: ImbalanceMatching) -> Self {
        self.matching = matching;
        self
    }

    pub fn catalog(&self) -> &Arc<AlgorithmCatalog> {
        &self.catalog
    }

    /// Score every candidate of the fingerprint's problem type, in catalog order
    pub fn evaluate(&self, fingerprint: &DatasetFingerprint) -> Vec<CandidateEvaluation> {
        let problem_type = fingerprint.problem_type();
        self.catalog
            .get_by_type(problem_type)
            .into_iter()
            .map(|algorithm| {
                let eligibility = score_candidate(&algorithm, fingerprint, self.matching);
                CandidateEvaluation { algorithm, eligibility }
            })
            .collect()
    }

    /// Best `top_k` eligible candidates, highest score first.
    ///
    /// Equal scores keep catalog order.
    pub fn rank(&self, fingerprint: &DatasetFingerprint, top_k: usize) -> Vec<RankedRecommendation> {
        if top_k == 0 {
            return Vec::new();
        }

        let evaluations = self.evaluate(fingerprint);
        let candidates = evaluations.len();

        let mut ranked: Vec<RankedRecommendation> = evaluations
            .into_iter()
            .filter_map(|evaluation| match evaluation.eligibility {
                Eligibility::Eligible { score, reasons } => Some(RankedRecommendation {
                    algorithm: evaluation.algorithm,
                    score,
                    reasons,
                }),
                Eligibility::Excluded { .. } => {
                    debug!(algorithm = %evaluation.algorithm.name, "Candidate excluded");
                    None
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        ranked.truncate(top_k);

        debug!(
            problem_type = %fingerprint.problem_type(),
            candidates,
            returned = ranked.len(),
            "Ranked candidates"
        );
        ranked
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::catalog::ProblemType;

    fn algo(name: &str, complexity: u8, min_samples: usize) -> AlgorithmDescriptor {
        AlgorithmDescriptor::builder()
            .name(name)
            .problem_type(ProblemType::Classification)
            .description("plain model")
            .complexity(complexity)
            .min_samples(min_samples)
            .build()
            .unwrap()
    }

    fn ranker(algos: Vec<AlgorithmDescriptor>) -> HeuristicRanker {
        let catalog = AlgorithmCatalog::new();
        catalog.register_all(algos);
        HeuristicRanker::new(Arc::new(catalog))
    }

    #[test]
    fn test_hard_exclusion_even_with_large_top_k() {
        let ranker = ranker(vec![algo("Deep Net", 8, 1000)]);
        let fp = fingerprint(30, false, classification(false));

        let evaluations = ranker.evaluate(&fp);
        assert_eq!(evaluations.len(), 1);
        assert!(evaluations[0].eligibility.is_excluded());
        assert_eq!(evaluations[0].eligibility.score(), f64::NEG_INFINITY);
        assert_eq!(
            evaluations[0].eligibility.reasons()[0],
            "Below min samples requirement (1000)"
        );

        assert!(ranker.rank(&fp, 100).is_empty());
    }

    #[test]
    fn test_small_data_bands_do_not_stack() {
        // Both bands match, only the first applies: 100 - 60
        let ranker = ranker(vec![algo("Deep Net", 8, 10)]);
        let fp = fingerprint(30, false, classification(false));

        let recs = ranker.rank(&fp, 1);
        assert_eq!(recs[0].score, 40.0);
        assert_eq!(recs[0].reasons, vec!["Too complex for small dataset (30 rows)"]);
    }

    #[test]
    fn test_second_band_alone() {
        let ranker = ranker(vec![algo("Deep Net", 8, 10)]);
        let recs = ranker.rank(&fingerprint(150, false, None), 1);
        assert_eq!(recs[0].score, 20.0);
        assert_eq!(recs[0].reasons, vec!["Requires much more data"]);
    }

    #[test]
    fn test_missing_penalty_and_interpretability() {
        let ranker = ranker(vec![algo("Simple", 2, 10)]);
        let recs = ranker.rank(&fingerprint(500, true, None), 1);
        assert_eq!(recs[0].score, 60.0);
        assert_eq!(
            recs[0].reasons,
            vec![
                "Does not handle missing values natively (requires imputation)",
                "Highly interpretable"
            ]
        );
    }

    #[test]
    fn test_large_data_underfit_caution() {
        let ranker = ranker(vec![algo("Linear", 2, 10), algo("Medium", 3, 10)]);
        let recs = ranker.rank(&fingerprint(20_000, false, None), 2);
        assert_eq!(recs[0].algorithm.name, "Medium");
        assert_eq!(recs[0].score, 110.0);
        assert_eq!(recs[1].score, 100.0);
        assert!(recs[1].reasons.contains(&"May underfit large/complex data".to_string()));
    }

    #[test]
    fn test_imbalance_bonus_text_matching() {
        let tree = AlgorithmDescriptor::builder()
            .name("Plain")
            .problem_type(ProblemType::Classification)
            .description("Tree ensemble")
            .complexity(5)
            .build()
            .unwrap();
        let lowercase = AlgorithmDescriptor::builder()
            .name("Other")
            .problem_type(ProblemType::Classification)
            .description("uses a decision tree")
            .complexity(5)
            .build()
            .unwrap();
        let ranker = ranker(vec![lowercase, tree]);

        let recs = ranker.rank(&fingerprint(500, false, classification(true)), 2);
        assert_eq!(recs[0].algorithm.name, "Plain");
        assert_eq!(recs[0].score, 115.0);
        assert_eq!(recs[0].reasons, vec!["Handles class imbalance well"]);
        assert_eq!(recs[1].score, 100.0);

        let balanced = ranker.rank(&fingerprint(500, false, classification(false)), 2);
        assert!(balanced.iter().all(|r| r.score == 100.0));
    }

    #[test]
    fn test_imbalance_bonus_capability_flag() {
        let flagged = AlgorithmDescriptor::builder()
            .name("Flagged")
            .problem_type(ProblemType::Classification)
            .complexity(5)
            .robust_to_imbalance(true)
            .build()
            .unwrap();
        let ranker = ranker(vec![algo("Forest", 5, 10), flagged])
            .with_imbalance_matching(ImbalanceMatching::CapabilityFlag);

        let recs = ranker.rank(&fingerprint(500, false, classification(true)), 2);
        assert_eq!(recs[0].algorithm.name, "Flagged");
        assert_eq!(recs[0].score, 115.0);
        assert_eq!(recs[1].score, 100.0);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let ranker = ranker(vec![algo("A", 5, 10), algo("B", 5, 10), algo("C", 5, 10)]);
        let names: Vec<_> = ranker
            .rank(&fingerprint(500, false, None), 3)
            .into_iter()
            .map(|r| r.algorithm.name.clone())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_top_k_zero_and_no_candidates() {
        let ranker = ranker(vec![algo("A", 5, 10)]);
        assert!(ranker.rank(&fingerprint(500, false, None), 0).is_empty());
        assert!(ranker.rank(&fingerprint(500, false, regression()), 5).is_empty());
    }
}
