//! SAW Calculator - weighted ranking of alternatives.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{CriterionKind, DecisionMatrix, SawError};
use crate::domain::foundation::{NameList, ValidationError};

/// Relative tolerance on the weight total.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Raw SAW input as submitted by a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SawInput {
    pub alternatives: Vec<String>,
    pub criteria: Vec<String>,
    pub weights: Vec<f64>,
    pub decision_matrix: Vec<Vec<f64>>,
    pub criteria_types: Vec<String>,
}

/// An alternative's position in the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub alternative: String,
    pub score: f64,
    pub rank: usize,
}

/// What one criterion adds to an alternative's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionContribution {
    pub criterion: String,
    pub normalized_value: f64,
    pub weight: f64,
    pub contribution: f64,
    /// Share of the alternative's total score, 0 when the total is 0.
    pub percentage: f64,
}

/// Score breakdown for a single alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeBreakdown {
    pub alternative: String,
    pub total_score: f64,
    pub contributions: Vec<CriterionContribution>,
}

/// An alternative with its score and input position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAlternative {
    pub alternative: String,
    pub score: f64,
    pub index: usize,
}

/// Head-to-head comparison of two alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeComparison {
    pub first: ScoredAlternative,
    pub second: ScoredAlternative,
    pub score_difference: f64,
    pub better_alternative: String,
}

/// Result of a successful SAW calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct SawOutcome {
    pub alternatives: NameList,
    pub criteria: NameList,
    pub kinds: Vec<CriterionKind>,
    pub weights: Vec<f64>,
    pub decision_matrix: DecisionMatrix,
    pub normalized_matrix: Vec<Vec<f64>>,
    /// Index-aligned with `alternatives`.
    pub scores: Vec<f64>,
}

impl SawOutcome {
    /// Alternatives by descending score; ties keep input order.
    pub fn ranking(&self) -> Vec<RankedAlternative> {
        let mut order: Vec<usize> = (0..self.scores.len()).collect();
        order.sort_by(|a, b| {
            self.scores[*b]
                .partial_cmp(&self.scores[*a])
                .unwrap_or(Ordering::Equal)
        });

        order
            .into_iter()
            .enumerate()
            .map(|(position, index)| RankedAlternative {
                alternative: self.alternative_name(index),
                score: self.scores[index],
                rank: position + 1,
            })
            .collect()
    }

    /// Per-criterion contributions for every alternative, in input order.
    pub fn detailed_scores(&self) -> Vec<AlternativeBreakdown> {
        self.normalized_matrix
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let total = self.scores[i];
                let contributions = row
                    .iter()
                    .zip(&self.weights)
                    .zip(self.criteria.iter())
                    .map(|((value, weight), criterion)| {
                        let contribution = value * weight;
                        CriterionContribution {
                            criterion: criterion.to_string(),
                            normalized_value: *value,
                            weight: *weight,
                            contribution,
                            percentage: if total > 0.0 {
                                contribution / total * 100.0
                            } else {
                                0.0
                            },
                        }
                    })
                    .collect();

                AlternativeBreakdown {
                    alternative: self.alternative_name(i),
                    total_score: total,
                    contributions,
                }
            })
            .collect()
    }

    /// Highest-scoring alternative; the first one wins ties.
    pub fn best(&self) -> Option<ScoredAlternative> {
        self.pick(|candidate, current| candidate > current)
    }

    /// Lowest-scoring alternative; the first one wins ties.
    pub fn worst(&self) -> Option<ScoredAlternative> {
        self.pick(|candidate, current| candidate < current)
    }

    /// Compares the alternatives at two positions.
    pub fn compare(&self, first: usize, second: usize) -> Option<AlternativeComparison> {
        let a = self.scored(first)?;
        let b = self.scored(second)?;
        let better_alternative = if a.score > b.score {
            a.alternative.clone()
        } else {
            b.alternative.clone()
        };

        Some(AlternativeComparison {
            score_difference: (a.score - b.score).abs(),
            better_alternative,
            first: a,
            second: b,
        })
    }

    fn pick(&self, replaces: impl Fn(f64, f64) -> bool) -> Option<ScoredAlternative> {
        let mut chosen: Option<usize> = None;
        for (index, score) in self.scores.iter().enumerate() {
            match chosen {
                Some(current) if !replaces(*score, self.scores[current]) => {}
                _ => chosen = Some(index),
            }
        }
        chosen.and_then(|index| self.scored(index))
    }

    fn scored(&self, index: usize) -> Option<ScoredAlternative> {
        Some(ScoredAlternative {
            alternative: self.alternatives.get(index)?.to_string(),
            score: *self.scores.get(index)?,
            index,
        })
    }

    fn alternative_name(&self, index: usize) -> String {
        self.alternatives.as_slice()[index].clone()
    }
}

/// Stateless Simple Additive Weighting calculator.
pub struct SawCalculator;

impl SawCalculator {
    /// Validates the input and scores every alternative.
    ///
    /// Score `V_i = Σ_j w_j · r_ij` where `r` is the decision matrix
    /// normalized per criterion kind.
    pub fn calculate(input: SawInput) -> Result<SawOutcome, SawError> {
        let alternatives = NameList::try_new("alternatives", input.alternatives, 1)?;
        let criteria = NameList::try_new("criteria", input.criteria, 1)?;

        let decision_matrix =
            DecisionMatrix::try_new(input.decision_matrix, alternatives.len(), criteria.len())?;
        let weights = Self::validate_weights(input.weights, criteria.len())?;

        if input.criteria_types.len() != criteria.len() {
            return Err(ValidationError::length_mismatch(
                "criteria_types",
                criteria.len(),
                input.criteria_types.len(),
            )
            .into());
        }
        let kinds = CriterionKind::parse_all(&input.criteria_types)?;

        let normalized_matrix = decision_matrix.normalize(&kinds);
        let scores = Self::weighted_scores(&normalized_matrix, &weights);

        Ok(SawOutcome {
            alternatives,
            criteria,
            kinds,
            weights,
            decision_matrix,
            normalized_matrix,
            scores,
        })
    }

    /// `Σ_j w_j · r_ij` for every row.
    pub fn weighted_scores(normalized: &[Vec<f64>], weights: &[f64]) -> Vec<f64> {
        normalized
            .iter()
            .map(|row| row.iter().zip(weights).map(|(r, w)| r * w).sum::<f64>())
            .collect()
    }

    fn validate_weights(weights: Vec<f64>, criteria: usize) -> Result<Vec<f64>, SawError> {
        if weights.len() != criteria {
            return Err(ValidationError::length_mismatch("weights", criteria, weights.len()).into());
        }
        for (index, weight) in weights.iter().enumerate() {
            if !weight.is_finite() {
                return Err(ValidationError::NotFinite { row: 0, col: index }.into());
            }
            if *weight < 0.0 {
                return Err(ValidationError::Negative {
                    row: 0,
                    col: index,
                    value: *weight,
                }
                .into());
            }
        }

        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(SawError::WeightsNotNormalized { sum });
        }
        Ok(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    /// Three games scored on frame rate (benefit) and price (cost).
    fn games() -> SawInput {
        SawInput {
            alternatives: strings(&["Alpha", "Beta", "Gamma"]),
            criteria: strings(&["fps", "price"]),
            weights: vec![0.6, 0.4],
            decision_matrix: vec![vec![60.0, 40.0], vec![120.0, 60.0], vec![30.0, 20.0]],
            criteria_types: strings(&["benefit", "Cost"]),
        }
    }

    #[test]
    fn scores_combine_normalized_values_and_weights() {
        let outcome = SawCalculator::calculate(games()).unwrap();

        // fps / 120, 20 / price
        assert!((outcome.scores[0] - (0.6 * 0.5 + 0.4 * 0.5)).abs() < 1e-12);
        assert!((outcome.scores[1] - (0.6 * 1.0 + 0.4 * (20.0 / 60.0))).abs() < 1e-12);
        assert!((outcome.scores[2] - (0.6 * 0.25 + 0.4 * 1.0)).abs() < 1e-12);
    }

    #[test]
    fn ranking_orders_by_score() {
        let outcome = SawCalculator::calculate(games()).unwrap();
        let ranking = outcome.ranking();

        let order: Vec<&str> = ranking.iter().map(|r| r.alternative.as_str()).collect();
        assert_eq!(order, vec!["Beta", "Gamma", "Alpha"]);
        assert_eq!(ranking.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn best_and_worst_pick_extremes() {
        let outcome = SawCalculator::calculate(games()).unwrap();
        assert_eq!(outcome.best().unwrap().alternative, "Beta");
        assert_eq!(outcome.worst().unwrap().alternative, "Alpha");
        assert_eq!(outcome.worst().unwrap().index, 0);
    }

    #[test]
    fn best_prefers_first_on_ties() {
        let input = SawInput {
            alternatives: strings(&["A", "B"]),
            criteria: strings(&["c"]),
            weights: vec![1.0],
            decision_matrix: vec![vec![5.0], vec![5.0]],
            criteria_types: strings(&["benefit"]),
        };
        let outcome = SawCalculator::calculate(input).unwrap();
        assert_eq!(outcome.best().unwrap().alternative, "A");
        assert_eq!(outcome.worst().unwrap().alternative, "A");
    }

    #[test]
    fn compare_reports_difference_and_winner() {
        let outcome = SawCalculator::calculate(games()).unwrap();
        let comparison = outcome.compare(0, 1).unwrap();

        assert_eq!(comparison.better_alternative, "Beta");
        assert!(
            (comparison.score_difference - (outcome.scores[1] - outcome.scores[0])).abs() < 1e-12
        );
        assert!(outcome.compare(0, 7).is_none());
    }

    #[test]
    fn detailed_scores_sum_to_total() {
        let outcome = SawCalculator::calculate(games()).unwrap();
        for breakdown in outcome.detailed_scores() {
            let sum: f64 = breakdown.contributions.iter().map(|c| c.contribution).sum();
            let pct: f64 = breakdown.contributions.iter().map(|c| c.percentage).sum();
            assert!((sum - breakdown.total_score).abs() < 1e-12);
            assert!((pct - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_score_has_zero_percentages() {
        let input = SawInput {
            alternatives: strings(&["A"]),
            criteria: strings(&["c"]),
            weights: vec![1.0],
            decision_matrix: vec![vec![0.0]],
            criteria_types: strings(&["benefit"]),
        };
        let outcome = SawCalculator::calculate(input).unwrap();
        let breakdown = &outcome.detailed_scores()[0];
        assert_eq!(breakdown.total_score, 0.0);
        assert_eq!(breakdown.contributions[0].percentage, 0.0);
    }

    #[test]
    fn weights_must_sum_to_one() {
        let mut input = games();
        input.weights = vec![0.5, 0.3];
        assert!(matches!(
            SawCalculator::calculate(input),
            Err(SawError::WeightsNotNormalized { .. })
        ));
    }

    #[test]
    fn weights_within_tolerance_are_accepted() {
        let mut input = games();
        input.weights = vec![0.6, 0.405];
        assert!(SawCalculator::calculate(input).is_ok());
    }

    #[test]
    fn weights_length_must_match_criteria() {
        let mut input = games();
        input.weights = vec![1.0];
        assert!(matches!(
            SawCalculator::calculate(input),
            Err(SawError::Validation(ValidationError::LengthMismatch { .. }))
        ));
    }

    #[test]
    fn criteria_types_are_validated() {
        let mut input = games();
        input.criteria_types = strings(&["benefit"]);
        assert!(matches!(
            SawCalculator::calculate(input),
            Err(SawError::Validation(ValidationError::LengthMismatch { .. }))
        ));

        let mut input = games();
        input.criteria_types = strings(&["benefit", "expense"]);
        assert!(matches!(
            SawCalculator::calculate(input),
            Err(SawError::UnknownCriterionKind { index: 1, .. })
        ));
    }

    #[test]
    fn negative_values_are_rejected() {
        let mut input = games();
        input.decision_matrix[2][0] = -1.0;
        assert!(matches!(
            SawCalculator::calculate(input),
            Err(SawError::Validation(ValidationError::Negative { .. }))
        ));
    }

    #[test]
    fn matrix_shape_is_validated_before_weights() {
        let mut input = games();
        input.decision_matrix.pop();
        input.weights = vec![0.1];
        assert!(matches!(
            SawCalculator::calculate(input),
            Err(SawError::Validation(ValidationError::LengthMismatch { .. }))
        ));
    }
}
