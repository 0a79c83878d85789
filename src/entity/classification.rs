use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoreError {
    #[error("no labels were scored")]
    Empty,

    #[error("score {score} for '{label}' is outside [0, 1]")]
    OutOfRange { label: String, score: f64 },
}

/// Oracle output ranked by descending score. Never empty, and every score
/// is a finite confidence in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    ranked: Vec<LabelScore>,
}

impl ClassificationResult {
    /// Sort the oracle scores, keeping the oracle's order for ties.
    pub fn new(mut scores: Vec<LabelScore>) -> Result<Self, ScoreError> {
        if scores.is_empty() {
            return Err(ScoreError::Empty);
        }
        // NaN fails the range check too
        if let Some(bad) = scores.iter().find(|s| !(0.0..=1.0).contains(&s.score)) {
            return Err(ScoreError::OutOfRange {
                label: bad.label.clone(),
                score: bad.score,
            });
        }
        scores.sort_by(|a, b| b.score.total_cmp(&a.score));
        Ok(Self { ranked: scores })
    }

    pub fn top(&self) -> &LabelScore {
        &self.ranked[0]
    }

    pub fn ranked(&self) -> &[LabelScore] {
        &self.ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(label: &str, score: f64) -> LabelScore {
        LabelScore {
            label: label.to_string(),
            score,
        }
    }

    #[test]
    fn ranks_by_descending_score() {
        let result = ClassificationResult::new(vec![
            score("allow", 0.1),
            score("swap mir", 0.7),
            score("swap clk", 0.2),
        ])
        .unwrap();

        assert_eq!(result.top().label, "swap mir");
        let labels: Vec<_> = result.ranked().iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["swap mir", "swap clk", "allow"]);
    }

    #[test]
    fn empty_oracle_output_is_rejected() {
        assert_eq!(ClassificationResult::new(Vec::new()), Err(ScoreError::Empty));
    }

    #[test]
    fn scores_outside_unit_range_are_rejected() {
        for bad in [f64::NAN, f64::INFINITY, -0.1, 1.5] {
            let result = ClassificationResult::new(vec![score("allow", 0.2), score("swap mir", bad)]);
            assert!(
                matches!(result, Err(ScoreError::OutOfRange { ref label, .. }) if label == "swap mir"),
                "score {} was accepted",
                bad
            );
        }
        assert!(ClassificationResult::new(vec![score("allow", 0.0), score("swap mir", 1.0)]).is_ok());
    }
}
