use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::calculator::AnalysisResult;
use crate::scoring::dimensions::{DimensionScores, MAX_SCORE};

/// Persisted score, one per employee. Replaced wholesale on every write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpertiseScore {
    pub id: Uuid,
    pub employee_id: Uuid,
    #[serde(flatten)]
    pub scores: DimensionScores,
    pub overall_score: f64,
    pub last_updated: DateTime<Utc>,
}

/// Fields for `create_or_update_expertise_score`. The overall score is
/// derived, never supplied, so it always equals the dimension mean.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpertiseScore {
    pub employee_id: Uuid,
    pub scores: DimensionScores,
    pub last_updated: DateTime<Utc>,
}

impl NewExpertiseScore {
    pub fn new(employee_id: Uuid, scores: DimensionScores) -> Self {
        Self {
            employee_id,
            scores: scores.clamped(),
            last_updated: Utc::now(),
        }
    }

    pub fn from_analysis(employee_id: Uuid, analysis: &AnalysisResult) -> Self {
        Self::new(employee_id, analysis.scores)
    }

    pub fn overall_score(&self) -> f64 {
        self.scores.mean().min(MAX_SCORE)
    }

    pub fn into_record(self, id: Uuid) -> ExpertiseScore {
        let overall_score = self.overall_score();
        ExpertiseScore {
            id,
            employee_id: self.employee_id,
            scores: self.scores,
            overall_score,
            last_updated: self.last_updated,
        }
    }
}
