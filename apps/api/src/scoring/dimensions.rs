use serde::{Deserialize, Serialize};

/// Upper bound for every dimension and for the overall score.
pub const MAX_SCORE: f64 = 10.0;

/// The six expertise axes rendered as the faces of the cube.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    TechnicalSkills,
    Leadership,
    Communication,
    ProjectManagement,
    Innovation,
    DomainKnowledge,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::TechnicalSkills,
        Dimension::Leadership,
        Dimension::Communication,
        Dimension::ProjectManagement,
        Dimension::Innovation,
        Dimension::DomainKnowledge,
    ];
}

/// One value per dimension. Flattened into every score-carrying record so the
/// wire shape stays `{ technicalSkills, leadership, ... }`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScores {
    pub technical_skills: f64,
    pub leadership: f64,
    pub communication: f64,
    pub project_management: f64,
    pub innovation: f64,
    pub domain_knowledge: f64,
}

impl DimensionScores {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::TechnicalSkills => self.technical_skills,
            Dimension::Leadership => self.leadership,
            Dimension::Communication => self.communication,
            Dimension::ProjectManagement => self.project_management,
            Dimension::Innovation => self.innovation,
            Dimension::DomainKnowledge => self.domain_knowledge,
        }
    }

    fn get_mut(&mut self, dimension: Dimension) -> &mut f64 {
        match dimension {
            Dimension::TechnicalSkills => &mut self.technical_skills,
            Dimension::Leadership => &mut self.leadership,
            Dimension::Communication => &mut self.communication,
            Dimension::ProjectManagement => &mut self.project_management,
            Dimension::Innovation => &mut self.innovation,
            Dimension::DomainKnowledge => &mut self.domain_knowledge,
        }
    }

    /// Arithmetic mean of the six values.
    pub fn mean(&self) -> f64 {
        Dimension::ALL.iter().map(|d| self.get(*d)).sum::<f64>() / Dimension::ALL.len() as f64
    }

    /// Clamps each value into `[0, MAX_SCORE]`.
    pub fn clamped(mut self) -> Self {
        for dimension in Dimension::ALL {
            let value = self.get_mut(dimension);
            *value = value.clamp(0.0, MAX_SCORE);
        }
        self
    }

    /// Adds `other * weight` into `self`, dimension by dimension.
    pub fn accumulate(&mut self, other: &DimensionScores, weight: f64) {
        for dimension in Dimension::ALL {
            *self.get_mut(dimension) += other.get(dimension) * weight;
        }
    }
}

/// Human-readable band for an overall score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PerformanceLevel {
    #[serde(rename = "Excellent")]
    Excellent,
    #[serde(rename = "Above Average")]
    AboveAverage,
    #[serde(rename = "Average")]
    Average,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl PerformanceLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 8.5 {
            PerformanceLevel::Excellent
        } else if score >= 7.5 {
            PerformanceLevel::AboveAverage
        } else if score >= 6.5 {
            PerformanceLevel::Average
        } else {
            PerformanceLevel::NeedsImprovement
        }
    }
}
