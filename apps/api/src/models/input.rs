use serde::{Deserialize, Serialize};

use crate::scoring::dimensions::DimensionScores;

/// Identity snapshot supplied at resume intake.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub department: String,
    pub location: String,
    pub experience_years: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free text such as "6 months".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
}

impl ProjectRecord {
    pub fn technology_count(&self) -> usize {
        self.technologies.as_ref().map_or(0, Vec::len)
    }
}

/// A validated resume. Also stored verbatim on the employee for reanalysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeInput {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// One evaluator's direct 1-10 ratings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationInput {
    pub employee_id: String,
    #[serde(flatten)]
    pub scores: DimensionScores,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    pub evaluator_name: String,
}
