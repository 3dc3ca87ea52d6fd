//! Expertise scoring — pure, deterministic mapping from one input record to
//! an `AnalysisResult`. No I/O, no clock, no randomness.
//!
//! Every sub-term is total: a missing optional field or an unparseable
//! duration contributes zero instead of failing the whole calculation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::input::{EvaluationInput, PersonalInfo, ProjectRecord, ResumeInput};
use crate::scoring::dimensions::{DimensionScores, MAX_SCORE};
use crate::scoring::keywords::{
    contains_any, contains_keyword, COMMUNICATION_ACHIEVEMENT_KEYWORDS, DURATION_MONTH_MARKER,
    INNOVATION_KEYWORDS, MODERN_TECH_KEYWORDS, ROLE_LEAD, ROLE_MANAGER, ROLE_SENIOR,
    TECHNICAL_SKILL_KEYWORDS,
};
use crate::scoring::recommendations::generate_recommendations;

/// Confidence assigned to a direct evaluation.
pub const EVALUATION_CONFIDENCE: f64 = 0.9;

/// Handoff type between the calculator and the aggregator. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(flatten)]
    pub scores: DimensionScores,
    pub overall_score: f64,
    pub confidence: f64,
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    fn from_scores(scores: DimensionScores, overall_score: f64, confidence: f64) -> Self {
        let recommendations = generate_recommendations(
            scores.technical_skills,
            scores.leadership,
            scores.communication,
        );
        Self {
            scores,
            overall_score,
            confidence,
            recommendations,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CalculatorError {
    #[error("analyses and weights must have the same length ({analyses} vs {weights})")]
    LengthMismatch { analyses: usize, weights: usize },

    #[error("total weight must be positive, got {0}")]
    NonPositiveTotalWeight(f64),
}

// ────────────────────────────────────────────────────────────────────────────
// Resume analysis
// ────────────────────────────────────────────────────────────────────────────

/// Capped linear tenure credit shared by every dimension.
pub fn base_experience(experience_years: f64) -> f64 {
    (experience_years * 0.3).min(3.0)
}

pub fn analyze_resume(resume: &ResumeInput) -> AnalysisResult {
    let ResumeInput {
        personal_info,
        projects,
        skills,
        achievements,
    } = resume;
    let base = base_experience(personal_info.experience_years);

    let raw = DimensionScores {
        technical_skills: technical_score(projects, skills, base),
        leadership: leadership_score(projects, personal_info.experience_years, base),
        communication: communication_score(projects, achievements, base),
        project_management: project_management_score(projects, base),
        innovation: innovation_score(projects, skills, base),
        domain_knowledge: domain_knowledge_score(personal_info, projects, base),
    };
    let scores = raw.clamped();
    let overall_score = scores.mean().min(MAX_SCORE);
    let confidence = resume_confidence(projects.len(), skills.len(), achievements.len());

    AnalysisResult::from_scores(scores, overall_score, confidence)
}

fn technical_score(projects: &[ProjectRecord], skills: &[String], base: f64) -> f64 {
    let mut score = base;

    for project in projects {
        score += project.technology_count() as f64 * 0.2;
        if role_matches(project, ROLE_LEAD) || role_matches(project, ROLE_SENIOR) {
            score += 0.5;
        }
    }

    let matching_skills = skills
        .iter()
        .filter(|skill| contains_any(skill, TECHNICAL_SKILL_KEYWORDS))
        .count();
    score + matching_skills as f64 * 0.3
}

fn leadership_score(projects: &[ProjectRecord], experience_years: f64, base: f64) -> f64 {
    let mut score = base;

    if experience_years >= 5.0 {
        score += 1.0;
    }
    if experience_years >= 8.0 {
        score += 1.0;
    }

    // Checks are independent: "Lead Engineering Manager" earns both bonuses.
    for project in projects {
        if role_matches(project, ROLE_LEAD) {
            score += 1.0;
        }
        if role_matches(project, ROLE_MANAGER) {
            score += 1.5;
        }
        if role_matches(project, ROLE_SENIOR) {
            score += 0.5;
        }
    }

    score
}

fn communication_score(projects: &[ProjectRecord], achievements: &[String], base: f64) -> f64 {
    let mut score = base;

    for project in projects {
        if text_len(project.impact.as_deref()) > 50 {
            score += 0.5;
        }
        if text_len(project.description.as_deref()) > 100 {
            score += 0.3;
        }
    }

    let communication_achievements = achievements
        .iter()
        .filter(|a| contains_any(a, COMMUNICATION_ACHIEVEMENT_KEYWORDS))
        .count();
    score + communication_achievements as f64 * 0.5
}

fn project_management_score(projects: &[ProjectRecord], base: f64) -> f64 {
    let mut score = base + projects.len() as f64 * 0.4;

    for project in projects {
        let months = project
            .duration
            .as_deref()
            .filter(|d| d.contains(DURATION_MONTH_MARKER))
            .and_then(leading_integer);
        if let Some(months) = months {
            if months >= 6 {
                score += 0.5;
            }
            if months >= 12 {
                score += 0.5;
            }
        }
    }

    score
}

fn innovation_score(projects: &[ProjectRecord], skills: &[String], base: f64) -> f64 {
    let mut score = base;

    for project in projects {
        let described = project
            .description
            .as_deref()
            .is_some_and(|d| contains_any(d, INNOVATION_KEYWORDS));
        let impactful = project
            .impact
            .as_deref()
            .is_some_and(|i| contains_any(i, INNOVATION_KEYWORDS));
        if described || impactful {
            score += 0.5;
        }
    }

    if skills.iter().any(|s| contains_any(s, MODERN_TECH_KEYWORDS)) {
        score += 1.0;
    }

    score
}

fn domain_knowledge_score(info: &PersonalInfo, projects: &[ProjectRecord], base: f64) -> f64 {
    let mut score = base + info.experience_years * 0.2;

    if !info.title.is_empty() && !info.department.is_empty() {
        score += 1.0;
    }
    if projects.len() >= 3 {
        score += 0.5;
    }
    if projects.len() >= 5 {
        score += 0.5;
    }

    score
}

/// How much corroborating evidence backs a resume-derived score.
pub fn resume_confidence(projects: usize, skills: usize, achievements: usize) -> f64 {
    let mut confidence: f64 = 0.3;

    if projects >= 2 {
        confidence += 0.2;
    }
    if projects >= 4 {
        confidence += 0.2;
    }
    if skills >= 5 {
        confidence += 0.1;
    }
    if achievements >= 2 {
        confidence += 0.1;
    }

    confidence.min(1.0)
}

fn role_matches(project: &ProjectRecord, keyword: &str) -> bool {
    project
        .role
        .as_deref()
        .is_some_and(|role| contains_keyword(role, keyword))
}

fn text_len(text: Option<&str>) -> usize {
    text.map_or(0, |t| t.chars().count())
}

static LEADING_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("Invalid leading integer regex"));

/// Reads the integer a duration string starts with ("6 months" → 6).
/// Digit runs too long for `i64` saturate instead of being dropped.
pub fn leading_integer(text: &str) -> Option<i64> {
    let digits = LEADING_INTEGER.captures(text)?.get(1)?.as_str();
    Some(digits.parse().unwrap_or(if digits.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Evaluation analysis
// ────────────────────────────────────────────────────────────────────────────

/// Direct ratings pass through verbatim; they are already bounded to [1, 10].
pub fn analyze_evaluation(evaluation: &EvaluationInput) -> AnalysisResult {
    let scores = evaluation.scores;
    AnalysisResult::from_scores(scores, scores.mean(), EVALUATION_CONFIDENCE)
}

// ────────────────────────────────────────────────────────────────────────────
// Weighted merge
// ────────────────────────────────────────────────────────────────────────────

/// Weighted merge of several analyses. Weights are normalised to sum to 1.
/// The overall score is the mean of the merged dimensions and the
/// recommendations are regenerated from them, not unioned from the inputs.
pub fn combine_analyses(
    analyses: &[AnalysisResult],
    weights: &[f64],
) -> Result<AnalysisResult, CalculatorError> {
    if analyses.len() != weights.len() {
        return Err(CalculatorError::LengthMismatch {
            analyses: analyses.len(),
            weights: weights.len(),
        });
    }

    let total_weight: f64 = weights.iter().sum();
    if !(total_weight > 0.0) {
        return Err(CalculatorError::NonPositiveTotalWeight(total_weight));
    }

    let mut scores = DimensionScores::default();
    let mut confidence = 0.0;
    for (analysis, weight) in analyses.iter().zip(weights) {
        let normalized = weight / total_weight;
        scores.accumulate(&analysis.scores, normalized);
        confidence += analysis.confidence * normalized;
    }

    Ok(AnalysisResult::from_scores(scores, scores.mean(), confidence))
}
