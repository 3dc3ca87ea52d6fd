//! Turns permissive request payloads into validated inputs, collecting every
//! violated constraint instead of stopping at the first one.
//!
//! Payload leaves are raw JSON values so a wrong-typed field is reported at
//! its own path next to every other violation, rather than failing the whole
//! body at deserialization.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use crate::errors::FieldViolation;
use crate::models::input::{EvaluationInput, PersonalInfo, ProjectRecord, ResumeInput};
use crate::scoring::dimensions::{Dimension, DimensionScores};

pub const MIN_EXPERIENCE_YEARS: f64 = 0.0;
pub const MAX_EXPERIENCE_YEARS: f64 = 50.0;
pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 10.0;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumePayload {
    pub personal_info: Option<Value>,
    pub projects: Option<Value>,
    pub skills: Option<Value>,
    pub achievements: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfoPayload {
    pub name: Option<Value>,
    pub title: Option<Value>,
    pub department: Option<Value>,
    pub location: Option<Value>,
    pub experience_years: Option<Value>,
    pub email: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPayload {
    pub name: Option<Value>,
    pub description: Option<Value>,
    pub duration: Option<Value>,
    pub role: Option<Value>,
    pub technologies: Option<Value>,
    pub impact: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvaluationPayload {
    pub employee_id: Option<Value>,
    pub technical_skills: Option<Value>,
    pub leadership: Option<Value>,
    pub communication: Option<Value>,
    pub project_management: Option<Value>,
    pub innovation: Option<Value>,
    pub domain_knowledge: Option<Value>,
    pub feedback: Option<Value>,
    pub evaluator_name: Option<Value>,
}

impl EvaluationPayload {
    fn rating(&self, dimension: Dimension) -> Option<&Value> {
        match dimension {
            Dimension::TechnicalSkills => self.technical_skills.as_ref(),
            Dimension::Leadership => self.leadership.as_ref(),
            Dimension::Communication => self.communication.as_ref(),
            Dimension::ProjectManagement => self.project_management.as_ref(),
            Dimension::Innovation => self.innovation.as_ref(),
            Dimension::DomainKnowledge => self.domain_knowledge.as_ref(),
        }
    }
}

pub fn validate_resume(payload: ResumePayload) -> Result<ResumeInput, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let info: PersonalInfoPayload = match payload.personal_info {
        None => {
            violations.push(FieldViolation::new("personalInfo", "Required"));
            PersonalInfoPayload::default()
        }
        Some(value) => object(value, "personalInfo", &mut violations),
    };

    let name = required_text(info.name.as_ref(), "personalInfo.name", "Name is required", &mut violations);
    let title = required_text(info.title.as_ref(), "personalInfo.title", "Title is required", &mut violations);
    let department = required_text(
        info.department.as_ref(),
        "personalInfo.department",
        "Department is required",
        &mut violations,
    );
    let location = required_text(
        info.location.as_ref(),
        "personalInfo.location",
        "Location is required",
        &mut violations,
    );
    let experience_years = bounded_number(
        info.experience_years.as_ref(),
        "personalInfo.experienceYears",
        MIN_EXPERIENCE_YEARS,
        MAX_EXPERIENCE_YEARS,
        &mut violations,
    );
    let email = optional_text(info.email.as_ref(), "personalInfo.email", &mut violations);
    if let Some(email) = &email {
        if !EMAIL.is_match(email) {
            violations.push(FieldViolation::new("personalInfo.email", "Invalid email"));
        }
    }

    let projects: Vec<ProjectRecord> = list(payload.projects, "projects", &mut violations)
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            let path = format!("projects.{i}");
            let p: ProjectPayload = object(value, &path, &mut violations);
            ProjectRecord {
                name: required_text(
                    p.name.as_ref(),
                    &format!("{path}.name"),
                    "Project name is required",
                    &mut violations,
                ),
                description: optional_text(p.description.as_ref(), &format!("{path}.description"), &mut violations),
                duration: optional_text(p.duration.as_ref(), &format!("{path}.duration"), &mut violations),
                role: optional_text(p.role.as_ref(), &format!("{path}.role"), &mut violations),
                technologies: p.technologies.map(|technologies| {
                    text_list(Some(technologies), &format!("{path}.technologies"), &mut violations)
                }),
                impact: optional_text(p.impact.as_ref(), &format!("{path}.impact"), &mut violations),
            }
        })
        .collect();

    let skills = text_list(payload.skills, "skills", &mut violations);
    let achievements = text_list(payload.achievements, "achievements", &mut violations);

    if !violations.is_empty() {
        return Err(violations);
    }

    Ok(ResumeInput {
        personal_info: PersonalInfo {
            name,
            title,
            department,
            location,
            experience_years,
            email,
        },
        projects,
        skills,
        achievements,
    })
}

pub fn validate_evaluation(
    payload: EvaluationPayload,
) -> Result<EvaluationInput, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let ratings = Dimension::ALL.map(|dimension| {
        let field = dimension_field(dimension);
        bounded_number(payload.rating(dimension), field, MIN_RATING, MAX_RATING, &mut violations)
    });
    let [technical_skills, leadership, communication, project_management, innovation, domain_knowledge] =
        ratings;
    let scores = DimensionScores {
        technical_skills,
        leadership,
        communication,
        project_management,
        innovation,
        domain_knowledge,
    };

    let employee_id = required_text(
        payload.employee_id.as_ref(),
        "employeeId",
        "Employee ID is required",
        &mut violations,
    );
    let feedback = optional_text(payload.feedback.as_ref(), "feedback", &mut violations);
    let evaluator_name = required_text(
        payload.evaluator_name.as_ref(),
        "evaluatorName",
        "Evaluator name is required",
        &mut violations,
    );

    if !violations.is_empty() {
        return Err(violations);
    }

    Ok(EvaluationInput {
        employee_id,
        scores,
        feedback,
        evaluator_name,
    })
}

fn dimension_field(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::TechnicalSkills => "technicalSkills",
        Dimension::Leadership => "leadership",
        Dimension::Communication => "communication",
        Dimension::ProjectManagement => "projectManagement",
        Dimension::Innovation => "innovation",
        Dimension::DomainKnowledge => "domainKnowledge",
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn type_mismatch(field: &str, expected: &str, value: &Value) -> FieldViolation {
    FieldViolation::new(field, format!("Expected {expected}, received {}", kind(value)))
}

/// Reads a nested object with all-optional fields. Anything that is not an
/// object is reported and treated as empty.
fn object<T: Default + DeserializeOwned>(
    value: Value,
    field: &str,
    violations: &mut Vec<FieldViolation>,
) -> T {
    if !value.is_object() {
        violations.push(type_mismatch(field, "object", &value));
        return T::default();
    }
    match serde_json::from_value(value) {
        Ok(parsed) => parsed,
        Err(e) => {
            violations.push(FieldViolation::new(field, e.to_string()));
            T::default()
        }
    }
}

/// Absent or null lists are empty.
fn list(value: Option<Value>, field: &str, violations: &mut Vec<FieldViolation>) -> Vec<Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(other) => {
            violations.push(type_mismatch(field, "array", &other));
            Vec::new()
        }
    }
}

fn text_list(value: Option<Value>, field: &str, violations: &mut Vec<FieldViolation>) -> Vec<String> {
    list(value, field, violations)
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| match item {
            Value::String(s) => Some(s),
            other => {
                violations.push(type_mismatch(&format!("{field}.{i}"), "string", &other));
                None
            }
        })
        .collect()
}

fn optional_text(
    value: Option<&Value>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            violations.push(type_mismatch(field, "string", other));
            None
        }
    }
}

fn required_text(
    value: Option<&Value>,
    field: &str,
    message: &str,
    violations: &mut Vec<FieldViolation>,
) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(other) if !other.is_string() && !other.is_null() => {
            violations.push(type_mismatch(field, "string", other));
            String::new()
        }
        _ => {
            violations.push(FieldViolation::new(field, message));
            String::new()
        }
    }
}

fn bounded_number(
    value: Option<&Value>,
    field: &str,
    min: f64,
    max: f64,
    violations: &mut Vec<FieldViolation>,
) -> f64 {
    let number = match value {
        None | Some(Value::Null) => {
            violations.push(FieldViolation::new(field, "Required"));
            return min;
        }
        Some(Value::Number(n)) => n.as_f64(),
        Some(other) => {
            violations.push(type_mismatch(field, "number", other));
            return min;
        }
    };
    match number {
        Some(v) if !v.is_finite() || v < min => {
            violations.push(FieldViolation::new(
                field,
                format!("Number must be greater than or equal to {min}"),
            ));
            min
        }
        Some(v) if v > max => {
            violations.push(FieldViolation::new(
                field,
                format!("Number must be less than or equal to {max}"),
            ));
            max
        }
        Some(v) => v,
        None => {
            violations.push(type_mismatch(field, "number", &Value::Null));
            min
        }
    }
}
