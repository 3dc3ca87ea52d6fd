use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::input::{EvaluationInput, PersonalInfo, ResumeInput};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub department: String,
    pub location: String,
    pub experience_years: f64,
    pub team_size: Option<u32>,
    pub email: Option<String>,
    /// Last accepted resume, kept for reanalysis.
    pub resume_data: Option<ResumeInput>,
    pub evaluation_data: Option<EvaluationData>,
}

/// Accumulating 360° history. The only employee field that grows instead of
/// being overwritten.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationData {
    pub evaluations: Vec<RecordedEvaluation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecordedEvaluation {
    #[serde(flatten)]
    pub evaluation: EvaluationInput,
    pub timestamp: DateTime<Utc>,
}

/// Fields for `create_employee`; the store assigns the id.
#[derive(Debug, Clone, Default)]
pub struct NewEmployee {
    pub name: String,
    pub title: String,
    pub department: String,
    pub location: String,
    pub experience_years: f64,
    pub team_size: Option<u32>,
    pub email: Option<String>,
    pub resume_data: Option<ResumeInput>,
    pub evaluation_data: Option<EvaluationData>,
}

impl NewEmployee {
    pub fn from_resume(resume: &ResumeInput) -> Self {
        let PersonalInfo {
            name,
            title,
            department,
            location,
            experience_years,
            email,
        } = resume.personal_info.clone();
        Self {
            name,
            title,
            department,
            location,
            experience_years,
            team_size: None,
            email,
            resume_data: Some(resume.clone()),
            evaluation_data: None,
        }
    }
}

/// Partial update for `update_employee`. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub title: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub experience_years: Option<f64>,
    pub team_size: Option<u32>,
    pub email: Option<String>,
    pub resume_data: Option<ResumeInput>,
    pub evaluation_data: Option<EvaluationData>,
}

impl EmployeeUpdate {
    pub fn apply(self, employee: &mut Employee) {
        if let Some(v) = self.name {
            employee.name = v;
        }
        if let Some(v) = self.title {
            employee.title = v;
        }
        if let Some(v) = self.department {
            employee.department = v;
        }
        if let Some(v) = self.location {
            employee.location = v;
        }
        if let Some(v) = self.experience_years {
            employee.experience_years = v;
        }
        if let Some(v) = self.team_size {
            employee.team_size = Some(v);
        }
        if let Some(v) = self.email {
            employee.email = Some(v);
        }
        if let Some(v) = self.resume_data {
            employee.resume_data = Some(v);
        }
        if let Some(v) = self.evaluation_data {
            employee.evaluation_data = Some(v);
        }
    }
}
