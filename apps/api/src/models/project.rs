use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::input::ProjectRecord;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub role: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub impact: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewProject {
    pub employee_id: Uuid,
    pub record: ProjectRecord,
}
