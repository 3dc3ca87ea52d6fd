use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::employees::validation::{
    validate_evaluation, validate_resume, EvaluationPayload, ResumePayload,
};
use crate::errors::AppError;
use crate::models::employee::Employee;
use crate::models::expertise::ExpertiseScore;
use crate::models::project::Project;
use crate::scoring::calculator::{analyze_resume, AnalysisResult};
use crate::scoring::dimensions::PerformanceLevel;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResponse {
    pub message: String,
    pub expertise_score: ExpertiseScore,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeAnalysis {
    pub employee_id: Uuid,
    #[serde(flatten)]
    pub analysis: AnalysisResult,
    pub performance_level: PerformanceLevel,
}

/// Ids that are not UUIDs cannot exist in the store.
fn parse_id(id: &str, entity: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| {
        warn!(id = %id, "Lookup with malformed id");
        AppError::NotFound(format!("{entity} not found"))
    })
}

async fn require_employee(state: &AppState, id: &str) -> Result<Employee, AppError> {
    let id = parse_id(id, "Employee")?;
    state
        .store
        .get_employee(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))
}

/// GET /api/employees
pub async fn handle_list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, AppError> {
    Ok(Json(state.store.get_all_employees().await?))
}

/// GET /api/employees/:id
pub async fn handle_get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, AppError> {
    Ok(Json(require_employee(&state, &id).await?))
}

/// GET /api/employees/:id/projects
pub async fn handle_get_projects(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Project>>, AppError> {
    // Unknown employees simply have no projects.
    let projects = match Uuid::parse_str(&id) {
        Ok(id) => state.store.get_projects_by_employee_id(id).await?,
        Err(_) => Vec::new(),
    };
    Ok(Json(projects))
}

/// GET /api/employees/:id/expertise
pub async fn handle_get_expertise(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ExpertiseScore>, AppError> {
    let id = parse_id(&id, "Expertise score")?;
    let score = state
        .store
        .get_expertise_score(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Expertise score not found".to_string()))?;
    Ok(Json(score))
}

/// GET /api/employees/:id/analysis
/// Re-runs resume analysis over the stored resume payload.
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EmployeeAnalysis>, AppError> {
    let employee = require_employee(&state, &id).await?;
    let resume = employee
        .resume_data
        .as_ref()
        .ok_or_else(|| AppError::NotFound("No resume on file for employee".to_string()))?;

    let analysis = analyze_resume(resume);
    let performance_level = PerformanceLevel::from_score(analysis.overall_score);
    Ok(Json(EmployeeAnalysis {
        employee_id: employee.id,
        analysis,
        performance_level,
    }))
}

/// POST /api/employees/resume
pub async fn handle_submit_resume(
    State(state): State<AppState>,
    payload: Result<Json<ResumePayload>, JsonRejection>,
) -> Result<Json<Employee>, AppError> {
    let Json(payload) = payload?;
    let resume = validate_resume(payload).map_err(AppError::Validation)?;
    let employee = state.aggregator.submit_resume(resume).await?;
    Ok(Json(employee))
}

/// POST /api/evaluations
pub async fn handle_submit_evaluation(
    State(state): State<AppState>,
    payload: Result<Json<EvaluationPayload>, JsonRejection>,
) -> Result<Json<EvaluationResponse>, AppError> {
    let Json(payload) = payload?;
    let evaluation = validate_evaluation(payload).map_err(AppError::Validation)?;
    let expertise_score = state.aggregator.submit_evaluation(evaluation).await?;
    Ok(Json(EvaluationResponse {
        message: "Evaluation added successfully".to_string(),
        expertise_score,
    }))
}

/// GET /api/expertise-scores
pub async fn handle_list_expertise_scores(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExpertiseScore>>, AppError> {
    Ok(Json(state.store.get_all_expertise_scores().await?))
}
