//! Storage boundary. Handlers and the aggregator only see `ExpertiseStore`,
//! so the in-memory backend can be swapped for a durable one at startup.

pub mod memory;
pub mod seed;

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::employee::{Employee, EmployeeUpdate, NewEmployee};
use crate::models::expertise::{ExpertiseScore, NewExpertiseScore};
use crate::models::input::ProjectRecord;
use crate::models::project::{NewProject, Project};
use crate::scoring::dimensions::DimensionScores;

pub use memory::MemoryStore;

/// CRUD surface over employees, their projects and their expertise score.
///
/// Carried in `AppState` as `Arc<dyn ExpertiseStore>`.
#[async_trait]
pub trait ExpertiseStore: Send + Sync {
    async fn get_employee(&self, id: Uuid) -> Result<Option<Employee>>;
    async fn get_all_employees(&self) -> Result<Vec<Employee>>;
    /// Assigns a fresh id.
    async fn create_employee(&self, employee: NewEmployee) -> Result<Employee>;
    /// Returns `None` if the employee does not exist.
    async fn update_employee(&self, id: Uuid, update: EmployeeUpdate) -> Result<Option<Employee>>;
    /// Commits a new employee, its projects and its first score as one unit.
    /// Readers never observe the employee without its score.
    async fn create_employee_with_score(
        &self,
        employee: NewEmployee,
        projects: Vec<ProjectRecord>,
        scores: DimensionScores,
    ) -> Result<(Employee, ExpertiseScore)>;

    async fn get_projects_by_employee_id(&self, employee_id: Uuid) -> Result<Vec<Project>>;
    async fn create_project(&self, project: NewProject) -> Result<Project>;

    async fn get_expertise_score(&self, employee_id: Uuid) -> Result<Option<ExpertiseScore>>;
    /// Insert-or-replace keyed by employee id. The record id is reused from
    /// any existing record for that employee.
    async fn create_or_update_expertise_score(
        &self,
        score: NewExpertiseScore,
    ) -> Result<ExpertiseScore>;
    async fn get_all_expertise_scores(&self) -> Result<Vec<ExpertiseScore>>;
}
