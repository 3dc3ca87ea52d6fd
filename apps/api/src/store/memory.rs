use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::employee::{Employee, EmployeeUpdate, NewEmployee};
use crate::models::expertise::{ExpertiseScore, NewExpertiseScore};
use crate::models::input::ProjectRecord;
use crate::models::project::{NewProject, Project};
use crate::scoring::dimensions::DimensionScores;
use crate::store::ExpertiseStore;

/// Process-lifetime store. Listings come back in insertion order.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    employees: HashMap<Uuid, Employee>,
    employee_order: Vec<Uuid>,
    projects: Vec<Project>,
    /// Keyed by employee id, not by score id.
    scores: HashMap<Uuid, ExpertiseScore>,
    score_order: Vec<Uuid>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Inner {
    fn insert_employee(&mut self, employee: Employee) {
        self.employee_order.push(employee.id);
        self.employees.insert(employee.id, employee);
    }

    /// The record id is kept across replacements.
    fn upsert_score(&mut self, score: NewExpertiseScore) -> ExpertiseScore {
        let employee_id = score.employee_id;
        let existing_id = self.scores.get(&employee_id).map(|s| s.id);
        let id = match existing_id {
            Some(id) => id,
            None => {
                self.score_order.push(employee_id);
                Uuid::new_v4()
            }
        };
        let record = score.into_record(id);
        self.scores.insert(employee_id, record.clone());
        record
    }
}

fn employee_record(new: NewEmployee) -> Employee {
    Employee {
        id: Uuid::new_v4(),
        name: new.name,
        title: new.title,
        department: new.department,
        location: new.location,
        experience_years: new.experience_years,
        team_size: new.team_size,
        email: new.email,
        resume_data: new.resume_data,
        evaluation_data: new.evaluation_data,
    }
}

fn project_record(employee_id: Uuid, record: ProjectRecord) -> Project {
    Project {
        id: Uuid::new_v4(),
        employee_id,
        name: record.name,
        description: record.description,
        duration: record.duration,
        role: record.role,
        technologies: record.technologies,
        impact: record.impact,
    }
}

#[async_trait]
impl ExpertiseStore for MemoryStore {
    async fn get_employee(&self, id: Uuid) -> Result<Option<Employee>> {
        Ok(self.inner.read().await.employees.get(&id).cloned())
    }

    async fn get_all_employees(&self) -> Result<Vec<Employee>> {
        let inner = self.inner.read().await;
        Ok(inner
            .employee_order
            .iter()
            .filter_map(|id| inner.employees.get(id).cloned())
            .collect())
    }

    async fn create_employee(&self, new: NewEmployee) -> Result<Employee> {
        let employee = employee_record(new);
        self.inner.write().await.insert_employee(employee.clone());
        Ok(employee)
    }

    async fn update_employee(&self, id: Uuid, update: EmployeeUpdate) -> Result<Option<Employee>> {
        let mut inner = self.inner.write().await;
        let Some(existing) = inner.employees.get_mut(&id) else {
            return Ok(None);
        };
        update.apply(existing);
        Ok(Some(existing.clone()))
    }

    async fn create_employee_with_score(
        &self,
        new: NewEmployee,
        projects: Vec<ProjectRecord>,
        scores: DimensionScores,
    ) -> Result<(Employee, ExpertiseScore)> {
        let employee = employee_record(new);
        let projects: Vec<Project> = projects
            .into_iter()
            .map(|record| project_record(employee.id, record))
            .collect();
        let score = NewExpertiseScore::new(employee.id, scores);

        let mut inner = self.inner.write().await;
        inner.insert_employee(employee.clone());
        inner.projects.extend(projects);
        let score = inner.upsert_score(score);
        Ok((employee, score))
    }

    async fn get_projects_by_employee_id(&self, employee_id: Uuid) -> Result<Vec<Project>> {
        let inner = self.inner.read().await;
        Ok(inner
            .projects
            .iter()
            .filter(|p| p.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn create_project(&self, new: NewProject) -> Result<Project> {
        let project = project_record(new.employee_id, new.record);
        self.inner.write().await.projects.push(project.clone());
        Ok(project)
    }

    async fn get_expertise_score(&self, employee_id: Uuid) -> Result<Option<ExpertiseScore>> {
        Ok(self.inner.read().await.scores.get(&employee_id).cloned())
    }

    async fn create_or_update_expertise_score(
        &self,
        score: NewExpertiseScore,
    ) -> Result<ExpertiseScore> {
        Ok(self.inner.write().await.upsert_score(score))
    }

    async fn get_all_expertise_scores(&self) -> Result<Vec<ExpertiseScore>> {
        let inner = self.inner.read().await;
        Ok(inner
            .score_order
            .iter()
            .filter_map(|id| inner.scores.get(id).cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::models::employee::EvaluationData;
    use crate::models::input::ProjectRecord;
    use crate::scoring::dimensions::DimensionScores;

    fn new_employee(name: &str) -> NewEmployee {
        NewEmployee {
            name: name.to_string(),
            title: "Engineer".to_string(),
            department: "Engineering".to_string(),
            location: "Remote".to_string(),
            experience_years: 3.0,
            ..Default::default()
        }
    }

    fn new_score(employee_id: Uuid, value: f64) -> NewExpertiseScore {
        NewExpertiseScore {
            employee_id,
            scores: DimensionScores {
                technical_skills: value,
                leadership: value,
                communication: value,
                project_management: value,
                innovation: value,
                domain_knowledge: value,
            },
            last_updated: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_employee() {
        let store = MemoryStore::new();
        let created = store.create_employee(new_employee("Ada")).await.unwrap();
        let fetched = store.get_employee(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
        assert!(store.get_employee(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = MemoryStore::new();
        for name in ["a", "b", "c"] {
            store.create_employee(new_employee(name)).await.unwrap();
        }
        let names: Vec<_> = store
            .get_all_employees()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_update_employee_partial() {
        let store = MemoryStore::new();
        let created = store.create_employee(new_employee("Ada")).await.unwrap();
        let updated = store
            .update_employee(
                created.id,
                EmployeeUpdate {
                    evaluation_data: Some(EvaluationData::default()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Ada");
        assert_eq!(updated.evaluation_data, Some(EvaluationData::default()));

        let missing = store
            .update_employee(Uuid::new_v4(), EmployeeUpdate::default())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_update_employee_replaces_only_given_fields() {
        let store = MemoryStore::new();
        let created = store.create_employee(new_employee("Ada")).await.unwrap();
        let updated = store
            .update_employee(
                created.id,
                EmployeeUpdate {
                    title: Some("Principal Engineer".to_string()),
                    experience_years: Some(9.5),
                    team_size: Some(4),
                    email: Some("ada@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Ada");
        assert_eq!(updated.department, "Engineering");
        assert_eq!(updated.title, "Principal Engineer");
        assert_eq!(updated.experience_years, 9.5);
        assert_eq!(updated.team_size, Some(4));
        assert_eq!(updated.email.as_deref(), Some("ada@example.com"));
        assert_eq!(store.get_employee(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_create_employee_with_score_commits_everything() {
        let store = MemoryStore::new();
        let records = vec![
            ProjectRecord {
                name: "one".to_string(),
                ..Default::default()
            },
            ProjectRecord {
                name: "two".to_string(),
                ..Default::default()
            },
        ];
        let (employee, score) = store
            .create_employee_with_score(
                new_employee("Ada"),
                records,
                new_score(Uuid::nil(), 12.0).scores,
            )
            .await
            .unwrap();

        assert_eq!(score.employee_id, employee.id);
        assert_eq!(score.scores.leadership, 10.0);
        assert_eq!(score.overall_score, 10.0);
        assert_eq!(store.get_all_employees().await.unwrap(), vec![employee.clone()]);
        assert_eq!(store.get_expertise_score(employee.id).await.unwrap(), Some(score));
        let projects = store.get_projects_by_employee_id(employee.id).await.unwrap();
        let names: Vec<_> = projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["one", "two"]);
    }

    #[tokio::test]
    async fn test_projects_filtered_by_employee() {
        let store = MemoryStore::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        for (employee_id, name) in [(a, "one"), (b, "two"), (a, "three")] {
            store
                .create_project(NewProject {
                    employee_id,
                    record: ProjectRecord {
                        name: name.to_string(),
                        ..Default::default()
                    },
                })
                .await
                .unwrap();
        }
        let projects = store.get_projects_by_employee_id(a).await.unwrap();
        let names: Vec<_> = projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["one", "three"]);
    }

    #[tokio::test]
    async fn test_score_upsert_reuses_id() {
        let store = MemoryStore::new();
        let employee_id = Uuid::new_v4();
        let first = store
            .create_or_update_expertise_score(new_score(employee_id, 4.0))
            .await
            .unwrap();
        let second = store
            .create_or_update_expertise_score(new_score(employee_id, 8.0))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.overall_score, 8.0);
        assert_eq!(store.get_all_expertise_scores().await.unwrap().len(), 1);
        assert_eq!(
            store.get_expertise_score(employee_id).await.unwrap(),
            Some(second)
        );
    }

    #[tokio::test]
    async fn test_score_ids_differ_per_employee() {
        let store = MemoryStore::new();
        let a = store
            .create_or_update_expertise_score(new_score(Uuid::new_v4(), 5.0))
            .await
            .unwrap();
        let b = store
            .create_or_update_expertise_score(new_score(Uuid::new_v4(), 5.0))
            .await
            .unwrap();
        assert_ne!(a.id, b.id);
    }
}
