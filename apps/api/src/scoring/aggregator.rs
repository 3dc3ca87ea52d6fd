//! Decides what gets written to an employee's `ExpertiseScore` when a resume
//! or an evaluation arrives.
//!
//! Resume intake commits the employee, its projects and its first score in
//! one store call. Evaluation writes are last-write-wins: the history append
//! and the score replacement are two separate store calls.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::employee::{
    Employee, EmployeeUpdate, EvaluationData, NewEmployee, RecordedEvaluation,
};
use crate::models::expertise::{ExpertiseScore, NewExpertiseScore};
use crate::models::input::{EvaluationInput, ResumeInput};
use crate::scoring::calculator::{
    analyze_evaluation, analyze_resume, combine_analyses, AnalysisResult,
};
use crate::store::ExpertiseStore;

/// How a new evaluation relates to the score already on file.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum MergePolicy {
    /// The evaluation alone replaces the stored score.
    #[default]
    Overwrite,
    /// Reanalyse the stored resume and merge it with the evaluation.
    Weighted { resume: f64, evaluation: f64 },
}

#[derive(Clone)]
pub struct ScoreAggregator {
    store: Arc<dyn ExpertiseStore>,
    policy: MergePolicy,
}

impl ScoreAggregator {
    pub fn new(store: Arc<dyn ExpertiseStore>, policy: MergePolicy) -> Self {
        Self { store, policy }
    }

    /// Creates the employee, its projects and its first score together.
    pub async fn submit_resume(&self, resume: ResumeInput) -> Result<Employee, AppError> {
        let analysis = analyze_resume(&resume);
        let (employee, score) = self
            .store
            .create_employee_with_score(
                NewEmployee::from_resume(&resume),
                resume.projects.clone(),
                analysis.scores,
            )
            .await?;

        info!(
            employee_id = %employee.id,
            projects = resume.projects.len(),
            overall = score.overall_score,
            confidence = analysis.confidence,
            "Employee created from resume"
        );
        Ok(employee)
    }

    /// Appends the evaluation to the employee's history and replaces the
    /// stored score. Unknown employees are rejected before any write.
    pub async fn submit_evaluation(
        &self,
        evaluation: EvaluationInput,
    ) -> Result<ExpertiseScore, AppError> {
        let employee = match Uuid::parse_str(&evaluation.employee_id) {
            Ok(id) => self.store.get_employee(id).await?,
            Err(_) => None,
        };
        let Some(employee) = employee else {
            warn!(employee_id = %evaluation.employee_id, "Evaluation for unknown employee");
            return Err(AppError::NotFound("Employee not found".to_string()));
        };

        let analysis = self.evaluation_analysis(&employee, &evaluation)?;

        let mut history = employee.evaluation_data.clone().unwrap_or_default();
        history.evaluations.push(RecordedEvaluation {
            evaluation,
            timestamp: chrono::Utc::now(),
        });
        let evaluations = history.evaluations.len();
        self.append_history(employee.id, history).await?;

        let score = self
            .create_or_update_expertise_score(employee.id, &analysis)
            .await?;

        info!(
            employee_id = %employee.id,
            evaluations,
            overall = score.overall_score,
            policy = ?self.policy,
            "Expertise score replaced from evaluation"
        );
        Ok(score)
    }

    /// Insert-or-replace the employee's score from an analysis.
    pub async fn create_or_update_expertise_score(
        &self,
        employee_id: Uuid,
        analysis: &AnalysisResult,
    ) -> Result<ExpertiseScore, AppError> {
        let record = NewExpertiseScore::from_analysis(employee_id, analysis);
        Ok(self.store.create_or_update_expertise_score(record).await?)
    }

    fn evaluation_analysis(
        &self,
        employee: &Employee,
        evaluation: &EvaluationInput,
    ) -> Result<AnalysisResult, AppError> {
        let from_evaluation = analyze_evaluation(evaluation);

        match (self.policy, employee.resume_data.as_ref()) {
            (
                MergePolicy::Weighted {
                    resume: resume_weight,
                    evaluation: evaluation_weight,
                },
                Some(resume_data),
            ) => {
                let from_resume = analyze_resume(resume_data);
                Ok(combine_analyses(
                    &[from_resume, from_evaluation],
                    &[resume_weight, evaluation_weight],
                )?)
            }
            _ => Ok(from_evaluation),
        }
    }

    async fn append_history(&self, employee_id: Uuid, history: EvaluationData) -> Result<(), AppError> {
        let update = EmployeeUpdate {
            evaluation_data: Some(history),
            ..Default::default()
        };
        match self.store.update_employee(employee_id, update).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound("Employee not found".to_string())),
        }
    }
}
