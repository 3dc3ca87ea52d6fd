use anyhow::Result;
use tracing::info;

use crate::models::employee::{Employee, NewEmployee};
use crate::models::input::ProjectRecord;
use crate::scoring::dimensions::DimensionScores;
use crate::store::ExpertiseStore;

/// Demo employee shown by the dashboard on a fresh process.
pub async fn seed_sample_data(store: &dyn ExpertiseStore) -> Result<Employee> {
    let employee = NewEmployee {
        name: "John Smith".to_string(),
        title: "Senior Software Engineer".to_string(),
        department: "Engineering".to_string(),
        location: "San Francisco".to_string(),
        experience_years: 8.0,
        team_size: Some(12),
        email: Some("john.smith@company.com".to_string()),
        resume_data: None,
        evaluation_data: None,
    };

    let projects = vec![
        ProjectRecord {
            name: "E-commerce Platform Redesign".to_string(),
            description: Some(
                "Led frontend development team for complete platform redesign".to_string(),
            ),
            duration: Some("6 months".to_string()),
            role: Some("Lead Frontend Developer".to_string()),
            technologies: Some(strings(&["React", "TypeScript", "Node.js", "PostgreSQL"])),
            impact: Some("Increased user engagement by 35% and reduced load times by 50%".to_string()),
        },
        ProjectRecord {
            name: "API Microservices Migration".to_string(),
            description: Some("Migrated monolithic API to microservices architecture".to_string()),
            duration: Some("4 months".to_string()),
            role: Some("Technical Lead".to_string()),
            technologies: Some(strings(&["Python", "Docker", "Kubernetes", "MongoDB"])),
            impact: Some(
                "Improved system scalability and reduced deployment times by 60%".to_string(),
            ),
        },
    ];
    let scores = DimensionScores {
        technical_skills: 8.5,
        leadership: 7.2,
        communication: 9.1,
        project_management: 6.8,
        innovation: 8.9,
        domain_knowledge: 7.5,
    };

    let (employee, _) = store
        .create_employee_with_score(employee, projects, scores)
        .await?;

    info!(employee_id = %employee.id, "Seeded sample employee");
    Ok(employee)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
