pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::employees::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/employees", get(handlers::handle_list_employees))
        .route("/api/employees/resume", post(handlers::handle_submit_resume))
        .route("/api/employees/:id", get(handlers::handle_get_employee))
        .route("/api/employees/:id/projects", get(handlers::handle_get_projects))
        .route("/api/employees/:id/expertise", get(handlers::handle_get_expertise))
        .route("/api/employees/:id/analysis", get(handlers::handle_get_analysis))
        .route("/api/evaluations", post(handlers::handle_submit_evaluation))
        .route("/api/expertise-scores", get(handlers::handle_list_expertise_scores))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::scoring::aggregator::MergePolicy;
    use crate::store::{ExpertiseStore, MemoryStore};

    fn app() -> (Router, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let state = AppState::new(store.clone(), MergePolicy::Overwrite);
        (build_router(state), store)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn resume_body() -> Value {
        json!({
            "personalInfo": {
                "name": "Ada Lovelace",
                "title": "Lead Engineer",
                "department": "Engineering",
                "location": "London",
                "experienceYears": 8,
                "email": "ada@example.com"
            },
            "projects": [{
                "name": "Analytical Engine",
                "role": "Lead Developer",
                "duration": "6 months",
                "technologies": ["React", "TypeScript", "Node.js", "PostgreSQL", "Redis"]
            }],
            "skills": ["React", "AWS"],
            "achievements": ["Ran a workshop"]
        })
    }

    fn evaluation_body(employee_id: &str, value: f64) -> Value {
        json!({
            "employeeId": employee_id,
            "technicalSkills": value,
            "leadership": value,
            "communication": value,
            "projectManagement": value,
            "innovation": value,
            "domainKnowledge": value,
            "feedback": "Great collaborator",
            "evaluatorName": "Grace Hopper"
        })
    }

    async fn create_employee(app: &Router) -> String {
        let (status, body) = send(app, Method::POST, "/api/employees/resume", Some(resume_body())).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = app();
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_resume_submission_creates_employee_and_score() {
        let (app, _) = app();
        let id = create_employee(&app).await;

        let (status, employee) = send(&app, Method::GET, &format!("/api/employees/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(employee["name"], "Ada Lovelace");
        assert_eq!(employee["resumeData"]["skills"], json!(["React", "AWS"]));

        let (status, projects) =
            send(&app, Method::GET, &format!("/api/employees/{id}/projects"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(projects.as_array().unwrap().len(), 1);
        assert_eq!(projects[0]["employeeId"], id.as_str());

        let (status, score) =
            send(&app, Method::GET, &format!("/api/employees/{id}/expertise"), None).await;
        assert_eq!(status, StatusCode::OK);
        let technical = score["technicalSkills"].as_f64().unwrap();
        assert!((technical - 4.5).abs() < 1e-9, "{technical}");
        assert_eq!(score["employeeId"], id.as_str());

        let (_, all) = send(&app, Method::GET, "/api/expertise-scores", None).await;
        assert_eq!(all.as_array().unwrap().len(), 1);
        let (_, employees) = send(&app, Method::GET, "/api/employees", None).await;
        assert_eq!(employees.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_resume_validation_errors_are_listed() {
        let (app, store) = app();
        let body = json!({
            "personalInfo": {
                "name": "",
                "title": "Engineer",
                "department": "",
                "location": "Paris",
                "experienceYears": 60
            },
            "projects": [{ "name": "" }]
        });
        let (status, body) = send(&app, Method::POST, "/api/employees/resume", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["details"].as_array().unwrap().len(), 4);
        assert!(store.get_all_employees().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (app, _) = app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/evaluations")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{ not json"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_wrong_type_is_reported_per_field() {
        let (app, _) = app();
        let mut body = evaluation_body("abc", 5.0);
        body["leadership"] = json!("high");
        let (status, body) = send(&app, Method::POST, "/api/evaluations", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["details"][0]["field"], "leadership");
        assert_eq!(
            body["error"]["details"][0]["message"],
            "Expected number, received string"
        );
    }

    #[tokio::test]
    async fn test_resume_type_errors_listed_with_empty_fields() {
        let (app, store) = app();
        let mut body = resume_body();
        body["personalInfo"]["experienceYears"] = json!("eight");
        body["personalInfo"]["name"] = json!("");
        let (status, body) = send(&app, Method::POST, "/api/employees/resume", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let fields: Vec<&str> = body["error"]["details"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["personalInfo.name", "personalInfo.experienceYears"]);
        assert!(store.get_all_employees().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_entities_are_not_found() {
        let (app, _) = app();
        let unknown = uuid::Uuid::new_v4();
        for uri in [
            format!("/api/employees/{unknown}"),
            format!("/api/employees/{unknown}/expertise"),
            format!("/api/employees/{unknown}/analysis"),
            "/api/employees/not-a-uuid".to_string(),
        ] {
            let (status, body) = send(&app, Method::GET, &uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(body["error"]["code"], "NOT_FOUND");
        }

        let (status, projects) =
            send(&app, Method::GET, &format!("/api/employees/{unknown}/projects"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(projects, json!([]));
    }

    #[tokio::test]
    async fn test_evaluation_for_unknown_employee_mutates_nothing() {
        let (app, store) = app();
        let id = create_employee(&app).await;
        let before = store.get_all_expertise_scores().await.unwrap();

        let unknown = uuid::Uuid::new_v4().to_string();
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/evaluations",
            Some(evaluation_body(&unknown, 9.0)),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(store.get_all_expertise_scores().await.unwrap(), before);

        let (_, employee) = send(&app, Method::GET, &format!("/api/employees/{id}"), None).await;
        assert!(employee["evaluationData"].is_null());
    }

    #[tokio::test]
    async fn test_evaluation_validation() {
        let (app, _) = app();
        let mut body = evaluation_body("", 0.0);
        body["evaluatorName"] = json!("");
        let (status, body) = send(&app, Method::POST, "/api/evaluations", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        // six out-of-range ratings, employeeId, evaluatorName
        assert_eq!(body["error"]["details"].as_array().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_sequential_evaluations_overwrite() {
        let (app, _) = app();
        let id = create_employee(&app).await;

        let (status, body) =
            send(&app, Method::POST, "/api/evaluations", Some(evaluation_body(&id, 9.0))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Evaluation added successfully");
        let first_id = body["expertiseScore"]["id"].clone();

        let (status, body) =
            send(&app, Method::POST, "/api/evaluations", Some(evaluation_body(&id, 7.0))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["expertiseScore"]["id"], first_id);

        let (_, score) = send(&app, Method::GET, &format!("/api/employees/{id}/expertise"), None).await;
        assert_eq!(score["overallScore"], json!(7.0));
        assert_eq!(score["innovation"], json!(7.0));

        let (_, employee) = send(&app, Method::GET, &format!("/api/employees/{id}"), None).await;
        let history = employee["evaluationData"]["evaluations"].as_array().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0]["evaluatorName"], "Grace Hopper");
        assert!(history[1]["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_analysis_endpoint_reanalyses_resume() {
        let (app, _) = app();
        let id = create_employee(&app).await;

        let (status, body) =
            send(&app, Method::GET, &format!("/api/employees/{id}/analysis"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["employeeId"], id.as_str());
        let confidence = body["confidence"].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&confidence));
        assert!(body["recommendations"].is_array());
        assert!(body["performanceLevel"].is_string());
    }
}
