//! Advisory messages derived from the technical, leadership and communication
//! scores. The other three dimensions never produce a message.

pub const MENTOR_JUNIOR_DEVELOPERS: &str =
    "Excellent technical skills - consider mentoring junior developers";
pub const STRENGTHEN_TECHNICAL_SKILLS: &str =
    "Focus on strengthening technical skills through training and hands-on projects";
pub const LEADERSHIP_TRAINING: &str =
    "Consider leadership training to strengthen management capabilities";
pub const READY_FOR_SENIOR_MANAGEMENT: &str =
    "Strong leadership skills - ready for senior management roles";
pub const CLIENT_FACING_ROLES: &str =
    "Outstanding communication skills - ideal for client-facing roles";
pub const IMPROVE_COMMUNICATION: &str =
    "Improve communication skills through presentation training and workshops";

/// Returns zero to three messages, always ordered technical, leadership,
/// communication.
pub fn generate_recommendations(technical: f64, leadership: f64, communication: f64) -> Vec<String> {
    let mut recommendations = Vec::new();

    if technical >= 8.0 {
        recommendations.push(MENTOR_JUNIOR_DEVELOPERS.to_string());
    } else if technical < 6.0 {
        recommendations.push(STRENGTHEN_TECHNICAL_SKILLS.to_string());
    }

    if leadership < 7.0 {
        recommendations.push(LEADERSHIP_TRAINING.to_string());
    } else if leadership >= 8.0 {
        recommendations.push(READY_FOR_SENIOR_MANAGEMENT.to_string());
    }

    if communication >= 8.0 {
        recommendations.push(CLIENT_FACING_ROLES.to_string());
    } else if communication < 6.0 {
        recommendations.push(IMPROVE_COMMUNICATION.to_string());
    }

    recommendations
}
