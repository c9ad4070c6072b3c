use askama::Template;
use axum::body::Body;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse};

use crate::auth::extractor::AdminUser;
use crate::error::AppError;
use crate::models::Project;
use crate::state::SharedState;
use crate::workflow::{self, parser};

#[derive(Template)]
#[template(path = "admin/projects.html")]
struct ProjectsTemplate {
    message: Option<String>,
    error: Option<String>,
    projects: Vec<ProjectRow>,
}

struct ProjectRow {
    id: String,
    title: String,
    description: String,
    /// Persisted media string, echoed back through the edit form.
    current_media: String,
    media: Vec<String>,
}

impl From<Project> for ProjectRow {
    fn from(project: Project) -> Self {
        let media = project.media_list().into_vec();
        Self {
            id: project.id.to_string(),
            title: project.title,
            description: project.description,
            current_media: project.media,
            media,
        }
    }
}

pub async fn index(
    _admin: AdminUser,
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, AppError> {
    render(&state, None, None).await
}

/// Handle the add / update / delete form. The page is re-rendered with the
/// outcome whether or not the submission succeeded, including a body over
/// `max_body_size`.
pub async fn submit(
    _admin: AdminUser,
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Body,
) -> Result<impl IntoResponse, AppError> {
    let max_body_size = state.config.max_body_size;
    let body = match axum::body::to_bytes(body, max_body_size).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Rejected project form body: {e}");
            let error = format!(
                "Sorry, the submission exceeds the {max_body_size} byte request limit."
            );
            return render(&state, None, Some(error)).await;
        }
    };

    let submission =
        match parser::parse_multipart(&headers, body, state.config.max_upload_size).await {
            Ok(submission) => submission,
            Err(e) => {
                tracing::warn!("Rejected project form: {e}");
                return render(&state, None, Some(e)).await;
            }
        };

    match workflow::run(state.projects.as_ref(), state.media.as_ref(), submission).await {
        Ok(outcome) => render(&state, Some(outcome.message), None).await,
        Err(e) => {
            tracing::warn!("Project submission failed: {e}");
            render(&state, None, Some(e.to_string())).await
        }
    }
}

async fn render(
    state: &SharedState,
    message: Option<String>,
    error: Option<String>,
) -> Result<Html<String>, AppError> {
    let (projects, error) = match state.projects.list().await {
        Ok(projects) => (projects, error),
        Err(e) => {
            tracing::error!("Failed to list projects: {e}");
            (Vec::new(), Some(format!("Database error: {e}")))
        }
    };

    let template = ProjectsTemplate {
        message,
        error,
        projects: projects.into_iter().map(ProjectRow::from).collect(),
    };
    Ok(Html(template.render()?))
}
