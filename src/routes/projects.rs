use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{MediaList, Project};
use crate::state::SharedState;

#[derive(Serialize)]
pub struct ProjectResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub media: MediaList,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            media: project.media_list(),
            id: project.id,
            title: project.title,
            description: project.description,
        }
    }
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<ProjectResponse>>, AppError> {
    let projects = state.projects.list().await?;
    Ok(Json(projects.into_iter().map(ProjectResponse::from).collect()))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProjectResponse>, AppError> {
    let project = state
        .projects
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;
    Ok(Json(project.into()))
}
