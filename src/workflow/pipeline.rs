use crate::media::{self, MediaStore};
use crate::models::MediaList;
use crate::repository::ProjectRepository;

use super::{ProjectAction, ProjectSubmission, Upload, UploadStatus, WorkflowError, WorkflowOutcome};

/// Apply one admin submission: store its uploads, then commit the record.
///
/// Any failed upload aborts before anything is persisted, so a project never
/// loses the association with media it already had.
pub async fn run(
    projects: &dyn ProjectRepository,
    store: &dyn MediaStore,
    submission: ProjectSubmission,
) -> Result<WorkflowOutcome, WorkflowError> {
    let ProjectSubmission {
        action,
        title,
        description,
        current_media,
        uploads,
    } = submission;

    let target = match action {
        ProjectAction::Delete(id) => return delete(projects, store, id).await,
        ProjectAction::Add => None,
        ProjectAction::Update(id) => Some(id),
    };

    if title.trim().is_empty() {
        return Err(WorkflowError::Invalid("Title is required".to_string()));
    }

    let new_media = store_uploads(store, uploads).await?;
    let final_media = current_media.concat(new_media);

    match target {
        None => {
            let id = projects.create(&title, &description, &final_media).await?;
            tracing::info!(project_id = %id, media = final_media.len(), "Project created");
            Ok(WorkflowOutcome {
                project_id: id,
                message: "Project added successfully!".to_string(),
                removed_files: 0,
            })
        }
        Some(id) => {
            if !projects.update(id, &title, &description, &final_media).await? {
                return Err(WorkflowError::NotFound(id));
            }
            tracing::info!(project_id = %id, media = final_media.len(), "Project updated");
            Ok(WorkflowOutcome {
                project_id: id,
                message: "Project updated successfully!".to_string(),
                removed_files: 0,
            })
        }
    }
}

async fn store_uploads(
    store: &dyn MediaStore,
    uploads: Vec<Upload>,
) -> Result<MediaList, WorkflowError> {
    if let Some((name, reason)) = uploads.iter().find_map(|u| match &u.status {
        UploadStatus::Failed(reason) => Some((&u.file_name, reason)),
        _ => None,
    }) {
        tracing::warn!(file = %name, "Upload failed: {reason}");
        return Err(WorkflowError::Upload(format!("{name}: {reason}")));
    }

    let mut stored = MediaList::new();
    for upload in uploads {
        let UploadStatus::Received(data) = upload.status else {
            continue;
        };
        let file_name = media::sanitize_file_name(&upload.file_name).ok_or_else(|| {
            WorkflowError::Upload(format!("invalid file name '{}'", upload.file_name))
        })?;
        let path = store
            .store(&file_name, data)
            .await
            .map_err(|e| WorkflowError::Upload(e.to_string()))?;
        stored.push(path);
    }

    Ok(stored)
}

async fn delete(
    projects: &dyn ProjectRepository,
    store: &dyn MediaStore,
    id: uuid::Uuid,
) -> Result<WorkflowOutcome, WorkflowError> {
    let media = projects
        .delete(id)
        .await?
        .ok_or(WorkflowError::NotFound(id))?;

    let mut removed_files = 0;
    for path in media.iter() {
        match store.remove(path).await {
            Ok(true) => removed_files += 1,
            Ok(false) => tracing::debug!(path, "Media file already gone"),
            Err(e) => tracing::warn!(path, "Failed to remove media file: {e}"),
        }
    }

    tracing::info!(project_id = %id, removed_files, "Project deleted");
    Ok(WorkflowOutcome {
        project_id: id,
        message: "Project deleted successfully!".to_string(),
        removed_files,
    })
}
