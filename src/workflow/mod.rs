pub mod parser;
pub mod pipeline;

use bytes::Bytes;
use uuid::Uuid;

use crate::models::MediaList;

pub use pipeline::run;

/// Which admin operation a submission requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectAction {
    Add,
    Update(Uuid),
    Delete(Uuid),
}

/// Transfer status of one file input entry.
#[derive(Debug, Clone)]
pub enum UploadStatus {
    Received(Bytes),
    /// The input was submitted without a file selected.
    Empty,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub status: UploadStatus,
}

impl Upload {
    pub fn received(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            status: UploadStatus::Received(data.into()),
        }
    }

    pub fn failed(file_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            status: UploadStatus::Failed(reason.into()),
        }
    }
}

/// One admin form post, decoded.
#[derive(Debug, Clone)]
pub struct ProjectSubmission {
    pub action: ProjectAction,
    pub title: String,
    pub description: String,
    /// Media already persisted for the project, echoed back by the edit form.
    pub current_media: MediaList,
    pub uploads: Vec<Upload>,
}

#[derive(Debug, Clone)]
pub struct WorkflowOutcome {
    pub project_id: Uuid,
    pub message: String,
    pub removed_files: usize,
}

#[derive(Debug)]
pub enum WorkflowError {
    Invalid(String),
    Upload(String),
    Persistence(sqlx::Error),
    NotFound(Uuid),
}

impl std::fmt::Display for WorkflowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkflowError::Invalid(msg) => write!(f, "{msg}"),
            WorkflowError::Upload(msg) => {
                write!(f, "Sorry, there was an error uploading one of your files: {msg}")
            }
            WorkflowError::Persistence(err) => write!(f, "Database error: {err}"),
            WorkflowError::NotFound(id) => write!(f, "Project {id} not found"),
        }
    }
}

impl From<sqlx::Error> for WorkflowError {
    fn from(err: sqlx::Error) -> Self {
        WorkflowError::Persistence(err)
    }
}
