use axum::http::HeaderMap;
use bytes::{Bytes, BytesMut};
use uuid::Uuid;

use crate::models::MediaList;

use super::{ProjectAction, ProjectSubmission, Upload, UploadStatus};

/// Decode the admin project form (multipart) into a submission.
///
/// `max_upload_size` applies per file; an oversized file is recorded as a
/// failed upload rather than rejecting the whole request.
pub async fn parse_multipart(
    headers: &HeaderMap,
    body: Bytes,
    max_upload_size: usize,
) -> Result<ProjectSubmission, String> {
    let boundary = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or_else(|| "Missing multipart boundary".to_string())?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut fields = FormFields::default();
    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Multipart error: {e}"))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == "media" || name == "media[]" {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let status = read_file(&mut field, max_upload_size).await?;
            let status = match status {
                UploadStatus::Received(data) if file_name.is_empty() && data.is_empty() => {
                    UploadStatus::Empty
                }
                other => other,
            };
            fields.uploads.push(Upload { file_name, status });
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| format!("Field read error: {e}"))?;
        match name.as_str() {
            "title" => fields.title = value,
            "description" => fields.description = value,
            "current_media_url" => fields.current_media = value,
            "id" => fields.id = Some(value),
            "add_project" | "update_project" | "delete_project" => fields.markers.push(name.clone()),
            _ => tracing::debug!(field = %name, "Ignoring unknown form field"),
        }
    }

    let action = resolve_action(&fields.markers, fields.id.as_deref())?;

    Ok(ProjectSubmission {
        action,
        title: fields.title,
        description: fields.description,
        current_media: MediaList::parse(&fields.current_media),
        uploads: fields.uploads,
    })
}

#[derive(Default)]
struct FormFields {
    title: String,
    description: String,
    current_media: String,
    id: Option<String>,
    markers: Vec<String>,
    uploads: Vec<Upload>,
}

async fn read_file(
    field: &mut multer::Field<'_>,
    max_upload_size: usize,
) -> Result<UploadStatus, String> {
    let mut buf = BytesMut::new();
    let mut oversized = false;

    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| format!("File read error: {e}"))?
    {
        if oversized {
            continue;
        }
        if buf.len() + chunk.len() > max_upload_size {
            oversized = true;
            buf.clear();
            continue;
        }
        buf.extend_from_slice(&chunk);
    }

    if oversized {
        return Ok(UploadStatus::Failed(format!(
            "exceeds the {max_upload_size} byte upload limit"
        )));
    }
    Ok(UploadStatus::Received(buf.freeze()))
}

/// Exactly one action marker must be present; update and delete need an id.
pub fn resolve_action(markers: &[String], id: Option<&str>) -> Result<ProjectAction, String> {
    let [marker] = markers else {
        return Err("Expected exactly one of add_project, update_project, delete_project".to_string());
    };

    let parse_id = || -> Result<Uuid, String> {
        id.map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| "Missing project id".to_string())?
            .parse::<Uuid>()
            .map_err(|e| format!("Invalid project id: {e}"))
    };

    match marker.as_str() {
        "add_project" => Ok(ProjectAction::Add),
        "update_project" => Ok(ProjectAction::Update(parse_id()?)),
        "delete_project" => Ok(ProjectAction::Delete(parse_id()?)),
        other => Err(format!("Unknown action: {other}")),
    }
}
