use uuid::Uuid;

use crate::models::Project;

/// A project as the public gallery shows it.
#[derive(Debug, Clone)]
pub struct GalleryItem {
    pub id: Uuid,
    pub title: String,
    pub description_lines: Vec<String>,
    /// First media entry; `None` means no thumbnail and no lightbox trigger.
    pub thumbnail: Option<String>,
    pub media: Vec<String>,
    /// `media` as a JSON array, attached to the thumbnail for the lightbox.
    pub media_json: String,
}

impl GalleryItem {
    pub fn from_project(project: &Project) -> Self {
        let media = project.media_list();
        Self {
            id: project.id,
            title: project.title.clone(),
            description_lines: line_breaks(&project.description),
            thumbnail: media.thumbnail().map(str::to_string),
            media_json: media.to_json(),
            media: media.into_vec(),
        }
    }
}

pub fn gallery_items(projects: &[Project]) -> Vec<GalleryItem> {
    projects.iter().map(GalleryItem::from_project).collect()
}

/// Split text into the lines a template joins with `<br>`.
///
/// Every `\n` becomes one break, trailing ones included. Lines are escaped
/// individually by the template, so markup in the text is never interpreted.
pub fn line_breaks(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

/// Non-blank trimmed lines, used for list-shaped text such as education.
pub fn list_items(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
