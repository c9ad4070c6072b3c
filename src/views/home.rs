use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use chrono::Datelike;

use crate::error::AppError;
use crate::gallery::{self, GalleryItem};
use crate::models::{About, Experience};
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "public/home.html")]
pub struct HomeTemplate {
    pub name: String,
    pub tagline: String,
    pub about: AboutView,
    pub experiences: Vec<ExperienceView>,
    pub skills: Vec<String>,
    pub projects: Vec<GalleryItem>,
    pub year: i32,
}

#[derive(Debug, Clone, Default)]
pub struct AboutView {
    pub photo_url: Option<String>,
    pub bio_lines: Vec<String>,
    pub education: Vec<String>,
    pub philosophy: String,
    pub email: String,
    pub linkedin_url: Option<String>,
    pub phone: String,
}

#[derive(Debug, Clone)]
pub struct ExperienceView {
    pub years: String,
    pub title: String,
    pub institution: String,
    pub description_lines: Vec<String>,
}

impl From<&About> for AboutView {
    fn from(about: &About) -> Self {
        Self {
            photo_url: about.photo_url.clone().filter(|u| !u.is_empty()),
            bio_lines: gallery::line_breaks(&about.bio),
            education: gallery::list_items(&about.education),
            philosophy: about.philosophy.clone(),
            email: about.email.clone(),
            linkedin_url: about.linkedin_url.clone().filter(|u| !u.is_empty()),
            phone: about.phone.clone(),
        }
    }
}

impl From<&Experience> for ExperienceView {
    fn from(exp: &Experience) -> Self {
        Self {
            years: format!("{} - {}", exp.start_year, exp.end_year),
            title: exp.title.clone(),
            institution: exp.institution.clone(),
            description_lines: gallery::line_breaks(&exp.description),
        }
    }
}

pub async fn index(State(state): State<SharedState>) -> Result<impl IntoResponse, AppError> {
    let about = state.profile.about().await?;
    let experiences = state.profile.experience().await?;
    let skills = state.profile.skills().await?;
    let projects = state.projects.list().await?;

    let template = HomeTemplate {
        name: about
            .as_ref()
            .map(|a| a.name.clone())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "Jane Doe".to_string()),
        tagline: about
            .as_ref()
            .map(|a| a.tagline.clone())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "Inspiring the next generation.".to_string()),
        about: about.as_ref().map(AboutView::from).unwrap_or_default(),
        experiences: experiences.iter().map(ExperienceView::from).collect(),
        skills: skills.into_iter().map(|s| s.skill_name).collect(),
        projects: gallery::gallery_items(&projects),
        year: chrono::Utc::now().year(),
    };
    Ok(Html(template.render()?))
}
