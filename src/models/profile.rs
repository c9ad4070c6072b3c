use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, sqlx::FromRow, Serialize, Deserialize)]
pub struct About {
    pub name: String,
    pub tagline: String,
    pub bio: String,
    pub photo_url: Option<String>,
    /// One entry per line.
    pub education: String,
    pub philosophy: String,
    pub email: String,
    pub linkedin_url: Option<String>,
    pub phone: String,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Experience {
    pub id: i32,
    pub title: String,
    pub institution: String,
    pub start_year: i32,
    pub end_year: String,
    pub description: String,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Skill {
    pub id: i32,
    pub skill_name: String,
    pub category: String,
    pub level: i32,
}
