use sqlx::PgPool;

use crate::models::{About, Experience, Skill};

pub async fn find_about(pool: &PgPool) -> Result<Option<About>, sqlx::Error> {
    sqlx::query_as::<_, About>(
        "SELECT name, tagline, bio, photo_url, education, philosophy, email, linkedin_url, phone
         FROM about_me ORDER BY id LIMIT 1",
    )
    .fetch_optional(pool)
    .await
}

pub async fn list_experience(pool: &PgPool) -> Result<Vec<Experience>, sqlx::Error> {
    sqlx::query_as::<_, Experience>("SELECT * FROM experience ORDER BY start_year DESC")
        .fetch_all(pool)
        .await
}

pub async fn list_skills(pool: &PgPool) -> Result<Vec<Skill>, sqlx::Error> {
    sqlx::query_as::<_, Skill>("SELECT * FROM skills ORDER BY category, level DESC")
        .fetch_all(pool)
        .await
}
