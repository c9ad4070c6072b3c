use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::models::{About, Experience, MediaList, Project, Skill};

/// Persistent store of project records.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Project>, sqlx::Error>;

    async fn find(&self, id: Uuid) -> Result<Option<Project>, sqlx::Error>;

    async fn create(
        &self,
        title: &str,
        description: &str,
        media: &MediaList,
    ) -> Result<Uuid, sqlx::Error>;

    /// Overwrites title, description and media. `false` when the id is unknown.
    async fn update(
        &self,
        id: Uuid,
        title: &str,
        description: &str,
        media: &MediaList,
    ) -> Result<bool, sqlx::Error>;

    /// Removes the row and returns the media it referenced, `None` when the id is unknown.
    async fn delete(&self, id: Uuid) -> Result<Option<MediaList>, sqlx::Error>;
}

/// Read-only profile content shown on the homepage.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn about(&self) -> Result<Option<About>, sqlx::Error>;
    async fn experience(&self) -> Result<Vec<Experience>, sqlx::Error>;
    async fn skills(&self) -> Result<Vec<Skill>, sqlx::Error>;
}

pub struct PgProjectRepository {
    pool: PgPool,
}

impl PgProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    async fn list(&self) -> Result<Vec<Project>, sqlx::Error> {
        db::projects::list(&self.pool).await
    }

    async fn find(&self, id: Uuid) -> Result<Option<Project>, sqlx::Error> {
        db::projects::find_by_id(&self.pool, id).await
    }

    async fn create(
        &self,
        title: &str,
        description: &str,
        media: &MediaList,
    ) -> Result<Uuid, sqlx::Error> {
        let project =
            db::projects::create(&self.pool, title, description, &media.to_string()).await?;
        Ok(project.id)
    }

    async fn update(
        &self,
        id: Uuid,
        title: &str,
        description: &str,
        media: &MediaList,
    ) -> Result<bool, sqlx::Error> {
        let updated =
            db::projects::update(&self.pool, id, title, description, &media.to_string()).await?;
        Ok(updated.is_some())
    }

    async fn delete(&self, id: Uuid) -> Result<Option<MediaList>, sqlx::Error> {
        let media = db::projects::delete(&self.pool, id).await?;
        Ok(media.as_deref().map(MediaList::parse))
    }
}

pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn about(&self) -> Result<Option<About>, sqlx::Error> {
        db::profile::find_about(&self.pool).await
    }

    async fn experience(&self) -> Result<Vec<Experience>, sqlx::Error> {
        db::profile::list_experience(&self.pool).await
    }

    async fn skills(&self) -> Result<Vec<Skill>, sqlx::Error> {
        db::profile::list_skills(&self.pool).await
    }
}
