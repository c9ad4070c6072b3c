#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tempfile::TempDir;
use uuid::Uuid;

use portfolio::auth::jwt::{encode_token, Claims};
use portfolio::auth::{password, SESSION_COOKIE};
use portfolio::config::Config;
use portfolio::media::{FsMediaStore, MediaError, MediaStore};
use portfolio::models::{About, Experience, MediaList, Project, Skill};
use portfolio::rate_limit::LoginRateLimiter;
use portfolio::repository::{ProfileRepository, ProjectRepository};
use portfolio::state::{AppState, SharedState};

pub const ADMIN_PASSWORD: &str = "correct horse battery";
pub const JWT_SECRET: &str = "test-jwt-secret-that-is-long-enough";
pub const MAX_UPLOAD_SIZE: usize = 1024;
pub const MAX_BODY_SIZE: usize = 16 * 1024;

/// Project table kept in memory, with a switch to make every call fail.
#[derive(Default)]
pub struct MemoryProjectRepository {
    rows: Mutex<Vec<Project>>,
    failing: AtomicBool,
}

impl MemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_with_errors(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn insert(&self, title: &str, description: &str, media: &str) -> Uuid {
        let project = Project {
            id: Uuid::now_v7(),
            title: title.to_string(),
            description: description.to_string(),
            media: media.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let id = project.id;
        self.rows.lock().unwrap().push(project);
        id
    }

    pub fn get(&self, id: Uuid) -> Option<Project> {
        self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned()
    }

    pub fn list_all(&self) -> Vec<Project> {
        self.rows.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(sqlx::Error::Protocol("connection reset".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectRepository for MemoryProjectRepository {
    async fn list(&self) -> Result<Vec<Project>, sqlx::Error> {
        self.check()?;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Project>, sqlx::Error> {
        self.check()?;
        Ok(self.get(id))
    }

    async fn create(
        &self,
        title: &str,
        description: &str,
        media: &MediaList,
    ) -> Result<Uuid, sqlx::Error> {
        self.check()?;
        Ok(self.insert(title, description, &media.to_string()))
    }

    async fn update(
        &self,
        id: Uuid,
        title: &str,
        description: &str,
        media: &MediaList,
    ) -> Result<bool, sqlx::Error> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|p| p.id == id) else {
            return Ok(false);
        };
        row.title = title.to_string();
        row.description = description.to_string();
        row.media = media.to_string();
        row.updated_at = Utc::now();
        Ok(true)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<MediaList>, sqlx::Error> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let Some(pos) = rows.iter().position(|p| p.id == id) else {
            return Ok(None);
        };
        let removed = rows.remove(pos);
        Ok(Some(removed.media_list()))
    }
}

#[derive(Default)]
pub struct StaticProfile {
    pub about: Option<About>,
    pub experience: Vec<Experience>,
    pub skills: Vec<Skill>,
}

#[async_trait]
impl ProfileRepository for StaticProfile {
    async fn about(&self) -> Result<Option<About>, sqlx::Error> {
        Ok(self.about.clone())
    }

    async fn experience(&self) -> Result<Vec<Experience>, sqlx::Error> {
        Ok(self.experience.clone())
    }

    async fn skills(&self) -> Result<Vec<Skill>, sqlx::Error> {
        Ok(self.skills.clone())
    }
}

/// Media store whose writes always fail, for exercising the upload error path.
pub struct BrokenMediaStore;

#[async_trait]
impl MediaStore for BrokenMediaStore {
    async fn store(&self, file_name: &str, _data: Bytes) -> Result<String, MediaError> {
        Err(format!("disk full while writing {file_name}").into())
    }

    async fn remove(&self, relative_path: &str) -> Result<bool, MediaError> {
        Err(format!("permission denied removing {relative_path}").into())
    }
}

pub fn sample_profile() -> StaticProfile {
    StaticProfile {
        about: Some(About {
            name: "Ada Example".to_string(),
            tagline: "Teacher and maker".to_string(),
            bio: "First line\nSecond line".to_string(),
            photo_url: None,
            education: "BSc Physics\n\n  MSc Education  \n".to_string(),
            philosophy: "Curiosity first.".to_string(),
            email: "ada@example.com".to_string(),
            linkedin_url: Some("https://linkedin.example/ada".to_string()),
            phone: "555-0100".to_string(),
        }),
        experience: vec![Experience {
            id: 1,
            title: "Physics Teacher".to_string(),
            institution: "North High".to_string(),
            start_year: 2018,
            end_year: "Present".to_string(),
            description: "Labs\nMentoring".to_string(),
        }],
        skills: vec![Skill {
            id: 1,
            skill_name: "Curriculum design".to_string(),
            category: "Teaching".to_string(),
            level: 5,
        }],
    }
}

pub fn test_config(site_root: &std::path::Path) -> Config {
    Config {
        database_url: "postgres://unused".to_string(),
        jwt_secret: JWT_SECRET.to_string(),
        admin_password_hash: password::hash(ADMIN_PASSWORD).expect("hash admin password"),
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        site_root: site_root.to_path_buf(),
        max_body_size: MAX_BODY_SIZE,
        max_upload_size: MAX_UPLOAD_SIZE,
        log_level: "warn".to_string(),
    }
}

/// A running test server backed by in-memory repositories and a temporary site root.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub projects: Arc<MemoryProjectRepository>,
    pub site_root: TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Cookie header value for a valid admin session.
    pub fn admin_cookie(&self) -> String {
        let token = encode_token(&Claims::admin(), JWT_SECRET).unwrap();
        format!("{SESSION_COOKIE}={token}")
    }

    pub fn media_path(&self, relative: &str) -> std::path::PathBuf {
        self.site_root.path().join(relative)
    }

    /// Post the admin project form as the signed-in admin, return (status, page body).
    pub async fn submit(&self, form: Form) -> (StatusCode, String) {
        let resp = self
            .client
            .post(self.url("/admin/projects"))
            .header("cookie", self.admin_cookie())
            .multipart(form)
            .send()
            .await
            .expect("submit project form failed");
        let status = resp.status();
        (status, resp.text().await.unwrap_or_default())
    }

    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        (status, resp.text().await.unwrap_or_default())
    }
}

pub fn file_part(name: &str, data: &[u8]) -> Part {
    Part::bytes(data.to_vec()).file_name(name.to_string())
}

pub fn add_form(title: &str, description: &str) -> Form {
    Form::new()
        .text("title", title.to_string())
        .text("description", description.to_string())
        .text("current_media_url", "")
        .text("add_project", "1")
}

pub fn update_form(id: Uuid, title: &str, current_media: &str) -> Form {
    Form::new()
        .text("id", id.to_string())
        .text("title", title.to_string())
        .text("description", "")
        .text("current_media_url", current_media.to_string())
        .text("update_project", "1")
}

pub fn delete_form(id: Uuid) -> Form {
    Form::new()
        .text("id", id.to_string())
        .text("title", "")
        .text("description", "")
        .text("current_media_url", "")
        .text("delete_project", "1")
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_profile(sample_profile()).await
}

pub async fn spawn_app_with_profile(profile: StaticProfile) -> TestApp {
    let site_root = TempDir::new().expect("create temp site root");
    let projects = Arc::new(MemoryProjectRepository::new());

    let state: SharedState = Arc::new(AppState {
        config: test_config(site_root.path()),
        projects: projects.clone(),
        profile: Arc::new(profile),
        media: Arc::new(FsMediaStore::new(site_root.path())),
        login_limiter: LoginRateLimiter::new(),
    });

    let app = portfolio::build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        client,
        projects,
        site_root,
    }
}

/// A dedicated PostgreSQL database with migrations applied.
pub struct TestDb {
    pub pool: PgPool,
    pub db_name: String,
}

fn admin_url(base_url: &str) -> String {
    base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.to_string())
}

/// Create a unique test database, or `None` when `DATABASE_URL` is not set.
pub async fn create_test_db() -> Option<TestDb> {
    let _ = dotenvy::dotenv();

    let Ok(base_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping PostgreSQL test");
        return None;
    };

    let db_name = format!("portfolio_test_{}", Uuid::now_v7().to_string().replace('-', ""));

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url(&base_url))
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    let test_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.clone());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&test_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    Some(TestDb { pool, db_name })
}

/// Drop the test database after the test completes.
pub async fn cleanup_db(db: TestDb) {
    db.pool.close().await;

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url(&base_url))
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!(
        "DROP DATABASE IF EXISTS \"{}\" WITH (FORCE)",
        db.db_name
    ))
    .execute(&admin_pool)
    .await;

    admin_pool.close().await;
}
