use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub admin_password_hash: String,
    pub host: IpAddr,
    pub port: u16,
    /// Directory that public media paths (`assets/projects/...`) are relative to.
    pub site_root: PathBuf,
    pub max_body_size: usize,
    pub max_upload_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;
        let jwt_secret = env_required("JWT_SECRET")?;
        let admin_password_hash = env_required("PORTFOLIO_ADMIN_PASSWORD_HASH")?;

        let host: IpAddr = env_or("PORTFOLIO_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid PORTFOLIO_HOST: {e}"))?;

        let port: u16 = env_or("PORTFOLIO_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid PORTFOLIO_PORT: {e}"))?;

        let site_root = PathBuf::from(env_or("PORTFOLIO_SITE_ROOT", "public"));

        let max_body_size: usize = env_or("PORTFOLIO_MAX_BODY_SIZE", "67108864")
            .parse()
            .map_err(|e| format!("Invalid PORTFOLIO_MAX_BODY_SIZE: {e}"))?;

        let max_upload_size: usize = env_or("PORTFOLIO_MAX_UPLOAD_SIZE", "33554432")
            .parse()
            .map_err(|e| format!("Invalid PORTFOLIO_MAX_UPLOAD_SIZE: {e}"))?;

        let log_level = env_or("PORTFOLIO_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            jwt_secret,
            admin_password_hash,
            host,
            port,
            site_root,
            max_body_size,
            max_upload_size,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
