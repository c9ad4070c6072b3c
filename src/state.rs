use std::sync::Arc;

use crate::config::Config;
use crate::media::MediaStore;
use crate::rate_limit::LoginRateLimiter;
use crate::repository::{ProfileRepository, ProjectRepository};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub projects: Arc<dyn ProjectRepository>,
    pub profile: Arc<dyn ProfileRepository>,
    pub media: Arc<dyn MediaStore>,
    pub login_limiter: LoginRateLimiter,
}
