pub mod extractor;
pub mod jwt;
pub mod password;

/// Cookie carrying the admin session token.
pub const SESSION_COOKIE: &str = "admin_token";
