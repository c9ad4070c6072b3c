pub mod media;
pub mod profile;
pub mod project;

pub use media::MediaList;
pub use profile::{About, Experience, Skill};
pub use project::Project;
