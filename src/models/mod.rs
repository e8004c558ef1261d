pub mod admin;
pub mod contact;
pub mod project;
pub mod skill;

pub use admin::Admin;
pub use contact::ContactSettings;
pub use project::Project;
pub use skill::Skill;
