pub mod account;
pub mod auth;
pub mod contact;
mod forms;
pub mod health;
pub mod projects;
pub mod public;
pub mod settings;
pub mod skills;

pub use account::{change_password, change_username, remove_pfp, upload_pfp};
pub use auth::{admin_dashboard, admin_login, admin_logout, admin_session_reset};
pub use contact::contact_send;
pub use health::health_check;
pub use projects::{add_project, delete_project, edit_project};
pub use public::{api_contact_info, api_experience, api_profile, api_projects, api_skills};
pub use settings::{update_contact, update_experience};
pub use skills::{skills_add, skills_delete, skills_update};
