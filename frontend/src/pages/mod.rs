pub mod blog;
pub mod blog_editor;
pub mod dashboard;
pub mod login;
pub mod project_editor;
pub mod projects;
