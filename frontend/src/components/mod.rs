pub mod common;
pub mod confirm_dialog;
pub mod empty_state;
pub mod forms;
pub mod guard;
pub mod layout;
pub mod rich_text;
pub mod toaster;
