pub mod list;
pub mod session;
pub mod toast;
