pub mod file;
pub mod navigation;
pub mod storage;
