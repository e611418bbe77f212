pub mod import;
pub mod palette;
pub mod show;
