pub mod creation;
pub mod export;
pub mod import;
