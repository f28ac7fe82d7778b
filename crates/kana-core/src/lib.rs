pub mod backend;
pub mod config;
pub mod translit;
pub mod unicode;
