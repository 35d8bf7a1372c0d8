pub mod commands;
pub mod configs;
pub mod models;
pub mod services;
pub mod types;
pub mod utils;
