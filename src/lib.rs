pub mod app;
pub mod cache;
pub mod config;
pub mod models;
pub mod tmdb;
pub mod utils;
pub mod views;
