pub mod api;
pub mod commands;
pub mod config;
pub mod helpers;
pub mod models;
pub mod repositories;
pub mod views;
