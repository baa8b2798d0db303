// src/lib.rs

pub mod app;
pub mod assistant;
pub mod chat_message;
pub mod config;
pub mod constants;
pub mod contact;
pub mod content;
pub mod conversation;
pub mod errors;
pub mod geolocation;
pub mod intro;
pub mod key_handlers;
pub mod log_view;
pub mod logging;
pub mod projects;
pub mod resolver;
pub mod status_indicator;
pub mod typewriter;
pub mod ui;
