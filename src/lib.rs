pub mod config;
pub mod form;
pub mod prompt;
pub mod services;
pub mod ui;
pub mod workflow;
