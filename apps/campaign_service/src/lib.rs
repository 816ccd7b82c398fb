pub mod app_module;
pub mod app_router;
pub mod campaign;
pub mod config;
pub mod error;
pub mod health;
pub mod image;
pub mod session;
