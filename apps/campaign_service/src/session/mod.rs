pub mod session_controller;
pub mod session_store;
