pub mod controllers;
pub mod error;
pub mod server;
pub mod session;
pub mod views;

pub use server::AppState;
