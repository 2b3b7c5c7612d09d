pub mod config;
pub mod error;
pub mod models;
pub mod screens;
pub mod services;

pub use config::Config;
pub use error::RegistrationError;
pub use services::*;
