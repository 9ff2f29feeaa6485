pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;

pub use config::*;
pub use domain::entities::*;
pub use domain::errors::*;
pub use domain::services::*;
pub use services::*;
