pub mod deadline_service;
pub mod statute_service;

pub use deadline_service::*;
pub use statute_service::*;
