pub mod deadline;
pub mod holiday;
pub mod locale;
pub mod statute;

pub use deadline::*;
pub use holiday::*;
pub use locale::*;
pub use statute::*;
