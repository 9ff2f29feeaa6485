pub mod deadlines;
pub mod health;
pub mod statutes;
