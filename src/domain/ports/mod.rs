pub mod statute_repository;
