mod statutes;

pub use statutes::InMemoryStatuteRepository;
