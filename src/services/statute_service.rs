use std::sync::Arc;

use crate::domain::entities::Statute;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::statute_repository::StatuteRepository;

/// Service for searching the statute reference dataset
#[derive(Clone)]
pub struct StatuteService {
    repository: Arc<dyn StatuteRepository>,
}

impl StatuteService {
    pub fn new(repository: Arc<dyn StatuteRepository>) -> Self {
        Self { repository }
    }

    /// Statutes whose name or abbreviation contains `query`, ignoring case.
    /// A blank query returns the whole dataset. Dataset order is kept.
    pub async fn search(&self, query: Option<&str>) -> DomainResult<Vec<Statute>> {
        let statutes = self.repository.list_statutes().await?;

        let needle = query.map(str::trim).unwrap_or_default().to_lowercase();
        if needle.is_empty() {
            return Ok(statutes);
        }

        Ok(statutes
            .into_iter()
            .filter(|statute| statute.matches(&needle))
            .collect())
    }

    pub async fn get(&self, id: &str) -> DomainResult<Statute> {
        self.repository
            .get_statute(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Statute {} not found", id)))
    }
}
