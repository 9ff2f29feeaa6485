use crate::domain::entities::Statute;
use crate::domain::errors::DomainResult;

/// Read-only access to the statute reference dataset
#[async_trait::async_trait]
pub trait StatuteRepository: Send + Sync {
    async fn list_statutes(&self) -> DomainResult<Vec<Statute>>;
    async fn get_statute(&self, id: &str) -> DomainResult<Option<Statute>>;
}
