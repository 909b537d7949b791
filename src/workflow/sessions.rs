// Session registry - each session exclusively owns its workflow state.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ApiError;
use crate::gateway::InferenceGateway;

use super::orchestrator::WorkflowSession;

/// In-memory session map. The lock here coordinates session lookup only;
/// workflow transitions are coordinated by each session's own busy flag.
pub struct SessionManager {
    gateway: Arc<InferenceGateway>,
    sessions: RwLock<HashMap<Uuid, Arc<WorkflowSession>>>,
}

impl SessionManager {
    pub fn new(gateway: Arc<InferenceGateway>) -> Self {
        Self {
            gateway,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub async fn create(&self) -> (Uuid, Arc<WorkflowSession>) {
        let id = Uuid::new_v4();
        let session = Arc::new(WorkflowSession::new(self.gateway.clone()));
        self.sessions.write().await.insert(id, session.clone());
        tracing::info!(session_id = %id, "workflow session created");
        (id, session)
    }

    pub async fn get(&self, id: Uuid) -> Result<Arc<WorkflowSession>, ApiError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(ApiError::SessionNotFound)
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), ApiError> {
        match self.sessions.write().await.remove(&id) {
            Some(_) => {
                tracing::info!(session_id = %id, "workflow session discarded");
                Ok(())
            }
            None => Err(ApiError::SessionNotFound),
        }
    }

    pub async fn active_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::gateway::testing::FakeBackend;
    use crate::workflow::state::WorkflowStep;

    use super::*;

    fn manager() -> SessionManager {
        let backend = FakeBackend::with_text("A script about something");
        SessionManager::new(Arc::new(InferenceGateway::new(Arc::new(backend))))
    }

    #[tokio::test]
    async fn created_sessions_are_retrievable() {
        let manager = manager();
        let (id, _) = manager.create().await;

        let session = manager.get(id).await.unwrap();
        assert_eq!(session.state().await.step, WorkflowStep::TopicEntry);
        assert_eq!(manager.active_count().await, 1);
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let manager = manager();
        assert_eq!(
            manager.get(Uuid::new_v4()).await.err(),
            Some(ApiError::SessionNotFound)
        );
        assert_eq!(
            manager.remove(Uuid::new_v4()).await.err(),
            Some(ApiError::SessionNotFound)
        );
    }

    #[tokio::test]
    async fn sessions_do_not_share_state() {
        let manager = manager();
        let (_, first) = manager.create().await;
        let (_, second) = manager.create().await;

        first.generate_script("Space").await.unwrap();

        assert_eq!(first.state().await.step, WorkflowStep::ScriptReady);
        assert_eq!(second.state().await.step, WorkflowStep::TopicEntry);
    }

    #[tokio::test]
    async fn removed_sessions_are_gone() {
        let manager = manager();
        let (id, _) = manager.create().await;

        manager.remove(id).await.unwrap();
        assert_eq!(manager.get(id).await.err(), Some(ApiError::SessionNotFound));
        assert_eq!(manager.active_count().await, 0);
    }
}
