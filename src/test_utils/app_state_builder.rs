//! Test app state builder for HTTP-level integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use secrecy::SecretString;

use crate::{
    adapters::http::app_state::AppState,
    infra::config::AppConfig,
    test_utils::InMemoryWaitlistRepo,
    use_cases::waitlist::{WaitlistEntry, WaitlistRepo, WaitlistUseCases},
};

/// Builds a minimal `AppState` backed by the in-memory repo.
pub struct TestAppStateBuilder {
    repo: Arc<InMemoryWaitlistRepo>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            repo: Arc::new(InMemoryWaitlistRepo::new()),
        }
    }

    /// Seed the repo with initial entries.
    pub fn with_entries(mut self, entries: Vec<WaitlistEntry>) -> Self {
        self.repo = Arc::new(InMemoryWaitlistRepo::with_entries(entries));
        self
    }

    /// Simulate an unreachable database.
    pub fn unavailable(self) -> Self {
        self.repo.set_unavailable();
        self
    }

    /// Handle to the underlying repo, for asserting on stored rows.
    pub fn repo(&self) -> Arc<InMemoryWaitlistRepo> {
        self.repo.clone()
    }

    pub fn build(self) -> AppState {
        let config = AppConfig {
            bind_addr: "127.0.0.1:0".parse::<SocketAddr>().unwrap(),
            db_host: "localhost".to_string(),
            db_port: 5432,
            db_name: "email_service_test".to_string(),
            db_user: "vtl_service".to_string(),
            db_password: SecretString::new("vtl_password".to_string().into()),
            db_max_connections: 1,
        };

        AppState {
            config: Arc::new(config),
            waitlist_use_cases: Arc::new(WaitlistUseCases::new(
                self.repo.clone() as Arc<dyn WaitlistRepo>,
            )),
        }
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
