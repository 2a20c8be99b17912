use std::sync::Arc;

use tracing::info_span;

use crate::application::services::{AliasPolicy, RedirectService, SaveService};
use crate::domain::repositories::UrlStore;
use crate::utils::alias_generator::AliasGenerator;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub save_service: Arc<SaveService>,
    pub redirect_service: Arc<RedirectService>,
    pub store: Arc<dyn UrlStore>,
}

impl AppState {
    /// Wires both services to one store.
    ///
    /// Each service receives its own span as its logging capability.
    pub fn new(
        store: Arc<dyn UrlStore>,
        generator: Arc<dyn AliasGenerator>,
        policy: AliasPolicy,
    ) -> Self {
        let save_service = SaveService::new(
            store.clone(),
            generator,
            policy,
            info_span!("save_service", op = "services.save"),
        );
        let redirect_service = RedirectService::new(
            store.clone(),
            info_span!("redirect_service", op = "services.redirect"),
        );

        Self {
            save_service: Arc::new(save_service),
            redirect_service: Arc::new(redirect_service),
            store,
        }
    }
}
