use std::sync::Arc;

use burrow_core::Repository;
use burrow_generator::ContentHashGenerator;
use burrow_redirector::{Redirector, RedirectorService};
use burrow_session::{AccessGate, AdminCredentials, Authenticator, SessionRegistry};
use burrow_shortener::{Shortener, ShortenerService};

use crate::settings::GatewaySettings;

#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    redirector: Arc<dyn Redirector>,
    authenticator: Arc<Authenticator>,
    gate: AccessGate,
    settings: Arc<GatewaySettings>,
}

impl AppState {
    pub fn new(
        shortener: Arc<dyn Shortener>,
        redirector: Arc<dyn Redirector>,
        credentials: AdminCredentials,
        settings: GatewaySettings,
    ) -> Self {
        let registry = Arc::new(SessionRegistry::new());
        let authenticator = Authenticator::new(
            Arc::clone(&registry),
            credentials,
            settings.session_ttl,
        );
        let gate = AccessGate::new(registry, settings.session_ttl);

        Self {
            shortener,
            redirector,
            authenticator: Arc::new(authenticator),
            gate,
            settings: Arc::new(settings),
        }
    }

    /// Wires both services over one shared repository.
    pub fn with_repository<R: Repository>(
        repository: R,
        credentials: AdminCredentials,
        settings: GatewaySettings,
    ) -> Self {
        let repository = Arc::new(repository);
        let shortener = ShortenerService::with_shared_repository(
            Arc::clone(&repository),
            ContentHashGenerator::new(),
        );
        let redirector = RedirectorService::with_shared_repository(repository);

        Self::new(
            Arc::new(shortener),
            Arc::new(redirector),
            credentials,
            settings,
        )
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    pub fn redirector(&self) -> &dyn Redirector {
        self.redirector.as_ref()
    }

    pub fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }

    pub fn gate(&self) -> &AccessGate {
        &self.gate
    }

    pub fn settings(&self) -> &GatewaySettings {
        &self.settings
    }
}
