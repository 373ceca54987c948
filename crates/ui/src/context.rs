use std::sync::Arc;

use services::{SessionController, SessionFactory};

pub trait UiApp: Send + Sync {
    fn session_factory(&self) -> Arc<SessionFactory>;
}

#[derive(Clone)]
pub struct AppContext {
    session_factory: Arc<SessionFactory>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session_factory: app.session_factory(),
        }
    }

    #[must_use]
    pub fn session_factory(&self) -> Arc<SessionFactory> {
        Arc::clone(&self.session_factory)
    }

    /// Starts a new drill from the shared factory.
    #[must_use]
    pub fn start_session(&self) -> SessionController {
        self.session_factory.start()
    }
}

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
