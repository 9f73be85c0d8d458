use std::sync::Arc;

use chainlab_core::model::Workbench;
use services::{PackCatalog, PlayService, RevealDelays};

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> PackCatalog;
    fn play(&self) -> PlayService;
    fn delays(&self) -> RevealDelays;
    fn workbench(&self) -> Workbench;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: PackCatalog,
    play: PlayService,
    delays: RevealDelays,
    workbench: Workbench,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            play: app.play(),
            delays: app.delays(),
            workbench: app.workbench(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> PackCatalog {
        self.catalog.clone()
    }

    #[must_use]
    pub fn play(&self) -> PlayService {
        self.play
    }

    #[must_use]
    pub fn delays(&self) -> RevealDelays {
        self.delays
    }

    /// A pristine workbench for a fresh IDE page. Views own their copy, so
    /// leaving the page and coming back starts the simulation over.
    #[must_use]
    pub fn workbench(&self) -> Workbench {
        self.workbench.clone()
    }
}

// The composition root (the binary, or a test harness) provides this context.

/// Snapshots an app's services into the context the views consume.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
