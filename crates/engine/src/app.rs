//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    config::LevelSettings,
    diagnostics::TracingDiagnostics,
    filesystem::SearchPathFileSystem,
    ports::{DiagnosticsPort, FileSystemPort, SectorBuilderPort, TranslationPort},
    sector_builder::BasicSectorBuilder,
    translation::DictionaryRegistry,
};
use crate::use_cases::{CreateLevel, LevelUseCases, LoadLevel, ProbeLevelName};

/// Main application state.
pub struct App {
    pub use_cases: UseCases,
    pub translations: Arc<DictionaryRegistry>,
}

/// Container for all use cases.
pub struct UseCases {
    pub level: LevelUseCases,
}

impl App {
    /// Wire everything up, reporting diagnostics through `tracing`.
    pub fn new(settings: &LevelSettings) -> Self {
        Self::with_diagnostics(settings, Arc::new(TracingDiagnostics::new()))
    }

    pub fn with_diagnostics(settings: &LevelSettings, diagnostics: Arc<dyn DiagnosticsPort>) -> Self {
        let filesystem: Arc<dyn FileSystemPort> =
            Arc::new(SearchPathFileSystem::new(settings.search_roots()));
        let translations = Arc::new(DictionaryRegistry::new(filesystem.clone()));
        let translation_port: Arc<dyn TranslationPort> = translations.clone();
        let sectors: Arc<dyn SectorBuilderPort> = Arc::new(BasicSectorBuilder::new());

        let level = LevelUseCases::new(
            Arc::new(LoadLevel::new(
                filesystem.clone(),
                translation_port.clone(),
                sectors.clone(),
                diagnostics.clone(),
            )),
            Arc::new(ProbeLevelName::new(
                filesystem.clone(),
                translation_port,
                diagnostics.clone(),
            )),
            Arc::new(CreateLevel::new(
                filesystem,
                sectors,
                diagnostics,
                settings.defaults.clone(),
            )),
        );

        Self {
            use_cases: UseCases { level },
            translations,
        }
    }
}
