//! E2E test helpers for constructing the full application stack over
//! temporary user and data directories.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use crate::app::App;
use crate::infrastructure::config::LevelSettings;
use crate::infrastructure::diagnostics::RecordingDiagnostics;
use crate::use_cases::level::LevelDefaults;

/// A fully wired `App` plus the directories and diagnostics behind it.
pub struct E2ETestContext {
    pub user_dir: TempDir,
    pub data_dir: TempDir,
    pub diagnostics: Arc<RecordingDiagnostics>,
    pub app: App,
}

impl E2ETestContext {
    pub fn new() -> Self {
        let user_dir = tempfile::tempdir().expect("create user dir");
        let data_dir = tempfile::tempdir().expect("create data dir");
        let settings = LevelSettings {
            data_dir: data_dir.path().to_path_buf(),
            user_dir: Some(user_dir.path().to_path_buf()),
            defaults: LevelDefaults::default(),
        };
        let diagnostics = Arc::new(RecordingDiagnostics::new());
        let app = App::with_diagnostics(&settings, diagnostics.clone());

        Self {
            user_dir,
            data_dir,
            diagnostics,
            app,
        }
    }

    /// Write a file below the read-only data directory.
    pub fn write_data(&self, path: &str, contents: &str) {
        write_file(self.data_dir.path(), path, contents);
    }

    /// Write a file below the user directory.
    pub fn write_user(&self, path: &str, contents: &str) {
        write_file(self.user_dir.path(), path, contents);
    }
}

fn write_file(root: &Path, path: &str, contents: &str) {
    let full = root.join(path);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).expect("create parent directories");
    }
    fs::write(&full, contents).expect("write test file");
}

/// A current-format level with the given sectors (each a raw sector body).
pub fn current_level(name: &str, license: Option<&str>, sectors: &[&str]) -> String {
    let mut doc = format!("(supertux-level\n  (version 2)\n  (name (_ \"{name}\"))\n  (author \"Tux\")\n");
    if let Some(license) = license {
        doc.push_str(&format!("  (license \"{license}\")\n"));
    }
    for body in sectors {
        doc.push_str(&format!("  (sector {body})\n"));
    }
    doc.push(')');
    doc
}
