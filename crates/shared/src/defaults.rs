use std::path::PathBuf;

use crate::{Error, Result};

pub const MENU_DEFAULTS: &str = "menu.json";
pub const WEEKLY_MENU_DEFAULTS: &str = "weekly-menu.json";

/// Read-only source of the bundled default data files.
pub trait DefaultSource: Send + Sync {
    fn fetch(&self, name: &str) -> Result<String>;
}

/// Default data read from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryDefaults {
    dir: PathBuf,
}

impl DirectoryDefaults {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DefaultSource for DirectoryDefaults {
    fn fetch(&self, name: &str) -> Result<String> {
        let path = self.dir.join(name);
        std::fs::read_to_string(&path)
            .map_err(|e| Error::LoadFailure(format!("{}: {e}", path.display())))
    }
}
