use std::sync::Arc;

use kochchef_shared::{DefaultSource, DirectoryDefaults, Error, Result};
use rust_embed::RustEmbed;

use crate::config::DataConfig;

#[derive(RustEmbed)]
#[folder = "data/"]
struct Data;

/// Default menu documents compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledDefaults;

impl DefaultSource for BundledDefaults {
    fn fetch(&self, name: &str) -> Result<String> {
        let Some(file) = Data::get(name) else {
            return Err(Error::LoadFailure(format!("bundled {name} is missing")));
        };

        String::from_utf8(file.data.into_owned())
            .map_err(|e| Error::LoadFailure(format!("bundled {name}: {e}")))
    }
}

pub fn default_source(config: &DataConfig) -> Arc<dyn DefaultSource> {
    match config.defaults_dir.as_deref() {
        Some(dir) => Arc::new(DirectoryDefaults::new(dir)),
        None => Arc::new(BundledDefaults),
    }
}
