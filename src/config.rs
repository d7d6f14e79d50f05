use std::io;
use std::path::{Path, PathBuf};

use futures::prelude::*;
use log::{debug, warn};
use serde::Deserialize;

use crate::content::Profile;
use crate::field::Parameters;

pub const CONFIG_PATH: &str = "portfolio.json";

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field: Parameters,
    pub profile: Profile,
}

impl Config {
    fn from_read(path: &Path, result: io::Result<String>) -> Self {
        match result {
            Ok(json) => match serde_json::from_str::<Config>(&json) {
                Ok(config) => {
                    debug!("loaded {}", path.display());
                    config
                }
                Err(err) => {
                    warn!("ignoring {}: {}", path.display(), err);
                    Config::default()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no {}, using built-in profile", path.display());
                Config::default()
            }
            Err(err) => {
                warn!("cannot read {}: {}", path.display(), err);
                Config::default()
            }
        }
    }
}

/// Reads the config file, falling back to defaults on any failure.
pub fn load(path: PathBuf) -> impl Future<Output = Config> {
    tokio::fs::read_to_string(path.clone()).map(move |result| Config::from_read(&path, result))
}
