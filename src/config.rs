use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    foundation::{
        core::Palette,
        error::{VoiceprintsError, VoiceprintsResult},
    },
    fractal::subdivide::{DEFAULT_APEX_Y, DEFAULT_DEPTH, DEFAULT_SIZE},
};

/// Deepest subdivision accepted from configuration.
pub const MAX_DEPTH: u32 = 8;

/// Environment variable consulted for the colour seed when none is passed explicitly.
pub const SEED_ENV: &str = "VOICEPRINTS_SEED";

/// Tunables for the fractal background. Missing JSON fields take their defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackgroundConfig {
    pub palette: Palette,
    pub apex_y: f64,
    pub size: f64,
    pub depth: u32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            palette: Palette::DEFAULT,
            apex_y: DEFAULT_APEX_Y,
            size: DEFAULT_SIZE,
            depth: DEFAULT_DEPTH,
        }
    }
}

impl BackgroundConfig {
    pub fn validate(&self) -> VoiceprintsResult<()> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(VoiceprintsError::validation(format!(
                "size must be finite and > 0, got {}",
                self.size
            )));
        }
        if !self.apex_y.is_finite() {
            return Err(VoiceprintsError::validation("apex_y must be finite"));
        }
        if self.depth > MAX_DEPTH {
            return Err(VoiceprintsError::validation(format!(
                "depth must be <= {MAX_DEPTH}, got {}",
                self.depth
            )));
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> VoiceprintsResult<Self> {
        let cfg: Self =
            serde_json::from_str(s).map_err(|e| VoiceprintsError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_path(path: &Path) -> VoiceprintsResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open background config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| VoiceprintsError::serde(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Parse the seed from `VOICEPRINTS_SEED`, ignoring unset or malformed values.
pub fn seed_from_env() -> Option<u64> {
    std::env::var(SEED_ENV)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
