//! Pipeline configuration
//!
//! Every field has a default, so an empty file (or no file at all) gives
//! the standard export. Command-line flags are applied on top.

use crate::analysis::{PronounSets, DEFAULT_MIN_DIALOGUE_LEN};
use crate::error::{DramanetError, DramanetResult};
use crate::gender::GenderOverrides;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Shortest alternating exchange reported as a dialogue run
    pub min_dialogue_len: usize,
    pub pronouns: PronounSets,
    /// Attach the flat transition-event trail to each play export
    pub include_transitions: bool,
    /// One worker per play
    pub parallel: bool,
    /// Flat or per-play gender override file
    pub gender_file: Option<PathBuf>,
    /// Earlier exports whose embedded gender table is merged first
    pub previous_exports: Vec<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_dialogue_len: DEFAULT_MIN_DIALOGUE_LEN,
            pronouns: PronounSets::default(),
            include_transitions: false,
            parallel: true,
            gender_file: None,
            previous_exports: Vec::new(),
        }
    }
}

impl PipelineConfig {
    /// Read a YAML (or JSON) configuration file.
    pub fn from_file(path: &Path) -> DramanetResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| DramanetError::io(path, e))?;
        let config: Self = serde_yaml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the detector cannot honour.
    pub fn validate(&self) -> DramanetResult<()> {
        if self.min_dialogue_len < 2 {
            return Err(DramanetError::InvalidConfig(format!(
                "min_dialogue_len must be at least 2, got {}",
                self.min_dialogue_len
            )));
        }
        Ok(())
    }

    /// Build the gender override object from the configured sources.
    pub fn load_gender_overrides(&self) -> GenderOverrides {
        GenderOverrides::load(self.gender_file.as_deref(), &self.previous_exports)
    }
}
