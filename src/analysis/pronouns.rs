//! Closed pronoun sets used to score dialogue runs

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

const DEFAULT_MALE: &[&str] = &["han", "ham", "he", "him", "himself"];
const DEFAULT_FEMALE: &[&str] = &["hun", "henne", "hende", "she", "her", "herself"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PronounClass {
    Male,
    Female,
}

/// Male- and female-associated pronouns, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PronounSets {
    #[serde(default = "default_male", deserialize_with = "lowercase_set")]
    pub male: BTreeSet<String>,
    #[serde(default = "default_female", deserialize_with = "lowercase_set")]
    pub female: BTreeSet<String>,
}

impl PronounSets {
    pub fn new<I, J, S, T>(male: I, female: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Self {
            male: male.into_iter().map(|s| s.as_ref().to_lowercase()).collect(),
            female: female.into_iter().map(|s| s.as_ref().to_lowercase()).collect(),
        }
    }

    /// Classify a single word token, case-insensitively. Male is checked first.
    pub fn classify(&self, token: &str) -> Option<PronounClass> {
        let token = token.to_lowercase();
        if self.male.contains(&token) {
            Some(PronounClass::Male)
        } else if self.female.contains(&token) {
            Some(PronounClass::Female)
        } else {
            None
        }
    }
}

impl Default for PronounSets {
    fn default() -> Self {
        Self::new(DEFAULT_MALE, DEFAULT_FEMALE)
    }
}

fn default_male() -> BTreeSet<String> {
    PronounSets::default().male
}

fn default_female() -> BTreeSet<String> {
    PronounSets::default().female
}

fn lowercase_set<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|s| s.to_lowercase()).collect())
}
