// this_file: crates/filigree-cli/src/profiles.rs

//! File-backed store for named style profiles.
//!
//! Profiles persist as a single JSON object keyed by profile name, the
//! same shape the original generator kept in its `textConverterProfiles`
//! cookie, so an exported cookie pastes straight in. The store holds at
//! most [`MAX_PROFILES`] entries; overwriting an existing name is always
//! allowed.

use filigree_core::{FiligreeError, Result, StyleConfig};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum number of saved profiles.
pub const MAX_PROFILES: usize = 5;

/// Fields a profile entry must show at least one of to be considered a
/// style profile at all during import.
const PROFILE_MARKERS: [&str; 6] = [
    "firstLetterFont",
    "commaStyle",
    "punctuationStyle",
    "spaceStyle",
    "uppercaseWordStyle",
    "symbolMode",
];

/// What an import run did.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    pub imported: usize,
    pub skipped: usize,
}

/// All saved profiles, loaded from and persisted to one JSON file.
pub struct ProfileStore {
    path: PathBuf,
    profiles: BTreeMap<String, StyleConfig>,
}

impl ProfileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let profiles = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|err| {
                FiligreeError::ProfileStore(format!("{}: {err}", path.display()))
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, profiles })
    }

    /// The resolved location a store should live at: `$FILIGREE_PROFILES`
    /// if set, else `~/.config/filigree/profiles.json`, else a file in
    /// the working directory.
    pub fn default_path() -> PathBuf {
        if let Some(path) = std::env::var_os("FILIGREE_PROFILES") {
            return PathBuf::from(path);
        }
        match std::env::var_os("HOME") {
            Some(home) => Path::new(&home)
                .join(".config")
                .join("filigree")
                .join("profiles.json"),
            None => PathBuf::from("filigree-profiles.json"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Saved profile names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Result<&StyleConfig> {
        self.profiles
            .get(name)
            .ok_or_else(|| FiligreeError::UnknownProfile(name.to_string()))
    }

    /// Save `config` under `name`, overwriting an existing profile. A new
    /// name is rejected once the store is full.
    pub fn save(&mut self, name: &str, config: StyleConfig) -> Result<()> {
        if self.profiles.len() >= MAX_PROFILES && !self.profiles.contains_key(name) {
            return Err(FiligreeError::ProfileLimit {
                name: name.to_string(),
                limit: MAX_PROFILES,
            });
        }
        log::debug!("saving profile {name:?}");
        self.profiles.insert(name.to_string(), config);
        self.persist()
    }

    pub fn delete(&mut self, name: &str) -> Result<()> {
        if self.profiles.remove(name).is_none() {
            return Err(FiligreeError::UnknownProfile(name.to_string()));
        }
        log::debug!("deleted profile {name:?}");
        self.persist()
    }

    /// Pretty JSON for one profile, or the whole store when `name` is
    /// `None`. Both shapes are objects keyed by name, so either output
    /// imports back in.
    pub fn export(&self, name: Option<&str>) -> Result<String> {
        let selection: BTreeMap<&str, &StyleConfig> = match name {
            Some(name) => {
                let config = self.get(name)?;
                BTreeMap::from([(name, config)])
            }
            None => self
                .profiles
                .iter()
                .map(|(name, config)| (name.as_str(), config))
                .collect(),
        };
        serde_json::to_string_pretty(&selection)
            .map_err(|err| FiligreeError::ProfileStore(err.to_string()))
    }

    /// Merge profiles from exported JSON. Entries that are not objects,
    /// carry none of the profile fields, or fail to deserialize are
    /// skipped. Importing stops once the store fills; a store already at
    /// the limit rejects the whole import.
    pub fn import(&mut self, json: &str) -> Result<ImportOutcome> {
        let data: Value = serde_json::from_str(json)
            .map_err(|err| FiligreeError::ProfileStore(format!("not valid JSON: {err}")))?;
        let Value::Object(entries) = data else {
            return Err(FiligreeError::ProfileStore(
                "expected a JSON object keyed by profile name".to_string(),
            ));
        };
        if self.profiles.len() >= MAX_PROFILES {
            return Err(FiligreeError::ProfileLimit {
                name: "import".to_string(),
                limit: MAX_PROFILES,
            });
        }

        let mut outcome = ImportOutcome::default();
        for (name, entry) in entries {
            if self.profiles.len() >= MAX_PROFILES && !self.profiles.contains_key(&name) {
                break;
            }
            if !looks_like_profile(&entry) {
                log::warn!("skipping entry {name:?}: not a style profile");
                outcome.skipped += 1;
                continue;
            }
            match serde_json::from_value::<StyleConfig>(entry) {
                Ok(config) => {
                    self.profiles.insert(name, config);
                    outcome.imported += 1;
                }
                Err(err) => {
                    log::warn!("skipping entry {name:?}: {err}");
                    outcome.skipped += 1;
                }
            }
        }

        if outcome.imported > 0 {
            self.persist()?;
        }
        Ok(outcome)
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.profiles)
            .map_err(|err| FiligreeError::ProfileStore(err.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

fn looks_like_profile(entry: &Value) -> bool {
    match entry {
        Value::Object(map) => PROFILE_MARKERS.iter().any(|field| map.contains_key(*field)),
        _ => false,
    }
}
