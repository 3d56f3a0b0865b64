use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_QUOTE_LOOKBACK, HookSpec, PhraseDictionary};
use crate::utils::is_js_identifier;

pub const CONFIG_FILE_NAME: &str = ".tarjimrc.json";

/// Dashboard sections migrated by default, one per user role.
const DEFAULT_ROLE_DIRS: &[&str] = &[
    "student",
    "teacher",
    "company",
    "university_student",
    "parent",
];

/// Base file name of the route components that get migrated.
const DEFAULT_PAGE_FILE: &str = "page.tsx";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub hook: HookSpec,
    #[serde(default = "default_directive")]
    pub directive: String,
    #[serde(default = "default_quote_lookback")]
    pub quote_lookback: usize,
    #[serde(default = "PhraseDictionary::builtin")]
    pub phrases: PhraseDictionary,
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_includes() -> Vec<String> {
    DEFAULT_ROLE_DIRS
        .iter()
        .map(|role| format!("app/{}/**/{}", role, DEFAULT_PAGE_FILE))
        .collect()
}

fn default_directive() -> String {
    "use client".to_string()
}

fn default_quote_lookback() -> usize {
    DEFAULT_QUOTE_LOOKBACK
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            includes: default_includes(),
            ignores: Vec::new(),
            hook: HookSpec::default(),
            directive: default_directive(),
            quote_lookback: default_quote_lookback(),
            phrases: PhraseDictionary::builtin(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns, hook names that are not
    /// identifiers, a zero lookback window, or empty phrases and keys.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal paths, so [locale] needs no escaping.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        if !is_js_identifier(&self.hook.name) {
            bail!("Invalid 'hook.name': \"{}\" is not an identifier", self.hook.name);
        }
        if !is_js_identifier(&self.hook.accessor) {
            bail!(
                "Invalid 'hook.accessor': \"{}\" is not an identifier",
                self.hook.accessor
            );
        }
        if self.hook.import_path.trim().is_empty() {
            bail!("'hook.importPath' must not be empty");
        }
        if self.directive.trim().is_empty() {
            bail!("'directive' must not be empty");
        }
        if self.quote_lookback == 0 {
            bail!("'quoteLookback' must be greater than 0");
        }

        for (phrase, key) in self.phrases.iter() {
            if phrase.trim().is_empty() {
                bail!("Empty phrase in 'phrases'");
            }
            if key.trim().is_empty() {
                bail!("Empty translation key for phrase \"{}\" in 'phrases'", phrase);
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, or None when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }

    /// Directory that relative config paths are resolved against.
    pub fn base_dir<'a>(&'a self, fallback: &'a Path) -> &'a Path {
        self.path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(fallback)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
