//! # Theme Configuration Tree
//!
//! This module provides the key/value tree that theme files are read into,
//! and the [ThemeSource] enum describing where a theme comes from.
//!
//! ## Overview
//!
//! - **[ConfigNode]**: A node of the configuration tree, backed by a TOML table
//! - **[ThemeSource]**: A theme file on disk or an already-parsed tree
//!
//! ## Key Lookup
//!
//! Keys may be dotted. `normal.textColor` first walks nested tables
//! (`[normal] textColor = ...`), then falls back to a literal key
//! (`"normal.textColor" = ...`), so both TOML spellings work.
//!
//! ## Typed Readers
//!
//! [ConfigNode::read] decodes a value with serde. Absent and malformed values
//! both come back as `None`; callers substitute their own default.
//!
//! ```rust
//! use imskin_theme::config::ConfigNode;
//!
//! let node = ConfigNode::from_toml(r#"
//! fontSize = 14
//! normal.textColor = "white"
//! "#).unwrap();
//!
//! assert_eq!(node.read::<i32>("fontSize"), Some(14));
//! assert_eq!(node.get_str("normal.textColor"), Some("white"));
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use toml::{Table, Value};

use crate::error::{ThemeError, ThemeResult};

/// Environment variable naming a theme file to load on startup.
pub const THEME_CONFIG_ENV: &str = "IMSKIN_THEME_CONFIG";

/// Name of the root node inside a theme file.
pub const ROOT_NODE: &str = "Theme";

/// A node of the theme configuration tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigNode {
    table: Table,
}

impl ConfigNode {
    /// Create an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ThemeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, &path.display().to_string())
    }

    /// Parse TOML text.
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        Self::parse(content, "<memory>")
    }

    fn parse(content: &str, origin: &str) -> ThemeResult<Self> {
        let table: Table =
            toml::from_str(content).map_err(|e| ThemeError::parse_error(origin, e.to_string()))?;
        Ok(Self { table })
    }

    /// Get the underlying table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Get a raw value. Dotted keys walk nested tables before falling back to a literal key.
    pub fn get_value(&self, key: &str) -> Option<&Value> {
        lookup_path(&self.table, key).or_else(|| self.table.get(key))
    }

    /// Check whether a key is present.
    pub fn has(&self, key: &str) -> bool {
        self.get_value(key).is_some()
    }

    /// Get a string value.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get_value(key).and_then(Value::as_str)
    }

    /// Get a named sub-node.
    pub fn get_node(&self, key: &str) -> Option<ConfigNode> {
        self.get_value(key)
            .and_then(Value::as_table)
            .map(|table| ConfigNode::from(table.clone()))
    }

    /// Get the entries of a list subtree, in document order.
    ///
    /// Accepts an array of tables (`[[Styles]]`) or a table of tables
    /// (`[Styles.label]`). In the second form an entry without a `name`
    /// key is named after its table key.
    pub fn nodes(&self, key: &str) -> Vec<ConfigNode> {
        match self.get_value(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| match item.as_table() {
                    Some(table) => Some(ConfigNode::from(table.clone())),
                    None => {
                        log::debug!("Skipping non-table entry in '{}': {}", key, item);
                        None
                    },
                })
                .collect(),
            Some(Value::Table(entries)) => entries
                .iter()
                .filter_map(|(name, entry)| {
                    let Some(table) = entry.as_table() else {
                        log::debug!("Skipping non-table entry '{}' in '{}': {}", name, key, entry);
                        return None;
                    };
                    let mut table = table.clone();
                    if !table.contains_key("name") {
                        table.insert("name".to_string(), Value::String(name.clone()));
                    }
                    Some(ConfigNode::from(table))
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Decode a value with serde.
    ///
    /// Returns `None` when the key is absent or the value does not decode
    /// into `T`.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.get_value(key)?;
        match value.clone().try_into::<T>() {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                log::debug!("Ignoring malformed value for '{}': {}", key, err);
                None
            },
        }
    }

    /// Decode a value, falling back to `default`.
    pub fn read_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.read(key).unwrap_or(default)
    }
}

impl From<Table> for ConfigNode {
    fn from(table: Table) -> Self {
        Self { table }
    }
}

fn lookup_path<'a>(table: &'a Table, key: &str) -> Option<&'a Value> {
    let mut segments = key.split('.');
    let mut current = table.get(segments.next()?)?;
    for segment in segments {
        current = current.as_table()?.get(segment)?;
    }
    Some(current)
}

/// A source to load a theme from.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeSource {
    /// A TOML file whose [ROOT_NODE] table holds the theme.
    File(PathBuf),
    /// An already-parsed theme root node.
    Tree(ConfigNode),
}

impl ThemeSource {
    /// Directory that relative texture paths resolve against.
    pub fn base_dir(&self) -> Option<&Path> {
        match self {
            ThemeSource::File(path) => path.parent(),
            ThemeSource::Tree(_) => None,
        }
    }

    /// Produce the theme root node.
    pub fn root(&self) -> ThemeResult<ConfigNode> {
        match self {
            ThemeSource::File(path) => ConfigNode::load(path)?
                .get_node(ROOT_NODE)
                .ok_or_else(|| ThemeError::missing_node(ROOT_NODE)),
            ThemeSource::Tree(node) => Ok(node.clone()),
        }
    }

    /// Read the source named by [THEME_CONFIG_ENV], if set.
    pub fn from_env() -> Option<Self> {
        std::env::var_os(THEME_CONFIG_ENV).map(|path| ThemeSource::File(PathBuf::from(path)))
    }
}

impl From<PathBuf> for ThemeSource {
    fn from(path: PathBuf) -> Self {
        ThemeSource::File(path)
    }
}

impl From<&Path> for ThemeSource {
    fn from(path: &Path) -> Self {
        ThemeSource::File(path.to_path_buf())
    }
}

impl From<&str> for ThemeSource {
    fn from(path: &str) -> Self {
        ThemeSource::File(PathBuf::from(path))
    }
}

impl From<ConfigNode> for ThemeSource {
    fn from(node: ConfigNode) -> Self {
        ThemeSource::Tree(node)
    }
}

impl From<Table> for ThemeSource {
    fn from(table: Table) -> Self {
        ThemeSource::Tree(ConfigNode::from(table))
    }
}
