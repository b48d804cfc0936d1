// Copyright 2025 ThetaNS Contributors
// Licensed under GPL-3.0

//! Loading address overrides from the local filesystem

use crate::config::AddressBook;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "networks.json";

/// Default location of the network overrides file
pub fn default_config_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", "thetans")
        .context("Failed to determine configuration directory")?;

    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}

impl AddressBook {
    /// Read an address book from a JSON file keyed by network id
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read network config {:?}", path))?;

        let book: AddressBook = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse network config {:?}", path))?;

        tracing::debug!("Loaded {} network(s) from {:?}", book.network_ids().count(), path);
        Ok(book)
    }

    /// Built-in tables with the file at `path` layered on top, if it exists
    pub fn load_or_builtin(path: &Path) -> Result<Self> {
        let mut book = AddressBook::builtin();

        if path.exists() {
            book.merge(AddressBook::load(path)?);
        } else {
            tracing::debug!("No network config at {:?}, using built-in addresses", path);
        }

        Ok(book)
    }

    /// Write the book as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create configuration directory")?;
        }

        std::fs::write(path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("Failed to write network config {:?}", path))?;

        Ok(())
    }
}
