// Copyright 2025 ThetaNS Contributors
// Licensed under GPL-3.0

//! CLI command implementations

pub mod commit;
pub mod names;
pub mod network;

use anyhow::Result;
use std::path::PathBuf;
use thetans::AddressBook;

/// Address book from `--config`, or the default location, over the built-in tables
pub fn load_address_book(config: Option<PathBuf>) -> Result<AddressBook> {
    let path = match config {
        Some(path) => path,
        None => thetans::config::default_config_path()?,
    };
    AddressBook::load_or_builtin(&path)
}
