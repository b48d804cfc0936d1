// Copyright 2025 ThetaNS Contributors
// Licensed under GPL-3.0

//! Label and domain normalization
//!
//! Hashes are computed over the normalized form, so two spellings that
//! normalize the same way address the same registration slot.

use crate::error::{Error, NameError, Result};

/// Normalize a single label (e.g. "NewName66" -> "newname66")
pub fn normalize_label(label: &str) -> Result<String> {
    check_label(label).map_err(|e| Error::invalid_name(label, e))
}

/// Normalize a full dotted domain, label by label
pub fn normalize_domain(domain: &str) -> Result<String> {
    if domain.is_empty() {
        return Err(Error::invalid_name(domain, NameError::Empty));
    }

    let mut labels = Vec::new();
    for (index, label) in domain.split('.').enumerate() {
        if label.is_empty() {
            return Err(Error::invalid_name(domain, NameError::EmptyLabel(index)));
        }
        labels.push(check_label(label).map_err(|e| Error::invalid_name(domain, e))?);
    }

    Ok(labels.join("."))
}

fn check_label(label: &str) -> std::result::Result<String, NameError> {
    if label.is_empty() {
        return Err(NameError::Empty);
    }

    let lowered = label.to_lowercase();
    for c in lowered.chars() {
        if c == '.' {
            return Err(NameError::ContainsSeparator);
        }
        if !(c.is_alphanumeric() || c == '-' || c == '_') {
            return Err(NameError::InvalidCharacter(c));
        }
    }

    Ok(lowered)
}
