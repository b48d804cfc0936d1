// Copyright 2025 ThetaNS Contributors
// Licensed under GPL-3.0

//! Name normalization and hashing

pub mod hash;
pub mod normalize;

pub use hash::{labelhash, namehash, reverse_node};
pub use normalize::{normalize_domain, normalize_label};
