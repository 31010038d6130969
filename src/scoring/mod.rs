// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their order.
//!
//! Title matches dominate. The smallest title bonus (3) is larger than every
//! non-title bonus combined (2.5), so an item matching only in description,
//! category or breadcrumb can never outrank a title hit.

mod core;
pub mod ranking;

pub use self::core::*;
