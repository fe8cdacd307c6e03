// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - Custom assertion helpers
//! - Log capture

mod assertions;
mod fixtures;
mod logs;

#[allow(unused_imports)]
pub use assertions::{assert_board_idle, assert_store_invariants};
#[allow(unused_imports)]
pub use fixtures::{at, board_with, create_event, test_event};
#[allow(unused_imports)]
pub use logs::capture_warnings;
