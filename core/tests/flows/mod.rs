// SPDX-FileCopyrightText: 2026 EventBoard Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the creation, move/resize and detail/delete flows.

mod creation;
mod delete;
mod misuse;
mod reschedule;
