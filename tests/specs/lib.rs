// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioural specs for the `hd` binary.
//!
//! The specs live under `cli/` and are compiled as integration tests of the
//! `helpdesk` crate, which owns the binary they drive.
