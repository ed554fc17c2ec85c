// SPDX-License-Identifier: MPL-2.0
//! Centralized style functions.

pub mod switcher;
