// SPDX-License-Identifier: MPL-2.0
//! Internationalization support built on Fluent.

pub mod fluent;
