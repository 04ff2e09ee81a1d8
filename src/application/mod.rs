// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports the notification core consumes from its host.
//!
//! # Modules
//!
//! - [`port`]: Port definitions (traits) for dependency inversion

pub mod port;
