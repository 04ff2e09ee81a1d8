// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value types with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`notification`]: Notification value objects ([`AutoDismiss`](notification::AutoDismiss))

pub mod diagnostics;
pub mod notification;
