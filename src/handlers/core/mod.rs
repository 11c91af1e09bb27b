//! Core handler infrastructure.
//!
//! This module contains the fundamental types for the command system: the
//! alias registry, the permission gate, the handler trait and its context,
//! argument helpers, and the dispatcher.

pub mod args;
pub mod context;
mod dispatch;
pub mod entry;
pub mod permission;
pub mod registry;

pub use context::DispatchContext;
pub use entry::{CommandEntry, CommandHandler, CommandKind, SessionAccess};
pub use permission::{Clearance, Tier, Visibility, authorize};
pub use registry::{Registry, RegistryConflict, RegistryEntry};
