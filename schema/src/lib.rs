//! dbus-idlgen-schema
//!
//! This crate implements:
//!  1) The in-memory object model for D-Bus introspection XML
//!     (`Node` → `Interface` → `Method`/`Signal`/`Property` → `Arg`),
//!  2) The signature type tables and `map_signature` (D-Bus type
//!     signature → Rust type name).
//!
//! The model is pure data: the loader crate fills it in from an XML
//! document and code generators walk it. Nothing here does I/O.

pub mod sig;
pub mod types;

pub use sig::{map_signature, FALLBACK_TYPE};
pub use types::{Arg, DocString, Interface, Method, Node, Property, Signal};
