//! dbus-idlgen-loader
//!
//! This crate implements:
//!  1) Decoding of D-Bus introspection XML into the `dbus-idlgen-schema`
//!     node tree (`parse_idl_file`),
//!  2) The `Idl` loader (file path → parsed tree plus logical name),
//!  3) Error types (`IdlError`).
//!
//! Decoding is permissive: unknown elements and attributes are skipped,
//! and semantically odd but well-formed documents parse without error.
//! Only unreadable files and malformed XML fail.

pub mod error;
pub mod loader;

pub use error::IdlError;
pub use loader::{parse_idl_file, Idl};
