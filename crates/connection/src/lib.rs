//! # RoveFS Connection Contract
//!
//! This crate defines the contract between the RoveFS explorer and whatever
//! transport actually talks to the remote device. It contains no transport
//! code itself.
//!
//! ## Overview
//!
//! - **Entry Types**: [`DirEntry`] and [`EntryType`], the listing results a
//!   connection hands back to the explorer
//! - **Error Taxonomy**: [`DeviceError`], distinguishing "no connection" from
//!   "the device refused" from "local I/O failed"
//! - **Capability Trait**: [`DeviceConnection`], the blocking operations a
//!   transport must provide (directory listing, file read, delete,
//!   decrypt-and-read)
//!
//! Concrete transports (serial bridges, TCP payloads, test doubles) implement
//! [`DeviceConnection`]; the explorer crate consumes it and never sees the
//! wire.
//!
//! ## Modules
//!
//! - [`entry`]: directory entry types
//! - [`error`]: error types
//! - [`device`]: the `DeviceConnection` trait

pub mod device;
pub mod entry;
pub mod error;

pub use device::DeviceConnection;
pub use entry::{DirEntry, EntryType};
pub use error::{DeviceError, Result};
