//! # nis-core
//!
//! Core types and the merge-and-normalize pipeline for nextinspace.
//!
//! This crate has no I/O. It provides:
//! - Record types for upcoming events, launches, and launch vehicles
//! - A total-order date type where an unknown date sorts before every real one
//! - Safe nested field extraction over untyped JSON payloads
//! - Normalization of Launch Library 2 payloads into records
//! - A bounded two-way merge of date-sorted sequences

pub mod dates;
pub mod entities;
pub mod errors;
pub mod extract;
pub mod merge;
pub mod normalize;

pub use dates::EventDate;
pub use entities::{Event, ItemKind, Launch, SpaceItem, Vehicle};
pub use errors::NormalizeError;
