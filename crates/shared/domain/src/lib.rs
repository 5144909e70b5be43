//! # Domain Models
//!
//! Pure types shared by every site crate: the headless document (`dom`), the events a
//! host feeds to behaviors (`event`), layout geometry, host capabilities, the behavior
//! contract (`registry`) and the server configuration.
//! Keep it lean: `serde` and `bitflags` only, no I/O.

pub mod capabilities;
pub mod config;
pub mod constants;
pub mod dom;
pub mod event;
pub mod geometry;
pub mod registry;
