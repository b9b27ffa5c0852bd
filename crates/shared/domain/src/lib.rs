//! # Domain Models
//!
//! Pure types shared by every crate: configuration, table/tag constants, the
//! feature slice registry and the food donation vocabulary.
//! Keep it lean: no I/O, networking, or storage access here.

pub mod config;
pub mod constants;
pub mod food;
pub mod registry;
