//! # Domain Models
//!
//! This crate contains the pure data types a regional monitor variant is built from,
//! with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, networking, or heavy logic, just data and simple lookups.
//!
//! Every catalog type borrows `'static` data so a whole variant can be declared as a
//! `static` item and shared by any number of threads without synchronisation.

pub mod alerts;
pub mod config;
pub mod features;
pub mod feed;
pub mod geo;
pub mod panels;
pub mod priority;
pub mod region;
pub mod registry;
pub mod relevance;
pub mod variant;
