//#![deny(missing_docs)] // TODO: Complete missing documentation and enable this option
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # tourism-entities
//!
//! Reusable, agnostic domain entities for the smart tourism API.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod circuit;
pub mod click;
pub mod destination;
pub mod email;
pub mod entity;
pub mod favorite;
pub mod geo;
pub mod id;
pub mod password;
pub mod poi;
pub mod preference;
pub mod review;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
