//! Veritype Core - Type descriptors and marker matching
//!
//! This crate provides the data model underneath the veritype assertion
//! surface:
//! - [`TypeToken`] run-time type identities with display-name/origin split
//! - Marker (decoration) instances, values, and introspection sources
//! - [`MarkerConstraintSet`] write-once property constraints
//! - [`MarkerMatcher`] presence and constraint evaluation

pub mod constraint;
pub mod marker;
pub mod matcher;
pub mod token;

pub use constraint::MarkerConstraintSet;
pub use marker::{MarkerHandle, MarkerRegistry, MarkerSource, MarkerValue};
pub use matcher::{MarkerMatcher, PropertyMatch};
pub use token::{TokenParseError, TypeToken};
