//! Veritype - Fluent assertions over run-time type descriptors
//!
//! Assert that a type identity is (or is not) an expected type, and that it
//! is (or is not) decorated with a metadata marker, optionally with
//! property-level constraints. Failures are rendered from message templates
//! and reported out-of-band through a [`FailureSink`]; the fluent chain
//! continues regardless of outcome.
//!
//! # Example
//!
//! ```rust
//! use veritype::prelude::*;
//!
//! let order = TypeToken::new("api::Order", "shop");
//! let audited = TypeToken::new("markers::Audited", "policy");
//!
//! let registry = MarkerRegistry::new().with_marker(
//!     order.clone(),
//!     MarkerHandle::new(audited.clone()).with_property("level", 2),
//! );
//!
//! let mut sink = CollectingSink::new();
//! TypeVerifier::new(order, &registry, &mut sink)
//!     .is_decorated_with(&audited, "orders are regulated")
//!     .is_decorated_with_matching(
//!         &audited,
//!         &MarkerConstraintSet::new().with("level", 2),
//!         Reason::none(),
//!     );
//! assert!(sink.is_empty());
//! ```

mod message;
mod reason;
mod verification;
mod verifier;

#[cfg(test)]
mod tests;

pub use reason::Reason;
pub use verification::{CollectingSink, FailureSink, PanicSink};
pub use verifier::TypeVerifier;

// Descriptor model
pub use veritype_core::{
    MarkerConstraintSet, MarkerHandle, MarkerMatcher, MarkerRegistry, MarkerSource, MarkerValue,
    PropertyMatch, TokenParseError, TypeToken,
};

pub mod prelude {
    //! Everything needed to write type assertions.
    pub use super::{
        CollectingSink, FailureSink, MarkerConstraintSet, MarkerHandle, MarkerRegistry,
        MarkerSource, MarkerValue, PanicSink, Reason, TypeToken, TypeVerifier,
    };
}
