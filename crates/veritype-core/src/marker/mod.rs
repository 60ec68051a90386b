//! Marker (decoration) model: values, instances, and introspection sources.

mod handle;
mod source;
mod value;

pub use handle::MarkerHandle;
pub use source::{MarkerRegistry, MarkerSource};
pub use value::MarkerValue;
