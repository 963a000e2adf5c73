//! layered-table: layered key/value configuration from CSV sources
//!
//! An ordered list of two-column (`key`, `value`) CSV files is merged with
//! later-wins semantics into an immutable [`LayeredTable`]. Each cell is
//! coerced into a [`Value`]: a boolean, null, or the original string.

pub mod error;
pub mod key;
pub mod layers;
pub mod source;
pub mod table;
pub mod value;

pub use error::{Error, ParseErrorKind, Result};
pub use key::Key;
pub use layers::environment_sources;
pub use table::LayeredTable;
pub use value::{coerce, Value};
