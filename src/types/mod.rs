//! Column type registry
//!
//! Resolves canonical type identifiers (`Int32Type`,
//! `CompositeType(UTF8Type,LongType)`, registered custom types) into
//! [`DataType`] values.

mod errors;
mod parser;

pub use errors::{TypeParseError, TypeResult};
pub use parser::{DataType, TypeParser, MARSHAL_PACKAGE};
