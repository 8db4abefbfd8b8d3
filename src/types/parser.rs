//! Parser for canonical type identifiers
//!
//! Accepted forms:
//! - builtin names, optionally qualified with [`MARSHAL_PACKAGE`]
//! - `ReversedType(T)` with exactly one parameter
//! - `CompositeType(T1,T2,...)` with at least one parameter
//! - names registered as custom types

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use super::errors::{TypeParseError, TypeResult};

/// Package prefix accepted in front of builtin type names
pub const MARSHAL_PACKAGE: &str = "org.apache.cassandra.db.marshal.";

/// Deepest accepted nesting of parameterised types
pub const MAX_TYPE_DEPTH: usize = 32;

static BUILTIN_PARSER: OnceLock<TypeParser> = OnceLock::new();

/// A resolved column type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    Ascii,
    Long,
    Bytes,
    Boolean,
    CounterColumn,
    Decimal,
    Double,
    Float,
    Int32,
    Utf8,
    Date,
    Uuid,
    TimeUuid,
    LexicalUuid,
    Integer,
    /// Wraps a type with reversed comparison order
    Reversed(Box<DataType>),
    /// Ordered tuple of component types
    Composite(Vec<DataType>),
    /// User-registered type, identified by its full name
    Custom(String),
}

impl DataType {
    fn from_builtin_name(name: &str) -> Option<Self> {
        let data_type = match name {
            "AsciiType" => DataType::Ascii,
            "LongType" => DataType::Long,
            "BytesType" => DataType::Bytes,
            "BooleanType" => DataType::Boolean,
            "CounterColumnType" => DataType::CounterColumn,
            "DecimalType" => DataType::Decimal,
            "DoubleType" => DataType::Double,
            "FloatType" => DataType::Float,
            "Int32Type" => DataType::Int32,
            "UTF8Type" => DataType::Utf8,
            "DateType" => DataType::Date,
            "UUIDType" => DataType::Uuid,
            "TimeUUIDType" => DataType::TimeUuid,
            "LexicalUUIDType" => DataType::LexicalUuid,
            "IntegerType" => DataType::Integer,
            _ => return None,
        };
        Some(data_type)
    }

    /// Canonical identifier without package prefix
    pub fn class_name(&self) -> String {
        match self {
            DataType::Ascii => "AsciiType".into(),
            DataType::Long => "LongType".into(),
            DataType::Bytes => "BytesType".into(),
            DataType::Boolean => "BooleanType".into(),
            DataType::CounterColumn => "CounterColumnType".into(),
            DataType::Decimal => "DecimalType".into(),
            DataType::Double => "DoubleType".into(),
            DataType::Float => "FloatType".into(),
            DataType::Int32 => "Int32Type".into(),
            DataType::Utf8 => "UTF8Type".into(),
            DataType::Date => "DateType".into(),
            DataType::Uuid => "UUIDType".into(),
            DataType::TimeUuid => "TimeUUIDType".into(),
            DataType::LexicalUuid => "LexicalUUIDType".into(),
            DataType::Integer => "IntegerType".into(),
            DataType::Reversed(inner) => format!("ReversedType({})", inner.class_name()),
            DataType::Composite(components) => {
                let names: Vec<String> = components.iter().map(|c| c.class_name()).collect();
                format!("CompositeType({})", names.join(","))
            }
            DataType::Custom(name) => name.clone(),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class_name())
    }
}

/// Type registry: builtin types plus any registered custom types.
#[derive(Debug, Clone, Default)]
pub struct TypeParser {
    custom: HashSet<String>,
}

impl TypeParser {
    /// Creates a registry that knows only the builtin types
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared registry with builtin types only
    pub fn builtin() -> &'static TypeParser {
        BUILTIN_PARSER.get_or_init(TypeParser::new)
    }

    /// Registers a custom type under its full name
    pub fn register_custom(&mut self, name: impl Into<String>) {
        self.custom.insert(name.into());
    }

    /// Resolves a canonical type identifier
    pub fn parse(&self, input: &str) -> TypeResult<DataType> {
        check_nesting(input)?;
        self.parse_at(input)
    }

    fn parse_at(&self, input: &str) -> TypeResult<DataType> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(TypeParseError::malformed(input, "empty type name"));
        }

        let (name, params) = split_parameters(trimmed)?;
        check_identifier(trimmed, name)?;

        let Some(params) = params else {
            return self.parse_simple(name);
        };

        let bare = name.strip_prefix(MARSHAL_PACKAGE).unwrap_or(name);
        match bare {
            "ReversedType" => {
                if params.len() != 1 {
                    return Err(TypeParseError::malformed(
                        trimmed,
                        format!("ReversedType takes 1 parameter, got {}", params.len()),
                    ));
                }
                let inner = self.parse_at(params[0])?;
                Ok(DataType::Reversed(Box::new(inner)))
            }
            "CompositeType" => {
                let components = params
                    .into_iter()
                    .map(|p| self.parse_at(p))
                    .collect::<TypeResult<Vec<_>>>()?;
                Ok(DataType::Composite(components))
            }
            _ => Err(TypeParseError::malformed(
                trimmed,
                format!("'{}' does not take parameters", bare),
            )),
        }
    }

    fn parse_simple(&self, name: &str) -> TypeResult<DataType> {
        if self.custom.contains(name) {
            return Ok(DataType::Custom(name.to_string()));
        }

        let bare = name.strip_prefix(MARSHAL_PACKAGE).unwrap_or(name);
        DataType::from_builtin_name(bare).ok_or_else(|| TypeParseError::UnknownType(name.into()))
    }
}

/// Rejects inputs nested deeper than [`MAX_TYPE_DEPTH`] in one linear scan,
/// before any recursive descent.
fn check_nesting(input: &str) -> TypeResult<()> {
    let mut depth = 0usize;
    for c in input.chars() {
        match c {
            '(' => {
                depth += 1;
                if depth > MAX_TYPE_DEPTH {
                    return Err(TypeParseError::malformed(
                        truncated(input),
                        "type nesting too deep",
                    ));
                }
            }
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

fn truncated(input: &str) -> String {
    const SHOWN: usize = 64;
    match input.char_indices().nth(SHOWN) {
        Some((end, _)) => format!("{}...", &input[..end]),
        None => input.to_string(),
    }
}

/// Splits `Name(a,b(c),d)` into `Name` and its top-level parameters.
fn split_parameters(input: &str) -> TypeResult<(&str, Option<Vec<&str>>)> {
    let Some(open) = input.find('(') else {
        if input.contains(')') {
            return Err(TypeParseError::malformed(input, "unbalanced parentheses"));
        }
        return Ok((input, None));
    };

    if !input.ends_with(')') {
        return Err(TypeParseError::malformed(input, "unbalanced parentheses"));
    }

    let inner = &input[open + 1..input.len() - 1];
    let mut params = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;

    for (i, c) in inner.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return Err(TypeParseError::malformed(input, "unbalanced parentheses"));
                }
            }
            ',' if depth == 0 => {
                params.push(inner[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(TypeParseError::malformed(input, "unbalanced parentheses"));
    }
    params.push(inner[start..].trim());

    if params.iter().any(|p| p.is_empty()) {
        return Err(TypeParseError::malformed(input, "empty type parameter"));
    }

    Ok((input[..open].trim(), Some(params)))
}

fn check_identifier(input: &str, name: &str) -> TypeResult<()> {
    if name.is_empty() {
        return Err(TypeParseError::malformed(input, "missing type name"));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$')))
    {
        return Err(TypeParseError::malformed(
            input,
            format!("invalid character '{}' in type name", bad),
        ));
    }
    Ok(())
}
