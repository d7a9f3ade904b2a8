//! Scalar definitions as records, and the table of built-ins.
//!
//! A [`ScalarType`] bundles a name and description with the three
//! conversion directions. The five built-ins are process-lifetime statics;
//! custom scalars are declared the same way with [`ScalarType::new`].
//!
//! # Examples
//!
//! ```
//! use gql_scalars::{parse_literal, registry, Value};
//!
//! let int = registry::lookup_scalar("Int").unwrap();
//! assert_eq!(int.serialize(&Value::Float(7.0)), Ok(Value::Integer(7)));
//! assert_eq!(int.parse_literal(&parse_literal("99999999999").unwrap()), None);
//!
//! let names: Vec<_> = registry::specified_scalar_types().iter().map(|t| t.name()).collect();
//! assert_eq!(names, ["String", "Int", "Float", "Boolean", "ID"]);
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::{
    ast::Literal,
    error::CoercionError,
    scalars::{boolean, float, id, int, string},
    value::Value,
};

/// Output or input conversion of a runtime value.
pub type CoerceFn = fn(&Value) -> Result<Value, CoercionError>;

/// Literal conversion; `None` means the node is not this scalar.
pub type ParseLiteralFn = fn(&Literal) -> Option<Value>;

/// A named leaf type with its conversion rules.
///
/// Identity is the name: two definitions are the same scalar iff their names
/// match.
#[derive(Clone, Copy)]
pub struct ScalarType {
    name: &'static str,
    description: &'static str,
    serialize: CoerceFn,
    parse_value: CoerceFn,
    parse_literal: ParseLiteralFn,
}

impl ScalarType {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        serialize: CoerceFn,
        parse_value: CoerceFn,
        parse_literal: ParseLiteralFn,
    ) -> Self {
        ScalarType {
            name,
            description,
            serialize,
            parse_value,
            parse_literal,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Internal value to a value safe to return to a client.
    pub fn serialize(&self, value: &Value) -> Result<Value, CoercionError> {
        (self.serialize)(value).inspect_err(|e| {
            debug!(scalar = self.name, input = value.type_name(), error = %e, "serialize rejected value");
        })
    }

    /// Client-supplied runtime value (e.g. a variable) to an internal value.
    pub fn parse_value(&self, value: &Value) -> Result<Value, CoercionError> {
        (self.parse_value)(value).inspect_err(|e| {
            debug!(scalar = self.name, input = value.type_name(), error = %e, "parse_value rejected value");
        })
    }

    /// Literal node to an internal value, or `None` when the node's kind
    /// cannot represent this scalar.
    pub fn parse_literal(&self, node: &Literal) -> Option<Value> {
        let parsed = (self.parse_literal)(node);
        if parsed.is_none() {
            trace!(scalar = self.name, kind = %node.kind(), "literal not applicable");
        }
        parsed
    }

    pub fn is_specified(&self) -> bool {
        is_specified_scalar_type(self)
    }
}

impl PartialEq for ScalarType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ScalarType {}

impl fmt::Debug for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarType").field("name", &self.name).finish_non_exhaustive()
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

pub static STRING: ScalarType = ScalarType::new(
    "String",
    string::DESCRIPTION,
    string::serialize,
    string::parse_value,
    string::parse_literal_value,
);

pub static INT: ScalarType = ScalarType::new(
    "Int",
    int::DESCRIPTION,
    int::serialize,
    int::parse_value,
    int::parse_literal_value,
);

pub static FLOAT: ScalarType = ScalarType::new(
    "Float",
    float::DESCRIPTION,
    float::serialize,
    float::parse_value,
    float::parse_literal_value,
);

pub static BOOLEAN: ScalarType = ScalarType::new(
    "Boolean",
    boolean::DESCRIPTION,
    boolean::serialize,
    boolean::parse_value,
    boolean::parse_literal_value,
);

pub static ID: ScalarType = ScalarType::new(
    "ID",
    id::DESCRIPTION,
    id::serialize,
    id::parse_value,
    id::parse_literal_value,
);

/// The built-in scalars, in their published order.
pub static SPECIFIED_SCALAR_TYPES: [&ScalarType; 5] = [&STRING, &INT, &FLOAT, &BOOLEAN, &ID];

pub fn specified_scalar_types() -> &'static [&'static ScalarType] {
    &SPECIFIED_SCALAR_TYPES
}

/// Matches by name, so a custom definition that reuses a built-in name
/// still counts as specified.
pub fn is_specified_scalar_type(scalar: &ScalarType) -> bool {
    is_specified_scalar_name(scalar.name)
}

pub fn is_specified_scalar_name(name: &str) -> bool {
    lookup_scalar(name).is_some()
}

pub fn lookup_scalar(name: &str) -> Option<&'static ScalarType> {
    SPECIFIED_SCALAR_TYPES
        .iter()
        .copied()
        .find(|scalar| scalar.name == name)
}
