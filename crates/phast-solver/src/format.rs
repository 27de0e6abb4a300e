//! Human-readable type rendering for diagnostics.
//!
//! Two verbosity levels keep diagnostic messages both concise and
//! precise: `TypeOnly` prints the bare shape name, `Value` additionally
//! renders the concrete value of constant (singleton-like) types and the
//! full key shape of known-shape arrays.

use std::fmt::Write as _;

use crate::types::{ArrayKey, Type};

/// Rendering verbosity for [`Type::describe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VerbosityLevel {
    /// Bare shape name: `string`, `array`, `Foo`.
    TypeOnly,
    /// Shape plus known values: `'c'`, `123`, `array{a: int}`.
    Value,
}

impl Type {
    /// Render this type for a diagnostic message.
    pub fn describe(&self, verbosity: VerbosityLevel) -> String {
        match self {
            Type::Integer => "int".to_string(),
            Type::Float => "float".to_string(),
            Type::Boolean => "bool".to_string(),
            Type::String => "string".to_string(),
            Type::Null => "null".to_string(),
            Type::Mixed => "mixed".to_string(),
            Type::Error(_) => "*ERROR*".to_string(),

            Type::ConstantInteger(value) => match verbosity {
                VerbosityLevel::TypeOnly => "int".to_string(),
                VerbosityLevel::Value => value.to_string(),
            },
            Type::ConstantFloat(value) => match verbosity {
                VerbosityLevel::TypeOnly => "float".to_string(),
                VerbosityLevel::Value => format_float(*value),
            },
            Type::ConstantBoolean(value) => match verbosity {
                VerbosityLevel::TypeOnly => "bool".to_string(),
                VerbosityLevel::Value => value.to_string(),
            },
            Type::ConstantString(value) => match verbosity {
                VerbosityLevel::TypeOnly => "string".to_string(),
                VerbosityLevel::Value => format!("'{value}'"),
            },

            Type::Array(array) => {
                if matches!(*array.key_type, Type::Mixed) && matches!(*array.value_type, Type::Mixed)
                {
                    return "array".to_string();
                }
                format!(
                    "array<{}, {}>",
                    array.key_type.describe(VerbosityLevel::TypeOnly),
                    array.value_type.describe(verbosity)
                )
            }
            Type::ConstantArray(constant) => match verbosity {
                VerbosityLevel::TypeOnly => "array".to_string(),
                VerbosityLevel::Value => {
                    let mut out = String::from("array{");
                    for (index, (key, value)) in constant.shape.iter().enumerate() {
                        if index > 0 {
                            out.push_str(", ");
                        }
                        let _ = write!(
                            out,
                            "{}: {}",
                            format_key(key),
                            value.describe(VerbosityLevel::TypeOnly)
                        );
                    }
                    out.push('}');
                    out
                }
            },

            Type::Object(object) => object
                .class_name
                .clone()
                .unwrap_or_else(|| "object".to_string()),

            Type::Union(union) => join_members(union.members(), verbosity, false),
            Type::BenevolentUnion(union) => join_members(union.members(), verbosity, true),
        }
    }
}

fn join_members(members: &[Type], verbosity: VerbosityLevel, parenthesize: bool) -> String {
    let joined = members
        .iter()
        .map(|member| member.describe(verbosity))
        .collect::<Vec<_>>()
        .join("|");
    if parenthesize {
        format!("({joined})")
    } else {
        joined
    }
}

fn format_key(key: &ArrayKey) -> String {
    match key {
        ArrayKey::Integer(value) => value.to_string(),
        ArrayKey::String(value) => {
            if is_identifier_like(value) {
                value.clone()
            } else {
                format!("'{value}'")
            }
        }
    }
}

fn is_identifier_like(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Floats always render with a decimal point so `1.0` is distinguishable
/// from the integer `1`.
fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
