use thiserror::Error;

use crate::constant::{FALSE_ALIASES, TRUE_ALIASES};
use crate::model::ScalarKind;
use crate::prelude::Enumerated;

/// A malformed value: the token does not describe a value of the expected scalar kind.
///
/// This is distinct from a [`CommandLineError`](./enum.CommandLineError.html), which describes an illegal combination of options.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The token is not a number of the expected kind.
    #[error("Value error: '{token}' is not a valid {kind}.")]
    Number {
        /// The offending token.
        token: String,
        /// The expected numeric kind.
        kind: ScalarKind,
    },
    /// The token is not a recognized boolean alias.
    #[error("Value error: '{0}' is not 'true' or 'false'.")]
    Boolean(String),
    /// The token is not one of the enumerated constants.
    #[error("Value error: '{token}' is not one of: {}.", .constants.join(", "))]
    Enum {
        /// The offending token.
        token: String,
        /// The legal constant names.
        constants: Vec<&'static str>,
    },
}

/// Behaviour to convert a raw command line token into a scalar value.
///
/// Implemented for the fixed set of legal scalar types, plus every [`Enumerated`] type.
/// A `None` token means the option was present without any value.
pub trait OptionValue: Sized {
    /// The scalar kind this type represents.
    fn kind() -> ScalarKind;

    /// Convert the token into a value.
    fn coerce(token: Option<&str>) -> Result<Self, ValueError>;

    /// The legal constant names, for enumerated kinds.
    fn constants() -> Vec<&'static str> {
        Vec::default()
    }
}

macro_rules! numeric_value {
    ($type:ty, $kind:expr) => {
        impl OptionValue for $type {
            fn kind() -> ScalarKind {
                $kind
            }

            fn coerce(token: Option<&str>) -> Result<Self, ValueError> {
                let token = token.unwrap_or_default();
                token.parse::<$type>().map_err(|_| ValueError::Number {
                    token: token.to_string(),
                    kind: $kind,
                })
            }
        }
    };
}

numeric_value!(i32, ScalarKind::Integer);
numeric_value!(i64, ScalarKind::Long);
numeric_value!(i16, ScalarKind::Short);
numeric_value!(i8, ScalarKind::Byte);
numeric_value!(f32, ScalarKind::Float);
numeric_value!(f64, ScalarKind::Double);

impl OptionValue for bool {
    fn kind() -> ScalarKind {
        ScalarKind::Boolean
    }

    fn coerce(token: Option<&str>) -> Result<Self, ValueError> {
        match token {
            None => Ok(true),
            Some(token) => {
                let lowered = token.to_lowercase();

                if TRUE_ALIASES.contains(&lowered.as_str()) {
                    Ok(true)
                } else if FALSE_ALIASES.contains(&lowered.as_str()) {
                    Ok(false)
                } else {
                    Err(ValueError::Boolean(token.to_string()))
                }
            }
        }
    }
}

impl OptionValue for char {
    fn kind() -> ScalarKind {
        ScalarKind::Character
    }

    fn coerce(token: Option<&str>) -> Result<Self, ValueError> {
        // Only the first character counts.
        Ok(token.and_then(|t| t.chars().next()).unwrap_or('\0'))
    }
}

impl OptionValue for String {
    fn kind() -> ScalarKind {
        ScalarKind::String
    }

    fn coerce(token: Option<&str>) -> Result<Self, ValueError> {
        Ok(token.unwrap_or_default().to_string())
    }
}

impl<E: Enumerated> OptionValue for E {
    fn kind() -> ScalarKind {
        ScalarKind::Enum
    }

    fn coerce(token: Option<&str>) -> Result<Self, ValueError> {
        let token = token.unwrap_or_default();
        E::from_constant(token).ok_or_else(|| ValueError::Enum {
            token: token.to_string(),
            constants: E::constants().to_vec(),
        })
    }

    fn constants() -> Vec<&'static str> {
        E::constants().to_vec()
    }
}

/// Behaviour to capture an explicit generic type T from an input token into the schema `S`.
///
/// We use this at the bottom of the reader object graph so the compiler can maintain each field's type.
#[doc(hidden)]
pub trait GenericCapturable<S, T> {
    /// Capture the token (if any) into the field of `target`.
    fn capture(&self, target: &mut S, token: Option<&str>) -> Result<(), ValueError>;

    /// Whether the field accepts more than one value.
    fn is_collection(&self) -> bool {
        false
    }

    /// Whether the field requires a value token (false only for presence flags).
    fn is_parameterized(&self) -> bool {
        true
    }
}
