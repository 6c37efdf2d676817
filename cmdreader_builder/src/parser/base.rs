use thiserror::Error;

use crate::api::ValueError;

// We need a (dyn .. [ignoring T] ..) here in order to put all the fields of varying types T under one collection.
// In other words, we want the bottom of the object graph to include the types T, but up here we want to work across all T.
pub(crate) type BoxedCapture<S> = Box<dyn AnonymousCapturable<S> + Send + Sync>;

pub(crate) trait AnonymousCapturable<S> {
    fn capture(&self, target: &mut S, token: Option<&str>) -> Result<(), ValueError>;
}

/// The schema is malformed (ex: two parameters share a name).
///
/// This is a programming mistake in the schema, rather than a user mistake on the command line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// The command line is invalid for an otherwise valid schema.
///
/// Each variant displays as a human readable message, suitable to present back to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandLineError {
    /// A `--name` option which doesn't exist.
    #[error("Parse error: unknown option '{0}'.")]
    UnknownOption(String),
    /// A `-c` shorthand which doesn't exist.
    #[error("Parse error: unknown shorthand '{shorthand}' in '{token}'.")]
    UnknownShorthand {
        /// The unknown character.
        shorthand: char,
        /// The token containing it.
        token: String,
    },
    /// A `--name=` option with nothing after the equals sign.
    #[error("Parse error: expected a value after '=' in '{0}'.")]
    EmptyAssignment(String),
    /// A parameterized option without a value.
    #[error("Parse error: option '{0}' requires a value, but there is none.")]
    MissingValue(String),
    /// More free-standing tokens than sequential parameters.
    #[error("Parse error: too many free-standing arguments, starting from '{0}'.")]
    TooManyArguments(String),
    /// A mandatory parameter was not used.
    #[error("Parse error: missing mandatory parameter '{0}'.")]
    MissingMandatory(String),
    /// A parameter was used along with one of its excluded parameters.
    #[error("Parse error: parameter '{excluded}' cannot be used together with '{by}'.")]
    Excluded {
        /// The excluded parameter.
        excluded: String,
        /// The parameter declaring the exclusion.
        by: String,
    },
    /// Two parameters from the same exclusion group were used.
    #[error("Parse error: parameter '{excluded}' cannot be used together with '{by}' (exclusion group '{group}').")]
    GroupExcluded {
        /// The later parameter of the collision.
        excluded: String,
        /// The earlier parameter of the collision.
        by: String,
        /// The shared group.
        group: String,
    },
    /// A parameter was used without one of its required parameters.
    #[error("Parse error: parameter '{by}' requires that '{required}' is also used.")]
    Requires {
        /// The parameter declaring the requirement.
        by: String,
        /// The missing parameter.
        required: String,
    },
    /// A parameter is mandatory because another was used.
    #[error("Parse error: missing parameter '{name}', which is mandatory when using '{trigger}'.")]
    MandatoryIf {
        /// The missing parameter.
        name: String,
        /// The used parameter which makes it mandatory.
        trigger: String,
    },
    /// A parameter is mandatory because none of its alternatives were used.
    #[error("Parse error: missing parameter '{name}', which is mandatory unless using {}.", alternatives_message(.alternatives))]
    MandatoryIfNot {
        /// The missing parameter.
        name: String,
        /// The alternatives, any of which would suffice.
        alternatives: Vec<String>,
    },
}

fn alternatives_message(alternatives: &[String]) -> String {
    let quoted = alternatives
        .iter()
        .map(|a| format!("'{a}'"))
        .collect::<Vec<_>>()
        .join(", ");

    if alternatives.len() > 1 {
        format!("one of {quoted}")
    } else {
        quoted
    }
}

/// The failure of a single `make` call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MakeError {
    /// The command line is invalid.
    #[error(transparent)]
    CommandLine(#[from] CommandLineError),
    /// A value on the command line is malformed.
    #[error(transparent)]
    Value(#[from] ValueError),
}
