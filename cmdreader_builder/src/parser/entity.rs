use crate::api::ValueError;
use crate::model::ScalarKind;
use crate::parser::{BoxedCapture, ConfigError};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OptionConfig {
    pub(crate) full_name: String,
    pub(crate) kind: ScalarKind,
    pub(crate) constants: Vec<&'static str>,
    pub(crate) collection: bool,
    pub(crate) parameterized: bool,
    pub(crate) shorthand: Vec<char>,
    pub(crate) description: Option<String>,
    pub(crate) sequential: Option<i32>,
    pub(crate) mandatory: bool,
    pub(crate) mandatory_if: Vec<String>,
    pub(crate) mandatory_if_not: Vec<String>,
    pub(crate) excludes: Vec<String>,
    pub(crate) excludes_group: Vec<String>,
    pub(crate) requires: Vec<String>,
}

impl OptionConfig {
    pub(crate) fn new(
        full_name: impl Into<String>,
        kind: ScalarKind,
        constants: Vec<&'static str>,
        collection: bool,
        parameterized: bool,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            kind,
            constants,
            collection,
            parameterized,
            shorthand: Vec::default(),
            description: None,
            sequential: None,
            mandatory: false,
            mandatory_if: Vec::default(),
            mandatory_if_not: Vec::default(),
            excludes: Vec::default(),
            excludes_group: Vec::default(),
            requires: Vec::default(),
        }
    }

    // A scoped mandatory (`mandatory_if`/`mandatory_if_not`) never makes the option unconditionally mandatory.
    fn is_mandatory(&self) -> bool {
        self.mandatory && self.mandatory_if.is_empty() && self.mandatory_if_not.is_empty()
    }

    fn sanity_check(&self) -> Result<(), String> {
        let mut seen = Vec::with_capacity(self.shorthand.len());

        for c in &self.shorthand {
            if *c == '-' {
                return Err("the dash '-' is not a legal shorthand".to_string());
            }

            if seen.contains(c) {
                return Err(format!("repeats the shorthand '{c}'"));
            }

            seen.push(*c);
        }

        if !self.parameterized && self.kind != ScalarKind::Boolean {
            return Err("a switch must be a boolean".to_string());
        }

        if !self.parameterized && self.is_mandatory() {
            return Err("a switch cannot be mandatory".to_string());
        }

        if self.sequential.is_some() && !self.shorthand.is_empty() {
            return Err("a sequential parameter cannot have shorthands".to_string());
        }

        if self.sequential.is_some() && !self.parameterized {
            return Err("a sequential parameter must take a value".to_string());
        }

        Ok(())
    }

    fn full_description(&self) -> String {
        let mut parts: Vec<String> = Vec::default();

        if let Some(description) = &self.description {
            if !description.is_empty() {
                parts.push(description.clone());
            }
        }

        if self.collection {
            parts.push("This option may be used multiple times.".to_string());
        }

        if self.parameterized {
            let hint = match self.kind {
                kind if kind.is_integral() => Some("value is an integer.".to_string()),
                kind if kind.is_floating() => Some("value is a floating point number.".to_string()),
                ScalarKind::Boolean => Some("value is 'true' or 'false'.".to_string()),
                ScalarKind::Character => Some("value is a single character.".to_string()),
                ScalarKind::Enum => Some(format!("value is one of: {}.", self.constants.join(", "))),
                _ => None,
            };

            if let Some(hint) = hint {
                parts.push(hint);
            }
        }

        parts.join("  ")
    }
}

/// The compiled, immutable description of one schema parameter.
///
/// Obtain these (read-only) via [`CmdReader::entities`](./struct.CmdReader.html#method.entities).
pub struct OptionEntity<S> {
    config: OptionConfig,
    full_description: String,
    field: BoxedCapture<S>,
}

impl<S> OptionEntity<S> {
    pub(crate) fn new(config: OptionConfig, field: BoxedCapture<S>) -> Result<Self, ConfigError> {
        if config.full_name.trim().is_empty() {
            return Err(ConfigError(
                "parameter names must not be empty.".to_string(),
            ));
        }

        config
            .sanity_check()
            .map_err(|message| ConfigError(format!("{message} (at '{}').", config.full_name)))?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Introspected {config:?}.");
        }

        let full_description = config.full_description();
        Ok(Self {
            config,
            full_description,
            field,
        })
    }

    pub(crate) fn capture(&self, target: &mut S, token: Option<&str>) -> Result<(), ValueError> {
        self.field.capture(target, token)
    }

    /// The name used in the `--name` form and in cross references.
    pub fn full_name(&self) -> &str {
        &self.config.full_name
    }

    /// The scalar kind of the value (or of each item, for a collection).
    pub fn kind(&self) -> ScalarKind {
        self.config.kind
    }

    /// Whether this parameter accepts any number of values.
    pub fn is_collection(&self) -> bool {
        self.config.collection
    }

    /// Whether this parameter takes a value (`false` only for switches).
    pub fn is_parameterized(&self) -> bool {
        self.config.parameterized
    }

    /// The shorthand characters, in declaration order.
    pub fn shorthand(&self) -> &[char] {
        &self.config.shorthand
    }

    /// The sequential order, if this parameter is matched by position.
    pub fn sequential(&self) -> Option<i32> {
        self.config.sequential
    }

    /// Whether this parameter must always be used.
    pub fn is_mandatory(&self) -> bool {
        self.config.is_mandatory()
    }

    /// Names of the parameters that make this one mandatory when used.
    pub fn mandatory_if(&self) -> &[String] {
        &self.config.mandatory_if
    }

    /// Names of the parameters of which at least one must be used, or else this one is mandatory.
    pub fn mandatory_if_not(&self) -> &[String] {
        &self.config.mandatory_if_not
    }

    /// Names of the parameters which may not be used together with this one.
    pub fn excludes(&self) -> &[String] {
        &self.config.excludes
    }

    /// The exclusion groups of this parameter.
    pub fn excludes_group(&self) -> &[String] {
        &self.config.excludes_group
    }

    /// Names of the parameters which must be used whenever this one is.
    pub fn requires(&self) -> &[String] {
        &self.config.requires
    }

    /// The user supplied description, if any.
    pub fn description(&self) -> Option<&str> {
        self.config.description.as_deref()
    }

    /// The description, followed by the hints derived from the parameter's type.
    pub fn full_description(&self) -> &str {
        &self.full_description
    }
}

impl<S> std::fmt::Debug for OptionEntity<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionEntity")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
