use crate::api::{GenericCapturable, OptionValue, ValueError};
use crate::constant::DEFAULT_GROUP;
use crate::parser::{AnonymousCapturable, ConfigError, OptionConfig, OptionEntity};

pub(crate) struct AnonymousCapture<S, T> {
    field: Box<dyn GenericCapturable<S, T> + Send + Sync>,
}

impl<S, T> AnonymousCapture<S, T> {
    pub(crate) fn bind(field: impl GenericCapturable<S, T> + Send + Sync + 'static) -> Self {
        Self {
            field: Box::new(field),
        }
    }
}

impl<S, T> AnonymousCapturable<S> for AnonymousCapture<S, T> {
    fn capture(&self, target: &mut S, token: Option<&str>) -> Result<(), ValueError> {
        self.field.capture(target, token)
    }
}

pub(super) struct ParameterInner<S, T> {
    field: AnonymousCapture<S, T>,
    config: OptionConfig,
}

impl<S, T> std::fmt::Debug for ParameterInner<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let short = self
            .config
            .shorthand
            .iter()
            .map(|c| format!(" -{c},"))
            .collect::<String>();
        let position = match &self.config.sequential {
            Some(order) => format!(" #{order},"),
            None => "".to_string(),
        };
        let description = if let Some(d) = &self.config.description {
            format!(", {d}")
        } else {
            "".to_string()
        };

        write!(
            f,
            "Parameter[{t}, --{name},{short}{position} {kind}{description}]",
            t = std::any::type_name::<T>(),
            name = self.config.full_name,
            kind = self.config.kind,
        )
    }
}

impl<S: 'static, T: 'static> TryFrom<ParameterInner<S, T>> for OptionEntity<S> {
    type Error = ConfigError;

    fn try_from(value: ParameterInner<S, T>) -> Result<Self, Self::Error> {
        let ParameterInner { field, config } = value;
        OptionEntity::new(config, Box::new(field))
    }
}

/// A single option (or sequential argument) of the schema.
/// Used with [`Schema::add`](./struct.Schema.html#method.add).
///
/// The field determines the value type, and whether the option is a switch or a collection.
/// Everything else is declared through the chained methods.
pub struct Parameter<S, T>(ParameterInner<S, T>);

impl<S, T: OptionValue> Parameter<S, T> {
    /// Create a parameter, addressed on the command line as `--name`.
    ///
    /// ### Example
    /// ```
    /// # use cmdreader_builder as cmdreader;
    /// use cmdreader::{Parameter, Scalar, Switch};
    ///
    /// #[derive(Default)]
    /// struct Args {
    ///     level: i32,
    ///     verbose: bool,
    /// }
    ///
    /// Parameter::new(Scalar::new(|args: &mut Args| &mut args.level), "level");
    /// Parameter::new(Switch::new(|args: &mut Args| &mut args.verbose), "verbose").shorthand('v');
    /// ```
    pub fn new(
        field: impl GenericCapturable<S, T> + Send + Sync + 'static,
        name: impl Into<String>,
    ) -> Self {
        let config = OptionConfig::new(
            name,
            T::kind(),
            T::constants(),
            field.is_collection(),
            field.is_parameterized(),
        );
        Self(ParameterInner {
            field: AnonymousCapture::bind(field),
            config,
        })
    }
}

impl<S, T> Parameter<S, T> {
    /// Add a single character alias, used as `-c` (possibly clustered: `-abc`).
    /// May be repeated to declare several aliases.
    pub fn shorthand(self, shorthand: char) -> Self {
        let mut inner = self.0;
        inner.config.shorthand.push(shorthand);
        Self(inner)
    }

    /// Document the help message for this parameter.
    /// If repeated, only the final message will apply.
    ///
    /// We recommend letting the help printer wrap this text (ex: it is not recommended to use line breaks `'\n'`).
    pub fn description(self, description: impl Into<String>) -> Self {
        let mut inner = self.0;
        inner.config.description = Some(description.into());
        Self(inner)
    }

    /// Require this parameter to always be used.
    pub fn mandatory(self) -> Self {
        let mut inner = self.0;
        inner.config.mandatory = true;
        Self(inner)
    }

    /// Require this parameter whenever any of the named parameters is used.
    ///
    /// This replaces the unconditional requirement of [`Parameter::mandatory`].
    pub fn mandatory_if(self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut inner = self.0;
        inner.config.mandatory = true;
        inner
            .config
            .mandatory_if
            .extend(names.into_iter().map(Into::into));
        Self(inner)
    }

    /// Require this parameter unless at least one of the named parameters is used.
    ///
    /// This replaces the unconditional requirement of [`Parameter::mandatory`].
    pub fn mandatory_if_not(self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut inner = self.0;
        inner.config.mandatory = true;
        inner
            .config
            .mandatory_if_not
            .extend(names.into_iter().map(Into::into));
        Self(inner)
    }

    /// Forbid the named parameters from being used together with this one.
    pub fn excludes(self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut inner = self.0;
        inner
            .config
            .excludes
            .extend(names.into_iter().map(Into::into));
        Self(inner)
    }

    /// Place this parameter in exclusion groups: at most one parameter per group may be used.
    ///
    /// An empty list places the parameter in the `"default"` group.
    ///
    /// ### Example
    /// ```
    /// # use cmdreader_builder as cmdreader;
    /// use cmdreader::{Parameter, Switch};
    ///
    /// #[derive(Default)]
    /// struct Args {
    ///     zip: bool,
    ///     tar: bool,
    /// }
    ///
    /// Parameter::new(Switch::new(|args: &mut Args| &mut args.zip), "zip").excludes_group(["format"]);
    /// Parameter::new(Switch::new(|args: &mut Args| &mut args.tar), "tar").excludes_group(["format"]);
    /// ```
    pub fn excludes_group(self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut inner = self.0;
        let before = inner.config.excludes_group.len();
        inner
            .config
            .excludes_group
            .extend(ids.into_iter().map(Into::into));

        if inner.config.excludes_group.len() == before {
            inner.config.excludes_group.push(DEFAULT_GROUP.to_string());
        }

        Self(inner)
    }

    /// Require the named parameters to be used whenever this one is.
    pub fn requires(self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut inner = self.0;
        inner
            .config
            .requires
            .extend(names.into_iter().map(Into::into));
        Self(inner)
    }

    /// Match this parameter by position among the free-standing tokens.
    ///
    /// Sequential parameters are filled in ascending `order`.
    /// They may still be addressed explicitly as `--name`, but cannot have shorthands.
    pub fn sequential(self, order: i32) -> Self {
        let mut inner = self.0;
        inner.config.sequential = Some(order);
        Self(inner)
    }

    pub(super) fn consume(self) -> ParameterInner<S, T> {
        self.0
    }
}

impl<S, T> std::fmt::Debug for Parameter<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
