use crate::api::Parameter;
use crate::parser::{CmdReader, ConfigError, OptionEntity};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The declarative option schema for the type `S`.
///
/// ### Example
/// ```
/// # use cmdreader_builder as cmdreader;
/// use cmdreader::{Parameter, Scalar, Schema};
///
/// #[derive(Default)]
/// struct Args {
///     name: String,
/// }
///
/// let reader = Schema::new()
///     .program("program")
///     .add(Parameter::new(Scalar::new(|a: &mut Args| &mut a.name), "name").mandatory())
///     // Configure with Schema::add.
///     .build();
/// assert_eq!(reader.make_tokens(&["--name", "abc"]).unwrap().name, "abc");
/// ```
pub struct Schema<S> {
    program: Option<String>,
    entities: Vec<OptionEntity<S>>,
    deferred_error: Option<ConfigError>,
}

impl<S> Default for Schema<S> {
    fn default() -> Self {
        Self {
            program: None,
            entities: Vec::default(),
            deferred_error: None,
        }
    }
}

impl<S: 'static> Schema<S> {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the program name, shown on the synopsis line of the help text.
    pub fn program(mut self, name: impl Into<String>) -> Self {
        self.program = Some(name.into());
        self
    }

    /// Add a parameter to the schema.
    ///
    /// Parameters keep their declaration order (ex: in the help text).
    /// A malformed parameter surfaces as a [`ConfigError`] once the reader is built.
    pub fn add<T: 'static>(mut self, parameter: Parameter<S, T>) -> Self {
        match OptionEntity::try_from(parameter.consume()) {
            Ok(entity) => self.entities.push(entity),
            Err(error) => {
                // Only the first error is reported.
                if self.deferred_error.is_none() {
                    self.deferred_error = Some(error);
                }
            }
        }

        self
    }

    /// Build the reader, checking the schema as a whole.
    pub fn build_reader(self) -> Result<CmdReader<S>, ConfigError> {
        if let Some(error) = self.deferred_error {
            return Err(error);
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Building reader for {:?} with {} parameters.",
                self.program,
                self.entities.len()
            );
        }

        CmdReader::new(self.program, self.entities)
    }

    /// Build the reader.
    ///
    /// A malformed schema is a programming mistake: its error is printed and the program exits with code `1`.
    /// Use [`Schema::build_reader`] to handle the [`ConfigError`] instead.
    pub fn build(self) -> CmdReader<S> {
        match self.build_reader() {
            Ok(reader) => reader,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}

/// Behaviour for a type to describe its own command line schema.
///
/// Typically derived with `#[derive(Descriptor)]`, which adds one parameter per field.
pub trait Descriptor: Default + Sized + 'static {
    /// Add this type's parameters to the schema.
    fn describe(schema: Schema<Self>) -> Schema<Self>;
}

impl<S: Descriptor> CmdReader<S> {
    /// Compile the reader for a [`Descriptor`] type.
    pub fn of() -> Result<Self, ConfigError> {
        S::describe(Schema::new()).build_reader()
    }
}
