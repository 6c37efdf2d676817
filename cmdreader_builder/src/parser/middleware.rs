use std::env;

use crate::parser::interface::{ConsoleInterface, UserInterface};
use crate::parser::{tokenize, validate, ConfigError, Index, MakeError, OptionEntity, Printer, Resolver};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The compiled command line reader for the schema type `S`.
/// Built via [`Schema::build`](./struct.Schema.html#method.build) or [`CmdReader::of`].
///
/// A reader holds no per-invocation state: every `make` call starts from a fresh `S::default()`.
/// This means a single reader may be shared and used from several threads at once.
pub struct CmdReader<S> {
    program: Option<String>,
    entities: Vec<OptionEntity<S>>,
    index: Index,
}

impl<S> CmdReader<S> {
    pub(crate) fn new(
        program: Option<String>,
        entities: Vec<OptionEntity<S>>,
    ) -> Result<Self, ConfigError> {
        let index = validate(&entities)?;
        Ok(Self {
            program,
            entities,
            index,
        })
    }

    /// The program name, as shown on the synopsis line of the help text.
    pub fn program(&self) -> Option<&str> {
        self.program.as_deref()
    }

    /// The compiled entities, in declaration order.
    pub fn entities(&self) -> &[OptionEntity<S>] {
        &self.entities
    }

    /// Render the help text at the default width.
    pub fn help(&self) -> String {
        Printer::default().render(self.program(), &self.entities)
    }

    /// Render the help text at the width of the current terminal.
    pub fn help_terminal(&self) -> String {
        Printer::terminal().render(self.program(), &self.entities)
    }

    /// The full names of the entities, in declaration order.
    #[cfg(feature = "unit_test")]
    pub fn entity_names(&self) -> Vec<&str> {
        self.entities.iter().map(|e| e.full_name()).collect()
    }
}

impl<S: Default> CmdReader<S> {
    /// Make a populated `S` from the tokens, each of which is taken literally as a single argument.
    ///
    /// ### Example
    /// ```
    /// # use cmdreader_builder as cmdreader;
    /// use cmdreader::{Parameter, Scalar, Schema, Switch};
    ///
    /// #[derive(Debug, Default)]
    /// struct Args {
    ///     verbose: bool,
    ///     level: i32,
    /// }
    ///
    /// let reader = Schema::new()
    ///     .add(Parameter::new(Switch::new(|a: &mut Args| &mut a.verbose), "verbose").shorthand('v'))
    ///     .add(Parameter::new(Scalar::new(|a: &mut Args| &mut a.level), "level"))
    ///     .build_reader()
    ///     .unwrap();
    ///
    /// let args = reader.make_tokens(&["-v", "--level=3"]).unwrap();
    /// assert!(args.verbose);
    /// assert_eq!(args.level, 3);
    /// ```
    pub fn make_tokens(&self, tokens: &[&str]) -> Result<S, MakeError> {
        Resolver::new(&self.entities, &self.index).consume(tokens)
    }

    /// Make a populated `S` from a single raw command line, first split via [`tokenize`].
    pub fn make_str(&self, line: &str) -> Result<S, MakeError> {
        let tokens = tokenize(line);
        self.make_tokens(&tokens.iter().map(AsRef::as_ref).collect::<Vec<&str>>())
    }

    /// Make a populated `S` from owned (or otherwise string-like) arguments.
    pub fn make_args<I>(&self, args: I) -> Result<S, MakeError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let owned: Vec<I::Item> = args.into_iter().collect();
        self.make_tokens(&owned.iter().map(AsRef::as_ref).collect::<Vec<&str>>())
    }

    /// Make a populated `S` from the tokens, reporting any failure to the console.
    ///
    /// On failure, the error message and the help text are printed, and the exit code is returned.
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<S, i32> {
        self.invoke(tokens, &ConsoleInterface::default())
    }

    /// Make a populated `S` from the program's command line arguments (`std::env::args`).
    ///
    /// On failure, the error message and the help text are printed, and the program exits with code `1`.
    pub fn parse(&self) -> S {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(value) => value,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }

    fn invoke(&self, tokens: &[&str], user_interface: &(impl UserInterface + ?Sized)) -> Result<S, i32> {
        match self.make_tokens(tokens) {
            Ok(value) => Ok(value),
            Err(error) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Failed to make from {tokens:?}: {error:?}.");
                }

                user_interface.print_error(error);
                user_interface.print(self.help_terminal());
                Err(1)
            }
        }
    }
}

impl<S> std::fmt::Debug for CmdReader<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CmdReader")
            .field("program", &self.program)
            .field("entities", &self.entities)
            .finish_non_exhaustive()
    }
}
