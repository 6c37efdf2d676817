//! Derive Api for `cmdreader` configuration.
//!
//! ### Getting Started
//! Use the derive Api by instrumenting a schema struct `S` with `#[derive(Default, Descriptor)]`.
//! This implements [`Descriptor`](../trait.Descriptor.html) for `S`, so that [`CmdReader::of`](../struct.CmdReader.html#method.of) compiles its reader.
//! Each named field of `S` becomes one parameter, with the field name as its full name.
//!
//! ```
//! use cmdreader::derive::*;
//! use cmdreader::CmdReader;
//!
//! #[derive(Debug, Default, Descriptor)]
//! #[cmd(program = "copier")]
//! struct Arguments {
//!     #[cmd(shorthand = 'r')]
//!     recursive: bool,
//!     #[cmd(mandatory, sequential = 1)]
//!     source: String,
//!     #[cmd(mandatory, sequential = 2)]
//!     target: String,
//! }
//!
//! let reader = CmdReader::<Arguments>::of().unwrap();
//! let arguments = reader.make_str("-r src dst").unwrap();
//! assert!(arguments.recursive);
//! assert_eq!(arguments.source, "src");
//! assert_eq!(arguments.target, "dst");
//! ```
//!
//! ### Parameter Configuration
//! The field type decides the kind of parameter:
//! ```console
//! Type                                        | Parameter
//! ----------------------------------------------------------------------------
//! bool                                        | Parameter::new(Switch::new(..), ..)
//! Vec<T>, VecDeque<T>, LinkedList<T>,         | Parameter::new(Collection::new(..), ..)
//!   HashSet<T>, BTreeSet<T>                   |
//! Option<C>, where C is one of the above      | Parameter::new(Collection::new(..), ..)
//! Option<T>                                   | Parameter::new(Optional::new(..), ..)
//! T                                           | Parameter::new(Scalar::new(..), ..)
//! ```
//!
//! An `Option<bool>` field is rejected: declare a `bool` for a presence flag.
//!
//! Each field may be configured further with `#[cmd(..)]` attributes, which may be combined as necessary.
//! Keys that take a list accept either a single string or an array of strings, and may be repeated.
//! * `#[cmd(name = "..")]` overrides the full name.
//! * `#[cmd(shorthand = 'c')]` adds a shorthand (repeatable).
//! * `#[cmd(description = "..")]` sets the description for the help text.
//! * `#[cmd(mandatory)]`, `#[cmd(mandatory_if = ..)]` and `#[cmd(mandatory_if_not = ..)]` make the parameter mandatory, always or conditionally.
//! * `#[cmd(excludes = ..)]` lists the parameters which may not be used along with this one.
//! * `#[cmd(excludes_group)]` or `#[cmd(excludes_group = ..)]` places the parameter in the default, or in the named, exclusion groups.
//! * `#[cmd(requires = ..)]` lists the parameters which must be used along with this one.
//! * `#[cmd(sequential)]` or `#[cmd(sequential = N)]` fills the parameter from the free-standing tokens, at order `0` or `N`.
//! * `#[cmd(skip)]` leaves the field out of the schema.
//!
//! The struct itself may set the program name with `#[cmd(program = "..")]`.
//! It defaults to the crate name.
//!
//! A partial example of these rules is provided as follows:
//! ```ignore
//! #[derive(Default, Descriptor)]
//! struct Arguments {
//!     #[cmd(name = "out", shorthand = 'o')]
//!     output: Option<String>,
//!     // the above generates:
//!     //  .add(Parameter::new(Optional::new(|target: &mut Arguments| &mut target.output), "out").shorthand('o'))
//!
//!     #[cmd(mandatory_if_not = ["input", "stdin"])]
//!     file: String,
//!     // the above generates:
//!     //  .add(Parameter::new(Scalar::new(|target: &mut Arguments| &mut target.file), "file").mandatory_if_not(["input", "stdin"]))
//!
//!     #[cmd(excludes_group)]
//!     quiet: bool,
//!     // the above generates:
//!     //  .add(Parameter::new(Switch::new(|target: &mut Arguments| &mut target.quiet), "quiet").excludes_group(Vec::<&str>::new()))
//! }
//! ```
//!
//! ### Enumerated
//! Instrument a unit-only enum with `#[derive(Enumerated)]` to use it as a scalar type.
//! Its values are matched by the exact variant name.
//!
//! ```
//! use cmdreader::derive::*;
//! use cmdreader::CmdReader;
//!
//! #[derive(Debug, PartialEq, Enumerated)]
//! enum Colour {
//!     Red,
//!     Green,
//! }
//!
//! #[derive(Debug, Default, Descriptor)]
//! struct Arguments {
//!     colour: Option<Colour>,
//! }
//!
//! let reader = CmdReader::<Arguments>::of().unwrap();
//! assert_eq!(reader.make_str("--colour Green").unwrap().colour, Some(Colour::Green));
//! assert!(reader.make_str("--colour green").is_err());
//! ```

pub use cmdreader_derive::*;
