//! `cmdreader` compiles a declarative option schema into a reusable command line reader.
//!
//! A schema is a plain struct `S: Default`, where each field describes one option of the Cli.
//! The schema is compiled once into a [`CmdReader`], which checks the schema as a whole (ex: unique names and shorthands).
//! The reader then turns any number of command lines into populated instances of `S`, enforcing the cross-field constraints along the way:
//! * *Mutual exclusion*: an option may exclude other options, or belong to an exclusion group of which at most one member may be used.
//! * *Conditional mandatoriness*: an option may be mandatory always, only if some other option is used, or only if none of its alternatives are used.
//! * *Dependencies*: an option may require other options to be used along with it.
//! * *Positional ordering*: sequential options are filled from the free-standing tokens, in order.
//! At most one of these may be a collection, which absorbs whatever tokens the others leave over.
//!
//! A compiled reader holds no per-invocation state, so it may be shared between threads and used concurrently.
//!
//! # Usage
//! This page includes a demo of using `cmdreader` (see also the `demos` directory of the source).
//!
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/demo_archiver_d.rs")]
//! ```
//! or equivalently via builder Api (this page):
//! ```no_run
#![doc = include_str!("../demos/demo_archiver_b.rs")]
//! ```
//!
//! Both of these generate the same Cli program:
//! ```console
//! $ archiver -f Zip
//! Parse error: missing mandatory parameter 'archive'.
//! usage: archiver [-vlf] archive [files...]
//!
//!   Sequential arguments:
//!     archive   The archive to write.
//!     files     The files to add.  This option may be used multiple times.
//!
//!   Optional arguments:
//!     --verbose    -v Print each file as it is added.
//!     --level=val  -l The compression level.  value is an integer.
//!     --format=val -f value is one of: Zip, Tar.
//!     --store         Store the files without compression.
//!
//! $ archiver -vl 9 backup.zip a.txt b.txt
//! Arguments { verbose: true, level: Some(9), format: None, store: false, archive: "backup.zip", files: ["a.txt", "b.txt"] }
//! Writing 'backup.zip' (None, compressed, level 9): a.txt b.txt
//!
//! $ archiver --format Zip --store backup.zip
//! Parse error: parameter 'store' cannot be used together with 'format' (exclusion group 'format').
//! <truncated>
//! ```
//!
//! # Builder Api
//! Configure `cmdreader` by starting with a [`Schema`] and `add`ing parameters.
//! Each [`Parameter`] takes a *field* and a full name.
//! The field is an accessor `fn(&mut S) -> &mut F` into the schema struct, which specifies:
//! * The underlying scalar type `T` of the parameter (ex: `i32`).
//! * Whether `T` is wrapped in a container type (ex: `Vec<T>` or `Option<T>`).
//! * Whether the parameter takes a value at all.
//!
//! ### Fields
//! * [`Scalar`]: a single value field `T`.
//! When used more than once on the command line, the last value wins.
//! * [`Optional`]: a single value field `Option<T>`, which stays `None` unless the parameter is used.
//! * [`Switch`]: a `bool` field which takes no value (ex: `--verbose`).
//! * [`Collection`]: a multi-value field, for any container that implements [Collectable](./prelude/trait.Collectable.html).
//! `cmdreader` provides `Collectable` for `Vec<T>`, `VecDeque<T>`, `LinkedList<T>`, `HashSet<T>` and `BTreeSet<T>`.
//! Wrapping any of these in `Option` constructs the container only once the first value arrives.
//!
//! The legal scalar types `T` are fixed: `i32`, `i64`, `i16`, `i8`, `f32`, `f64`, `bool`, `char`, `String`, and any [Enumerated](./prelude/trait.Enumerated.html) type.
//! Any other type is rejected at compile time.
//!
//! ### Parameters
//! * [`Parameter::shorthand`]: a single character alias, used as `-c`.
//! Shorthands without a value may be clustered (`-xy` is `-x -y`).
//! * [`Parameter::description`]: the description shown in the help text.
//! * [`Parameter::mandatory`], [`Parameter::mandatory_if`], [`Parameter::mandatory_if_not`]: when the parameter must be used.
//! * [`Parameter::excludes`], [`Parameter::excludes_group`]: which parameters may not be used along with this one.
//! * [`Parameter::requires`]: which parameters must be used along with this one.
//! * [`Parameter::sequential`]: fill the parameter from the free-standing tokens, at the given order.
//!
//! All cross references are by full name, and are case-insensitive.
//!
//! # Cli Semantics
//! `cmdreader` reads the Cli tokens according to the following set of rules.
//!
//! * `--name=value` and `--name value` set a parameter by its full name (case-insensitive).
//! The value is taken from the next token only if that token does not start with `-`.
//! * `-c` sets a parameter by its shorthand.
//! In a cluster such as `-xyb`, each shorthand that takes a value consumes the next whole token.
//! For example, `-xyb value` is equivalent to `-x -y -b value`.
//! * Any other token is free-standing, and distributed over the sequential parameters in order.
//! * Once every token is read, the constraints are checked in a fixed order: mandatory, excludes, exclusion groups, requires, mandatory-if, and finally mandatory-if-not.
//! The first violation is reported.
//!
//! # Errors
//! The kinds of failure are kept apart:
//! * [`ConfigError`]: the schema is malformed.
//! This is a programming mistake, reported when the reader is built.
//! * [`CommandLineError`]: the command line is invalid for the schema.
//! * [`ValueError`]: a value is malformed (ex: `--level=abc` for an integer).
//!
//! The `make` functions report the latter two as a [`MakeError`], while [`CmdReader::parse`] prints the error along with the help text, and exits.
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
//! * `tracing_debug`: Emit `tracing` debug events while compiling and reading.
pub mod derive;
pub use cmdreader_builder::*;
