//! Builder module for `cmdreader`.
//! See [documentation root](https://docs.rs/cmdreader/latest/cmdreader/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use model::*;
pub use parser::{
    squash, tokenize, CmdReader, CommandLineError, ConfigError, MakeError, OptionEntity, Printer,
};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
