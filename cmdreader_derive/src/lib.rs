//! Derive macros for `cmdreader`.
//! See [documentation root](https://docs.rs/cmdreader/latest/cmdreader/index.html) for full details.
extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::{DeriveDescriptor, DeriveEnumerated};
use proc_macro::TokenStream;

/// Derive `cmdreader::Descriptor`, adding one parameter per named field.
///
/// The parameter kind follows the field type: `bool` is a switch, `Option<T>` is optional,
/// a `Vec`/`VecDeque`/`LinkedList`/`HashSet`/`BTreeSet` (optionally wrapped in `Option`) is a collection,
/// and anything else is a plain scalar.
///
/// Fields are configured with `#[cmd(..)]`:
/// * `name = ".."`, `shorthand = 'c'`, `description = ".."`
/// * `mandatory`, `mandatory_if = [..]`, `mandatory_if_not = [..]`
/// * `excludes = [..]`, `excludes_group` or `excludes_group = [..]`, `requires = [..]`
/// * `sequential` or `sequential = N`
/// * `skip`
///
/// The struct itself takes `#[cmd(program = "..")]`.
#[proc_macro_derive(Descriptor, attributes(cmd))]
pub fn descriptor(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveDescriptor::try_from(derive_input) {
        Ok(descriptor) => descriptor.generate().into(),
        Err(error) => error.to_compile_error().into(),
    }
}

/// Derive `cmdreader::prelude::Enumerated` for a unit-only enum.
#[proc_macro_derive(Enumerated)]
pub fn enumerated(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveEnumerated::try_from(derive_input) {
        Ok(enumerated) => enumerated.generate().into(),
        Err(error) => error.to_compile_error().into(),
    }
}
