use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        let st = &self.tokens.to_string();
        let ot = &other.tokens.to_string();
        st == ot
    }
}

impl Eq for DeriveValue {}

// The raw `#[cmd(..)]` attributes, before they are checked against a field/struct.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IntermediateAttributes {
    pub singletons: HashSet<String>,
    pub pairs: HashMap<String, Vec<DeriveValue>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterType {
    Collection,
    Optional,
    Scalar,
    Switch,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveParameter {
    pub field_name: syn::Ident,
    pub parameter_type: ParameterType,
    pub name: DeriveValue,
    pub shorthands: Vec<DeriveValue>,
    pub description: Option<DeriveValue>,
    pub mandatory: bool,
    pub mandatory_if: Vec<DeriveValue>,
    pub mandatory_if_not: Vec<DeriveValue>,
    pub excludes: Vec<DeriveValue>,
    pub excludes_group: Option<Vec<DeriveValue>>,
    pub requires: Vec<DeriveValue>,
    pub sequential: Option<DeriveValue>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveDescriptor {
    pub struct_name: syn::Ident,
    pub program: DeriveValue,
    pub parameters: Vec<DeriveParameter>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveEnumerated {
    pub enum_name: syn::Ident,
    pub variants: Vec<syn::Ident>,
}
