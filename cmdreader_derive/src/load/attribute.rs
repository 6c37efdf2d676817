use crate::model::{DeriveValue, IntermediateAttributes};
use quote::ToTokens;

const ATTRIBUTE: &str = "cmd";

impl TryFrom<&syn::Attribute> for IntermediateAttributes {
    type Error = syn::Error;

    fn try_from(value: &syn::Attribute) -> Result<Self, Self::Error> {
        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;
        let mut attributes = IntermediateAttributes::default();

        for expression in value.parse_args_with(attributes_parser)? {
            match expression {
                syn::Expr::Assign(assignment) => {
                    let key = assignment.left.to_token_stream().to_string();
                    let values = attributes.pairs.entry(key).or_default();

                    // Arrays are flattened, so `key = ["a", "b"]` is the same as `key = "a", key = "b"`.
                    match *assignment.right {
                        syn::Expr::Array(array) => {
                            values.extend(array.elems.iter().map(|element| DeriveValue {
                                tokens: element.to_token_stream(),
                            }));
                        }
                        right => values.push(DeriveValue {
                            tokens: right.to_token_stream(),
                        }),
                    }
                }
                syn::Expr::Path(path) if path.path.get_ident().is_some() => {
                    attributes
                        .singletons
                        .insert(path.path.to_token_stream().to_string());
                }
                other => {
                    return Err(syn::Error::new_spanned(
                        &other,
                        format!(
                            "Invalid - unparseable attribute `{}`.",
                            other.to_token_stream()
                        ),
                    ));
                }
            };
        }

        Ok(attributes)
    }
}

impl IntermediateAttributes {
    /// Merge every `#[cmd(..)]` attribute amongst `attributes`, ignoring all others.
    pub(crate) fn load(attributes: &[syn::Attribute]) -> Result<Self, syn::Error> {
        let mut merged = IntermediateAttributes::default();

        for attribute in attributes {
            if attribute.path().is_ident(ATTRIBUTE) {
                let IntermediateAttributes { singletons, pairs } =
                    IntermediateAttributes::try_from(attribute)?;
                merged.singletons.extend(singletons);

                for (key, values) in pairs {
                    merged.pairs.entry(key).or_default().extend(values);
                }
            }
        }

        Ok(merged)
    }

    /// Fail on any key outside the `singletons` and `pairs` allowed.
    pub(crate) fn allow(
        &self,
        span: proc_macro2::Span,
        singletons: &[&str],
        pairs: &[&str],
    ) -> Result<(), syn::Error> {
        for key in &self.singletons {
            if !singletons.contains(&key.as_str()) {
                return Err(syn::Error::new(
                    span,
                    format!("Invalid - unknown attribute `#[{ATTRIBUTE}({key})]`."),
                ));
            }
        }

        for key in self.pairs.keys() {
            if !pairs.contains(&key.as_str()) {
                return Err(syn::Error::new(
                    span,
                    format!("Invalid - unknown attribute `#[{ATTRIBUTE}({key} = ..)]`."),
                ));
            }
        }

        Ok(())
    }

    /// The value of a key which may appear at most once.
    pub(crate) fn single(
        &self,
        span: proc_macro2::Span,
        key: &str,
    ) -> Result<Option<DeriveValue>, syn::Error> {
        match self.pairs.get(key).map(Vec::as_slice) {
            None | Some([]) => Ok(None),
            Some([value]) => Ok(Some(value.clone())),
            Some(_) => Err(syn::Error::new(
                span,
                format!("Invalid - attribute `#[{ATTRIBUTE}({key} = ..)]` may only be given once."),
            )),
        }
    }

    pub(crate) fn list(&self, key: &str) -> Vec<DeriveValue> {
        self.pairs.get(key).cloned().unwrap_or_default()
    }
}
