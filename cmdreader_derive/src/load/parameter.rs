use crate::load::incompatible_error;
use crate::model::{DeriveParameter, DeriveValue, IntermediateAttributes, ParameterType};
use proc_macro2::Literal;
use quote::ToTokens;
use syn::ext::IdentExt;

const SINGLETONS: [&str; 4] = ["mandatory", "excludes_group", "sequential", "skip"];
const PAIRS: [&str; 9] = [
    "name",
    "shorthand",
    "description",
    "mandatory_if",
    "mandatory_if_not",
    "excludes",
    "excludes_group",
    "requires",
    "sequential",
];
const COLLECTIONS: [&str; 5] = ["Vec", "VecDeque", "LinkedList", "HashSet", "BTreeSet"];

impl DeriveParameter {
    /// Whether the field opts out of the schema via `#[cmd(skip)]`.
    pub(crate) fn skipped(field: &syn::Field) -> Result<bool, syn::Error> {
        Ok(IntermediateAttributes::load(&field.attrs)?
            .singletons
            .contains("skip"))
    }
}

impl TryFrom<&syn::Field> for DeriveParameter {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let field_name = value.ident.clone().ok_or_else(|| {
            syn::Error::new_spanned(value, "Invalid - parameters require named fields.")
        })?;
        let attributes = IntermediateAttributes::load(&value.attrs)?;
        attributes.allow(field_name.span(), &SINGLETONS, &PAIRS)?;
        let parameter_type = parameter_type(&value.ty)?;

        let name = match attributes.single(field_name.span(), "name")? {
            Some(name) => name,
            None => DeriveValue {
                tokens: Literal::string(&field_name.unraw().to_string()).into_token_stream(),
            },
        };
        let mandatory_if = attributes.list("mandatory_if");
        let mandatory_if_not = attributes.list("mandatory_if_not");

        // Only an unconditional `mandatory` conflicts with a switch.
        if attributes.singletons.contains("mandatory") && parameter_type == ParameterType::Switch {
            return Err(incompatible_error(&field_name, "mandatory", "bool"));
        }

        let mandatory = attributes.singletons.contains("mandatory")
            || !mandatory_if.is_empty()
            || !mandatory_if_not.is_empty();

        let excludes_group = if attributes.singletons.contains("excludes_group") {
            if attributes.pairs.contains_key("excludes_group") {
                return Err(incompatible_error(
                    &field_name,
                    "excludes_group",
                    "excludes_group = ..",
                ));
            }

            Some(Vec::default())
        } else {
            attributes.pairs.get("excludes_group").cloned()
        };

        let sequential = match (
            attributes.singletons.contains("sequential"),
            attributes.single(field_name.span(), "sequential")?,
        ) {
            (true, Some(_)) => {
                return Err(incompatible_error(
                    &field_name,
                    "sequential",
                    "sequential = ..",
                ));
            }
            (true, None) => Some(DeriveValue {
                tokens: Literal::i32_unsuffixed(0).into_token_stream(),
            }),
            (false, order) => order,
        };

        if sequential.is_some() && parameter_type == ParameterType::Switch {
            return Err(incompatible_error(&field_name, "sequential", "bool"));
        }

        Ok(DeriveParameter {
            field_name: field_name.clone(),
            parameter_type,
            name,
            shorthands: attributes.list("shorthand"),
            description: attributes.single(field_name.span(), "description")?,
            mandatory,
            mandatory_if,
            mandatory_if_not,
            excludes: attributes.list("excludes"),
            excludes_group,
            requires: attributes.list("requires"),
            sequential,
        })
    }
}

fn parameter_type(ty: &syn::Type) -> Result<ParameterType, syn::Error> {
    let segment = last_segment(ty)?;
    let identifier = segment.ident.to_string();

    if identifier == "bool" {
        Ok(ParameterType::Switch)
    } else if COLLECTIONS.contains(&identifier.as_str()) {
        single_argument(segment)?;
        Ok(ParameterType::Collection)
    } else if identifier == "Option" {
        let inner = single_argument(segment)?;

        match last_segment(inner) {
            Ok(inner_segment) if inner_segment.ident == "bool" => Err(syn::Error::new_spanned(
                ty,
                "Invalid - `Option<bool>` is not supported, declare a `bool` flag instead.",
            )),
            Ok(inner_segment) if COLLECTIONS.contains(&inner_segment.ident.to_string().as_str()) => {
                single_argument(inner_segment)?;
                Ok(ParameterType::Collection)
            }
            _ => Ok(ParameterType::Optional),
        }
    } else {
        Ok(ParameterType::Scalar)
    }
}

fn last_segment(ty: &syn::Type) -> Result<&syn::PathSegment, syn::Error> {
    match ty {
        syn::Type::Path(path) => path.path.segments.last().ok_or_else(|| {
            syn::Error::new_spanned(ty, "Invalid - parameter type has an empty path.")
        }),
        _ => Err(syn::Error::new_spanned(
            ty,
            format!(
                "Invalid - unsupported parameter type `{}`.",
                ty.to_token_stream()
            ),
        )),
    }
}

fn single_argument(segment: &syn::PathSegment) -> Result<&syn::Type, syn::Error> {
    if let syn::PathArguments::AngleBracketed(arguments) = &segment.arguments {
        let types: Vec<&syn::Type> = arguments
            .args
            .iter()
            .filter_map(|argument| match argument {
                syn::GenericArgument::Type(ty) => Some(ty),
                _ => None,
            })
            .collect();

        if let [ty] = types.as_slice() {
            return Ok(ty);
        }
    }

    Err(syn::Error::new_spanned(
        segment,
        format!(
            "Invalid - `{}` must carry exactly one type argument.",
            segment.ident
        ),
    ))
}
