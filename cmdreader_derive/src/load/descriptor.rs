use crate::model::{DeriveDescriptor, DeriveParameter, DeriveValue, IntermediateAttributes};
use quote::quote;

impl TryFrom<syn::DeriveInput> for DeriveDescriptor {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let struct_name = value.ident.clone();

        if !value.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &value.generics,
                "Invalid - a Descriptor cannot be generic.",
            ));
        }

        let attributes = IntermediateAttributes::load(&value.attrs)?;
        attributes.allow(struct_name.span(), &[], &["program"])?;
        let program = attributes
            .single(struct_name.span(), "program")?
            .unwrap_or_else(|| DeriveValue {
                tokens: quote! { env!("CARGO_CRATE_NAME") },
            });

        let fields = match value.data {
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Named(fields),
                ..
            }) => fields.named.into_iter().collect(),
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Unit,
                ..
            }) => Vec::default(),
            _ => {
                return Err(syn::Error::new(
                    struct_name.span(),
                    "Invalid - a Descriptor must be a struct with named fields.",
                ));
            }
        };

        let mut parameters = Vec::default();

        for field in &fields {
            if !DeriveParameter::skipped(field)? {
                parameters.push(DeriveParameter::try_from(field)?);
            }
        }

        Ok(DeriveDescriptor {
            struct_name,
            program,
            parameters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParameterType;
    use crate::test::assert_contains;
    use rstest::rstest;
    use syn::parse_quote;

    #[test]
    fn construct_unit() {
        // Setup
        let input: syn::DeriveInput = parse_quote! {
            struct Args;
        };

        // Execute
        let descriptor = DeriveDescriptor::try_from(input).unwrap();

        // Verify
        assert_eq!(
            descriptor,
            DeriveDescriptor {
                struct_name: parse_quote! { Args },
                program: DeriveValue {
                    tokens: quote! { env!("CARGO_CRATE_NAME") },
                },
                parameters: vec![],
            }
        );
    }

    #[test]
    fn construct() {
        // Setup
        let input: syn::DeriveInput = parse_quote! {
            #[cmd(program = "archiver")]
            struct Args {
                #[cmd(shorthand = 'v')]
                verbose: bool,
                #[cmd(skip)]
                cache: Vec<u8>,
                #[cmd(sequential)]
                files: Vec<String>,
            }
        };

        // Execute
        let descriptor = DeriveDescriptor::try_from(input).unwrap();

        // Verify
        assert_eq!(descriptor.struct_name, "Args");
        assert_eq!(
            descriptor.program,
            DeriveValue {
                tokens: quote! { "archiver" },
            }
        );
        assert_eq!(
            descriptor
                .parameters
                .iter()
                .map(|p| (p.field_name.to_string(), p.parameter_type))
                .collect::<Vec<_>>(),
            vec![
                ("verbose".to_string(), ParameterType::Switch),
                ("files".to_string(), ParameterType::Collection),
            ]
        );
    }

    #[rstest]
    #[case(parse_quote! { struct Args<T> { value: T } }, "cannot be generic")]
    #[case(parse_quote! { struct Args(i32); }, "must be a struct with named fields")]
    #[case(parse_quote! { enum Args { A } }, "must be a struct with named fields")]
    #[case(parse_quote! { #[cmd(name = "x")] struct Args; }, "unknown attribute `#[cmd(name = ..)]`")]
    #[case(parse_quote! { struct Args { #[cmd(mandatory)] flag: bool } }, "cannot be both `mandatory` and `bool`")]
    fn construct_invalid(#[case] input: syn::DeriveInput, #[case] expected: &str) {
        // Execute
        let error = DeriveDescriptor::try_from(input).unwrap_err();

        // Verify
        assert_contains!(error.to_string(), expected);
    }
}
