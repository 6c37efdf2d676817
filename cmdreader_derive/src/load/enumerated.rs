use crate::model::DeriveEnumerated;

impl TryFrom<syn::DeriveInput> for DeriveEnumerated {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let enum_name = value.ident.clone();

        let data = match value.data {
            syn::Data::Enum(data) if value.generics.params.is_empty() => data,
            _ => {
                return Err(syn::Error::new(
                    enum_name.span(),
                    "Invalid - Enumerated requires a non-generic enum.",
                ));
            }
        };

        data.variants
            .into_iter()
            .map(|variant| match variant.fields {
                syn::Fields::Unit => Ok(variant.ident),
                _ => Err(syn::Error::new_spanned(
                    &variant,
                    format!(
                        "Invalid - Enumerated variant `{}` cannot carry fields.",
                        variant.ident
                    ),
                )),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|variants| DeriveEnumerated {
                enum_name,
                variants,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_contains;
    use syn::parse_quote;

    #[test]
    fn construct() {
        // Setup
        let input: syn::DeriveInput = parse_quote! {
            enum Colour {
                Red,
                Green,
            }
        };

        // Execute
        let enumerated = DeriveEnumerated::try_from(input).unwrap();

        // Verify
        assert_eq!(
            enumerated,
            DeriveEnumerated {
                enum_name: parse_quote! { Colour },
                variants: vec![parse_quote! { Red }, parse_quote! { Green }],
            }
        );
    }

    #[test]
    fn construct_empty() {
        let input: syn::DeriveInput = parse_quote! {
            enum Never {}
        };
        let enumerated = DeriveEnumerated::try_from(input).unwrap();
        assert!(enumerated.variants.is_empty());
    }

    #[test]
    fn construct_struct() {
        let input: syn::DeriveInput = parse_quote! {
            struct Colour;
        };
        let error = DeriveEnumerated::try_from(input).unwrap_err();
        assert_contains!(error.to_string(), "requires a non-generic enum");
    }

    #[test]
    fn construct_fields() {
        let input: syn::DeriveInput = parse_quote! {
            enum Colour {
                Red,
                Rgb(u8, u8, u8),
            }
        };
        let error = DeriveEnumerated::try_from(input).unwrap_err();
        assert_contains!(error.to_string(), "variant `Rgb` cannot carry fields");
    }
}
