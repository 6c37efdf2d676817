use crate::model::{DeriveParameter, DeriveValue, ParameterType};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl DeriveParameter {
    pub(crate) fn generate(self, struct_name: &syn::Ident) -> TokenStream2 {
        let DeriveParameter {
            field_name,
            parameter_type,
            name,
            shorthands,
            description,
            mandatory,
            mandatory_if,
            mandatory_if_not,
            excludes,
            excludes_group,
            requires,
            sequential,
        } = self;

        let field = match parameter_type {
            ParameterType::Collection => quote! { ::cmdreader::Collection },
            ParameterType::Optional => quote! { ::cmdreader::Optional },
            ParameterType::Scalar => quote! { ::cmdreader::Scalar },
            ParameterType::Switch => quote! { ::cmdreader::Switch },
        };
        let name = name.tokens;
        let mut parameter = quote! {
            ::cmdreader::Parameter::new(#field::new(|target: &mut #struct_name| &mut target.#field_name), #name)
        };

        for shorthand in shorthands {
            let shorthand = shorthand.tokens;
            parameter = quote! { #parameter.shorthand(#shorthand) };
        }

        if let Some(description) = description {
            let description = description.tokens;
            parameter = quote! { #parameter.description(#description) };
        }

        // `mandatory_if` and `mandatory_if_not` already imply `mandatory`.
        if mandatory && mandatory_if.is_empty() && mandatory_if_not.is_empty() {
            parameter = quote! { #parameter.mandatory() };
        }

        parameter = chain(parameter, "mandatory_if", mandatory_if);
        parameter = chain(parameter, "mandatory_if_not", mandatory_if_not);
        parameter = chain(parameter, "excludes", excludes);

        match excludes_group {
            Some(ids) if ids.is_empty() => {
                parameter =
                    quote! { #parameter.excludes_group(::std::vec::Vec::<&str>::new()) };
            }
            Some(ids) => {
                parameter = chain(parameter, "excludes_group", ids);
            }
            None => {}
        }

        parameter = chain(parameter, "requires", requires);

        if let Some(order) = sequential {
            let order = order.tokens;
            parameter = quote! { #parameter.sequential(#order) };
        }

        parameter
    }
}

fn chain(parameter: TokenStream2, method: &str, values: Vec<DeriveValue>) -> TokenStream2 {
    if values.is_empty() {
        return parameter;
    }

    let method = syn::Ident::new(method, proc_macro2::Span::call_site());
    let values = values.into_iter().map(|value| value.tokens);
    quote! { #parameter.#method([#(#values),*]) }
}
