use crate::model::DeriveEnumerated;
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;

impl DeriveEnumerated {
    pub(crate) fn generate(self) -> TokenStream2 {
        let DeriveEnumerated { enum_name, variants } = self;
        let constants = variants
            .iter()
            .map(|variant| Literal::string(&variant.to_string()))
            .collect::<Vec<_>>();
        let arms = constants
            .iter()
            .zip(variants.iter())
            .map(|(constant, variant)| {
                quote! { #constant => ::std::option::Option::Some(#enum_name::#variant), }
            })
            .collect::<Vec<_>>();

        quote! {
            impl ::cmdreader::prelude::Enumerated for #enum_name {
                fn constants() -> &'static [&'static str] {
                    &[#(#constants),*]
                }

                fn from_constant(name: &str) -> ::std::option::Option<Self> {
                    match name {
                        #( #arms )*
                        _ => ::std::option::Option::None,
                    }
                }
            }
        }
    }
}
