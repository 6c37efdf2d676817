use crate::model::DeriveDescriptor;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl DeriveDescriptor {
    pub(crate) fn generate(self) -> TokenStream2 {
        let DeriveDescriptor {
            struct_name,
            program,
            parameters,
        } = self;
        let program = program.tokens;
        let parameters = parameters
            .into_iter()
            .map(|parameter| parameter.generate(&struct_name))
            .collect::<Vec<_>>();

        quote! {
            impl ::cmdreader::Descriptor for #struct_name {
                fn describe(schema: ::cmdreader::Schema<Self>) -> ::cmdreader::Schema<Self> {
                    schema
                        .program(#program)
                        #( .add(#parameters) )*
                }
            }
        }
    }
}
