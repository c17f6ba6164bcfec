use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate the boilerplate for a color model: public fields, common derives,
/// a `new` constructor, array conversions and a `NAME` constant.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !matches!(input.fields.len(), 3 | 4) {
        return quote! {
            compile_error!("Models must have 3 or 4 fields, one for each component of the color.");
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.");
        }
        .into();
    }

    let field_names = match input.fields {
        syn::Fields::Named(ref named) => named
            .named
            .iter()
            .filter_map(|f| f.ident.clone())
            .collect::<Vec<_>>(),
        _ => {
            return quote! {
                compile_error!("Model fields must be named.");
            }
            .into()
        }
    };

    // Components are always accessible.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = syn::Attribute::parse_outer
        .parse2(quote! {
            #[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        })
        .unwrap();
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();
    let model_name = struct_name.to_string().to_case(Case::Snake);
    let count = field_names.len();

    let model_impl = quote! {
        impl #struct_name {
            /// Lowercase name of the model, used in diagnostics.
            pub const NAME: &'static str = #model_name;

            /// Create a new color in this model.
            pub fn new(#(#field_names: crate::color::Component),*) -> Self {
                Self { #(#field_names),* }
            }

            /// Return the components in declaration order.
            pub fn to_array(&self) -> [crate::color::Component; #count] {
                [#(self.#field_names),*]
            }
        }

        impl From<[crate::color::Component; #count]> for #struct_name {
            fn from(value: [crate::color::Component; #count]) -> Self {
                let [#(#field_names),*] = value;
                Self { #(#field_names),* }
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
