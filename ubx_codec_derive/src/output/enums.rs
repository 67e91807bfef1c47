use crate::types::EnumDesc;
use proc_macro2::TokenStream;
use quote::quote;

pub fn generate_enum_impl(desc: &EnumDesc) -> TokenStream {
    let name = &desc.name;
    let repr = &desc.repr;
    let vars: Vec<_> = desc.variants.iter().map(|(var, _)| var).collect();
    let values = desc.variants.iter().map(|(_, value)| value);

    quote! {
        impl ubx_codec::UbxEnum for #name {
            type Repr = #repr;

            const VALUES: &'static [Self] = &[#(#name::#vars),*];

            fn from_repr(raw: #repr) -> ::core::option::Option<Self> {
                match raw {
                    #(#values => ::core::option::Option::Some(#name::#vars),)*
                    _ => ::core::option::Option::None,
                }
            }

            #[inline]
            fn into_repr(self) -> #repr {
                self as #repr
            }

            fn from_bits(bits: u64) -> ::core::option::Option<Self> {
                <#repr as ::core::convert::TryFrom<u64>>::try_from(bits)
                    .ok()
                    .and_then(Self::from_repr)
            }

            #[inline]
            fn into_bits(self) -> u64 {
                u64::from(self as #repr)
            }
        }
    }
}
