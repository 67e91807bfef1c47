use crate::types::{BitMember, BitfieldDesc};
use proc_macro2::{Literal, Span, TokenStream};
use quote::{format_ident, quote};
use syn::LitStr;

pub fn generate_bitfield(desc: &BitfieldDesc) -> TokenStream {
    let name = &desc.name;
    let vis = &desc.vis;
    let attrs = &desc.attrs;
    let repr = &desc.repr;
    let reserved_mask = Literal::u64_unsuffixed(desc.reserved_mask());
    let name_str = LitStr::new(&name.to_string(), name.span());

    let members: Vec<&BitMember> = desc.members.iter().filter(|m| !m.reserved).collect();
    let accessors = members.iter().map(|m| generate_member_accessors(desc, m));
    let debug_fields = members.iter().map(|m| {
        let getter = &m.name;
        let getter_str = LitStr::new(&getter.to_string(), getter.span());
        quote! { .field(#getter_str, &self.#getter()) }
    });
    let enum_checks = members.iter().filter(|m| m.map_type.is_some()).map(|m| {
        let getter = &m.name;
        quote! { && self.#getter().is_some() }
    });

    quote! {
        #(#attrs)*
        #[repr(transparent)]
        #[derive(Copy, Clone, PartialEq, Eq, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        #vis struct #name(#repr);

        impl #name {
            /// Bits that have to stay zero
            pub const RESERVED_MASK: #repr = #reserved_mask;

            #[inline]
            pub const fn from_raw(raw: #repr) -> Self {
                Self(raw)
            }

            #[inline]
            pub const fn raw(self) -> #repr {
                self.0
            }

            #[inline]
            pub const fn has_reserved_bits(self) -> bool {
                self.0 & Self::RESERVED_MASK != 0
            }

            #(#accessors)*
        }

        impl ::core::fmt::Debug for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_struct(#name_str)
                    #(#debug_fields)*
                    .finish()
            }
        }

        impl ubx_codec::FixedLength for #name {
            const LENGTH: usize = <#repr as ubx_codec::FixedLength>::LENGTH;
        }

        impl ubx_codec::UbxField for #name {
            #[inline]
            fn length(&self) -> usize {
                <#repr as ubx_codec::FixedLength>::LENGTH
            }

            #[inline]
            fn read(&mut self, input: &mut &[u8]) -> ::core::result::Result<(), ubx_codec::CodecError> {
                ubx_codec::UbxField::read(&mut self.0, input)
            }

            #[inline]
            fn write<W: ubx_codec::MemWriter + ?Sized>(
                &self,
                out: &mut W,
            ) -> ::core::result::Result<(), ubx_codec::CodecError> {
                ubx_codec::UbxField::write(&self.0, out)
            }

            fn valid(&self) -> bool {
                !self.has_reserved_bits() #(#enum_checks)*
            }

            #[inline]
            fn reserved_clear(&self) -> bool {
                !self.has_reserved_bits()
            }
        }
    }
}

/// `self.0` shifted down to the member and masked, still of the repr type
fn extract_bits(desc: &BitfieldDesc, m: &BitMember) -> TokenStream {
    let mask = Literal::u64_unsuffixed(m.mask());
    if m.offset == 0 && m.bits == desc.repr_bits {
        quote! { self.0 }
    } else if m.offset == 0 {
        quote! { (self.0 & #mask) }
    } else {
        let offset = Literal::u32_unsuffixed(m.offset);
        quote! { ((self.0 >> #offset) & #mask) }
    }
}

/// Statement storing `bits` (already of the repr type) into the member
fn store_bits(m: &BitMember, bits: TokenStream) -> TokenStream {
    let mask = Literal::u64_unsuffixed(m.mask());
    let offset = Literal::u32_unsuffixed(m.offset);
    quote! {
        self.0 = (self.0 & !(#mask << #offset)) | ((#bits & #mask) << #offset);
    }
}

fn generate_member_accessors(desc: &BitfieldDesc, m: &BitMember) -> TokenStream {
    let repr = &desc.repr;
    let getter = &m.name;
    let setter = format_ident!("set_{}", m.name);
    let builder = format_ident!("with_{}", m.name);
    let attrs = &m.attrs;
    let ty = &m.ty;
    let bits = extract_bits(desc, m);

    let (value_ty, getter_impl, setter_impl, constness) = if let Some(ref enum_ty) = m.map_type
    {
        let raw_getter = format_ident!("{}_raw", m.name);
        let store = store_bits(
            m,
            quote! { (<#enum_ty as ubx_codec::UbxEnum>::into_bits(value) as #repr) },
        );
        return quote! {
            #(#attrs)*
            /// `None` if the bits hold an undeclared value
            #[inline]
            pub fn #getter(self) -> ::core::option::Option<#enum_ty> {
                <#enum_ty as ubx_codec::UbxEnum>::from_bits(self.#raw_getter() as u64)
            }

            #[inline]
            pub const fn #raw_getter(self) -> #ty {
                #bits as #ty
            }

            #[inline]
            pub fn #setter(&mut self, value: #enum_ty) {
                #store
            }

            #[inline]
            pub fn #builder(mut self, value: #enum_ty) -> Self {
                self.#setter(value);
                self
            }
        };
    } else if m.is_bool() {
        (
            quote! { bool },
            quote! { #bits != 0 },
            store_bits(m, quote! { (value as #repr) }),
            quote! { const },
        )
    } else {
        (
            quote! { #ty },
            quote! { #bits as #ty },
            store_bits(m, quote! { (value as #repr) }),
            quote! { const },
        )
    };

    let setter_doc = LitStr::new(
        &format!(
            "Store `{}`, bits above its {} bit width are dropped",
            m.name, m.bits
        ),
        Span::call_site(),
    );
    quote! {
        #(#attrs)*
        #[inline]
        pub #constness fn #getter(self) -> #value_ty {
            #getter_impl
        }

        #[doc = #setter_doc]
        #[inline]
        pub fn #setter(&mut self, value: #value_ty) {
            #setter_impl
        }

        #[inline]
        pub fn #builder(mut self, value: #value_ty) -> Self {
            self.#setter(value);
            self
        }
    }
}
