use crate::types::{FieldKind, MsgDesc, MsgField, PayloadLen};
use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{LitStr, Type};

mod bitfield;
mod enums;
mod message_set;

pub use bitfield::generate_bitfield;
pub use enums::generate_enum_impl;
pub use message_set::generate_message_set;

pub fn generate_message(desc: &MsgDesc) -> TokenStream {
    let struct_def = generate_struct(desc);
    let default_impl = generate_default(desc);
    let accessors = generate_accessors(desc);
    let codec = match desc.header {
        Some(_) => generate_message_impls(desc),
        None => generate_bundle_impls(desc),
    };
    let len_check = generate_length_check(desc);

    quote! {
        #struct_def
        #default_impl
        #accessors
        #codec
        #len_check
    }
}

fn generate_struct(desc: &MsgDesc) -> TokenStream {
    let name = &desc.name;
    let vis = &desc.vis;
    let attrs = &desc.attrs;
    let fields = desc.fields.iter().map(|f| {
        let name = &f.name;
        let ty = &f.ty;
        let attrs = &f.attrs;
        quote! {
            #(#attrs)*
            pub #name: #ty
        }
    });
    quote! {
        #(#attrs)*
        #[derive(Debug, Clone, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        #vis struct #name {
            #(#fields),*
        }
    }
}

fn generate_default(desc: &MsgDesc) -> TokenStream {
    let name = &desc.name;
    let fields = desc.fields.iter().map(|f| {
        let name = &f.name;
        match f.map.default {
            Some(ref expr) => quote! { #name: #expr },
            None => quote! { #name: ::core::default::Default::default() },
        }
    });
    quote! {
        impl ::core::default::Default for #name {
            fn default() -> Self {
                Self {
                    #(#fields),*
                }
            }
        }
    }
}

/// Scaled and enumeration views of raw fields
fn generate_accessors(desc: &MsgDesc) -> TokenStream {
    let mut getters = Vec::new();
    for f in &desc.fields {
        let field = &f.name;
        let raw_ty = &f.ty;
        if let Some(map_ty) = f.scaled_type() {
            let scale = f.map.scale.as_ref();
            let getter = f
                .map
                .alias
                .clone()
                .unwrap_or_else(|| format_ident!("{}_scaled", field));
            let setter = format_ident!("set_{}", getter);
            let getter_doc = LitStr::new(
                &format!("`{field}` in physical units (raw value times {})", scale_text(f)),
                Span::call_site(),
            );
            let into_raw = match raw_type_name(raw_ty).as_deref() {
                Some(raw @ ("u8" | "i8" | "u16" | "i16" | "u32" | "i32" | "u64" | "i64")) => {
                    let as_fn = format_ident!("as_{}", raw);
                    quote! { ubx_codec::ScaleBack::<#map_ty>(1. / #scale).#as_fn(value) }
                },
                _ => quote! { (value / #scale) as #raw_ty },
            };
            getters.push(quote! {
                #[doc = #getter_doc]
                #[inline]
                pub fn #getter(&self) -> #map_ty {
                    (self.#field as #map_ty) * #scale
                }

                #[inline]
                pub fn #setter(&mut self, value: #map_ty) {
                    self.#field = #into_raw;
                }
            });
        } else if let Some(enum_ty) = f.enum_type() {
            let getter = f.map.alias.clone().unwrap_or_else(|| field.clone());
            let setter = format_ident!("set_{}", getter);
            getters.push(quote! {
                /// `None` if the raw value is not a declared one
                #[inline]
                pub fn #getter(&self) -> ::core::option::Option<#enum_ty> {
                    <#enum_ty as ubx_codec::UbxEnum>::from_repr(self.#field)
                }

                #[inline]
                pub fn #setter(&mut self, value: #enum_ty) {
                    self.#field = <#enum_ty as ubx_codec::UbxEnum>::into_repr(value);
                }
            });
        }
    }

    let name = &desc.name;
    let fields_table = fields_table(desc);
    let fields_const = if desc.header.is_none() {
        quote! {
            /// Fields in wire order
            pub const FIELDS: &'static [ubx_codec::FieldInfo] = #fields_table;
        }
    } else {
        quote! {}
    };
    if getters.is_empty() && desc.header.is_some() {
        return quote! {};
    }
    quote! {
        impl #name {
            #fields_const
            #(#getters)*
        }
    }
}

fn scale_text(f: &MsgField) -> String {
    let mut ret = f
        .map
        .scale
        .as_ref()
        .map(|s| s.base10_digits().to_string())
        .unwrap_or_default();
    if let Some(ref unit) = f.map.unit {
        ret.push_str(", ");
        ret.push_str(&unit.value());
    }
    ret
}

fn raw_type_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(p) => p.path.get_ident().map(ToString::to_string),
        _ => None,
    }
}

fn fields_table(desc: &MsgDesc) -> TokenStream {
    let infos = desc.fields.iter().map(|f| {
        let name = LitStr::new(&f.name.to_string(), f.name.span());
        let ty = &f.ty;
        let length = match f.kind {
            FieldKind::Fixed => quote! {
                ::core::option::Option::Some(<#ty as ubx_codec::FixedLength>::LENGTH)
            },
            _ => quote! { ::core::option::Option::None },
        };
        let scale = match f.map.scale {
            Some(ref scale) => quote! { ::core::option::Option::Some(#scale) },
            None => quote! { ::core::option::Option::None },
        };
        let unit = match f.map.unit {
            Some(ref unit) => quote! { ::core::option::Option::Some(#unit) },
            None => quote! { ::core::option::Option::None },
        };
        quote! {
            ubx_codec::FieldInfo {
                name: #name,
                length: #length,
                scale: #scale,
                unit: #unit,
            }
        }
    });
    quote! { &[#(#infos),*] }
}

/// Conjunction of everything that makes the value of `f` acceptable
fn field_valid_expr(f: &MsgField) -> TokenStream {
    let name = &f.name;
    let mut checks = vec![quote! { ubx_codec::UbxField::valid(&self.#name) }];
    if let Some(enum_ty) = f.enum_type() {
        checks.push(quote! {
            <#enum_ty as ubx_codec::UbxEnum>::from_repr(self.#name).is_some()
        });
    }
    if let Some(ref min) = f.map.valid_min {
        checks.push(quote! { self.#name >= #min });
    }
    if let Some(ref max) = f.map.valid_max {
        checks.push(quote! { self.#name <= #max });
    }
    if let Some(ref count) = f.map.count {
        checks.push(quote! { ubx_codec::count_matches(&self.#count, &self.#name) });
    }
    quote! { #(#checks)&&* }
}

/// Plain numbers never carry reserved data
fn checks_reserved(f: &MsgField) -> bool {
    !f.map.ignore_reserved
        && !matches!(
            raw_type_name(&f.ty).as_deref(),
            Some("u8" | "i8" | "u16" | "i16" | "u32" | "i32" | "u64" | "i64" | "f32" | "f64")
        )
}

/// Field reads in declaration order over a local `cursor`
fn generate_field_reads(desc: &MsgDesc) -> Vec<TokenStream> {
    let msg_name = LitStr::new(&desc.name.to_string(), desc.name.span());
    desc.fields
        .iter()
        .map(|f| {
            let name = &f.name;
            let force = match f.map.count {
                Some(ref count) => quote! {
                    ubx_codec::force_from_count(&self.#count, &mut self.#name);
                },
                None => quote! {},
            };
            let field_name = LitStr::new(&name.to_string(), name.span());
            let invalid_content = quote! {
                return ::core::result::Result::Err(ubx_codec::CodecError::InvalidContent {
                    message: #msg_name,
                    field: #field_name,
                });
            };
            let reserved_check = if checks_reserved(f) {
                quote! {
                    if !ubx_codec::UbxField::reserved_clear(&self.#name) {
                        #invalid_content
                    }
                }
            } else {
                quote! {}
            };
            let check = if f.map.fail_on_invalid {
                let valid = field_valid_expr(f);
                quote! {
                    if !(#valid) {
                        #invalid_content
                    }
                }
            } else {
                quote! {}
            };
            quote! {
                #force
                ubx_codec::UbxField::read(&mut self.#name, &mut cursor)?;
                #reserved_check
                #check
            }
        })
        .collect()
}

fn generate_field_writes(desc: &MsgDesc) -> Vec<TokenStream> {
    desc.fields
        .iter()
        .map(|f| {
            let name = &f.name;
            quote! {
                ubx_codec::UbxField::write(&self.#name, &mut *out)?;
            }
        })
        .collect()
}

fn generate_message_impls(desc: &MsgDesc) -> TokenStream {
    let name = &desc.name;
    let Some(ref header) = desc.header else {
        return quote! {};
    };
    let class = header.class;
    let id = header.id;
    let name_str = LitStr::new(&name.to_string(), name.span());
    let fixed_len = match header.payload_len.fixed() {
        Some(len) => quote! { ::core::option::Option::Some(#len) },
        None => quote! { ::core::option::Option::None },
    };
    let max_len = header.payload_len.max();
    let fields_table = fields_table(desc);

    let reads = generate_field_reads(desc);
    let writes = generate_field_writes(desc);
    let lengths = desc.fields.iter().map(|f| {
        let name = &f.name;
        quote! { ubx_codec::UbxField::length(&self.#name) }
    });

    let syncs: Vec<TokenStream> = desc
        .counted_lists()
        .map(|(count, list)| {
            let list = &list.name;
            quote! {
                changed |= ubx_codec::sync_count(&mut self.#count, &self.#list);
            }
        })
        .collect();
    let refresh_body = if syncs.is_empty() {
        quote! { false }
    } else {
        quote! {
            let mut changed = false;
            #(#syncs)*
            changed
        }
    };

    let valid_checks = desc.fields.iter().map(|f| {
        let valid = field_valid_expr(f);
        let field_name = LitStr::new(&f.name.to_string(), f.name.span());
        quote! {
            if !(#valid) {
                return ::core::option::Option::Some(#field_name);
            }
        }
    });

    quote! {
        impl ubx_codec::UbxMessageMeta for #name {
            const CLASS: u8 = #class;
            const ID: u8 = #id;
            const NAME: &'static str = #name_str;
            const FIXED_PAYLOAD_LEN: ::core::option::Option<u16> = #fixed_len;
            const MAX_PAYLOAD_LEN: u16 = #max_len;
            const FIELDS: &'static [ubx_codec::FieldInfo] = #fields_table;
        }

        impl ubx_codec::UbxRead for #name {
            fn read(&mut self, input: &mut &[u8]) -> ::core::result::Result<(), ubx_codec::CodecError> {
                let mut cursor: &[u8] = *input;
                #(#reads)*
                *input = cursor;
                ::core::result::Result::Ok(())
            }
        }

        impl ubx_codec::UbxLength for #name {
            fn length(&self) -> usize {
                0 #(+ #lengths)*
            }
        }

        impl ubx_codec::UbxWrite for #name {
            fn write<W: ubx_codec::MemWriter + ?Sized>(
                &self,
                out: &mut W,
            ) -> ::core::result::Result<(), ubx_codec::CodecError> {
                out.reserve_allocate(ubx_codec::UbxLength::length(self))?;
                #(#writes)*
                ::core::result::Result::Ok(())
            }
        }

        impl ubx_codec::UbxRefresh for #name {
            fn refresh(&mut self) -> bool {
                #refresh_body
            }
        }

        impl ubx_codec::UbxValid for #name {
            fn invalid_field(&self) -> ::core::option::Option<&'static str> {
                #(#valid_checks)*
                ::core::option::Option::None
            }
        }
    }
}

fn generate_bundle_impls(desc: &MsgDesc) -> TokenStream {
    let name = &desc.name;
    let tys = desc.fields.iter().map(|f| &f.ty);
    let reads = generate_field_reads(desc);
    let writes = generate_field_writes(desc);
    let valid = desc.fields.iter().map(field_valid_expr);
    let reserved = desc
        .fields
        .iter()
        .filter(|f| checks_reserved(f))
        .map(|f| {
            let name = &f.name;
            quote! { ubx_codec::UbxField::reserved_clear(&self.#name) }
        });

    quote! {
        impl ubx_codec::FixedLength for #name {
            const LENGTH: usize = 0 #(+ <#tys as ubx_codec::FixedLength>::LENGTH)*;
        }

        impl ubx_codec::UbxField for #name {
            #[inline]
            fn length(&self) -> usize {
                <Self as ubx_codec::FixedLength>::LENGTH
            }

            fn read(&mut self, input: &mut &[u8]) -> ::core::result::Result<(), ubx_codec::CodecError> {
                let mut cursor: &[u8] = *input;
                #(#reads)*
                *input = cursor;
                ::core::result::Result::Ok(())
            }

            fn write<W: ubx_codec::MemWriter + ?Sized>(
                &self,
                out: &mut W,
            ) -> ::core::result::Result<(), ubx_codec::CodecError> {
                #(#writes)*
                ::core::result::Result::Ok(())
            }

            fn valid(&self) -> bool {
                true #(&& #valid)*
            }

            fn reserved_clear(&self) -> bool {
                true #(&& #reserved)*
            }
        }
    }
}

/// Compile time check of the declared payload length against the field widths
fn generate_length_check(desc: &MsgDesc) -> TokenStream {
    let Some(ref header) = desc.header else {
        return quote! {};
    };
    let name = &desc.name;
    let tys = desc.fixed_fields().map(|f| &f.ty);
    let sum = quote! { 0usize #(+ <#tys as ubx_codec::FixedLength>::LENGTH)* };
    let (cond, msg) = match header.payload_len {
        PayloadLen::Fixed(len) => {
            let len = len as usize;
            (
                quote! { len == #len },
                format!("{name}: field widths do not add up to fixed_payload_len = {len}"),
            )
        },
        PayloadLen::Max(len) => {
            let len = len as usize;
            (
                quote! { len <= #len },
                format!("{name}: fixed fields alone exceed max_payload_len = {len}"),
            )
        },
    };
    let msg = LitStr::new(&msg, Span::call_site());
    quote! {
        const _: () = {
            let len = #sum;
            assert!(#cond, #msg);
        };
    }
}
