use crate::types::MessageSetDesc;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::LitStr;

pub fn generate_message_set(set: &MessageSetDesc) -> TokenStream {
    let name = &set.name;
    let vis = &set.vis;
    let attrs = &set.attrs;
    let vars: Vec<_> = set.variants.iter().map(|v| &v.name).collect();
    let tys: Vec<_> = set.variants.iter().map(|v| &v.ty).collect();
    let var_attrs = set.variants.iter().map(|v| &v.attrs);
    let dup_msg = LitStr::new(
        &format!("duplicate message id in message set {name}"),
        Span::call_site(),
    );

    quote! {
        #(#attrs)*
        #[derive(Debug, Clone, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        #[allow(clippy::large_enum_variant)]
        #vis enum #name {
            #(
                #(#var_attrs)*
                #vars(#tys),
            )*
            /// Message whose id is not part of the set
            Unknown(ubx_codec::UnknownMessage),
        }

        impl #name {
            /// Ids of all messages of the set, in declaration order
            pub const IDS: &'static [ubx_codec::MsgId] = &[
                #(<#tys as ubx_codec::UbxMessageMeta>::MSG_ID),*
            ];

            /// Largest `max_payload_len` declared by a message of the set
            pub const MAX_PAYLOAD_LEN: u16 = {
                let mut max = 0u16;
                #(
                    if <#tys as ubx_codec::UbxMessageMeta>::MAX_PAYLOAD_LEN > max {
                        max = <#tys as ubx_codec::UbxMessageMeta>::MAX_PAYLOAD_LEN;
                    }
                )*
                max
            };

            pub fn contains(id: ubx_codec::MsgId) -> bool {
                Self::IDS.contains(&id)
            }

            pub fn msg_id(&self) -> ubx_codec::MsgId {
                match self {
                    #(#name::#vars(_) => <#tys as ubx_codec::UbxMessageMeta>::MSG_ID,)*
                    #name::Unknown(msg) => msg.id,
                }
            }

            pub fn name(&self) -> &'static str {
                match self {
                    #(#name::#vars(_) => <#tys as ubx_codec::UbxMessageMeta>::NAME,)*
                    #name::Unknown(_) => "Unknown",
                }
            }

            /// Decode `payload` as the message `(class, id)` stands for.
            ///
            /// Ids outside of the set give [`Self::Unknown`] with the raw payload.
            pub fn read_message(
                class: u8,
                id: u8,
                payload: &[u8],
            ) -> ::core::result::Result<Self, ubx_codec::CodecError> {
                match (class, id) {
                    #(
                        (
                            <#tys as ubx_codec::UbxMessageMeta>::CLASS,
                            <#tys as ubx_codec::UbxMessageMeta>::ID,
                        ) => ubx_codec::decode_as::<#tys>(payload).map(#name::#vars),
                    )*
                    _ => ::core::result::Result::Ok(#name::Unknown(
                        ubx_codec::UnknownMessage::new(ubx_codec::MsgId::new(class, id), payload),
                    )),
                }
            }

            /// Default constructed message for `id`, `None` if it is not in the set
            pub fn create(id: ubx_codec::MsgId) -> ::core::option::Option<Self> {
                match (id.class, id.id) {
                    #(
                        (
                            <#tys as ubx_codec::UbxMessageMeta>::CLASS,
                            <#tys as ubx_codec::UbxMessageMeta>::ID,
                        ) => ::core::option::Option::Some(#name::#vars(
                            <#tys as ::core::default::Default>::default(),
                        )),
                    )*
                    _ => ::core::option::Option::None,
                }
            }

            pub fn length(&self) -> usize {
                match self {
                    #(#name::#vars(msg) => ubx_codec::UbxLength::length(msg),)*
                    #name::Unknown(msg) => msg.length(),
                }
            }

            pub fn write<W: ubx_codec::MemWriter + ?Sized>(
                &self,
                out: &mut W,
            ) -> ::core::result::Result<(), ubx_codec::CodecError> {
                match self {
                    #(#name::#vars(msg) => ubx_codec::UbxWrite::write(msg, out),)*
                    #name::Unknown(msg) => msg.write(out),
                }
            }

            pub fn refresh(&mut self) -> bool {
                match self {
                    #(#name::#vars(msg) => ubx_codec::UbxRefresh::refresh(msg),)*
                    #name::Unknown(_) => false,
                }
            }

            pub fn valid(&self) -> bool {
                match self {
                    #(#name::#vars(msg) => ubx_codec::UbxValid::valid(msg),)*
                    #name::Unknown(_) => true,
                }
            }
        }

        #(
            impl ::core::convert::From<#tys> for #name {
                fn from(msg: #tys) -> Self {
                    #name::#vars(msg)
                }
            }
        )*

        const _: () = {
            let ids = #name::IDS;
            let mut i = 0;
            while i < ids.len() {
                let mut j = i + 1;
                while j < ids.len() {
                    assert!(
                        ids[i].class != ids[j].class || ids[i].id != ids[j].id,
                        #dup_msg
                    );
                    j += 1;
                }
                i += 1;
            }
        };
    }
}
