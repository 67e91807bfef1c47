//! Procedural macros turning declarative structs into UBX message codecs.
//!
//! * `#[ubx_message]` with `#[ubx(class = .., id = .., fixed_payload_len = ..)]`
//!   (or `max_payload_len`) declares a message.
//! * `#[ubx_bundle]` declares a fixed width record, used as list element.
//! * `#[ubx_bitfield(u8)]` declares an integer split into bit ranges.
//! * `#[ubx_enum]` declares the value set of an enumerated field.
//! * `define_message_set!` declares a registry of messages.
//!
//! Generated code refers to the runtime as `ubx_codec::...`.

extern crate proc_macro;

mod input;
mod output;
mod types;

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{parse_macro_input, Error, Ident, ItemEnum, ItemStruct};

#[proc_macro_attribute]
pub fn ubx_message(
    attr: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as ItemStruct);
    reject_args(attr.into(), "ubx_message")
        .and_then(|()| input::parse_message(input))
        .map(|desc| output::generate_message(&desc))
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

#[proc_macro_attribute]
pub fn ubx_bundle(
    attr: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as ItemStruct);
    reject_args(attr.into(), "ubx_bundle")
        .and_then(|()| input::parse_bundle(input))
        .map(|desc| output::generate_message(&desc))
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

#[proc_macro_attribute]
pub fn ubx_bitfield(
    attr: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let repr = parse_macro_input!(attr as Ident);
    let input = parse_macro_input!(input as ItemStruct);
    input::parse_bitfield(repr, input)
        .map(|desc| output::generate_bitfield(&desc))
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

#[proc_macro_attribute]
pub fn ubx_enum(
    attr: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as ItemEnum);
    reject_args(attr.into(), "ubx_enum")
        .and_then(|()| input::parse_enum(&input))
        .map(|desc| {
            let mut ret = input.into_token_stream();
            ret.extend(output::generate_enum_impl(&desc));
            ret
        })
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

#[proc_macro]
pub fn define_message_set(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let set = parse_macro_input!(input as types::MessageSetDesc);
    input::check_unique_variants(&set)
        .map(|()| output::generate_message_set(&set))
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn reject_args(attr: TokenStream, macro_name: &str) -> syn::Result<()> {
    if attr.is_empty() {
        Ok(())
    } else {
        Err(Error::new_spanned(
            attr,
            format!("{macro_name} takes no arguments"),
        ))
    }
}
