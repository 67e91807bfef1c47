use crate::types::{
    BitMember, BitfieldDesc, EnumDesc, FieldKind, FieldMap, MessageSetDesc, MsgDesc, MsgField,
    MsgHeader, PayloadLen, SetVariant,
};
use proc_macro2::Span;
use syn::{
    braced, parenthesized,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Fields, Ident, Token, Type,
};

pub fn parse_message(input: syn::ItemStruct) -> syn::Result<MsgDesc> {
    let header = parse_ubx_attr(&input.attrs, &input.ident)?;
    let desc = parse_struct(input, Some(header))?;

    if let Some(PayloadLen::Fixed(len)) = desc.header.as_ref().map(|h| h.payload_len) {
        if let Some(f) = desc.fields.iter().find(|f| f.kind != FieldKind::Fixed) {
            return Err(Error::new(
                f.name.span(),
                format!(
                    "{} has variable length, declare max_payload_len instead of fixed_payload_len = {}",
                    f.name, len
                ),
            ));
        }
    }
    Ok(desc)
}

pub fn parse_bundle(input: syn::ItemStruct) -> syn::Result<MsgDesc> {
    if let Some(attr) = input.attrs.iter().find(|a| a.path.is_ident("ubx")) {
        return Err(Error::new(
            attr.span(),
            "bundles have no message header, remove the ubx attribute",
        ));
    }
    let desc = parse_struct(input, None)?;
    if let Some(f) = desc.fields.iter().find(|f| f.kind != FieldKind::Fixed) {
        return Err(Error::new(
            f.name.span(),
            "bundle fields must have a fixed width",
        ));
    }
    Ok(desc)
}

fn parse_struct(input: syn::ItemStruct, header: Option<MsgHeader>) -> syn::Result<MsgDesc> {
    if !input.generics.params.is_empty() {
        return Err(Error::new(
            input.generics.span(),
            "generic parameters are not supported",
        ));
    }
    let fields = match input.fields {
        Fields::Named(fields) => fields,
        _ => {
            return Err(Error::new(
                input.fields.span(),
                "only structs with named fields are supported",
            ))
        },
    };

    let mut ret = Vec::with_capacity(fields.named.len());
    for f in fields.named {
        let f_sp = f.span();
        let name = f
            .ident
            .ok_or_else(|| Error::new(f_sp, "No field name"))?;
        let (map, attrs) = parse_field_attrs(f.attrs)?;
        let kind = field_kind(&f.ty);
        check_field_map(&name, kind, &map)?;
        ret.push(MsgField {
            name,
            ty: f.ty,
            attrs,
            map,
            kind,
        });
    }
    check_field_order(&ret)?;

    Ok(MsgDesc {
        name: input.ident,
        vis: input.vis,
        attrs: input
            .attrs
            .into_iter()
            .filter(|a| !a.path.is_ident("ubx"))
            .collect(),
        header,
        fields: ret,
    })
}

fn parse_ubx_attr(attrs: &[Attribute], struct_name: &Ident) -> syn::Result<MsgHeader> {
    let attr = attrs
        .iter()
        .find(|a| a.path.is_ident("ubx"))
        .ok_or_else(|| {
            Error::new(
                struct_name.span(),
                format!("No ubx attribute for message {struct_name}"),
            )
        })?;
    let meta = attr.parse_meta()?;
    let meta = match meta {
        syn::Meta::List(x) => x,
        _ => return Err(Error::new(meta.span(), "Invalid ubx attribute syntax")),
    };

    let mut class = None;
    let mut id = None;
    let mut payload_len = None;

    for e in &meta.nested {
        match e {
            syn::NestedMeta::Meta(syn::Meta::NameValue(syn::MetaNameValue {
                path, lit, ..
            })) => {
                if path.is_ident("class") {
                    if class.is_some() {
                        return Err(Error::new(e.span(), "Duplicate \"class\" attribute"));
                    }
                    class = Some(int_lit::<u8>(lit)?);
                } else if path.is_ident("id") {
                    if id.is_some() {
                        return Err(Error::new(e.span(), "Duplicate \"id\" attribute"));
                    }
                    id = Some(int_lit::<u8>(lit)?);
                } else if path.is_ident("fixed_payload_len") || path.is_ident("max_payload_len") {
                    if payload_len.is_some() {
                        return Err(Error::new(
                            e.span(),
                            "Only one of fixed_payload_len and max_payload_len is allowed",
                        ));
                    }
                    let len = int_lit::<u16>(lit)?;
                    payload_len = Some(if path.is_ident("fixed_payload_len") {
                        PayloadLen::Fixed(len)
                    } else {
                        PayloadLen::Max(len)
                    });
                } else {
                    return Err(Error::new(path.span(), "Unsupported attribute"));
                }
            },
            _ => return Err(Error::new(e.span(), "Unsupported attribute")),
        }
    }
    let class = class.ok_or_else(|| Error::new(meta.span(), "No \"class\" attribute"))?;
    let id = id.ok_or_else(|| Error::new(meta.span(), "No \"id\" attribute"))?;
    let payload_len = payload_len.ok_or_else(|| {
        Error::new(
            meta.span(),
            "No \"fixed_payload_len\" or \"max_payload_len\" attribute",
        )
    })?;

    Ok(MsgHeader {
        class,
        id,
        payload_len,
    })
}

fn int_lit<N>(lit: &syn::Lit) -> syn::Result<N>
where
    N: std::str::FromStr,
    N::Err: std::fmt::Display,
{
    match lit {
        syn::Lit::Int(x) => x.base10_parse::<N>(),
        _ => Err(Error::new(lit.span(), "Should be integer literal")),
    }
}

fn parse_field_attrs(attrs: Vec<Attribute>) -> syn::Result<(FieldMap, Vec<Attribute>)> {
    let mut map = None;
    let mut rest = Vec::with_capacity(attrs.len());
    for a in attrs {
        if a.path.is_ident("ubx") {
            if map.is_some() {
                return Err(Error::new(a.span(), "Duplicate ubx attribute"));
            }
            map = Some(a.parse_args::<FieldMap>()?);
        } else {
            rest.push(a);
        }
    }
    Ok((map.unwrap_or_default(), rest))
}

fn field_kind(ty: &Type) -> FieldKind {
    let last = match ty {
        Type::Path(p) => p.path.segments.last(),
        _ => None,
    };
    match last {
        Some(seg) if seg.ident == "List" => FieldKind::List,
        Some(seg) if seg.ident == "TrailingString" => FieldKind::Trailing,
        _ => FieldKind::Fixed,
    }
}

fn is_float(ty: &Type) -> bool {
    matches!(ty, Type::Path(p) if p.path.is_ident("f32") || p.path.is_ident("f64"))
}

fn check_field_map(name: &Ident, kind: FieldKind, map: &FieldMap) -> syn::Result<()> {
    if let Some(ref scale) = map.scale {
        if kind != FieldKind::Fixed {
            return Err(Error::new(scale.span(), "scale on a variable length field"));
        }
        if let Some(ty) = map.map_type.as_ref().filter(|ty| !is_float(ty)) {
            return Err(Error::new(
                ty.span(),
                "scaled fields map to f32 or f64 only",
            ));
        }
    } else if let Some(ty) = map.map_type.as_ref().filter(|ty| is_float(ty)) {
        return Err(Error::new(ty.span(), "map_type f32/f64 requires scale"));
    }

    if map.alias.is_some() && map.map_type.is_none() && map.scale.is_none() {
        return Err(Error::new(
            name.span(),
            "alias needs map_type or scale",
        ));
    }

    if let Some(ref count) = map.count {
        if kind != FieldKind::List {
            return Err(Error::new(
                count.span(),
                format!("{name}: only List fields can have an external count"),
            ));
        }
    }
    Ok(())
}

fn check_field_order(fields: &[MsgField]) -> syn::Result<()> {
    for (i, f) in fields.iter().enumerate() {
        if let Some(ref count) = f.map.count {
            match fields[..i].iter().find(|prev| prev.name == *count) {
                Some(prev) if prev.kind == FieldKind::Fixed => {},
                Some(_) => {
                    return Err(Error::new(
                        count.span(),
                        format!("count field {count} must have a fixed width"),
                    ))
                },
                None => {
                    return Err(Error::new(
                        count.span(),
                        format!("count field {count} must be declared before {}", f.name),
                    ))
                },
            }
        } else if f.kind != FieldKind::Fixed && i + 1 != fields.len() {
            return Err(Error::new(
                f.name.span(),
                format!(
                    "{} runs to the end of the payload, it has to be the last field",
                    f.name
                ),
            ));
        }
    }
    Ok(())
}

mod kw {
    syn::custom_keyword!(map_type);
    syn::custom_keyword!(scale);
    syn::custom_keyword!(alias);
    syn::custom_keyword!(unit);
    syn::custom_keyword!(default);
    syn::custom_keyword!(valid_min);
    syn::custom_keyword!(valid_max);
    syn::custom_keyword!(fail_on_invalid);
    syn::custom_keyword!(ignore_reserved);
    syn::custom_keyword!(count);
    syn::custom_keyword!(bits);
    syn::custom_keyword!(reserved);
}

impl Parse for FieldMap {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut map = FieldMap::default();
        while !input.is_empty() {
            let lookahead = input.lookahead1();
            if lookahead.peek(kw::map_type) {
                input.parse::<kw::map_type>()?;
                input.parse::<Token![=]>()?;
                map.map_type = Some(input.parse()?);
            } else if lookahead.peek(kw::scale) {
                input.parse::<kw::scale>()?;
                input.parse::<Token![=]>()?;
                map.scale = Some(input.parse()?);
            } else if lookahead.peek(kw::alias) {
                input.parse::<kw::alias>()?;
                input.parse::<Token![=]>()?;
                map.alias = Some(input.parse()?);
            } else if lookahead.peek(kw::unit) {
                input.parse::<kw::unit>()?;
                input.parse::<Token![=]>()?;
                map.unit = Some(input.parse()?);
            } else if lookahead.peek(kw::default) {
                input.parse::<kw::default>()?;
                input.parse::<Token![=]>()?;
                map.default = Some(input.parse()?);
            } else if lookahead.peek(kw::valid_min) {
                input.parse::<kw::valid_min>()?;
                input.parse::<Token![=]>()?;
                map.valid_min = Some(input.parse()?);
            } else if lookahead.peek(kw::valid_max) {
                input.parse::<kw::valid_max>()?;
                input.parse::<Token![=]>()?;
                map.valid_max = Some(input.parse()?);
            } else if lookahead.peek(kw::fail_on_invalid) {
                input.parse::<kw::fail_on_invalid>()?;
                map.fail_on_invalid = true;
            } else if lookahead.peek(kw::ignore_reserved) {
                input.parse::<kw::ignore_reserved>()?;
                map.ignore_reserved = true;
            } else if lookahead.peek(kw::count) {
                input.parse::<kw::count>()?;
                input.parse::<Token![=]>()?;
                map.count = Some(input.parse()?);
            } else {
                return Err(lookahead.error());
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }
        Ok(map)
    }
}

#[derive(Default)]
struct BitMemberAttr {
    bits: Option<u32>,
    map_type: Option<Type>,
    reserved: bool,
}

impl Parse for BitMemberAttr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut ret = BitMemberAttr::default();
        while !input.is_empty() {
            let lookahead = input.lookahead1();
            if lookahead.peek(kw::bits) {
                input.parse::<kw::bits>()?;
                input.parse::<Token![=]>()?;
                ret.bits = Some(input.parse::<syn::LitInt>()?.base10_parse()?);
            } else if lookahead.peek(kw::map_type) {
                input.parse::<kw::map_type>()?;
                input.parse::<Token![=]>()?;
                ret.map_type = Some(input.parse()?);
            } else if lookahead.peek(kw::reserved) {
                input.parse::<kw::reserved>()?;
                ret.reserved = true;
            } else {
                return Err(lookahead.error());
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }
        Ok(ret)
    }
}

pub fn repr_width(repr: &Ident) -> syn::Result<u32> {
    match repr.to_string().as_str() {
        "u8" => Ok(8),
        "u16" => Ok(16),
        "u32" => Ok(32),
        "u64" => Ok(64),
        _ => Err(Error::new(repr.span(), "bitfield repr must be u8, u16, u32 or u64")),
    }
}

pub fn parse_bitfield(repr: Ident, input: syn::ItemStruct) -> syn::Result<BitfieldDesc> {
    let repr_bits = repr_width(&repr)?;
    let main_sp = input.span();
    let fields = match input.fields {
        Fields::Named(fields) => fields,
        _ => {
            return Err(Error::new(
                input.fields.span(),
                "bitfield members must be named",
            ))
        },
    };

    let mut offset = 0;
    let mut members = Vec::with_capacity(fields.named.len());
    for f in fields.named {
        let f_sp = f.span();
        let name = f.ident.ok_or_else(|| Error::new(f_sp, "No member name"))?;
        let mut attr = None;
        let mut attrs = Vec::new();
        for a in f.attrs {
            if a.path.is_ident("ubx") {
                attr = Some(a.parse_args::<BitMemberAttr>()?);
            } else {
                attrs.push(a);
            }
        }
        let attr = attr.ok_or_else(|| {
            Error::new(f_sp, format!("{name}: #[ubx(bits = ..)] is required"))
        })?;
        let bits = attr
            .bits
            .ok_or_else(|| Error::new(f_sp, format!("{name}: bits is required")))?;
        if bits == 0 {
            return Err(Error::new(f_sp, format!("{name}: zero width member")));
        }
        let member = BitMember {
            name,
            attrs,
            ty: f.ty,
            bits,
            offset,
            map_type: attr.map_type,
            reserved: attr.reserved,
        };
        if member.is_bool() && bits != 1 {
            return Err(Error::new(
                member.ty.span(),
                format!("{}: bool members are one bit wide", member.name),
            ));
        }
        offset += bits;
        members.push(member);
    }

    if offset != repr_bits {
        return Err(Error::new(
            main_sp,
            format!(
                "bitfield member widths sum to {offset} bits, but {repr} has {repr_bits} bits"
            ),
        ));
    }

    Ok(BitfieldDesc {
        name: input.ident,
        vis: input.vis,
        attrs: input.attrs,
        repr,
        repr_bits,
        members,
    })
}

pub fn parse_enum(input: &syn::ItemEnum) -> syn::Result<EnumDesc> {
    let enum_name = &input.ident;
    let attr = input
        .attrs
        .iter()
        .find(|a| a.path.is_ident("repr"))
        .ok_or_else(|| {
            Error::new(
                enum_name.span(),
                format!("No repr attribute for ubx_enum {enum_name}"),
            )
        })?;
    let repr: Ident = attr.parse_args()?;
    if !["u8", "u16", "u32"].iter().any(|x| repr == x) {
        return Err(Error::new(repr.span(), "ubx_enum repr must be u8, u16 or u32"));
    }

    let mut variants = Vec::with_capacity(input.variants.len());
    for var in &input.variants {
        if Fields::Unit != var.fields {
            return Err(Error::new(
                var.fields.span(),
                "Invalid variant for ubx_enum",
            ));
        }
        let var_sp = var.ident.span();
        let (_, expr) = var
            .discriminant
            .as_ref()
            .ok_or_else(|| Error::new(var_sp, "ubx_enum variant should have a value"))?;
        let value = if let syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Int(litint),
            ..
        }) = expr
        {
            litint.clone()
        } else {
            return Err(Error::new(
                expr.span(),
                "Invalid variant value for ubx_enum",
            ));
        };
        variants.push((var.ident.clone(), value));
    }

    Ok(EnumDesc {
        name: input.ident.clone(),
        repr,
        variants,
    })
}

impl Parse for MessageSetDesc {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis = input.parse()?;
        input.parse::<Token![enum]>()?;
        let name = input.parse()?;
        let content;
        braced!(content in input);
        let variants: Punctuated<SetVariant, Token![,]> =
            content.parse_terminated(SetVariant::parse)?;
        Ok(Self {
            attrs,
            vis,
            name,
            variants: variants.into_iter().collect(),
        })
    }
}

impl Parse for SetVariant {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let name: Ident = input.parse()?;
        if name == "Unknown" {
            return Err(Error::new(
                name.span(),
                "Unknown is reserved for messages outside of the set",
            ));
        }
        let ty = if input.peek(syn::token::Paren) {
            let content;
            parenthesized!(content in input);
            content.parse()?
        } else {
            let ident = name.clone();
            syn::parse_quote! { #ident }
        };
        Ok(Self { attrs, name, ty })
    }
}

pub fn check_unique_variants(set: &MessageSetDesc) -> syn::Result<()> {
    for (i, v) in set.variants.iter().enumerate() {
        if set.variants[..i].iter().any(|prev| prev.name == v.name) {
            return Err(Error::new(
                v.name.span(),
                format!("{} is listed twice in {}", v.name, set.name),
            ));
        }
    }
    if set.variants.is_empty() {
        return Err(Error::new(Span::call_site(), "empty message set"));
    }
    Ok(())
}
