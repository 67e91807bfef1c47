use syn::{Attribute, Expr, Ident, LitFloat, LitInt, LitStr, Type, Visibility};

/// Struct declared with `#[ubx_message]` (has a header) or `#[ubx_bundle]`
pub struct MsgDesc {
    pub name: Ident,
    pub vis: Visibility,
    pub attrs: Vec<Attribute>,
    pub header: Option<MsgHeader>,
    pub fields: Vec<MsgField>,
}

impl MsgDesc {
    pub fn fixed_fields(&self) -> impl Iterator<Item = &MsgField> {
        self.fields.iter().filter(|f| f.kind == FieldKind::Fixed)
    }

    /// `(count, list)` pairs in declaration order
    pub fn counted_lists(&self) -> impl Iterator<Item = (&Ident, &MsgField)> {
        self.fields
            .iter()
            .filter_map(|f| f.map.count.as_ref().map(|count| (count, f)))
    }
}

pub struct MsgHeader {
    pub class: u8,
    pub id: u8,
    pub payload_len: PayloadLen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadLen {
    Fixed(u16),
    Max(u16),
}

impl PayloadLen {
    pub fn fixed(&self) -> Option<u16> {
        if let PayloadLen::Fixed(len) = self {
            Some(*len)
        } else {
            None
        }
    }

    pub fn max(&self) -> u16 {
        match self {
            PayloadLen::Fixed(len) | PayloadLen::Max(len) => *len,
        }
    }
}

pub struct MsgField {
    pub name: Ident,
    pub ty: Type,
    pub attrs: Vec<Attribute>,
    pub map: FieldMap,
    pub kind: FieldKind,
}

impl MsgField {
    /// Float type of the physical value, when the field is scaled
    pub fn scaled_type(&self) -> Option<Type> {
        self.map.scale.as_ref()?;
        Some(
            self.map
                .map_type
                .clone()
                .unwrap_or_else(|| syn::parse_quote! { f64 }),
        )
    }

    /// Enumeration the raw value maps to
    pub fn enum_type(&self) -> Option<&Type> {
        if self.map.scale.is_some() {
            None
        } else {
            self.map.map_type.as_ref()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Fixed,
    /// `List<T>`, either counted by a sibling or running to the payload end
    List,
    /// `TrailingString`
    Trailing,
}

#[derive(Default)]
pub struct FieldMap {
    pub map_type: Option<Type>,
    pub scale: Option<LitFloat>,
    pub alias: Option<Ident>,
    pub unit: Option<LitStr>,
    pub default: Option<Expr>,
    pub valid_min: Option<Expr>,
    pub valid_max: Option<Expr>,
    pub fail_on_invalid: bool,
    /// Accept data in reserved bytes and bits instead of failing the read
    pub ignore_reserved: bool,
    pub count: Option<Ident>,
}

pub struct BitfieldDesc {
    pub name: Ident,
    pub vis: Visibility,
    pub attrs: Vec<Attribute>,
    pub repr: Ident,
    pub repr_bits: u32,
    pub members: Vec<BitMember>,
}

impl BitfieldDesc {
    pub fn reserved_mask(&self) -> u64 {
        self.members
            .iter()
            .filter(|m| m.reserved)
            .fold(0, |mask, m| mask | m.mask() << m.offset)
    }
}

pub struct BitMember {
    pub name: Ident,
    pub attrs: Vec<Attribute>,
    pub ty: Type,
    pub bits: u32,
    /// Position of the least significant bit
    pub offset: u32,
    pub map_type: Option<Type>,
    pub reserved: bool,
}

impl BitMember {
    /// Mask of the member value, before shifting into place
    pub fn mask(&self) -> u64 {
        if self.bits >= 64 {
            u64::MAX
        } else {
            (1u64 << self.bits) - 1
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(&self.ty, Type::Path(p) if p.path.is_ident("bool"))
    }
}

pub struct EnumDesc {
    pub name: Ident,
    pub repr: Ident,
    pub variants: Vec<(Ident, LitInt)>,
}

pub struct MessageSetDesc {
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub name: Ident,
    pub variants: Vec<SetVariant>,
}

pub struct SetVariant {
    pub attrs: Vec<Attribute>,
    pub name: Ident,
    pub ty: Type,
}
