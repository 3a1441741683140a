use crate::error::{MarketError, MarketResult};
use ethers::types::U256;
use serde::{Deserialize, Serialize};

/// A value in the contract's ABI type system. Used both for call arguments
/// handed to the ABI encoder and for results returned by the query runner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum TypedValue {
    U8(u8),
    U32(u32),
    U64(u64),
    BigUint(U256),
    Bool(bool),
    Address(String),
    TokenIdentifier(String),
    Bytes(Vec<u8>),
    Option(Option<Box<TypedValue>>),
    List(Vec<TypedValue>),
    Struct { name: String, fields: Vec<Field> },
    Enum { name: String, discriminant: u8 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: TypedValue,
}

impl Field {
    pub fn new(name: &str, value: TypedValue) -> Field {
        Field {
            name: name.to_string(),
            value,
        }
    }
}

impl TypedValue {
    pub fn token(identifier: &str) -> TypedValue {
        TypedValue::TokenIdentifier(identifier.to_string())
    }

    pub fn address(address: &str) -> TypedValue {
        TypedValue::Address(address.to_string())
    }

    pub fn big_uint(amount: U256) -> TypedValue {
        TypedValue::BigUint(amount)
    }

    pub fn optional(value: Option<TypedValue>) -> TypedValue {
        TypedValue::Option(value.map(Box::new))
    }

    pub fn record(name: &str, fields: Vec<Field>) -> TypedValue {
        TypedValue::Struct {
            name: name.to_string(),
            fields,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            TypedValue::U8(_) => "u8",
            TypedValue::U32(_) => "u32",
            TypedValue::U64(_) => "u64",
            TypedValue::BigUint(_) => "BigUint",
            TypedValue::Bool(_) => "bool",
            TypedValue::Address(_) => "Address",
            TypedValue::TokenIdentifier(_) => "TokenIdentifier",
            TypedValue::Bytes(_) => "bytes",
            TypedValue::Option(_) => "Option",
            TypedValue::List(_) => "List",
            TypedValue::Struct { .. } => "struct",
            TypedValue::Enum { .. } => "enum",
        }
    }

    fn unexpected(&self, wanted: &str) -> MarketError {
        MarketError::Decode(format!("expected {wanted}, got {}", self.kind()))
    }

    pub fn as_u64(&self) -> MarketResult<u64> {
        match self {
            TypedValue::U8(n) => Ok(u64::from(*n)),
            TypedValue::U32(n) => Ok(u64::from(*n)),
            TypedValue::U64(n) => Ok(*n),
            TypedValue::BigUint(n) if *n <= U256::from(u64::MAX) => Ok(n.as_u64()),
            TypedValue::BigUint(n) => Err(MarketError::Decode(format!("{n} does not fit in u64"))),
            other => Err(other.unexpected("integer")),
        }
    }

    pub fn as_big_uint(&self) -> MarketResult<U256> {
        match self {
            TypedValue::BigUint(n) => Ok(*n),
            TypedValue::U8(n) => Ok(U256::from(*n)),
            TypedValue::U32(n) => Ok(U256::from(*n)),
            TypedValue::U64(n) => Ok(U256::from(*n)),
            other => Err(other.unexpected("BigUint")),
        }
    }

    /// Query gateways are loose about booleans: accept anything truthy.
    pub fn as_bool(&self) -> bool {
        match self {
            TypedValue::Bool(b) => *b,
            TypedValue::U8(n) => *n != 0,
            TypedValue::U32(n) => *n != 0,
            TypedValue::U64(n) => *n != 0,
            TypedValue::BigUint(n) => !n.is_zero(),
            TypedValue::Bytes(bytes) => bytes.iter().any(|b| *b != 0),
            TypedValue::TokenIdentifier(s) | TypedValue::Address(s) => {
                matches!(s.to_lowercase().as_str(), "true" | "1" | "01")
            }
            TypedValue::Option(inner) => inner.as_deref().map_or(false, TypedValue::as_bool),
            TypedValue::Enum { discriminant, .. } => *discriminant != 0,
            TypedValue::List(items) => !items.is_empty(),
            TypedValue::Struct { .. } => true,
        }
    }

    /// Addresses, token identifiers and utf8 byte strings all render as text.
    pub fn as_string(&self) -> MarketResult<String> {
        match self {
            TypedValue::Address(s) | TypedValue::TokenIdentifier(s) => Ok(s.clone()),
            TypedValue::Bytes(bytes) => String::from_utf8(bytes.clone())
                .map_err(|e| MarketError::Decode(format!("bytes are not utf8: {e}"))),
            other => Err(other.unexpected("string")),
        }
    }

    pub fn as_bytes(&self) -> MarketResult<&[u8]> {
        match self {
            TypedValue::Bytes(bytes) => Ok(bytes),
            TypedValue::Address(s) | TypedValue::TokenIdentifier(s) => Ok(s.as_bytes()),
            other => Err(other.unexpected("bytes")),
        }
    }

    pub fn as_list(&self) -> MarketResult<&[TypedValue]> {
        match self {
            TypedValue::List(items) => Ok(items),
            other => Err(other.unexpected("List")),
        }
    }

    /// `None` for both an empty `Option` and a missing value.
    pub fn as_option(&self) -> Option<&TypedValue> {
        match self {
            TypedValue::Option(inner) => inner.as_deref(),
            other => Some(other),
        }
    }

    /// Enums render by their symbolic name, never by tag.
    pub fn as_enum_name(&self) -> MarketResult<&str> {
        match self {
            TypedValue::Enum { name, .. } => Ok(name),
            other => Err(other.unexpected("enum")),
        }
    }

    pub fn field(&self, name: &str) -> MarketResult<&TypedValue> {
        match self {
            TypedValue::Struct { fields, .. } => fields
                .iter()
                .find(|f| f.name == name)
                .map(|f| &f.value)
                .ok_or_else(|| MarketError::Decode(format!("struct has no field `{name}`"))),
            other => Err(other.unexpected("struct")),
        }
    }

    /// A field that may be left out of the record or wrapped in an empty `Option`.
    pub fn optional_field(&self, name: &str) -> MarketResult<Option<&TypedValue>> {
        match self {
            TypedValue::Struct { fields, .. } => Ok(fields
                .iter()
                .find(|f| f.name == name)
                .and_then(|f| f.value.as_option())),
            other => Err(other.unexpected("struct")),
        }
    }

    pub fn field_names(&self) -> Vec<&str> {
        match self {
            TypedValue::Struct { fields, .. } => fields.iter().map(|f| f.name.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}
