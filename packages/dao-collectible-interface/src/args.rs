//! A typed key/value bag built from three parallel lists of argument
//! names, string-encoded values and type tags. This is how proposal
//! actions receive their parameters before they are checked against
//! an action's schema.

use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("argument lists differ in length: ({names}) names, ({values}) values, ({types}) types")]
    LengthMismatch {
        names: usize,
        values: usize,
        types: usize,
    },

    #[error("argument ({name}) is given more than once")]
    DuplicateName { name: String },

    #[error("argument ({name}) has unknown type ({type_tag})")]
    UnknownType { name: String, type_tag: String },

    #[error("argument ({name}) value ({value}) is not a valid {arg_type}")]
    InvalidValue {
        name: String,
        value: String,
        arg_type: ArgType,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArgType {
    Address,
    U64,
    String,
}

impl ArgType {
    /// Parses a type tag. `string` also accepts the fully qualified
    /// forms some clients send.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "address" => Some(ArgType::Address),
            "u64" => Some(ArgType::U64),
            "string" | "String" | "0x1::string::String" => Some(ArgType::String),
            _ => None,
        }
    }
}

impl std::fmt::Display for ArgType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgType::Address => write!(f, "address"),
            ArgType::U64 => write!(f, "u64"),
            ArgType::String => write!(f, "string"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgValue {
    /// An unvalidated address. Consumers validate it against their
    /// chain's address format.
    Address(String),
    U64(u64),
    String(String),
}

impl ArgValue {
    pub fn arg_type(&self) -> ArgType {
        match self {
            ArgValue::Address(_) => ArgType::Address,
            ArgValue::U64(_) => ArgType::U64,
            ArgValue::String(_) => ArgType::String,
        }
    }

    fn parse(name: &str, value: String, arg_type: ArgType) -> Result<Self, ArgumentError> {
        let invalid = |value: String| ArgumentError::InvalidValue {
            name: name.to_string(),
            value,
            arg_type,
        };
        match arg_type {
            ArgType::Address => {
                if value.trim().is_empty() {
                    Err(invalid(value))
                } else {
                    Ok(ArgValue::Address(value))
                }
            }
            ArgType::U64 => value
                .parse::<u64>()
                .map(ArgValue::U64)
                .map_err(|_| invalid(value)),
            ArgType::String => Ok(ArgValue::String(value)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArgumentBag {
    args: BTreeMap<String, ArgValue>,
}

impl ArgumentBag {
    /// Builds a bag from parallel lists. The lists must have equal
    /// length, names must be unique and every value must parse as its
    /// declared type.
    pub fn from_parts(
        names: Vec<String>,
        values: Vec<String>,
        types: Vec<String>,
    ) -> Result<Self, ArgumentError> {
        if names.len() != values.len() || names.len() != types.len() {
            return Err(ArgumentError::LengthMismatch {
                names: names.len(),
                values: values.len(),
                types: types.len(),
            });
        }

        let mut args = BTreeMap::new();
        for ((name, value), type_tag) in names.into_iter().zip(values).zip(types) {
            let arg_type = ArgType::from_tag(&type_tag).ok_or_else(|| {
                ArgumentError::UnknownType {
                    name: name.clone(),
                    type_tag,
                }
            })?;
            let value = ArgValue::parse(&name, value, arg_type)?;
            if args.contains_key(&name) {
                return Err(ArgumentError::DuplicateName { name });
            }
            args.insert(name, value);
        }
        Ok(Self { args })
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.args.get(name)
    }

    /// The address stored under `name`, if there is one and it was
    /// declared as an address.
    pub fn address(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            ArgValue::Address(addr) => Some(addr),
            _ => None,
        }
    }

    pub fn u64(&self, name: &str) -> Option<u64> {
        match self.get(name)? {
            ArgValue::U64(value) => Some(*value),
            _ => None,
        }
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            ArgValue::String(value) => Some(value),
            _ => None,
        }
    }
}
