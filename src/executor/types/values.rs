//! Runtime value types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Runtime value type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "v")]
pub enum Val {
    Null,
    Bool(bool),
    Num(f64),
    Str(String),
    /// Structured result record, e.g. the resolved kube_config
    Record(HashMap<String, Val>),
    /// Opaque provider object supplied by the script
    Provider(ProviderRef),
}

impl Val {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Val::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Build a single-field record value
    pub fn record(field: &str, value: Val) -> Val {
        let mut fields = HashMap::new();
        fields.insert(field.to_string(), value);
        Val::Record(fields)
    }

    /// Read a field of a record value
    pub fn field(&self, name: &str) -> Option<&Val> {
        match self {
            Val::Record(fields) => fields.get(name),
            _ => None,
        }
    }
}

/// Narrow capability interface for cluster-provider objects
///
/// The configuration resolver only ever needs the constructor tag and a
/// named attribute; it never inspects a provider's internals directly.
pub trait ProviderAttrs {
    /// Constructor/type tag, if the object carries one
    fn type_tag(&self) -> Option<&str>;

    /// Read a named attribute
    fn attr(&self, name: &str) -> Option<&Val>;
}

/// Concrete provider adapter built by provider-constructor builtins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderRef {
    /// Name of the constructor that produced this object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constructor: Option<String>,
    /// Named attributes
    pub attrs: HashMap<String, Val>,
}

impl ProviderRef {
    pub fn new(constructor: &str, attrs: HashMap<String, Val>) -> Self {
        ProviderRef {
            constructor: Some(constructor.to_string()),
            attrs,
        }
    }
}

impl ProviderAttrs for ProviderRef {
    fn type_tag(&self) -> Option<&str> {
        self.constructor.as_deref()
    }

    fn attr(&self, name: &str) -> Option<&Val> {
        self.attrs.get(name)
    }
}
