use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::types::MANAGED_PREFIX;

/// The `config/managed` document: every managed object type the platform knows about.
///
/// Parsing is lenient: only the entry a request addresses is ever inspected,
/// so a malformed sibling must not break lookups for well-formed objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManagedObjects {
    #[serde(default, deserialize_with = "object_entries")]
    pub objects: Vec<ManagedObjectConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedObjectConfig {
    /// Entries without a string name never match a component
    #[serde(default, deserialize_with = "or_default", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    // A missing or null schema reads as "no properties" rather than a failed lookup
    #[serde(default, deserialize_with = "or_default")]
    pub schema: ManagedObjectSchema,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManagedObjectSchema {
    /// Property definitions in declaration order
    #[serde(default, deserialize_with = "or_default")]
    pub properties: IndexMap<String, PropertySchema>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Deserialize `T`, falling back to its default on `null` or a wrong shape
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Keep every entry that is an object; anything else is skipped
fn object_entries<'de, D>(deserializer: D) -> Result<Vec<ManagedObjectConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match Value::deserialize(deserializer)? {
        Value::Array(entries) => entries,
        _ => return Ok(Vec::new()),
    };
    Ok(entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}

/// JSON-schema-like property definition. Only `isProtected` is interpreted;
/// anything else is carried along untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub struct PropertySchema {
    pub is_protected: bool,
    pub extra: Map<String, Value>,
}

impl From<Value> for PropertySchema {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => {
                // Only a literal `true` marks a property as protected
                let is_protected = matches!(fields.remove("isProtected"), Some(Value::Bool(true)));
                Self { is_protected, extra: fields }
            }
            _ => Self::default(),
        }
    }
}

impl From<PropertySchema> for Value {
    fn from(schema: PropertySchema) -> Self {
        let mut fields = schema.extra;
        if schema.is_protected {
            fields.insert("isProtected".to_string(), Value::Bool(true));
        }
        Value::Object(fields)
    }
}

impl PropertySchema {
    pub fn protected() -> Self {
        Self { is_protected: true, extra: Map::new() }
    }
}

impl ManagedObjectConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            schema: ManagedObjectSchema::default(),
            extra: Map::new(),
        }
    }

    /// Builder-style property declaration, kept in call order
    pub fn with_property(mut self, name: impl Into<String>, schema: PropertySchema) -> Self {
        self.schema.properties.insert(name.into(), schema);
        self
    }

    /// Component path the host uses for this object, e.g. `managed/user`
    pub fn component(&self) -> Option<String> {
        self.name.as_ref().map(|name| format!("{}{}", MANAGED_PREFIX, name))
    }

    pub fn matches_component(&self, component: &str) -> bool {
        match (self.name.as_deref(), component.strip_prefix(MANAGED_PREFIX)) {
            (Some(name), Some(requested)) => name == requested,
            _ => false,
        }
    }

    /// Names of the properties flagged `isProtected`, in declaration order
    pub fn protected_properties(&self) -> Vec<String> {
        self.schema
            .properties
            .iter()
            .filter(|(_, property)| property.is_protected)
            .map(|(name, _)| name.clone())
            .collect()
    }
}

impl ManagedObjects {
    /// First managed object whose component path equals `component`
    pub fn find(&self, component: &str) -> Option<&ManagedObjectConfig> {
        self.objects.iter().find(|object| object.matches_component(component))
    }
}
