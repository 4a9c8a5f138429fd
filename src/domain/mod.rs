//! Operation descriptors: static metadata mapping one tool to one REST call.

pub mod request;

use serde_json::{json, Map, Value as JsonValue};

pub use request::{prepare, PreparedRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an argument travels in the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    Path,
    Query,
    /// One field of the JSON body object.
    Body,
    /// The whole JSON body, passed through as given.
    RawBody,
}

/// JSON-Schema hint for the generated input schema. Not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Boolean,
    Array,
    Object,
    Any,
}

/// How the request body is shaped for an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    None,
    /// Object assembled from supplied `Body` params; `{}` when none supplied.
    Fields,
    /// The `RawBody` argument verbatim; no body when absent.
    Raw,
    /// Always `{}`.
    Empty,
}

#[derive(Debug, Clone, Copy)]
pub struct Param {
    pub name: &'static str,
    pub location: ParamLocation,
    pub kind: ParamKind,
    pub required: bool,
    pub description: &'static str,
}

#[derive(Debug)]
pub struct Operation {
    pub name: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
    pub description: &'static str,
    pub body: BodyKind,
    pub params: &'static [Param],
}

impl Operation {
    pub fn param(&self, name: &str) -> Option<&'static Param> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn required_params(&self) -> impl Iterator<Item = &'static Param> {
        self.params.iter().filter(|p| p.required)
    }

    /// JSON Schema describing the tool arguments.
    pub fn input_schema(&self) -> JsonValue {
        let mut properties = Map::new();
        for p in self.params {
            let mut prop = Map::new();
            if let Some(ty) = schema_type(p.kind) {
                prop.insert("type".into(), JsonValue::String(ty.into()));
            }
            prop.insert("description".into(), JsonValue::String(p.description.into()));
            properties.insert(p.name.into(), JsonValue::Object(prop));
        }
        let required: Vec<&str> = self.required_params().map(|p| p.name).collect();
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
            "additionalProperties": false,
        })
    }
}

fn schema_type(kind: ParamKind) -> Option<&'static str> {
    match kind {
        ParamKind::String => Some("string"),
        ParamKind::Integer => Some("integer"),
        ParamKind::Boolean => Some("boolean"),
        ParamKind::Array => Some("array"),
        ParamKind::Object => Some("object"),
        ParamKind::Any => None,
    }
}
