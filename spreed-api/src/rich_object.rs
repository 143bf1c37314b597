//! Rich objects for sharing into a chat
//!
//! A rich object is what Talk renders in place of the `{object}`
//! placeholder of a message: a file, a location, a calendar event. On the
//! wire it is an object type, an id, a name and free-form extra metadata.

use serde_json::{Map, Value};

/// A shareable rich object
#[derive(Debug, Clone, PartialEq)]
pub struct RichObject {
    object_type: String,
    id: String,
    name: String,
    extra: Map<String, Value>,
}

impl RichObject {
    /// An object of an arbitrary type
    pub fn new(
        object_type: impl Into<String>,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            object_type: object_type.into(),
            id: id.into(),
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// A file reference
    pub fn file(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new("file", id, name)
    }

    /// A calendar event reference
    pub fn calendar_event(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new("calendar-event", id, name)
    }

    /// A geographic location
    pub fn geo_location(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self::new("geo-location", format!("geo:{},{}", latitude, longitude), name)
            .with_field("latitude", json_number(latitude))
            .with_field("longitude", json_number(longitude))
    }

    /// Attach an extra metadata field
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// The object type
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    /// The object id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The metadata map sent to the server
    pub fn metadata(&self) -> Value {
        let mut map = Map::new();
        map.insert("id".into(), Value::String(self.id.clone()));
        map.insert("name".into(), Value::String(self.name.clone()));
        for (key, value) in &self.extra {
            map.insert(key.clone(), value.clone());
        }
        Value::Object(map)
    }
}

fn json_number(value: f64) -> Value {
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}
