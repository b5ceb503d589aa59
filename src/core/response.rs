//! 核心响应处理模块：`{ "data": { "type": ..., "attributes": ... } }` 信封

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: Resource<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource<T> {
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: T,
}

impl<T> Envelope<T> {
    pub fn new(kind: impl Into<String>, attributes: T) -> Self {
        Self {
            data: Resource {
                kind: kind.into(),
                attributes,
            },
        }
    }

    pub fn kind(&self) -> &str {
        &self.data.kind
    }

    pub fn attributes(&self) -> &T {
        &self.data.attributes
    }

    /// Drop the wrapper and keep the payload.
    pub fn into_attributes(self) -> T {
        self.data.attributes
    }
}
