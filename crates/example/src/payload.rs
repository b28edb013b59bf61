//! Validated create/update payloads.

use serde::{Deserialize, Serialize};

use skeletor_core::{Description, DomainResult, Title};

/// Payload for creating a record. Both fields are required and validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateExample {
    pub title: String,
    pub description: String,
}

impl CreateExample {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> DomainResult<Self> {
        let title = Title::new(title)?;
        let description = Description::new(description)?;
        Ok(Self {
            title: title.into(),
            description: description.into(),
        })
    }
}

/// Partial update payload; omitted fields leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateExample {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UpdateExample {
    pub fn title(title: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            title: Some(Title::new(title)?.into()),
            description: None,
        })
    }

    pub fn description(description: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            title: None,
            description: Some(Description::new(description)?.into()),
        })
    }

    pub fn both(title: impl Into<String>, description: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            title: Some(Title::new(title)?.into()),
            description: Some(Description::new(description)?.into()),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}
