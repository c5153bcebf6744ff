use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::Id;

/// A movie as stored in the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Movie {
    #[schema(value_type = Uuid)]
    pub id: Id,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub released: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
}

impl Movie {
    pub fn new(title: impl Into<String>, released: Option<i32>, tagline: Option<&str>) -> Self {
        Self {
            id: Id::new_v4(),
            title: title.into(),
            released,
            tagline: tagline.map(String::from),
        }
    }
}
