use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::Id;

/// A person node: an actor, director or anyone else attached to a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Person {
    #[schema(value_type = Uuid)]
    pub id: Id,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub born: Option<i32>,
}

/// Parameters for creating a new person. The id is server-generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewPerson {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub born: Option<i32>,
}

impl From<NewPerson> for Person {
    fn from(params: NewPerson) -> Self {
        Person {
            id: Id::new_v4(),
            name: params.name,
            born: params.born,
        }
    }
}
