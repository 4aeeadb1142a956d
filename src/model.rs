use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Movie {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub director: String,
    pub year: i32,
    pub age_rating: i32,
    /// Path of the poster image under `/static/`.
    pub poster: String,
    /// YouTube video id.
    #[serde(rename = "movie_url")]
    pub video_id: String,
    pub is_paid: bool,
}

/// A user as reported by the user service. The default value is the
/// anonymous visitor.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub is_paid: bool,
}

#[derive(Deserialize, Debug, Default)]
pub struct UserLookup {
    #[serde(flatten)]
    pub user: User,
    #[serde(default, alias = "Error")]
    pub error: Option<String>,
}
