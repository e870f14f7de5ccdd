use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /posts` and `PUT /posts/{id}`. Absent keys stay `None` so they fail validation.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default)]
pub struct PostRequest{
    #[validate(required(message = "title is required"), length(min = 1, message = "title is empty"))]
    pub title: Option<String>,
    #[validate(required(message = "content is required"), length(min = 1, message = "content is empty"))]
    pub content: Option<String>
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct NewPost{
    pub title: String,
    pub content: String
}

/// Stored shape of a post; `_id` is left to the store on insert.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PostDocument{
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub content: String
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PostPayload{
    pub id: String,
    pub title: String,
    pub content: String
}

impl From<NewPost> for PostDocument {
    fn from(post: NewPost) -> Self {
        Self { id: None, title: post.title, content: post.content }
    }
}

impl PostDocument {
    pub fn into_payload(self) -> PostPayload {
        PostPayload {
            id: self.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: self.title,
            content: self.content,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse{
    pub message: String,
    pub post_id: String
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse{
    pub message: String
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PostListResponse{
    pub posts: Vec<PostPayload>
}
