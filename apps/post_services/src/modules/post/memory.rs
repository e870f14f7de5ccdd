use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::{error::PostError, model::{NewPost, PostDocument, PostPayload}, query::PostStore};

/// Process-local store keeping insertion order. Used by tests and `kind = "memory"` runs.
#[derive(Default)]
pub struct MemoryPostStore{
    posts: RwLock<Vec<PostDocument>>
}

impl MemoryPostStore{
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore{
    async fn create_post(&self, data: NewPost) -> Result<ObjectId, PostError> {
        let post_id = ObjectId::new();
        let mut post = PostDocument::from(data);
        post.id = Some(post_id);

        self.posts.write().await.push(post);
        Ok(post_id)
    }

    async fn get_all_posts(&self) -> Result<Vec<PostPayload>, PostError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().cloned().map(PostDocument::into_payload).collect())
    }

    async fn update_post(&self, post_id: ObjectId, data: NewPost) -> Result<bool, PostError> {
        let mut posts = self.posts.write().await;

        match posts.iter_mut().find(|post| post.id == Some(post_id)) {
            Some(post) => {
                post.title = data.title;
                post.content = data.content;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_post(&self, post_id: ObjectId) -> Result<bool, PostError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|post| post.id != Some(post_id));

        Ok(posts.len() < before)
    }

    async fn ping(&self) -> Result<(), PostError> {
        Ok(())
    }
}
