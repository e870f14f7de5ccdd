use async_trait::async_trait;
use futures::TryStreamExt;
use mongo_libs::MongoDb;
use mongodb::{bson::{doc, oid::ObjectId}, Collection};

use super::{error::PostError, model::{NewPost, PostDocument, PostPayload}};

/// Persistence seam for posts. Ids are always assigned by the implementation.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn create_post(&self, data: NewPost) -> Result<ObjectId, PostError>;

    /// Every post in the store's natural order.
    async fn get_all_posts(&self) -> Result<Vec<PostPayload>, PostError>;

    /// Overwrites title and content; `false` when no post has `post_id`.
    async fn update_post(&self, post_id: ObjectId, data: NewPost) -> Result<bool, PostError>;

    /// `false` when no post has `post_id`.
    async fn delete_post(&self, post_id: ObjectId) -> Result<bool, PostError>;

    async fn ping(&self) -> Result<(), PostError>;
}

pub struct MongoPostStore{
    db: MongoDb,
    posts: Collection<PostDocument>
}

impl MongoPostStore{
    pub fn new(db: MongoDb, collection: &str) -> Self {
        let posts = db.collection::<PostDocument>(collection);
        Self { db, posts }
    }
}

#[async_trait]
impl PostStore for MongoPostStore{
    async fn create_post(&self, data: NewPost) -> Result<ObjectId, PostError> {
        let result = self.posts.insert_one(PostDocument::from(data)).await?;

        match result.inserted_id.as_object_id() {
            Some(post_id) => Ok(post_id),
            None => Err(PostError::Storage(format!(
                "unexpected inserted id: {}",
                result.inserted_id
            ))),
        }
    }

    async fn get_all_posts(&self) -> Result<Vec<PostPayload>, PostError> {
        let cursor = self.posts.find(doc! {}).await?;
        let posts: Vec<PostDocument> = cursor.try_collect().await?;

        Ok(posts.into_iter().map(PostDocument::into_payload).collect())
    }

    async fn update_post(&self, post_id: ObjectId, data: NewPost) -> Result<bool, PostError> {
        let result = self
            .posts
            .update_one(
                doc! { "_id": post_id },
                doc! { "$set": { "title": data.title, "content": data.content } },
            )
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn delete_post(&self, post_id: ObjectId) -> Result<bool, PostError> {
        let result = self.posts.delete_one(doc! { "_id": post_id }).await?;

        Ok(result.deleted_count > 0)
    }

    async fn ping(&self) -> Result<(), PostError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
