use std::{collections::HashMap, sync::Arc};

use logger_libs::{error_logger, info_logger, warning_logger};
use mongodb::bson::oid::ObjectId;
use validator::Validate;

use super::{error::PostError, model::{NewPost, PostPayload, PostRequest}, query::PostStore};

#[derive(Clone)]
pub struct PostService{
    store: Arc<dyn PostStore>
}

impl PostService{
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    /// Both fields must be present and non-empty; nothing reaches the store otherwise.
    pub fn validate(
        log_id: &str,
        handler: &str,
        data: PostRequest
    ) -> Result<NewPost, PostError> {
        let method_name = "validate";

        if let Err(errors) = data.validate() {
            let error_map: HashMap<String, String> = errors
                .field_errors()
                .into_iter()
                .filter_map(|(field, field_errors)| {
                    field_errors
                        .first()
                        .and_then(|error| error.message.as_ref())
                        .map(|message| (field.to_string(), message.to_string()))
                })
                .collect();

            warning_logger(log_id, handler, method_name, &format!("{:?}", error_map));
            return Err(PostError::Validation);
        }

        let (Some(title), Some(content)) = (data.title, data.content) else {
            warning_logger(log_id, handler, method_name, "missing field");
            return Err(PostError::Validation);
        };

        info_logger(log_id, handler, method_name);
        Ok(NewPost { title, content })
    }

    fn parse_post_id(log_id: &str, handler: &str, post_id: &str) -> Result<ObjectId, PostError> {
        ObjectId::parse_str(post_id).map_err(|error| {
            error_logger(log_id, handler, "parse_post_id", &format!("{}: {}", post_id, error));
            PostError::from(error)
        })
    }

    pub async fn create_post(
        &self,
        log_id: &str,
        data: PostRequest
    ) -> Result<String, PostError> {
        let handler_name = "create_post";
        let new_post = Self::validate(log_id, handler_name, data)?;

        match self.store.create_post(new_post).await {
            Ok(post_id) => {
                info_logger(log_id, handler_name, "insert_db");
                Ok(post_id.to_hex())
            }
            Err(error) => {
                error_logger(log_id, handler_name, "insert_db", &error.to_string());
                Err(error)
            }
        }
    }

    pub async fn get_all_posts(&self, log_id: &str) -> Result<Vec<PostPayload>, PostError> {
        let handler_name = "get_all_posts";

        match self.store.get_all_posts().await {
            Ok(posts) => {
                info_logger(log_id, handler_name, "find_db");
                Ok(posts)
            }
            Err(error) => {
                error_logger(log_id, handler_name, "find_db", &error.to_string());
                Err(error)
            }
        }
    }

    pub async fn update_post(
        &self,
        log_id: &str,
        post_id: &str,
        data: PostRequest
    ) -> Result<(), PostError> {
        let handler_name = "update_post";
        let update_data = Self::validate(log_id, handler_name, data)?;
        let post_id = Self::parse_post_id(log_id, handler_name, post_id)?;

        match self.store.update_post(post_id, update_data).await {
            Ok(true) => {
                info_logger(log_id, handler_name, "update_db");
                Ok(())
            }
            Ok(false) => {
                warning_logger(log_id, handler_name, "update_db", "post not found");
                Err(PostError::NotFound)
            }
            Err(error) => {
                error_logger(log_id, handler_name, "update_db", &error.to_string());
                Err(error)
            }
        }
    }

    pub async fn delete_post(&self, log_id: &str, post_id: &str) -> Result<(), PostError> {
        let handler_name = "delete_post";
        let post_id = Self::parse_post_id(log_id, handler_name, post_id)?;

        match self.store.delete_post(post_id).await {
            Ok(true) => {
                info_logger(log_id, handler_name, "delete_db");
                Ok(())
            }
            Ok(false) => {
                warning_logger(log_id, handler_name, "delete_db", "post not found");
                Err(PostError::NotFound)
            }
            Err(error) => {
                error_logger(log_id, handler_name, "delete_db", &error.to_string());
                Err(error)
            }
        }
    }

    pub async fn health_check(&self, log_id: &str) -> Result<(), PostError> {
        self.store.ping().await.map_err(|error| {
            error_logger(log_id, "health_check", "ping_db", &error.to_string());
            error
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::post::memory::MemoryPostStore;

    fn request(title: Option<&str>, content: Option<&str>) -> PostRequest {
        PostRequest {
            title: title.map(String::from),
            content: content.map(String::from),
        }
    }

    fn service() -> PostService {
        PostService::new(Arc::new(MemoryPostStore::new()))
    }

    #[test]
    fn validate_rejects_missing_or_empty_fields() {
        let cases = [
            request(None, Some("B")),
            request(Some("A"), None),
            request(Some(""), Some("B")),
            request(Some("A"), Some("")),
            request(None, None),
        ];

        for case in cases {
            assert_eq!(PostService::validate("test", "validate", case), Err(PostError::Validation));
        }
    }

    #[test]
    fn validate_accepts_whitespace_content() {
        let post = PostService::validate("test", "validate", request(Some("A"), Some(" "))).unwrap();

        assert_eq!(post, NewPost { title: "A".into(), content: " ".into() });
    }

    #[actix_web::test]
    async fn invalid_create_does_not_insert() {
        let service = service();

        let result = service.create_post("test", request(Some("A"), Some(""))).await;

        assert_eq!(result, Err(PostError::Validation));
        assert!(service.get_all_posts("test").await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn update_checks_fields_before_id() {
        let service = service();

        let result = service.update_post("test", "not-an-id", request(None, Some("B"))).await;

        assert_eq!(result, Err(PostError::Validation));
    }

    #[actix_web::test]
    async fn malformed_ids_are_storage_errors() {
        let service = service();

        let update = service.update_post("test", "xyz", request(Some("A"), Some("B"))).await;
        let delete = service.delete_post("test", "xyz").await;

        assert!(matches!(update, Err(PostError::Storage(_))));
        assert!(matches!(delete, Err(PostError::Storage(_))));
    }

    #[actix_web::test]
    async fn update_keeps_identifier() {
        let service = service();
        let post_id = service.create_post("test", request(Some("A"), Some("B"))).await.unwrap();

        service.update_post("test", &post_id, request(Some("A2"), Some("B2"))).await.unwrap();

        let posts = service.get_all_posts("test").await.unwrap();
        assert_eq!(
            posts,
            vec![PostPayload { id: post_id, title: "A2".into(), content: "B2".into() }]
        );
    }
}
