use actix_web::{
    delete, error::JsonPayloadError, get, post, put,
    web::{Data, Json, JsonConfig, Path, ServiceConfig},
    Error, HttpRequest, HttpResponse, Responder
};
use logger_libs::{debug_logger, warning_logger};
use serde_json::json;
use uuid::Uuid;

use crate::AppState;
use super::{
    error::PostError,
    model::{CreatedResponse, MessageResponse, PostListResponse, PostRequest}
};

fn new_log_id(handler: &str) -> String {
    format!("{}.{}", handler, Uuid::new_v4())
}

/// Unreadable bodies answer with the same `{error}` shape as every other failure.
fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> Error {
    let log_id = new_log_id("json_body");
    warning_logger(&log_id, "json_body", "deserialize", &error.to_string());
    PostError::InvalidBody(error.to_string()).into()
}

#[post("/posts")]
pub async fn create_post(
    app_data: Data<AppState>,
    body: Json<PostRequest>
) -> Result<HttpResponse, PostError> {
    let log_id = new_log_id("create_post");
    let request = body.into_inner();
    let req_log = request.clone();

    let post_id = app_data.post_service.create_post(&log_id, request).await?;

    let response = CreatedResponse {
        message: String::from("Post created successfully"),
        post_id
    };
    debug_logger(&log_id, "create_post", "response", &req_log, &response);

    Ok(HttpResponse::Created().json(response))
}

#[get("/posts")]
pub async fn get_all_posts(
    app_data: Data<AppState>
) -> Result<HttpResponse, PostError> {
    let log_id = new_log_id("get_all_posts");

    let posts = app_data.post_service.get_all_posts(&log_id).await?;

    Ok(HttpResponse::Ok().json(PostListResponse { posts }))
}

#[put("/posts/{post_id}")]
pub async fn update_post(
    app_data: Data<AppState>,
    path: Path<String>,
    body: Json<PostRequest>
) -> Result<HttpResponse, PostError> {
    let post_id = path.into_inner();
    let log_id = new_log_id("update_post");
    let request = body.into_inner();
    let req_log = request.clone();

    app_data.post_service.update_post(&log_id, &post_id, request).await?;

    let response = MessageResponse { message: String::from("Post updated successfully") };
    debug_logger(&log_id, "update_post", "response", &req_log, &response);

    Ok(HttpResponse::Ok().json(response))
}

#[delete("/posts/{post_id}")]
pub async fn delete_post(
    app_data: Data<AppState>,
    path: Path<String>
) -> Result<HttpResponse, PostError> {
    let post_id = path.into_inner();
    let log_id = new_log_id("delete_post");

    app_data.post_service.delete_post(&log_id, &post_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: String::from("Post deleted successfully")
    }))
}

#[get("/healthcheck")]
pub async fn api_health_check(app_data: Data<AppState>) -> impl Responder {
    let log_id = new_log_id("health_check");

    match app_data.post_service.health_check(&log_id).await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "status": "success",
            "message": "API healthy and ready to go!"
        })),
        Err(error) => HttpResponse::ServiceUnavailable().json(json!({
            "error": format!("Cannot connect to database: {}", error)
        }))
    }
}

pub fn post_config(config: &mut ServiceConfig){
    config
        .app_data(JsonConfig::default().error_handler(json_error_handler))
        .service(api_health_check)
        .service(create_post)
        .service(get_all_posts)
        .service(update_post)
        .service(delete_post);
}
