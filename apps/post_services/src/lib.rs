pub mod config_type;
pub mod modules;

use modules::post::service::PostService;

pub struct AppState {
    pub post_service: PostService
}
