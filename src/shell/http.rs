use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::shifts::use_cases::list_shifts::inbound::http as list_shifts_http;
use crate::modules::work_items::use_cases::finish_task::inbound::http as finish_task_http;
use crate::modules::work_items::use_cases::get_details::inbound::http as get_details_http;
use crate::modules::work_items::use_cases::list_tasks::inbound::http as list_tasks_http;
use crate::modules::work_items::use_cases::start_task::inbound::http as start_task_http;
use crate::modules::work_items::use_cases::update_task::inbound::http as update_task_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/tasks", get(list_tasks_http::handle))
        .route("/shifts", get(list_shifts_http::handle))
        .route("/details", get(get_details_http::handle))
        .route("/updateTask", post(update_task_http::handle))
        .route("/startTask", post(start_task_http::handle))
        .route("/finishTask", post(finish_task_http::handle))
        .with_state(state)
}

async fn root() -> &'static str {
    "Welcome to the Shiftboard API!"
}
