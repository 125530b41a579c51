//! Task CRUD handlers.
//!
//! Each handler calls the task service, then publishes a [`TaskEvent`] for the
//! completed operation. Publishing never changes the response.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use taskcache_core::task::{
    CreateTaskRequest, DeleteTaskResponse, Task, TaskAction, TaskEvent, TaskListResponse,
};

use crate::{handlers::AppError, state::AppState};

/// Create a new task (POST /api/tasks).
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), AppError> {
    let Json(request) = payload?;

    let event = TaskEvent::started(TaskAction::CreateTask);
    let task = state.service.create_task(&request).await?;
    state
        .publish_event(event.with_task_id(task.id).finish())
        .await;

    tracing::info!(task_id = task.id, title = %task.title, "Created new task");
    Ok((StatusCode::CREATED, Json(task)))
}

/// List all tasks (GET /api/tasks).
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<TaskListResponse>, AppError> {
    let event = TaskEvent::started(TaskAction::ListTasks);
    let tasks = state.service.list_tasks().await?;
    state.publish_event(event.finish()).await;

    Ok(Json(TaskListResponse { tasks }))
}

/// Get a single task (GET /api/tasks/{id}).
pub async fn get_task(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Task>, AppError> {
    let Path(id) = path?;

    let event = TaskEvent::started(TaskAction::GetTask).with_task_id(id);
    let task = state.service.get_task(id).await?;
    state.publish_event(event.finish()).await;

    Ok(Json(task))
}

/// Mark a task completed (PATCH /api/tasks/{id}/complete).
pub async fn complete_task(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Task>, AppError> {
    let Path(id) = path?;

    let event = TaskEvent::started(TaskAction::CompleteTask).with_task_id(id);
    let task = state.service.complete_task(id).await?;
    state.publish_event(event.finish()).await;

    tracing::info!(task_id = id, "Completed task");
    Ok(Json(task))
}

/// Delete a task (DELETE /api/tasks/{id}).
pub async fn delete_task(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteTaskResponse>, AppError> {
    let Path(id) = path?;

    let event = TaskEvent::started(TaskAction::DeleteTask).with_task_id(id);
    state.service.delete_task(id).await?;
    state.publish_event(event.finish()).await;

    tracing::info!(task_id = id, "Deleted task");
    Ok(Json(DeleteTaskResponse { success: true }))
}
