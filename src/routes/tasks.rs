use crate::{
    error::AppError,
    models::{CreateTaskInput, UpdateTaskInput, DEFAULT_TASK_STATUS},
    store::TaskStore,
    validation,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;

/// Lists all tasks in creation order.
///
/// ## Responses:
/// - `200 OK`: Success envelope with the task array in `data`.
#[get("")]
pub async fn list_tasks(store: web::Data<TaskStore>) -> Result<impl Responder, AppError> {
    let tasks = store.find_all().await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "List of tasks",
        "data": tasks
    })))
}

/// Creates a new task.
///
/// `content` is required and must be non-empty; `status` defaults to
/// `"pending"` when omitted.
///
/// ## Responses:
/// - `201 Created`: Success envelope with the created task.
/// - `400 Bad Request`: Field-level validation errors.
#[post("")]
pub async fn create_task(
    store: web::Data<TaskStore>,
    input: web::Json<CreateTaskInput>,
) -> Result<impl Responder, AppError> {
    validation::check(&*input, CreateTaskInput::FIELDS)?;

    let content = input.content.clone().unwrap_or_default();
    let status = input
        .status
        .clone()
        .unwrap_or_else(|| DEFAULT_TASK_STATUS.to_string());

    let task = store.create(&content, &status).await?;

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Task created successfully",
        "data": task
    })))
}

/// Fetches a single task by id.
///
/// ## Responses:
/// - `200 OK`: Success envelope with the task.
/// - `400 Bad Request`: `{"error": "Record not found!"}` when the id is
///   unknown.
#[get("/{id}")]
pub async fn get_task(
    store: web::Data<TaskStore>,
    id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let task = store.find_by_id(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Task details",
        "data": task
    })))
}

/// Updates a task. Only supplied fields are overwritten; the rest keep
/// their stored values. The existence check runs before body validation, so
/// an unknown id wins over a bad payload.
///
/// ## Responses:
/// - `200 OK`: Success envelope with the updated task.
/// - `400 Bad Request`: Not found, or field-level validation errors.
#[put("/{id}")]
pub async fn update_task(
    store: web::Data<TaskStore>,
    id: web::Path<i32>,
    input: web::Json<UpdateTaskInput>,
) -> Result<impl Responder, AppError> {
    let id = id.into_inner();
    let task = store.find_by_id(id).await?;

    validation::check(&*input, UpdateTaskInput::FIELDS)?;

    let content = input.content.clone().unwrap_or(task.content);
    let status = input.status.clone().unwrap_or(task.status);

    let task = store.update(id, &content, &status).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Task updated successfully",
        "data": task
    })))
}

/// Deletes a task permanently.
///
/// ## Responses:
/// - `200 OK`: Success envelope with no `data`.
/// - `400 Bad Request`: `{"error": "Record not found!"}` when the id is
///   unknown.
#[delete("/{id}")]
pub async fn delete_task(
    store: web::Data<TaskStore>,
    id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    store.delete(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Task deleted successfully"
    })))
}
