use crate::{
    error::AppError,
    models::{CreateUserInput, UpdateUserInput},
    security::hash_password,
    store::UserStore,
    validation,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;

/// Lists all users. Responses never include password hashes.
#[get("")]
pub async fn list_users(store: web::Data<UserStore>) -> Result<impl Responder, AppError> {
    let users = store.find_all().await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "List of users",
        "data": users
    })))
}

/// Creates a new user, hashing the submitted password before it is stored.
///
/// ## Responses:
/// - `201 Created`: Success envelope with the created user (no hash).
/// - `400 Bad Request`: Field-level validation errors, or a duplicate
///   username.
/// - `500 Internal Server Error`: Password hashing failed.
#[post("")]
pub async fn create_user(
    store: web::Data<UserStore>,
    input: web::Json<CreateUserInput>,
) -> Result<impl Responder, AppError> {
    validation::check(&*input, CreateUserInput::FIELDS)?;

    let username = input.username.clone().unwrap_or_default();
    let password = input.password.clone().unwrap_or_default();
    let password_hash = hash_password(&password)?;

    let user = store.create(&username, &password_hash).await?;

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "User created successfully",
        "data": user
    })))
}

/// Fetches a single user by id.
#[get("/{id}")]
pub async fn get_user(
    store: web::Data<UserStore>,
    id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let user = store.find_by_id(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "User details",
        "data": user
    })))
}

/// Updates a user. Absent fields keep their stored values; in particular
/// the password hash is only recomputed when a new password is supplied.
/// The existence check runs before body validation.
#[put("/{id}")]
pub async fn update_user(
    store: web::Data<UserStore>,
    id: web::Path<i32>,
    input: web::Json<UpdateUserInput>,
) -> Result<impl Responder, AppError> {
    let id = id.into_inner();
    let user = store.find_by_id(id).await?;

    validation::check(&*input, UpdateUserInput::FIELDS)?;

    let username = input.username.clone().unwrap_or(user.username);
    let password_hash = match &input.password {
        Some(password) => Some(hash_password(password)?),
        None => None,
    };

    let user = store.update(id, &username, password_hash.as_deref()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "User updated successfully",
        "data": user
    })))
}

/// Deletes a user permanently.
#[delete("/{id}")]
pub async fn delete_user(
    store: web::Data<UserStore>,
    id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    store.delete(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "User deleted successfully"
    })))
}
