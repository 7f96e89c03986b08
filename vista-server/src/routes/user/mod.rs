//! User directory endpoints.

use axum::{
    debug_handler,
    extract::{Path, State},
};

use vista_model::{
    request::user::ListUsersQuery,
    user::{User, UserList},
};

use crate::{
    app::{AppError, AppErrorKind, AppJson, AppQuery, AppState},
    routes::Pagination,
};

/// Lists all users, most recently created first.
#[debug_handler]
pub async fn list(
    AppQuery(query): AppQuery<ListUsersQuery>,
    State(state): State<AppState>,
) -> Result<AppJson<Vec<User>>, AppError> {
    let mut users = state.users.users().await?.into_iter().collect::<UserList>();

    users.sort_newest_first();

    Ok(AppJson(
        Pagination::new(users)
            .limit(25)
            .paginate(query.page.unwrap_or(1), query.count.unwrap_or(25))?
            .to_owned(),
    ))
}

/// Gets a user by their id.
#[debug_handler]
pub async fn show(
    State(state): State<AppState>,
    Path((id,)): Path<(i64,)>,
) -> Result<AppJson<User>, AppError> {
    match state.users.user_by_id(id).await? {
        Some(user) => Ok(AppJson(user)),
        None => Err(AppError::from(AppErrorKind::NotFound)
            .with_message(format!("The user of id {} does not exist.", id))),
    }
}

/// Gets a user by their username.
#[debug_handler]
pub async fn show_by_name(
    State(state): State<AppState>,
    Path((username,)): Path<(String,)>,
) -> Result<AppJson<User>, AppError> {
    match state.users.user_by_name(&username).await? {
        Some(user) => Ok(AppJson(user)),
        None => Err(AppError::from(AppErrorKind::NotFound)
            .with_message(format!("The user `{}` does not exist.", username))),
    }
}
