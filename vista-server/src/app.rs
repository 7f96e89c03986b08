//! Vista general application items.

use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;

use anyhow::Error;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::Request;
use axum::middleware::Next;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query},
    response::{IntoResponse, Response},
};

use http::{HeaderValue, StatusCode, header};

use vista_model::{ApiError, ErrorCode};

use sqlx::{SqlitePool, pool::PoolOptions};

use derive_more::{Deref, Display, From};

use crate::config::ServerConfig;
use crate::schema;
use crate::store::UserStore;

/// Shared server state.
///
/// Cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// The port the server is binded to.
    pub port: u16,
    /// A database connection pool.
    pub db: SqlitePool,
    /// Read access to the user directory.
    pub users: UserStore,
}

impl AppState {
    /// Creates a new `AppState`.
    ///
    /// See [`Config`](crate::config::Config) to learn more on what the
    /// options do.
    pub async fn new(config: ServerConfig) -> Result<AppState, Error> {
        let ServerConfig { port, .. } = config;

        // get url
        let Some(database_url) = config.database_url.as_ref() else {
            return Err(Error::msg("`DATABASE_URL` not present"));
        };

        // establish database connection
        let pool = PoolOptions::new().connect(database_url).await?;

        schema::migrate(&pool).await?;

        Ok(AppState {
            port,
            users: UserStore::new(pool.clone()),
            db: pool,
        })
    }
}

impl Debug for AppState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("port", &self.port)
            .finish_non_exhaustive()
    }
}

/// App REST headers.
pub async fn app_rest_headers(request: Request, next: Next) -> Response {
    let mut res = next.run(request).await;

    // apply additional headers for REST safety
    res.headers_mut().extend([
        (header::CACHE_CONTROL, HeaderValue::from_static("no-store")),
        (
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static("frame-ancestors 'none'"),
        ),
        (
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ),
        (header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY")),
    ]);

    res
}

/// App Query extractor.
#[derive(Deref, FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// App JSON extractor and responder.
#[derive(Deref, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl<T> IntoResponse for AppJson<T>
where
    Json<T>: IntoResponse,
{
    fn into_response(self) -> Response {
        Json(self.0).into_response()
    }
}

/// An app error.
#[derive(Debug)]
pub struct AppError {
    kind: AppErrorKind,
    /// An optional override message.
    message: Option<String>,
}

impl AppError {
    /// Checks if an error is internal.
    pub fn is_internal(&self) -> bool {
        self.kind.is_internal()
    }

    /// Attachs an override message to the error.
    pub fn with_message(self, message: impl Into<String>) -> AppError {
        AppError {
            message: Some(message.into()),
            ..self
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(message) = self.message.as_ref() {
            f.write_str(message)
        } else {
            Display::fmt(&self.kind, f)
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            AppErrorKind::Json(err) => Some(err),
            AppErrorKind::Database(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<T> for AppError
where
    AppErrorKind: From<T>,
{
    fn from(value: T) -> Self {
        AppError {
            kind: AppErrorKind::from(value),
            message: None,
        }
    }
}

#[derive(Debug, Display, From)]
pub enum AppErrorKind {
    /// The request's query params were malformed or unexpected.
    #[display("{_0}")]
    Query(QueryRejection),
    /// The request's JSON body was malformed or unexpected.
    #[display("{_0}")]
    Json(JsonRejection),
    /// A data field's value is out of range.
    #[from(ignore)]
    FieldOutOfRange(String),
    /// The resource wasn't found.
    #[from(ignore)]
    #[display("Resource not found")]
    NotFound,
    /// An internal database error happened that was unhandled.
    #[display("{_0}")]
    Database(sqlx::Error),
}

impl AppErrorKind {
    /// Checks if an error is internal.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            AppErrorKind::Database(_) | AppErrorKind::Json(JsonRejection::BytesRejection(_))
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(mut self) -> Response {
        let (status, mut error, internal_error) = match self.kind {
            // QUERY errors
            AppErrorKind::Query(QueryRejection::FailedToDeserializeQueryString(error)) => (
                StatusCode::BAD_REQUEST,
                ApiError {
                    code: ErrorCode::InvalidData,
                    message: error.to_string(),
                },
                None,
            ),
            // JSON errors
            AppErrorKind::Json(JsonRejection::JsonDataError(error)) => (
                StatusCode::BAD_REQUEST,
                ApiError {
                    code: ErrorCode::InvalidData,
                    message: error.to_string(),
                },
                None,
            ),
            AppErrorKind::Json(JsonRejection::JsonSyntaxError(error)) => (
                StatusCode::BAD_REQUEST,
                ApiError {
                    code: ErrorCode::MalformedJson,
                    message: error.to_string(),
                },
                None,
            ),
            // Other request errors
            AppErrorKind::FieldOutOfRange(name) => (
                StatusCode::BAD_REQUEST,
                ApiError {
                    code: ErrorCode::InvalidData,
                    message: format!("Field `{}`'s value is out of range.", name),
                },
                None,
            ),
            AppErrorKind::NotFound => (
                StatusCode::NOT_FOUND,
                ApiError {
                    code: ErrorCode::NotFound,
                    message: "The resource was not found.".into(),
                },
                None,
            ),
            // create a generic internal error
            error_kind => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError {
                    code: ErrorCode::InternalServerError,
                    message: "An internal server error occured.".into(),
                },
                Some(AppError {
                    kind: error_kind,
                    message: self.message.take(),
                }),
            ),
        };

        if let Some(message) = self.message {
            error.message = message;
        }

        let mut response = (status, AppJson(error)).into_response();
        if let Some(error) = internal_error {
            response.extensions_mut().insert(Arc::new(error));
        }
        response
    }
}
