//! API routes.

use std::cmp::{max, min};

use axum::{Router, routing::get};

use crate::app::{AppError, AppErrorKind, AppState};

pub mod user;

/// Builds the API router.
///
/// Layers and state are attached by the caller.
pub fn router() -> Router<AppState> {
    Router::<AppState>::new().nest(
        "/users",
        Router::<AppState>::new()
            .route("/", get(user::list))
            .route("/{id}", get(user::show))
            .route("/by-name/{username}", get(user::show_by_name)),
    )
}

/// Pagination helper.
pub struct Pagination<T> {
    results: Vec<T>,
    limit: u32,
}

impl<T> Pagination<T> {
    /// Creates a new pagination with a count limit.
    pub fn new(results: impl Into<Vec<T>>) -> Pagination<T> {
        Pagination {
            results: results.into(),
            limit: 25,
        }
    }

    /// Changes the limit of the pagination.
    ///
    /// By default, it is `25`.
    pub fn limit(self, limit: u32) -> Pagination<T> {
        Pagination { limit, ..self }
    }

    /// Paginates the results.
    pub fn paginate(&self, page: u32, count: u32) -> Result<&[T], AppError> {
        let count = count as usize;
        if count < 1 || count > self.limit as usize {
            return Err(
                AppError::from(AppErrorKind::FieldOutOfRange("count".to_owned())).with_message(
                    format!(
                        "Field `count` is out of range; possible values: 1..={}",
                        self.limit
                    ),
                ),
            );
        }

        let max_page = max(self.results.len() / count, 1);
        let page = page as usize;
        if page < 1 || page > max_page {
            return Err(
                AppError::from(AppErrorKind::FieldOutOfRange("page".to_owned())).with_message(
                    format!("Field `page` is out of range; possible values: 1..={}", max_page),
                ),
            );
        }

        if self.results.len() > 0 {
            let start = (page - 1) * count;
            let end = min(self.results.len(), start + count);

            Ok(&self.results[start..end])
        } else {
            Ok(&[])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginate_slices_pages() {
        let pagination = Pagination::new((1..=10).collect::<Vec<_>>());

        assert_eq!(pagination.paginate(1, 4).unwrap(), &[1, 2, 3, 4]);
        assert_eq!(pagination.paginate(2, 4).unwrap(), &[5, 6, 7, 8]);
    }

    #[test]
    fn paginate_rejects_out_of_range_params() {
        let pagination = Pagination::new((1..=10).collect::<Vec<_>>());

        assert!(pagination.paginate(1, 0).is_err());
        assert!(pagination.paginate(1, 26).is_err());
        assert!(pagination.paginate(0, 5).is_err());
        assert!(pagination.paginate(9, 5).is_err());
    }

    #[test]
    fn paginate_empty_results() {
        let pagination = Pagination::<i32>::new(Vec::new());

        assert_eq!(pagination.paginate(1, 25).unwrap(), &[] as &[i32]);
    }
}
