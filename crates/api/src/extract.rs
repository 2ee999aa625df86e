//! Request extractors that report rejections as [`AppError`].

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor.
///
/// Same as [`axum::Json`], except a body that cannot be parsed, or that does
/// not match the expected fields, answers with the usual `{error, code}`
/// payload instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
