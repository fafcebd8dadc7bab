//! Extractors for dashboard actions.
//!
//! Thin wrappers over axum's `Form` and `Path` whose rejections are
//! [`AppError`]s, so a malformed body or id gets a JSON `{"error": ...}`
//! answer like any other failed action.

use axum::{
    Form,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// URL-encoded form body.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionForm<T>(pub T);

impl<T, S> FromRequest<S> for ActionForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// Path parameters, such as the numeric id in `/dashboard/skills/{id}/delete`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ActionPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}
