use axum::async_trait;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use validator::Validate;

use crate::utils::error::AppError;

/// JSON body that has been deserialized and then checked with its
/// `Validate` rules. Any failure becomes a 400 `ValidationError`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                AppError::validation(
                    "Invalid request body",
                    Some(json!({ "body": rejection.body_text() })),
                )
            })?;

        value.validate().map_err(|errors| {
            AppError::validation(
                "Request body failed validation",
                serde_json::to_value(&errors).ok(),
            )
        })?;

        Ok(Self(value))
    }
}

/// Path parameters whose parse failures become a 400 `ValidationError`
/// instead of axum's plain-text rejection.
#[derive(Debug, Clone)]
pub struct ValidatedPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| {
                AppError::validation(
                    "Invalid path parameter",
                    Some(json!({ "path": rejection.body_text() })),
                )
            })?;

        Ok(Self(value))
    }
}

/// Query string where a repeated key keeps its last value, so
/// `?city=Berlin&city=Munich` reads as `city=Munich`.
#[derive(Debug, Clone)]
pub struct LastValueQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for LastValueQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: QueryRejection| {
                AppError::validation(
                    "Invalid query string",
                    Some(json!({ "query": rejection.body_text() })),
                )
            })?;

        let mut last: Map<String, Value> = Map::new();
        for (key, value) in pairs {
            last.insert(key, Value::String(value));
        }

        let value = serde_json::from_value(Value::Object(last)).map_err(|e| {
            AppError::validation("Invalid query string", Some(json!({ "query": e.to_string() })))
        })?;

        Ok(Self(value))
    }
}
