use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use axum::extract::{Form, FromRequest, Json as JsonPayload, Request};
use axum::http::header::CONTENT_TYPE;
use serde::de::{self, Visitor};
use tracing::warn;

use crate::application::errors::{ApiError, AppError};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PayloadSource {
    Json,
    Form,
}

/// Request body that may arrive as JSON (API clients) or form-encoded
/// (browser submissions). Handlers use the source to choose between a
/// JSON response and a redirect.
#[derive(Debug)]
pub struct FlexiblePayload<T> {
    inner: T,
    source: PayloadSource,
}

impl<T> FlexiblePayload<T> {
    pub fn into_parts(self) -> (T, PayloadSource) {
        (self.inner, self.source)
    }
}

impl<S, T> FromRequest<S> for FlexiblePayload<T>
where
    S: Send + Sync,
    T: Send + 'static,
    JsonPayload<T>: FromRequest<S>,
    Form<T>: FromRequest<S>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let JsonPayload(payload) =
                JsonPayload::<T>::from_request(req, state)
                    .await
                    .map_err(|_| {
                        warn!("failed to parse JSON payload");
                        ApiError::from(AppError::validation("invalid JSON payload"))
                    })?;

            return Ok(Self {
                inner: payload,
                source: PayloadSource::Json,
            });
        }

        if content_type.is_empty() || content_type.starts_with("application/x-www-form-urlencoded")
        {
            let Form(payload) = Form::<T>::from_request(req, state).await.map_err(|_| {
                warn!("failed to parse form payload");
                ApiError::from(AppError::validation("invalid form payload"))
            })?;

            return Ok(Self {
                inner: payload,
                source: PayloadSource::Form,
            });
        }

        Err(AppError::validation("unsupported content type").into())
    }
}

/// Deserialize an optional number, treating empty strings as `None`.
///
/// HTML form submissions send empty strings for blank
/// `<input type="number">` fields, which `serde_urlencoded` cannot parse
/// as `Option<i32>`. This handles both JSON numbers and form strings.
pub(crate) fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: de::Deserializer<'de>,
    T: FromStr,
    <T as FromStr>::Err: fmt::Display,
{
    struct EmptyStringVisitor<T>(PhantomData<T>);

    impl<'de, T> Visitor<'de> for EmptyStringVisitor<T>
    where
        T: FromStr,
        <T as FromStr>::Err: fmt::Display,
    {
        type Value = Option<T>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number, numeric string, or empty string")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            if v.is_empty() {
                Ok(None)
            } else {
                v.parse::<T>().map(Some).map_err(E::custom)
            }
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            v.to_string().parse::<T>().map(Some).map_err(E::custom)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            v.to_string().parse::<T>().map(Some).map_err(E::custom)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2: de::Deserializer<'de>>(self, d: D2) -> Result<Self::Value, D2::Error> {
            d.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(EmptyStringVisitor(PhantomData))
}
