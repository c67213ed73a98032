use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Form;

/// Name of the form field carrying the text to classify.
pub const TEXT_FIELD: &str = "text";

/// The first `text` field of a submitted form, if there is one.
///
/// Accepts `application/x-www-form-urlencoded` and `multipart/form-data`.
/// A request with no content type and an empty body counts as a form without
/// fields; any other body is rejected with `415 Unsupported Media Type`.
#[derive(Debug)]
pub struct SubmittedText(pub Option<String>);

impl<S> FromRequest<S> for SubmittedText
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| {
                v.split(';')
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_ascii_lowercase()
            });

        match content_type.as_deref() {
            Some("application/x-www-form-urlencoded") => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                let text = pairs
                    .into_iter()
                    .find(|(name, _)| name == TEXT_FIELD)
                    .map(|(_, value)| value);
                Ok(Self(text))
            }
            Some("multipart/form-data") => {
                let mut multipart = Multipart::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                while let Some(field) = multipart
                    .next_field()
                    .await
                    .map_err(IntoResponse::into_response)?
                {
                    if field.name() == Some(TEXT_FIELD) {
                        let text = field.text().await.map_err(IntoResponse::into_response)?;
                        return Ok(Self(Some(text)));
                    }
                }
                Ok(Self(None))
            }
            None => {
                let body = Bytes::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                if body.is_empty() {
                    Ok(Self(None))
                } else {
                    Err(unsupported("request body has no content type"))
                }
            }
            Some(other) => Err(unsupported(&format!("unsupported content type {other}"))),
        }
    }
}

fn unsupported(message: &str) -> Response {
    tracing::debug!(reason = message, "submission body rejected");
    (StatusCode::UNSUPPORTED_MEDIA_TYPE, message.to_string()).into_response()
}
