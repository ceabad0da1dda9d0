//! The single request-shaping path shared by every resource method.

use serde::Serialize;
use serde_json::Value;

use crate::clients::{HttpMethod, Requester};
use crate::rest::{params, ResourceError};

/// Sends one request and returns the dispatcher's result unchanged.
///
/// `body` is filtered through [`params::to_body`] first, so absent optional
/// fields never reach the wire.
///
/// # Errors
///
/// Returns [`ResourceError::Serialization`] if the body cannot be serialized,
/// or [`ResourceError::Http`] carrying the dispatcher's error as-is.
pub(crate) async fn dispatch<R, B>(
    requester: &R,
    method: HttpMethod,
    path: &str,
    body: Option<&B>,
) -> Result<Value, ResourceError>
where
    R: Requester,
    B: Serialize + ?Sized,
{
    let body = body.map(params::to_body).transpose()?;
    tracing::debug!(method = %method, path = %path, "Dispatching resource request");
    Ok(requester.request(method, path, None, body).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::mock::MockRequester;
    use crate::clients::{HttpError, InvalidHttpRequestError};
    use serde_json::json;

    #[tokio::test]
    async fn test_dispatch_filters_body() {
        let requester = MockRequester::new().respond_ok(json!({"data": {"id": 1}}));

        let result = dispatch(
            &requester,
            HttpMethod::Post,
            "projects",
            Some(&json!({"name": "Docs", "cname": null})),
        )
        .await
        .unwrap();

        assert_eq!(result, json!({"data": {"id": 1}}));
        let calls = requester.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].body, Some(json!({"name": "Docs"})));
        assert_eq!(calls[0].query, None);
    }

    #[tokio::test]
    async fn test_dispatch_without_body() {
        let requester = MockRequester::new();

        dispatch::<_, Value>(&requester, HttpMethod::Delete, "projects/3", None)
            .await
            .unwrap();

        assert_eq!(requester.calls()[0].body, None);
    }

    #[tokio::test]
    async fn test_dispatch_passes_errors_through() {
        let requester = MockRequester::new().respond(Err(HttpError::InvalidRequest(
            InvalidHttpRequestError::MissingBodyType,
        )));

        let result = dispatch::<_, Value>(&requester, HttpMethod::Get, "projects/3", None).await;

        assert!(matches!(
            result,
            Err(ResourceError::Http(HttpError::InvalidRequest(
                InvalidHttpRequestError::MissingBodyType
            )))
        ));
    }
}
