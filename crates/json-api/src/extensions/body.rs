//! Raw request body helpers.

use salvo::{http::header::CONTENT_LENGTH, prelude::Request};
use tracing::warn;

use crate::errors::ApiError;

const BODY_TOO_LARGE: &str = "Request body too large.";
const BODY_UNREADABLE: &str = "Invalid JSON body.";

/// Read the request body as raw bytes, bounded by a size limit.
pub(crate) trait RequestBodyExt {
    async fn body_bytes(&mut self, max_size: usize) -> Result<Vec<u8>, ApiError>;
}

impl RequestBodyExt for Request {
    async fn body_bytes(&mut self, max_size: usize) -> Result<Vec<u8>, ApiError> {
        let declared = self.header::<u64>(CONTENT_LENGTH);

        if exceeds(declared, max_size) {
            warn!(declared, max_size, "rejecting oversized request body");

            return Err(ApiError::payload_too_large(BODY_TOO_LARGE));
        }

        match self.payload_with_max_size(max_size).await {
            Ok(bytes) => Ok(bytes.to_vec()),
            Err(source) => {
                warn!(max_size, "failed to read request body: {source}");

                Err(ApiError::bad_request(BODY_UNREADABLE))
            }
        }
    }
}

fn exceeds(declared: Option<u64>, max_size: usize) -> bool {
    match (declared, u64::try_from(max_size)) {
        (Some(declared), Ok(max_size)) => declared > max_size,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use salvo::{prelude::*, test::TestClient};
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn echo_len(req: &mut Request) -> Result<String, ApiError> {
        let body = req.body_bytes(8).await?;

        Ok(body.len().to_string())
    }

    fn service() -> Service {
        Service::new(Router::with_path("echo").post(echo_len))
    }

    #[tokio::test]
    async fn body_within_limit_is_read() -> TestResult {
        let res = TestClient::post("http://example.com/echo")
            .raw_json("{\"a\":1}")
            .send(&service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() -> TestResult {
        let res = TestClient::post("http://example.com/echo")
            .raw_json("{\"items\":[1,2,3,4,5]}")
            .add_header(CONTENT_LENGTH, "21", true)
            .send(&service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::PAYLOAD_TOO_LARGE));

        Ok(())
    }

    #[test]
    fn undeclared_length_is_not_rejected_up_front() {
        assert!(!exceeds(None, 8), "missing content-length must defer to the reader");
        assert!(exceeds(Some(9), 8), "declared length above limit must be rejected");
        assert!(!exceeds(Some(8), 8), "declared length at limit is allowed");
    }
}
