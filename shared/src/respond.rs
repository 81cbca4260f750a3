use aws_lambda_events::encodings::Body;
use aws_lambda_events::event::apigw::ApiGatewayProxyResponse;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderValue};

/// Successful envelope: the base64-encoded image payload.
///
/// The Content-Type is image/jpeg even when the payload is a passthrough of
/// the original, possibly non-JPEG, bytes.
pub fn image(base64_body: String) -> ApiGatewayProxyResponse {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("image/jpeg"));

    ApiGatewayProxyResponse {
        status_code: 200,
        headers,
        multi_value_headers: HeaderMap::new(),
        body: Some(Body::Text(base64_body)),
        is_base64_encoded: true,
    }
}

/// 400 envelope for a missing or empty request path.
pub fn bad_request() -> ApiGatewayProxyResponse {
    message(400, "No path is provided!")
}

/// 404 envelope naming the (trimmed) path that could not be served.
pub fn not_found(path: &str) -> ApiGatewayProxyResponse {
    message(404, &format!("Invalid image path: {path}"))
}

fn message(status: i64, text: &str) -> ApiGatewayProxyResponse {
    ApiGatewayProxyResponse {
        status_code: status,
        headers: HeaderMap::new(),
        multi_value_headers: HeaderMap::new(),
        // The body is a JSON string, quotes included
        body: Some(Body::Text(serde_json::json!(text).to_string())),
        is_base64_encoded: false,
    }
}
