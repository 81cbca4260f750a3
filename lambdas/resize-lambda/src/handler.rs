use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use base64::Engine;
use lambda_runtime::{Error, LambdaEvent};
use resize_shared::error::PipelineError;
use resize_shared::image_processing::{self, FitOutcome};
use resize_shared::{path, respond, AppState};
use std::sync::Arc;

/// Main Lambda handler - fetches the requested image from S3, shrinks it to
/// the configured width when needed, and returns it base64-encoded.
pub(crate) async fn function_handler(
    event: LambdaEvent<ApiGatewayProxyRequest>,
    state: Arc<AppState>,
) -> Result<ApiGatewayProxyResponse, Error> {
    let request = event.payload;
    tracing::debug!("🖼️ Resize Lambda invoked - Path: {:?}", request.path);

    let Some(image_path) = path::normalize_path(request.path.as_deref()) else {
        tracing::debug!("No path is provided");
        return Ok(respond::bad_request());
    };

    let key = path::storage_key(&state.config.prefix, &image_path);
    tracing::debug!("Storage key: {}", key);

    match fetch_and_fit(&state, &key).await {
        Ok(payload) => {
            tracing::debug!("Payload size: {}", payload.len());
            Ok(respond::image(payload))
        }
        Err(err) => {
            // Everything from fetch through encode collapses to 404; the
            // cause is only logged
            tracing::debug!("Pipeline failed for {}: {}", key, err);
            Ok(respond::not_found(&image_path))
        }
    }
}

/// The fallible stretch of the pipeline: fetch, conditional resize, base64.
async fn fetch_and_fit(state: &AppState, key: &str) -> Result<String, PipelineError> {
    let raw = state.store.get(&state.config.bucket, key).await?;

    let payload = match image_processing::fit_to_width(&raw, state.config.max_width)? {
        FitOutcome::Passthrough => base64::engine::general_purpose::STANDARD.encode(&raw),
        FitOutcome::Resized(jpeg) => base64::engine::general_purpose::STANDARD.encode(jpeg),
    };

    Ok(payload)
}
