use aws_lambda_events::event::apigw::ApiGatewayProxyRequest;
use aws_sdk_s3::Client as S3Client;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use resize_shared::{AppState, Config, S3Store};
use std::sync::Arc;

mod handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let log_level = std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(tracing::Level::DEBUG);
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .init();

    let config = Config::from_env()?;

    // Initialize the S3 client once at startup
    let aws_config = aws_config::load_from_env().await;
    let state = AppState::new(S3Store::new(S3Client::new(&aws_config)), config);

    run(service_fn(
        move |event: LambdaEvent<ApiGatewayProxyRequest>| {
            let state = Arc::clone(&state);
            async move { handler::function_handler(event, state).await }
        },
    ))
    .await
}
