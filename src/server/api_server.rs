use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};
use crate::config::constants::MAX_REQUEST_BODY_BYTES;
use crate::errors::{ProxyError, ProxyResult};
use crate::services::response_interpreter::ResponseInterpreter;
use crate::structs::api_response::{ErrorEnvelope, HealthResponse};
use crate::structs::generation_request::GenerationRequest;
use crate::structs::model_catalog::ModelCatalog;

pub struct ApiServer {
    interpreter: Arc<ResponseInterpreter>,
    catalog: Arc<ModelCatalog>,
}

impl ApiServer {
    pub fn new(interpreter: ResponseInterpreter, catalog: ModelCatalog) -> Self {
        Self {
            interpreter: Arc::new(interpreter),
            catalog: Arc::new(catalog),
        }
    }

    /// Serves until `shutdown` resolves.
    pub async fn run<S>(&self, addr: SocketAddr, shutdown: S) -> ProxyResult<()>
    where
        S: Future<Output = ()> + Send + 'static,
    {
        let routes = routes(Arc::clone(&self.interpreter), Arc::clone(&self.catalog));

        let (bound, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(addr, shutdown)
            .map_err(|e| ProxyError::system_error("bind", &format!("{}: {}", addr, e)))?;

        log::info!("🌐 Gemini proxy listening on http://{}", bound);
        log::info!(
            "🤖 Default model: {} (instruction channel: {})",
            self.interpreter.default_model(),
            self.interpreter.channel()
        );

        server.await;

        log::info!("✅ Server shutdown complete");
        Ok(())
    }
}

pub fn routes(
    interpreter: Arc<ResponseInterpreter>,
    catalog: Arc<ModelCatalog>,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    let interpreter_filter = warp::any().map(move || Arc::clone(&interpreter));
    let generate_catalog = Arc::clone(&catalog);
    let catalog_filter = warp::any().map(move || Arc::clone(&generate_catalog));

    let generate = warp::path!("generate")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_REQUEST_BODY_BYTES))
        .and(warp::body::json())
        .and(interpreter_filter)
        .and(catalog_filter)
        .and_then(generate_handler);

    let health = warp::path!("health")
        .and(warp::get())
        .map(|| warp::reply::json(&HealthResponse::ok()));

    let models = warp::path!("models")
        .and(warp::get())
        .map(move || warp::reply::json(catalog.as_ref()));

    generate
        .or(health)
        .or(models)
        .recover(handle_rejection)
        .with(warp::log("gemini_proxy::http"))
}

async fn generate_handler(
    request: GenerationRequest,
    interpreter: Arc<ResponseInterpreter>,
    catalog: Arc<ModelCatalog>,
) -> Result<warp::reply::Response, Infallible> {
    if let Some(model) = request.model_override() {
        if !catalog.contains(model) {
            log::warn!("⚠️ Model override '{}' is not in the known catalog, forwarding anyway", model);
        }
    }

    match interpreter.generate_with_outcome(&request).await {
        Ok((result, missing)) => {
            if request.json_mode {
                if let Some(reason) = missing {
                    log::debug!("No JSON extracted from {} response: {:?}", result.model_used, reason);
                }
            }
            log::info!(
                "✅ Generated {} chars with {} (json_mode: {}, json_data: {})",
                result.text.len(),
                result.model_used,
                request.json_mode,
                result.json_data.is_some()
            );
            Ok(warp::reply::json(&result).into_response())
        }
        Err(e) => {
            log::warn!("❌ Generation failed: {}", e);
            Ok(error_reply(status_for(&e), e.to_string()))
        }
    }
}

fn status_for(error: &ProxyError) -> StatusCode {
    match error {
        ProxyError::ValidationError { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        ProxyError::GenerationError(_)
        | ProxyError::ConfigurationError { .. }
        | ProxyError::SystemError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_reply(status: StatusCode, detail: String) -> warp::reply::Response {
    warp::reply::with_status(warp::reply::json(&ErrorEnvelope::new(detail)), status).into_response()
}

async fn handle_rejection(err: Rejection) -> Result<warp::reply::Response, Infallible> {
    let (status, detail) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not Found".to_string())
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::UNPROCESSABLE_ENTITY, format!("Invalid request body: {}", e))
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, format!("Request body exceeds {} bytes", MAX_REQUEST_BODY_BYTES))
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        (StatusCode::LENGTH_REQUIRED, "Content-Length header is required".to_string())
    } else if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        (StatusCode::UNSUPPORTED_MEDIA_TYPE, "Content-Type must be application/json".to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed".to_string())
    } else {
        log::error!("Unhandled rejection: {:?}", err);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
    };

    Ok(error_reply(status, detail))
}
