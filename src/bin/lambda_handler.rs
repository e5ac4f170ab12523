//! AWS Lambda handler exposing the calculators over HTTP
//!
//! Accepts a tagged calculation request as a JSON POST body and returns the
//! result. Validation failures (bad or missing input) map to 400 with
//! `{"success":false,"error":...}`; an internal computation fault maps to
//! 500. Supports Lambda Function URLs for direct HTTP access.

use fincalc_system::{evaluate, CalcError, CalculationRequest, CalculationResult};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SuccessBody {
    success: bool,
    result: CalculationResult,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    let body = ErrorBody {
        success: false,
        error: message.to_string(),
    };
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn json_response(result: CalculationResult) -> Response<Body> {
    let body = SuccessBody {
        success: true,
        result,
    };
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Parse request body
    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: CalculationRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            let mapped = CalcError::from_deserialize(&e);
            log::warn!("rejected request body: {}", mapped);
            return Ok(error_response(400, &mapped.to_string()));
        }
    };

    match evaluate(&request) {
        Ok(result) => Ok(json_response(result)),
        Err(err) if err.is_validation() => {
            log::warn!("validation failure: {}", err);
            Ok(error_response(400, &err.to_string()))
        }
        Err(err) => {
            log::error!("computation fault: {}", err);
            Ok(error_response(500, &err.to_string()))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
