//! DNS API operation proxy.
//!
//! ```text
//! POST /api/v1/operations/GetDnsRecords ["example.com", "www"]
//! ```
//!
//! The JSON body is forwarded as the operation's argument list. A rejected
//! token ends the session and answers `302 Found` with `Location` set to this
//! request's URL. Clients treat that response as "signed out" and log in
//! again before retrying; following the redirect with `GET` finds no route.

use actix_web::{HttpRequest, HttpResponse, post, web};
use serde_json::Value;
use tracing::error;

use crate::domain::{Error, OperationError, OperationOutcome};
use crate::inbound::http::ApiResult;
use crate::inbound::http::caller::{HttpCaller, redirect_response};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Run the named operation for the signed-in user.
#[post("/operations/{operation}")]
pub async fn execute_operation(
    state: web::Data<HttpState>,
    session: SessionContext,
    request: HttpRequest,
    operation: web::Path<String>,
    args: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let user = session.user();
    let caller = HttpCaller::new(&request, &session);
    let outcome = state
        .executor
        .execute_operation(&caller, user.as_ref(), operation.as_str(), &args)
        .await
        .map_err(|err| map_operation_error(err, user.is_some()))?;

    Ok(match outcome {
        OperationOutcome::Completed(result) => HttpResponse::Ok().json(result),
        OperationOutcome::SessionExpired(redirect) => redirect_response(&redirect),
    })
}

fn map_operation_error(err: OperationError, signed_in: bool) -> Error {
    match err {
        OperationError::InvalidInput if !signed_in => Error::unauthorized("login required"),
        OperationError::InvalidInput => Error::invalid_request(err.to_string()),
        OperationError::ServerFault(message) => Error::invalid_request(message),
        OperationError::Transport(transport) => {
            error!(error = %transport, "dns api unreachable");
            Error::service_unavailable("DNS service unavailable")
        }
        OperationError::MalformedResponse { .. } | OperationError::EmptyFailureBody { .. } => {
            Error::internal(err.to_string())
        }
    }
}
