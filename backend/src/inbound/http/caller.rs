//! Actix implementation of the executor's [`CallerContext`].

use actix_web::HttpRequest;
use actix_web::http::header::LOCATION;
use actix_web::HttpResponse;

use super::session::SessionContext;
use crate::domain::Redirect;
use crate::domain::ports::CallerContext;

/// The inbound request and session an operation runs on behalf of.
pub struct HttpCaller<'a> {
    request: &'a HttpRequest,
    session: &'a SessionContext,
}

impl<'a> HttpCaller<'a> {
    /// Borrow the request and its session.
    pub fn new(request: &'a HttpRequest, session: &'a SessionContext) -> Self {
        Self { request, session }
    }
}

impl CallerContext for HttpCaller<'_> {
    fn original_url(&self) -> String {
        self.request.uri().to_string()
    }

    fn logout(&self) {
        self.session.logout();
    }
}

/// `302 Found` pointing at the redirect target.
pub fn redirect_response(redirect: &Redirect) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, redirect.location()))
        .finish()
}
