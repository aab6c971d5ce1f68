//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Wraps the Actix session so handlers only store, read, or drop the signed-in
//! [`SessionUser`].

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, SessionUser};

pub(crate) const API_USER_KEY: &str = "api_user";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Remember the signed-in user in the session cookie.
    pub fn persist_user(&self, user: &SessionUser) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(API_USER_KEY, user)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Signed-in user, if any. An undecodable entry counts as signed out.
    pub fn user(&self) -> Option<SessionUser> {
        match self.0.get::<SessionUser>(API_USER_KEY) {
            Ok(user) => user,
            Err(error) => {
                warn!(%error, "discarding unreadable session user");
                None
            }
        }
    }

    /// Drop the session and clear its cookie.
    pub fn logout(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};

    use crate::inbound::http::test_utils::{session_cookie, test_session_middleware};

    #[actix_web::test]
    async fn round_trips_user() {
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .route(
                    "/set",
                    web::get().to(|session: SessionContext| async move {
                        session.persist_user(&SessionUser::new(
                            "ops@example.com",
                            Some("tok".to_owned()),
                        ))?;
                        Ok::<_, Error>(HttpResponse::Ok())
                    }),
                )
                .route(
                    "/get",
                    web::get().to(|session: SessionContext| async move {
                        match session.user() {
                            Some(user) => HttpResponse::Ok().json(user),
                            None => HttpResponse::NotFound().finish(),
                        }
                    }),
                ),
        )
        .await;

        let set_res = test::call_service(&app, test::TestRequest::get().uri("/set").to_request()).await;
        assert_eq!(set_res.status(), StatusCode::OK);
        let cookie = session_cookie(&set_res).expect("session cookie set");

        let get_req = test::TestRequest::get().uri("/get").cookie(cookie).to_request();
        let user: SessionUser = test::call_and_read_body_json(&app, get_req).await;
        assert_eq!(user, SessionUser::new("ops@example.com", Some("tok".to_owned())));
    }

    #[actix_web::test]
    async fn malformed_entry_reads_as_signed_out() {
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .route(
                    "/set-invalid",
                    web::get().to(|session: Session| async move {
                        session
                            .insert(API_USER_KEY, "not-a-user")
                            .expect("set invalid user");
                        HttpResponse::Ok()
                    }),
                )
                .route(
                    "/get",
                    web::get().to(|session: SessionContext| async move {
                        if session.user().is_some() {
                            HttpResponse::Ok()
                        } else {
                            HttpResponse::Unauthorized()
                        }
                    }),
                ),
        )
        .await;

        let set_res =
            test::call_service(&app, test::TestRequest::get().uri("/set-invalid").to_request()).await;
        let cookie = session_cookie(&set_res).expect("session cookie set");

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/get").cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
