//! Cookie-backed session identity and shared response helpers

use actix_web::{
    cookie::Cookie,
    dev::Payload,
    http::header::{self, ContentType},
    FromRequest, HttpRequest, HttpResponse, HttpResponseBuilder,
};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "todo_session";

/// The caller's session id, read from the `todo_session` cookie or
/// freshly minted. Extracted infallibly on every route; the cookie is
/// attached to the response only when the id is new.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    pub id: String,
    is_new: bool,
}

impl SessionHandle {
    fn from_http_request(req: &HttpRequest) -> Self {
        match req.cookie(SESSION_COOKIE) {
            Some(cookie) => Self {
                id: cookie.value().to_string(),
                is_new: false,
            },
            None => Self {
                id: Uuid::new_v4().to_string(),
                is_new: true,
            },
        }
    }

    fn decorate(&self, builder: &mut HttpResponseBuilder) {
        if self.is_new {
            let cookie = Cookie::build(SESSION_COOKIE, self.id.clone())
                .path("/")
                .http_only(true)
                .finish();
            builder.cookie(cookie);
        }
    }

    /// 303 redirect carrying the session cookie when needed.
    pub fn redirect(&self, location: &str) -> HttpResponse {
        let mut builder = HttpResponse::SeeOther();
        builder.insert_header((header::LOCATION, location.to_string()));
        self.decorate(&mut builder);
        builder.finish()
    }

    /// 200 HTML page carrying the session cookie when needed.
    pub fn html(&self, body: String) -> HttpResponse {
        let mut builder = HttpResponse::Ok();
        builder.insert_header(ContentType::html());
        self.decorate(&mut builder);
        builder.body(body)
    }

    /// 200 plain-text success indicator for AJAX-style callers.
    pub fn text(&self, body: impl Into<String>) -> HttpResponse {
        let mut builder = HttpResponse::Ok();
        builder.insert_header(ContentType::plaintext());
        self.decorate(&mut builder);
        builder.body(body.into())
    }

    /// 204 empty success status for AJAX-style callers.
    pub fn no_content(&self) -> HttpResponse {
        let mut builder = HttpResponse::NoContent();
        self.decorate(&mut builder);
        builder.finish()
    }
}

impl FromRequest for SessionHandle {
    type Error = actix_web::Error;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        std::future::ready(Ok(Self::from_http_request(req)))
    }
}

/// AJAX-style callers announce themselves with the X-Requested-With
/// header and get plain success indicators instead of redirects.
pub fn is_xhr(req: &HttpRequest) -> bool {
    req.headers()
        .get("X-Requested-With")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.eq_ignore_ascii_case("XMLHttpRequest"))
        .unwrap_or(false)
}
