use anyhow::Error;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// A link rendered under every message fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub href: &'static str,
    pub label: &'static str,
}

impl Link {
    pub const HOME: Link = Link {
        href: "/home",
        label: "Home",
    };

    pub const fn new(href: &'static str, label: &'static str) -> Self {
        Self { href, label }
    }
}

/// Renders the `<h1>message</h1><a href=..>label</a>` fragment every
/// plain response uses.
pub fn message_fragment(message: &str, link: Link) -> String {
    format!(
        "<h1>{}</h1><a href=\"{}\">{}</a>",
        message, link.href, link.label
    )
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
    pub link: Link,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
            link: Link::HOME,
        }
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.link = link;
        self
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn forbidden<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::FORBIDDEN, err)
    }

    pub fn unauthorized<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNAUTHORIZED, err)
    }

    pub fn conflict<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::CONFLICT, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }

    /// No session holds an account.
    pub fn sign_in_required() -> Self {
        Self::forbidden(anyhow::anyhow!("You need to sign in"))
    }

    /// The caller is known but not allowed to do this.
    pub fn not_authorized(status: StatusCode) -> Self {
        Self::new(
            status,
            anyhow::anyhow!("You are not authorized to make this request"),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Faults never leak details to the client.
        if self.status.is_server_error() {
            tracing::error!(status = %self.status.as_u16(), error = ?self.error, "Request failed");
            return self.status.into_response();
        }

        let body = message_fragment(&self.error.to_string(), self.link);
        (self.status, Html(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
