//! One-shot user-facing messages ("flash" messages)
//!
//! Messages queued while handling a request are shown on the next rendered
//! page. When the handler renders directly they appear in the same response;
//! when it redirects they travel to the next request in the signed
//! [`COOKIE_NAME`] cookie and are cleared once shown.
//!
//! [`Messages`] is a thin wrapper over `axum_extra`'s [`SignedCookieJar`]:
//! the jar owns cookie parsing, signing and the `Set-Cookie` delta, this
//! module only decides what the queue holds.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

/// Cookie carrying messages across a redirect
pub const COOKIE_NAME: &str = "pedidos_messages";

/// Message severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Error,
    Success,
}

/// A single message as handed to templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub level: Level,
    pub text: String,
}

/// Message queue for one request
///
/// Extracted from the request's signed cookies; handlers add to it and then
/// either consume it while rendering ([`Messages::drain_for_render`]) or store
/// it for the next page ([`Messages::into_jar`]). A cookie whose signature
/// does not verify is treated as absent.
pub struct Messages {
    jar: SignedCookieJar,
    messages: Vec<Message>,
}

impl Messages {
    /// Empty queue with no request cookies
    pub fn new(key: Key) -> Self {
        Self::from_jar(SignedCookieJar::new(key))
    }

    /// Queue carried by the jar's verified message cookie, if any
    pub fn from_jar(jar: SignedCookieJar) -> Self {
        let messages = jar
            .get(COOKIE_NAME)
            .map(|cookie| decode(cookie.value()))
            .unwrap_or_default();
        Self { jar, messages }
    }

    /// Queue a message
    pub fn add(&mut self, level: Level, text: impl Into<String>) {
        self.messages.push(Message {
            level,
            text: text.into(),
        });
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.add(Level::Error, text);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.add(Level::Success, text);
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Take every message for display, plus the jar clearing the cookie
    ///
    /// The jar only emits a removal when the request carried the cookie,
    /// tampered ones included.
    pub fn drain_for_render(self) -> (Vec<Message>, SignedCookieJar) {
        (self.messages, self.jar.remove(removal()))
    }

    /// Jar carrying the queue to the next request
    ///
    /// An empty queue clears the cookie instead.
    pub fn into_jar(self) -> SignedCookieJar {
        if self.messages.is_empty() {
            return self.jar.remove(removal());
        }
        let value = encode(&self.messages);
        self.jar.add(
            Cookie::build((COOKIE_NAME, value))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax),
        )
    }
}

/// Hex-encoded JSON keeps accented text inside the cookie value charset
fn encode(messages: &[Message]) -> String {
    // serializing plain structs cannot fail
    hex::encode(serde_json::to_vec(messages).unwrap_or_default())
}

fn decode(value: &str) -> Vec<Message> {
    hex::decode(value)
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .unwrap_or_default()
}

fn removal() -> Cookie<'static> {
    Cookie::build(COOKIE_NAME).path("/").build()
}

impl<S> FromRequestParts<S> for Messages
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::<Key>::from_request_parts(parts, state).await?;
        Ok(Self::from_jar(jar))
    }
}
