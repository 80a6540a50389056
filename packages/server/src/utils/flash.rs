//! One-shot messages carried to the next page render in a signed cookie.

use axum_extra::extract::SignedCookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};

const FLASH_COOKIE: &str = "flash";

/// Queue `message` for the next page render.
pub fn set(jar: SignedCookieJar, message: &str) -> SignedCookieJar {
    // Hex keeps arbitrary user text (names, error details) cookie-safe.
    let cookie = Cookie::build((FLASH_COOKIE, hex::encode(message)))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    jar.add(cookie)
}

/// Remove the pending message, if any, and return it.
///
/// A cookie that fails signature checks or decoding is dropped silently.
pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Option<String>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, None);
    };

    let message = hex::decode(cookie.value())
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok());
    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));

    (jar, message)
}
