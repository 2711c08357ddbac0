//! Login success heuristic.

use crate::http::endpoints::PROFILE_MARKER;
use reqwest::StatusCode;

/// The portal answers a login attempt with a page either way, so success is
/// inferred: the response is a success status and it either landed on the
/// profile page or renders a logout control.
pub fn login_succeeded(status: StatusCode, final_url: &str, body: &str) -> bool {
    status.is_success()
        && (final_url.to_lowercase().contains(PROFILE_MARKER)
            || body.to_lowercase().contains("logout"))
}
