use contracts::system::auth::{Identity, LoginRequest, LoginResponse};
use gloo_net::http::Method;

use crate::shared::api_utils::{request, ReqBody, RequestOpts};
use crate::shared::errors::ApiError;
use crate::system::auth::storage::{Session, SessionStore};

const ME_PATH: &str = "/api/accounts/me/";
const TOKEN_PATH: &str = "/api/token/";

/// Fetch the current user's identity and overwrite the cached copy.
///
/// Failures propagate unchanged. Clearing the session on a failed fetch is
/// the gate's decision, not this function's.
pub async fn fetch_me<S: SessionStore>(session: &Session<S>) -> Result<Identity, ApiError> {
    let payload = request(session, ME_PATH, RequestOpts::default()).await?;
    let me: Identity = payload.decode()?;
    session.remember_identity(&me);
    Ok(me)
}

/// Exchange credentials for an access token, then load the identity
pub async fn login<S: SessionStore>(
    session: &Session<S>,
    username: &str,
    password: &str,
) -> Result<Identity, ApiError> {
    let body = serde_json::to_value(LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    })
    .map_err(ApiError::Decode)?;

    let opts = RequestOpts {
        method: Some(Method::POST),
        body: Some(ReqBody::Json(body)),
        ..RequestOpts::default()
    };
    let payload = request(session, TOKEN_PATH, opts).await?;
    let tokens: LoginResponse = payload.decode()?;
    session.set_token(&tokens.access);

    let me = fetch_me(session).await?;
    log::info!("signed in as {}", me.username);
    Ok(me)
}

/// Drop the token and cached identity. Purely client-side.
pub fn logout<S: SessionStore>(session: &Session<S>) {
    session.clear();
}
