/*
 * Responsibility
 * - Gate every basket route on the remote access decision, then put the
 *   authenticated subject (AuthCtx) into request extensions
 * - Fail closed: a decision-call failure is a denial, never an allow
 */
use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::extractors::AuthCtx;
use crate::error::AppError;
use crate::middleware::auth::claims;
use crate::proto::authentication::resource;
use crate::state::AppState;

/// Apply the authorization gate to a set of routes.
///
/// ```ignore
/// let basket = middleware::auth::access::apply(api::routes(), state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum's from_fn cannot receive a State extractor on its own, so the
    // state is passed explicitly via from_fn_with_state
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let credential = bearer_credential(&req).ok_or(AppError::CredentialMissing)?;

    let method = map_method(req.method());
    let path = req.uri().path().to_owned();

    // The remote decision is the only source of authorization truth. An
    // unreachable authentication service denies the request.
    let allowed = match state.access.has_access(method, &path, &credential).await {
        Ok(allowed) => allowed,
        Err(err) => {
            tracing::warn!(error = %err, "access decision call failed");
            return Err(AppError::Unauthorized);
        }
    };
    if !allowed {
        return Err(AppError::Forbidden);
    }

    // Identity comes from the (unverified) claims payload; the decision above
    // already vouched for the credential. A credential that passes the
    // decision but cannot be decoded is a server-side problem, not a 4xx.
    let claims = match claims::decode(&credential) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::warn!(error = %err, "claims decoding failed");
            return Err(AppError::Internal);
        }
    };

    req.extensions_mut()
        .insert(AuthCtx::new(claims.subject_id));

    Ok(next.run(req).await)
}

fn bearer_credential(req: &Request<Body>) -> Option<String> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?;

    value.strip_prefix("Bearer ").map(str::to_owned)
}

/// Map the HTTP method onto the enum the authentication service understands.
/// Anything it does not know maps to the explicit `Invalid` sentinel so the
/// remote side sees "unrecognized", not some arbitrary real method.
fn map_method(method: &axum::http::Method) -> resource::Method {
    match method.as_str() {
        "GET" => resource::Method::Get,
        "POST" => resource::Method::Post,
        "PUT" => resource::Method::Put,
        "DELETE" => resource::Method::Delete,
        "HEAD" => resource::Method::Head,
        "CONNECT" => resource::Method::Connect,
        "OPTIONS" => resource::Method::Options,
        "TRACE" => resource::Method::Trace,
        "PATCH" => resource::Method::Patch,
        _ => resource::Method::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Method;

    use super::*;

    #[test]
    fn known_methods_map_to_their_enum_value() {
        assert_eq!(map_method(&Method::GET), resource::Method::Get);
        assert_eq!(map_method(&Method::POST), resource::Method::Post);
        assert_eq!(map_method(&Method::PUT), resource::Method::Put);
        assert_eq!(map_method(&Method::PATCH), resource::Method::Patch);
    }

    #[test]
    fn unknown_methods_map_to_the_invalid_sentinel() {
        let brew = Method::from_bytes(b"BREW").unwrap();
        assert_eq!(map_method(&brew), resource::Method::Invalid);
    }

    #[test]
    fn bearer_credential_requires_the_scheme_prefix() {
        let req = Request::builder()
            .header(header::AUTHORIZATION, "Bearer abc.def.ghi")
            .body(Body::empty())
            .unwrap();
        assert_eq!(bearer_credential(&req).as_deref(), Some("abc.def.ghi"));

        let req = Request::builder()
            .header(header::AUTHORIZATION, "Basic abc")
            .body(Body::empty())
            .unwrap();
        assert!(bearer_credential(&req).is_none());

        let req = Request::builder().body(Body::empty()).unwrap();
        assert!(bearer_credential(&req).is_none());
    }
}
