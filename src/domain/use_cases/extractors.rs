use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::{errors::AppError, use_cases::site_context::SiteContext, AppState};

/// Site context built for the current request.
/// Usage: add `site: SiteContext` as a parameter to a page handler.
impl FromRequest for SiteContext {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();

        Box::pin(async move {
            let state = state.ok_or_else(|| {
                AppError::InternalError("AppState missing from app data".into())
            })?;
            state.site_context.build().await
        })
    }
}

/// Guard for the admin API: requires `Authorization: Bearer <admin token>`.
/// Returns 403 when no admin token is configured, 401 when the token is missing or wrong.
#[derive(Debug)]
pub struct AdminAccess;

impl FromRequest for AdminAccess {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let expected = match req
            .app_data::<web::Data<AppState>>()
            .and_then(|state| state.admin_token.clone())
        {
            Some(token) => token,
            None => return ready(Err(AppError::ForbiddenAccess)),
        };

        let provided = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim);

        match provided {
            Some(token) if tokens_match(token, &expected) => ready(Ok(AdminAccess)),
            Some(_) => {
                tracing::warn!("Rejected admin request with invalid token");
                ready(Err(AppError::UnauthorizedAccess))
            }
            None => ready(Err(AppError::UnauthorizedAccess)),
        }
    }
}

/// Length-independent comparison, no early exit on the first differing byte.
fn tokens_match(provided: &str, expected: &str) -> bool {
    let (a, b) = (provided.as_bytes(), expected.as_bytes());
    let mut diff = a.len() ^ b.len();
    for i in 0..a.len().max(b.len()) {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        diff |= usize::from(x ^ y);
    }
    diff == 0
}
