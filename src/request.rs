//! Sending requests on behalf of a [`GooseUser`].

use goose::goose::GooseResponse;
use goose::prelude::*;

use crate::hooks::{RequestEvent, RunHooks};

/// Make `request` and report it to the request listeners of `hooks`.
///
/// goose has already recorded the request in its metrics when this returns; the
/// caller may still re-classify it with [`status::settle`](crate::status::settle).
pub async fn send(
    user: &mut GooseUser,
    hooks: &RunHooks,
    request: GooseRequest<'_>,
) -> Result<GooseResponse, Box<TransactionError>> {
    let goose = user.request(request).await?;
    hooks.request_completed(&RequestEvent::from_response(&goose));

    Ok(goose)
}

/// A named `GET` of `path`.
pub fn get<'a>(path: &'a str, name: &'a str) -> GooseRequest<'a> {
    GooseRequest::builder()
        .method(GooseMethod::Get)
        .path(path)
        .name(name)
        .build()
}

/// A named `DELETE` of `path`.
pub fn delete<'a>(path: &'a str, name: &'a str) -> GooseRequest<'a> {
    GooseRequest::builder()
        .method(GooseMethod::Delete)
        .path(path)
        .name(name)
        .build()
}

/// Send a JSON `body` to `path` with `method`.
pub fn json<'a, T: serde::Serialize + ?Sized>(
    user: &GooseUser,
    method: GooseMethod,
    path: &str,
    name: &'a str,
    body: &T,
) -> Result<GooseRequest<'a>, Box<TransactionError>> {
    let request_builder = user.get_request_builder(&method, path)?.json(body);

    Ok(GooseRequest::builder()
        .method(method)
        .set_request_builder(request_builder)
        .name(name)
        .build())
}
