use axum::response::Redirect;
use axum::routing::{MethodRouter, any};

/// Route answering any method with `303 See Other` to `location`.
pub fn see_other<S>(location: &'static str) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    any(move || async move { Redirect::to(location) })
}
