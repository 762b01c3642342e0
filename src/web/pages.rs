//! Embedded single-page UI

use axum::{
    Router,
    extract::Query,
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};

use super::api::{AppState, SearchQuery};

const INDEX_HTML: &str = include_str!("static/index.html");
const APP_CSS: &str = include_str!("static/app.css");
const APP_JS: &str = include_str!("static/app.js");

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/search", get(search_page))
        .route("/static/app.css", get(app_css))
        .route("/static/app.js", get(app_js))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// The page reads `q` from the location itself; a blank query goes back home.
async fn search_page(Query(query): Query<SearchQuery>) -> Response {
    if query.q.trim().is_empty() {
        return Redirect::to("/").into_response();
    }
    Html(INDEX_HTML).into_response()
}

async fn app_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], APP_CSS)
}

async fn app_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript; charset=utf-8")], APP_JS)
}
