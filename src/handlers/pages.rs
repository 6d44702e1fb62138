use axum::response::Html;

static APP_HTML: &str = include_str!("../web/app.html");

pub async fn app_page() -> Html<&'static str> {
    Html(APP_HTML)
}
