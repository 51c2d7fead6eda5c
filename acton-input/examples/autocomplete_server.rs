//! Autocomplete demo server
//!
//! Serves a sign-up form whose country field queries `/countries` while the
//! user types. Run with:
//!
//! ```bash
//! cargo run --example autocomplete_server
//! ```

use std::sync::Arc;

use acton_input::config::ActonInputConfig;
use acton_input::forms::runtime_script_tag;
use acton_input::observability;
use acton_input::prelude::*;
use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};
use axum_htmx::HxRequest;
use serde::Deserialize;

const COUNTRIES: &[(&str, &str)] = &[
    ("Canada", "ca"),
    ("France", "fr"),
    ("Germany", "de"),
    ("Japan", "jp"),
    ("Kenya", "ke"),
    ("Mexico", "mx"),
    ("Norway", "no"),
    ("Spain", "es"),
];

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html>
<head>
  <title>Sign up</title>
  <script src="https://unpkg.com/htmx.org@2"></script>
</head>
<body>
  <form method="post" action="/">
{{ fields|safe }}
    <button type="submit">Sign up</button>
  </form>
  {% if let Some(message) = message %}<p>{{ message }}</p>{% endif %}
{{ runtime|safe }}
</body>
</html>"#,
    ext = "html"
)]
struct SignupPage {
    fields: String,
    message: Option<String>,
    runtime: String,
}

#[derive(Debug, Default, Deserialize)]
struct Signup {
    #[serde(default)]
    email: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    newsletter: String,
}

#[derive(Debug, Deserialize)]
struct CountryQuery {
    #[serde(default)]
    query: String,
}

#[derive(Clone)]
struct AppState {
    renderer: Arc<InputRenderer>,
}

fn country_input(value: Option<&str>) -> InputBuilder<'static> {
    let builder = InputBuilder::autocomplete("country")
        .id("country")
        .label("Country")
        .options(COUNTRIES.iter().copied())
        .on_query(
            QueryHandler::get("/countries")
                .target("#country-listbox")
                .swap("innerHTML"),
        );
    match value {
        Some(value) => builder.value(value),
        None => builder,
    }
}

fn render_page(state: &AppState, signup: &Signup, used: bool) -> Result<String, Response> {
    let mut errors = ValidationErrors::new();
    if !signup.email.contains('@') {
        errors.add_with_code("email", "", "email");
    }
    if !COUNTRIES.iter().any(|(_, code)| *code == signup.country) {
        errors.add_with_code("country", "", "required");
    }

    let email = BoundField::from_errors("email", &errors)
        .with_value(signup.email.as_str())
        .used(used);

    let mut fields = String::new();
    for builder in [
        InputBuilder::text(InputType::Email, "email")
            .label("Email")
            .placeholder("you@example.com")
            .field(&email),
        country_input(Some(signup.country.as_str()))
            .errors(if used {
                errors
                    .for_field("country")
                    .iter()
                    .map(|e| state.renderer.translator().translate(e))
                    .collect()
            } else {
                Vec::new()
            }),
        InputBuilder::toggle("newsletter")
            .label("Send me the newsletter")
            .value(signup.newsletter.as_str()),
    ] {
        fields.push_str(&state.renderer.render_builder(&builder).map_err(internal_error)?);
    }

    let message = (used && !errors.has_errors()).then(|| format!("Welcome, {}!", signup.email));
    SignupPage {
        fields,
        message,
        runtime: runtime_script_tag(),
    }
    .render()
    .map_err(internal_error)
}

fn internal_error(err: impl std::fmt::Display) -> Response {
    tracing::error!(error = %err, "render failed");
    (StatusCode::INTERNAL_SERVER_ERROR, "render failed").into_response()
}

async fn index(State(state): State<AppState>) -> Result<Html<String>, Response> {
    render_page(&state, &Signup::default(), false).map(Html)
}

async fn submit(
    State(state): State<AppState>,
    Form(signup): Form<Signup>,
) -> Result<Html<String>, Response> {
    tracing::info!(email = %signup.email, country = %signup.country, "signup submitted");
    render_page(&state, &signup, true).map(Html)
}

async fn countries(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Query(params): Query<CountryQuery>,
) -> Result<Html<String>, Response> {
    if !is_htmx {
        return Err((StatusCode::BAD_REQUEST, "expected an HTMX request").into_response());
    }

    let needle = params.query.to_lowercase();
    let builder = InputBuilder::autocomplete("country").id("country").options(
        COUNTRIES
            .iter()
            .copied()
            .filter(|(label, _)| label.to_lowercase().contains(&needle)),
    );
    tracing::debug!(query = %params.query, "country query");

    state
        .renderer
        .render_options(&builder)
        .map(Html)
        .map_err(internal_error)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init()?;

    let config = ActonInputConfig::load_for_service("autocomplete-demo")?;
    let state = AppState {
        renderer: Arc::new(InputRenderer::new(config)),
    };

    let app = Router::new()
        .route("/", get(index).post(submit))
        .route("/countries", get(countries))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    tracing::info!("listening on http://127.0.0.1:3000");
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState {
            renderer: Arc::new(InputRenderer::default()),
        }
    }

    #[test]
    fn test_page_loads_action_runtime() {
        let Ok(page) = render_page(&state(), &Signup::default(), false) else {
            panic!("page failed to render");
        };
        assert!(page.contains("window.actonInput"));
        assert!(page.contains("data-on-click"));
        assert!(page.find("data-on-click") < page.find("window.actonInput"));
    }

    #[test]
    fn test_submitted_country_is_shown_by_label() {
        let signup = Signup {
            email: "ada@example.com".into(),
            country: "jp".into(),
            newsletter: String::new(),
        };
        let Ok(page) = render_page(&state(), &signup, true) else {
            panic!("page failed to render");
        };
        assert!(page.contains(r#"value="Japan""#));
        assert!(page.contains("Welcome, ada@example.com!"));
    }
}
