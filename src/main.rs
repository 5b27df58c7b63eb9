//! Volunteer Hub client
//!
//! Opens a page against the configured backend, follows redirects, optionally
//! signs in through the login page, and prints the rendered page.

use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use volunteer_hub_client::config::OutputFormat;
use volunteer_hub_client::{Action, ApiClient, App, Config, Location, Page, PageLoad, Settings};

/// Upper bound on consecutive redirects while opening one page.
const MAX_REDIRECTS: usize = 4;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging; stdout carries the rendered page
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Volunteer Hub client");
    tracing::info!("API base: {}", config.api_base);

    let api = ApiClient::new(&config.api_base)?;
    let settings = Settings::from(&config);

    let start = Location::parse(&config.start_page)
        .ok_or_else(|| format!("Unknown page: {}", config.start_page))?;
    let mut app = open(&api, &settings, start).await?;

    if let Some((email, password)) = config.credentials.clone() {
        if !app.store().session().is_authenticated() {
            if app.page() != Page::Login {
                let login = Location::login_returning_to(start.page);
                app = open(&api, &settings, login).await?;
            }

            let outcome = app.dispatch(Action::SubmitLogin { email, password }).await;
            if let Some(message) = &outcome.notice {
                eprintln!("{}", message);
            }
            if let Some(next) = outcome.navigate {
                app = open(&api, &settings, next).await?;
            }
        }
    }

    print_page(&app, config.output)?;

    Ok(())
}

/// Open `location`, following guard redirects.
async fn open(
    api: &ApiClient,
    settings: &Settings,
    mut location: Location,
) -> Result<App, Box<dyn std::error::Error>> {
    for _ in 0..=MAX_REDIRECTS {
        match App::open(api.clone(), settings, location).await {
            PageLoad::Ready(app) => return Ok(app),
            PageLoad::Redirect(next) => location = next,
        }
    }
    Err(format!("Too many redirects, last target {}", location).into())
}

fn print_page(app: &App, output: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let Some(view) = app.view() else {
        return Ok(());
    };
    let notice = app.notices().visible(Utc::now());

    match output {
        OutputFormat::Text => {
            print!("{}", view);
            if let Some(message) = notice {
                println!("\n> {}", message);
            }
        }
        OutputFormat::Json => {
            let body = serde_json::json!({
                "location": app.location().href(),
                "view": view,
                "notice": notice,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
    }
    Ok(())
}
