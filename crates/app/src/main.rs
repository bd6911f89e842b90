use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use reqwest::Client;
use services::{AuthService, ContentClient, QuizService, TokenProvider};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    auth: Arc<AuthService>,
    content: Arc<ContentClient>,
    quiz: Arc<QuizService>,
}

impl UiApp for DesktopApp {
    fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    fn content(&self) -> Arc<ContentClient> {
        Arc::clone(&self.content)
    }

    fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}

struct Args {
    api_url: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url http://localhost:3000/api");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  EXAM_API_URL");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api_url = std::env::var("EXAM_API_URL")
            .ok()
            .unwrap_or_else(|| "http://localhost:3000/api".into());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    if value.trim().is_empty() || !value.starts_with("http") {
                        return Err(ArgsError::InvalidApiUrl { raw: value });
                    }
                    api_url = value;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { api_url })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    tracing::info!(api_url = %parsed.api_url, "starting exam prep client");

    let client = Client::new();
    let auth = Arc::new(AuthService::new(client.clone(), parsed.api_url.clone()));
    let content = Arc::new(ContentClient::new(
        client,
        parsed.api_url,
        Arc::clone(&auth) as Arc<dyn TokenProvider>,
    ));
    let quiz = Arc::new(QuizService::new(Arc::clone(&content)));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        auth,
        content,
        quiz,
    });
    let context = build_app_context(&app);

    // Explicitly disable always-on-top; some dev setups default to it.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Exam Prep")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
