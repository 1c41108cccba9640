use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use analyseme::assessment::{assessment_router, AnswerSet, AssessmentRecord, AssessmentService};
use analyseme::config::AppConfig;
use analyseme::error::AppError;
use analyseme::telemetry;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "AnalyseMe",
    about = "Run the housing support assessment service or evaluate a stored answer set",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate an answer set from a JSON file and print the officer report
    Assess(AssessArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct AssessArgs {
    /// Path to a JSON object mapping question ids to answers
    #[arg(long)]
    answers: PathBuf,
    /// Print the raw record as JSON instead of the report
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Assess(args) => run_assess(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let service = Arc::new(AssessmentService::standard()?);

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(assessment_router(service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "assessment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.answers)?;
    let answers = parse_answers(&raw)?;

    let service = AssessmentService::standard()?;
    let record = service.assess(&answers)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&record).map_err(AppError::AnswerPayload)?
        );
    } else {
        render_assessment(&record);
    }

    Ok(())
}

fn parse_answers(raw: &str) -> Result<AnswerSet, AppError> {
    serde_json::from_str(raw).map_err(AppError::AnswerPayload)
}

fn render_assessment(record: &AssessmentRecord) {
    let result = &record.result;

    println!("Assessment {}", record.reference);
    println!("Received: {}", record.received_at.to_rfc3339());
    println!(
        "\nTotal score: {} ({} risk, respond within {})",
        result.total_score,
        result.risk_band.label(),
        result.response_commitment.label()
    );

    println!("\nCategory breakdown");
    for (category, score) in &result.category_scores {
        println!("- {}: {}", category.label(), score);
    }

    if result.risk_flags.is_empty() {
        println!("\nRisk flags: none");
    } else {
        println!("\nRisk flags");
        for flag in &result.risk_flags {
            println!(
                "- [{}] {}: {}",
                flag.category.label(),
                flag.question_id,
                flag.answer
            );
        }
    }

    if !result.crisis_indicators.is_empty() {
        println!(
            "\nCrisis indicators: {}",
            result.crisis_indicators.join(", ")
        );
    }

    if result.recommended_services.is_empty() {
        println!("\nRecommended services: none");
    } else {
        println!("\nRecommended services");
        for service in &result.recommended_services {
            println!("- {}", service.label());
        }
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_answers_accepts_flat_object() {
        let answers =
            parse_answers(r#"{"employment": "Unemployed", "care_leaver": "Yes"}"#).expect("parses");
        assert_eq!(answers.get("employment"), Some("Unemployed"));
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn parse_answers_rejects_non_object_payloads() {
        assert!(parse_answers(r#"["employment"]"#).is_err());
    }
}
