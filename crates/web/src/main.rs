use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::charts::handlers::list_charts,
        features::charts::handlers::get_chart,
        features::charts::handlers::create_chart,
        features::comparisons::handlers::submit_comparison,
        features::comparisons::handlers::recompute_ratings,
        features::matchups::handlers::sample_matchup,
        features::rankings::handlers::list_rankings,
    ),
    components(
        schemas(
            storage::dto::chart::CreateChartRequest,
            storage::dto::chart::ChartResponse,
            storage::dto::chart::PlayStyle,
            storage::dto::comparison::SubmitComparisonRequest,
            storage::dto::comparison::ComparisonResponse,
            storage::dto::comparison::RecomputeResponse,
            storage::dto::matchup::MatchupResponse,
            storage::dto::matchup::MatchupChart,
            storage::dto::ranking::RankingEntry,
            storage::models::Chart,
            storage::models::ComparisonRecord,
            storage::models::RatingCategory,
        )
    ),
    tags(
        (name = "charts", description = "Chart catalogue endpoints"),
        (name = "comparisons", description = "Pairwise comparison submission"),
        (name = "matchups", description = "Matchup sampling for head-to-head voting"),
        (name = "rankings", description = "Per-tier Elo rankings"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .init();

    tracing::info!("Starting chart ranking API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let app = Router::new()
        .nest("/api/charts", features::charts::routes::routes())
        .nest("/api/comparisons", features::comparisons::routes::routes())
        .nest("/api/matchups", features::matchups::routes::routes())
        .nest("/api/rankings", features::rankings::routes::routes())
        .with_state(db)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
