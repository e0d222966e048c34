use std::sync::Arc;

use anyhow::Context;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    response::{Html, IntoResponse},
    routing::get,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use timesheet::modules::timesheet::adapters::outbound::gemini_location_suggester::{
    DisabledLocationSuggester, GeminiLocationSuggester,
};
use timesheet::modules::timesheet::adapters::outbound::markdown_exporter::MarkdownExporter;
use timesheet::modules::timesheet::use_cases::suggest_location::suggester_port::LocationSuggester;
use timesheet::shared::infrastructure::key_value_store::KeyValueStore;
use timesheet::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
use timesheet::shared::infrastructure::key_value_store::json_file::JsonFileKeyValueStore;
use timesheet::shell::config::{AppConfig, StorageMode};
use timesheet::shell::graphql::build_schema;
use timesheet::shell::http::router;
use timesheet::shell::state::AppState;

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("timesheet=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let store: Arc<dyn KeyValueStore> = match config.storage {
        StorageMode::File => {
            let store = JsonFileKeyValueStore::open(&config.data_file)
                .await
                .with_context(|| format!("failed to open {}", config.data_file.display()))?;
            info!(path = %store.path().display(), "using file storage");
            Arc::new(store)
        }
        StorageMode::Memory => {
            info!("using in-memory storage, nothing will be saved");
            Arc::new(InMemoryKeyValueStore::new())
        }
    };

    let suggester: Arc<dyn LocationSuggester> = match &config.gemini {
        Some(gemini) => {
            info!(model = %gemini.model, "location suggestions enabled");
            Arc::new(GeminiLocationSuggester::new(&gemini.api_key, &gemini.model))
        }
        None => {
            info!("GEMINI_API_KEY not set, location suggestions disabled");
            Arc::new(DisabledLocationSuggester)
        }
    };

    let state = AppState::new(
        store,
        Arc::new(MarkdownExporter),
        suggester,
        config.calendar_events.clone(),
    );
    let schema = build_schema(state.clone());

    let app = router(state)
        .route("/gql", get(graphiql).post_service(GraphQL::new(schema)))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    info!(addr = %config.addr, "timesheet listening");
    axum::serve(listener, app).await?;
    Ok(())
}
