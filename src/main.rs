//! Travel Ticket Registry API - Main Entry Point

use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use travel_ticket_registry::application::use_cases::passengers::{
    CreatePassengerUseCase, DeletePassengerUseCase, GetPassengerByIdUseCase, ListPassengersUseCase,
    UpdatePassengerUseCase,
};
use travel_ticket_registry::application::use_cases::tickets::{
    CreateTicketUseCase, DeleteTicketUseCase, GetTicketByIdUseCase, ListTicketsUseCase,
    UpdateTicketUseCase,
};
use travel_ticket_registry::infrastructure::driven_adapters::config::AppConfig;
use travel_ticket_registry::infrastructure::driven_adapters::database;
use travel_ticket_registry::infrastructure::driven_adapters::passenger_repository::PostgresPassengerRepository;
use travel_ticket_registry::infrastructure::driven_adapters::ticket_repository::PostgresTicketRepository;
use travel_ticket_registry::infrastructure::driving_adapters::api_rest::handlers::{passengers, tickets};
use travel_ticket_registry::infrastructure::driving_adapters::api_rest::middleware::request_id::request_id_middleware;
use travel_ticket_registry::infrastructure::driving_adapters::api_rest::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "travel_ticket_registry=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed");

    // Create repositories
    let ticket_repository = Arc::new(PostgresTicketRepository::new(pool.clone()));
    let passenger_repository = Arc::new(PostgresPassengerRepository::new(pool));

    // Create use cases
    let create_ticket_use_case = Arc::new(CreateTicketUseCase::new(
        ticket_repository.clone(),
        passenger_repository.clone(),
    ));
    let list_tickets_use_case = Arc::new(ListTicketsUseCase::new(ticket_repository.clone()));
    let get_ticket_by_id_use_case = Arc::new(GetTicketByIdUseCase::new(ticket_repository.clone()));
    let update_ticket_use_case = Arc::new(UpdateTicketUseCase::new(
        ticket_repository.clone(),
        passenger_repository.clone(),
    ));
    let delete_ticket_use_case = Arc::new(DeleteTicketUseCase::new(ticket_repository.clone()));
    let create_passenger_use_case = Arc::new(CreatePassengerUseCase::new(passenger_repository.clone()));
    let list_passengers_use_case = Arc::new(ListPassengersUseCase::new(passenger_repository.clone()));
    let get_passenger_by_id_use_case =
        Arc::new(GetPassengerByIdUseCase::new(passenger_repository.clone()));
    let update_passenger_use_case = Arc::new(UpdatePassengerUseCase::new(passenger_repository.clone()));
    let delete_passenger_use_case = Arc::new(DeletePassengerUseCase::new(
        passenger_repository,
        ticket_repository,
    ));

    // Create application state
    let app_state = AppState {
        config: Arc::new(config.clone()),
        create_ticket_use_case,
        list_tickets_use_case,
        get_ticket_by_id_use_case,
        update_ticket_use_case,
        delete_ticket_use_case,
        create_passenger_use_case,
        list_passengers_use_case,
        get_passenger_by_id_use_case,
        update_passenger_use_case,
        delete_passenger_use_case,
    };

    // Build router
    let app = Router::new()
        .nest("/tickets", tickets::router())
        .nest("/passengers", passengers::router())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
