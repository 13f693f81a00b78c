mod app;
mod chat;
mod clock;
mod config;
mod diary;
mod error;
mod foods;
mod meals;
mod nutrition;
mod openai;
mod profile;
mod state;
mod store;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "nutrimind=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = AppState::init()?;
    tracing::info!(
        model = %state.config.openai.model,
        foods = state.foods.all().len(),
        "state ready"
    );

    let mut profile_rx = state.profile.watch();
    tokio::spawn(async move {
        while profile_rx.changed().await.is_ok() {
            let totals = profile_rx.borrow_and_update().current_totals();
            tracing::debug!(
                calories = totals.calories(),
                carbs = totals.carbs(),
                protein = totals.protein(),
                fat = totals.fat(),
                "profile totals changed"
            );
        }
    });

    let (host, port) = (state.config.host.clone(), state.config.port);
    app::serve(app::build_app(state), &host, port).await
}
