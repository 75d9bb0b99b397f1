//! # Módulo Web — Transporte HTTP do Motor
//!
//! Camada web construída com **Axum**. Não há raciocínio aqui: os
//! handlers extraem a requisição, chamam o motor e serializam a resposta.
//!
//! ## Rotas
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Axum Router (este módulo)                               │
//! │  ├── GET  /                  → HTML (link front-end)    │
//! │  ├── GET  /status            → JSON: resumo da base     │
//! │  ├── POST /think             → JSON: InferenceOutcome   │
//! │  ├── GET  /knowledge         → JSON: alvos correntes    │
//! │  ├── PUT  /knowledge         → grava + troca snapshot   │
//! │  ├── POST /knowledge/reload  → relê arquivo + troca     │
//! │  ├── GET  /clause            → JSON opaco               │
//! │  └── PUT  /clause            → grava JSON opaco         │
//! ├─────────────────────────────────────────────────────────┤
//! │ CorsLayer::permissive() (Access-Control-Allow-Origin: *)│
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Submódulos
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`state`] | Estado compartilhado (`AppState`) |
//! | [`handlers`] | Handlers Axum para cada rota |
//! | [`templates`] | Template Maud da página inicial |

pub mod handlers;
pub mod state;
pub mod templates;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use state::AppState;

/// Cria o router Axum com todas as rotas da aplicação.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/status", get(handlers::status))
        .route("/think", post(handlers::think))
        .route(
            "/knowledge",
            get(handlers::get_knowledge).put(handlers::put_knowledge),
        )
        .route("/knowledge/reload", post(handlers::reload_knowledge))
        .route("/clause", get(handlers::get_clause).put(handlers::put_clause))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
