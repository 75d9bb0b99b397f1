#![allow(dead_code)]
//! # Rule Guess — Motor de Adivinhação por Regras
//!
//! **Ponto de entrada principal** do serviço.
//!
//! Dado um domínio descrito como alvos nomeados, cada um com sua lista de
//! regras, e um conjunto de afirmações do usuário, o motor descobre qual
//! alvo melhor corresponde à entrada e com que confiança.
//!
//! ## Fluxo de Inicialização
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging
//!   ├── Lê Config das variáveis de ambiente
//!   ├── Carrega a base de regras do disco (ou inicia vazia)
//!   ├── Monta AppState e Router
//!   └── Inicia servidor TCP
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Executar com logs padrão (info)
//! cargo run
//!
//! # Logs detalhados (percentual de cada alvo)
//! RUST_LOG=debug cargo run
//!
//! # Perguntar ao motor
//! curl -X POST localhost:5000/think \
//!      -H 'content-type: application/json' \
//!      -d '{"query": "tem bigodes, mia", "verbose": true, "method": "backward"}'
//! ```

/// Módulo `config` — valores padrão e variáveis de ambiente.
mod config;

/// Módulo `core` — tipos fundamentais: Target, RuleStore, UserRuleSet.
mod core;

/// Módulo `error` — erros do domínio.
mod error;

/// Módulo `illustration` — ilustração sorteada para cada resposta.
mod illustration;

/// Módulo `inference` — normalização, encadeamento e política de decisão.
mod inference;

/// Módulo `persistence` — leitura/gravação da base e das cláusulas em JSON.
mod persistence;

/// Módulo `web` — servidor web axum e handlers HTTP.
mod web;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::core::{RuleStore, StoreHandle};
use crate::inference::InferenceEngine;
use crate::web::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Aceita RUST_LOG para configurar o nível. Exemplo: RUST_LOG=debug cargo run
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Rule Guess — Starting...");

    let config = Config::from_env();

    // Falha na fonte de conhecimento não derruba o servidor:
    // sem alvos, toda inferência responde "não confiante".
    let store = match persistence::load_knowledge(&config.knowledge_path) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "Falha ao carregar base de regras, iniciando vazia");
            RuleStore::empty()
        }
    };

    let engine = InferenceEngine::with_settings(config.engine.clone());
    let addr = config.addr.clone();
    let state = AppState::new(StoreHandle::new(store), engine, config);

    let app = web::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
