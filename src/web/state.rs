//! # Estado da Aplicação Web
//!
//! Estado compartilhado entre todos os handlers Axum.
//!
//! ```text
//! AppState
//!  ├── store  → StoreHandle (snapshot Arc<RuleStore>, troca atômica)
//!  ├── engine → InferenceEngine (imutável, sem lock)
//!  ├── config → caminhos dos arquivos, URL do front-end
//!  └── knowledge_writes → Mutex que serializa gravação + troca da base
//! ```
//!
//! Nenhuma requisição de inferência segura lock além do clone do snapshot.
//! Só as rotas que gravam a base (`PUT /knowledge`, `POST /knowledge/reload`)
//! passam por `knowledge_writes`, para que o arquivo em disco e o snapshot
//! em memória terminem sempre com o mesmo conteúdo.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::Config;
use crate::core::StoreHandle;
use crate::inference::InferenceEngine;

/// Estado compartilhado da aplicação Axum.
#[derive(Clone)]
pub struct AppState {
    /// Snapshot corrente da base de regras.
    pub store: StoreHandle,
    /// Motor de inferência (configuração imutável).
    pub engine: Arc<InferenceEngine>,
    /// Configuração do processo.
    pub config: Arc<Config>,
    /// Serializa gravação do arquivo e troca do snapshot.
    pub knowledge_writes: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: StoreHandle, engine: InferenceEngine, config: Config) -> Self {
        Self {
            store,
            engine: Arc::new(engine),
            config: Arc::new(config),
            knowledge_writes: Arc::new(Mutex::new(())),
        }
    }
}
