//! # Handlers HTTP — Os Endpoints da Aplicação
//!
//! Cada função pública neste módulo é um handler Axum, mapeado a uma
//! rota em [`super::create_router()`].
//!
//! | Handler | Método | Retorno | Uso |
//! |---------|--------|---------|-----|
//! | `index` | GET | HTML | Link para o front-end |
//! | `status` | GET | JSON | Resumo da base carregada |
//! | `think` | POST | JSON | Inferência (forward/backward) |
//! | `get_knowledge` | GET | JSON | Snapshot corrente da base |
//! | `put_knowledge` | PUT | JSON | Grava a base e troca o snapshot |
//! | `reload_knowledge` | POST | JSON | Relê o arquivo e troca o snapshot |
//! | `get_clause` | GET | JSON | Documento de cláusulas |
//! | `put_clause` | PUT | JSON | Grava o documento de cláusulas |
//!
//! ## Erros
//!
//! Handlers falíveis retornam `Result<_, GuessError>`; a conversão para
//! resposta HTTP fica no `impl IntoResponse` abaixo e produz
//! `{ "error": tipo, "message": texto }`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::state::AppState;
use super::templates;
use crate::core::{RuleStore, Target};
use crate::error::GuessError;
use crate::inference::{ChainingMethod, InferenceOutcome};
use crate::persistence;

/// Corpo do `POST /think`.
///
/// Aceita os nomes curtos `q`, `v` e `m` usados pelo front-end.
#[derive(Debug, Deserialize)]
pub struct ThinkRequest {
    /// Afirmações do usuário, separadas pelo separador configurado.
    #[serde(default, alias = "q")]
    pub query: Option<String>,
    /// Devolver todos os alvos pontuados em vez do melhor.
    #[serde(default, alias = "v")]
    pub verbose: bool,
    /// Estratégia de encadeamento.
    #[serde(default, alias = "m")]
    pub method: ChainingMethod,
}

/// Resposta do `GET /status`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Alvos no snapshot corrente.
    pub targets: usize,
    /// Alvos descartados na carga (sem regras ou duplicados).
    pub rejected: usize,
    /// Limiar de confiança em uso.
    pub threshold: f64,
    /// Quando o snapshot corrente foi construído.
    pub loaded_at: DateTime<Utc>,
}

/// Alvo descartado na construção do snapshot.
#[derive(Debug, Serialize)]
pub struct RejectedTarget {
    /// Nome do alvo.
    pub name: String,
    /// Motivo (`MalformedTarget` ou `DuplicateTarget`).
    pub reason: &'static str,
}

/// Resposta das rotas que trocam o snapshot da base.
#[derive(Debug, Serialize)]
pub struct KnowledgeUpdate {
    /// Alvos aceitos no novo snapshot.
    pub targets: usize,
    /// Alvos descartados: sem regras ou com nome repetido.
    pub rejected: Vec<RejectedTarget>,
}

impl KnowledgeUpdate {
    fn from_store(store: &RuleStore) -> Self {
        let rejected = store
            .rejected()
            .iter()
            .filter_map(|e| match e {
                GuessError::MalformedTarget { name } | GuessError::DuplicateTarget { name } => {
                    Some(RejectedTarget {
                        name: name.clone(),
                        reason: e.kind(),
                    })
                }
                _ => None,
            })
            .collect();
        Self {
            targets: store.len(),
            rejected,
        }
    }
}

impl IntoResponse for GuessError {
    fn into_response(self) -> Response {
        let status = match &self {
            GuessError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            GuessError::Knowledge(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GuessError::EmptyKnowledgeBase
            | GuessError::MalformedTarget { .. }
            | GuessError::DuplicateTarget { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };
        let body = serde_json::json!({
            "error": self.kind(),
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

/// GET `/` — Página inicial com link para o front-end.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let store = state.store.snapshot();
    let page = templates::index_page(
        &store,
        &state.config.frontend_url,
        state.engine.settings().threshold,
    );
    Html(page.into_string())
}

/// GET `/status` — Resumo do snapshot corrente.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let store = state.store.snapshot();
    Json(StatusResponse {
        targets: store.len(),
        rejected: store.rejected().len(),
        threshold: state.engine.settings().threshold,
        loaded_at: store.loaded_at(),
    })
}

/// POST `/think` — Roda a inferência sobre o snapshot corrente.
///
/// ## Fluxo
///
/// ```text
/// 1. Rejeita consulta ausente ou em branco (400)
/// 2. Clona o Arc do snapshot (o lock é solto em seguida)
/// 3. InferenceEngine::infer(snapshot, query, method, verbose)
/// 4. Serializa o InferenceOutcome
/// ```
pub async fn think(
    State(state): State<AppState>,
    Json(req): Json<ThinkRequest>,
) -> Result<Json<InferenceOutcome>, GuessError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("think", %request_id, method = req.method.label(), verbose = req.verbose);
    let _guard = span.enter();

    let query = match req.query.as_deref() {
        Some(q) if !q.trim().is_empty() => q,
        Some(_) => return Err(GuessError::InvalidInput("consulta vazia".to_string())),
        None => return Err(GuessError::InvalidInput("campo 'query' ausente".to_string())),
    };

    let store = state.store.snapshot();
    let outcome = state
        .engine
        .infer(&store, Some(query), req.method, req.verbose)?;

    tracing::info!(
        confident = outcome.confident,
        results = outcome.results.len(),
        best = outcome.results.first().map(|r| r.target.as_str()).unwrap_or("-"),
        "Inferência concluída"
    );
    Ok(Json(outcome))
}

/// GET `/knowledge` — Alvos do snapshot corrente, no formato do arquivo.
pub async fn get_knowledge(State(state): State<AppState>) -> Json<Vec<Target>> {
    Json(state.store.snapshot().targets().to_vec())
}

/// PUT `/knowledge` — Substitui a base de conhecimento.
///
/// Valida o corpo, grava o arquivo e só então troca o snapshot.
/// Inferências em andamento terminam sobre o snapshot anterior.
///
/// Alvos sem regras ou com nome repetido não entram no snapshot nem no
/// arquivo; eles voltam listados em `rejected`. Gravação e troca acontecem
/// sob `knowledge_writes`, então PUTs simultâneos nunca deixam o disco com
/// um conteúdo e a memória com outro.
///
/// # Erros
///
/// - [`GuessError::EmptyKnowledgeBase`] se nenhum alvo válido sobrar (nada é gravado)
/// - [`GuessError::Knowledge`] se a gravação falhar (o snapshot não muda)
pub async fn put_knowledge(
    State(state): State<AppState>,
    Json(targets): Json<Vec<Target>>,
) -> Result<Json<KnowledgeUpdate>, GuessError> {
    let store = RuleStore::from_targets(targets);
    if store.is_empty() {
        return Err(GuessError::EmptyKnowledgeBase);
    }

    let _writing = state.knowledge_writes.lock();
    persistence::save_knowledge(&state.config.knowledge_path, store.targets()).map_err(|e| {
        tracing::error!(error = %e, "Falha ao gravar base de conhecimento");
        GuessError::Knowledge(e.to_string())
    })?;

    let update = KnowledgeUpdate::from_store(&store);
    state.store.replace(store);
    Ok(Json(update))
}

/// POST `/knowledge/reload` — Relê o arquivo da base e troca o snapshot.
///
/// Se a leitura falhar, o snapshot corrente é mantido.
pub async fn reload_knowledge(
    State(state): State<AppState>,
) -> Result<Json<KnowledgeUpdate>, GuessError> {
    let _writing = state.knowledge_writes.lock();
    let store = persistence::load_knowledge(&state.config.knowledge_path).map_err(|e| {
        tracing::error!(error = %e, "Recarga falhou, mantendo base atual");
        GuessError::Knowledge(e.to_string())
    })?;

    let update = KnowledgeUpdate::from_store(&store);
    state.store.replace(store);
    Ok(Json(update))
}

/// GET `/clause` — Documento de cláusulas, repassado como está.
pub async fn get_clause(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, GuessError> {
    persistence::load_clause(&state.config.clause_path)
        .map(Json)
        .map_err(|e| {
            tracing::error!(error = %e, "Falha ao ler cláusulas");
            GuessError::Knowledge(e.to_string())
        })
}

/// PUT `/clause` — Grava o documento de cláusulas.
pub async fn put_clause(
    State(state): State<AppState>,
    Json(value): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>, GuessError> {
    persistence::save_clause(&state.config.clause_path, &value).map_err(|e| {
        tracing::error!(error = %e, "Falha ao gravar cláusulas");
        GuessError::Knowledge(e.to_string())
    })?;
    Ok(Json(serde_json::json!({ "status": "success" })))
}
