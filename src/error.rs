//! # Erros do Domínio
//!
//! O enum [`GuessError`] reúne as falhas que o motor de adivinhação pode
//! sinalizar. Nenhuma delas é fatal para o processo: cada requisição que
//! falha devolve uma resposta bem-formada e não afeta as demais.
//!
//! | Variante | Quando ocorre | Status HTTP |
//! |----------|---------------|-------------|
//! | `InvalidInput` | Consulta ausente ou vazia | 400 |
//! | `EmptyKnowledgeBase` | Nenhum alvo carregado | 422 |
//! | `MalformedTarget` | Alvo sem nenhuma regra | 422 |
//! | `DuplicateTarget` | Nome de alvo repetido na fonte | 422 |
//! | `Knowledge` | Fonte de conhecimento ausente ou corrompida | 500 |
//!
//! A conversão para resposta HTTP fica em [`crate::web::handlers`].

use thiserror::Error;

/// Falhas recuperáveis do motor de adivinhação.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GuessError {
    /// A consulta do usuário está ausente (ou vazia, na fronteira HTTP).
    #[error("Consulta inválida: {0}")]
    InvalidInput(String),

    /// Não há alvos carregados na base de regras.
    #[error("Base de conhecimento vazia")]
    EmptyKnowledgeBase,

    /// Alvo sem regras — o percentual de acerto seria indefinido.
    #[error("Alvo '{name}' não possui regras")]
    MalformedTarget { name: String },

    /// Nome já usado por um alvo anterior da mesma fonte.
    #[error("Alvo '{name}' duplicado")]
    DuplicateTarget { name: String },

    /// Erro ao ler, validar ou gravar a fonte de conhecimento.
    #[error("Erro na fonte de conhecimento: {0}")]
    Knowledge(String),
}

impl GuessError {
    /// Identificador estável do tipo de erro, usado no corpo JSON.
    pub fn kind(&self) -> &'static str {
        match self {
            GuessError::InvalidInput(_) => "InvalidInput",
            GuessError::EmptyKnowledgeBase => "EmptyKnowledgeBase",
            GuessError::MalformedTarget { .. } => "MalformedTarget",
            GuessError::DuplicateTarget { .. } => "DuplicateTarget",
            GuessError::Knowledge(_) => "Knowledge",
        }
    }
}
