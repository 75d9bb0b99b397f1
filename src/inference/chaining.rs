//! # Encadeamento — Forward e Backward
//!
//! Compara as regras de cada [`Target`] com o [`UserRuleSet`] e produz um
//! [`MatchResult`] com o percentual de acerto.
//!
//! ## Percentual de Acerto
//!
//! ```text
//! match_count = |{ r ∈ target.rules : r ∈ user.rules }|   (igualdade exata)
//! percent     = 100 × match_count / |target.rules|
//! ```
//!
//! Um alvo sem regras tem `percent = 0` — a base já descarta esses alvos
//! na carga, mas o cálculo nunca divide por zero.
//!
//! ## Modos
//!
//! | Modo | Quem é pontuado |
//! |------|-----------------|
//! | **Forward** | Todos os alvos, na ordem da base |
//! | **Backward** | Só os candidatos: alvos com ao menos uma regra em comum |
//!
//! Os dois modos preservam a ordem da base; a ordenação por percentual
//! fica a cargo de [`super::ranking`].

use serde::{Deserialize, Serialize};

use crate::core::{RuleStore, Target, UserRuleSet};

/// Estratégia de encadeamento escolhida por chamada.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainingMethod {
    /// Pontua todos os alvos.
    #[default]
    Forward,
    /// Filtra candidatos com alguma regra em comum e pontua só eles.
    Backward,
}

impl ChainingMethod {
    pub fn label(&self) -> &'static str {
        match self {
            ChainingMethod::Forward => "forward",
            ChainingMethod::Backward => "backward",
        }
    }
}

/// Percentual de acerto de um alvo.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchResult {
    /// Nome do alvo.
    pub target: String,
    /// Percentual de regras do alvo presentes na entrada (0–100).
    pub percent: f64,
    /// Imagem do alvo, repassada sem alteração.
    pub image: Option<String>,
}

/// Motor de encadeamento — struct sem estado.
///
/// Recebe a base e as regras do usuário por referência e devolve os
/// resultados; pode ser usado por várias requisições ao mesmo tempo.
pub struct ChainingEngine;

impl ChainingEngine {
    /// Roda a estratégia escolhida.
    pub fn run(method: ChainingMethod, store: &RuleStore, user: &UserRuleSet) -> Vec<MatchResult> {
        match method {
            ChainingMethod::Forward => Self::forward(store, user),
            ChainingMethod::Backward => Self::backward(store, user),
        }
    }

    /// Forward chaining: um resultado por alvo, na ordem da base.
    pub fn forward(store: &RuleStore, user: &UserRuleSet) -> Vec<MatchResult> {
        store
            .targets()
            .iter()
            .map(|target| Self::score(target, user))
            .collect()
    }

    /// Backward chaining em duas fases: seleção de candidatos e pontuação.
    ///
    /// Alvos sem nenhuma regra em comum ficam de fora do resultado.
    pub fn backward(store: &RuleStore, user: &UserRuleSet) -> Vec<MatchResult> {
        let candidates = Self::candidates(store, user);
        tracing::debug!(candidates = candidates.len(), "Backward: candidatos selecionados");
        candidates
            .into_iter()
            .map(|target| Self::score(target, user))
            .collect()
    }

    /// Fase 1 do backward: alvos com ao menos uma regra igual a alguma
    /// regra do usuário. Para no primeiro acerto de cada alvo.
    pub fn candidates<'a>(store: &'a RuleStore, user: &UserRuleSet) -> Vec<&'a Target> {
        store
            .targets()
            .iter()
            .filter(|target| target.rules.iter().any(|rule| user.contains(rule)))
            .collect()
    }

    /// Percentual de acerto de um alvo. Alvo sem regras vale 0.
    pub fn match_percent(target: &Target, user: &UserRuleSet) -> f64 {
        if target.rules.is_empty() {
            return 0.0;
        }
        let matched = target.rules.iter().filter(|rule| user.contains(rule)).count();
        100.0 * matched as f64 / target.rules.len() as f64
    }

    fn score(target: &Target, user: &UserRuleSet) -> MatchResult {
        let percent = Self::match_percent(target, user);
        tracing::debug!(name = %target.name, percent, "Alvo pontuado");
        MatchResult {
            target: target.name.clone(),
            percent,
            image: target.image.clone(),
        }
    }
}
