//! # Módulo Inference — O Motor de Adivinhação
//!
//! Dada a base de regras e as afirmações do usuário, descobre qual alvo
//! melhor corresponde à entrada e com que confiança.
//!
//! ## Fluxo de Uma Chamada
//!
//! ```text
//! query bruta ──► normalizer ──► UserRuleSet
//!                                    │
//! RuleStore (snapshot) ──────────────┤
//!                                    ▼
//!                     chaining (forward | backward)
//!                                    │  Vec<MatchResult>, ordem da base
//!                                    ▼
//!                     ranking (estável, limiar, verbose)
//!                                    │
//!                                    ▼
//!                            InferenceOutcome
//! ```
//!
//! Estratégia e verbosidade são parâmetros **de cada chamada** — o
//! [`InferenceEngine`] só guarda configuração imutável, então o mesmo
//! motor atende várias requisições simultâneas sem lock.

/// Sub-módulo que transforma a entrada bruta em [`crate::core::UserRuleSet`].
pub mod normalizer;

/// Sub-módulo com forward e backward chaining.
pub mod chaining;

/// Sub-módulo com ordenação e política de decisão.
pub mod ranking;

use std::sync::Arc;

pub use chaining::{ChainingEngine, ChainingMethod, MatchResult};
pub use ranking::{DecisionPolicy, InferenceOutcome};

use crate::config::EngineSettings;
use crate::core::RuleStore;
use crate::error::GuessError;
use crate::illustration::{IllustrationPicker, IllustrationPools, RandomPicker};

/// Motor de inferência: configuração imutável + função pura por chamada.
#[derive(Clone)]
pub struct InferenceEngine {
    settings: EngineSettings,
    pools: IllustrationPools,
    picker: Arc<dyn IllustrationPicker>,
}

impl InferenceEngine {
    pub fn new(
        settings: EngineSettings,
        pools: IllustrationPools,
        picker: Arc<dyn IllustrationPicker>,
    ) -> Self {
        Self {
            settings,
            pools,
            picker,
        }
    }

    /// Motor com sorteio aleatório de ilustrações.
    pub fn with_settings(settings: EngineSettings) -> Self {
        Self::new(settings, IllustrationPools::default(), Arc::new(RandomPicker))
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Roda uma inferência completa sobre um snapshot da base.
    ///
    /// Base vazia não é falha: o resultado é `{ confident: false, results: [] }`.
    ///
    /// # Erros
    ///
    /// [`GuessError::InvalidInput`] se `query` estiver ausente.
    pub fn infer(
        &self,
        store: &RuleStore,
        query: Option<&str>,
        method: ChainingMethod,
        verbose: bool,
    ) -> Result<InferenceOutcome, GuessError> {
        let user = normalizer::normalize(query, &self.settings.separator)?;

        if store.is_empty() {
            tracing::warn!(error = %GuessError::EmptyKnowledgeBase, "Inferência sem alvos");
        }

        let results = ChainingEngine::run(method, store, &user);
        tracing::debug!(
            method = method.label(),
            statements = user.len(),
            scored = results.len(),
            "Encadeamento concluído"
        );

        let outcome = DecisionPolicy::new(self.settings.threshold).decide(
            results,
            verbose,
            &self.pools,
            self.picker.as_ref(),
        );
        Ok(outcome)
    }
}
