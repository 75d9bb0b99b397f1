//! # Módulo Core — Tipos Fundamentais do Domínio
//!
//! Tudo no motor de adivinhação gira em torno destes tipos:
//!
//! - [`Target`] — Hipótese nomeada com sua lista de regras (ex: "Gato" → "mia", "tem bigodes")
//! - [`RuleStore`] — Coleção ordenada e imutável de alvos, carregada na inicialização
//! - [`StoreHandle`] — Snapshot compartilhado da base, trocado atomicamente em recargas
//! - [`UserRuleSet`] — Afirmações do usuário de uma única requisição, sem alvo dono
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use crate::core::{RuleStore, Target};
//!
//! let store = RuleStore::from_targets(vec![
//!     Target::new("Gato", ["mia", "tem bigodes"]),
//!     Target::new("Cão", ["late"]),
//! ]);
//! assert_eq!(store.len(), 2);
//! ```

/// Sub-módulo com a implementação de [`Target`].
pub mod target;

/// Sub-módulo com a implementação de [`RuleStore`] e [`StoreHandle`].
pub mod rule_store;

/// Sub-módulo com a implementação de [`UserRuleSet`].
pub mod user_rules;

// Re-exports para conveniência — permite usar `crate::core::Target` diretamente.
pub use rule_store::{RuleStore, StoreHandle};
pub use target::Target;
pub use user_rules::UserRuleSet;
