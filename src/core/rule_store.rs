//! # RuleStore — A Base de Regras
//!
//! O [`RuleStore`] guarda a coleção **ordenada** de [`Target`]s carregada da
//! fonte de conhecimento. Depois de construído ele é imutável: atualizações
//! criam um novo `RuleStore` e trocam o snapshot inteiro via [`StoreHandle`].
//!
//! ## Política de Alvos Malformados
//!
//! Alvos sem regras são **excluídos na construção** — o percentual deles
//! seria uma divisão por zero. Cada exclusão é registrada como
//! [`GuessError::MalformedTarget`] e fica disponível em
//! [`RuleStore::rejected()`]. Nomes repetidos também são descartados
//! (vale a primeira ocorrência), pois o nome identifica o alvo; cada
//! repetição entra em `rejected()` como [`GuessError::DuplicateTarget`].
//!
//! ## Troca Atômica de Snapshot
//!
//! ```text
//! StoreHandle
//!   └── RwLock<Arc<RuleStore>>
//!         ├── snapshot() → clona o Arc (lock só durante o clone)
//!         └── replace()  → troca o Arc inteiro (write lock curto)
//! ```
//!
//! Uma inferência em andamento segura o `Arc` antigo até terminar, então
//! ela enxerga o snapshot velho ou o novo por completo, nunca uma mistura.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use super::target::Target;
use crate::error::GuessError;

/// Coleção imutável e ordenada de alvos.
#[derive(Clone, Debug)]
pub struct RuleStore {
    targets: Vec<Target>,
    rejected: Vec<GuessError>,
    loaded_at: DateTime<Utc>,
}

impl RuleStore {
    /// Base vazia — usada quando a fonte de conhecimento falha.
    pub fn empty() -> Self {
        Self::from_targets(Vec::new())
    }

    /// Constrói a base preservando a ordem da fonte.
    ///
    /// Alvos sem regras e nomes duplicados são descartados com `warn`.
    pub fn from_targets(targets: Vec<Target>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(targets.len());
        let mut rejected = Vec::new();

        for target in targets {
            if target.is_malformed() {
                tracing::warn!(name = %target.name, "Alvo sem regras descartado");
                rejected.push(GuessError::MalformedTarget { name: target.name });
                continue;
            }
            if !seen.insert(target.name.clone()) {
                tracing::warn!(name = %target.name, "Alvo duplicado descartado");
                rejected.push(GuessError::DuplicateTarget { name: target.name });
                continue;
            }
            kept.push(target);
        }

        Self {
            targets: kept,
            rejected,
            loaded_at: Utc::now(),
        }
    }

    /// Alvos na ordem da fonte.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Alvos descartados na construção, na ordem da fonte.
    pub fn rejected(&self) -> &[GuessError] {
        &self.rejected
    }

    /// Busca um alvo pelo nome exato.
    pub fn find(&self, name: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.name == name)
    }

    /// Momento em que este snapshot foi construído.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl Default for RuleStore {
    fn default() -> Self {
        Self::empty()
    }
}

/// Handle compartilhado para o snapshot corrente da base de regras.
///
/// Clonar o handle é barato (um `Arc`); todos os clones enxergam as
/// mesmas trocas.
#[derive(Clone, Debug, Default)]
pub struct StoreHandle {
    current: Arc<RwLock<Arc<RuleStore>>>,
}

impl StoreHandle {
    pub fn new(store: RuleStore) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(store))),
        }
    }

    /// Snapshot corrente. O lock é liberado antes do retorno.
    pub fn snapshot(&self) -> Arc<RuleStore> {
        self.current.read().clone()
    }

    /// Troca o snapshot inteiro e devolve o anterior.
    pub fn replace(&self, store: RuleStore) -> Arc<RuleStore> {
        let next = Arc::new(store);
        tracing::info!(targets = next.len(), "Base de regras substituída");
        std::mem::replace(&mut *self.current.write(), next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_source_order() {
        let store = RuleStore::from_targets(vec![
            Target::new("C", ["z"]),
            Target::new("A", ["x"]),
            Target::new("B", ["y"]),
        ]);
        let names: Vec<&str> = store.targets().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["C", "A", "B"]);
    }

    #[test]
    fn zero_rule_targets_are_excluded() {
        let store = RuleStore::from_targets(vec![
            Target::new("A", ["x"]),
            Target::new("Vazio", Vec::<String>::new()),
        ]);
        assert_eq!(store.len(), 1);
        assert!(store.find("Vazio").is_none());
        assert_eq!(
            store.rejected(),
            [GuessError::MalformedTarget { name: "Vazio".into() }]
        );
    }

    #[test]
    fn duplicate_names_keep_first() {
        let store = RuleStore::from_targets(vec![
            Target::new("A", ["x"]),
            Target::new("A", ["y"]),
        ]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.find("A").unwrap().rules, ["x"]);
        assert_eq!(
            store.rejected(),
            [GuessError::DuplicateTarget { name: "A".into() }]
        );
    }

    #[test]
    fn names_are_case_sensitive() {
        let store = RuleStore::from_targets(vec![
            Target::new("gato", ["x"]),
            Target::new("Gato", ["y"]),
        ]);
        assert_eq!(store.len(), 2);
        assert!(store.rejected().is_empty());
    }

    #[test]
    fn replace_keeps_old_snapshot_alive() {
        let handle = StoreHandle::new(RuleStore::from_targets(vec![Target::new("A", ["x"])]));
        let before = handle.snapshot();
        let old = handle.replace(RuleStore::from_targets(vec![
            Target::new("B", ["y"]),
            Target::new("C", ["z"]),
        ]));

        assert_eq!(before.len(), 1);
        assert!(Arc::ptr_eq(&before, &old));
        assert_eq!(handle.snapshot().len(), 2);
    }

    #[test]
    fn concurrent_readers_see_whole_snapshots() {
        let small = || RuleStore::from_targets(vec![Target::new("A", ["x"])]);
        let large = || {
            RuleStore::from_targets(vec![
                Target::new("A", ["x"]),
                Target::new("B", ["y"]),
                Target::new("C", ["z"]),
            ])
        };
        let handle = StoreHandle::new(small());

        std::thread::scope(|s| {
            for _ in 0..4 {
                let handle = handle.clone();
                s.spawn(move || {
                    for _ in 0..1_000 {
                        let len = handle.snapshot().len();
                        assert!(len == 1 || len == 3);
                    }
                });
            }
            for i in 0..200 {
                handle.replace(if i % 2 == 0 { large() } else { small() });
            }
        });
    }
}
