//! # UserRuleSet — As Afirmações do Usuário
//!
//! Conjunto efêmero de regras construído a cada requisição a partir da
//! entrada bruta (veja [`crate::inference::normalizer`]). As regras não
//! pertencem a nenhum alvo e carregam o rótulo fixo `"user"`.
//!
//! Além da lista ordenada, o conjunto mantém um `HashSet` das regras para
//! que o teste de pertinência durante o casamento seja O(1).

use std::collections::HashSet;

/// Rótulo de origem das regras digitadas pelo usuário.
pub const USER_LABEL: &str = "user";

/// Regras do usuário para uma única chamada de inferência.
#[derive(Clone, Debug, Default)]
pub struct UserRuleSet {
    rules: Vec<String>,
    lookup: HashSet<String>,
}

impl UserRuleSet {
    /// Cria o conjunto a partir das afirmações já normalizadas.
    pub fn new<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rules: Vec<String> = rules.into_iter().map(Into::into).collect();
        let lookup = rules.iter().cloned().collect();
        Self { rules, lookup }
    }

    /// Rótulo de origem (sempre `"user"`).
    pub fn label(&self) -> &'static str {
        USER_LABEL
    }

    /// Alvo dono das regras — sempre ausente para entrada do usuário.
    pub fn target(&self) -> Option<&str> {
        None
    }

    /// Regras na ordem em que foram digitadas.
    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    /// Igualdade exata de texto, sem nenhuma normalização extra.
    pub fn contains(&self, rule: &str) -> bool {
        self.lookup.contains(rule)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}
