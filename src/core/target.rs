//! # Target — Uma Hipótese Nomeada
//!
//! Um [`Target`] é algo que o motor pode adivinhar: um nome único
//! (case-sensitive), a lista ordenada de regras que o descrevem e,
//! opcionalmente, uma imagem (referência opaca, repassada sem alteração).
//!
//! ## Formato JSON
//!
//! ```json
//! { "target": "Gato", "rules": ["tem bigodes", "mia"], "image": "https://..." }
//! ```
//!
//! O campo `name` também é aceito no lugar de `target` na leitura.

use serde::{Deserialize, Serialize};

/// Alvo da base de regras.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Nome único do alvo (comparação exata, sensível a maiúsculas).
    #[serde(rename = "target", alias = "name")]
    pub name: String,

    /// Regras descritivas do alvo, na ordem da fonte.
    #[serde(default)]
    pub rules: Vec<String>,

    /// Referência de imagem ilustrativa, carregada sem modificação.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Target {
    /// Cria um alvo sem imagem.
    pub fn new<N, R, S>(name: N, rules: R) -> Self
    where
        N: Into<String>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            rules: rules.into_iter().map(Into::into).collect(),
            image: None,
        }
    }

    /// Anexa uma referência de imagem ao alvo.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// `true` se o alvo não tem nenhuma regra (alvo malformado).
    pub fn is_malformed(&self) -> bool {
        self.rules.is_empty()
    }
}
