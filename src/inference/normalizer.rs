//! # Normalizador de Entrada
//!
//! Transforma a string digitada pelo usuário em um [`UserRuleSet`]:
//!
//! ```text
//! "tem asas , voa,,  bota ovos "
//!   ├── split(",")  → ["tem asas ", " voa", "", "  bota ovos "]
//!   ├── trim        → ["tem asas", "voa", "", "bota ovos"]
//!   └── descarta "" → ["tem asas", "voa", "bota ovos"]
//! ```
//!
//! Tokens que ficam vazios após o trim são **descartados** — separadores
//! repetidos ou no fim da entrada não viram regras fantasmas.

use crate::core::UserRuleSet;
use crate::error::GuessError;

/// Divide a entrada bruta no separador e monta o conjunto de regras do usuário.
///
/// Falha apenas quando a entrada está ausente. Uma string vazia produz um
/// conjunto vazio (nenhum alvo casa com ele).
pub fn normalize(raw: Option<&str>, separator: &str) -> Result<UserRuleSet, GuessError> {
    let raw = raw.ok_or_else(|| GuessError::InvalidInput("consulta ausente".to_string()))?;
    Ok(UserRuleSet::new(split_statements(raw, separator)))
}

/// Afirmações aparadas e não-vazias, na ordem em que aparecem.
pub fn split_statements<'a>(raw: &'a str, separator: &'a str) -> impl Iterator<Item = &'a str> {
    raw.split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(raw: &str) -> Vec<String> {
        normalize(Some(raw), ",").unwrap().rules().to_vec()
    }

    #[test]
    fn trims_each_statement() {
        assert_eq!(rules("  tem asas ,voa  "), ["tem asas", "voa"]);
    }

    #[test]
    fn drops_empty_tokens() {
        assert_eq!(rules("a,,b"), ["a", "b"]);
        assert_eq!(rules(",a,b,"), ["a", "b"]);
        assert_eq!(rules("a, ,  ,b"), ["a", "b"]);
    }

    #[test]
    fn no_statement_is_ever_empty() {
        for raw in ["a,,b", ",,,", "", " , ", "x,,y,,,z, ", ",a"] {
            let set = normalize(Some(raw), ",").unwrap();
            assert!(set.rules().iter().all(|r| !r.is_empty() && r.trim() == r));
        }
    }

    #[test]
    fn empty_input_yields_empty_set() {
        assert!(normalize(Some(""), ",").unwrap().is_empty());
        assert!(normalize(Some(" , , "), ",").unwrap().is_empty());
    }

    #[test]
    fn missing_input_is_invalid() {
        let err = normalize(None, ",").unwrap_err();
        assert!(matches!(err, GuessError::InvalidInput(_)));
    }

    #[test]
    fn custom_separator() {
        let set = normalize(Some("a, b;c"), ";").unwrap();
        assert_eq!(set.rules(), ["a, b", "c"]);
    }

    #[test]
    fn case_is_preserved() {
        assert_eq!(rules("Voa"), ["Voa"]);
    }
}
