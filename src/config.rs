//! # Configuração
//!
//! Valores padrão do serviço, sobrescrevíveis por variáveis de ambiente.
//!
//! | Variável | Campo | Padrão |
//! |----------|-------|--------|
//! | `GUESS_ADDR` | `addr` | `0.0.0.0:5000` |
//! | `GUESS_KNOWLEDGE_PATH` | `knowledge_path` | `data/knowledge.json` |
//! | `GUESS_CLAUSE_PATH` | `clause_path` | `data/clause.json` |
//! | `GUESS_THRESHOLD` | `engine.threshold` | `70` |
//! | `GUESS_SEPARATOR` | `engine.separator` | `,` |
//! | `GUESS_FRONTEND_URL` | `frontend_url` | URL do front-end publicado |
//!
//! Valores inválidos geram um `warn` e caem no padrão — a configuração
//! nunca impede o servidor de subir.

use std::path::PathBuf;

/// Percentual mínimo para declarar uma conclusão confiante.
pub const DEFAULT_THRESHOLD: f64 = 70.0;

/// Separador entre as afirmações digitadas pelo usuário.
pub const DEFAULT_SEPARATOR: &str = ",";

const DEFAULT_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_KNOWLEDGE_PATH: &str = "data/knowledge.json";
const DEFAULT_CLAUSE_PATH: &str = "data/clause.json";
const DEFAULT_FRONTEND_URL: &str = "https://assignments-67f1e.web.app";

/// Parâmetros fixos do motor de inferência.
///
/// Imutáveis durante a vida do processo. Estratégia e verbosidade não
/// moram aqui: chegam em cada chamada.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineSettings {
    /// Limiar de confiança (0–100).
    pub threshold: f64,
    /// Token que separa as afirmações na entrada bruta.
    pub separator: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// Configuração completa do processo.
#[derive(Clone, Debug)]
pub struct Config {
    /// Endereço de bind do servidor HTTP.
    pub addr: String,
    /// Arquivo JSON com os alvos e suas regras.
    pub knowledge_path: PathBuf,
    /// Arquivo JSON de cláusulas editado pelo front-end.
    pub clause_path: PathBuf,
    /// Front-end apontado pela página inicial.
    pub frontend_url: String,
    /// Parâmetros do motor.
    pub engine: EngineSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            knowledge_path: PathBuf::from(DEFAULT_KNOWLEDGE_PATH),
            clause_path: PathBuf::from(DEFAULT_CLAUSE_PATH),
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            engine: EngineSettings::default(),
        }
    }
}

impl Config {
    /// Lê a configuração das variáveis de ambiente do processo.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Monta a configuração a partir de uma função de lookup.
    ///
    /// Separado de [`Config::from_env`] para que os testes não precisem
    /// mexer no ambiente global do processo.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("GUESS_ADDR") {
            config.addr = addr;
        }
        if let Some(path) = lookup("GUESS_KNOWLEDGE_PATH") {
            config.knowledge_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("GUESS_CLAUSE_PATH") {
            config.clause_path = PathBuf::from(path);
        }
        if let Some(url) = lookup("GUESS_FRONTEND_URL") {
            config.frontend_url = url;
        }

        if let Some(raw) = lookup("GUESS_THRESHOLD") {
            match raw.trim().parse::<f64>() {
                Ok(t) if t.is_finite() => config.engine.threshold = t.clamp(0.0, 100.0),
                _ => tracing::warn!(value = %raw, "GUESS_THRESHOLD inválido, usando padrão"),
            }
        }

        if let Some(sep) = lookup("GUESS_SEPARATOR") {
            if sep.is_empty() {
                tracing::warn!("GUESS_SEPARATOR vazio, usando padrão");
            } else {
                config.engine.separator = sep;
            }
        }

        config
    }
}
