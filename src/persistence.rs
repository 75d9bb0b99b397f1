//! # Persistência — Fonte de Conhecimento e Cláusulas em Disco
//!
//! Lê e grava a base de regras como JSON em `data/knowledge.json` (caminho
//! configurável, veja [`crate::config`]).
//!
//! ## Formato da Base
//!
//! ```json
//! [
//!   { "target": "Gato", "rules": ["mia", "tem bigodes"], "image": "https://..." },
//!   { "target": "Cão",  "rules": ["late"] }
//! ]
//! ```
//!
//! ## Cláusulas
//!
//! O documento de cláusulas (`data/clause.json`) é editado pelo front-end e
//! não tem semântica para o motor: é lido e gravado como JSON opaco.
//!
//! ## Atomicidade
//!
//! A gravação escreve em um arquivo temporário exclusivo (`NamedTempFile`)
//! no mesmo diretório e faz `persist` por cima do destino, então um crash
//! no meio nunca deixa o JSON pela metade e gravações simultâneas não
//! disputam o mesmo temporário.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::core::{RuleStore, Target};

/// Lê os alvos da fonte de conhecimento, sem validação.
///
/// # Erros
///
/// Retorna erro se o arquivo não existir ou não for um JSON válido
/// no formato esperado.
pub fn read_targets(path: &Path) -> Result<Vec<Target>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Falha ao ler {}", path.display()))?;
    let targets: Vec<Target> = serde_json::from_str(&json)
        .with_context(|| format!("Falha ao desserializar {}", path.display()))?;
    Ok(targets)
}

/// Carrega a base de regras a partir do arquivo.
///
/// Alvos sem regras são descartados por [`RuleStore::from_targets`].
pub fn load_knowledge(path: &Path) -> Result<RuleStore> {
    let targets = read_targets(path)?;
    let total = targets.len();
    let store = RuleStore::from_targets(targets);
    tracing::info!(
        path = %path.display(),
        targets = store.len(),
        skipped = total - store.len(),
        "Base de regras carregada"
    );
    Ok(store)
}

/// Grava os alvos como JSON pretty-printed.
pub fn save_knowledge(path: &Path, targets: &[Target]) -> Result<()> {
    write_json_atomic(path, targets)
}

/// Lê o documento de cláusulas como JSON opaco.
pub fn load_clause(path: &Path) -> Result<serde_json::Value> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Falha ao ler {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Falha ao desserializar {}", path.display()))
}

/// Grava o documento de cláusulas.
pub fn save_clause(path: &Path, value: &serde_json::Value) -> Result<()> {
    write_json_atomic(path, value)
}

fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    // Garante que o diretório pai existe
    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => parent,
        None => Path::new("."),
    };
    std::fs::create_dir_all(parent)
        .with_context(|| format!("Falha ao criar diretório {}", parent.display()))?;
    let json = serde_json::to_string_pretty(value).context("Falha ao serializar JSON")?;

    // Cada gravação tem seu próprio temporário no mesmo diretório do destino
    let mut tmp = NamedTempFile::new_in(parent)
        .with_context(|| format!("Falha ao criar temporário em {}", parent.display()))?;
    tmp.write_all(json.as_bytes())
        .with_context(|| format!("Falha ao escrever {}", tmp.path().display()))?;
    tmp.persist(path)
        .with_context(|| format!("Falha ao substituir {}", path.display()))?;
    Ok(())
}
