//! # Templates Maud — Página Inicial
//!
//! O serviço é consumido por um front-end separado; a raiz só mostra um
//! resumo da base carregada e o link para entrar no sistema.

use maud::{html, Markup, DOCTYPE};

use crate::core::RuleStore;

/// Página inicial com o link do front-end e o estado da base.
pub fn index_page(store: &RuleStore, frontend_url: &str, threshold: f64) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Rule Guess — Motor de Adivinhação" }
            }
            body {
                main {
                    h1 { "Motor de Adivinhação" }
                    p {
                        a href=(frontend_url) { "Entrar no sistema" }
                    }
                    @if store.is_empty() {
                        p class="empty" { "Nenhum alvo carregado." }
                    } @else {
                        p class="summary" {
                            (store.len()) " alvos carregados · limiar de confiança "
                            (format!("{:.0}%", threshold))
                        }
                    }
                }
            }
        }
    }
}
