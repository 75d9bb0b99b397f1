//! # Ranking e Política de Decisão
//!
//! Recebe os [`MatchResult`]s do encadeamento (na ordem da base) e
//! monta o [`InferenceOutcome`] final:
//!
//! 1. Ordena por `percent` decrescente. A ordenação é **estável**: empates
//!    mantêm a ordem original da base.
//! 2. Um resultado é confiante se `percent >= threshold`.
//! 3. **Modo normal**: só o primeiro colocado; `confident` segue ele.
//! 4. **Modo verbose**: a lista inteira; `confident` se *algum* resultado
//!    atinge o limiar.
//! 5. Anexa uma ilustração do pool correspondente ao veredito.
//!
//! Sem resultados, o veredito é `{ confident: false, results: [] }`.

use serde::Serialize;

use super::chaining::MatchResult;
use crate::illustration::{IllustrationPicker, IllustrationPools};

/// Resposta final de uma chamada de inferência.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InferenceOutcome {
    /// `true` se a conclusão atinge o limiar de confiança.
    pub confident: bool,
    /// Ilustração sorteada do pool do veredito (`null` se o pool estiver vazio).
    pub illustration: Option<String>,
    /// Um resultado no modo normal; todos os pontuados no modo verbose.
    pub results: Vec<MatchResult>,
}

/// Política de decisão sobre resultados pontuados.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecisionPolicy {
    /// Percentual mínimo para uma conclusão confiante.
    pub threshold: f64,
}

impl DecisionPolicy {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// `percent` atinge o limiar?
    pub fn is_confident(&self, percent: f64) -> bool {
        percent >= self.threshold
    }

    /// Ordena por percentual decrescente, mantendo a ordem nos empates.
    pub fn rank(mut results: Vec<MatchResult>) -> Vec<MatchResult> {
        // sort_by é estável
        results.sort_by(|a, b| b.percent.total_cmp(&a.percent));
        results
    }

    /// Aplica ranking, limiar e verbosidade e escolhe a ilustração.
    pub fn decide(
        &self,
        results: Vec<MatchResult>,
        verbose: bool,
        pools: &IllustrationPools,
        picker: &dyn IllustrationPicker,
    ) -> InferenceOutcome {
        let ranked = Self::rank(results);

        let (confident, results) = if verbose {
            let confident = ranked.iter().any(|r| self.is_confident(r.percent));
            for r in &ranked {
                tracing::debug!(name = %r.target, percent = r.percent, "Resultado");
            }
            (confident, ranked)
        } else {
            match ranked.into_iter().next() {
                Some(best) => (self.is_confident(best.percent), vec![best]),
                None => (false, Vec::new()),
            }
        };

        InferenceOutcome {
            confident,
            illustration: pools.illustrate(confident, picker),
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::illustration::{FixedPicker, RandomPicker};

    fn result(target: &str, percent: f64) -> MatchResult {
        MatchResult {
            target: target.to_string(),
            percent,
            image: None,
        }
    }

    fn names(outcome: &InferenceOutcome) -> Vec<&str> {
        outcome.results.iter().map(|r| r.target.as_str()).collect()
    }

    #[test]
    fn rank_is_descending_and_stable() {
        let ranked = DecisionPolicy::rank(vec![
            result("A", 50.0),
            result("B", 100.0),
            result("C", 50.0),
            result("D", 0.0),
            result("E", 100.0),
            result("F", 50.0),
        ]);
        let order: Vec<&str> = ranked.iter().map(|r| r.target.as_str()).collect();
        assert_eq!(order, ["B", "E", "A", "C", "F", "D"]);
    }

    #[test]
    fn non_verbose_returns_best_only() {
        let policy = DecisionPolicy::new(70.0);
        let outcome = policy.decide(
            vec![result("A", 50.0), result("B", 100.0)],
            false,
            &IllustrationPools::default(),
            &FixedPicker::default(),
        );
        assert!(outcome.confident);
        assert_eq!(names(&outcome), ["B"]);
    }

    #[test]
    fn non_verbose_below_threshold_is_unsure() {
        let policy = DecisionPolicy::new(70.0);
        let outcome = policy.decide(
            vec![result("A", 50.0), result("B", 69.9)],
            false,
            &IllustrationPools::default(),
            &FixedPicker::default(),
        );
        assert!(!outcome.confident);
        assert_eq!(names(&outcome), ["B"]);
    }

    #[test]
    fn threshold_is_inclusive() {
        let policy = DecisionPolicy::new(70.0);
        assert!(policy.is_confident(70.0));
        assert!(!policy.is_confident(69.999));
    }

    #[test]
    fn verbose_returns_everything_sorted() {
        let policy = DecisionPolicy::new(70.0);
        let outcome = policy.decide(
            vec![result("A", 10.0), result("B", 80.0), result("C", 40.0)],
            true,
            &IllustrationPools::default(),
            &FixedPicker::default(),
        );
        assert!(outcome.confident);
        assert_eq!(names(&outcome), ["B", "C", "A"]);
    }

    #[test]
    fn verbose_unsure_when_nobody_reaches_threshold() {
        let policy = DecisionPolicy::new(90.0);
        let outcome = policy.decide(
            vec![result("A", 10.0), result("B", 80.0)],
            true,
            &IllustrationPools::default(),
            &FixedPicker::default(),
        );
        assert!(!outcome.confident);
        assert_eq!(outcome.results.len(), 2);
    }

    #[test]
    fn empty_results_are_unsure() {
        let pools = IllustrationPools::default();
        for verbose in [false, true] {
            let outcome = DecisionPolicy::new(70.0).decide(Vec::new(), verbose, &pools, &RandomPicker);
            assert!(!outcome.confident);
            assert!(outcome.results.is_empty());
            assert!(pools.unsure.contains(outcome.illustration.as_ref().unwrap()));
        }
    }

    #[test]
    fn illustration_matches_verdict() {
        let pools = IllustrationPools::default();
        let policy = DecisionPolicy::new(70.0);
        for _ in 0..50 {
            let yes = policy.decide(vec![result("A", 100.0)], false, &pools, &RandomPicker);
            assert!(pools.confident.contains(yes.illustration.as_ref().unwrap()));

            let no = policy.decide(vec![result("A", 0.0)], false, &pools, &RandomPicker);
            assert!(pools.unsure.contains(no.illustration.as_ref().unwrap()));
        }
    }

    #[test]
    fn serializes_outcome_shape() {
        let outcome = InferenceOutcome {
            confident: true,
            illustration: Some("g.gif".into()),
            results: vec![result("B", 100.0)],
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "confident": true,
                "illustration": "g.gif",
                "results": [{"target": "B", "percent": 100.0, "image": null}]
            })
        );
    }
}
