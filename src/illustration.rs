//! # Ilustrações — O Toque Cosmético da Resposta
//!
//! Cada resposta leva uma imagem animada escolhida ao acaso: uma de
//! "acertei!" quando a conclusão é confiante, outra de "não sei" quando não é.
//! Nada aqui influencia o raciocínio.
//!
//! A escolha fica atrás do trait [`IllustrationPicker`] para que os testes
//! troquem o sorteio por um [`FixedPicker`] determinístico.

use rand::seq::SliceRandom;

/// Escolhe uma referência de um pool.
pub trait IllustrationPicker: Send + Sync {
    /// Devolve um elemento de `pool`, ou `None` se o pool estiver vazio.
    fn pick<'a>(&self, pool: &'a [String]) -> Option<&'a str>;
}

/// Sorteio uniforme com `thread_rng` (ChaCha, semeado pelo sistema operacional).
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPicker;

impl IllustrationPicker for RandomPicker {
    fn pick<'a>(&self, pool: &'a [String]) -> Option<&'a str> {
        pool.choose(&mut rand::thread_rng()).map(String::as_str)
    }
}

/// Sempre o elemento na posição `index` (módulo o tamanho do pool).
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedPicker {
    pub index: usize,
}

impl IllustrationPicker for FixedPicker {
    fn pick<'a>(&self, pool: &'a [String]) -> Option<&'a str> {
        if pool.is_empty() {
            return None;
        }
        Some(pool[self.index % pool.len()].as_str())
    }
}

/// Os dois pools de ilustração.
#[derive(Clone, Debug, PartialEq)]
pub struct IllustrationPools {
    /// Usado quando a conclusão é confiante.
    pub confident: Vec<String>,
    /// Usado quando nenhum alvo atinge o limiar.
    pub unsure: Vec<String>,
}

impl IllustrationPools {
    /// Pool correspondente ao veredito.
    pub fn for_verdict(&self, confident: bool) -> &[String] {
        if confident {
            &self.confident
        } else {
            &self.unsure
        }
    }

    /// Sorteia uma ilustração para o veredito.
    pub fn illustrate(&self, confident: bool, picker: &dyn IllustrationPicker) -> Option<String> {
        picker.pick(self.for_verdict(confident)).map(str::to_string)
    }
}

impl Default for IllustrationPools {
    fn default() -> Self {
        Self {
            confident: FOUND_IT.iter().map(|s| s.to_string()).collect(),
            unsure: NOT_FOUND.iter().map(|s| s.to_string()).collect(),
        }
    }
}

const FOUND_IT: [&str; 10] = [
    "https://media.giphy.com/media/IS9LfP9oSLdcY/giphy.gif",
    "https://media.giphy.com/media/WRoKv6KVZA0i5RvL6q/giphy.gif",
    "https://media.giphy.com/media/LOLMSQ6CO5KLPjFtC8/giphy.gif",
    "https://media.giphy.com/media/LNqiRp9njyVQim3pEG/giphy.gif",
    "https://media.giphy.com/media/6omlIrIZREyoP3VGG4/giphy.gif",
    "https://media.giphy.com/media/cR9W2jMlWQf2PyI8It/giphy.gif",
    "https://media.giphy.com/media/JseEqKOkHeDfSUJneQ/giphy.gif",
    "https://media.giphy.com/media/elsol3P5Jt2ASsxLva/giphy.gif",
    "https://media.giphy.com/media/12CcmGavTHjSOk/giphy.gif",
    "https://media.giphy.com/media/URpHxnZfLQI2ICcS9S/giphy.gif",
];

const NOT_FOUND: [&str; 10] = [
    "https://media.giphy.com/media/BMtGb8JSk2Ln1cnPMA/giphy.gif",
    "https://media.giphy.com/media/ZFhhpKngh5QfcmhIDF/giphy.gif",
    "https://media.giphy.com/media/sqbnHI0hNHC7u/giphy.gif",
    "https://media.giphy.com/media/3og0IF7LxXgYt4X9Bu/giphy.gif",
    "https://media.giphy.com/media/Ogq017TWp45JadcpIK/giphy.gif",
    "https://media.giphy.com/media/9xijGdDIMovchalhxN/giphy.gif",
    "https://media.giphy.com/media/Tk0mQHwaCSZAtCLpyN/giphy.gif",
    "https://media.giphy.com/media/RDyxKvpuh0WmL6gXHQ/giphy.gif",
    "https://media.giphy.com/media/3o7527pa7qs9kCG78A/giphy.gif",
    "https://media.giphy.com/media/VeB9ieebylsaN5Jw8p/giphy.gif",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_pick_stays_in_pool() {
        let pools = IllustrationPools::default();
        for _ in 0..200 {
            let found = pools.illustrate(true, &RandomPicker).unwrap();
            assert!(pools.confident.contains(&found));
            assert!(!pools.unsure.contains(&found));

            let lost = pools.illustrate(false, &RandomPicker).unwrap();
            assert!(pools.unsure.contains(&lost));
            assert!(!pools.confident.contains(&lost));
        }
    }

    #[test]
    fn fixed_pick_is_deterministic() {
        let pools = IllustrationPools::default();
        let picker = FixedPicker { index: 12 };
        assert_eq!(
            pools.illustrate(true, &picker).as_deref(),
            Some(FOUND_IT[2])
        );
    }

    #[test]
    fn empty_pool_yields_none() {
        let pools = IllustrationPools {
            confident: Vec::new(),
            unsure: Vec::new(),
        };
        assert!(pools.illustrate(true, &RandomPicker).is_none());
        assert!(pools.illustrate(false, &FixedPicker::default()).is_none());
    }
}
