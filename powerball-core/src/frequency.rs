use indexmap::IndexMap;

use crate::models::{Draw, NumberStats};

/// Table numéro → nombre d'apparitions, dans l'ordre de première apparition
/// (ordre des tirages, puis position dans le tirage).
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: IndexMap<u32, usize>,
}

impl FrequencyTable {
    pub fn from_draws(draws: &[Draw]) -> Self {
        let mut counts = IndexMap::new();
        for draw in draws {
            for &n in draw.numbers() {
                *counts.entry(n).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    pub fn count(&self, number: u32) -> usize {
        self.counts.get(&number).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn entries(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.counts.iter().map(|(&n, &c)| (n, c))
    }

    /// Paires (numéro, fréquence) triées par fréquence décroissante.
    /// Tri stable : à égalité, l'ordre de première apparition est conservé.
    pub fn ranked(&self) -> Vec<(u32, usize)> {
        let mut sorted: Vec<(u32, usize)> = self.entries().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }

    pub fn stats(&self) -> Vec<NumberStats> {
        self.ranked()
            .into_iter()
            .map(|(number, frequency)| NumberStats { number, frequency })
            .collect()
    }
}
