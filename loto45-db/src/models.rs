use std::collections::BTreeMap;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

pub const POOL_SIZE: u8 = 45;
pub const PICK_COUNT: usize = 6;
pub const HISTORY_CAP: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw {
    pub numbers: [u8; PICK_COUNT],
    pub bonus: u8,
    pub time: String,
}

pub fn validate_draw(numbers: &[u8; PICK_COUNT], bonus: u8) -> Result<()> {
    for &n in numbers {
        if n < 1 || n > POOL_SIZE {
            bail!("Numéro {} hors limites (1-{})", n, POOL_SIZE);
        }
    }
    if bonus < 1 || bonus > POOL_SIZE {
        bail!("Bonus {} hors limites (1-{})", bonus, POOL_SIZE);
    }
    for i in 0..numbers.len() {
        for j in (i + 1)..numbers.len() {
            if numbers[i] == numbers[j] {
                bail!("Numéro en double : {}", numbers[i]);
            }
        }
    }
    if numbers.contains(&bonus) {
        bail!("Bonus {} déjà présent dans la grille", bonus);
    }
    Ok(())
}

/// Grilles passées, la plus récente en tête, bornées à HISTORY_CAP.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    draws: Vec<Draw>,
}

impl History {
    pub fn record(&mut self, draw: Draw) {
        self.draws.insert(0, draw);
        self.draws.truncate(HISTORY_CAP);
    }

    pub fn draws(&self) -> &[Draw] {
        &self.draws
    }

    pub fn len(&self) -> usize {
        self.draws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }
}

/// Compteur cumulé d'apparitions par numéro (bonus inclus).
/// Jamais élagué, même quand l'historique évince ses entrées.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frequency {
    counts: BTreeMap<u8, u32>,
}

impl Frequency {
    pub fn record(&mut self, draw: &Draw) {
        for &n in &draw.numbers {
            *self.counts.entry(n).or_insert(0) += 1;
        }
        *self.counts.entry(draw.bonus).or_insert(0) += 1;
    }

    pub fn count(&self, number: u8) -> u32 {
        self.counts.get(&number).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
