use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use loto45_db::models::{Draw, PICK_COUNT, POOL_SIZE};

pub const MIN_SETS: u32 = 1;
pub const MAX_SETS: u32 = 10;

/// Toute demande hors bornes est ramenée dans [1, 10], jamais rejetée.
pub fn clamp_count(requested: u32) -> u32 {
    requested.clamp(MIN_SETS, MAX_SETS)
}

pub fn generate(requested: u32, seed: Option<u64>) -> Vec<Draw> {
    let mut rng: StdRng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let count = clamp_count(requested);
    let time = Local::now().format("%H:%M").to_string();

    (0..count)
        .map(|_| {
            let (numbers, bonus) = draw_grid(&mut rng);
            Draw {
                numbers,
                bonus,
                time: time.clone(),
            }
        })
        .collect()
}

/// Tirage par rejet : numéros uniformes jusqu'à 6 valeurs distinctes,
/// puis un bonus uniforme hors des 6.
fn draw_grid(rng: &mut StdRng) -> ([u8; PICK_COUNT], u8) {
    let mut picked: Vec<u8> = Vec::with_capacity(PICK_COUNT);
    while picked.len() < PICK_COUNT {
        let n = rng.random_range(1..=POOL_SIZE);
        if !picked.contains(&n) {
            picked.push(n);
        }
    }
    picked.sort();

    let mut numbers = [0u8; PICK_COUNT];
    numbers.copy_from_slice(&picked);

    let mut bonus = rng.random_range(1..=POOL_SIZE);
    while numbers.contains(&bonus) {
        bonus = rng.random_range(1..=POOL_SIZE);
    }

    (numbers, bonus)
}
