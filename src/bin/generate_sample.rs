//! Writes a synthetic `spacex_launch_dash.csv` with the same columns as the
//! course dataset, so the dashboard can run without it.

use anyhow::{Context, Result};
use serde::Serialize;

const OUTPUT_PATH: &str = "spacex_launch_dash.csv";
const LAUNCHES: usize = 56;

/// Booster eras in flight order: (category, first flight number, success rate).
const ERAS: [(&str, usize, f64); 5] = [
    ("v1.0", 1, 0.2),
    ("v1.1", 6, 0.35),
    ("FT", 21, 0.7),
    ("B4", 41, 0.6),
    ("B5", 50, 0.95),
];

const SITES: [(&str, f64); 4] = [
    ("CCAFS LC-40", 0.45),
    ("VAFB SLC-4E", 0.15),
    ("KSC LC-39A", 0.25),
    ("CCAFS SLC-40", 0.15),
];

#[derive(Serialize)]
struct Row<'a> {
    #[serde(rename = "Unnamed: 0")]
    index: usize,
    #[serde(rename = "Flight Number")]
    flight_number: usize,
    #[serde(rename = "Launch Site")]
    launch_site: &'a str,
    class: u8,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: &'a str,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Pick an item according to its weight (weights sum to 1).
    fn weighted<'a>(&mut self, items: &[(&'a str, f64)]) -> &'a str {
        let mut roll = self.next_f64();
        for &(item, weight) in items {
            if roll < weight {
                return item;
            }
            roll -= weight;
        }
        items[items.len() - 1].0
    }
}

fn era_for(flight: usize) -> (&'static str, f64) {
    ERAS.iter()
        .rev()
        .find(|(_, first, _)| flight >= *first)
        .map(|&(category, _, rate)| (category, rate))
        .unwrap_or((ERAS[0].0, ERAS[0].2))
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(OUTPUT_PATH)
        .with_context(|| format!("creating {OUTPUT_PATH}"))?;

    for index in 0..LAUNCHES {
        let flight_number = index + 1;
        let (category, success_rate) = era_for(flight_number);

        // Early boosters flew light; later ones up to ~9600 kg.
        let ceiling = 2000.0 + 7600.0 * (flight_number as f64 / LAUNCHES as f64);
        let payload_mass_kg = if flight_number <= 2 {
            0.0
        } else {
            (rng.next_f64() * ceiling).round()
        };

        let row = Row {
            index,
            flight_number,
            launch_site: rng.weighted(&SITES),
            class: u8::from(rng.next_f64() < success_rate),
            payload_mass_kg,
            booster_version: format!("F9 {category} B{:04}", 1000 + flight_number),
            booster_version_category: category,
        };
        writer.serialize(&row).context("writing row")?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {LAUNCHES} launches to {OUTPUT_PATH}");
    Ok(())
}
