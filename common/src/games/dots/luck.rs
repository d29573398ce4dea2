use serde::{Deserialize, Serialize};

use crate::games::session_rng::RollSource;
use super::types::{ColorSet, DotColor};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LuckSettings {
    pub modifier: i32,
    pub initial: i32,
    pub floor: i32,
    pub base_weight: i32,
}

impl Default for LuckSettings {
    fn default() -> Self {
        Self {
            modifier: 15,
            initial: -1,
            floor: -3,
            base_weight: 100,
        }
    }
}

pub const MAX_MODIFIER: i32 = 1_000;
pub const MAX_BASE_WEIGHT: i32 = 100_000;
pub const MAX_LUCK_MAGNITUDE: i32 = 1_000;

// keeps the summed weights of the whole palette inside u32
const MAX_WEIGHT: i64 = (u32::MAX / 5) as i64;

impl LuckSettings {
    pub fn validate(&self) -> Result<(), String> {
        if !(0..=MAX_MODIFIER).contains(&self.modifier) {
            return Err(format!(
                "Luck modifier must be between 0 and {}, got {}",
                MAX_MODIFIER, self.modifier
            ));
        }
        if !(1..=MAX_BASE_WEIGHT).contains(&self.base_weight) {
            return Err(format!(
                "Base weight must be between 1 and {}, got {}",
                MAX_BASE_WEIGHT, self.base_weight
            ));
        }
        for (name, value) in [("Initial luck", self.initial), ("Luck floor", self.floor)] {
            if value.unsigned_abs() > MAX_LUCK_MAGNITUDE.unsigned_abs() {
                return Err(format!(
                    "{} must be between -{} and {}, got {}",
                    name, MAX_LUCK_MAGNITUDE, MAX_LUCK_MAGNITUDE, value
                ));
            }
        }
        if self.initial < self.floor {
            return Err(format!(
                "Initial luck {} is below the luck floor {}",
                self.initial, self.floor
            ));
        }
        Ok(())
    }
}

// floored on lucky rolls, no ceiling on unlucky ones
#[derive(Clone, Debug)]
pub struct LuckCounter {
    value: i32,
    settings: LuckSettings,
}

impl LuckCounter {
    pub fn new(settings: LuckSettings) -> Self {
        Self {
            value: settings.initial,
            settings,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn settings(&self) -> &LuckSettings {
        &self.settings
    }

    pub fn weights(&self, lucky: ColorSet) -> [u32; 5] {
        let luck = i64::from(self.value);
        let modifier = i64::from(self.settings.modifier);
        let base_weight = i64::from(self.settings.base_weight);
        let palette_len = DotColor::PALETTE.len() as i64;

        let bonus = if lucky.is_empty() {
            0
        } else {
            let lucky_count = lucky.len() as i64;
            let numerator = luck
                .saturating_mul(palette_len - lucky_count)
                .saturating_mul(modifier);
            (numerator as f64 / lucky_count as f64).round_ties_even() as i64
        };

        DotColor::PALETTE.map(|color| {
            let weight = if lucky.contains(color) {
                base_weight.saturating_add(bonus)
            } else {
                base_weight.saturating_sub(luck.saturating_mul(modifier))
            };
            weight.clamp(0, MAX_WEIGHT) as u32
        })
    }

    pub fn roll(&mut self, lucky: ColorSet, rng: &mut impl RollSource) -> DotColor {
        let weights = self.weights(lucky);
        let color = pick_weighted(&weights, rng);
        self.record(lucky.contains(color));
        color
    }

    fn record(&mut self, hit_lucky_color: bool) {
        if hit_lucky_color {
            self.value = self.value.saturating_sub(2).max(self.settings.floor);
        } else {
            self.value = self.value.saturating_add(1);
        }
    }
}

fn pick_weighted(weights: &[u32; 5], rng: &mut impl RollSource) -> DotColor {
    let total = weights.iter().fold(0u32, |sum, w| sum.saturating_add(*w));
    if total == 0 {
        let index = rng.roll_below(DotColor::PALETTE.len() as u32) as usize;
        return DotColor::PALETTE[index];
    }

    let draw = rng.roll_below(total);
    let mut cumulative = 0u32;
    for (color, weight) in DotColor::PALETTE.iter().zip(weights) {
        cumulative = cumulative.saturating_add(*weight);
        if cumulative > draw {
            return *color;
        }
    }
    DotColor::Yellow
}
