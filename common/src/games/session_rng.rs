use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RollSource {
    fn roll_below(&mut self, upper: u32) -> u32;
}

impl<T: RollSource + ?Sized> RollSource for &mut T {
    fn roll_below(&mut self, upper: u32) -> u32 {
        (**self).roll_below(upper)
    }
}

pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

impl RollSource for SessionRng {
    fn roll_below(&mut self, upper: u32) -> u32 {
        self.rng.random_range(0..upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        let first: Vec<u32> = (0..32).map(|_| a.roll_below(500)).collect();
        let second: Vec<u32> = (0..32).map(|_| b.roll_below(500)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_roll_below_stays_in_range() {
        let mut rng = SessionRng::new(1);
        for upper in 1..200 {
            assert!(rng.roll_below(upper) < upper);
        }
    }

    #[test]
    fn test_from_random_reports_its_seed() {
        let rng = SessionRng::from_random();
        let mut replayed = SessionRng::new(rng.seed());
        let mut original = rng;
        assert_eq!(original.roll_below(1000), replayed.roll_below(1000));
    }
}
