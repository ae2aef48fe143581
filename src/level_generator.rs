use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Draws the top level for a new tower: a fair coin is flipped until it
/// lands on stop, so about half of all towers stay at level 0, a quarter
/// reach level 1, and so on. Each list owns its generator, seeded from
/// OS entropy unless a fixed seed was configured.
pub(crate) struct LevelGenerator {
    rng: SmallRng,
    max_level: usize,
}

impl LevelGenerator {
    pub(crate) fn new(max_level: usize, seed: Option<u64>) -> Self {
        assert!(max_level >= 1);
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self { rng, max_level }
    }

    /// 0-based top level in `0..max_level`.
    pub(crate) fn next_level(&mut self) -> usize {
        let mut height = 1;
        while height < self.max_level && self.rng.random::<u32>() % 2 != 0 {
            height += 1;
        }
        height - 1
    }
}

#[cfg(test)]
mod tests {
    use super::LevelGenerator;

    #[test]
    fn levels_stay_below_max() {
        let mut levels = LevelGenerator::new(5, Some(7));
        for _ in 0..10_000 {
            assert!(levels.next_level() < 5);
        }
    }

    #[test]
    fn single_level_list_never_grows() {
        let mut levels = LevelGenerator::new(1, Some(7));
        for _ in 0..1000 {
            assert_eq!(levels.next_level(), 0);
        }
    }

    #[test]
    fn seeded_generators_agree() {
        let mut a = LevelGenerator::new(12, Some(42));
        let mut b = LevelGenerator::new(12, Some(42));
        for _ in 0..1000 {
            assert_eq!(a.next_level(), b.next_level());
        }
    }

    #[test]
    fn roughly_geometric() {
        const DRAWS: usize = 10_000;

        let mut levels = LevelGenerator::new(20, Some(1));
        let ground = (0..DRAWS).filter(|_| levels.next_level() == 0).count();

        // a fair coin keeps ~half of all towers at level 0
        assert!(ground > DRAWS * 35 / 100, "{ground} of {DRAWS} at level 0");
        assert!(ground < DRAWS * 65 / 100, "{ground} of {DRAWS} at level 0");
    }
}
