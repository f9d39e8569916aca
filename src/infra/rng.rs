use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

use crate::engine::RandomSource;

/// Системный RNG (thread-local, энтропия ОС). Для обычной игры.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn coin_flip(&mut self) -> bool {
        thread_rng().gen_bool(0.5)
    }

    fn range_inclusive(&mut self, low: usize, high: usize) -> usize {
        thread_rng().gen_range(low..=high)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же шузы при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn coin_flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }

    fn range_inclusive(&mut self, low: usize, high: usize) -> usize {
        self.inner.gen_range(low..=high)
    }
}

/// RNG по конфигу: с seed детерминированный, без seed системный.
#[derive(Clone, Debug)]
pub enum ConfiguredRng {
    System(SystemRng),
    Seeded(DeterministicRng),
}

impl ConfiguredRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => ConfiguredRng::Seeded(DeterministicRng::from_seed(s)),
            None => ConfiguredRng::System(SystemRng),
        }
    }
}

impl RandomSource for ConfiguredRng {
    fn coin_flip(&mut self) -> bool {
        match self {
            ConfiguredRng::System(r) => r.coin_flip(),
            ConfiguredRng::Seeded(r) => r.coin_flip(),
        }
    }

    fn range_inclusive(&mut self, low: usize, high: usize) -> usize {
        match self {
            ConfiguredRng::System(r) => r.range_inclusive(low, high),
            ConfiguredRng::Seeded(r) => r.range_inclusive(low, high),
        }
    }
}
