//! `rand` 기반 난수 소스.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tarot_core::ports::random::RandomSource;

/// `StdRng` 기반 `RandomSource` 구현
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// OS 엔트로피로 초기화
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// 고정 시드로 초기화 (재현용)
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandom {
    fn unit(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }

    fn keep(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}
