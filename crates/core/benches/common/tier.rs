use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchTier {
    Quick,
    Full,
}

impl BenchTier {
    /// Frame side lengths to sweep; `Full` adds the slow large frames.
    pub fn frames(self) -> &'static [(usize, usize)] {
        match self {
            BenchTier::Quick => &[(3, 5), (5, 8), (6, 10)],
            BenchTier::Full => &[(3, 5), (5, 8), (6, 10), (8, 13), (10, 14)],
        }
    }
}

pub fn bench_tier() -> BenchTier {
    match env::var("YOUNG_BENCH_TIER").as_deref() {
        Ok("full") => BenchTier::Full,
        _ => BenchTier::Quick,
    }
}
