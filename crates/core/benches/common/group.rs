use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;

use crate::bench_tier::BenchTier;

pub fn configure_group<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    tier: BenchTier,
) {
    let (sample_size, measurement) = match tier {
        BenchTier::Quick => (20, Duration::from_secs(3)),
        BenchTier::Full => (40, Duration::from_secs(8)),
    };
    group.sample_size(sample_size);
    group.measurement_time(measurement);
}
