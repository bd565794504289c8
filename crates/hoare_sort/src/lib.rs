mod error;
mod partition;
mod segment;
mod stack;

pub mod pipeline;
pub mod sequential;

pub use error::{PipelineError, Result};
pub use partition::{Partitioned, partition, partition_tracking};
pub use pipeline::{Pipeline, PipelineStats};
pub use segment::{Element, MAX_GUARANTEED_SORTED_SEGMENT_SIZE, Segment};
pub use stack::Stack;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Engine {
    Sequential,
    SequentialOrderAware,
    Pipeline,
}

pub const ALL_ENGINES: [Engine; 3] = [
    Engine::Sequential,
    Engine::SequentialOrderAware,
    Engine::Pipeline,
];

pub fn all_engines() -> &'static [Engine] {
    &ALL_ENGINES
}

pub fn engine_name(engine: Engine) -> &'static str {
    match engine {
        Engine::Sequential => "sequential",
        Engine::SequentialOrderAware => "sequential_order_aware",
        Engine::Pipeline => "pipeline",
    }
}

pub fn sort_with<T: Element + Send>(engine: Engine, data: &mut [T]) -> &mut [T] {
    match engine {
        Engine::Sequential => sequential::sort(data),
        Engine::SequentialOrderAware => sequential::sort_order_aware(data),
        Engine::Pipeline => pipeline::sort(data),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    use super::*;

    const CITIES: [&str; 40] = [
        "New York", "Tokyo", "London", "Paris", "Berlin", "Sydney", "Toronto", "Dubai",
        "Singapore", "Barcelona", "Moscow", "Los Angeles", "Rio de Janeiro", "Istanbul",
        "Seoul", "Mexico City", "Lisbon", "Helsinki", "Valencia", "Lisbon", "Helsinki",
        "Valencia", "Düsseldorf", "Zurich", "Cape Town", "Tel Aviv", "Abu Dhabi", "Addis Ababa",
        "Kuala Lumpur", "São Paulo", "Kraków", "Hanoi", "Osaka", "Kyoto", "Bruges", "Ghent",
        "Antwerp", "Munich", "Málaga", "Glasgow",
    ];

    fn assert_sorts_like_std<T: Element + Send + std::fmt::Debug>(data: &[T]) {
        let mut expected = data.to_vec();
        expected.sort_unstable();

        for &engine in all_engines() {
            let mut actual = data.to_vec();
            sort_with(engine, &mut actual);
            assert_eq!(
                actual,
                expected,
                "engine={} input_len={}",
                engine_name(engine),
                data.len()
            );
        }
    }

    #[test]
    fn engine_names_are_unique() {
        let mut seen = HashSet::new();
        for &engine in all_engines() {
            assert!(seen.insert(engine_name(engine)));
        }
    }

    #[test]
    fn edge_cases() {
        let cases = [
            vec![],
            vec![42],
            vec![1, 2, 3, 4, 5, 6],
            vec![6, 5, 4, 3, 2, 1],
            vec![7; 128],
            vec![u64::MIN, 1, u64::MAX, 0, u64::MAX - 1, 2],
            vec![5, 5, 3, 3, 1, 1, 4, 4, 2, 2, 0, 0],
        ];

        for case in &cases {
            assert_sorts_like_std(case);
        }
    }

    #[test]
    fn signed_and_text_elements() {
        assert_sorts_like_std(&[0_i8, -1, i8::MIN, i8::MAX, 3, -3, 0]);
        assert_sorts_like_std(&["b", "", "ab", "a", "ba", ""]);
    }

    #[test]
    fn shuffled_cities() {
        let mut rng = StdRng::seed_from_u64(0xC171_2026);
        let mut cities: Vec<String> = CITIES.iter().map(|city| city.to_string()).collect();
        for _ in 0..10 {
            cities.shuffle(&mut rng);
            assert_sorts_like_std(&cities);
        }
    }

    #[test]
    fn fixed_seed_many_duplicates() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        for &size in &[64_usize, 1024, 4096] {
            let data: Vec<u64> = (0..size)
                .map(|_| (rng.random::<u64>() % 16) * 17)
                .collect();
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn engines_agree_on_a_million_elements() {
        const LEN: usize = 1_000_000;
        let mut rng = StdRng::seed_from_u64(0xB16_2026);

        for &max in &[1_000_000_u32, 1_000, 10] {
            let data: Vec<u32> = (0..LEN).map(|_| rng.random_range(0..max)).collect();

            let mut sequential = data.clone();
            sequential::sort(&mut sequential);
            assert!(sequential.is_sorted(), "max={max}");

            let mut pipelined = data.clone();
            pipeline::sort(&mut pipelined);
            assert_eq!(pipelined, sequential, "max={max}");

            let mut expected = data;
            expected.sort_unstable();
            assert_eq!(sequential, expected, "max={max}");
        }
    }
}
