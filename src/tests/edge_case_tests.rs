//! Edge case tests

#[cfg(test)]
mod tests {
    use crate::tests::test_utils::{assert_ids_increasing, assert_unique_ids};
    use crate::*;
    use std::collections::HashSet;

    fn manual_generator(node_id: i64, clock: &ManualClock) -> IdGenerator<ManualClock> {
        let config = GeneratorConfig::builder()
            .epoch(0)
            .node_id(NodeIdSource::fixed(node_id).unwrap())
            .time_source(clock.clone())
            .build()
            .unwrap();
        IdGenerator::with_config(config)
    }

    /// IDs from different nodes never collide, even within the same millisecond
    #[test]
    fn test_cross_node_uniqueness() {
        let clock = ManualClock::new(10_000);
        let generators: Vec<_> = (0..10).map(|n| manual_generator(n, &clock)).collect();
        let mut all_ids = HashSet::new();

        for _ in 0..100 {
            for g in &generators {
                let id = g.next_id().unwrap();
                assert!(all_ids.insert(id), "Collision from node {}", g.node_id());
            }
        }
        assert_eq!(all_ids.len(), 1000);
    }

    /// Verify ID bit structure: timestamp | node | sequence
    #[test]
    fn test_id_bit_structure() {
        let clock = ManualClock::new(0b1011);
        let g = manual_generator(0b1010101010, &clock);

        let id = g.next_id().unwrap();
        assert_eq!(id & 0xFFF, 0);
        assert_eq!((id >> 12) & 0x3FF, 0b1010101010);
        assert_eq!(id >> 22, 0b1011);
        assert_eq!(id >> 63, 0, "Sign bit must stay clear");
    }

    #[test]
    fn test_numeric_sorting_with_advancing_clock() {
        let clock = ManualClock::new(1_000);
        let g = manual_generator(3, &clock);

        let mut ids = Vec::new();
        for step in 0..50 {
            ids.push(g.next_id().unwrap());
            if step % 3 == 0 {
                clock.advance(1);
            }
        }

        assert_ids_increasing(&ids);
        assert_unique_ids(&ids, 50);
    }

    #[test]
    fn test_decomposition_roundtrip() {
        let g = IdGenerator::new(42).unwrap();

        for _ in 0..100 {
            let id = g.next_id().unwrap();
            let (ts, node, seq) = g.extract.decompose(id);
            assert_eq!(id, layout::compose(ts, node, seq));
            assert_eq!(node, 42);
        }
    }

    #[test]
    fn test_epoch_equal_to_now() {
        let clock = ManualClock::new(123_456);
        let config = GeneratorConfig::builder()
            .epoch(123_456)
            .time_source(clock.clone())
            .build()
            .unwrap();
        let g = IdGenerator::with_config(config);

        let id = g.next_id().unwrap();
        assert_eq!(g.extract.decompose(id), (0, 0, 0));
        assert_eq!(id, 0);
    }

    #[test]
    fn test_datetime_of_generated_id() {
        let g = IdGenerator::new(1).unwrap();
        let id = g.next_id().unwrap();
        let at = g.extract.datetime(id).unwrap();
        assert_eq!(at.timestamp_millis(), g.extract.unix_millis(id));
        assert!(at > g.config.epoch_datetime().unwrap());
    }

    #[test]
    fn test_independent_generators_share_nothing() {
        let clock = ManualClock::new(7);
        let a = manual_generator(1, &clock);
        let b = manual_generator(2, &clock);

        a.next_id().unwrap();
        a.next_id().unwrap();
        let from_b = b.next_id().unwrap();
        assert_eq!(b.extract.sequence(from_b), 0);
    }
}
