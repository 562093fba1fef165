#[cfg(test)]
mod tests {
    use crate::layout::MAX_SEQUENCE;
    use crate::tests::test_utils::{assert_ids_increasing, scripted_generator};
    use crate::*;

    #[test]
    fn test_sequence_increments_within_millisecond() {
        let (g, _) = scripted_generator(0, 1, ClockPolicy::FailFast, &[500, 500, 500]);

        let sequences: Vec<u16> = (0..3)
            .map(|_| g.extract.sequence(g.next_id().unwrap()))
            .collect();
        assert_eq!(sequences, vec![0, 1, 2]);
    }

    #[test]
    fn test_sequence_resets_on_new_millisecond() {
        let (g, _) = scripted_generator(0, 1, ClockPolicy::FailFast, &[1000, 1001]);

        let first = g.next_id().unwrap();
        let second = g.next_id().unwrap();
        assert_eq!(g.extract.sequence(first), 0);
        assert_eq!(g.extract.sequence(second), 0);
        assert_eq!(g.extract.timestamp(second), 1001);
    }

    #[test]
    fn test_sequence_overflow_waits_for_next_millisecond() {
        let epoch = 100;
        let same = 2000;
        let later = 2003;
        // 4097 calls read `same`; the last one exhausts the sequence and
        // spins until it sees `later`
        let mut reads = vec![same; MAX_SEQUENCE as usize + 2];
        reads.push(later);
        let (g, _) = scripted_generator(epoch, 1, ClockPolicy::FailFast, &reads);

        let ids: Vec<i64> = (0..=MAX_SEQUENCE as usize + 1)
            .map(|_| g.next_id().unwrap())
            .collect();
        assert_eq!(ids.len(), 4097);

        let (ts, _, seq) = g.extract.decompose(ids[4095]);
        assert_eq!((ts, seq), (same - epoch, MAX_SEQUENCE));

        let (ts, _, seq) = g.extract.decompose(ids[4096]);
        assert_eq!((ts, seq), (later - epoch, 0));
        assert_ids_increasing(&ids);
    }

    #[test]
    fn test_sequence_overflow_with_clock_already_advanced() {
        let mut reads = vec![2000; MAX_SEQUENCE as usize + 1];
        reads.push(2001);
        let (g, _) = scripted_generator(0, 1, ClockPolicy::FailFast, &reads);

        let last = (0..4097).map(|_| g.next_id().unwrap()).last().unwrap();
        assert_eq!(g.extract.decompose(last), (2001, 1, 0));
    }

    #[test]
    fn test_pin_to_last_rolls_into_real_millisecond() {
        // Clock falls behind right after the first ID; the pinned millisecond
        // is used up and the generator then waits for 1001
        let mut reads = vec![1000];
        reads.extend(std::iter::repeat(999).take(MAX_SEQUENCE as usize + 1));
        reads.push(1001);
        let (g, _) = scripted_generator(0, 1, ClockPolicy::PinToLast, &reads);

        let ids: Vec<i64> = (0..4097).map(|_| g.next_id().unwrap()).collect();
        assert_eq!(g.extract.decompose(ids[4095]), (1000, 1, MAX_SEQUENCE));
        assert_eq!(g.extract.decompose(ids[4096]), (1001, 1, 0));
        assert_ids_increasing(&ids);
    }

    #[test]
    fn test_sequence_never_exceeds_max() {
        let g = IdGenerator::new(1).unwrap();
        for _ in 0..10_000 {
            let id = g.next_id().unwrap();
            assert!(g.extract.sequence(id) <= MAX_SEQUENCE);
        }
    }
}
