//! Producer Module Tests
//!
//! Verifies the partitioning contract: exact coverage of the block-start
//! sequence below the target bound, contiguous non-overlapping intervals,
//! and the deliberate unclamped overshoot of the final block.

#[cfg(test)]
mod tests {
    use crate::producer::planner::{block_count, plan_blocks};
    use crate::queue::protocol::TaskDescriptor;

    // ============================================================
    // TEST 1: Reference scenario from the end-to-end contract
    // ============================================================

    #[test]
    fn test_n9_s4_yields_two_blocks() {
        let blocks: Vec<TaskDescriptor> = plan_blocks(9, 4).collect();

        assert_eq!(
            blocks,
            vec![
                TaskDescriptor { start: 1, end: 5 },
                TaskDescriptor { start: 5, end: 9 },
            ]
        );
    }

    // ============================================================
    // TEST 2: Coverage - starts are exactly 1, 1+S, 1+2S, ... < N
    // ============================================================

    #[test]
    fn test_block_starts_cover_the_stride_sequence() {
        for (n, s) in [(2u64, 1u64), (9, 4), (10, 3), (100, 7), (1_000, 250)] {
            let starts: Vec<u64> = plan_blocks(n, s).map(|b| b.start).collect();
            let expected: Vec<u64> = (1..n).step_by(s as usize).collect();

            assert_eq!(starts, expected, "N={} S={}", n, s);
            assert_eq!(starts.len() as u64, block_count(n, s), "N={} S={}", n, s);
        }
    }

    #[test]
    fn test_first_start_at_or_past_bound_is_excluded() {
        // Starts would be 1, 5, 9; 9 >= 9 so only two blocks.
        assert_eq!(plan_blocks(9, 4).count(), 2);
        // 1, 5; next start 9 is exactly N=9 -> excluded. N=10 includes it.
        assert_eq!(plan_blocks(10, 4).count(), 3);
    }

    // ============================================================
    // TEST 3: Contiguity and non-overlap
    // ============================================================

    #[test]
    fn test_blocks_are_contiguous_and_non_overlapping() {
        for (n, s) in [(9u64, 4u64), (50, 1), (101, 25), (1_000_000, 99_999)] {
            let blocks: Vec<TaskDescriptor> = plan_blocks(n, s).collect();

            for pair in blocks.windows(2) {
                assert_eq!(pair[0].end, pair[1].start, "N={} S={}", n, s);
            }
            for block in &blocks {
                assert_eq!(block.end - block.start, s);
            }
        }
    }

    // ============================================================
    // TEST 4: Final block overshoot is allowed, never clamped
    // ============================================================

    #[test]
    fn test_final_block_end_is_not_clamped() {
        // N=10, S=4: last block is [9, 13), reaching past the bound.
        let blocks: Vec<TaskDescriptor> = plan_blocks(10, 4).collect();
        let last = blocks.last().unwrap();

        assert_eq!(last, &TaskDescriptor { start: 9, end: 13 });
        // Overshoot is bounded by one block.
        assert!(last.end - 10 < 4);
    }

    // ============================================================
    // TEST 5: Degenerate bounds
    // ============================================================

    #[test]
    fn test_bound_of_one_or_less_yields_no_blocks() {
        assert_eq!(plan_blocks(1, 4).count(), 0);
        assert_eq!(block_count(1, 4), 0);
        assert_eq!(block_count(0, 4), 0);
    }

    #[test]
    fn test_single_block_covers_small_bounds() {
        let blocks: Vec<TaskDescriptor> = plan_blocks(2, 10).collect();
        assert_eq!(blocks, vec![TaskDescriptor { start: 1, end: 11 }]);
    }
}
