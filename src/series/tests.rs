//! Series Engine Tests
//!
//! Verifies the sign rule, the exactness guarantees (purity, idempotence,
//! block-split associativity) and the reference partial sums from the
//! end-to-end contract, using a small working precision so the expected
//! decimal strings stay readable.

#[cfg(test)]
mod tests {
    use crate::config::Precision;
    use crate::error::ProtocolError;
    use crate::queue::protocol::TaskDescriptor;
    use crate::series::engine::SeriesEngine;

    fn engine(digits: usize) -> SeriesEngine {
        SeriesEngine::new(Precision::new(digits))
    }

    // ============================================================
    // TEST 1: Sign rule - fixed once from start, flips per term
    // ============================================================

    #[test]
    fn test_starting_sign_follows_residue_of_start_plus_one() {
        let engine = engine(10);

        // (1+1) % 4 == 2 -> positive: 4/1 = 4
        let from_one = engine.partial_sum(&TaskDescriptor { start: 1, end: 3 }).unwrap();
        assert_eq!(from_one.to_string(), "4.0000000000");

        // (3+1) % 4 == 0 -> negative: -4/3
        let from_three = engine.partial_sum(&TaskDescriptor { start: 3, end: 5 }).unwrap();
        assert_eq!(from_three.to_string(), "-1.3333333333");

        // (5+1) % 4 == 2 -> positive: 4/5
        let from_five = engine.partial_sum(&TaskDescriptor { start: 5, end: 7 }).unwrap();
        assert_eq!(from_five.to_string(), "0.8000000000");

        // (7+1) % 4 == 0 -> negative: -4/7
        let from_seven = engine.partial_sum(&TaskDescriptor { start: 7, end: 9 }).unwrap();
        assert!(from_seven.to_string().starts_with("-0.5714285714"));
    }

    #[test]
    fn test_even_start_is_a_fatal_contract_violation() {
        let engine = engine(10);

        // (2+1) % 4 == 3: no sign is defined. The producer never emits such
        // a block, so the engine refuses instead of defaulting.
        let result = engine.partial_sum(&TaskDescriptor { start: 2, end: 6 });
        assert!(matches!(result, Err(ProtocolError::UndefinedSign { start: 2 })));

        let result = engine.partial_sum(&TaskDescriptor { start: 4, end: 8 });
        assert!(matches!(result, Err(ProtocolError::UndefinedSign { start: 4 })));
    }

    // ============================================================
    // TEST 2: Reference blocks from the end-to-end scenario (N=9, S=4)
    // ============================================================

    #[test]
    fn test_block_one_to_five_is_four_minus_four_thirds() {
        let engine = engine(30);
        let partial = engine.partial_sum(&TaskDescriptor { start: 1, end: 5 }).unwrap();

        // 4/1 - 4/3 with each term truncated to 30 digits.
        let expected = format!("2.{}7", "6".repeat(29));
        assert_eq!(partial.to_string(), expected);
    }

    #[test]
    fn test_block_five_to_nine_is_four_fifths_minus_four_sevenths() {
        let engine = engine(30);
        let partial = engine.partial_sum(&TaskDescriptor { start: 5, end: 9 }).unwrap();

        // 4/5 = 0.8 exactly; 4/7 truncates to 0.571428571428...; the
        // difference ends in ...572 because of the truncated subtrahend.
        assert_eq!(
            partial.to_string(),
            "0.228571428571428571428571428572"
        );
    }

    // ============================================================
    // TEST 3: Purity and idempotence
    // ============================================================

    #[test]
    fn test_same_block_yields_bit_identical_output() {
        let engine = engine(80);
        let task = TaskDescriptor { start: 101, end: 201 };

        let first = engine.partial_sum(&task).unwrap();
        let second = engine.partial_sum(&task).unwrap();

        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn test_independent_engines_agree() {
        let task = TaskDescriptor { start: 1, end: 41 };

        let a = engine(60).partial_sum(&task).unwrap();
        let b = engine(60).partial_sum(&task).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    // ============================================================
    // TEST 4: Block-split associativity at full precision
    // ============================================================

    #[test]
    fn test_split_blocks_sum_to_the_unsplit_partial() {
        // Per-term truncation does not depend on block boundaries and
        // decimal addition is exact, so the split sums are identical to the
        // unsplit one, not merely close.
        let engine = engine(40);

        let whole = engine.partial_sum(&TaskDescriptor { start: 1, end: 9 }).unwrap();
        let left = engine.partial_sum(&TaskDescriptor { start: 1, end: 5 }).unwrap();
        let right = engine.partial_sum(&TaskDescriptor { start: 5, end: 9 }).unwrap();

        assert_eq!(left + right, whole);
    }

    #[test]
    fn test_different_block_sizes_yield_the_same_total() {
        let engine = engine(40);
        let range = TaskDescriptor { start: 1, end: 61 };
        let whole = engine.partial_sum(&range).unwrap();

        for block_size in [2u64, 4, 10, 30] {
            let mut total = bigdecimal::BigDecimal::from(0);
            let mut start = 1;
            while start < 61 {
                let block = TaskDescriptor { start, end: start + block_size };
                total += engine.partial_sum(&block).unwrap();
                start += block_size;
            }
            assert_eq!(total, whole, "block_size={}", block_size);
        }
    }

    // ============================================================
    // TEST 5: Convergence sanity - more terms approach pi
    // ============================================================

    #[test]
    fn test_partial_sums_bracket_pi() {
        let engine = engine(50);

        // Leibniz partial sums alternate around pi: an even number of terms
        // undershoots, an odd number overshoots.
        let under = engine.partial_sum(&TaskDescriptor { start: 1, end: 401 }).unwrap();
        let over = engine.partial_sum(&TaskDescriptor { start: 1, end: 403 }).unwrap();

        let under_str = under.to_string();
        let over_str = over.to_string();
        assert!(under_str.starts_with("3.13"), "got {}", &under_str[..6]);
        assert!(over_str.starts_with("3.14"), "got {}", &over_str[..6]);
    }
}
