//! Property tests for the numeral model

use otkhi_core::{ChainIterator, NumeralModel};
use proptest::prelude::*;

/// Any chain taking more than this many steps signals a value whose chain
/// does not collapse to 4, which would falsify the termination assumption.
const MAX_REASONABLE_STEPS: usize = 50;

fn separator_of_len(len: u32) -> String {
    match len {
        1 => " ".to_string(),
        2 => ", ".to_string(),
        n => "-".repeat(n as usize),
    }
}

proptest! {
    #[test]
    fn count_letters_matches_spelled_length(n in 0u64..10_000_000, sep_len in 1u32..4) {
        let model = NumeralModel::standard();
        let separator = separator_of_len(sep_len);
        let spelled = model.spell_out(n, &separator, true);
        prop_assert_eq!(spelled.chars().count() as u32, model.count_letters(n, sep_len));
    }

    #[test]
    fn count_letters_matches_spelled_length_for_large_values(n in 0u64..=u64::MAX) {
        let model = NumeralModel::standard();
        let spelled = model.spell_out(n, ", ", true);
        prop_assert_eq!(spelled.chars().count() as u32, model.count_letters(n, 2));
    }

    #[test]
    fn chains_terminate_quickly(n in 0u64..1_000_000_000) {
        let model = NumeralModel::standard();
        let chain = ChainIterator::new(&model, 2).iterate(n);
        prop_assert!(
            chain.len() <= MAX_REASONABLE_STEPS,
            "chain from {} took {} steps", n, chain.len()
        );
    }

    #[test]
    fn chains_end_at_the_fixed_point(n in 0u64..1_000_000_000) {
        let model = NumeralModel::standard();
        let chain = ChainIterator::new(&model, 2).iterate(n);
        prop_assert_eq!(*chain.values().last().unwrap(), 4);
        prop_assert_eq!(chain.start(), n);
    }
}

#[test]
fn fixed_point_holds_for_every_separator_length() {
    let model = NumeralModel::standard();
    for sep in 0..=8 {
        assert_eq!(model.count_letters(4, sep), 4);
    }
}
