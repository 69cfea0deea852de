//! Numeral letter-count model
//!
//! Computes the letter count of a number's spelled-out Georgian name in
//! O(digit-group count) from precomputed per-magnitude tables, without ever
//! materializing the string. Letter counts include the internal spaces of a
//! composed name (for example "ას ერთი", 101, counts 7), matching what
//! `spell_out` produces.
//!
//! Grammatical rules reproduced on counts alone:
//! - a group whose value is 1 elides its own word (bare "ათასი" stands for
//!   one thousand);
//! - a tier suffix followed by another non-zero group uses its short,
//!   final-vowel-elided form;
//! - zero-valued groups emit nothing, not even a separator;
//! - the lowest non-zero group uses the long suffix form.

use smallvec::SmallVec;

use crate::error::{CoreError, Result};
use crate::lexicon::{Lexicon, TIER_COUNT, UNIT_COUNT};

/// Maximum number of base-1000 digit groups a value may decompose into.
///
/// Precondition of the whole model: inputs stay below 1000^10. The input
/// type already guarantees this — `u64::MAX` is below 1000^7 — so the bound
/// can only be reached if the model is ever widened to larger integers.
pub const MAX_GROUPS: usize = 10;

/// Base-1000 decomposition of a value, least-significant group first.
pub type DigitGroups = SmallVec<[u16; MAX_GROUPS]>;

/// Precomputed letter-length tables plus the lexicon they were derived from.
///
/// Immutable after construction. Build one up front and share it (by
/// reference or `Arc`) with every component that needs it; there is no
/// process-wide lazy global.
#[derive(Debug, Clone)]
pub struct NumeralModel {
    lexicon: Lexicon,
    unit_lengths: Vec<u32>,
    tier_long: [u32; TIER_COUNT],
    tier_short: [u32; TIER_COUNT],
}

impl NumeralModel {
    /// Build the model from a lexicon, validating the foundational
    /// fixed-point invariant (the name of 4 has 4 letters).
    pub fn new(lexicon: Lexicon) -> Result<Self> {
        let unit_lengths: Vec<u32> = lexicon
            .units()
            .iter()
            .map(|name| name.chars().count() as u32)
            .collect();
        debug_assert_eq!(unit_lengths.len(), UNIT_COUNT);

        if unit_lengths[4] != 4 {
            return Err(CoreError::FixedPointViolation {
                length: unit_lengths[4],
            });
        }

        let mut tier_long = [0u32; TIER_COUNT];
        let mut tier_short = [0u32; TIER_COUNT];
        for t in 0..TIER_COUNT {
            tier_long[t] = Lexicon::tier_long(t).chars().count() as u32;
            tier_short[t] = Lexicon::tier_short(t).chars().count() as u32;
        }

        Ok(Self {
            lexicon,
            unit_lengths,
            tier_long,
            tier_short,
        })
    }

    /// Build the standard model: packaged resource with builtin fallback.
    pub fn standard() -> Self {
        Self::new(Lexicon::load()).expect("shipped lexicon upholds the fixed-point invariant")
    }

    /// Letter count of the spelled-out name of `n`.
    ///
    /// `separator_len` is the character length of the text joining adjacent
    /// magnitude groups (2 for ", ", 1 for a bare space). Output depends
    /// only on the arguments and the static tables.
    pub fn count_letters(&self, n: u64, separator_len: u32) -> u32 {
        if n < 1000 {
            return self.unit_lengths[n as usize];
        }

        let groups = decompose(n);
        let mut non_zero = 0;
        while groups[non_zero] == 0 {
            non_zero += 1;
        }
        let mut l = groups.len() - 1;
        let mut count = 0;

        // Top group: value 1 elides its own word; others contribute the
        // word plus its joining space.
        if groups[l] != 1 {
            count += self.unit_lengths[groups[l] as usize] + 1;
        }
        if non_zero == l {
            // Sole non-zero group: unelided suffix, nothing follows.
            return count + self.tier_long[l - 1];
        }
        count += self.tier_short[l - 1];
        l -= 1;

        // Middle groups down to (but excluding) the lowest non-zero one.
        while l > non_zero {
            if groups[l] == 0 {
                l -= 1;
                continue;
            }
            count += separator_len;
            if groups[l] != 1 {
                count += self.unit_lengths[groups[l] as usize] + 1;
            }
            count += self.tier_short[l - 1];
            l -= 1;
        }

        // Lowest group: the units block has no tier suffix; a higher block
        // standing alone at the tail takes the unelided suffix.
        count += separator_len;
        if non_zero == 0 {
            count += self.unit_lengths[groups[0] as usize];
        } else {
            if groups[non_zero] != 1 {
                count += self.unit_lengths[groups[non_zero] as usize] + 1;
            }
            count += self.tier_long[non_zero - 1];
        }
        count
    }

    /// Spell out `n` as its full Georgian name.
    ///
    /// Off the hot path; used for display and for verifying
    /// [`count_letters`](Self::count_letters): with `drop_ones` set, the
    /// char count of the result equals
    /// `count_letters(n, separator.chars().count())`.
    pub fn spell_out(&self, n: u64, separator: &str, drop_ones: bool) -> String {
        if n < 1000 {
            return self.lexicon.unit(n as usize).to_string();
        }

        let groups = decompose(n);
        let mut non_zero = 0;
        while groups[non_zero] == 0 {
            non_zero += 1;
        }
        let mut l = groups.len() - 1;
        let mut name = String::new();

        if !drop_ones || groups[l] != 1 {
            name.push_str(self.lexicon.unit(groups[l] as usize));
            name.push(' ');
        }
        if non_zero == l {
            name.push_str(Lexicon::tier_long(l - 1));
            return name;
        }
        name.push_str(Lexicon::tier_short(l - 1));
        l -= 1;

        while l > non_zero {
            if groups[l] == 0 {
                l -= 1;
                continue;
            }
            name.push_str(separator);
            if !drop_ones || groups[l] != 1 {
                name.push_str(self.lexicon.unit(groups[l] as usize));
                name.push(' ');
            }
            name.push_str(Lexicon::tier_short(l - 1));
            l -= 1;
        }

        name.push_str(separator);
        if non_zero == 0 {
            name.push_str(self.lexicon.unit(groups[0] as usize));
        } else {
            if !drop_ones || groups[non_zero] != 1 {
                name.push_str(self.lexicon.unit(groups[non_zero] as usize));
                name.push(' ');
            }
            name.push_str(Lexicon::tier_long(non_zero - 1));
        }
        name
    }

    /// Unit-name letter lengths, indexed by value 0..=999.
    pub fn unit_lengths(&self) -> &[u32] {
        &self.unit_lengths
    }

    /// Long (unelided) tier suffix lengths, indexed by tier.
    pub fn tier_long_lengths(&self) -> &[u32; TIER_COUNT] {
        &self.tier_long
    }

    /// Short (elided) tier suffix lengths, indexed by tier.
    pub fn tier_short_lengths(&self) -> &[u32; TIER_COUNT] {
        &self.tier_short
    }

    /// The lexicon this model was built from.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

/// Decompose `n` into base-1000 groups, least-significant first.
///
/// Every group is in 0..=999 and at least one group is produced; the group
/// count cannot exceed [`MAX_GROUPS`] for any `u64`.
pub fn decompose(mut n: u64) -> DigitGroups {
    let mut groups = DigitGroups::new();
    while n >= 1000 {
        groups.push((n % 1000) as u16);
        n /= 1000;
    }
    groups.push(n as u16);
    debug_assert!(groups.len() <= MAX_GROUPS);
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> NumeralModel {
        NumeralModel::standard()
    }

    #[test]
    fn fixed_point_invariant() {
        let m = model();
        for sep in 0..5 {
            assert_eq!(m.count_letters(4, sep), 4);
        }
    }

    #[test]
    fn counts_below_one_thousand_ignore_separator() {
        let m = model();
        assert_eq!(m.count_letters(0, 2), 4);
        assert_eq!(m.count_letters(10, 2), 3);
        assert_eq!(m.count_letters(999, 2), 23);
        assert_eq!(m.count_letters(999, 0), 23);
    }

    #[test]
    fn counts_with_comma_separator() {
        let m = model();
        assert_eq!(m.count_letters(1_000, 2), 5);
        assert_eq!(m.count_letters(1_001, 2), 10);
        assert_eq!(m.count_letters(2_000, 2), 9);
        assert_eq!(m.count_letters(2_256, 2), 31);
        assert_eq!(m.count_letters(1_000_000, 2), 7);
        assert_eq!(m.count_letters(1_000_001, 2), 12);
        assert_eq!(m.count_letters(1_002_003, 2), 22);
        assert_eq!(m.count_letters(123_456_789, 2), 68);
        assert_eq!(m.count_letters(999_999_999, 2), 85);
        assert_eq!(m.count_letters(1_000_000_000, 2), 8);
    }

    #[test]
    fn counts_with_space_separator() {
        let m = model();
        assert_eq!(m.count_letters(1_001, 1), 9);
        assert_eq!(m.count_letters(1_002_003, 1), 20);
        assert_eq!(m.count_letters(123_456_789, 1), 66);
    }

    #[test]
    fn spell_out_matches_count() {
        let m = model();
        for n in (0..200_000u64)
            .chain([1_000_000, 5_000_000, 123_456_789, 999_999_999, u64::MAX])
        {
            let spelled = m.spell_out(n, ", ", true);
            assert_eq!(
                spelled.chars().count() as u32,
                m.count_letters(n, 2),
                "mismatch at {n}: {spelled}"
            );
        }
    }

    #[test]
    fn spell_out_samples() {
        let m = model();
        assert_eq!(m.spell_out(0, ", ", true), "ნული");
        assert_eq!(m.spell_out(1_000, ", ", true), "ათასი");
        assert_eq!(m.spell_out(1_001, ", ", true), "ათას, ერთი");
        assert_eq!(m.spell_out(1_000_000_000, ", ", true), "მილიარდი");
        // Without elision the "one" word is kept.
        assert_eq!(m.spell_out(1_000, ", ", false), "ერთი ათასი");
    }

    #[test]
    fn decompose_groups() {
        assert_eq!(decompose(0).as_slice(), [0]);
        assert_eq!(decompose(999).as_slice(), [999]);
        assert_eq!(decompose(1_000).as_slice(), [0, 1]);
        assert_eq!(decompose(1_002_003).as_slice(), [3, 2, 1]);
        assert_eq!(decompose(u64::MAX).len(), 7);
    }

    #[test]
    fn bad_table_is_rejected() {
        let mut lines = String::new();
        for i in 0..1000 {
            // Name of 4 deliberately has 5 letters.
            let name = if i == 4 { "xxxxx" } else { "xxxx" };
            lines.push_str(&format!("{i}: {name}\n"));
        }
        let lexicon = Lexicon::parse(&lines).unwrap();
        assert!(matches!(
            NumeralModel::new(lexicon),
            Err(CoreError::FixedPointViolation { length: 5 })
        ));
    }
}
