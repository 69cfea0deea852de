//! Georgian numeral lexicon
//!
//! Supplies the 1000 unit names (0..=999) and the magnitude-tier suffixes
//! (thousand, million, ...) that the [`NumeralModel`](crate::NumeralModel)
//! precomputes its length tables from. The unit names come either from the
//! packaged resource embedded at compile time or, when that resource is
//! missing or malformed, from the grammatical composition fallback that
//! builds all 1000 names out of the literals for 0..=100.

use crate::error::{CoreError, Result};

/// Number of unit-name entries (names of 0 through 999).
pub const UNIT_COUNT: usize = 1000;

/// Number of magnitude tiers (thousand through nonillion, 1000^1..1000^10).
pub const TIER_COUNT: usize = 10;

/// Packaged unit-name table, one `index: name` line per entry.
const EMBEDDED_UNITS: &str = include_str!("../data/under1000.txt");

/// Tier suffix words: long (unelided) form paired with the short form used
/// when a lower non-zero group follows. Georgian elides the final vowel of
/// the tier word in the short form.
const TIERS: [(&str, &str); TIER_COUNT] = [
    ("ათასი", "ათას"),
    ("მილიონი", "მილიონ"),
    ("მილიარდი", "მილიარდ"),
    ("ტრილიონი", "ტრილიონ"),
    ("კვადრილიონი", "კვადრილიონ"),
    ("კვინტილიონი", "კვინტილიონ"),
    ("სექსტილიონი", "სექსტილიონ"),
    ("სეპტილიონი", "სეპტილიონ"),
    ("ოქტილიონი", "ოქტილიონ"),
    ("ნონილიონი", "ნონილიონ"),
];

/// The spelled-out names underlying the numeral model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    units: Vec<String>,
}

impl Lexicon {
    /// Load the lexicon from the packaged resource, falling back to the
    /// builtin composition when the resource is absent or malformed.
    ///
    /// The fallback is part of the contract: both sources produce tables
    /// satisfying the same invariants, so this never fails.
    pub fn load() -> Self {
        Self::parse(EMBEDDED_UNITS).unwrap_or_else(|_| Self::builtin())
    }

    /// Parse a unit-name table from `index: name` lines.
    ///
    /// Exactly [`UNIT_COUNT`] non-empty lines are required, in ascending
    /// index order starting at 0.
    pub fn parse(text: &str) -> Result<Self> {
        let mut units = Vec::with_capacity(UNIT_COUNT);
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (index, name) = line.split_once(':').ok_or(CoreError::InvalidLexicon {
                line: lineno + 1,
                reason: "missing ':' delimiter",
            })?;
            let index: usize =
                index
                    .trim()
                    .parse()
                    .map_err(|_| CoreError::InvalidLexicon {
                        line: lineno + 1,
                        reason: "index is not an integer",
                    })?;
            if index != units.len() {
                return Err(CoreError::InvalidLexicon {
                    line: lineno + 1,
                    reason: "indices must be contiguous from 0",
                });
            }
            let name = name.trim();
            if name.is_empty() {
                return Err(CoreError::InvalidLexicon {
                    line: lineno + 1,
                    reason: "empty name",
                });
            }
            units.push(name.to_string());
        }
        if units.len() != UNIT_COUNT {
            return Err(CoreError::LexiconShape {
                expected: UNIT_COUNT,
                found: units.len(),
            });
        }
        Ok(Self { units })
    }

    /// Construct the full unit table from Georgian composition rules.
    ///
    /// Literals cover 0..=20, the even tens, and the hundreds; everything
    /// else is composed: tens combine vigesimally ("ოცდა..." = twenty-and),
    /// and 101..=999 join an elided hundred word with a space to the
    /// remainder below 100.
    pub fn builtin() -> Self {
        let mut units = vec![String::new(); UNIT_COUNT];

        let small = [
            "ნული",
            "ერთი",
            "ორი",
            "სამი",
            "ოთხი",
            "ხუთი",
            "ექვსი",
            "შვიდი",
            "რვა",
            "ცხრა",
            "ათი",
            "თერთმეტი",
            "თორმეტი",
            "ცამეტი",
            "თოთხმეტი",
            "თხუთმეტი",
            "თექვსმეტი",
            "ჩვიდმეტი",
            "თვრამეტი",
            "ცხრამეტი",
            "ოცი",
        ];
        for (i, word) in small.iter().enumerate() {
            units[i] = word.to_string();
        }

        units[40] = "ორმოცი".to_string();
        units[60] = "სამოცი".to_string();
        units[80] = "ოთხმოცი".to_string();
        // Odd tens: "twenty-and-ten" and so on, built from the ten below.
        for i in (30..=90).step_by(20) {
            units[i] = format!("{}და{}", drop_last_char(&units[i - 10]), units[10]);
        }

        units[100] = "ასი".to_string();
        for i in (200..=900).step_by(100) {
            // 800 and 900 keep the full multiplier word; 200..=700 elide it.
            let multiplier = if i < 800 {
                drop_last_char(&units[i / 100]).to_string()
            } else {
                units[i / 100].clone()
            };
            units[i] = format!("{}{}", multiplier, units[100]);
        }

        for base in [20usize, 40, 60, 80] {
            for i in 1..=19 {
                units[base + i] = format!("{}და{}", drop_last_char(&units[base]), units[i]);
            }
        }

        for i in 1..=9 {
            let hundred = format!("{} ", drop_last_char(&units[i * 100]));
            for j in 1..=99 {
                units[i * 100 + j] = format!("{}{}", hundred, units[j]);
            }
        }

        Self { units }
    }

    /// Name of a value below 1000.
    pub fn unit(&self, n: usize) -> &str {
        &self.units[n]
    }

    /// Unelided suffix word for tier `t` (0 = thousand).
    pub fn tier_long(t: usize) -> &'static str {
        TIERS[t].0
    }

    /// Elided suffix word for tier `t`, used when a lower group follows.
    pub fn tier_short(t: usize) -> &'static str {
        TIERS[t].1
    }

    /// All unit names in index order.
    pub fn units(&self) -> &[String] {
        &self.units
    }
}

/// Strip the final character (Georgian words elide their final vowel).
fn drop_last_char(s: &str) -> &str {
    match s.char_indices().next_back() {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_matches_packaged_resource() {
        let parsed = Lexicon::parse(EMBEDDED_UNITS).expect("packaged resource parses");
        assert_eq!(parsed, Lexicon::builtin());
    }

    #[test]
    fn builtin_composition_samples() {
        let lex = Lexicon::builtin();
        assert_eq!(lex.unit(4), "ოთხი");
        assert_eq!(lex.unit(21), "ოცდაერთი");
        assert_eq!(lex.unit(30), "ოცდაათი");
        assert_eq!(lex.unit(55), "ორმოცდათხუთმეტი");
        assert_eq!(lex.unit(101), "ას ერთი");
        assert_eq!(lex.unit(800), "რვაასი");
        assert_eq!(lex.unit(999), "ცხრაას ოთხმოცდაცხრამეტი");
    }

    #[test]
    fn tier_short_is_long_minus_final_vowel() {
        for t in 0..TIER_COUNT {
            assert_eq!(drop_last_char(Lexicon::tier_long(t)), Lexicon::tier_short(t));
        }
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(
            Lexicon::parse("0 ნული"),
            Err(CoreError::InvalidLexicon { line: 1, .. })
        ));
        assert!(matches!(
            Lexicon::parse("1: ერთი"),
            Err(CoreError::InvalidLexicon { line: 1, .. })
        ));
        assert!(matches!(
            Lexicon::parse("0: ნული\n1: ერთი"),
            Err(CoreError::LexiconShape { found: 2, .. })
        ));
    }
}
