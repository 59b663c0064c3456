use std::sync::OnceLock;

use rand::Rng;

use crate::models::prompt::WritingDifficulty;
use crate::random::WeightedTable;

/// Word-count tiers with their difficulty, weighted towards the shorter ones.
fn word_count_table() -> &'static WeightedTable<(u32, WritingDifficulty)> {
    static TABLE: OnceLock<WeightedTable<(u32, WritingDifficulty)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        WeightedTable::new([
            ((250, WritingDifficulty::VeryEasy), 30),
            ((500, WritingDifficulty::Easy), 30),
            ((750, WritingDifficulty::Medium), 25),
            ((1000, WritingDifficulty::Hard), 15),
        ])
    })
}

/// Draws a `(word_count, difficulty)` row. The pair always comes from one row.
pub fn pick_word_count<R: Rng + ?Sized>(rng: &mut R) -> (u32, WritingDifficulty) {
    *word_count_table().pick(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn expected_difficulty(word_count: u32) -> WritingDifficulty {
        match word_count {
            250 => WritingDifficulty::VeryEasy,
            500 => WritingDifficulty::Easy,
            750 => WritingDifficulty::Medium,
            1000 => WritingDifficulty::Hard,
            other => panic!("unexpected word count {other}"),
        }
    }

    #[test]
    fn test_word_count_always_paired_with_its_difficulty() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..5_000 {
            let (word_count, difficulty) = pick_word_count(&mut rng);
            assert_eq!(difficulty, expected_difficulty(word_count));
        }
    }

    #[test]
    fn test_every_tier_is_reachable() {
        let mut rng = StdRng::seed_from_u64(4);
        let seen: std::collections::HashSet<u32> =
            (0..1_000).map(|_| pick_word_count(&mut rng).0).collect();
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_hard_tier_is_the_rarest() {
        let mut rng = StdRng::seed_from_u64(23);
        let mut counts = std::collections::HashMap::new();
        for _ in 0..20_000 {
            *counts.entry(pick_word_count(&mut rng).0).or_insert(0u32) += 1;
        }
        let hard = counts[&1000];
        assert!(counts[&250] > hard && counts[&500] > hard && counts[&750] > hard);
    }
}
