//! Queue construction: day-range filtering, direction mapping, shuffling.

use crate::vocab::{Direction, VocabItem, VocabSource};
use rand::Rng;
use rand::seq::SliceRandom;

/// Everything that determines the contents and order of a playback queue.
/// Any change to one of these fields requires a rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueSpec {
    pub day_from: u32,
    pub day_to: u32,
    pub direction: Direction,
    pub shuffle: bool,
}

/// Build the working playback queue from repository output.
///
/// Keeps only entries whose day id lies in the closed interval
/// `[day_from, day_to]`; a reversed range yields an empty queue, not an
/// error. With `shuffle` the result is a uniform random permutation
/// (Fisher–Yates), so every kept entry appears exactly once.
pub fn build_queue<R>(source: &dyn VocabSource, spec: &QueueSpec, rng: &mut R) -> Vec<VocabItem>
where
    R: Rng + ?Sized,
{
    let mut items: Vec<VocabItem> = source
        .entries()
        .iter()
        .filter(|entry| entry.day_id >= spec.day_from && entry.day_id <= spec.day_to)
        .map(|entry| match spec.direction {
            Direction::EnglishFirst => VocabItem {
                id: entry.id,
                primary: entry.english.clone(),
                secondary: entry.indonesian.clone(),
            },
            Direction::IndonesianFirst => VocabItem {
                id: entry.id,
                primary: entry.indonesian.clone(),
                secondary: entry.english.clone(),
            },
        })
        .collect();

    if spec.shuffle {
        items.shuffle(rng);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::DayEntry;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeSet;

    struct StubVocab(Vec<DayEntry>);

    impl VocabSource for StubVocab {
        fn entries(&self) -> &[DayEntry] {
            &self.0
        }
    }

    fn entry(day_id: u32, id: u32, english: &str, indonesian: &str) -> DayEntry {
        DayEntry {
            day_id,
            id,
            english: english.to_string(),
            indonesian: indonesian.to_string(),
        }
    }

    fn sample_vocab() -> StubVocab {
        StubVocab(vec![
            entry(1, 1, "water", "air"),
            entry(1, 2, "fire", "api"),
            entry(2, 3, "tree", "pohon"),
            entry(3, 4, "stone", "batu"),
        ])
    }

    fn spec(day_from: u32, day_to: u32, shuffle: bool) -> QueueSpec {
        QueueSpec {
            day_from,
            day_to,
            direction: Direction::EnglishFirst,
            shuffle,
        }
    }

    #[test]
    fn unshuffled_build_preserves_repository_order() {
        let queue = build_queue(&sample_vocab(), &spec(1, 3, false), &mut StdRng::seed_from_u64(0));
        let ids: Vec<u32> = queue.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn range_filter_is_a_closed_interval() {
        let queue = build_queue(&sample_vocab(), &spec(1, 2, false), &mut StdRng::seed_from_u64(0));
        let ids: Vec<u32> = queue.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn reversed_range_yields_empty_queue() {
        let queue = build_queue(&sample_vocab(), &spec(3, 1, false), &mut StdRng::seed_from_u64(0));
        assert!(queue.is_empty());
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let vocab = StubVocab(
            (0..50)
                .map(|i| entry(1, i, &format!("en-{i}"), &format!("id-{i}")))
                .collect(),
        );
        let queue = build_queue(&vocab, &spec(1, 1, true), &mut StdRng::seed_from_u64(42));

        assert_eq!(queue.len(), 50);
        let ids: BTreeSet<u32> = queue.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), 50, "every item appears exactly once");
    }

    #[test]
    fn direction_swaps_primary_and_secondary() {
        let mut reversed = spec(1, 1, false);
        reversed.direction = Direction::IndonesianFirst;
        let queue = build_queue(&sample_vocab(), &reversed, &mut StdRng::seed_from_u64(0));
        assert_eq!(queue[0].primary, "air");
        assert_eq!(queue[0].secondary, "water");
    }
}
