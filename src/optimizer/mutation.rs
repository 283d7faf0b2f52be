use crate::rng::RandomSource;

/// One applied strip swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swap {
    pub column: usize,
    pub a: usize,
    pub b: usize,
}

/// Picks a column uniformly and swaps two distinct positions of its strip.
///
/// Strips shorter than two symbols cannot be swapped; the move is skipped and
/// `None` returned. This can stall a search on degenerate reels and is not an
/// error.
pub fn swap_random_positions(strips: &mut [Vec<String>], rng: &mut RandomSource) -> Option<Swap> {
    if strips.is_empty() {
        return None;
    }
    let column = rng.int(strips.len());
    let strip = &mut strips[column];
    let len = strip.len();
    if len < 2 {
        // Degenerate reel: nothing to swap.
        return None;
    }

    let a = rng.int(len);
    let mut b = rng.int(len - 1);
    if b >= a {
        b += 1;
    }
    strip.swap(a, b);
    Some(Swap { column, a, b })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_swap_uses_distinct_positions() {
        let mut rng = RandomSource::new("swap");
        for _ in 0..200 {
            let mut strips = vec![strip(&["A", "B"]), strip(&["C", "D", "E"])];
            let swap = swap_random_positions(&mut strips, &mut rng).expect("swap applies");
            assert_ne!(swap.a, swap.b);
            let changed = &strips[swap.column];
            assert_eq!(changed.len(), if swap.column == 0 { 2 } else { 3 });
        }
    }

    #[test]
    fn test_swap_preserves_symbol_multiset() {
        let mut rng = RandomSource::new("multiset");
        let mut strips = vec![strip(&["A", "A", "B", "C", "W"])];
        for _ in 0..50 {
            swap_random_positions(&mut strips, &mut rng);
        }
        let mut sorted = strips[0].clone();
        sorted.sort();
        assert_eq!(sorted, strip(&["A", "A", "B", "C", "W"]));
    }

    #[test]
    fn test_short_strip_is_noop() {
        let mut rng = RandomSource::new("short");
        let mut strips = vec![strip(&["A"])];
        assert_eq!(swap_random_positions(&mut strips, &mut rng), None);
        assert_eq!(strips, vec![strip(&["A"])]);

        let mut none: Vec<Vec<String>> = Vec::new();
        assert_eq!(swap_random_positions(&mut none, &mut rng), None);
    }
}
