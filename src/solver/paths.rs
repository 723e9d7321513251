/// Lazy cartesian product of per-suit paths into whole-deck masks.
///
/// Yields one boolean mask per combination, true at every consumed
/// position, in lexicographic order over the suit path lists. The
/// product is streamed; nothing is materialised up front.
pub fn product<'a>(
    suits: &'a [Vec<SuitPath>],
    size: usize,
) -> impl Iterator<Item = Vec<bool>> + 'a {
    suits
        .iter()
        .map(|paths| paths.iter())
        .multi_cartesian_product()
        .map(move |combination| {
            let mut mask = vec![false; size];
            for path in combination {
                for &location in path {
                    mask[location] = true;
                }
            }
            mask
        })
}

use super::shape::SuitPath;
use itertools::Itertools;
