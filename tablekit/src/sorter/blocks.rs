//! Block partitioning and ordering.

use std::cmp::Ordering;

/// Split `rows` into runs of `block_size`; the last run may be shorter.
pub(crate) fn partition<T>(rows: Vec<T>, block_size: usize) -> Vec<Vec<T>> {
    let block_size = block_size.max(1);
    let mut blocks = Vec::with_capacity(rows.len().div_ceil(block_size));
    let mut rows = rows.into_iter().peekable();
    while rows.peek().is_some() {
        blocks.push(rows.by_ref().take(block_size).collect());
    }
    blocks
}

/// The row at `offset`, or the last row of a block too short to have one.
pub(crate) fn representative<T>(block: &[T], offset: usize) -> Option<&T> {
    block.get(offset).or_else(|| block.last())
}

/// Stable sort of blocks by a per-block key.
///
/// When `reversed`, each comparison result is inverted rather than the output
/// reversed, so equal blocks keep their prior relative order either way.
pub(crate) fn sort_blocks<T, K>(
    blocks: Vec<Vec<T>>,
    key: impl Fn(&[T]) -> K,
    compare: impl Fn(&K, &K) -> Ordering,
    reversed: bool,
) -> Vec<Vec<T>> {
    let mut keyed: Vec<(K, Vec<T>)> = blocks.into_iter().map(|b| (key(&b), b)).collect();
    keyed.sort_by(|(a, _), (b, _)| {
        let ord = compare(a, b);
        if reversed { ord.reverse() } else { ord }
    });
    keyed.into_iter().map(|(_, block)| block).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_key(block: &[(i32, char)]) -> i32 {
        representative(block, 0).map_or(0, |row| row.0)
    }

    #[test]
    fn test_partition_with_trailing_partial_block() {
        let blocks = partition((0..7).collect(), 3);
        assert_eq!(blocks, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6]]);
        assert!(partition(Vec::<i32>::new(), 3).is_empty());
        assert_eq!(partition(vec![1, 2], 0), vec![vec![1], vec![2]]);
    }

    #[test]
    fn test_representative_falls_back_to_last_row() {
        assert_eq!(representative(&[1, 2, 3], 1), Some(&2));
        assert_eq!(representative(&[7], 1), Some(&7));
        assert_eq!(representative::<i32>(&[], 0), None);
    }

    #[test]
    fn test_sort_blocks_is_stable() {
        let blocks = vec![
            vec![(2, 'a')],
            vec![(1, 'b')],
            vec![(2, 'c')],
            vec![(1, 'd')],
        ];
        let sorted = sort_blocks(blocks.clone(), first_key, |a, b| a.cmp(b), false);
        let order: Vec<char> = sorted.iter().map(|b| b[0].1).collect();
        assert_eq!(order, vec!['b', 'd', 'a', 'c']);

        let sorted = sort_blocks(blocks, first_key, |a, b| a.cmp(b), true);
        let order: Vec<char> = sorted.iter().map(|b| b[0].1).collect();
        assert_eq!(order, vec!['a', 'c', 'b', 'd']);
    }

    #[test]
    fn test_sort_blocks_keeps_rows_together() {
        let blocks = vec![vec![(3, 'x'), (0, 'y')], vec![(1, 'z'), (9, 'w')]];
        let sorted = sort_blocks(blocks, first_key, |a, b| a.cmp(b), false);
        assert_eq!(sorted, vec![vec![(1, 'z'), (9, 'w')], vec![(3, 'x'), (0, 'y')]]);
    }
}
