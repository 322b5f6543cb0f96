//! Completion-ordered view helper

/// Present incomplete items before complete ones, preserving original
/// relative order within each group. A lazy stable partition over two
/// chained filter passes; storage is never reordered.
pub fn partition_by_completion<'a, T, F>(
    items: &'a [T],
    is_complete: F,
) -> impl Iterator<Item = &'a T>
where
    F: Fn(&T) -> bool + Copy + 'a,
{
    items
        .iter()
        .filter(move |item| !is_complete(item))
        .chain(items.iter().filter(move |item| is_complete(item)))
}
