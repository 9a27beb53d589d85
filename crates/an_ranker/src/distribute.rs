use std::time::Duration;

/// Delay between the reveal of two consecutive cards.
pub const REVEAL_STEP: Duration = Duration::from_millis(20);

/// Alternates between the first `ceil(n/2)` items and the rest:
/// `h0, l0, h1, l1, ...`, then whatever is left of the longer half.
pub fn interleave<T>(sorted: Vec<T>) -> Vec<T> {
    let split = sorted.len().div_ceil(2);
    let mut high = sorted;
    let low = high.split_off(split);

    let mut distributed = Vec::with_capacity(high.len() + low.len());
    let mut high = high.into_iter();
    let mut low = low.into_iter();
    loop {
        match (high.next(), low.next()) {
            (None, None) => break,
            (h, l) => {
                distributed.extend(h);
                distributed.extend(l);
            }
        }
    }
    distributed
}

/// Display slot for one ranked item.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement<T> {
    pub position: usize,
    pub reveal_delay: Duration,
    pub item: T,
}

/// Assigns positions and staggered reveal delays in output order.
pub fn placements<T>(ordered: impl IntoIterator<Item = T>) -> Vec<Placement<T>> {
    ordered
        .into_iter()
        .enumerate()
        .map(|(position, item)| Placement {
            position,
            reveal_delay: REVEAL_STEP * position as u32,
            item,
        })
        .collect()
}
