use gloo_timers::callback::Interval;
use yew::prelude::*;

pub fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

pub fn wrap_prev(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

/// Cyclic index into a fixed-length list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotator {
    index: usize,
    len: usize,
}

impl Rotator {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn advance(&mut self) -> usize {
        self.index = wrap_next(self.index, self.len);
        self.index
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// Advances an index over `len` items every `interval_ms` for as long as
/// the component is mounted.
#[hook]
pub fn use_rotator(len: usize, interval_ms: u32) -> usize {
    let index = use_state(|| 0usize);

    {
        let index = index.clone();
        use_effect_with_deps(
            move |&(len, interval_ms)| {
                let mut rotator = Rotator::new(len);
                index.set(rotator.index());
                let interval = (len > 1).then(|| {
                    Interval::new(interval_ms, move || index.set(rotator.advance()))
                });
                move || drop(interval)
            },
            (len, interval_ms),
        );
    }

    *index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_back_after_full_round() {
        let roles = ["A", "B", "C"];
        let mut rotator = Rotator::new(roles.len());
        assert_eq!(roles[rotator.index()], "A");
        rotator.advance();
        rotator.advance();
        assert_eq!(roles[rotator.index()], "C");
        rotator.advance();
        assert_eq!(roles[rotator.index()], "A");
    }

    #[test]
    fn empty_list_stays_at_zero() {
        let mut rotator = Rotator::new(0);
        assert_eq!(rotator.advance(), 0);
    }

    #[test]
    fn single_item_stays_put() {
        let mut rotator = Rotator::new(1);
        assert_eq!(rotator.advance(), 0);
    }

    #[test]
    fn prev_wraps_to_last() {
        assert_eq!(wrap_prev(0, 3), 2);
        assert_eq!(wrap_prev(2, 3), 1);
        assert_eq!(wrap_prev(0, 0), 0);
    }

    #[test]
    fn next_wraps_to_first() {
        assert_eq!(wrap_next(2, 3), 0);
        assert_eq!(wrap_next(0, 3), 1);
    }
}
