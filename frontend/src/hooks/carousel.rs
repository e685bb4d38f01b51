use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

/// Imperative navigation exposed by a carousel that owns its own position.
pub trait CarouselControl {
    fn can_scroll_next(&self) -> bool;
    fn scroll_next(&self);
    fn scroll_to(&self, index: usize);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    Next,
    Restart,
}

/// One autoplay step: move forward while slides remain, otherwise go back
/// to the first slide.
pub fn auto_advance<C: CarouselControl + ?Sized>(carousel: &C) -> Advance {
    if carousel.can_scroll_next() {
        carousel.scroll_next();
        Advance::Next
    } else {
        carousel.scroll_to(0);
        Advance::Restart
    }
}

/// Slot the carousel hands its controller into once mounted.
pub type CarouselSlot<C> = Rc<RefCell<Option<C>>>;

/// Advances whatever carousel sits in `slot` every `interval_ms`, after an
/// optional `start_delay_ms`. Only runs while `enabled`; both timers are
/// released when it turns off or the component unmounts.
#[hook]
pub fn use_carousel_autoplay<C: CarouselControl + 'static>(
    slot: CarouselSlot<C>,
    start_delay_ms: u32,
    interval_ms: u32,
    enabled: bool,
) {
    use_effect_with_deps(
        move |&enabled| {
            let ticker: Rc<RefCell<Option<Interval>>> = Rc::default();
            let mut delay = None;

            if enabled {
                let start = {
                    let ticker = ticker.clone();
                    move || {
                        let interval = Interval::new(interval_ms, move || {
                            if let Some(carousel) = slot.borrow().as_ref() {
                                auto_advance(carousel);
                            }
                        });
                        *ticker.borrow_mut() = Some(interval);
                    }
                };
                if start_delay_ms == 0 {
                    start();
                } else {
                    delay = Some(Timeout::new(start_delay_ms, start));
                }
            }

            move || {
                drop(delay);
                ticker.borrow_mut().take();
            }
        },
        enabled,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct FakeCarousel {
        position: Cell<usize>,
        slides: usize,
        next_calls: Cell<usize>,
        scroll_to_calls: RefCell<Vec<usize>>,
    }

    impl CarouselControl for FakeCarousel {
        fn can_scroll_next(&self) -> bool {
            self.position.get() + 1 < self.slides
        }

        fn scroll_next(&self) {
            self.next_calls.set(self.next_calls.get() + 1);
            self.position.set(self.position.get() + 1);
        }

        fn scroll_to(&self, index: usize) {
            self.scroll_to_calls.borrow_mut().push(index);
            self.position.set(index);
        }
    }

    #[test]
    fn advances_while_slides_remain() {
        let carousel = FakeCarousel { slides: 3, ..Default::default() };
        assert_eq!(auto_advance(&carousel), Advance::Next);
        assert_eq!(carousel.position.get(), 1);
        assert!(carousel.scroll_to_calls.borrow().is_empty());
    }

    #[test]
    fn restarts_at_the_end_instead_of_scrolling_next() {
        let carousel = FakeCarousel { slides: 3, ..Default::default() };
        carousel.position.set(2);
        assert_eq!(auto_advance(&carousel), Advance::Restart);
        assert_eq!(carousel.next_calls.get(), 0);
        assert_eq!(*carousel.scroll_to_calls.borrow(), vec![0]);
    }

    #[test]
    fn walks_the_ring() {
        let carousel = FakeCarousel { slides: 3, ..Default::default() };
        let steps: Vec<Advance> = (0..4).map(|_| auto_advance(&carousel)).collect();
        assert_eq!(steps, vec![Advance::Next, Advance::Next, Advance::Restart, Advance::Next]);
        assert_eq!(carousel.position.get(), 1);
    }
}
