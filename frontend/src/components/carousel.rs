use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

use crate::hooks::carousel::CarouselControl;

/// Handle to a mounted [`Carousel`]. The carousel owns the position; holders
/// of the handle only ask it to move.
#[derive(Clone)]
pub struct CarouselApi {
    position: Rc<Cell<usize>>,
    slide_count: usize,
    per_view: usize,
    redraw: Callback<()>,
}

impl PartialEq for CarouselApi {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.position, &other.position)
            && self.slide_count == other.slide_count
            && self.per_view == other.per_view
    }
}

impl CarouselApi {
    pub fn new(position: Rc<Cell<usize>>, slide_count: usize, per_view: usize, redraw: Callback<()>) -> Self {
        Self { position, slide_count, per_view: per_view.max(1), redraw }
    }

    pub fn selected(&self) -> usize {
        self.position.get()
    }

    /// Furthest position that still fills the viewport.
    fn last_start(&self) -> usize {
        self.slide_count.saturating_sub(self.per_view)
    }

    pub fn can_scroll_prev(&self) -> bool {
        self.position.get() > 0
    }

    pub fn scroll_prev(&self) {
        if self.can_scroll_prev() {
            self.position.set(self.position.get() - 1);
            self.redraw.emit(());
        }
    }
}

impl CarouselControl for CarouselApi {
    fn can_scroll_next(&self) -> bool {
        self.position.get() < self.last_start()
    }

    fn scroll_next(&self) {
        if self.can_scroll_next() {
            self.position.set(self.position.get() + 1);
            self.redraw.emit(());
        }
    }

    fn scroll_to(&self, index: usize) {
        self.position.set(index.min(self.last_start()));
        self.redraw.emit(());
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub children: Children,
    #[prop_or(1)]
    pub items_per_view: usize,
    #[prop_or_default]
    pub on_api: Callback<CarouselApi>,
    #[prop_or_default]
    pub show_controls: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let redraw = use_force_update();
    let position = use_state(|| Rc::new(Cell::new(0usize)));
    let slide_count = props.children.len();
    let per_view = props.items_per_view.max(1);

    let api = CarouselApi::new(
        (*position).clone(),
        slide_count,
        per_view,
        Callback::from(move |_| redraw.force_update()),
    );

    {
        let api = api.clone();
        let on_api = props.on_api.clone();
        use_effect_with_deps(
            move |_| {
                // Keep the position valid if the slide count shrank
                if api.selected() > api.last_start() {
                    api.scroll_to(api.last_start());
                }
                on_api.emit(api);
                || ()
            },
            (slide_count, per_view),
        );
    }

    let offset = api.selected() as f64 * 100.0 / per_view as f64;
    let basis = 100.0 / per_view as f64;

    let on_prev = {
        let api = api.clone();
        Callback::from(move |_: MouseEvent| api.scroll_prev())
    };
    let on_next = {
        let api = api.clone();
        Callback::from(move |_: MouseEvent| api.scroll_next())
    };

    html! {
        <div class={classes!("carousel", props.class.clone())}>
            <div class="carousel-viewport">
                <div class="carousel-track" style={format!("transform: translateX(-{}%);", offset)}>
                    { for props.children.iter().map(|child| html! {
                        <div class="carousel-slide" style={format!("flex: 0 0 {}%;", basis)}>
                            { child }
                        </div>
                    }) }
                </div>
            </div>
            {
                if props.show_controls {
                    html! {
                        <>
                            <button class="carousel-button carousel-prev" onclick={on_prev}
                                disabled={!api.can_scroll_prev()} aria-label="Previous slide">
                                {"‹"}
                            </button>
                            <button class="carousel-button carousel-next" onclick={on_next}
                                disabled={!api.can_scroll_next()} aria-label="Next slide">
                                {"›"}
                            </button>
                        </>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                    .carousel { position: relative; width: 100%; }
                    .carousel-viewport { overflow: hidden; }
                    .carousel-track {
                        display: flex;
                        transition: transform 0.5s ease-out;
                    }
                    .carousel-slide { min-width: 0; padding: 0.5rem; box-sizing: border-box; }
                    .carousel-button {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        border: none;
                        background: rgba(212, 175, 55, 0.8);
                        color: #fff;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .carousel-button:hover { background: #d4af37; }
                    .carousel-button:disabled { opacity: 0.3; cursor: default; }
                    .carousel-prev { left: -3rem; }
                    .carousel-next { right: -3rem; }
                    @media (max-width: 768px) {
                        .carousel-button { display: none; }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::carousel::{auto_advance, Advance};

    fn api(slides: usize, per_view: usize) -> (CarouselApi, Rc<Cell<usize>>) {
        let redraws = Rc::new(Cell::new(0));
        let counter = redraws.clone();
        let api = CarouselApi::new(
            Rc::new(Cell::new(0)),
            slides,
            per_view,
            Callback::from(move |_| counter.set(counter.get() + 1)),
        );
        (api, redraws)
    }

    #[test]
    fn stops_when_last_page_is_in_view() {
        let (api, _) = api(5, 3);
        assert!(api.can_scroll_next());
        api.scroll_next();
        api.scroll_next();
        assert_eq!(api.selected(), 2);
        assert!(!api.can_scroll_next());
    }

    #[test]
    fn autoplay_wraps_to_start() {
        let (api, redraws) = api(3, 1);
        let steps: Vec<Advance> = (0..3).map(|_| auto_advance(&api)).collect();
        assert_eq!(steps, vec![Advance::Next, Advance::Next, Advance::Restart]);
        assert_eq!(api.selected(), 0);
        assert_eq!(redraws.get(), 3);
    }

    #[test]
    fn scroll_to_clamps() {
        let (api, _) = api(4, 2);
        api.scroll_to(10);
        assert_eq!(api.selected(), 2);
    }

    #[test]
    fn prev_stops_at_zero() {
        let (api, redraws) = api(4, 1);
        api.scroll_prev();
        assert_eq!(api.selected(), 0);
        assert_eq!(redraws.get(), 0);
    }

    #[test]
    fn fewer_slides_than_view_never_scrolls() {
        let (api, _) = api(2, 4);
        assert!(!api.can_scroll_next());
        assert_eq!(auto_advance(&api), Advance::Restart);
        assert_eq!(api.selected(), 0);
    }
}
