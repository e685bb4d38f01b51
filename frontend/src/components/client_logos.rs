use gloo_timers::callback::Interval;
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::content::{self, Client};

/// Logos repeated after the full list so the wrap back to zero is hidden.
const LOOP_TAIL: usize = 5;

/// One marquee step: creep right a pixel, back to the start once the first
/// copy of the list has scrolled past.
pub fn next_scroll_left(current: i32, content_width: i32) -> i32 {
    if current >= content_width {
        0
    } else {
        current + 1
    }
}

fn logo_tile(client: &Client, key: String) -> Html {
    html! {
        <div class="logo-tile" key={key}>
            {
                match client.logo() {
                    Some(src) => html! { <img src={src.to_string()} alt={client.name.clone()} /> },
                    None => html! { <span>{client.name.clone()}</span> },
                }
            }
        </div>
    }
}

#[function_component(ClientLogoCarousel)]
pub fn client_logo_carousel() -> Html {
    let viewport = use_node_ref();
    let strip = use_node_ref();

    {
        let viewport = viewport.clone();
        let strip = strip.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(config::LOGO_MARQUEE_STEP_MS, move || {
                    let (Some(viewport), Some(strip)) =
                        (viewport.cast::<Element>(), strip.cast::<Element>())
                    else {
                        return;
                    };
                    // scrollLeft can never reach the full strip width, so wrap at the real maximum
                    let reachable = viewport.scroll_width() - viewport.client_width();
                    let limit = strip.scroll_width().min(reachable);
                    viewport.set_scroll_left(next_scroll_left(viewport.scroll_left(), limit));
                });
                move || drop(interval)
            },
            (),
        );
    }

    let clients = content::clients();

    html! {
        <div class="logo-marquee">
            <div class="logo-viewport" ref={viewport}>
                <div class="logo-strip" ref={strip}>
                    { for clients.iter().map(|client| logo_tile(client, client.id.to_string())) }
                    { for clients.iter().take(LOOP_TAIL).map(|client| logo_tile(client, format!("dup-{}", client.id))) }
                </div>
            </div>
            <style>
                {r#"
                    .logo-marquee { width: 100%; overflow: hidden; }
                    .logo-viewport {
                        display: flex;
                        align-items: center;
                        overflow-x: auto;
                        scrollbar-width: none;
                    }
                    .logo-viewport::-webkit-scrollbar { display: none; }
                    .logo-strip { display: flex; gap: 3rem; padding: 0.5rem 1.5rem; }
                    .logo-tile {
                        flex-shrink: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        height: 4rem;
                        padding: 0 1rem;
                        background: rgba(31, 41, 55, 0.3);
                        backdrop-filter: blur(4px);
                        border: 1px solid rgba(55, 65, 81, 0.5);
                        border-radius: 0.375rem;
                    }
                    .logo-tile img { max-height: 2.5rem; max-width: 120px; object-fit: contain; opacity: 0.8; }
                    .logo-tile span { font-weight: 600; white-space: nowrap; color: rgba(255, 255, 255, 0.8); }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creeps_one_pixel() {
        assert_eq!(next_scroll_left(0, 400), 1);
        assert_eq!(next_scroll_left(399, 400), 400);
    }

    #[test]
    fn wraps_past_content_width() {
        assert_eq!(next_scroll_left(400, 400), 0);
        assert_eq!(next_scroll_left(812, 400), 0);
    }

    #[test]
    fn empty_strip_stays_put() {
        assert_eq!(next_scroll_left(0, 0), 0);
    }
}
