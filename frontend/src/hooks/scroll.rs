use yew::prelude::*;

/// Jumps to the top of the window once, when the page first mounts.
#[hook]
pub fn use_scroll_to_top() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}
