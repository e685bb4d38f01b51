use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::components::notification::{notify, use_toasts, ToastKind};
use crate::config;

const THANK_YOU: &str = "Form submitted. Thank you for your interest! I'll get back to you soon.";

/// How far down the page the viewport is, in percent.
pub fn scroll_percentage(scroll_y: f64, page_height: f64, viewport_height: f64) -> f64 {
    let scrollable = page_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    scroll_y / scrollable * 100.0
}

pub fn should_show(percent: f64, dismissed: bool) -> bool {
    !dismissed && percent > config::POPUP_SCROLL_PERCENT
}

fn page_scroll_percentage(scroll_y: f64) -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let viewport = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
    let page = window
        .document()
        .and_then(|doc| doc.body())
        .map(|body| body.scroll_height() as f64)
        .unwrap_or(0.0);
    scroll_percentage(scroll_y, page, viewport)
}

#[derive(Clone, Debug, Default, PartialEq)]
struct PopupFields {
    name: String,
    email: String,
    phone: String,
    message: String,
}

/// Booking nudge that slides in once the visitor is well into the page.
/// Submissions are only logged; they are not emailed.
#[function_component(ContactFormPopup)]
pub fn contact_form_popup() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let shown = use_state(|| false);
    let dismissed = use_state(|| false);
    let fields = use_state(PopupFields::default);
    let toasts = use_toasts();

    {
        let shown = shown.clone();
        let dismissed = *dismissed;
        use_effect_with_deps(
            move |&(scroll_y, dismissed)| {
                if !*shown && should_show(page_scroll_percentage(scroll_y), dismissed) {
                    shown.set(true);
                }
                || ()
            },
            (scroll_y, dismissed),
        );
    }

    let dismiss = {
        let shown = shown.clone();
        let dismissed = dismissed.clone();
        Callback::from(move |_: MouseEvent| {
            dismissed.set(true);
            shown.set(false);
        })
    };

    let onsubmit = {
        let fields = fields.clone();
        let shown = shown.clone();
        let dismissed = dismissed.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            gloo_console::log!(format!("{:?}", *fields));
            notify(&toasts, ToastKind::Success, THANK_YOU);
            dismissed.set(true);
            shown.set(false);
        })
    };

    let edit = |apply: fn(&mut PopupFields, String)| {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            apply(&mut next, input.value());
            fields.set(next);
        })
    };

    let on_message = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.message = input.value();
            fields.set(next);
        })
    };

    if !*shown {
        return html! {};
    }

    html! {
        <div class="contact-popup">
            <div class="popup-header">
                <h3>{"Ready to make your event unforgettable?"}</h3>
                <button class="popup-close" onclick={dismiss} aria-label="Close">{"×"}</button>
            </div>
            <p class="popup-lead">
                {"Let's discuss how I can bring energy and professionalism to your next event!"}
            </p>
            <form class="popup-form" {onsubmit}>
                <input type="text" placeholder="Your name" required=true value={fields.name.clone()}
                    oninput={edit(|f, v| f.name = v)} />
                <div class="popup-row">
                    <input type="email" placeholder="Your email" required=true value={fields.email.clone()}
                        oninput={edit(|f, v| f.email = v)} />
                    <input type="tel" placeholder="Your phone" value={fields.phone.clone()}
                        oninput={edit(|f, v| f.phone = v)} />
                </div>
                <textarea placeholder="Tell me about your event" required=true value={fields.message.clone()}
                    oninput={on_message} />
                <button type="submit" class="btn-primary popup-submit">{"Get in Touch"}</button>
            </form>

            <style>
                {r#"
                    @keyframes popupIn {
                        from { opacity: 0; transform: translateY(2.5rem); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .contact-popup {
                        position: fixed;
                        bottom: 1.25rem;
                        right: 1.25rem;
                        z-index: 50;
                        width: calc(100% - 2.5rem);
                        max-width: 28rem;
                        padding: 1.5rem;
                        background: rgba(17, 24, 39, 0.95);
                        backdrop-filter: blur(12px);
                        border: 1px solid #1f2937;
                        border-radius: 0.75rem;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.4);
                        color: #fff;
                        animation: popupIn 0.5s ease-out;
                    }
                    .popup-header { display: flex; justify-content: space-between; align-items: flex-start; }
                    .popup-header h3 { margin: 0; font-size: 1.25rem; color: var(--gold); }
                    .popup-close {
                        background: none;
                        border: none;
                        color: rgba(255, 255, 255, 0.6);
                        font-size: 1.25rem;
                        cursor: pointer;
                    }
                    .popup-close:hover { color: #fff; }
                    .popup-lead { color: rgba(255, 255, 255, 0.7); font-size: 0.9rem; }
                    .popup-form { display: flex; flex-direction: column; gap: 0.75rem; }
                    .popup-row { display: grid; grid-template-columns: 1fr 1fr; gap: 0.75rem; }
                    .popup-form input, .popup-form textarea {
                        padding: 0.6rem 0.75rem;
                        background: rgba(31, 41, 55, 0.7);
                        border: 1px solid #374151;
                        border-radius: 0.375rem;
                        color: #fff;
                        font-family: inherit;
                    }
                    .popup-form textarea { min-height: 80px; resize: none; }
                    .popup-submit { justify-content: center; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_of_scrollable_height() {
        assert_eq!(scroll_percentage(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_percentage(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(scroll_percentage(2000.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn short_page_never_counts_as_scrolled() {
        assert_eq!(scroll_percentage(100.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn shows_only_past_threshold_until_dismissed() {
        assert!(!should_show(60.0, false));
        assert!(should_show(60.5, false));
        assert!(!should_show(90.0, true));
    }
}
