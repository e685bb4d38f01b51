use chrono::{Datelike, Local};
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::components::hero::ROLES;
use crate::components::social_overlay::{social_link, SOCIAL_LINKS};

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn copyright_line(year: i32) -> String {
    format!("© {} Anusha | All Rights Reserved", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-layout">
                <div class="footer-brand">
                    <h3><span class="gold">{"ANUSHA"}</span></h3>
                    <p>{ROLES.join(" | ")}</p>
                </div>

                <div class="footer-actions">
                    <button class="scroll-top" onclick={Callback::from(|_: MouseEvent| scroll_to_top())} aria-label="Scroll to top">
                        {"˄"}
                    </button>
                    <div class="footer-social">
                        { for SOCIAL_LINKS.iter().map(|&(label, url, path)| social_link(label, url, path, "footer-social-link")) }
                    </div>
                    <p class="footer-copy">{copyright_line(year)}</p>
                </div>
            </div>

            <style>
                {r#"
                    .site-footer { background: #111827; color: #fff; position: relative; z-index: 1; }
                    .footer-layout {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 3rem 1rem;
                    }
                    .footer-brand h3 { font-size: 1.5rem; margin: 0; }
                    .footer-brand p { color: rgba(255, 255, 255, 0.7); margin-top: 0.5rem; max-width: 20rem; }
                    .footer-actions { display: flex; flex-direction: column; align-items: flex-end; }
                    .scroll-top {
                        width: 2.75rem;
                        height: 2.75rem;
                        border: none;
                        border-radius: 50%;
                        background: rgba(212, 175, 55, 0.2);
                        color: var(--gold);
                        font-size: 1.25rem;
                        cursor: pointer;
                        margin-bottom: 1rem;
                        transition: all 0.3s ease;
                    }
                    .scroll-top:hover { background: var(--gold); color: #fff; }
                    .footer-social { display: flex; gap: 1.5rem; margin-bottom: 1rem; }
                    .footer-social-link { color: rgba(255, 255, 255, 0.7); transition: color 0.3s ease; }
                    .footer-social-link:hover { color: var(--gold); }
                    .footer-copy { color: rgba(255, 255, 255, 0.5); font-size: 0.875rem; margin: 0; }
                    @media (max-width: 768px) {
                        .footer-layout { flex-direction: column; gap: 1.5rem; text-align: center; }
                        .footer-actions { align-items: center; }
                    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_year() {
        assert_eq!(copyright_line(2025), "© 2025 Anusha | All Rights Reserved");
    }
}
