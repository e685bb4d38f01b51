use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::config;

const NAV_LINKS: [(&str, &str); 6] = [
    ("Home", "/#home"),
    ("About", "/#about"),
    ("Work", "/#work"),
    ("Gallery", "/#gallery"),
    ("Testimonials", "/#testimonials"),
    ("Contact", "/#contact"),
];

const MIC_PATHS: [&str; 2] = [
    "M12 2a3 3 0 0 1 3 3v10a3 3 0 1 1-6 0V5a3 3 0 0 1 3-3zm0-2a5 5 0 0 0-5 5v10a5 5 0 0 0 10 0V5a5 5 0 0 0-5-5z",
    "M5 10v5a5 5 0 0 0 10 0v-5h2v5a7 7 0 0 1-6 6.92V24h4v2H5v-2h4v-2.08A7 7 0 0 1 3 15v-5h2z",
];

pub fn mic_icon(size: u32) -> Html {
    html! {
        <svg width={size.to_string()} height={size.to_string()} viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg" class="mic-icon">
            { for MIC_PATHS.iter().map(|d| html! { <path d={*d} fill="currentColor" /> }) }
        </svg>
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SCROLL_THRESHOLD_PX
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let scrolled = is_scrolled(scroll_y);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <header class={classes!("top-nav", scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="/#home" class="nav-logo">
                    { mic_icon(22) }
                    <span>{"ANUSHA"}</span>
                </a>

                <nav class="nav-links">
                    { for NAV_LINKS.iter().map(|(name, href)| html! {
                        <a href={*href} class="nav-link fancy-underline">{*name}</a>
                    }) }
                    <a href="/#contact" class="btn-primary nav-cta">
                        { mic_icon(16) }
                        {"Book Me"}
                    </a>
                </nav>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    {
                        if *menu_open {
                            html! { <span class="burger-close">{"×"}</span> }
                        } else {
                            html! {
                                <>
                                    <span></span>
                                    <span></span>
                                    <span></span>
                                </>
                            }
                        }
                    }
                </button>
            </div>

            {
                if *menu_open {
                    html! {
                        <nav class="mobile-menu">
                            { for NAV_LINKS.iter().map(|(name, href)| html! {
                                <a href={*href} class="mobile-link" onclick={close_menu.clone()}>{*name}</a>
                            }) }
                            <a href="/#contact" class="btn-primary mobile-cta" onclick={close_menu.clone()}>
                                { mic_icon(16) }
                                {"Book Me"}
                            </a>
                        </nav>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: transparent;
                        transition: all 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(10, 17, 40, 0.95);
                        backdrop-filter: blur(10px);
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3);
                    }
                    .nav-content {
                        max-width: 1400px;
                        margin: 0 auto;
                        padding: 0 2rem;
                        height: 80px;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: var(--gold);
                        font-family: 'Montserrat', sans-serif;
                        font-weight: 700;
                        font-size: 1.25rem;
                        text-decoration: none;
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: rgba(255, 255, 255, 0.9);
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .nav-link:hover { color: var(--gold); }
                    .nav-cta, .mobile-cta { display: inline-flex; align-items: center; gap: 0.5rem; }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                        flex-direction: column;
                        gap: 5px;
                        color: #fff;
                    }
                    .burger-menu span:not(.burger-close) {
                        width: 24px;
                        height: 2px;
                        background: #fff;
                        display: block;
                    }
                    .burger-close { font-size: 1.75rem; line-height: 1; }
                    .mobile-menu {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1rem 2rem 1.5rem;
                        background: rgba(10, 17, 40, 0.95);
                        backdrop-filter: blur(10px);
                    }
                    .mobile-link {
                        padding: 0.5rem 0;
                        color: rgba(255, 255, 255, 0.9);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        text-decoration: none;
                    }
                    .mobile-cta { justify-content: center; margin-top: 1rem; }
                    @media (max-width: 768px) {
                        .nav-links { display: none; }
                        .burger-menu { display: flex; }
                    }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_solid_past_fifty_pixels() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(51.0));
    }

    #[test]
    fn links_point_at_home_sections() {
        assert!(NAV_LINKS.iter().all(|(_, href)| href.starts_with("/#")));
    }
}
