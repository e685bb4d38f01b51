use yew::prelude::*;

use crate::config;
use crate::hooks::delay::use_delayed_flag;

const INSTAGRAM_PATH: &str = "M12 2.163c3.204 0 3.584.012 4.85.07 3.252.148 4.771 1.691 4.919 4.919.058 1.265.069 1.645.069 4.849 0 3.205-.012 3.584-.069 4.849-.149 3.225-1.664 4.771-4.919 4.919-1.266.058-1.644.07-4.85.07-3.204 0-3.584-.012-4.849-.07-3.26-.149-4.771-1.699-4.919-4.92-.058-1.265-.07-1.644-.07-4.849 0-3.204.013-3.583.07-4.849.149-3.227 1.664-4.771 4.919-4.919 1.266-.057 1.645-.069 4.849-.069zm0 5.838c-3.403 0-6.162 2.759-6.162 6.162s2.759 6.163 6.162 6.163 6.162-2.759 6.162-6.163c0-3.403-2.759-6.162-6.162-6.162zm0 10.162c-2.209 0-4-1.79-4-4 0-2.209 1.791-4 4-4s4 1.791 4 4c0 2.21-1.791 4-4 4zm6.406-11.845c-.796 0-1.441.645-1.441 1.44s.645 1.44 1.441 1.44c.795 0 1.439-.645 1.439-1.44s-.644-1.44-1.439-1.44z";
const YOUTUBE_PATH: &str = "M23.498 6.186a3.016 3.016 0 0 0-2.122-2.136C19.505 3.545 12 3.545 12 3.545s-7.505 0-9.377.505A3.017 3.017 0 0 0 .502 6.186C0 8.07 0 12 0 12s0 3.93.502 5.814a3.016 3.016 0 0 0 2.122 2.136c1.871.505 9.376.505 9.376.505s7.505 0 9.377-.505a3.015 3.015 0 0 0 2.122-2.136C24 15.93 24 12 24 12s0-3.93-.502-5.814zM9.545 15.568V8.432L15.818 12l-6.273 3.568z";
const LINKEDIN_PATH: &str = "M4.98 3.5c0 1.381-1.11 2.5-2.48 2.5s-2.48-1.119-2.48-2.5c0-1.38 1.11-2.5 2.48-2.5s2.48 1.12 2.48 2.5zm.02 4.5h-5v16h5v-16zm7.982 0h-4.968v16h4.969v-8.399c0-4.67 6.029-5.052 6.029 0v8.399h4.988v-10.131c0-7.88-8.922-7.593-11.018-3.714v-2.155z";

/// (label, url, icon path) for every social profile.
pub const SOCIAL_LINKS: [(&str, &str, &str); 3] = [
    ("Instagram", config::INSTAGRAM_URL, INSTAGRAM_PATH),
    ("YouTube", config::YOUTUBE_URL, YOUTUBE_PATH),
    ("LinkedIn", config::LINKEDIN_URL, LINKEDIN_PATH),
];

pub fn social_link(label: &'static str, url: &'static str, path: &'static str, class: &'static str) -> Html {
    html! {
        <a href={url} class={class} aria-label={label} target="_blank" rel="noopener noreferrer">
            <svg width="20" height="20" fill="currentColor" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
                <path d={path} />
            </svg>
        </a>
    }
}

/// Vertical social rail pinned bottom-left, slid in a moment after load.
#[function_component(SocialOverlay)]
pub fn social_overlay() -> Html {
    let shown = use_delayed_flag(config::SOCIAL_OVERLAY_DELAY_MS);

    html! {
        <div class={classes!("social-rail", shown.then(|| "shown"))}>
            <div class="social-rail-links">
                { for SOCIAL_LINKS.iter().map(|&(label, url, path)| social_link(label, url, path, "social-rail-link")) }
            </div>
            <div class="social-rail-line"></div>
            <style>
                {r#"
                    .social-rail {
                        position: fixed;
                        left: 1.5rem;
                        bottom: 0;
                        z-index: 40;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1rem;
                        opacity: 0;
                        transform: translateY(3rem);
                        transition: all 0.5s ease;
                    }
                    .social-rail.shown { opacity: 1; transform: translateY(0); }
                    .social-rail-links {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 0.75rem;
                        background: rgba(17, 24, 39, 0.3);
                        backdrop-filter: blur(4px);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 0.5rem 0.5rem 0 0;
                    }
                    .social-rail-link { color: rgba(255, 255, 255, 0.6); padding: 0.5rem; transition: color 0.3s ease; }
                    .social-rail-link:hover { color: var(--gold); }
                    .social-rail-line {
                        width: 1px;
                        height: 5rem;
                        background: linear-gradient(to bottom, rgba(255, 255, 255, 0.2), transparent);
                    }
                    @media (max-width: 768px) {
                        .social-rail { display: none; }
                    }
                "#}
            </style>
        </div>
    }
}
