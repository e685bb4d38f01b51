use yew::prelude::*;

use crate::config;
use crate::hooks::delay::use_delayed_flag;
use crate::hooks::rotator::use_rotator;
use crate::hooks::typewriter::use_typewriter;

pub const INTRO_TEXT: &str = "Transforming Events into Unforgettable Memories. With over 100+ live events hosted, from glamorous weddings to high-profile corporate shows, I bring unmatched energy, charisma, and professionalism to every stage.";

pub const ROLES: [&str; 5] = ["Master of Ceremonies", "Singer", "Anchor", "Live Host", "Performer"];

pub const HERO_BACKGROUNDS: [&str; 4] = [
    "/images/ASICON 2023 - Visakhapatnam (The All India Surgeons meet).png",
    "/images/Bayer Family Day.png",
    "/images/Jam Junxion.png",
    "/images/Destination Wedding.png",
];

#[function_component(Hero)]
pub fn hero() -> Html {
    let loaded = use_delayed_flag(config::HERO_LOAD_DELAY_MS);
    let typed = use_typewriter(INTRO_TEXT, config::TYPING_INTERVAL_MS, loaded);
    let role = use_rotator(ROLES.len(), config::ROLE_INTERVAL_MS);
    let background = use_rotator(HERO_BACKGROUNDS.len(), config::BACKGROUND_INTERVAL_MS);

    html! {
        <section id="home" class="hero">
            { for HERO_BACKGROUNDS.iter().enumerate().map(|(i, src)| html! {
                <div
                    class={classes!("hero-background", (i == background).then(|| "active"))}
                    style={format!("background-image: url('{}');", src)}
                ></div>
            }) }
            <div class="hero-overlay"></div>

            <div class={classes!("hero-content", loaded.then(|| "loaded"))}>
                <h2 class="hero-greeting">{"Hi, I am"}</h2>
                <h1 class="hero-name">
                    <span class="hero-name-inner">{"Anusha Varri"}</span>
                </h1>

                <div class="hero-roles">
                    <h3 class="hero-role-line">{ROLES.join(" | ")}</h3>
                    <p class="hero-role-current" key={role}>{ROLES[role]}</p>
                </div>

                <div class="hero-typed">
                    <p>
                        {typed.text.clone()}
                        {
                            if !typed.complete {
                                html! { <span class="typing-cursor"></span> }
                            } else {
                                html! {}
                            }
                        }
                    </p>
                </div>

                <div class={classes!("hero-cta-group", typed.complete.then(|| "typed"))}>
                    <a href="#contact" class="btn-primary hero-cta">
                        {"Book Now"}
                        <span class="hero-cta-arrow">{"→"}</span>
                    </a>
                </div>
            </div>

            <div class={classes!("scroll-indicator", loaded.then(|| "loaded"))}>
                <div class="scroll-indicator-shell">
                    <div class="scroll-indicator-dot"></div>
                </div>
            </div>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        background: var(--navy);
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        background-size: cover;
                        background-position: center;
                        opacity: 0;
                        transition: opacity 1.5s ease-in-out;
                    }
                    .hero-background.active { opacity: 0.45; }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.6);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 20;
                        text-align: center;
                        padding: 0 1rem;
                        opacity: 0;
                        transition: opacity 0.7s ease;
                    }
                    .hero-content.loaded { opacity: 1; }
                    .hero-greeting {
                        font-size: 1.75rem;
                        font-weight: 300;
                        color: rgba(255, 255, 255, 0.9);
                        margin-bottom: 1rem;
                    }
                    .hero-name {
                        font-size: clamp(3rem, 8vw, 6rem);
                        font-weight: 700;
                        margin: 0 0 1.5rem;
                        overflow: hidden;
                    }
                    .hero-name-inner {
                        display: block;
                        color: var(--gold);
                        transform: translateY(100%);
                        transition: transform 0.8s ease 0.2s;
                    }
                    .hero-content.loaded .hero-name-inner { transform: translateY(0); }
                    .hero-role-line {
                        font-size: clamp(1.1rem, 2.5vw, 1.75rem);
                        color: rgba(255, 255, 255, 0.9);
                        letter-spacing: 0.05em;
                    }
                    @keyframes roleIn {
                        from { opacity: 0; transform: translateY(8px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .hero-role-current {
                        color: var(--gold);
                        font-weight: 600;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        animation: roleIn 0.5s ease-out;
                    }
                    .hero-typed {
                        max-width: 42rem;
                        margin: 2rem auto 0;
                        font-size: 1.15rem;
                        color: rgba(255, 255, 255, 0.9);
                        min-height: 6rem;
                    }
                    @keyframes cursorPulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.2; }
                    }
                    .typing-cursor {
                        display: inline-block;
                        width: 0.5rem;
                        height: 1.25rem;
                        margin-left: 0.25rem;
                        background: rgba(255, 255, 255, 0.9);
                        animation: cursorPulse 1s infinite;
                        vertical-align: middle;
                    }
                    .hero-cta-group {
                        margin-top: 2rem;
                        opacity: 0;
                        transform: translateY(1rem);
                        transition: all 0.7s ease 0.5s;
                    }
                    .hero-content.loaded .hero-cta-group { opacity: 1; transform: translateY(0); }
                    .hero-cta-group.typed { transition-delay: 0.3s; }
                    .hero-cta { font-size: 1.1rem; padding: 0.75rem 2rem; }
                    .hero-cta-arrow { margin-left: 0.5rem; }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        opacity: 0;
                        transition: opacity 1s ease 1s;
                    }
                    .scroll-indicator.loaded { opacity: 0.7; }
                    .scroll-indicator-shell {
                        width: 1.5rem;
                        height: 2.5rem;
                        border: 2px solid rgba(255, 255, 255, 0.3);
                        border-radius: 9999px;
                        display: flex;
                        justify-content: center;
                        padding: 0.25rem;
                    }
                    @keyframes bounce {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(10px); }
                    }
                    .scroll-indicator-dot {
                        width: 0.375rem;
                        height: 0.375rem;
                        border-radius: 50%;
                        background: #fff;
                        animation: bounce 1s infinite;
                    }
                "#}
            </style>
        </section>
    }
}
