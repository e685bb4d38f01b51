use yew::prelude::*;

use crate::components::navbar::mic_icon;
use crate::hooks::reveal::{reveal_classes, reveal_delay, use_reveal};

const HIGHLIGHTS: [&str; 4] = [
    "Fluent in Hindi, English, Telugu (and basic Tamil & Kannada)",
    "Left a 10-year government bank job (Canara Bank) to follow her passion",
    "Hosted 100+ live events, corporate shows, and weddings",
    "Professional MC with versatile entertainment skills",
];

#[function_component(About)]
pub fn about() -> Html {
    let section = use_node_ref();
    let visible = use_reveal(section.clone());

    html! {
        <section id="about" ref={section} class="about-section">
            <div class="container about-layout">
                <div class={classes!(reveal_classes(visible), "about-portrait")}>
                    <div class="about-portrait-glow"></div>
                    <div class="about-portrait-frame">
                        <img src="/images/Anusha Portrait (800x1000px).png" alt="Anusha portrait" />
                    </div>
                </div>

                <div class="about-copy">
                    <h2 class={classes!("section-heading", reveal_classes(visible))} style={reveal_delay(visible, 100)}>
                        {"Meet "}<span class="gold">{"Anusha"}</span>
                    </h2>
                    <p class={reveal_classes(visible)} style={reveal_delay(visible, 200)}>
                        {"A multi-talented performer who brings charisma, energy and professionalism to every stage. \
                          From hosting corporate events to singing at cultural gatherings, I create memorable \
                          experiences that captivate audiences."}
                    </p>
                    <p class={reveal_classes(visible)} style={reveal_delay(visible, 300)}>
                        {"Transitioning from a stable 10-year banking career to pursue my passion as an anchor and host, \
                          I've dedicated myself to spreading joy and making events truly memorable."}
                    </p>

                    <ul class="about-highlights">
                        { for HIGHLIGHTS.iter().enumerate().map(|(i, highlight)| html! {
                            <li class={reveal_classes(visible)} style={reveal_delay(visible, 300 + i as u32 * 100)}>
                                <span class="check">{"✔"}</span>
                                {*highlight}
                            </li>
                        }) }
                    </ul>

                    <div class={reveal_classes(visible)} style={reveal_delay(visible, 600)}>
                        <a href="#why-hire-me" class="btn-primary">
                            { mic_icon(18) }
                            {"Why Hire Me"}
                        </a>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .about-section { padding: 5rem 0; position: relative; overflow: hidden; }
                    .about-layout {
                        display: flex;
                        align-items: center;
                        gap: 4rem;
                    }
                    .about-portrait, .about-copy { flex: 1; }
                    .about-portrait { position: relative; transition-duration: 1s; }
                    .about-portrait-glow {
                        position: absolute;
                        inset: -0.75rem;
                        border-radius: 0.5rem;
                        background: linear-gradient(135deg, var(--gold), rgba(234, 179, 8, 0.4), var(--navy));
                        filter: blur(4px);
                        opacity: 0.4;
                    }
                    .about-portrait-frame {
                        position: relative;
                        aspect-ratio: 4 / 5;
                        border-radius: 0.5rem;
                        overflow: hidden;
                        background: linear-gradient(135deg, var(--navy), #111827);
                    }
                    .about-portrait-frame img { width: 100%; height: 100%; object-fit: cover; }
                    .about-copy p { font-size: 1.1rem; color: rgba(255, 255, 255, 0.8); margin-bottom: 1.5rem; }
                    .about-highlights { list-style: none; padding: 0; margin: 2rem 0; }
                    .about-highlights li {
                        display: flex;
                        gap: 0.75rem;
                        margin-bottom: 1rem;
                        color: rgba(255, 255, 255, 0.8);
                    }
                    .check { color: var(--gold); }
                    @media (max-width: 1024px) {
                        .about-layout { flex-direction: column; gap: 3rem; }
                    }
                "#}
            </style>
        </section>
    }
}
