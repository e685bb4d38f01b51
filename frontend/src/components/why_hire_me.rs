use yew::prelude::*;

use crate::hooks::reveal::{reveal_classes, reveal_delay, use_reveal};

const BENEFITS: [(&str, &str, &str); 4] = [
    (
        "★",
        "Professional Excellence",
        "With over 100+ events experience and a background in corporate banking, I bring both creative energy and professional discipline to every event.",
    ),
    (
        "👍",
        "Versatile Skills",
        "Fluent in multiple languages (Hindi, English, Telugu) with abilities to host, anchor, and perform - creating a complete entertainment package.",
    ),
    (
        "👥",
        "Audience Connection",
        "Exceptional ability to read and engage with audiences, ensuring your guests feel involved and entertained throughout.",
    ),
    (
        "⏱",
        "Commitment & Reliability",
        "Meticulous preparation and punctuality, with a track record of delivering seamless experiences even under pressure.",
    ),
];

#[function_component(WhyHireMe)]
pub fn why_hire_me() -> Html {
    let section = use_node_ref();
    let visible = use_reveal(section.clone());

    html! {
        <section id="why-hire-me" ref={section} class="why-section">
            <div class="container narrow">
                <h2 class={classes!("section-heading", "centered", reveal_classes(visible))}>
                    {"Why "}<span class="gold">{"Hire Me"}</span>
                </h2>
                <p class={classes!("section-lead", reveal_classes(visible))} style={reveal_delay(visible, 300)}>
                    {"From banker to anchor, I've dedicated my career to creating memorable events \
                      that leave lasting impressions on audiences and clients alike."}
                </p>

                <div class="why-grid">
                    { for BENEFITS.iter().enumerate().map(|(i, (icon, title, description))| html! {
                        <div class={classes!("why-card", "glass-card", reveal_classes(visible))}
                            style={reveal_delay(visible, 200 * i as u32)}>
                            <div class="why-icon">{*icon}</div>
                            <div>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        </div>
                    }) }
                </div>

                <div class={classes!("why-cta", reveal_classes(visible))} style={reveal_delay(visible, 700)}>
                    <a href="#contact" class="btn-primary">{"Book a Consultation →"}</a>
                </div>
            </div>

            <style>
                {r#"
                    .why-section { padding: 5rem 0; }
                    .why-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 2rem;
                        margin-top: 4rem;
                    }
                    .why-card { display: flex; gap: 1.5rem; padding: 1.5rem; }
                    .why-icon { font-size: 2rem; color: var(--gold); flex-shrink: 0; }
                    .why-card h3 { font-size: 1.25rem; margin: 0 0 0.5rem; }
                    .why-card p { color: rgba(255, 255, 255, 0.7); margin: 0; }
                    .why-cta { text-align: center; margin-top: 3.5rem; }
                    @media (max-width: 768px) {
                        .why-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </section>
    }
}
