use yew::prelude::*;

use crate::hooks::reveal::{reveal_classes, reveal_delay, use_reveal};

struct Pillar {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const PILLARS: [Pillar; 3] = [
    Pillar {
        icon: "◎",
        title: "Vision",
        body: "To transform ordinary events into extraordinary experiences, leaving lasting impressions and creating moments that people will cherish forever.",
    },
    Pillar {
        icon: "♥",
        title: "Mission",
        body: "To bring energy, professionalism, and a personal touch to every event, ensuring seamless execution and creating an atmosphere where meaningful connections flourish.",
    },
    Pillar {
        icon: "★",
        title: "Values",
        body: "Passion, Excellence, Authenticity, and Adaptability. I left a 10-year banking career to pursue my passion for creating memorable experiences through hosting and performing.",
    },
];

#[function_component(VisionMission)]
pub fn vision_mission() -> Html {
    let section = use_node_ref();
    let visible = use_reveal(section.clone());

    html! {
        <section id="vision-mission" ref={section} class="vision-section">
            <div class="container">
                <div class="vision-header">
                    <h2 class={classes!("section-heading", "centered", reveal_classes(visible))}>
                        {"My "}<span class="gold">{"Vision"}</span>{" & "}<span class="gold">{"Mission"}</span>
                    </h2>
                    <p class={classes!("section-lead", reveal_classes(visible))} style={reveal_delay(visible, 300)}>
                        {"From banker to anchor - transforming events with passion and purpose"}
                    </p>
                </div>

                <div class="vision-grid">
                    { for PILLARS.iter().enumerate().map(|(i, pillar)| html! {
                        <div class={classes!("vision-card", "glass-card", reveal_classes(visible))}
                            style={reveal_delay(visible, 200 * (i as u32 + 1))}>
                            <div class="icon-badge">{pillar.icon}</div>
                            <h3>{pillar.title}</h3>
                            <p>{pillar.body}</p>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .vision-section {
                        padding: 5rem 0;
                        background: linear-gradient(to bottom, rgba(10, 17, 40, 0.9), var(--navy));
                    }
                    .vision-header { text-align: center; margin-bottom: 4rem; }
                    .vision-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .vision-card {
                        padding: 2rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                    }
                    .vision-card h3 { font-size: 1.25rem; margin: 0 0 1rem; }
                    .vision-card p { color: rgba(255, 255, 255, 0.7); }
                    @media (max-width: 768px) {
                        .vision-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </section>
    }
}
