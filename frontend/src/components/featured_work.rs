use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::client_logos::ClientLogoCarousel;
use crate::components::work_card::WorkCard;
use crate::content;
use crate::hooks::reveal::{reveal_classes, reveal_delay, use_reveal};
use crate::Route;

#[function_component(FeaturedWork)]
pub fn featured_work() -> Html {
    let section = use_node_ref();
    let visible = use_reveal(section.clone());

    html! {
        <section id="work" ref={section} class="work-section">
            <div class="container">
                <h2 class={classes!("section-heading", "centered", reveal_classes(visible))}>
                    {"Featured "}<span class="gold">{"Work & Events"}</span>
                </h2>
                <p class={classes!("section-lead", reveal_classes(visible))} style={reveal_delay(visible, 200)}>
                    {"From corporate events to cultural celebrations, I bring life and energy to every stage. \
                      Here's a glimpse of some notable events I've been part of."}
                </p>

                <div class="work-grid">
                    { for content::featured_works().iter().enumerate().map(|(i, work)| html! {
                        <WorkCard key={work.id.clone()} work={work.clone()}
                            class={reveal_classes(visible)}
                            style={reveal_delay(visible, 100 * i as u32)} />
                    }) }
                </div>

                <div class="work-more">
                    <Link<Route> to={Route::AllEvents} classes="btn-outline">
                        {"View All Events ›"}
                    </Link<Route>>
                </div>

                <div class={classes!("work-clients", reveal_classes(visible))} style={reveal_delay(visible, 700)}>
                    <p class="work-clients-label">{"Brands I've worked with"}</p>
                    <ClientLogoCarousel />
                </div>
            </div>

            <style>
                {r#"
                    .work-section {
                        padding: 5rem 0;
                        position: relative;
                        background: linear-gradient(to bottom, var(--navy), rgba(10, 17, 40, 0.95), var(--navy));
                    }
                    .work-more { display: flex; justify-content: center; margin-top: 2.5rem; }
                    .work-clients { margin-top: 4rem; }
                    .work-clients-label {
                        text-align: center;
                        color: rgba(255, 255, 255, 0.6);
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        font-size: 0.8rem;
                    }
                "#}
            </style>
        </section>
    }
}
