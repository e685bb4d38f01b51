use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::social_overlay::SocialOverlay;
use crate::components::work_card::WorkCard;
use crate::content;
use crate::hooks::scroll::use_scroll_to_top;

#[function_component(AllEvents)]
pub fn all_events() -> Html {
    use_scroll_to_top();

    html! {
        <div class="page">
            <Navbar />
            <main class="container page-main">
                <a href="/#work" class="back-link">{"‹ Back to Home"}</a>
                <h1 class="page-title">{"All Events"}</h1>
                <p class="page-lead">
                    {"Browse through the complete collection of events I've had the privilege to host and be a part of. \
                      Each event represents a unique experience and showcases my versatility as a host and emcee."}
                </p>
                <div class="work-grid">
                    { for content::works().iter().map(|work| html! {
                        <WorkCard key={work.id.clone()} work={work.clone()} />
                    }) }
                </div>
            </main>
            <Footer />
            <SocialOverlay />
        </div>
    }
}
