use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::carousel::{Carousel, CarouselApi};
use crate::components::video_dialog::{play_button, VideoDialog};
use crate::config;
use crate::content;
use crate::hooks::carousel::{use_carousel_autoplay, CarouselSlot};
use crate::Route;

const SLIDES_PER_VIEW: usize = 3;

/// Strip of every gallery item that pages itself along.
#[function_component(ScrollingGallery)]
pub fn scrolling_gallery() -> Html {
    let api: CarouselSlot<CarouselApi> = use_mut_ref(|| None);
    let open_video = use_state(|| None::<u32>);

    use_carousel_autoplay(
        api.clone(),
        config::GALLERY_CAROUSEL_DELAY_MS,
        config::GALLERY_CAROUSEL_INTERVAL_MS,
        true,
    );

    let on_api = {
        let api = api.clone();
        Callback::from(move |handle: CarouselApi| *api.borrow_mut() = Some(handle))
    };

    let close_video = {
        let open_video = open_video.clone();
        Callback::from(move |_| open_video.set(None))
    };

    html! {
        <section class="scrolling-gallery">
            <div class="scrolling-gallery-backdrop"></div>
            <div class="container">
                <h2 class="scrolling-gallery-title">
                    <span class="gold-gradient">{"Glimpses of My Journey"}</span>
                </h2>
                <p class="section-lead">
                    {"Explore moments from my performances, events and experiences across various stages and venues."}
                </p>

                <div class="scrolling-gallery-track">
                    <Carousel items_per_view={SLIDES_PER_VIEW} {on_api} show_controls={true}>
                        { for content::gallery().iter().map(|item| html! {
                            <div key={item.id} class="scrolling-tile">
                                <img src={item.image_path.clone()} alt={item.caption.clone()} loading="lazy" />
                                <div class="scrolling-caption"><p>{&item.caption}</p></div>
                                { if item.is_video() { play_button(&open_video, item.id) } else { html! {} } }
                            </div>
                        }) }
                    </Carousel>
                </div>

                <div class="scrolling-gallery-more">
                    <Link<Route> to={Route::Gallery} classes="text-link">
                        {"View Full Gallery →"}
                    </Link<Route>>
                </div>
            </div>

            {
                match (*open_video).and_then(|id| content::gallery().iter().find(|item| item.id == id)) {
                    Some(item) => html! {
                        <VideoDialog video_id={item.video_id.clone().map(AttrValue::from)} on_close={close_video} />
                    },
                    None => html! {},
                }
            }

            <style>
                {r#"
                    .scrolling-gallery {
                        position: relative;
                        padding: 4rem 0;
                        background: linear-gradient(to bottom, rgba(10, 17, 40, 0.9), var(--navy));
                        z-index: 10;
                    }
                    .scrolling-gallery-backdrop {
                        position: absolute;
                        inset: 0;
                        background-image: url('/images/ASICON 2023 - Visakhapatnam (The All India Surgeons meet).png');
                        background-size: cover;
                        background-position: center;
                        opacity: 0.1;
                    }
                    .scrolling-gallery .container { position: relative; }
                    .scrolling-gallery-title { text-align: center; font-size: 1.875rem; margin-bottom: 2rem; }
                    .scrolling-gallery-track { position: relative; padding: 0 4rem; }
                    .scrolling-tile {
                        position: relative;
                        height: 16rem;
                        border-radius: 0.5rem;
                        overflow: hidden;
                        background: rgba(17, 24, 39, 0.5);
                    }
                    .scrolling-tile img { width: 100%; height: 100%; object-fit: cover; opacity: 0.7; }
                    .scrolling-caption {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        padding: 1rem;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .scrolling-caption p { margin: 0; font-size: 0.875rem; }
                    .scrolling-tile:hover .scrolling-caption { opacity: 1; }
                    .scrolling-gallery-more { margin-top: 2.5rem; text-align: center; }
                    @media (max-width: 768px) {
                        .scrolling-gallery-track { padding: 0; }
                    }
                "#}
            </style>
        </section>
    }
}
