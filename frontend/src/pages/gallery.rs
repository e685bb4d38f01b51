use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::social_overlay::SocialOverlay;
use crate::components::video_dialog::{play_button, VideoDialog};
use crate::content;
use crate::hooks::reveal::{reveal_classes, reveal_delay, use_mount_reveal};
use crate::hooks::scroll::use_scroll_to_top;

#[function_component(Gallery)]
pub fn gallery() -> Html {
    use_scroll_to_top();
    let visible = use_mount_reveal();
    let open_video = use_state(|| None::<u32>);

    let close_video = {
        let open_video = open_video.clone();
        Callback::from(move |_| open_video.set(None))
    };

    html! {
        <div class="page">
            <Navbar />
            <main class="container page-main">
                <a href="/#gallery" class="back-link">{"‹ Back to Home"}</a>
                <h1 class={classes!("page-title", reveal_classes(visible))}>{"Gallery"}</h1>
                <p class={classes!("page-lead", reveal_classes(visible))} style={reveal_delay(visible, 200)}>
                    {"A visual journey through performances, events, and behind-the-scenes moments. \
                      Browse through captured memories from various prestigious events across India."}
                </p>

                <div class="full-gallery-grid">
                    { for content::gallery().iter().enumerate().map(|(i, item)| html! {
                        <div key={item.id}
                            class={classes!(
                                "full-gallery-tile",
                                content::is_featured_tile(i).then(|| "featured"),
                                reveal_classes(visible),
                            )}
                            style={reveal_delay(visible, 50 * i as u32)}>
                            <img src={item.preview_path().to_string()} alt={item.caption.clone()} loading="lazy" />
                            <div class="full-gallery-shade"></div>
                            { if item.is_video() { play_button(&open_video, item.id) } else { html! {} } }
                            <div class="full-gallery-caption"><p>{&item.caption}</p></div>
                        </div>
                    }) }
                </div>
            </main>
            <Footer />
            <SocialOverlay />

            {
                match (*open_video).and_then(|id| content::gallery().iter().find(|g| g.id == id)) {
                    Some(item) => html! {
                        <VideoDialog video_id={item.video_id.clone().map(AttrValue::from)} on_close={close_video} />
                    },
                    None => html! {},
                }
            }

            <style>
                {r#"
                    .full-gallery-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        grid-auto-rows: 16rem;
                        gap: 1.5rem;
                    }
                    .full-gallery-tile {
                        position: relative;
                        overflow: hidden;
                        border-radius: 0.5rem;
                        background: rgba(17, 24, 39, 0.5);
                    }
                    .full-gallery-tile.featured { grid-column: span 2; grid-row: span 2; }
                    .full-gallery-tile img {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }
                    .full-gallery-tile:hover img { transform: scale(1.05); }
                    .full-gallery-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent, rgba(0, 0, 0, 0.2));
                        opacity: 0.6;
                        transition: opacity 0.3s ease;
                        pointer-events: none;
                    }
                    .full-gallery-tile:hover .full-gallery-shade { opacity: 0.8; }
                    .full-gallery-caption { position: absolute; left: 0; right: 0; bottom: 0; padding: 1rem; pointer-events: none; }
                    .full-gallery-caption p { margin: 0; font-size: 0.875rem; }
                    @media (max-width: 1024px) {
                        .full-gallery-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                    @media (max-width: 768px) {
                        .full-gallery-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 640px) {
                        .full-gallery-grid { grid-template-columns: 1fr; }
                        .full-gallery-tile.featured { grid-column: span 1; }
                    }
                "#}
            </style>
        </div>
    }
}
