use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::video_dialog::{play_button, VideoDialog};
use crate::content::{self, TileSize};
use crate::hooks::reveal::{reveal_classes, reveal_delay, use_reveal};
use crate::Route;

#[function_component(GallerySection)]
pub fn gallery_section() -> Html {
    let section = use_node_ref();
    let visible = use_reveal(section.clone());
    let open_video = use_state(|| None::<u32>);

    let open_item = (*open_video).and_then(|id| content::gallery().iter().find(|item| item.id == id));
    let close_video = {
        let open_video = open_video.clone();
        Callback::from(move |_| open_video.set(None))
    };

    html! {
        <section id="gallery" ref={section} class="gallery-section">
            <div class="container">
                <h2 class={classes!("section-heading", "centered", reveal_classes(visible))}>
                    {"Photo & Video "}<span class="gold">{"Gallery"}</span>
                </h2>
                <p class={classes!("section-lead", reveal_classes(visible))} style={reveal_delay(visible, 200)}>
                    {"A visual journey through my performances, events, and behind-the-scenes moments."}
                </p>

                <div class="gallery-grid">
                    { for content::home_gallery_tiles().into_iter().enumerate().map(|(i, (item, size))| {
                        let tall = size == TileSize::Tall;
                        html! {
                            <div key={item.id}
                                class={classes!("gallery-tile", tall.then(|| "tall"), reveal_classes(visible))}
                                style={reveal_delay(visible, 50 * i as u32)}>
                                <img src={item.preview_path().to_string()} alt={item.caption.clone()} />
                                {
                                    if item.is_video() {
                                        play_button(&open_video, item.id)
                                    } else {
                                        html! { <div class="gallery-tint"></div> }
                                    }
                                }
                                <div class="gallery-caption"><p>{&item.caption}</p></div>
                            </div>
                        }
                    }) }
                </div>

                <div class={classes!("gallery-more", reveal_classes(visible))} style={reveal_delay(visible, 500)}>
                    <Link<Route> to={Route::Gallery} classes="btn-primary">
                        {"View Full Gallery"}
                    </Link<Route>>
                </div>
            </div>

            {
                match open_item {
                    Some(item) => html! {
                        <VideoDialog video_id={item.video_id.clone().map(AttrValue::from)} on_close={close_video} />
                    },
                    None => html! {},
                }
            }

            <style>
                {r#"
                    .gallery-section {
                        padding: 5rem 0;
                        background: linear-gradient(to bottom, rgba(10, 17, 40, 0.9), var(--navy));
                    }
                    .gallery-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        grid-auto-rows: 200px;
                        gap: 1rem;
                        margin-top: 3rem;
                    }
                    .gallery-tile {
                        position: relative;
                        border-radius: 0.5rem;
                        overflow: hidden;
                        background: rgba(31, 41, 55, 0.4);
                    }
                    .gallery-tile.tall { grid-row: span 2; }
                    .gallery-tile img { width: 100%; height: 100%; object-fit: cover; opacity: 0.7; }
                    .gallery-tint {
                        position: absolute;
                        inset: 0;
                        cursor: pointer;
                        transition: background 0.3s ease;
                    }
                    .gallery-tint:hover { background: rgba(212, 175, 55, 0.2); }
                    .gallery-caption {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        padding: 0.75rem;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.8), transparent);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                        pointer-events: none;
                    }
                    .gallery-caption p { margin: 0; font-size: 0.875rem; }
                    .gallery-tile:hover .gallery-caption { opacity: 1; }
                    .gallery-more { display: flex; justify-content: center; margin-top: 2.5rem; }
                    @media (max-width: 1024px) {
                        .gallery-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                    @media (max-width: 640px) {
                        .gallery-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                "#}
            </style>
        </section>
    }
}
