use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{WorkItem, WorkLinks};
use crate::Route;

/// External links for a work card. Clicks stay on the link instead of
/// bubbling up to the card's own navigation.
fn link_icons(links: Option<&WorkLinks>) -> Html {
    let Some(links) = links else {
        return html! {};
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let entries = [
        (links.youtube.as_ref(), "▶", "YouTube"),
        (links.instagram.as_ref(), "◉", "Instagram"),
        (links.other.as_ref(), "↗", "Website"),
    ];

    html! {
        <div class="work-links">
            { for entries.into_iter().filter_map(|(href, icon, label)| href.map(|href| html! {
                <a href={href.clone()} target="_blank" rel="noopener noreferrer"
                    aria-label={label} onclick={stop.clone()}>
                    {icon}
                </a>
            })) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct WorkCardProps {
    pub work: WorkItem,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: AttrValue,
}

/// Card linking to an event's detail page, with its external links shown
/// on hover.
#[function_component(WorkCard)]
pub fn work_card(props: &WorkCardProps) -> Html {
    let hovered = use_state(|| false);
    let work = &props.work;

    let enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <div class="work-card-wrapper" onmouseenter={enter} onmouseleave={leave}>
            <Link<Route> to={Route::WorkDetail { id: work.id.clone() }} classes="work-card-link">
                <div class={classes!("work-card", "glass-card", props.class.clone())} style={props.style.clone()}>
                    <div class="work-card-media">
                        {
                            match work.cover_image() {
                                Some(src) => html! { <img src={src.to_string()} alt={work.title.clone()} /> },
                                None => html! { <div class="no-image">{"No Image Available"}</div> },
                            }
                        }
                        <div class={classes!("work-card-overlay", hovered.then(|| "active"))}>
                            { link_icons(work.links.as_ref()) }
                        </div>
                    </div>
                    <div class="work-card-body">
                        <h3>{&work.title}</h3>
                        <p>{&work.description}</p>
                    </div>
                </div>
            </Link<Route>>
            <style>
                {r#"
                    .work-card-wrapper { height: 100%; }
                    .work-card-link { display: block; height: 100%; text-decoration: none; color: inherit; }
                    .work-card { height: 100%; overflow: hidden; transition: transform 0.3s ease, box-shadow 0.3s ease; }
                    .work-card:hover { transform: translateY(-4px); box-shadow: 0 12px 24px rgba(0, 0, 0, 0.3); }
                    .work-card-media {
                        position: relative;
                        height: 12rem;
                        overflow: hidden;
                        background: linear-gradient(135deg, #1f2937, #111827);
                    }
                    .work-card-media img { width: 100%; height: 100%; object-fit: cover; }
                    .no-image {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: rgba(255, 255, 255, 0.2);
                    }
                    .work-card-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(212, 175, 55, 0.8);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .work-card-overlay.active { opacity: 1; }
                    .work-links { display: flex; gap: 1rem; }
                    .work-links a { color: #fff; font-size: 1.75rem; text-decoration: none; }
                    .work-links a:hover { color: var(--navy); }
                    .work-card-body { padding: 1.5rem; }
                    .work-card-body h3 { font-size: 1.25rem; margin: 0 0 0.5rem; }
                    .work-card-body p { font-size: 0.9rem; color: rgba(255, 255, 255, 0.7); margin: 0; }
                "#}
            </style>
        </div>
    }
}
