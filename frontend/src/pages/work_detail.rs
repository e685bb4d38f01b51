use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::social_overlay::SocialOverlay;
use crate::content::{self, WorkItem};
use crate::hooks::scroll::use_scroll_to_top;

/// What the detail route shows for a given id.
#[derive(Debug, PartialEq)]
pub enum WorkView {
    Found(&'static WorkItem),
    NotFound,
}

impl WorkView {
    pub fn resolve(id: &str) -> Self {
        match content::find_work(id) {
            Some(work) => WorkView::Found(work),
            None => WorkView::NotFound,
        }
    }

    pub fn heading(&self) -> &str {
        match self {
            WorkView::Found(work) => &work.title,
            WorkView::NotFound => "Event Not Found",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct WorkDetailProps {
    pub id: String,
}

#[function_component(WorkDetail)]
pub fn work_detail(props: &WorkDetailProps) -> Html {
    use_scroll_to_top();
    let view = WorkView::resolve(&props.id);

    let body = match &view {
        WorkView::Found(work) => render_work(work),
        WorkView::NotFound => {
            log::warn!("No event with id {}", props.id);
            html! {
                <main class="container page-main not-found-view">
                    <h1>{view.heading()}</h1>
                    <p>{"The event you're looking for doesn't exist or has been removed."}</p>
                    <a href="/#work" class="btn-outline">{"‹ Back to All Events"}</a>
                </main>
            }
        }
    };

    html! {
        <div class="page">
            <Navbar />
            { body }
            <Footer />
            <SocialOverlay />
            <style>
                {r#"
                    .not-found-view {
                        min-height: 60vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                    }
                    .not-found-view h1 { font-size: 2.25rem; margin-bottom: 1rem; }
                    .not-found-view p { color: rgba(255, 255, 255, 0.7); margin-bottom: 2rem; }
                    .detail-layout { display: grid; grid-template-columns: 2fr 1fr; gap: 2rem; }
                    .detail-panel {
                        background: rgba(17, 24, 39, 0.4);
                        backdrop-filter: blur(4px);
                        padding: 1.5rem;
                        border-radius: 0.5rem;
                        margin-bottom: 2rem;
                    }
                    .detail-hero { width: 100%; max-height: 500px; object-fit: cover; border-radius: 0.5rem; margin-bottom: 2rem; }
                    .detail-text { font-size: 1.1rem; color: rgba(255, 255, 255, 0.9); margin-bottom: 1.5rem; }
                    .detail-meta { display: flex; flex-wrap: wrap; gap: 1.5rem; margin-bottom: 2rem; color: rgba(255, 255, 255, 0.8); }
                    .detail-meta .gold { margin-right: 0.5rem; }
                    .detail-links { display: flex; gap: 0.75rem; margin-bottom: 2rem; }
                    .detail-link {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        border-radius: 0.375rem;
                        color: #fff;
                        text-decoration: none;
                    }
                    .detail-link.youtube { background: #dc2626; }
                    .detail-link.instagram { background: linear-gradient(to right, #9333ea, #db2777); }
                    .media-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                    .media-placeholder {
                        height: 12rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: #1f2937;
                        border-radius: 0.5rem;
                        color: #6b7280;
                        text-align: center;
                        word-break: break-all;
                    }
                    .video-placeholder { aspect-ratio: 16 / 9; height: auto; }
                    .detail-quote { border-left: 4px solid var(--gold); padding: 0.25rem 0 0.25rem 1rem; margin-bottom: 1.5rem; }
                    .detail-quote p { margin: 0; }
                    .detail-quote .comment { font-style: italic; color: rgba(255, 255, 255, 0.8); margin-bottom: 0.5rem; }
                    .detail-quote .role { font-size: 0.875rem; color: rgba(255, 255, 255, 0.6); }
                    .detail-cta .btn-primary { display: block; text-align: center; }
                    @media (max-width: 1024px) {
                        .detail-layout { grid-template-columns: 1fr; }
                    }
                    @media (max-width: 640px) {
                        .media-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </div>
    }
}

fn render_work(work: &WorkItem) -> Html {
    let links = work.links.clone().unwrap_or_default();

    html! {
        <main class="container page-main">
            <a href="/#work" class="back-link">{"‹ Back to all events"}</a>
            <h1 class="page-title">{&work.title}</h1>

            <div class="detail-layout">
                <div>
                    <div class="detail-panel">
                        {
                            match work.cover_image() {
                                Some(src) => html! { <img class="detail-hero" src={src.to_string()} alt={work.title.clone()} /> },
                                None => html! {},
                            }
                        }
                        <p class="detail-text">{work.detail_text()}</p>

                        <div class="detail-meta">
                            { for work.date.iter().map(|date| html! { <span><span class="gold">{"📅"}</span>{date}</span> }) }
                            { for work.location.iter().map(|place| html! { <span><span class="gold">{"⌖"}</span>{place}</span> }) }
                        </div>

                        <div class="detail-links">
                            { for links.youtube.iter().map(|href| html! {
                                <a class="detail-link youtube" href={href.clone()} target="_blank" rel="noopener noreferrer">
                                    {"▶ Watch on YouTube"}
                                </a>
                            }) }
                            { for links.instagram.iter().map(|href| html! {
                                <a class="detail-link instagram" href={href.clone()} target="_blank" rel="noopener noreferrer">
                                    {"◉ View on Instagram"}
                                </a>
                            }) }
                        </div>

                        {
                            if work.images.is_empty() {
                                html! {}
                            } else {
                                html! {
                                    <>
                                        <h2>{"Event Gallery"}</h2>
                                        <div class="media-grid">
                                            { for work.images.iter().map(|image| html! {
                                                <div class="media-placeholder">{format!("Image placeholder: {}", image)}</div>
                                            }) }
                                        </div>
                                    </>
                                }
                            }
                        }

                        {
                            if work.videos.is_empty() {
                                html! {}
                            } else {
                                html! {
                                    <>
                                        <h2>{"Event Videos"}</h2>
                                        { for work.videos.iter().map(|video| html! {
                                            <div class="media-placeholder video-placeholder">{format!("Video placeholder: {}", video)}</div>
                                        }) }
                                    </>
                                }
                            }
                        }
                    </div>
                </div>

                <aside>
                    {
                        if work.testimonials.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <div class="detail-panel">
                                    <h2>{"Testimonials"}</h2>
                                    { for work.testimonials.iter().map(|t| html! {
                                        <div class="detail-quote">
                                            <p class="comment">{format!("\"{}\"", t.comment)}</p>
                                            <p class="gold">{&t.name}</p>
                                            <p class="role">{&t.role}</p>
                                        </div>
                                    }) }
                                </div>
                            }
                        }
                    }
                    <div class="detail-panel detail-cta">
                        <h2>{"Interested in similar events?"}</h2>
                        <p>
                            {"Would you like to have Anusha host your next event? \
                              Get in touch to discuss how she can make your occasion special."}
                        </p>
                        <a href="/#contact" class="btn-primary">{"Book Me For Your Event"}</a>
                    </div>
                </aside>
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_id_renders_its_title() {
        let view = WorkView::resolve("bayer-family-day");
        assert!(matches!(view, WorkView::Found(work) if work.id == "bayer-family-day"));
        assert_eq!(view.heading(), "Bayer Family Day");
    }

    #[test]
    fn unknown_id_falls_back_to_not_found() {
        let view = WorkView::resolve("does-not-exist");
        assert_eq!(view, WorkView::NotFound);
        assert_eq!(view.heading(), "Event Not Found");
    }
}
