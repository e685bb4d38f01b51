use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::carousel::{Carousel, CarouselApi};
use crate::config;
use crate::content;
use crate::hooks::carousel::{use_carousel_autoplay, CarouselSlot};
use crate::hooks::reveal::{reveal_classes, reveal_delay, use_reveal};
use crate::hooks::rotator::{wrap_next, wrap_prev};

const CLIENTS_PER_VIEW: usize = 5;

struct Quote {
    name: &'static str,
    role: &'static str,
    company: Option<&'static str>,
    text: &'static str,
}

impl Quote {
    fn byline(&self) -> String {
        match self.company {
            Some(company) => format!("{}, {}", self.role, company),
            None => self.role.to_string(),
        }
    }
}

const QUOTES: [Quote; 3] = [
    Quote {
        name: "Rajesh Kumar",
        role: "Event Director",
        company: Some("Bayer"),
        text: "Anusha brought incredible energy to our corporate event. Her professionalism and ability to engage the audience made our family day truly memorable.",
    },
    Quote {
        name: "Priya Sharma",
        role: "Producer",
        company: Some("Cinematica Expo"),
        text: "Working with Anusha was a delight. Her interviewing skills and stage presence elevated our cinema expo to a whole new level.",
    },
    Quote {
        name: "Vikram Reddy",
        role: "Event Manager",
        company: Some("Jam Junxion"),
        text: "The audience absolutely loved Anusha's hosting at our musical night. Her charisma and energy created the perfect atmosphere for our event.",
    },
];

fn next_quote(index: usize) -> usize {
    wrap_next(index, QUOTES.len())
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let section = use_node_ref();
    let visible = use_reveal(section.clone());
    let current = use_state(|| 0usize);
    let clients_api: CarouselSlot<CarouselApi> = use_mut_ref(|| None);

    // Restarted whenever the index moves, so a manual step also resets the wait
    {
        let index = *current;
        let current = current.clone();
        use_effect_with_deps(
            move |&index| {
                let interval = Interval::new(config::TESTIMONIAL_INTERVAL_MS, move || {
                    current.set(next_quote(index));
                });
                move || drop(interval)
            },
            index,
        );
    }

    use_carousel_autoplay(clients_api.clone(), 0, config::CLIENT_CAROUSEL_INTERVAL_MS, visible);

    let prev = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(wrap_prev(*current, QUOTES.len())))
    };
    let next = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(next_quote(*current)))
    };
    let on_clients_api = {
        let clients_api = clients_api.clone();
        Callback::from(move |api: CarouselApi| *clients_api.borrow_mut() = Some(api))
    };

    html! {
        <section id="testimonials" ref={section} class="testimonials-section">
            <div class="container">
                <h2 class={classes!("section-heading", "centered", reveal_classes(visible))}>
                    {"What People "}<span class="gold">{"Say"}</span>
                </h2>

                <div class={classes!("testimonial-stage", reveal_classes(visible))} style={reveal_delay(visible, 200)}>
                    <div class="quote-mark">{"“"}</div>
                    <div class="testimonial-viewport">
                        <div class="testimonial-track" style={format!("transform: translateX(-{}%);", *current * 100)}>
                            { for QUOTES.iter().map(|quote| html! {
                                <div class="testimonial-slide">
                                    <div class="testimonial-card glass-card">
                                        <blockquote>{format!("\"{}\"", quote.text)}</blockquote>
                                        <div class="testimonial-author">
                                            <h4>{quote.name}</h4>
                                            <p>{quote.byline()}</p>
                                        </div>
                                    </div>
                                </div>
                            }) }
                        </div>
                        <button class="testimonial-arrow left" onclick={prev} aria-label="Previous testimonial">{"‹"}</button>
                        <button class="testimonial-arrow right" onclick={next} aria-label="Next testimonial">{"›"}</button>
                    </div>

                    <div class="testimonial-dots">
                        { for (0..QUOTES.len()).map(|i| {
                            let select = {
                                let current = current.clone();
                                Callback::from(move |_: MouseEvent| current.set(i))
                            };
                            html! {
                                <button key={i} class={classes!("dot", (i == *current).then(|| "active"))}
                                    onclick={select} aria-label={format!("Go to testimonial {}", i + 1)}>
                                </button>
                            }
                        }) }
                    </div>
                </div>

                <div class={classes!("clients-block", reveal_classes(visible))} style={reveal_delay(visible, 300)}>
                    <h3>{"Trusted by "}<span class="gold">{"Great Companies"}</span></h3>
                    <Carousel items_per_view={CLIENTS_PER_VIEW} on_api={on_clients_api}>
                        { for content::clients().iter().map(|client| html! {
                            <div key={client.id} class="client-card">
                                {
                                    match client.logo() {
                                        Some(src) => html! { <img src={src.to_string()} alt={format!("{} logo", client.name)} /> },
                                        None => html! { <span>{&client.name}</span> },
                                    }
                                }
                            </div>
                        }) }
                    </Carousel>
                </div>
            </div>

            <style>
                {r#"
                    .testimonials-section { padding: 5rem 0; position: relative; background: var(--navy); }
                    .testimonial-stage { position: relative; margin-top: 4rem; }
                    .quote-mark {
                        position: absolute;
                        top: -3.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        font-size: 6rem;
                        line-height: 1;
                        color: rgba(212, 175, 55, 0.2);
                    }
                    .testimonial-viewport { position: relative; overflow: hidden; padding: 1rem; }
                    .testimonial-track { display: flex; transition: transform 0.5s ease-out; }
                    .testimonial-slide { flex: 0 0 100%; padding: 1rem; box-sizing: border-box; }
                    .testimonial-card { padding: 2rem; border-radius: 0.75rem; }
                    .testimonial-card blockquote {
                        margin: 0 0 1.5rem;
                        text-align: center;
                        font-style: italic;
                        font-size: 1.2rem;
                        color: rgba(255, 255, 255, 0.9);
                    }
                    .testimonial-author { text-align: center; }
                    .testimonial-author h4 { margin: 0; color: var(--gold); font-size: 1.1rem; }
                    .testimonial-author p { margin: 0.25rem 0 0; color: rgba(255, 255, 255, 0.7); }
                    .testimonial-arrow {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        width: 2.5rem;
                        height: 2.5rem;
                        border: none;
                        border-radius: 50%;
                        background: rgba(10, 17, 40, 0.8);
                        color: #fff;
                        font-size: 1.5rem;
                        cursor: pointer;
                        transition: background 0.3s ease;
                    }
                    .testimonial-arrow:hover { background: var(--gold); }
                    .testimonial-arrow.left { left: 2rem; }
                    .testimonial-arrow.right { right: 2rem; }
                    .testimonial-dots { display: flex; justify-content: center; gap: 0.5rem; margin-top: 1.5rem; }
                    .dot {
                        width: 0.75rem;
                        height: 0.75rem;
                        border: none;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.3);
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .dot.active { width: 1.5rem; background: var(--gold); }
                    .clients-block { margin-top: 5rem; }
                    .clients-block h3 { text-align: center; font-size: 1.5rem; margin-bottom: 2rem; }
                    .client-card {
                        height: 100%;
                        min-height: 4.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem 1.5rem;
                        background: rgba(31, 41, 55, 0.4);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 0.25rem;
                        transition: border-color 0.3s ease;
                    }
                    .client-card:hover { border-color: rgba(212, 175, 55, 0.3); }
                    .client-card img { height: 2.5rem; width: auto; opacity: 0.7; }
                    .client-card span { color: rgba(255, 255, 255, 0.7); font-weight: 600; text-align: center; }
                    @media (max-width: 768px) {
                        .testimonial-arrow.left { left: 0.5rem; }
                        .testimonial-arrow.right { right: 0.5rem; }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byline_includes_company() {
        assert_eq!(QUOTES[0].byline(), "Event Director, Bayer");
        let anonymous = Quote { name: "A", role: "Guest", company: None, text: "" };
        assert_eq!(anonymous.byline(), "Guest");
    }

    #[test]
    fn arrows_wrap_around_the_quotes() {
        assert_eq!(wrap_prev(0, QUOTES.len()), 2);
        assert_eq!(wrap_next(2, QUOTES.len()), 0);
    }

    #[test]
    fn auto_advance_cycles_through_every_quote() {
        let mut index = 0;
        let mut seen = vec![index];
        for _ in 0..QUOTES.len() {
            index = next_quote(index);
            seen.push(index);
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
    }
}
