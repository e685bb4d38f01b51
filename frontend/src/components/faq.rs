use yew::prelude::*;

use crate::hooks::reveal::{reveal_classes, reveal_delay, use_reveal};

const FAQS: [(&str, &str); 5] = [
    (
        "What services do you offer as an emcee?",
        "I offer a comprehensive range of hosting services including corporate events, weddings, award ceremonies, product launches, cultural shows, and private parties. I specialize in creating engaging and memorable experiences tailored to each unique occasion.",
    ),
    (
        "In which languages can you host events?",
        "I'm fluent in Hindi, English, and Telugu with basic proficiency in Tamil and Kannada. This versatility allows me to connect with diverse audiences and seamlessly switch between languages based on your event requirements.",
    ),
    (
        "How can I book you for my event?",
        "You can book me by filling out the contact form on this website, sending me a direct message on social media, or calling the phone number provided in the contact section. I recommend booking at least 4-6 weeks in advance to ensure availability, especially for peak event seasons.",
    ),
    (
        "Do you travel for events outside of Hyderabad/Vizag?",
        "Yes, I'm available for events across India and internationally as well. Travel and accommodation arrangements can be discussed as part of our booking conversation.",
    ),
    (
        "What makes your hosting style unique?",
        "My hosting style combines energy, elegance, and audience engagement with a personalized approach for each event. Having transitioned from a 10-year career at Canara Bank to follow my passion, I bring both professionalism and creative flair to every performance.",
    ),
];

/// Single-open accordion: clicking the open item closes it, clicking any
/// other item opens that one instead.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.is_open.to_string()}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let section = use_node_ref();
    let visible = use_reveal(section.clone());
    let open = use_state(|| None::<usize>);

    html! {
        <section id="faq" ref={section} class="faq-section">
            <div class="container narrow">
                <div class={classes!("faq-header", reveal_classes(visible))}>
                    <span class="faq-badge">{"?"}</span>
                    <h2 class="section-heading">{"Frequently Asked Questions"}</h2>
                    <p class="section-lead">
                        {"Find answers to common questions about my services, booking process, and event hosting style."}
                    </p>
                </div>

                <div class={classes!("faq-list", "glass-card", reveal_classes(visible))} style={reveal_delay(visible, 200)}>
                    { for FAQS.iter().enumerate().map(|(i, (question, answer))| {
                        let on_toggle = {
                            let open = open.clone();
                            Callback::from(move |_| open.set(toggle_open(*open, i)))
                        };
                        html! {
                            <FaqItem key={i} question={*question} answer={*answer} is_open={*open == Some(i)} {on_toggle} />
                        }
                    }) }
                </div>

                <p class="faq-more">
                    {"Have more questions? Feel free to "}
                    <a href="#contact">{"contact me"}</a>
                    {"."}
                </p>
            </div>

            <style>
                {r#"
                    .faq-section { padding: 5rem 0; background: var(--navy); }
                    .faq-header { text-align: center; margin-bottom: 3rem; }
                    .faq-badge {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        background: rgba(212, 175, 55, 0.15);
                        color: var(--gold);
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .faq-list { overflow: hidden; }
                    .faq-item { border-bottom: 1px solid rgba(255, 255, 255, 0.1); }
                    .faq-item:last-child { border-bottom: none; }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1rem 1.25rem;
                        background: none;
                        border: none;
                        color: #fff;
                        font-family: 'Montserrat', sans-serif;
                        font-size: 1rem;
                        text-align: left;
                        cursor: pointer;
                    }
                    .faq-question:hover { color: var(--gold); }
                    .toggle-icon { font-size: 1.25rem; margin-left: 1rem; }
                    .faq-answer {
                        max-height: 0;
                        overflow: hidden;
                        padding: 0 1.25rem;
                        color: rgba(255, 255, 255, 0.8);
                        transition: max-height 0.3s ease, padding 0.3s ease;
                    }
                    .faq-item.open .faq-answer { max-height: 20rem; padding-bottom: 1rem; }
                    .faq-answer p { margin: 0; }
                    .faq-more { margin-top: 2rem; text-align: center; font-size: 0.875rem; color: rgba(255, 255, 255, 0.6); }
                    .faq-more a { color: var(--gold); }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_item_closes_the_other() {
        assert_eq!(toggle_open(None, 2), Some(2));
        assert_eq!(toggle_open(Some(2), 4), Some(4));
    }

    #[test]
    fn clicking_open_item_collapses_it() {
        assert_eq!(toggle_open(Some(1), 1), None);
    }
}
