use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::{notify, use_toasts};
use crate::config;
use crate::contact::form::{deliver, format_long_date, parse_date_input, ContactForm as FormState, Field, FormAction};
use crate::contact::mailer::EmailJsMailer;
use crate::hooks::reveal::{reveal_classes, reveal_delay, use_reveal};

const WHATSAPP_PATH: &str = "M17.472 14.382c-.297-.149-1.758-.867-2.03-.967-.273-.099-.471-.148-.67.15-.197.297-.767.966-.94 1.164-.173.199-.347.223-.644.075-.297-.15-1.255-.463-2.39-1.475-.883-.788-1.48-1.761-1.653-2.059-.173-.297-.018-.458.13-.606.134-.133.298-.347.446-.52.149-.174.198-.298.298-.497.099-.198.05-.371-.025-.52-.075-.149-.669-1.612-.916-2.207-.242-.579-.487-.5-.669-.51-.173-.008-.371-.01-.57-.01-.198 0-.52.074-.792.372-.272.297-1.04 1.016-1.04 2.479 0 1.462 1.065 2.875 1.213 3.074.149.198 2.096 3.2 5.077 4.487.709.306 1.262.489 1.694.625.712.227 1.36.195 1.871.118.571-.085 1.758-.719 2.006-1.413.248-.694.248-1.289.173-1.413-.074-.124-.272-.198-.57-.347m-5.421 7.403h-.004a9.87 9.87 0 01-5.031-1.378l-.361-.214-3.741.982.998-3.648-.235-.374a9.86 9.86 0 01-1.51-5.26c.001-5.45 4.436-9.884 9.888-9.884 2.64 0 5.122 1.03 6.988 2.898a9.825 9.825 0 012.893 6.994c-.003 5.45-4.437 9.884-9.885 9.884m8.413-18.297A11.815 11.815 0 0012.05 0C5.495 0 .16 5.335.157 11.892c0 2.096.547 4.142 1.588 5.945L.057 24l6.305-1.654a11.882 11.882 0 005.683 1.448h.005c6.554 0 11.89-5.335 11.893-11.893a11.821 11.821 0 00-3.48-8.413z";

const PHONE_DISPLAY: &str = "+91 7996123999";
const PHONE_HREF: &str = "tel:+917996123999";
const EMAIL_ADDRESS: &str = "mcanushavarri@gmail.com";

const HEADING_LEAD: &str = "Book ";
const HEADING_ACCENT: &str = "Me for Your Event";

fn edit_input(form: &UseReducerHandle<FormState>, field: Field) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        form.dispatch(FormAction::Edit(field, input.value()));
    })
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let section = use_node_ref();
    let visible = use_reveal(section.clone());
    let form = use_reducer(FormState::default);
    let toasts = use_toasts();

    let onsubmit = {
        let form = form.clone();
        let toasts = toasts.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut draft = (*form).clone();
            let Some(params) = draft.begin_submit() else {
                return;
            };
            form.dispatch(FormAction::Submitting);

            let form = form.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                let delivery = deliver(&EmailJsMailer::default(), &params).await;
                form.dispatch(delivery.action());
                let (kind, message) = delivery.toast;
                notify(&toasts, kind, message);
            });
        })
    };

    let on_date = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::PickDate(parse_date_input(&input.value())));
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(Field::Message, input.value()));
        })
    };

    let open_whatsapp = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target(config::WHATSAPP_URL, "_blank") {
                gloo_console::error!("Failed to open WhatsApp:", e);
            }
        }
    });

    let fields = &form.fields;
    let date_value = fields.date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
    let submitting = form.is_submitting();

    html! {
        <section id="contact" ref={section} class="contact-section">
            <div class="container">
                <h2 class={classes!("section-heading", "centered", reveal_classes(visible))}>
                    {HEADING_LEAD}<span class="gold">{HEADING_ACCENT}</span>
                </h2>
                <p class={classes!("section-lead", reveal_classes(visible))} style={reveal_delay(visible, 200)}>
                    {"Ready to create a memorable experience for your audience? Let's connect and discuss your event needs."}
                </p>

                <div class="contact-layout">
                    <div class={classes!("contact-card", "glass-card", reveal_classes(visible))} style={reveal_delay(visible, 300)}>
                        <form class="contact-form" {onsubmit}>
                            <div class="form-row">
                                <div class="form-group">
                                    <label for="name">{"Your Name"}</label>
                                    <input id="name" type="text" placeholder="John Smith" required=true
                                        value={fields.name.clone()} oninput={edit_input(&form, Field::Name)} />
                                </div>
                                <div class="form-group">
                                    <label for="email">{"Email Address"}</label>
                                    <input id="email" type="email" placeholder="john@example.com" required=true
                                        value={fields.email.clone()} oninput={edit_input(&form, Field::Email)} />
                                </div>
                            </div>

                            <div class="form-row">
                                <div class="form-group">
                                    <label for="date">{"Event Date"}</label>
                                    <input id="date" type="date" value={date_value} oninput={on_date} />
                                    <span class="date-hint">
                                        {
                                            match fields.date {
                                                Some(date) => format_long_date(date),
                                                None => "Select an event date".to_string(),
                                            }
                                        }
                                    </span>
                                </div>
                                <div class="form-group">
                                    <label for="event-details">{"Event Type"}</label>
                                    <input id="event-details" type="text" placeholder="Corporate Event, Wedding, etc."
                                        value={fields.event_details.clone()} oninput={edit_input(&form, Field::EventDetails)} />
                                </div>
                            </div>

                            <div class="form-group">
                                <label for="message">{"Your Message"}</label>
                                <textarea id="message" placeholder="Tell me more about your event..." required=true
                                    value={fields.message.clone()} oninput={on_message} />
                            </div>

                            <button type="submit" class="btn-primary submit-button" disabled={submitting}>
                                {
                                    if submitting {
                                        html! { <><span class="spin">{"⭐"}</span>{"Sending..."}</> }
                                    } else {
                                        html! { <>{"Send Message ➤"}</> }
                                    }
                                }
                            </button>

                            <div class="whatsapp-divider">{"Or reach out directly via WhatsApp"}</div>
                            <button type="button" class="whatsapp-button" onclick={open_whatsapp}>
                                <svg width="20" height="20" viewBox="0 0 24 24" fill="currentColor" xmlns="http://www.w3.org/2000/svg">
                                    <path d={WHATSAPP_PATH} />
                                </svg>
                                {"Chat on WhatsApp"}
                            </button>
                        </form>
                    </div>

                    <div class={classes!("contact-info", reveal_classes(visible))} style={reveal_delay(visible, 400)}>
                        <h3>{"Contact Information"}</h3>
                        <div class="info-row">
                            <span class="info-icon">{"☎"}</span>
                            <div>
                                <h4>{"Phone"}</h4>
                                <a href={PHONE_HREF}>{PHONE_DISPLAY}</a>
                            </div>
                        </div>
                        <div class="info-row">
                            <span class="info-icon">{"✉"}</span>
                            <div>
                                <h4>{"Email"}</h4>
                                <a href={format!("mailto:{}", EMAIL_ADDRESS)}>{EMAIL_ADDRESS}</a>
                            </div>
                        </div>
                        <div class="info-row">
                            <span class="info-icon">{"⌖"}</span>
                            <div>
                                <h4>{"Location"}</h4>
                                <p>{"Based in Hyderabad & Vizag"}<br />{"Available for events across India"}</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .contact-section { padding: 5rem 0; position: relative; }
                    .contact-layout {
                        display: grid;
                        grid-template-columns: 3fr 2fr;
                        gap: 2.5rem;
                        margin-top: 3rem;
                    }
                    .contact-card { padding: 2rem; border-radius: 0.75rem; }
                    .contact-form { display: flex; flex-direction: column; gap: 1.5rem; }
                    .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
                    .form-group { display: flex; flex-direction: column; gap: 0.5rem; }
                    .form-group label { font-size: 0.875rem; color: rgba(255, 255, 255, 0.8); }
                    .form-group input, .form-group textarea {
                        padding: 0.75rem 1rem;
                        background: rgba(31, 41, 55, 0.7);
                        border: 1px solid #374151;
                        border-radius: 0.375rem;
                        color: #fff;
                        font-size: 1rem;
                        font-family: inherit;
                    }
                    .form-group input:focus, .form-group textarea:focus { outline: none; border-color: var(--gold); }
                    .form-group textarea { min-height: 120px; resize: vertical; }
                    .date-hint { font-size: 0.8rem; color: #9ca3af; }
                    .submit-button { width: 100%; justify-content: center; }
                    .submit-button:disabled { opacity: 0.7; cursor: progress; }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    .spin { display: inline-block; margin-right: 0.5rem; animation: spin 1s linear infinite; }
                    .whatsapp-divider { text-align: center; font-size: 0.875rem; color: rgba(255, 255, 255, 0.6); }
                    .whatsapp-button {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 0.75rem;
                        background: transparent;
                        border: 1px solid #22c55e;
                        border-radius: 0.375rem;
                        color: #22c55e;
                        font-size: 1rem;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .whatsapp-button:hover { background: #22c55e; color: #fff; }
                    .contact-info h3 { font-size: 1.5rem; margin-top: 0; }
                    .info-row { display: flex; gap: 1rem; margin-bottom: 1.5rem; }
                    .info-icon {
                        flex-shrink: 0;
                        width: 2.75rem;
                        height: 2.75rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(212, 175, 55, 0.15);
                        color: var(--gold);
                    }
                    .info-row h4 { margin: 0 0 0.25rem; }
                    .info-row a, .info-row p { color: rgba(255, 255, 255, 0.7); margin: 0; text-decoration: none; }
                    .info-row a:hover { color: var(--gold); }
                    @media (max-width: 1024px) {
                        .contact-layout { grid-template-columns: 1fr; }
                    }
                    @media (max-width: 640px) {
                        .form-row { grid-template-columns: 1fr; }
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
    fn heading_matches_the_booking_call_to_action() {
        let heading = format!("{}{}", HEADING_LEAD, HEADING_ACCENT);
        assert_eq!(heading, "Book Me for Your Event");
        assert!(heading.eq_ignore_ascii_case("Book Me For Your Event"));
    }
}
