use std::rc::Rc;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use yew::prelude::*;

use crate::components::notification::ToastKind;
use crate::contact::mailer::{MailError, Mailer};

pub const DATE_NOT_SPECIFIED: &str = "Not specified";
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Sorry, there was an error sending your message. Please try again later.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub date: Option<NaiveDate>,
    pub event_details: String,
    pub message: String,
}

impl FormFields {
    pub fn to_params(&self) -> EnquiryParams {
        EnquiryParams {
            name: self.name.clone(),
            email: self.email.clone(),
            title: self.event_details.clone(),
            message: self.message.clone(),
            event_date: format_event_date(self.date),
        }
    }
}

/// Template parameters sent with each enquiry. Field names are what the
/// email template expects.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnquiryParams {
    pub name: String,
    pub email: String,
    pub title: String,
    pub message: String,
    pub event_date: String,
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Long human date, e.g. "April 29th, 2024".
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

pub fn format_event_date(date: Option<NaiveDate>) -> String {
    date.map(format_long_date)
        .unwrap_or_else(|| DATE_NOT_SPECIFIED.to_string())
}

/// Parses the value of an `<input type="date">`; blank means no date.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    EventDetails,
    Message,
}

pub enum FormAction {
    Edit(Field, String),
    PickDate(Option<NaiveDate>),
    Submitting,
    Finished { delivered: bool },
}

/// Booking form state. Goes `idle -> submitting -> idle`; a delivered
/// enquiry clears every field, a failed one keeps them for another try.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub fields: FormFields,
    submitting: bool,
}

impl ContactForm {
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Edit(field, value) => {
                let slot = match field {
                    Field::Name => &mut self.fields.name,
                    Field::Email => &mut self.fields.email,
                    Field::EventDetails => &mut self.fields.event_details,
                    Field::Message => &mut self.fields.message,
                };
                *slot = value;
            }
            FormAction::PickDate(date) => self.fields.date = date,
            FormAction::Submitting => self.submitting = true,
            FormAction::Finished { delivered } => {
                self.submitting = false;
                if delivered {
                    self.fields = FormFields::default();
                }
            }
        }
    }

    /// Marks the form as submitting and returns what to send, or `None`
    /// when a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<EnquiryParams> {
        if self.submitting {
            return None;
        }
        self.apply(FormAction::Submitting);
        Some(self.fields.to_params())
    }
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

/// Result of one delivery attempt, ready to be applied to the form and the
/// toast list.
#[derive(Clone, Debug, PartialEq)]
pub struct Delivery {
    pub delivered: bool,
    pub toast: (ToastKind, &'static str),
}

impl Delivery {
    pub fn from_result(result: &Result<(), MailError>) -> Self {
        match result {
            Ok(()) => Self { delivered: true, toast: (ToastKind::Success, SUCCESS_MESSAGE) },
            Err(_) => Self { delivered: false, toast: (ToastKind::Error, FAILURE_MESSAGE) },
        }
    }

    pub fn action(&self) -> FormAction {
        FormAction::Finished { delivered: self.delivered }
    }
}

/// Sends one enquiry. Failures of any kind are logged and reported the same
/// way; nothing is retried.
pub async fn deliver<M: Mailer>(mailer: &M, params: &EnquiryParams) -> Delivery {
    let result = mailer.send(params).await;
    if let Err(e) = &result {
        log::error!("Error sending email: {}", e);
    }
    Delivery::from_result(&result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::notification::{ToastAction, Toasts};
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct MockMailer {
        succeed: bool,
        calls: Cell<usize>,
        sent: RefCell<Vec<EnquiryParams>>,
    }

    impl MockMailer {
        fn new(succeed: bool) -> Self {
            Self { succeed, calls: Cell::new(0), sent: RefCell::default() }
        }
    }

    impl Mailer for MockMailer {
        async fn send(&self, params: &EnquiryParams) -> Result<(), MailError> {
            self.calls.set(self.calls.get() + 1);
            self.sent.borrow_mut().push(params.clone());
            if self.succeed {
                Ok(())
            } else {
                Err(MailError::Rejected { status: 500, body: "down".into() })
            }
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.apply(FormAction::Edit(Field::Name, "Asha Rao".into()));
        form.apply(FormAction::Edit(Field::Email, "asha@example.com".into()));
        form.apply(FormAction::Edit(Field::EventDetails, "Wedding".into()));
        form.apply(FormAction::Edit(Field::Message, "Sangeet host needed".into()));
        form.apply(FormAction::PickDate(NaiveDate::from_ymd_opt(2024, 4, 29)));
        form
    }

    fn submit(form: &mut ContactForm, toasts: &mut Toasts, mailer: &MockMailer) {
        let params = form.begin_submit().expect("form is idle");
        assert!(form.is_submitting());
        let delivery = block_on(deliver(mailer, &params));
        form.apply(delivery.action());
        let (kind, message) = delivery.toast;
        toasts.apply(ToastAction::Push(kind, message.to_string()));
    }

    #[test]
    fn successful_send_clears_fields_and_toasts_once() {
        let mut form = filled_form();
        let mut toasts = Toasts::default();
        let mailer = MockMailer::new(true);

        submit(&mut form, &mut toasts, &mailer);

        assert_eq!(mailer.calls.get(), 1);
        assert_eq!(form.fields, FormFields::default());
        assert!(!form.is_submitting());
        assert_eq!(toasts.items().len(), 1);
        assert_eq!(toasts.items()[0].kind, ToastKind::Success);
        assert_eq!(toasts.items()[0].message, SUCCESS_MESSAGE);
    }

    #[test]
    fn failed_send_keeps_fields_and_toasts_once() {
        let mut form = filled_form();
        let before = form.fields.clone();
        let mut toasts = Toasts::default();
        let mailer = MockMailer::new(false);

        submit(&mut form, &mut toasts, &mailer);

        assert_eq!(form.fields, before);
        assert!(!form.is_submitting());
        assert_eq!(toasts.items().len(), 1);
        assert_eq!(toasts.items()[0].kind, ToastKind::Error);
    }

    #[test]
    fn sends_expected_params() {
        let mut form = filled_form();
        let mut toasts = Toasts::default();
        let mailer = MockMailer::new(true);

        submit(&mut form, &mut toasts, &mailer);

        let sent = mailer.sent.borrow();
        assert_eq!(
            sent[0],
            EnquiryParams {
                name: "Asha Rao".into(),
                email: "asha@example.com".into(),
                title: "Wedding".into(),
                message: "Sangeet host needed".into(),
                event_date: "April 29th, 2024".into(),
            }
        );
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut form = filled_form();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn failed_form_can_be_resubmitted() {
        let mut form = filled_form();
        let mut toasts = Toasts::default();
        submit(&mut form, &mut toasts, &MockMailer::new(false));
        submit(&mut form, &mut toasts, &MockMailer::new(true));
        assert_eq!(form.fields, FormFields::default());
        assert_eq!(toasts.items().len(), 2);
    }

    #[test]
    fn missing_date_is_not_specified() {
        assert_eq!(format_event_date(None), "Not specified");
    }

    #[test]
    fn long_date_uses_ordinals() {
        let date = |d| NaiveDate::from_ymd_opt(2024, 1, d);
        assert_eq!(format_event_date(date(1)), "January 1st, 2024");
        assert_eq!(format_event_date(date(2)), "January 2nd, 2024");
        assert_eq!(format_event_date(date(3)), "January 3rd, 2024");
        assert_eq!(format_event_date(date(11)), "January 11th, 2024");
        assert_eq!(format_event_date(date(12)), "January 12th, 2024");
        assert_eq!(format_event_date(date(13)), "January 13th, 2024");
        assert_eq!(format_event_date(date(22)), "January 22nd, 2024");
        assert_eq!(format_event_date(date(31)), "January 31st, 2024");
    }

    #[test]
    fn date_input_parsing() {
        assert_eq!(parse_date_input("2024-04-29"), NaiveDate::from_ymd_opt(2024, 4, 29));
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("29/04/2024"), None);
    }
}
