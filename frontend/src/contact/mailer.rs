use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::contact::form::EnquiryParams;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("email request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("email service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Outbound delivery of one booking enquiry.
#[allow(async_fn_in_trait)]
pub trait Mailer {
    async fn send(&self, params: &EnquiryParams) -> Result<(), MailError>;
}

#[derive(Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EnquiryParams,
}

/// Sends through the EmailJS REST API with the site's fixed service,
/// template and public key.
#[derive(Clone, Debug, PartialEq)]
pub struct EmailJsMailer {
    service_id: &'static str,
    template_id: &'static str,
    public_key: &'static str,
}

impl Default for EmailJsMailer {
    fn default() -> Self {
        Self {
            service_id: config::EMAILJS_SERVICE_ID,
            template_id: config::EMAILJS_TEMPLATE_ID,
            public_key: config::get_email_public_key(),
        }
    }
}

impl Mailer for EmailJsMailer {
    async fn send(&self, params: &EnquiryParams) -> Result<(), MailError> {
        let body = EmailJsRequest {
            service_id: self.service_id,
            template_id: self.template_id,
            user_id: self.public_key,
            template_params: params,
        };

        let response = Request::post(config::EMAILJS_SEND_URL)
            .json(&body)?
            .send()
            .await?;

        if response.ok() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(MailError::Rejected { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_uses_emailjs_field_names() {
        let params = EnquiryParams {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            title: "Wedding".into(),
            message: "Sangeet in March".into(),
            event_date: "Not specified".into(),
        };
        let body = EmailJsRequest {
            service_id: config::EMAILJS_SERVICE_ID,
            template_id: config::EMAILJS_TEMPLATE_ID,
            user_id: "key",
            template_params: &params,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["service_id"], "service_0669rfq");
        assert_eq!(json["template_id"], "template_agmgezm");
        assert_eq!(json["user_id"], "key");
        assert_eq!(json["template_params"]["event_date"], "Not specified");
        assert_eq!(json["template_params"]["title"], "Wedding");
    }

    #[test]
    fn rejected_error_mentions_status() {
        let err = MailError::Rejected { status: 412, body: "quota".into() };
        assert_eq!(err.to_string(), "email service rejected the message (412): quota");
    }
}
