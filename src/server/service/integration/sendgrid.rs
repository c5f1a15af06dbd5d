use serde::Serialize;

use crate::server::{
    config::SendGridConfig, error::AppError, service::integration::ensure_success,
};

const FROM_NAME: &str = "Texas Hill Country Guide";

#[derive(Debug, Serialize)]
struct MailRequest<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: Address<'a>,
    subject: &'a str,
    content: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: Vec<Address<'a>>,
}

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    value: &'a str,
}

pub struct SendGridClient<'a> {
    http_client: &'a reqwest::Client,
    config: &'a SendGridConfig,
}

impl<'a> SendGridClient<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a SendGridConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Sends the newsletter welcome email.
    ///
    /// # Returns
    /// - `Ok(())` - SendGrid accepted the message (any 2xx)
    /// - `Err(AppError::Upstream)` - Non-success status
    /// - `Err(AppError::ReqwestErr)` - Transport failure
    pub async fn send_welcome(&self, email: &str, name: Option<&str>) -> Result<(), AppError> {
        let greeting = match name {
            Some(name) => format!("Howdy {},", name),
            None => "Howdy,".to_string(),
        };
        let text = format!(
            "{}\n\nThanks for subscribing to the Texas Hill Country Guide newsletter. \
             Expect seasonal events, new cabins and road-trip ideas in your inbox.\n\n\
             You can unsubscribe at any time from the link in each email.",
            greeting
        );
        let html = format!(
            "<p>{}</p><p>Thanks for subscribing to the <strong>Texas Hill Country Guide</strong> \
             newsletter. Expect seasonal events, new cabins and road-trip ideas in your inbox.</p>\
             <p>You can unsubscribe at any time from the link in each email.</p>",
            greeting
        );

        let body = MailRequest {
            personalizations: vec![Personalization {
                to: vec![Address { email, name }],
            }],
            from: Address {
                email: &self.config.from_email,
                name: Some(FROM_NAME),
            },
            subject: "Welcome to the Texas Hill Country Guide",
            content: vec![
                Content {
                    kind: "text/plain",
                    value: &text,
                },
                Content {
                    kind: "text/html",
                    value: &html,
                },
            ],
        };

        let response = self
            .http_client
            .post(format!("{}/mail/send", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        ensure_success("SendGrid", response).await?;

        Ok(())
    }
}
