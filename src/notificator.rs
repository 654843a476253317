use crate::{
    configuration::{
        CHECK_CONNECTION_TIMEOUT, CHECK_TIMEOUT, WEBHOOK_MESSAGE_TYPE, WEBHOOK_SUCCESS_CODE,
    },
    products::unexpected::DispatchError,
    Collector,
};
use curl::{
    easy::{Easy2, List},
    Error as CurlError,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};


/// Delivers alert messages
pub trait Dispatcher {
    /// Send a single alert, no retries
    fn dispatch(&self, message: &str) -> Result<(), DispatchError>;
}


/// Webhook text message payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DingMessage {
    /// Message type tag, always "text"
    pub msgtype: String,

    /// Message text
    pub text: DingText,
}


/// Webhook text content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DingText {
    /// Alert message
    pub content: String,
}


impl DingMessage {
    /// New text message
    pub fn new(message: &str) -> DingMessage {
        DingMessage {
            msgtype: WEBHOOK_MESSAGE_TYPE.to_string(),
            text: DingText {
                content: message.to_string(),
            },
        }
    }


    /// JSON request body
    pub fn to_json(&self) -> Result<String, DispatchError> {
        serde_json::to_string(self).map_err(|err| DispatchError::Serialization(err.to_string()))
    }
}


/// Treat only code 200 as delivered
pub fn evaluate_response(code: u32) -> Result<(), DispatchError> {
    if code == WEBHOOK_SUCCESS_CODE {
        Ok(())
    } else {
        Err(DispatchError::Delivery(code))
    }
}


/// Notificator posting alerts to a DingTalk-style chat webhook with Curl
#[derive(Debug, Clone)]
pub struct DingNotificator {
    webhook: String,
    connection_timeout: Duration,
    timeout: Duration,
}


impl DingNotificator {
    /// New notificator for given webhook URL
    pub fn new(webhook: &str) -> DingNotificator {
        DingNotificator {
            webhook: webhook.to_string(),
            connection_timeout: Duration::from_secs(CHECK_CONNECTION_TIMEOUT),
            timeout: Duration::from_secs(CHECK_TIMEOUT),
        }
    }


    /// Webhook URL
    pub fn webhook(&self) -> &str {
        &self.webhook
    }


    /// POST JSON body to the webhook, return HTTP code
    fn post(&self, body: &str) -> Result<u32, CurlError> {
        let mut headers = List::new();
        headers.append("Content-Type: application/json")?;

        let mut easy = Easy2::new(Collector::default());
        easy.url(&self.webhook)?;
        easy.post(true)?;
        easy.post_fields_copy(body.as_bytes())?;
        easy.http_headers(headers)?;
        easy.connect_timeout(self.connection_timeout)?;
        easy.timeout(self.timeout)?;
        easy.perform()?;

        let code = easy.response_code()?;
        debug!("Webhook responded with: {}, body: {}", code, easy.get_ref());
        Ok(code)
    }
}


impl Dispatcher for DingNotificator {
    fn dispatch(&self, message: &str) -> Result<(), DispatchError> {
        let body = DingMessage::new(message).to_json().map_err(|err| {
            error!("Alert dropped: {}", err);
            err
        })?;
        let code = self.post(&body).map_err(|err| {
            error!("Failed to send request: {}", err);
            DispatchError::Transport(err.to_string())
        })?;
        evaluate_response(code).map_err(|err| {
            error!("Request failed with status code: {}", code);
            err
        })?;
        info!("Alert sent successfully");
        Ok(())
    }
}
