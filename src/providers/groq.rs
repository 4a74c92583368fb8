use log::{debug, trace, error};
use reqwest::StatusCode;

use crate::config::ProbeConfig;
use crate::error::Error;
use crate::request::{ChatRequest, ChatResponse, Outcome};

/// Groq chat-completions client
pub struct GroqClient
{   config: ProbeConfig
  , http_client: reqwest::Client
}

impl GroqClient
{   /// Build a client with reqwest's default settings
    pub fn new(config: ProbeConfig) -> Result<Self, Error>
    {   debug!("Creating GroqClient for {}", config.api_base);
        let http_client = reqwest::Client::builder()
          .build()
          .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            Error::InvalidConfiguration(e.to_string())
          })?;

        Ok(GroqClient
        {   config
          , http_client
        })
    }

    pub fn endpoint(&self) -> String
    {   self.config.endpoint()
    }

    /// Send `request` once and classify the reply
    pub async fn send(
      &self
    , request: &ChatRequest
    ) -> Result<Outcome, Error>
    {   let endpoint = self.endpoint();
        debug!("Posting chat request to {}", endpoint);
        trace!("Groq request: {:?}", request);

        let response = self.http_client
          .post(&endpoint)
          .header(
            "Authorization"
          , format!("Bearer {}", self.config.api_key)
          )
          .header("Content-Type", "application/json")
          .json(request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            Error::HttpError(e.to_string())
          })?;

        let status = response.status();
        debug!("Groq response status: {}", status);

        let body = response.text().await.map_err(|e| {
          error!("Failed to read response body: {}", e);
          Error::HttpError(e.to_string())
        })?;
        trace!("Groq response body: {}", body);

        if status != StatusCode::OK
        {   return Ok(Outcome::Failure
            {   status: status.as_u16()
              , body
            });
        }

        let chat_response: ChatResponse
          = serde_json::from_str(&body).map_err(|e| {
            error!("Parse error: {}", e);
            Error::ParseError(e.to_string())
          })?;

        if chat_response.choices.is_empty()
        {   error!("No choices in response");
            return Err(Error::NoChoicesInResponse);
        }

        Ok(Outcome::Success(chat_response))
    }
}
