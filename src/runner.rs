use std::io::Write;
use log::{debug, info};

use crate::config::ProbeConfig;
use crate::error::Error;
use crate::providers::GroqClient;
use crate::request::{ChatRequest, Outcome};

/// Sends the probe request once and reports the result
pub struct RequestRunner
{   client: GroqClient
}

impl RequestRunner
{   pub fn new(config: ProbeConfig) -> Result<Self, Error>
    {   debug!("Creating RequestRunner: {:?}", config);
        Ok(RequestRunner
        {   client: GroqClient::new(config)?
        })
    }

    /// Banner, one POST, then the success or failure report.
    ///
    /// Transport and parse failures are returned before any report is
    /// written; a non-200 status is an `Outcome::Failure`, not an error.
    pub async fn run<W: Write>(
      &self
    , out: &mut W
    ) -> Result<Outcome, Error>
    {   crate::report::render_banner(out)?;

        let request = ChatRequest::probe();
        let outcome = self.client.send(&request).await?;

        match &outcome
        {   Outcome::Success(response) => {
              info!("Probe succeeded with model {}", response.model)
            }
          , Outcome::Failure { status, .. } => {
              info!("Probe failed with status {}", status)
            }
        }

        crate::report::render_outcome(out, &outcome)?;
        out.flush()?;
        Ok(outcome)
    }
}
