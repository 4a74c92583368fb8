//! Console rendering of a probe run

use std::io::Write;

use crate::error::Error;
use crate::request::{ChatResponse, Outcome};

pub const SUCCESS_MARKER: &str = "✓ API working successfully!";
pub const FAILURE_MARKER: &str = "✗ API Error:";
pub const TOKENS_PLACEHOLDER: &str = "N/A";

fn rule() -> String
{   "-".repeat(40)
}

pub fn render_banner<W: Write>(out: &mut W) -> Result<(), Error>
{   writeln!(out, "Testing Groq API with Llama3-70b model...")?;
    writeln!(out, "{}", rule())?;
    Ok(())
}

/// Success marker, first choice content, model/tokens footer
pub fn render_success<W: Write>(
  out: &mut W
, response: &ChatResponse
) -> Result<(), Error>
{   let content = response.first_content()?;
    let tokens = response.total_tokens()
      .map(|t| t.to_string())
      .unwrap_or_else(|| TOKENS_PLACEHOLDER.to_string());

    writeln!(out, "{}", SUCCESS_MARKER)?;
    writeln!(out, "\nResponse:")?;
    writeln!(out, "{}", content)?;
    writeln!(out, "\n{}", rule())?;
    writeln!(out, "Model: {}", response.model)?;
    writeln!(out, "Tokens used: {}", tokens)?;
    Ok(())
}

pub fn render_failure<W: Write>(
  out: &mut W
, status: u16
, body: &str
) -> Result<(), Error>
{   writeln!(out, "{} {}", FAILURE_MARKER, status)?;
    writeln!(out, "{}", body)?;
    Ok(())
}

pub fn render_outcome<W: Write>(
  out: &mut W
, outcome: &Outcome
) -> Result<(), Error>
{   match outcome
    {   Outcome::Success(response) => render_success(out, response)
      , Outcome::Failure { status, body } => {
          render_failure(out, *status, body)
        }
    }
}
