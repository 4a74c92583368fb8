use std::fmt;

/// Error type for a probe run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// API key variable is unset or blank
    MissingApiKey(String)
  , /// HTTP client could not be built
    InvalidConfiguration(String)
  , /// Transport failure (connect, timeout, body read)
    HttpError(String)
  , /// Failed to parse a 200 response body
    ParseError(String)
  , /// 200 response with an empty choices array
    NoChoicesInResponse
  , /// Writing the report failed
    Io(String)
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingApiKey(var) => {
              write!(f, "Missing API key: {} is not set", var)
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::NoChoicesInResponse => {
              write!(f, "API response contained no choices")
            }
          , Error::Io(msg) => {
              write!(f, "Output error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error
{   fn from(e: std::io::Error) -> Self
    {   Error::Io(e.to_string())
    }
}
