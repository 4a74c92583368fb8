use std::collections::HashMap;

use groq_probe::config::{DEFAULT_API_BASE, ProbeConfig};
use groq_probe::report;
use groq_probe::request::{
  ChatMessage, ChatRequest, ChatResponse, Outcome, Role
};
use groq_probe::Error;
use serde_json::json;
use tokio_test::{assert_err, assert_ok};

fn lookup_from(pairs: &[(&str, &str)])
  -> impl Fn(&str) -> Option<String>
{   let map: HashMap<String, String> = pairs
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();
    move |var: &str| map.get(var).cloned()
}

fn render(outcome: &Outcome) -> String
{   let mut out: Vec<u8> = Vec::new();
    assert_ok!(report::render_outcome(&mut out, outcome));
    String::from_utf8(out).expect("utf8 output")
}

#[test]
fn test_config_requires_api_key()
{   let err = assert_err!(ProbeConfig::from_lookup(lookup_from(&[])));
    assert_eq!(err, Error::MissingApiKey("GROQ_API_KEY".to_string()));
}

#[test]
fn test_config_rejects_blank_api_key()
{   let err = assert_err!(ProbeConfig::from_lookup(
      lookup_from(&[("GROQ_API_KEY", "   ")])
    ));
    assert!(matches!(err, Error::MissingApiKey(_)));
}

#[test]
fn test_config_defaults_to_groq_endpoint()
{   let config = assert_ok!(ProbeConfig::from_lookup(
      lookup_from(&[("GROQ_API_KEY", "gsk_test")])
    ));
    assert_eq!(config.api_key, "gsk_test");
    assert_eq!(config.api_base, DEFAULT_API_BASE);
    assert_eq!(
      config.endpoint()
    , "https://api.groq.com/openai/v1/chat/completions"
    );
}

#[test]
fn test_config_base_override_strips_trailing_slash()
{   let config = assert_ok!(ProbeConfig::from_lookup(lookup_from(&[
      ("GROQ_API_KEY", "gsk_test")
    , ("GROQ_API_BASE", "http://localhost:8080/v1/")
    ])));
    assert_eq!(
      config.endpoint()
    , "http://localhost:8080/v1/chat/completions"
    );
}

#[test]
fn test_config_debug_redacts_key()
{   let config = ProbeConfig::new("gsk_secret", DEFAULT_API_BASE);
    let shown = format!("{:?}", config);
    assert!(!shown.contains("gsk_secret"));
    assert!(shown.contains("<redacted>"));
}

#[test]
fn test_probe_request_is_fixed()
{   let request = ChatRequest::probe();
    assert_eq!(request.model, "llama3-70b-8192");
    assert_eq!(request.max_tokens, 200);
    assert_eq!(request.temperature, 0.7);
    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, Role::System);
    assert_eq!(request.messages[1].role, Role::User);

    let value = assert_ok!(serde_json::to_value(&request));
    assert_eq!(value["messages"][0]["role"], "system");
    assert_eq!(value["messages"][1]["role"], "user");
    assert_eq!(value["temperature"], json!(0.7));
}

#[test]
fn test_role_serializes_lowercase()
{   let message = ChatMessage::new(Role::Assistant, "hi");
    let value = assert_ok!(serde_json::to_value(&message));
    assert_eq!(value, json!({ "role": "assistant", "content": "hi" }));
}

#[test]
fn test_render_banner()
{   let mut out: Vec<u8> = Vec::new();
    assert_ok!(report::render_banner(&mut out));
    let text = String::from_utf8(out).expect("utf8 output");
    assert_eq!(
      text
    , format!(
        "Testing Groq API with Llama3-70b model...\n{}\n"
      , "-".repeat(40)
      )
    );
}

#[test]
fn test_render_success_layout()
{   let response: ChatResponse = assert_ok!(serde_json::from_value(json!({
      "model": "llama3-70b-8192",
      "choices": [{ "message": { "content": "Line one\nLine two" } }],
      "usage": { "total_tokens": 88 }
    })));

    let text = render(&Outcome::Success(response));
    assert_eq!(
      text
    , format!(
        "✓ API working successfully!\n\nResponse:\nLine one\nLine two\n\n{}\nModel: llama3-70b-8192\nTokens used: 88\n"
      , "-".repeat(40)
      )
    );
}

#[test]
fn test_render_failure_layout()
{   let text = render(&Outcome::Failure
    {   status: 401
      , body: "{\"error\":{\"message\":\"Invalid API Key\"}}".to_string()
    });
    assert_eq!(
      text
    , "✗ API Error: 401\n{\"error\":{\"message\":\"Invalid API Key\"}}\n"
    );
}

#[test]
fn test_render_success_without_choices_errors()
{   let response: ChatResponse = assert_ok!(serde_json::from_value(json!({
      "model": "llama3-70b-8192",
      "choices": []
    })));
    let mut out: Vec<u8> = Vec::new();
    let err = assert_err!(report::render_success(&mut out, &response));
    assert_eq!(err, Error::NoChoicesInResponse);
}
