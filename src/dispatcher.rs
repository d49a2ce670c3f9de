use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;
use url::form_urlencoded;

use crate::{
    client::{ApiResponse, Transport},
    error_context,
    formatter::format_address,
    panel::Panel,
};

pub const RANDOM_ENDPOINT: &str = "/api/random";
pub const ADDRESS_ENDPOINT: &str = "/api/address";

// Rendered whenever the request or its payload never made it back.
pub const CONNECT_ERROR: &str = "Error: Could not connect to the API.";

const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// The user's choice in the country selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Random,
    Code(String),
    Name(String),
}

impl Selection {
    /// The empty sentinel is the "Random Address" option.
    pub fn from_code(code: &str) -> Self {
        if code.is_empty() {
            Selection::Random
        } else {
            Selection::Code(code.to_string())
        }
    }

    pub fn endpoint(&self) -> String {
        match self {
            Selection::Random => RANDOM_ENDPOINT.to_string(),
            Selection::Code(code) => address_endpoint("code", code),
            Selection::Name(name) => address_endpoint("name", name),
        }
    }
}

fn address_endpoint(param: &str, value: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(param, value)
        .finish();
    format!("{}?{}", ADDRESS_ENDPOINT, query)
}

/// A candidate correction carried by an error payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Correction {
    pub name: String,
    pub code: String,
}

/// Sends the request for `selection` and renders the outcome. Every path
/// ends in exactly one final write to the output pane; overlapping
/// submissions simply overwrite each other in arrival order.
pub async fn submit(transport: &dyn Transport, panel: &mut dyn Panel, selection: &Selection) {
    let endpoint = selection.endpoint();
    log::debug!("submitting {:?} via {}", selection, endpoint);

    let rendered = match transport.get(&endpoint).await {
        Ok(response) => render_response(&response).unwrap_or_else(|err| {
            log::error!("unreadable payload from {}: {:?}", endpoint, err);
            CONNECT_ERROR.to_string()
        }),
        Err(err) => {
            log::error!("request to {} failed: {:?}", endpoint, err);
            CONNECT_ERROR.to_string()
        }
    };
    panel.set_output(rendered);
}

fn render_response(response: &ApiResponse) -> anyhow::Result<String> {
    let payload: Value = serde_json::from_slice(&response.body).context(error_context!())?;
    if response.is_ok() {
        Ok(render_success(&payload))
    } else {
        Ok(render_error(&payload))
    }
}

// A `suggestion` field means the requested country was substituted with a
// close match; both the note and the address render.
fn render_success(payload: &Value) -> String {
    if let Some(suggestion) = payload.get("suggestion").and_then(Value::as_str) {
        let address = payload.get("address").and_then(Value::as_object);
        return format!("Suggestion: {}\n{}", suggestion, format_address(address));
    }
    format_address(payload.as_object())
}

fn render_error(payload: &Value) -> String {
    let message = payload
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN_ERROR);
    let mut rendered = format!("Error: {}", message);

    let corrections: Vec<Correction> = payload
        .get("suggestions")
        .cloned()
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default();
    if !corrections.is_empty() {
        let joined = corrections
            .iter()
            .map(|c| format!("{} ({})", c.name, c.code))
            .collect::<Vec<String>>()
            .join(", ");
        rendered.push_str(&format!("\nSuggestions: {}", joined));
    }

    rendered
}
