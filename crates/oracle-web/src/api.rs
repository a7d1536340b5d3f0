//! API Client

use oracle_core::{Completion, OracleConfig, OracleError, Outcome};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct OracleRequest<'a> {
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct OracleReply {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorReply {
    #[serde(default)]
    code: String,
}

/// Ask the server to consult the oracle.
///
/// Never fails: transport and server errors are logged to the console and
/// collapse into the disrupted outcome.
pub async fn consult(prompt: &str) -> Outcome {
    let result = send(prompt).await.map(|text| Completion::text("server", text));
    if let Err(ref e) = result {
        leptos::logging::error!("oracle request failed ({}): {}", e.kind(), e);
    }
    Outcome::from_result(result, &OracleConfig::default())
}

async fn send(prompt: &str) -> Result<String, OracleError> {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into());

    let response = reqwest::Client::new()
        .post(format!("{origin}/api/oracle"))
        .json(&OracleRequest { prompt })
        .send()
        .await
        .map_err(|e| OracleError::Unavailable(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        let reply: OracleReply = response
            .json()
            .await
            .map_err(|e| OracleError::Parse(e.to_string()))?;
        Ok(reply.text)
    } else {
        let code = response
            .json::<ErrorReply>()
            .await
            .map(|r| r.code)
            .unwrap_or_default();
        Err(OracleError::Provider(format!("{status} {code}")))
    }
}
