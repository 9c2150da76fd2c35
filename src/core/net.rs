//! Request transport: auth injection, the single GET, and response classification.

use serde_json::{Map, Value};
use url::Url;

use crate::core::client::AUTH_PARAM;
use crate::core::wire::{Envelope, RawResponse};
use crate::core::{AvClient, AvError, TransportError};

/// Send one GET with `params` plus the API key, and classify the reply.
///
/// The API key always overrides a caller-supplied `apikey`. There are no retries:
/// one failed attempt is one failed call.
pub(crate) async fn execute(
    client: &AvClient,
    params: &[(&'static str, String)],
) -> Result<RawResponse, AvError> {
    let url = request_url(client, params);

    #[cfg(feature = "tracing")]
    tracing::debug!(url = %redacted(&url), "sending request");

    let resp = client.http().get(url.clone()).send().await?;
    if !resp.status().is_success() {
        return Err(TransportError::Status {
            status: resp.status().as_u16(),
            url: redacted(&url),
        }
        .into());
    }

    let text = get_text(resp).await?;
    let body: Map<String, Value> =
        serde_json::from_str(&text).map_err(TransportError::MalformedBody)?;

    match Envelope::classify(body) {
        Envelope::Error { message } => Err(AvError::Provider(message)),
        Envelope::Advisory { notice, body } => {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                note = notice.note.as_deref().unwrap_or_default(),
                information = notice.information.as_deref().unwrap_or_default(),
                "provider advisory"
            );
            Ok(RawResponse::new(body, Some(notice)))
        }
        Envelope::Payload { notice, body } => Ok(RawResponse::new(body, notice)),
    }
}

fn request_url(client: &AvClient, params: &[(&'static str, String)]) -> Url {
    let mut url = client.base_url().clone();
    {
        let mut qp = url.query_pairs_mut();
        for (k, v) in params.iter().filter(|(k, _)| *k != AUTH_PARAM) {
            qp.append_pair(k, v);
        }
        for (k, v) in client.auth_params() {
            qp.append_pair(k, &v);
        }
    }
    url
}

/// Read the response body as text.
async fn get_text(resp: reqwest::Response) -> Result<String, AvError> {
    Ok(resp.text().await?)
}

/// The URL with the API key masked, for errors and logs.
fn redacted(url: &Url) -> String {
    let mut out = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == AUTH_PARAM { "***".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    out.query_pairs_mut().clear().extend_pairs(pairs);
    out.to_string()
}
