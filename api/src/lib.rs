pub mod domain;
pub mod error;
pub mod request_view;
pub mod utilities;

use std::time::Duration;

use log::debug;
use reqwest::header::{HeaderValue, ACCEPT};
use url::Url;

pub use domain::record::{RecordBody, RecordHeader, RecordHeaders, RequestRecord};
pub use domain::view::{HeaderColumns, HeaderRow, RecordBlock, View, ViewState};
pub use error::FetchError;
pub use request_view::{PollOptions, RequestView};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Read-only client for an echo server's request history.
#[derive(Clone, Debug)]
pub struct EchoApi {
    client: reqwest::Client,
    echo_url: Url,
}

impl EchoApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let echo_url = utilities::request::echo_url(base_url)?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(EchoApi { client, echo_url })
    }

    pub fn echo_url(&self) -> &Url {
        &self.echo_url
    }

    pub async fn fetch_requests(&self) -> Result<Vec<RequestRecord>, FetchError> {
        debug!("GET {}", self.echo_url);
        let res = self
            .client
            .get(self.echo_url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let res_text = res.text().await?;
        let records = utilities::response::decode_records(&res_text)?;
        debug!("{} requests recorded by echo server", records.len());
        Ok(records)
    }
}
