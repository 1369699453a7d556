use chrono::{DateTime, Local};

use super::record::{RecordHeader, RequestRecord};

pub const NO_REQUESTS_PLACEHOLDER: &str = "No requests received yet";

/// What the request list currently knows about the echo server.
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    pub requests: Vec<RequestRecord>,
    pub error: Option<String>,
    pub last_updated: Option<DateTime<Local>>,
}
impl ViewState {
    pub fn record_success(&mut self, requests: Vec<RequestRecord>) {
        self.requests = requests;
        self.error = None;
        self.last_updated = Some(Local::now());
    }
    // previous requests are kept but hidden until the next success
    pub fn record_failure(&mut self, message: String) {
        self.error = Some(message);
    }
    pub fn render(&self) -> View {
        if let Some(message) = &self.error {
            return View::Error(message.clone());
        }
        if self.requests.is_empty() {
            return View::Empty;
        }
        View::Records(self.requests.iter().map(RecordBlock::from).collect())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum View {
    Error(String),
    Empty,
    Records(Vec<RecordBlock>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordBlock {
    pub id: Option<i64>,
    pub timestamp: String,
    pub body: String,
    pub headers: HeaderColumns,
}
impl From<&RequestRecord> for RecordBlock {
    fn from(record: &RequestRecord) -> Self {
        let (left, right) = record.headers.split_columns();
        RecordBlock {
            id: record.id,
            timestamp: record.local_timestamp(),
            body: record.data.pretty(),
            headers: HeaderColumns {
                left: left.iter().map(HeaderRow::from).collect(),
                right: right.iter().map(HeaderRow::from).collect(),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct HeaderColumns {
    pub left: Vec<HeaderRow>,
    pub right: Vec<HeaderRow>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeaderRow {
    pub name: String,
    pub value: String,
}
impl From<&RecordHeader> for HeaderRow {
    fn from(header: &RecordHeader) -> Self {
        HeaderRow {
            name: header.name.clone(),
            value: header.joined_values(),
        }
    }
}
