use std::fmt;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer,
};
use serde_json::Value;

pub const INVALID_DATE: &str = "Invalid Date";
const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";
const WALL_CLOCK_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// One request captured by the echo server.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RequestRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub timestamp: String,
    #[serde(default)]
    pub data: RecordBody,
    #[serde(default)]
    pub headers: RecordHeaders,
}
impl RequestRecord {
    pub fn local_timestamp(&self) -> String {
        format_timestamp(&self.timestamp, &Local)
    }
}

pub fn format_timestamp<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    match parse_timestamp(raw, tz) {
        Some(ts) => ts.format(DISPLAY_FORMAT).to_string(),
        None => String::from(INVALID_DATE),
    }
}

// Date-times without an offset are wall-clock time in `tz`; a bare date is
// midnight UTC.
fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(tz));
    }
    for format in WALL_CLOCK_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }
    let midnight = NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()?
        .and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).with_timezone(tz))
}

/// Request payload as the server reported it. A string may itself hold JSON.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RecordBody {
    Text(String),
    Structured(Value),
}
impl Default for RecordBody {
    fn default() -> Self {
        RecordBody::Text(String::new())
    }
}
impl RecordBody {
    pub fn pretty(&self) -> String {
        match self {
            RecordBody::Text(text) => match serde_json::from_str::<Value>(text) {
                Ok(parsed) => indent(&parsed),
                Err(_) => text.clone(),
            },
            RecordBody::Structured(value) => indent(value),
        }
    }
}

fn indent(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RecordHeader {
    pub name: String,
    pub values: Vec<String>,
}
impl RecordHeader {
    pub fn joined_values(&self) -> String {
        self.values.join(", ")
    }
}

/// Headers in the order the server listed them.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct RecordHeaders(pub Vec<RecordHeader>);
impl RecordHeaders {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Left column takes the first ceil(n/2) entries.
    pub fn split_columns(&self) -> (&[RecordHeader], &[RecordHeader]) {
        let mid = self.0.len().div_ceil(2);
        self.0.split_at(mid)
    }
}
#[cfg(test)]
impl FromIterator<(String, Vec<String>)> for RecordHeaders {
    fn from_iter<T: IntoIterator<Item = (String, Vec<String>)>>(iter: T) -> Self {
        let mut h = RecordHeaders(Vec::new());
        for (name, values) in iter {
            h.0.push(RecordHeader { name, values });
        }
        h
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RecordHeadersIterator<'a> {
    headers: &'a [RecordHeader],
    index: usize,
}

impl<'a> Iterator for RecordHeadersIterator<'a> {
    type Item = &'a RecordHeader;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.headers.get(self.index)?;
        self.index += 1;
        Some(result)
    }
}

impl<'a> IntoIterator for &'a RecordHeaders {
    type Item = &'a RecordHeader;
    type IntoIter = RecordHeadersIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        RecordHeadersIterator {
            headers: &self.0,
            index: 0,
        }
    }
}

struct RecordHeadersVisitor;

impl<'de> Visitor<'de> for RecordHeadersVisitor {
    type Value = RecordHeaders;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of header names to value lists")
    }

    // nil header maps come through as null
    fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(RecordHeaders::default())
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(RecordHeaders::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_map(RecordHeadersVisitor)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut headers = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, values)) = access.next_entry::<String, Vec<String>>()? {
            headers.push(RecordHeader { name, values });
        }
        Ok(RecordHeaders(headers))
    }
}

impl<'de> Deserialize<'de> for RecordHeaders {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(RecordHeadersVisitor)
    }
}
