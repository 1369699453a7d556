use crate::domain::record::RequestRecord;

/// Decodes an `/echo` body. The server writes `null` when it has no history.
pub fn decode_records(body: &str) -> Result<Vec<RequestRecord>, serde_json::Error> {
    let records: Option<Vec<RequestRecord>> = serde_json::from_str(body)?;
    Ok(records.unwrap_or_default())
}
