//! Parsing for the Google Sheets gviz JSON export.
//!
//! The export does not return bare JSON: the object is wrapped in a
//! callback-style envelope of fixed framing — a 47-byte prefix ending in
//! `setResponse(` and a 2-byte `);` trailer. The framing is validated here
//! instead of being sliced off blindly, so a short or mangled body surfaces
//! as a typed error rather than garbage JSON.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Byte length of the `/*O_o*/\ngoogle.visualization.Query.setResponse(`
/// prefix the export puts in front of the payload.
pub const ENVELOPE_PREFIX_LEN: usize = 47;

/// Closing bytes of the callback wrapper.
pub const ENVELOPE_TRAILER: &str = ");";

const CALLBACK_MARKER: &str = "setResponse(";

#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("response body too short for the gviz envelope ({len} bytes)")]
    TooShort { len: usize },
    #[error("response prefix does not end in the gviz callback")]
    BadPrefix,
    #[error("response does not end with the gviz `);` trailer")]
    BadTrailer,
    #[error("embedded payload is not valid JSON: {0}")]
    BadJson(#[from] serde_json::Error),
}

/// Unexpected table shape inside an otherwise valid JSON payload.
#[derive(Debug, Error)]
#[error("unexpected gviz table shape: {0}")]
pub struct RowError(#[from] serde_json::Error);

/// Removes the fixed callback framing and hands back the embedded JSON text.
pub fn strip_envelope(body: &str) -> Result<&str, EnvelopeError> {
    let len = body.len();
    if len < ENVELOPE_PREFIX_LEN + ENVELOPE_TRAILER.len() {
        return Err(EnvelopeError::TooShort { len });
    }
    if !body.is_char_boundary(ENVELOPE_PREFIX_LEN)
        || !body[..ENVELOPE_PREFIX_LEN].ends_with(CALLBACK_MARKER)
    {
        return Err(EnvelopeError::BadPrefix);
    }
    if !body.ends_with(ENVELOPE_TRAILER) {
        return Err(EnvelopeError::BadTrailer);
    }
    Ok(&body[ENVELOPE_PREFIX_LEN..len - ENVELOPE_TRAILER.len()])
}

/// Parses the recovered payload text. Syntax failures count against the
/// envelope; shape failures are reported separately by [`decode_table`].
pub fn parse_payload(payload: &str) -> Result<Value, EnvelopeError> {
    Ok(serde_json::from_str(payload)?)
}

/// Decodes the parsed payload into the expected
/// `{ table: { rows: [ { c: [ { v } ] } ] } }` structure.
pub fn decode_table(value: Value) -> Result<QueryResponse, RowError> {
    Ok(serde_json::from_value(value)?)
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    pub table: Table,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Row {
    // gviz emits literal nulls for empty cells.
    #[serde(default)]
    pub c: Vec<Option<Cell>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub v: Option<Value>,
}

/// Count held by one cell. Fraction strings like `"18/192"` yield the
/// numerator; bare numbers pass through; anything absent or malformed is 0.
/// Counts are non-negative, so negative inputs clamp to 0 as well.
pub fn cell_count(cell: Option<&Cell>) -> u32 {
    let Some(value) = cell.and_then(|cell| cell.v.as_ref()) else {
        return 0;
    };
    match value {
        Value::Number(number) => number.as_f64().map(|v| v.max(0.0) as u32).unwrap_or(0),
        Value::String(text) => text
            .split('/')
            .next()
            .unwrap_or("")
            .trim()
            .parse::<i64>()
            .map(|v| v.max(0) as u32)
            .unwrap_or(0),
        _ => 0,
    }
}

/// First-cell counts for every row, in row order. Positionally aligned with
/// the ranges listed in the export request.
pub fn row_values(response: &QueryResponse) -> Vec<u32> {
    response
        .table
        .rows
        .iter()
        .map(|row| cell_count(row.c.first().and_then(|cell| cell.as_ref())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(payload: &str) -> String {
        format!("/*O_o*/\ngoogle.visualization.Query.setResponse({payload});")
    }

    fn cell(value: Value) -> Cell {
        Cell { v: Some(value) }
    }

    #[test]
    fn prefix_constant_matches_real_framing() {
        let body = envelope("{}");
        assert_eq!(&body[..ENVELOPE_PREFIX_LEN], "/*O_o*/\ngoogle.visualization.Query.setResponse(");
    }

    #[test]
    fn strip_recovers_embedded_payload() {
        let payload = r#"{"table":{"rows":[]}}"#;
        let body = envelope(payload);
        assert_eq!(strip_envelope(&body).unwrap(), payload);
    }

    #[test]
    fn round_trip_over_synthetic_envelope() {
        let payload = json!({"table": {"rows": [{"c": [{"v": "18/192"}]}]}});
        let body = envelope(&payload.to_string());
        let stripped = strip_envelope(&body).unwrap();
        assert_eq!(parse_payload(stripped).unwrap(), payload);
    }

    #[test]
    fn short_body_is_rejected() {
        let err = strip_envelope("nope").unwrap_err();
        assert!(matches!(err, EnvelopeError::TooShort { len: 4 }));
    }

    #[test]
    fn wrong_prefix_is_rejected() {
        let body = format!("{}{{}});", "x".repeat(ENVELOPE_PREFIX_LEN));
        assert!(matches!(
            strip_envelope(&body).unwrap_err(),
            EnvelopeError::BadPrefix
        ));
    }

    #[test]
    fn missing_trailer_is_rejected() {
        let mut body = envelope("{}");
        body.pop();
        assert!(matches!(
            strip_envelope(&body).unwrap_err(),
            EnvelopeError::BadTrailer
        ));
    }

    #[test]
    fn garbage_payload_is_a_json_error() {
        let body = envelope("not json at all");
        let stripped = strip_envelope(&body).unwrap();
        assert!(matches!(
            parse_payload(stripped).unwrap_err(),
            EnvelopeError::BadJson(_)
        ));
    }

    #[test]
    fn wrong_shape_is_a_row_error() {
        let value = json!({"table": {"rows": "not-an-array"}});
        assert!(decode_table(value).is_err());
    }

    #[test]
    fn fraction_string_yields_numerator() {
        assert_eq!(cell_count(Some(&cell(json!("18/192")))), 18);
        assert_eq!(cell_count(Some(&cell(json!("0/192")))), 0);
    }

    #[test]
    fn bare_number_passes_through() {
        assert_eq!(cell_count(Some(&cell(json!(5)))), 5);
    }

    #[test]
    fn malformed_and_missing_cells_default_to_zero() {
        assert_eq!(cell_count(Some(&cell(json!("abc/192")))), 0);
        assert_eq!(cell_count(Some(&cell(json!(null)))), 0);
        assert_eq!(cell_count(Some(&Cell { v: None })), 0);
        assert_eq!(cell_count(None), 0);
    }

    #[test]
    fn negative_inputs_clamp_to_zero() {
        assert_eq!(cell_count(Some(&cell(json!("-3/192")))), 0);
        assert_eq!(cell_count(Some(&cell(json!(-2)))), 0);
    }

    #[test]
    fn row_values_walk_first_cells_in_order() {
        let value = json!({"table": {"rows": [
            {"c": [{"v": "18/192"}, {"v": "ignored"}]},
            {"c": [null]},
            {"c": [{"v": 16}]},
            {"c": []},
        ]}});
        let table = decode_table(value).unwrap();
        assert_eq!(row_values(&table), vec![18, 0, 16, 0]);
    }
}
