//! Outbound request against the published spreadsheet export.
//!
//! One GET per refresh, no auth: the endpoint only answers when the sheet is
//! published to the web or shared link-viewable, which is why the
//! network-level failure messages carry those remediation steps.

use reqwest::Client;
use thiserror::Error;

use super::gviz::{self, EnvelopeError, RowError};
use super::report::ReportState;

pub const SHEET_ID: &str = "1XRwutbGBYRj_gclLjcWc5E4sbP5nKdbehJfb8heWr-g";
pub const SHEET_NAME: &str = "Sheet1";

/// Single-cell ranges fetched per refresh, in positional order:
/// schools registered, schools remaining, schools installed, schools with
/// more than 10 machines, 36-tiết registrations, 72-tiết registrations.
pub const CELL_RANGES: [&str; 6] = ["N4", "N5", "N9", "N10", "N12", "N13"];

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("sheet endpoint answered HTTP {status}")]
    Http { status: u16 },
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),
    #[error(transparent)]
    Rows(#[from] RowError),
}

impl FetchError {
    /// Message shown in the alert banner, one per variant. All failures still
    /// funnel into the same single notification.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Network(_) => format!(
                "Không thể kết nối tới Google Sheets.\n\n{SHARE_HINT}"
            ),
            FetchError::Http { status } => format!(
                "Google Sheets trả về lỗi HTTP {status}.\n\n{SHARE_HINT}"
            ),
            FetchError::Envelope(_) => {
                "Dữ liệu trả về không đúng định dạng gviz. Vui lòng kiểm tra lại trang tính."
                    .to_string()
            }
            FetchError::Rows(_) => {
                "Bảng dữ liệu trả về thiếu hoặc sai cấu trúc ô. Vui lòng kiểm tra lại trang tính."
                    .to_string()
            }
        }
    }
}

const SHARE_HINT: &str = "Vui lòng:\n1. Vào File → Chia sẻ → Xuất bản lên web\n2. Hoặc: Chia sẻ → Mọi người có link đều có thể xem";

pub struct SheetsClient {
    http: Client,
}

impl SheetsClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    /// gviz export URL addressing the six cells of the report tab.
    pub fn export_url() -> String {
        format!(
            "https://docs.google.com/spreadsheets/d/{SHEET_ID}/gviz/tq?tqx=out:json&sheet={SHEET_NAME}&range={}",
            CELL_RANGES.join(",")
        )
    }

    /// One GET against the export endpoint, decoded all the way to a fresh
    /// [`ReportState`].
    pub async fn fetch_report(&self) -> Result<ReportState, FetchError> {
        let response = self.http.get(Self::export_url()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;

        let payload = gviz::strip_envelope(&body)?;
        let value = gviz::parse_payload(payload)?;
        let table = gviz::decode_table(value)?;
        Ok(ReportState::from_values(&gviz::row_values(&table)))
    }
}

impl Default for SheetsClient {
    fn default() -> Self {
        Self::new()
    }
}
