use serde_json::{json, Value};

use super::auth::TokenProvider;
use super::credentials::ServiceAccountKey;
use crate::error::{AppError, AppResult};
use crate::models::mood::HEADER;

const SHEETS_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const DRIVE_FILES_BASE: &str = "https://www.googleapis.com/drive/v3/files";

pub fn sheet_url(spreadsheet_id: &str) -> String {
    format!("https://docs.google.com/spreadsheets/d/{spreadsheet_id}")
}

/// The one backing spreadsheet plus its first worksheet.
#[derive(Debug, Clone)]
pub struct SheetHandle {
    pub spreadsheet_id: String,
    pub worksheet_title: String,
}

impl SheetHandle {
    pub fn url(&self) -> String {
        sheet_url(&self.spreadsheet_id)
    }
}

/// Thin client over the Sheets and Drive REST APIs. Every call fetches a
/// (cached) bearer token and performs a single request; there is no retry
/// and no dedup, the next poll is the retry.
#[derive(Clone)]
pub struct SheetsClient {
    http: reqwest::Client,
    auth: TokenProvider,
}

impl SheetsClient {
    pub fn new(key: ServiceAccountKey) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        let auth = TokenProvider::new(key, http.clone());
        Ok(Self { http, auth })
    }

    /// Looks up the spreadsheet by exact name (first match wins); when
    /// absent, creates it, shares it writer-to-anyone-with-the-link, and
    /// writes the header row.
    pub async fn open_or_create(&self, name: &str) -> AppResult<SheetHandle> {
        match self.lookup(name).await? {
            Some(spreadsheet_id) => {
                let worksheet_title = self.first_worksheet_title(&spreadsheet_id).await?;
                Ok(SheetHandle {
                    spreadsheet_id,
                    worksheet_title,
                })
            }
            None => self.create(name).await,
        }
    }

    /// Appends one row in a single call. `valueInputOption=RAW` keeps cell
    /// contents exactly as written, no locale parsing on the sheet side.
    pub async fn append_row(&self, handle: &SheetHandle, fields: &[String]) -> AppResult<()> {
        let token = self.auth.bearer_token().await?;
        let response = self
            .http
            .post(format!(
                "{SHEETS_BASE}/{}/values/{}:append",
                handle.spreadsheet_id, handle.worksheet_title
            ))
            .bearer_auth(&token)
            .query(&[
                ("valueInputOption", "RAW"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&json!({ "values": [fields] }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Append(error_text(response).await));
        }
        Ok(())
    }

    /// Every row of the first worksheet, header included, in storage order
    /// (oldest first, since appends are chronological).
    pub async fn read_all_rows(&self, handle: &SheetHandle) -> AppResult<Vec<Vec<String>>> {
        let token = self.auth.bearer_token().await?;
        let response = self
            .http
            .get(format!(
                "{SHEETS_BASE}/{}/values/{}",
                handle.spreadsheet_id, handle.worksheet_title
            ))
            .bearer_auth(&token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Read(error_text(response).await));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::Parse(format!("malformed values response: {e}")))?;

        let rows = body["values"]
            .as_array()
            .map(|rows| {
                rows.iter()
                    .map(|row| {
                        row.as_array()
                            .map(|cells| {
                                cells
                                    .iter()
                                    .map(|c| c.as_str().unwrap_or_default().to_string())
                                    .collect()
                            })
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(rows)
    }

    async fn lookup(&self, name: &str) -> AppResult<Option<String>> {
        let token = self.auth.bearer_token().await?;
        let response = self
            .http
            .get(DRIVE_FILES_BASE)
            .bearer_auth(&token)
            .query(&[
                ("q", drive_query(name).as_str()),
                ("fields", "files(id,name)"),
                ("pageSize", "1"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Lookup(error_text(response).await));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::Lookup(format!("malformed file listing: {e}")))?;

        Ok(body["files"]
            .as_array()
            .and_then(|files| files.first())
            .and_then(|file| file["id"].as_str())
            .map(str::to_string))
    }

    async fn first_worksheet_title(&self, spreadsheet_id: &str) -> AppResult<String> {
        let token = self.auth.bearer_token().await?;
        let response = self
            .http
            .get(format!("{SHEETS_BASE}/{spreadsheet_id}"))
            .bearer_auth(&token)
            .query(&[("fields", "sheets.properties.title")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Lookup(error_text(response).await));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::Lookup(format!("malformed spreadsheet metadata: {e}")))?;

        body["sheets"][0]["properties"]["title"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| AppError::Lookup("spreadsheet has no worksheets".into()))
    }

    async fn create(&self, name: &str) -> AppResult<SheetHandle> {
        let token = self.auth.bearer_token().await?;
        let response = self
            .http
            .post(SHEETS_BASE)
            .bearer_auth(&token)
            .json(&json!({ "properties": { "title": name } }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Create(error_text(response).await));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::Create(format!("malformed create response: {e}")))?;

        let spreadsheet_id = body["spreadsheetId"]
            .as_str()
            .ok_or_else(|| AppError::Create("create response carried no spreadsheetId".into()))?
            .to_string();
        let worksheet_title = body["sheets"][0]["properties"]["title"]
            .as_str()
            .unwrap_or("Sheet1")
            .to_string();

        self.share_with_link(&spreadsheet_id).await?;

        let handle = SheetHandle {
            spreadsheet_id,
            worksheet_title,
        };
        let header: Vec<String> = HEADER.iter().map(|h| h.to_string()).collect();
        self.append_row(&handle, &header)
            .await
            .map_err(|e| AppError::Create(format!("header write failed: {e}")))?;

        tracing::info!(url = %handle.url(), "Created mood spreadsheet");
        Ok(handle)
    }

    /// Anyone with the link gets write access, so the sheet can be passed
    /// around a team without per-user grants.
    async fn share_with_link(&self, spreadsheet_id: &str) -> AppResult<()> {
        let token = self.auth.bearer_token().await?;
        let response = self
            .http
            .post(format!("{DRIVE_FILES_BASE}/{spreadsheet_id}/permissions"))
            .bearer_auth(&token)
            .json(&json!({ "type": "anyone", "role": "writer" }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Create(format!(
                "sharing failed: {}",
                error_text(response).await
            )));
        }
        Ok(())
    }
}

/// Drive search expression for the backing sheet: exact name, spreadsheets
/// only, trash excluded.
fn drive_query(name: &str) -> String {
    let escaped = name.replace('\\', "\\\\").replace('\'', "\\'");
    format!(
        "name = '{escaped}' and mimeType = 'application/vnd.google-apps.spreadsheet' and trashed = false"
    )
}

async fn error_text(response: reqwest::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    format!("{status}: {body}")
}
