use chrono::Local;
use tokio::sync::OnceCell;

use crate::error::AppResult;
use crate::models::mood::MoodEntry;
use crate::sheets::{SheetHandle, SheetsClient};

/// Domain-level wrapper around the spreadsheet client. Owns the fixed
/// Timestamp/Mood/Note schema and the one cached [`SheetHandle`], so the
/// sheet is looked up (or created) at most once per process.
pub struct MoodStore {
    client: SheetsClient,
    spreadsheet_name: String,
    handle: OnceCell<SheetHandle>,
}

impl MoodStore {
    pub fn new(client: SheetsClient, spreadsheet_name: String) -> Self {
        Self {
            client,
            spreadsheet_name,
            handle: OnceCell::new(),
        }
    }

    /// Resolves the backing sheet on first use; later calls reuse the
    /// cached handle. A failure here is per-request, not fatal.
    async fn handle(&self) -> AppResult<&SheetHandle> {
        self.handle
            .get_or_try_init(|| self.client.open_or_create(&self.spreadsheet_name))
            .await
    }

    /// The sheet URL, once the handle has been resolved at least once.
    pub fn sheet_url(&self) -> Option<String> {
        self.handle.get().map(SheetHandle::url)
    }

    /// Stamps the current wall-clock time and appends one row. The tag is
    /// written as given; catalog membership is the caller's concern.
    pub async fn log(&self, mood_tag: &str, note: &str) -> AppResult<()> {
        let handle = self.handle().await?;
        let row = MoodEntry::to_row(Local::now().naive_local(), mood_tag, note);
        self.client.append_row(handle, &row).await
    }

    /// Every entry in storage (chronological) order, plus the spreadsheet
    /// id when known. Degrades to an empty list when the sheet is
    /// unreachable or has no data rows; unparseable rows are skipped.
    pub async fn load_all(&self) -> (Vec<MoodEntry>, Option<String>) {
        let handle = match self.handle().await {
            Ok(handle) => handle,
            Err(e) => {
                tracing::warn!(error = %e, "Spreadsheet unavailable, serving empty data");
                return (Vec::new(), None);
            }
        };

        let rows = match self.client.read_all_rows(handle).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read mood rows, serving empty data");
                return (Vec::new(), Some(handle.spreadsheet_id.clone()));
            }
        };

        let mut entries = Vec::new();
        for row in rows.iter().skip(1) {
            match MoodEntry::from_row(row) {
                Some(entry) => entries.push(entry),
                None => tracing::warn!(?row, "Skipping unparseable mood row"),
            }
        }

        (entries, Some(handle.spreadsheet_id.clone()))
    }
}
