//! Asynchronous action script reader
//!
//! Reads actions from a CSV action script in batches.
//!
//! # Design
//!
//! The AsyncReader uses:
//! - csv-async for streaming CSV parsing
//! - the csv_format module for row conversion
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of Actions
//!                  ↓
//!           csv_format module
//!           (ActionCsvRecord, convert_action_record)
//! ```

use crate::io::csv_format::{convert_action_record, ActionCsvRecord};
use crate::types::Action;
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;

/// Asynchronous action script reader
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
    line_num: usize,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader from an async reader
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self {
            csv_reader,
            line_num: 0,
        }
    }

    /// Read a batch of actions
    ///
    /// Reads up to `batch_size` rows. Rows that fail to parse or convert are
    /// logged with their line number and skipped, but still count toward the
    /// batch size.
    ///
    /// # Returns
    ///
    /// The actions converted from the rows read, in script order, and whether
    /// the end of the script was reached
    pub async fn read_batch(&mut self, batch_size: usize) -> (Vec<Action>, bool) {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<ActionCsvRecord>();

        let mut rows = 0;
        while rows < batch_size {
            let Some(result) = records.next().await else {
                return (batch, true);
            };
            rows += 1;
            self.line_num += 1;
            // the header occupies line 1
            let line = self.line_num + 1;

            match result {
                Ok(record) => match convert_action_record(record) {
                    Ok(action) => batch.push(action),
                    Err(e) => tracing::warn!("Line {}: {}", line, e),
                },
                Err(e) => tracing::warn!("Line {}: CSV parse error: {}", line, e),
            }
        }

        (batch, false)
    }
}
