//! Append-only log of completed orders.
//!
//! Records are plain text for operators to read, not for machines to parse.
//! Each record starts with an RFC 3339 timestamp. Writes go through a
//! [`LogSink`] so the backing store can change without touching callers.

use std::fmt::Write as _;
use std::fs::{File, OpenOptions};
use std::io::{self, Write as _};
use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, SecondsFormat, Utc};
use tiny_shop_core::{CartItem, Order, format_amount};

/// Destination for log records.
pub trait LogSink: Send + Sync {
    /// Append `text` to the sink. `text` already ends with a newline.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the record could not be written.
    fn append(&self, text: &str) -> io::Result<()>;
}

/// Appends records to a file opened once at startup.
#[derive(Debug)]
pub struct FileSink {
    file: Mutex<File>,
}

impl FileSink {
    /// Open `path` for appending, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl LogSink for FileSink {
    fn append(&self, text: &str) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("order log lock poisoned"))?;
        file.write_all(text.as_bytes())?;
        file.flush()
    }
}

/// Keeps records in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<String>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All records appended so far.
    #[must_use]
    pub fn records(&self) -> Vec<String> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }
}

impl LogSink for MemorySink {
    fn append(&self, text: &str) -> io::Result<()> {
        self.records
            .lock()
            .map_err(|_| io::Error::other("order log lock poisoned"))?
            .push(text.to_string());
        Ok(())
    }
}

/// Writes order and cart activity records to a sink.
///
/// Cheaply cloneable. A failed write is reported through `tracing` and never
/// propagated to the request that caused it.
#[derive(Clone)]
pub struct OrderLog {
    sink: Arc<dyn LogSink>,
}

impl std::fmt::Debug for OrderLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderLog").finish_non_exhaustive()
    }
}

impl OrderLog {
    #[must_use]
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    /// Open a file-backed log at `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::new(Arc::new(FileSink::open(path)?)))
    }

    /// Append a completed order.
    pub fn record(&self, order: &Order) {
        self.write(&format_order(order, order.placed_at()));
    }

    /// Append a cart addition.
    pub fn record_addition(&self, item: &CartItem) {
        self.write(&format!(
            "{} {}\n",
            timestamp(Utc::now()),
            addition_message(item)
        ));
    }

    fn write(&self, text: &str) {
        if let Err(e) = self.sink.append(text) {
            tracing::warn!(error = %e, "Failed to write order log record");
        }
    }
}

/// Human-readable summary of a cart addition, shared with the HTTP response.
#[must_use]
pub fn addition_message(item: &CartItem) -> String {
    format!(
        "Added {} of {} to the cart",
        item.quantity, item.product.name
    )
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Render an order as a multi-line record.
fn format_order(order: &Order, at: DateTime<Utc>) -> String {
    let mut out = format!("{} Order Details:\n", timestamp(at));
    // Writing to a String cannot fail.
    let _ = writeln!(out, "  payment_type: {}", order.payment_type());
    let _ = writeln!(out, "  address: {}", order.address());
    let _ = writeln!(out, "  items:");
    for item in order.items() {
        let _ = writeln!(
            out,
            "    - {} x {} (#{}, {}) @ {} = {}",
            item.quantity,
            item.product.name,
            item.product.id,
            item.product.category,
            format_amount(item.product.price),
            format_amount(item.line_total()),
        );
    }
    let _ = writeln!(out, "  total: {}", format_amount(order.total_amount()));
    out
}
