use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::design::DesignSpec;
use crate::export::delivery::FileDelivery;
use crate::export::png::encode_png;
use crate::foundation::error::{ThumbsmithError, ThumbsmithResult};
use crate::render::Rasterizer;

/// Result of one export attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The PNG was handed to the delivery under `file_name`.
    Delivered { file_name: String },
    /// Another export was already running; nothing happened.
    Skipped,
    /// Rendering, encoding or delivery failed. The error was logged.
    Failed,
}

impl ExportOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }
}

/// Holds the in-flight flag for the duration of one export and clears it on drop.
#[derive(Debug)]
pub struct ExportGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> ExportGuard<'a> {
    /// `None` when the flag is already set.
    pub fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for ExportGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// `thumbnail-<unix-millis>.png`. Times before the epoch clamp to 0.
pub fn export_file_name(now: SystemTime) -> String {
    let millis = now
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("thumbnail-{millis}.png")
}

/// Render, encode and deliver one thumbnail. Returns the delivered file name.
///
/// The frame must match the rasterizer's canvas exactly.
pub fn export_png(
    rasterizer: &dyn Rasterizer,
    delivery: &dyn FileDelivery,
    design: &DesignSpec,
    now: SystemTime,
) -> ThumbsmithResult<String> {
    let target = rasterizer.canvas();
    let frame = rasterizer.rasterize(design)?;
    if (frame.width, frame.height) != (target.width(), target.height()) {
        return Err(ThumbsmithError::render(format!(
            "rendered {}x{}, expected {}x{}",
            frame.width, frame.height, target.width(), target.height()
        )));
    }

    let bytes = encode_png(&frame)?;
    let file_name = export_file_name(now);
    delivery.deliver(&file_name, &bytes)?;
    tracing::info!(file = %file_name, bytes = bytes.len(), "thumbnail exported");
    Ok(file_name)
}

/// Guarded export: skips while `flag` is held, logs and swallows failures.
pub fn run_export(
    flag: &AtomicBool,
    rasterizer: &dyn Rasterizer,
    delivery: &dyn FileDelivery,
    design: &DesignSpec,
    now: SystemTime,
) -> ExportOutcome {
    let Some(_guard) = ExportGuard::acquire(flag) else {
        tracing::debug!("export already in flight; ignoring request");
        return ExportOutcome::Skipped;
    };

    match export_png(rasterizer, delivery, design, now) {
        Ok(file_name) => ExportOutcome::Delivered { file_name },
        Err(err) => {
            tracing::error!(error = %err, "thumbnail-export-failed");
            ExportOutcome::Failed
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/exporter.rs"]
mod tests;
