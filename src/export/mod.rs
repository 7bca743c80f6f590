//! PNG export of a rendered design.
//!
//! One export runs at a time per in-flight flag; failures are logged and reported as
//! [`ExportOutcome::Failed`] instead of propagating.

mod delivery;
mod exporter;
mod png;

pub use delivery::{DirectoryDelivery, FileDelivery, InMemoryDelivery};
pub use exporter::{ExportGuard, ExportOutcome, export_file_name, export_png, run_export};
pub use png::{encode_png, unpremultiply};
