use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use crate::design::{DesignSpec, generate_design, generate_design_seeded};
use crate::export::{ExportOutcome, FileDelivery, run_export};
use crate::foundation::error::{ThumbsmithError, ThumbsmithResult};
use crate::render::{Rasterizer, contrast_color};

/// Description a fresh session starts from.
pub const DEFAULT_DESCRIPTION: &str =
    "Bold AI thumbnail teaching how to grow a YouTube channel fast with automation and storytelling.";

/// Preset briefs offered next to the free-text input.
pub const QUICK_IDEAS: [&str; 3] = [
    "High-energy gaming thumbnail announcing a Fortnite tournament with prizes.",
    "Clean minimalist finance thumbnail revealing how to invest $1000 wisely.",
    "Vibrant travel vlog thumbnail exploring hidden gems in Kyoto, Japan.",
];

/// Editing state: the current description, the design last generated from it, and the export
/// in-flight flag.
///
/// Editing the description does not touch the design; only [`Session::generate`] and
/// [`Session::apply_quick_idea`] replace it.
#[derive(Debug)]
pub struct Session {
    description: String,
    design: DesignSpec,
    seed: Option<u64>,
    exporting: AtomicBool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            description: DEFAULT_DESCRIPTION.to_owned(),
            design: generate_design(DEFAULT_DESCRIPTION),
            seed: None,
            exporting: AtomicBool::new(false),
        }
    }

    /// Pin shape placement to `seed` and regenerate the current design with it.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self.generate();
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn design(&self) -> &DesignSpec {
        &self.design
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replace the design with one generated from the current description.
    pub fn generate(&mut self) -> &DesignSpec {
        self.design = match self.seed {
            Some(seed) => generate_design_seeded(&self.description, seed),
            None => generate_design(&self.description),
        };
        tracing::debug!(title = %self.design.title, "generated design");
        &self.design
    }

    /// Load preset `index` into the description and regenerate.
    pub fn apply_quick_idea(&mut self, index: usize) -> ThumbsmithResult<&DesignSpec> {
        let idea = QUICK_IDEAS.get(index).ok_or_else(|| {
            ThumbsmithError::validation(format!(
                "quick idea index {index} out of range (0..{})",
                QUICK_IDEAS.len()
            ))
        })?;
        self.description = (*idea).to_owned();
        Ok(self.generate())
    }

    /// Badge foreground for the current accent.
    pub fn contrast_accent(&self) -> &'static str {
        contrast_color(&self.design.accent_color)
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting.load(Ordering::Acquire)
    }

    /// Export the current design, stamped with the current time.
    pub fn export(
        &self,
        rasterizer: &dyn Rasterizer,
        delivery: &dyn FileDelivery,
    ) -> ExportOutcome {
        self.export_at(rasterizer, delivery, SystemTime::now())
    }

    /// Export with an explicit timestamp for the file name.
    ///
    /// Returns [`ExportOutcome::Skipped`] while another export on this session is running.
    pub fn export_at(
        &self,
        rasterizer: &dyn Rasterizer,
        delivery: &dyn FileDelivery,
        now: SystemTime,
    ) -> ExportOutcome {
        run_export(&self.exporting, rasterizer, delivery, &self.design, now)
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
