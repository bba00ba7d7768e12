use alloc::string::{String, ToString};

use crate::errors::{SiteError, SiteResult};

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// fraction of the element that has to be on screen before media loads. 0.0..=1.0
    pub visibility_threshold: f64,
    /// css margin around the viewport. "0px" means no expansion
    pub root_margin: String,
    pub scroll_to_top_on_mount: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            visibility_threshold: 0.1,
            root_margin: "0px".to_string(),
            scroll_to_top_on_mount: true,
        }
    }
}

impl Config {
    pub fn validate(&self) -> SiteResult<()> {
        let threshold = self.visibility_threshold;

        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(SiteError::InvalidThreshold(threshold));
        }

        if self.root_margin.trim().is_empty() {
            return Err(SiteError::EmptyRootMargin);
        }

        Ok(())
    }
}
