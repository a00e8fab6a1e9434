use serde::{Deserialize, Serialize};

/// Capture options for a Save Page Now request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveOptions {
    /// Also capture the pages the target links to.
    pub save_out_links: bool,
    /// Capture the page even if it answers with a 4xx/5xx status.
    pub save_error_pages: bool,
    /// Store a screenshot of the page.
    pub save_screen_shot: bool,
}

impl SaveOptions {
    /// Form fields enabled by these options, in the order they are sent.
    pub fn form_fields(&self) -> Vec<(&'static str, &'static str)> {
        let mut fields = Vec::new();
        if self.save_out_links {
            fields.push(("capture_outlinks", "on"));
        }
        if self.save_error_pages {
            fields.push(("capture_all", "on"));
        }
        if self.save_screen_shot {
            fields.push(("capture_screenshot", "on"));
        }
        fields
    }
}
