use crate::core::config::data::{path_display, Config};

impl Config {
    /// Human-readable summary used by `codefolio set` with no value.
    pub fn describe(&self) -> Vec<String> {
        let mut lines = vec!["Current configuration:".to_string()];
        match &self.theme {
            Some(theme) => lines.push(format!("  theme: {theme}")),
            None => lines.push("  theme: (unset, dark)".to_string()),
        }
        match self.compact_width {
            Some(width) => lines.push(format!("  compact-width: {width}")),
            None => lines.push(format!("  compact-width: (unset, {})", self.compact_width())),
        }
        match &self.download_dir {
            Some(dir) => lines.push(format!("  download-dir: {}", path_display(dir))),
            None => lines.push(format!(
                "  download-dir: (unset, {})",
                path_display(self.resolved_download_dir())
            )),
        }
        lines
    }

    pub fn print_all(&self) {
        for line in self.describe() {
            println!("{line}");
        }
    }
}
