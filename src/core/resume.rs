//! Placeholder resume download.

use std::error::Error;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::config::io::write_atomically;
use crate::core::constants::RESUME_FILE_NAME;
use crate::core::terminal_log::LogSink;

/// Minimal single-page PDF. The xref entries keep their trailing spaces.
pub const RESUME_PDF: &str = concat!(
    "%PDF-1.4\n",
    "1 0 obj\n",
    "<< /Type /Catalog /Pages 2 0 R >>\n",
    "endobj\n",
    "2 0 obj\n",
    "<< /Type /Pages /Kids [3 0 R] /Count 1 >>\n",
    "endobj\n",
    "3 0 obj\n",
    "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R >>\n",
    "endobj\n",
    "4 0 obj\n",
    "<< /Length 44 >>\n",
    "stream\n",
    "BT\n",
    "/F1 12 Tf\n",
    "100 700 Td\n",
    "(Your Name - Resume) Tj\n",
    "ET\n",
    "endstream\n",
    "endobj\n",
    "xref\n",
    "0 5\n",
    "0000000000 65535 f \n",
    "0000000010 00000 n \n",
    "0000000053 00000 n \n",
    "0000000125 00000 n \n",
    "0000000185 00000 n \n",
    "trailer\n",
    "<< /Size 5 /Root 1 0 R >>\n",
    "startxref\n",
    "279\n",
    "%%EOF",
);

/// Write the resume into `dir`, replacing any earlier copy.
pub fn write_resume(dir: &Path) -> Result<PathBuf, Box<dyn Error>> {
    let target = dir.join(RESUME_FILE_NAME);
    write_atomically(&target, RESUME_PDF.as_bytes())?;
    info!(path = %target.display(), "wrote resume");
    Ok(target)
}

/// Write the resume and report it. Nothing is logged when the write fails.
pub fn download_resume(dir: &Path, log: &mut dyn LogSink) -> Result<PathBuf, Box<dyn Error>> {
    let path = write_resume(dir)?;
    log.log("📄 Resume downloaded successfully!");
    log.log(&format!("💾 File: {RESUME_FILE_NAME}"));
    Ok(path)
}
