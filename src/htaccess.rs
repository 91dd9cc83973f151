//! Apache `.htaccess` snippet for serving pre-compressed track data.
//!
//! Track data files may be stored gzipped with a trailing `z` on their
//! extension (`trackData.jsonz`). The snippet tells Apache to send those
//! with `Content-Encoding: gzip`, keeps `mod_gzip`/`mod_deflate` from
//! compressing them again, and allows cross-origin reads.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// File name written by [`write`].
pub const HTACCESS_FILE: &str = ".htaccess";

/// Build the `.htaccess` text for the given uncompressed extensions.
pub fn generate<S: AsRef<str>>(extensions: &[S]) -> String {
    let pattern = extensions
        .iter()
        .map(|ext| format!("\\.{}z", ext.as_ref()))
        .collect::<Vec<_>>()
        .join("|");

    let mut out = String::new();
    out.push_str("# Generated by trackdb. Requires mod_headers and AllowOverride FileInfo.\n");

    for ext in extensions {
        out.push_str(&format!("AddEncoding gzip .{}z\n", ext.as_ref()));
    }

    out.push_str("\n<IfModule mod_gzip.c>\n");
    out.push_str(&format!("  mod_gzip_item_exclude \"({})$\"\n", pattern));
    out.push_str("</IfModule>\n");

    out.push_str("\n<IfModule setenvif.c>\n");
    out.push_str(&format!(
        "  SetEnvIf Request_URI \"({})$\" no-gzip dont-vary\n",
        pattern
    ));
    out.push_str("</IfModule>\n");

    out.push_str("\n<IfModule mod_headers.c>\n");
    out.push_str(&format!("  <FilesMatch \"({})$\">\n", pattern));
    out.push_str("    Header onsuccess set Content-Encoding gzip\n");
    out.push_str("  </FilesMatch>\n");
    out.push_str("  Header onsuccess set Access-Control-Allow-Origin *\n");
    out.push_str("  Header onsuccess set Access-Control-Allow-Headers X-Requested-With,Range\n");
    out.push_str("</IfModule>\n");

    out
}

/// Write the snippet to `dir/.htaccess`, returning the written path.
pub fn write<S: AsRef<str>>(dir: &Path, extensions: &[S]) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(HTACCESS_FILE);
    fs::write(&path, generate(extensions))?;
    tracing::info!("Wrote {:?}", path);
    Ok(path)
}
