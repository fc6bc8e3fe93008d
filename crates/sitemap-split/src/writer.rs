//! Serialize URL lists as minimal `<urlset>` listing files.

use crate::error::{Result, SplitError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Render `urls` as a listing. URLs are written verbatim, without escaping,
/// and the closing tag has no trailing newline.
pub fn render_urlset<S: AsRef<str>>(urls: &[S]) -> String {
    let mut out = String::from("<urlset>\n");
    for url in urls {
        out.push_str(&format!("  <url><loc>{}</loc></url>\n", url.as_ref()));
    }
    out.push_str("</urlset>");
    out
}

/// Write the listing for `urls` to `path`, replacing any existing file.
pub fn write_urlset<S: AsRef<str>>(path: &Path, urls: &[S]) -> Result<()> {
    let to_write_error = |source: std::io::Error| SplitError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_write_error)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(render_urlset(urls).as_bytes())
        .map_err(to_write_error)?;
    writer.flush().map_err(to_write_error)?;

    info!("wrote {} entries to {}", urls.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty() {
        let urls: [&str; 0] = [];
        assert_eq!(render_urlset(&urls), "<urlset>\n</urlset>");
    }

    #[test]
    fn test_render_entries_in_order() {
        let urls = ["https://www.sccom.cz/b-d2", "https://www.sccom.cz/a-d1"];
        assert_eq!(
            render_urlset(&urls),
            "<urlset>\n  <url><loc>https://www.sccom.cz/b-d2</loc></url>\n  \
             <url><loc>https://www.sccom.cz/a-d1</loc></url>\n</urlset>"
        );
    }

    #[test]
    fn test_render_is_verbatim() {
        let urls = ["https://www.sccom.cz/a-k1?x=1&y=\"2\""];
        assert_eq!(
            render_urlset(&urls),
            "<urlset>\n  <url><loc>https://www.sccom.cz/a-k1?x=1&y=\"2\"</loc></url>\n</urlset>"
        );
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.xml");
        std::fs::write(&path, "stale content that is longer than the new listing").unwrap();

        write_urlset(&path, &["https://www.sccom.cz/foo-d42"]).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "<urlset>\n  <url><loc>https://www.sccom.cz/foo-d42</loc></url>\n</urlset>"
        );
    }

    #[test]
    fn test_unwritable_path_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("products.xml");

        let err = write_urlset(&path, &["https://www.sccom.cz/foo-d42"]).unwrap_err();
        assert!(matches!(err, SplitError::Write { path: ref p, .. } if *p == path));
    }
}
