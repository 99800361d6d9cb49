//! Temporary text files and sample content.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// Opening of a plain-text ebook, used as a realistic ingestion sample.
pub const SAMPLE_TEXT: &str = "The Project Gutenberg eBook of Frankenstein; Or, The Modern Prometheus\n\
This ebook is for the use of anyone anywhere in the United States and\n\
most other parts of the world at no cost and with almost no restrictions\n\
whatsoever. You may copy it, give it away or re-use it under the terms\n\
of the Project Gutenberg License included with this ebook or online\n\
at www.gutenberg.org.\n\
\n\
Title: Frankenstein; Or, The Modern Prometheus\n\
Author: Mary Wollstonecraft Shelley\n";

/// `n` lines of the form `line 0001`, each ending in a newline.
pub fn numbered_lines(n: usize) -> String {
    (1..=n).map(|i| format!("line {i:04}\n")).collect()
}

/// A temporary file holding fixed content, removed on drop.
pub struct TextFile {
    file: NamedTempFile,
}

impl TextFile {
    /// Create a temporary file containing `contents`.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be created or written.
    pub fn new(contents: impl AsRef<[u8]>) -> Self {
        let mut file = NamedTempFile::new().expect("create temporary file");
        file.write_all(contents.as_ref())
            .expect("write temporary file");
        file.flush().expect("flush temporary file");
        Self { file }
    }

    /// A file holding [`SAMPLE_TEXT`].
    pub fn sample() -> Self {
        Self::new(SAMPLE_TEXT)
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl AsRef<Path> for TextFile {
    fn as_ref(&self) -> &Path {
        self.path()
    }
}
