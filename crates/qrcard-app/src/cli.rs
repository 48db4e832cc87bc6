use std::path::{Path, PathBuf};

use clap::Parser;

/// Encode a contact as a vCard for QR codes and `.vcf` export.
#[derive(Debug, Clone, Parser)]
#[command(name = "qrcard", version, about)]
pub struct Cli {
    /// Contact document (JSON). Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Directory to write the `.vcf` file to, overriding the configured one.
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Escape reserved characters, fold long lines and use CRLF.
    #[arg(long)]
    pub strict: bool,

    /// Print the record to stdout instead of writing a file.
    #[arg(long)]
    pub print: bool,
}

/// Where the contact document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactSource {
    Stdin,
    File(PathBuf),
}

impl Cli {
    #[must_use]
    pub fn source(&self) -> ContactSource {
        match self.input.as_deref() {
            None => ContactSource::Stdin,
            Some(path) if path == Path::new("-") => ContactSource::Stdin,
            Some(path) => ContactSource::File(path.to_path_buf()),
        }
    }
}
