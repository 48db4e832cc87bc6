pub use qrcard_core::config::*;
use qrcard_rfc::rfc::vcard::EncodeOptions;

use crate::cli::Cli;

/// ## Summary
/// Applies command-line overrides on top of the loaded settings.
#[must_use]
pub fn with_cli_overrides(mut settings: Settings, cli: &Cli) -> Settings {
    if let Some(dir) = &cli.out_dir {
        settings.output.directory = dir.to_string_lossy().into_owned();
    }

    if cli.strict {
        let strict = EncodeOptions::strict();
        settings.encoding = EncodingConfig {
            escaping: strict.escaping,
            line_ending: strict.line_ending,
            fold_lines: strict.fold_lines,
        };
    }

    settings
}

/// ## Summary
/// Returns the encoder options selected by the settings.
#[must_use]
pub fn encode_options(settings: &Settings) -> EncodeOptions {
    EncodeOptions::from(&settings.encoding)
}
