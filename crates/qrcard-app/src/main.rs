use clap::Parser;
use qrcard_app::cli::Cli;
use qrcard_app::config::{encode_options, load_config, with_cli_overrides};
use qrcard_app::export::{export_contact, print_contact, read_contact};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    // stdout is reserved for --print
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let cli = Cli::parse();

    let config = with_cli_overrides(load_config()?, &cli);

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let contact = read_contact(&cli.source()).await?;
    let options = encode_options(&config);

    if cli.print {
        print_contact(&contact, &config, options).await?;
    } else {
        let outcome = export_contact(&contact, &config, options).await?;
        tracing::info!(
            path = %outcome.path.display(),
            length = outcome.record.utf16_len(),
            threshold = config.qr.scan_threshold,
            density = ?outcome.density,
            "Export complete"
        );
    }

    Ok(())
}
