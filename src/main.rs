mod cli;

use imgvault::{config, images::ImageService, server};
use imgvault_store::ImageStore;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

async fn start_server(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<&std::path::Path>,
) -> Result<()> {
    // Load config
    let mut config = config::load_config_or_default(config_path)?;

    // Override host/port from CLI if specified
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    tracing::info!("Starting imgvault server");
    tracing::info!(
        "Server will listen on {}:{}",
        config.server.host,
        config.server.port
    );
    tracing::info!(
        "Storing blobs in {:?}, metadata in {:?}",
        config.storage.blob_dir,
        config.storage.metadata_dir
    );

    server::start_server(config).await
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "imgvault=trace,imgvault_store=trace,imgvault_codec=trace,tower_http=debug"
                .to_string()
        } else {
            "imgvault=debug,imgvault_store=info,imgvault_codec=info,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Start { host, port } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(start_server(host, port, cli.config.as_deref()))
        }
        Commands::Upload { file } => upload_file(&file, cli.config.as_deref()),
        Commands::Retrieve { id, format, output } => {
            retrieve_image(&id, format.as_deref(), output, cli.config.as_deref())
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("imgvault {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn build_service(config_path: Option<&std::path::Path>) -> Result<ImageService> {
    let config = config::load_config_or_default(config_path)?;
    let store = ImageStore::new(config.storage.blob_dir, config.storage.metadata_dir)?;
    Ok(ImageService::new(store))
}

fn upload_file(file: &std::path::Path, config_path: Option<&std::path::Path>) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("Input file does not exist: {:?}", file);
    }

    let filename = file
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Input path has no usable filename: {:?}", file))?;

    let service = build_service(config_path)?;
    let data = std::fs::read(file)?;
    let uploaded = service.upload(&data, filename)?;

    println!("image_id: {}", uploaded.id);
    println!("extension: {}", uploaded.extension);
    Ok(())
}

fn retrieve_image(
    id: &str,
    format: Option<&str>,
    output: Option<std::path::PathBuf>,
    config_path: Option<&std::path::Path>,
) -> Result<()> {
    let service = build_service(config_path)?;
    let retrieved = service.retrieve(id, format)?;

    let output = output.unwrap_or_else(|| {
        std::path::PathBuf::from(format!("{}.{}", id, retrieved.format))
    });
    std::fs::write(&output, &retrieved.bytes)?;

    println!(
        "Wrote {} bytes ({}) to {:?}",
        retrieved.bytes.len(),
        retrieved.format,
        output
    );
    Ok(())
}

fn validate_config(path: Option<&std::path::Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Server: {}:{}", config.server.host, config.server.port);
            println!("  Blob dir: {:?}", config.storage.blob_dir);
            println!("  Metadata dir: {:?}", config.storage.metadata_dir);
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Server: {}:{}", config.server.host, config.server.port);
            println!("  Blob dir: {:?}", config.storage.blob_dir);
            println!("  Metadata dir: {:?}", config.storage.metadata_dir);
        }
    }

    Ok(())
}
