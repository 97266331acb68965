use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use nexo_pos::application::auth::SessionAuthenticator;
use nexo_pos::application::builder::{MessageBuilder, MessageFactory};
use nexo_pos::domain::message::{MessageBody, NexoMessageParams, ServiceId};
use nexo_pos::domain::response::NexoResponse;
use nexo_pos::infrastructure::http::ReqwestTransport;
use nexo_pos::settings::Settings;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (TOML or JSON). NEXO_POS_* environment variables override it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// Identifiers that override the configured ones for a single request.
#[derive(clap::Args)]
struct RequestIds {
    /// Terminal (POI) id
    #[arg(long)]
    poi_id: Option<String>,

    #[arg(long)]
    sale_id: Option<String>,

    /// Truncated to 10 characters
    #[arg(long)]
    service_id: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Print a host diagnosis request
    Diagnosis {
        #[command(flatten)]
        ids: RequestIds,
    },
    /// Print a payment request
    Payment {
        /// Requested amount, e.g. 5 or 12.50
        #[arg(long, allow_negative_numbers = true)]
        amount: Decimal,

        /// ISO 4217 currency code (defaults to the configured one)
        #[arg(long)]
        currency: Option<String>,

        #[arg(long)]
        transaction_id: Option<String>,

        #[command(flatten)]
        ids: RequestIds,
    },
    /// Exchange an SDK setup token for session data
    Authenticate {
        #[arg(long)]
        setup_token: String,
    },
    /// Decode a Base64 NEXO response returned by the SDK
    Decode {
        payload: String,
    },
}

fn apply_ids(params: &mut NexoMessageParams, ids: RequestIds) {
    if let Some(poi_id) = ids.poi_id {
        params.poi_id = poi_id;
    }
    if let Some(sale_id) = ids.sale_id {
        params.sale_id = sale_id;
    }
    if let Some(service_id) = ids.service_id {
        params.service_id = ServiceId::new(service_id);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).into_diagnostic()?;
    let factory = MessageFactory::new(&settings);

    match cli.command {
        Command::Diagnosis { ids } => {
            let mut params = factory.diagnosis();
            apply_ids(&mut params, ids);
            println!("{}", MessageBuilder::build(&params).into_diagnostic()?);
        }
        Command::Payment {
            amount,
            currency,
            transaction_id,
            ids,
        } => {
            let mut params = factory.payment(amount, currency.as_deref());
            if let (Some(id), MessageBody::Payment(details)) = (transaction_id, &mut params.body) {
                details.transaction_id = id;
            }
            apply_ids(&mut params, ids);
            println!("{}", MessageBuilder::build(&params).into_diagnostic()?);
        }
        Command::Authenticate { setup_token } => {
            if settings.log_bodies {
                warn!("Body logging is enabled; session payloads will appear in the logs");
            }
            let authenticator =
                SessionAuthenticator::from_settings(&settings, Box::new(ReqwestTransport::new()))
                    .into_diagnostic()?;
            let sdk_data = authenticator
                .authenticate(&setup_token)
                .await
                .into_diagnostic()?;
            println!("{}", sdk_data);
        }
        Command::Decode { payload } => {
            let response = NexoResponse::from_base64(&payload).into_diagnostic()?;
            info!(
                category = response.category().unwrap_or("unknown"),
                result = response.result().unwrap_or("unknown"),
                "Decoded NEXO response"
            );
            println!("{}", response.to_display());
        }
    }

    Ok(())
}
