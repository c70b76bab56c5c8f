//! Developer utility: run one gateway operation against the live backend.
//!
//! Output is exactly what a marketplace caller would receive, including the
//! degraded forms when the backend is unreachable. Requires `GEMINI_API_URL`
//! and `GEMINI_API_KEY` in the environment or a `.env` file.

use anyhow::Result;
use clap::{Parser, Subcommand};
use marketplace_ai::config::Config;
use marketplace_ai::gateway::{
    object_or_degraded, text_or_degraded, AiGateway, AiService, SearchCriteria,
};
use marketplace_ai::Error;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "gateway-probe")]
#[command(about = "Run one marketplace AI operation from the command line")]
struct CliArgs {
    #[command(subcommand)]
    operation: Operation,
}

#[derive(Debug, Subcommand)]
enum Operation {
    /// Generate a marketing description for a listing.
    Describe { details: String },
    /// Ask the marketplace assistant a question.
    Chat { question: String },
    /// Extract location and price bounds from a search query.
    SearchCriteria { query: String },
    /// Report on the neighborhood around a location.
    Neighborhood { location: String },
    /// Read style, features and a price range off a property photo.
    ImageCriteria { image: PathBuf },
    /// Suggest a redesign of a room photo toward a target style.
    Redesign { image: PathBuf, style: String },
    /// Analyze a listing as an investment.
    Investment { details: String },
    /// Draft an offer letter for a listing.
    Offer {
        details: String,
        amount: String,
        conditions: String,
    },
    /// Summarize a photographed document.
    Summarize { image: PathBuf },
    /// Score an amenity list for lifestyle fit.
    Lifestyle { amenities: String },
}

/// Extension-based MIME guess; anything unrecognized is treated as JPEG.
fn guess_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("heic") => "image/heic",
        _ => "image/jpeg",
    }
}

fn load_image(path: &Path) -> marketplace_ai::Result<(Vec<u8>, &'static str)> {
    let bytes = std::fs::read(path)
        .map_err(|e| Error::Encoding(format!("could not read {}: {}", path.display(), e)))?;
    Ok((bytes, guess_mime(path)))
}

fn render_object(object: serde_json::Map<String, Value>) -> marketplace_ai::Result<String> {
    Ok(serde_json::to_string_pretty(&Value::Object(object))?)
}

async fn run(gateway: &AiGateway, operation: Operation) -> marketplace_ai::Result<String> {
    Ok(match operation {
        Operation::Describe { details } => {
            text_or_degraded(gateway.generate_description(&details).await)
        }
        Operation::Chat { question } => text_or_degraded(gateway.chat(&question).await),
        Operation::SearchCriteria { query } => {
            let object = object_or_degraded(gateway.extract_search_criteria(&query).await);
            let criteria = SearchCriteria::from_object(&object);
            format!("{}\nparsed: {:?}", render_object(object)?, criteria)
        }
        Operation::Neighborhood { location } => {
            text_or_degraded(gateway.neighborhood_report(&location).await)
        }
        Operation::ImageCriteria { image } => {
            let (bytes, mime_type) = load_image(&image)?;
            render_object(object_or_degraded(
                gateway.extract_criteria_from_image(&bytes, mime_type).await,
            ))?
        }
        Operation::Redesign { image, style } => {
            let (bytes, mime_type) = load_image(&image)?;
            text_or_degraded(
                gateway
                    .interior_design_advice(&bytes, mime_type, &style)
                    .await,
            )
        }
        Operation::Investment { details } => render_object(object_or_degraded(
            gateway.investment_analysis(&details).await,
        ))?,
        Operation::Offer {
            details,
            amount,
            conditions,
        } => text_or_degraded(gateway.offer_letter(&details, &amount, &conditions).await),
        Operation::Summarize { image } => {
            let (bytes, mime_type) = load_image(&image)?;
            text_or_degraded(gateway.summarize_document(&bytes, mime_type).await)
        }
        Operation::Lifestyle { amenities } => {
            render_object(object_or_degraded(gateway.lifestyle_score(&amenities).await))?
        }
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marketplace_ai=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting gateway-probe");

    let args = CliArgs::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    let gateway = AiGateway::new(&config);

    match run(&gateway, args.operation).await {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            error!("Probe failed: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::guess_mime;
    use std::path::Path;

    #[test]
    fn test_guess_mime_known_extensions() {
        assert_eq!(guess_mime(Path::new("room.png")), "image/png");
        assert_eq!(guess_mime(Path::new("house.WEBP")), "image/webp");
        assert_eq!(guess_mime(Path::new("deed.heic")), "image/heic");
    }

    #[test]
    fn test_guess_mime_defaults_to_jpeg() {
        assert_eq!(guess_mime(Path::new("photo.jpg")), "image/jpeg");
        assert_eq!(guess_mime(Path::new("photo.jpeg")), "image/jpeg");
        assert_eq!(guess_mime(Path::new("scan.tiff")), "image/jpeg");
        assert_eq!(guess_mime(Path::new("no_extension")), "image/jpeg");
    }
}
