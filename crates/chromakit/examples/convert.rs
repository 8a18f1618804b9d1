//! Convert a color given on the command line and show its harmonies and
//! contrast.
//!
//! ```text
//! cargo run --example convert -- rgb "26, 43, 60" "#FFF"
//! ```

use std::process::ExitCode;

use chromakit::error::ConversionError;
use chromakit::harmony::Harmony;
use chromakit::wcag::check_contrast;
use chromakit::{convert_all, parse, Format};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (tag, text) = match args.as_slice() {
        [tag, text, ..] => (tag.as_str(), text.as_str()),
        _ => {
            tracing::error!("usage: convert <format> <color> [<background>]");
            for format in Format::ALL {
                tracing::info!(format = format.tag(), hint = format.hint(), "supported format");
            }
            return ExitCode::FAILURE;
        }
    };
    let background = args.get(2).map_or("", String::as_str);

    if let Err(error) = run(text, tag, background) {
        tracing::warn!(%error, "could not convert color");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(text: &str, tag: &str, background: &str) -> Result<(), ConversionError> {
    let color = parse(text, tag)?;
    tracing::debug!(%color, "parsed color");

    let all = convert_all(color);
    for format in Format::ALL {
        println!("{:>5}  {}", format.name(), all.text(format));
    }
    println!();

    for harmony in Harmony::ALL {
        let colors: Vec<String> = harmony.apply(color).iter().map(ToString::to_string).collect();
        println!("{:>20}  {}", harmony.name(), colors.join("  "));
    }
    println!();

    let report = check_contrast(color, background)?;
    println!("{} on {}: {}", report.foreground, report.background, report);
    Ok(())
}
