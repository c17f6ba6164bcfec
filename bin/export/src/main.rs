use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    time::{SystemTime, UNIX_EPOCH},
};

use argh::FromArgs;
use image::{
    codecs::{jpeg::JpegEncoder, png::PngEncoder},
    ColorType, ImageEncoder,
};
use swatch::{
    parse_request_with, Color, ExportDefaults, ExportError, ExportRequest, ImageFormat, QueryParams,
};
use tempfile::NamedTempFile;

#[derive(FromArgs)]
/// Render the color of a request query, or a share link, as an image
struct Args {
    /// query string or URL, e.g. "format=hex&formatValue=ff5722&extension=svg"
    #[argh(positional)]
    query: String,

    /// directory to write the image to (default: current directory)
    #[argh(option, short = 'o', default = "PathBuf::from(\".\")")]
    out: PathBuf,

    /// JSON file with the export defaults
    #[argh(option, short = 'd')]
    defaults: Option<PathBuf>,

    /// print the parsed request as JSON instead of writing an image
    #[argh(switch)]
    json: bool,
}

#[derive(thiserror::Error, Debug)]
enum ExportFailure {
    #[error("Failed to read or write a file: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid defaults file: {0}")]
    Defaults(#[from] serde_json::Error),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Failed to encode the image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Image of {0}x{1} pixels is too large to render")]
    TooLarge(u32, u32),
}

/// Largest pixel buffer allocated for a raster image.
const MAX_RASTER_BYTES: usize = 1 << 30;

fn main() -> ExitCode {
    env_logger::init();
    let args: Args = argh::from_env();

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            log::error!("{err:?}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode, ExportFailure> {
    let defaults = match &args.defaults {
        Some(path) => load_defaults(path)?,
        None => ExportDefaults::default(),
    };

    let request = parse_request_with(&QueryParams::parse(&args.query), &defaults);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&request)?);
    }

    if !request.is_valid() {
        for message in request.error_messages() {
            eprintln!("{message}");
        }
        return Ok(ExitCode::FAILURE);
    }

    if args.json {
        return Ok(ExitCode::SUCCESS);
    }

    let export = request.export_request()?;
    let bytes = encode(&export)?;

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let path = args.out.join(export.file_name(timestamp));
    write_atomically(&path, &bytes)?;

    log::info!(
        "wrote {}x{} {} to {}",
        export.width(),
        export.height(),
        export.format().mime_type(),
        path.display()
    );
    println!("{}", path.display());

    Ok(ExitCode::SUCCESS)
}

fn load_defaults(path: &Path) -> Result<ExportDefaults, ExportFailure> {
    let defaults: ExportDefaults = serde_json::from_str(&fs::read_to_string(path)?)?;
    defaults.validate()?;
    Ok(defaults)
}

fn encode(export: &ExportRequest) -> Result<Vec<u8>, ExportFailure> {
    let (width, height) = (export.width(), export.height());
    let mut bytes = Vec::new();

    match export.format() {
        ImageFormat::Svg => bytes = export.svg_document().into_bytes(),
        ImageFormat::Png => {
            let buffer = raster(rgba(export.color()), width, height)?;
            PngEncoder::new(&mut bytes).write_image(&buffer, width, height, ColorType::Rgba8)?;
        }
        ImageFormat::Jpeg => {
            let buffer = raster(flatten(export.color()), width, height)?;
            let quality = export
                .quality()
                .unwrap_or_else(|| ExportDefaults::default().quality);
            let quality = (quality * 100.0)
                .round()
                .clamp(1.0, 100.0) as u8;
            JpegEncoder::new_with_quality(&mut bytes, quality).write_image(
                &buffer,
                width,
                height,
                ColorType::Rgb8,
            )?;
        }
    }

    Ok(bytes)
}

/// Fill a `width` by `height` buffer with `pixel`.
fn raster<const N: usize>(
    pixel: [u8; N],
    width: u32,
    height: u32,
) -> Result<Vec<u8>, ExportFailure> {
    let pixels = (width as usize)
        .checked_mul(height as usize)
        .filter(|pixels| pixels.checked_mul(N).is_some_and(|len| len <= MAX_RASTER_BYTES))
        .ok_or(ExportFailure::TooLarge(width, height))?;
    Ok(pixel.repeat(pixels))
}

fn rgba(color: Color) -> [u8; 4] {
    let alpha = (color.alpha * 255.0).round().clamp(0.0, 255.0) as u8;
    [color.red, color.green, color.blue, alpha]
}

/// JPEG has no alpha channel, so translucent colors are composited onto black.
fn flatten(color: Color) -> [u8; 3] {
    let scale = |channel: u8| (channel as f64 * color.alpha).round().clamp(0.0, 255.0) as u8;
    [scale(color.red), scale(color.green), scale(color.blue)]
}

/// Write `bytes` to `path` so that the file either appears complete or not at
/// all.
fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), ExportFailure> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|err| err.error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch::Size;

    #[test]
    fn flatten_onto_black() {
        assert_eq!(flatten(Color::new(200, 100, 0, 0.5)), [100, 50, 0]);
        assert_eq!(flatten(Color::opaque(1, 2, 3)), [1, 2, 3]);
        assert_eq!(rgba(Color::new(1, 2, 3, 0.5)), [1, 2, 3, 128]);
    }

    #[test]
    fn oversized_rasters_are_rejected() {
        let request = parse_request_with(
            &QueryParams::parse("format=hex&formatValue=fff&size=4294967295x4294967295"),
            &ExportDefaults::default(),
        );
        assert!(request.is_valid());
        let export = request.export_request().unwrap();
        assert!(matches!(
            encode(&export),
            Err(ExportFailure::TooLarge(u32::MAX, u32::MAX))
        ));

        let size = Size::new(20000, 20000);
        let jpeg = ExportRequest::new(Color::BLACK, size, ImageFormat::Jpeg, None).unwrap();
        assert!(matches!(
            encode(&jpeg),
            Err(ExportFailure::TooLarge(20000, 20000))
        ));

        let size = Size::new(u32::MAX, u32::MAX);
        let svg = ExportRequest::new(Color::BLACK, size, ImageFormat::Svg, None).unwrap();
        assert!(encode(&svg).is_ok());
        assert_eq!(raster([1, 2], 2, 1).unwrap(), vec![1, 2, 1, 2]);
    }

    #[test]
    fn writes_every_format() {
        let dir = tempfile::tempdir().unwrap();
        let color = Color::new(255, 87, 34, 0.5);

        for format in [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::Svg] {
            let export = ExportRequest::new(color, Size::new(8, 4), format, Some(0.8)).unwrap();
            let bytes = encode(&export).unwrap();
            let path = dir.path().join(export.file_name(1));
            write_atomically(&path, &bytes).unwrap();

            let written = fs::read(&path).unwrap();
            assert_eq!(written, bytes);
            match format {
                ImageFormat::Png => assert_eq!(&written[1..4], b"PNG"),
                ImageFormat::Jpeg => assert_eq!(&written[..2], &[0xff, 0xd8]),
                ImageFormat::Svg => assert!(written.starts_with(b"<?xml")),
            }
        }
    }
}
