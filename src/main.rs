//! Batch command-line front end: render each BMP path to stdout.

use std::fs;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use bmptext::{DecodeRequest, DecodedImage, Palette, PixelOrder, RenderRequest, Weighting};

#[derive(Parser)]
#[command(
    name = "bmptext",
    version,
    about = "Render uncompressed 32-bit BMP images as terminal text"
)]
struct Args {
    /// BMP files to render, in order.
    paths: Vec<PathBuf>,

    /// Widest output line, in glyphs.
    #[arg(long, default_value = "140")]
    width: NonZeroU32,

    /// Glyph ramp to map luminance onto.
    #[arg(long, value_enum, default_value = "standard")]
    palette: PaletteArg,

    /// Channel weighting used to compute luminance.
    #[arg(long, value_enum, default_value = "weighted")]
    weighting: WeightingArg,

    /// Print a header summary before each render.
    #[arg(long)]
    info: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PaletteArg {
    Minimal,
    Standard,
    Extended,
}

impl From<PaletteArg> for Palette {
    fn from(arg: PaletteArg) -> Palette {
        match arg {
            PaletteArg::Minimal => Palette::MINIMAL,
            PaletteArg::Standard => Palette::STANDARD,
            PaletteArg::Extended => Palette::EXTENDED,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum WeightingArg {
    Weighted,
    Arithmetic,
    MinMax,
    Luminosity,
}

impl From<WeightingArg> for Weighting {
    fn from(arg: WeightingArg) -> Weighting {
        match arg {
            WeightingArg::Weighted => Weighting::Weighted,
            WeightingArg::Arithmetic => Weighting::Arithmetic,
            WeightingArg::MinMax => Weighting::MinMax,
            WeightingArg::Luminosity => Weighting::Luminosity,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    if args.paths.is_empty() {
        eprintln!("bmptext: no input files");
        return ExitCode::FAILURE;
    }

    // A bad file must never abort its siblings: report it and move on.
    for path in &args.paths {
        if let Err(err) = process(path, &args) {
            eprintln!("bmptext: {}: {err:#}", path.display());
        }
    }
    ExitCode::SUCCESS
}

fn process(path: &Path, args: &Args) -> anyhow::Result<()> {
    let data = fs::read(path).context("reading file")?;
    let image = DecodeRequest::new(&data).decode().context("decoding BMP")?;
    if args.info {
        print_info(path, &image);
    }
    let text = RenderRequest::new(&image)
        .with_palette(args.palette.into())
        .with_target_width(args.width)
        .with_weighting(args.weighting.into())
        .render()
        .context("rendering")?;
    print!("{text}");
    Ok(())
}

fn print_info(path: &Path, image: &DecodedImage<'_>) {
    let file = image.file_header();
    let info = image.info_header();
    let order = match image.pixel_order() {
        PixelOrder::BottomUp => "bottom-up",
        PixelOrder::TopDown => "top-down",
    };
    println!(
        "{}: {}x{} pixels, {} bpp, {} rows, {:.2} MiB, resolution {}x{} ppm",
        path.display(),
        image.width(),
        image.height(),
        info.bits_per_pixel,
        order,
        f64::from(file.file_size) / (1024.0 * 1024.0),
        info.x_pixels_per_meter,
        info.y_pixels_per_meter,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn default_args() -> Args {
        Args {
            paths: Vec::new(),
            width: NonZeroU32::new(140).unwrap(),
            palette: PaletteArg::Standard,
            weighting: WeightingArg::Weighted,
            info: false,
        }
    }

    /// Minimal valid 1x1 all-black 32-bit BMP.
    fn tiny_bmp() -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&58u32.to_le_bytes());
        out.extend_from_slice(&[0u8; 4]);
        out.extend_from_slice(&54u32.to_le_bytes());
        out.extend_from_slice(&40u32.to_le_bytes());
        out.extend_from_slice(&1u32.to_le_bytes());
        out.extend_from_slice(&1i32.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&32u16.to_le_bytes());
        out.extend_from_slice(&[0u8; 24]);
        out.extend_from_slice(&[0, 0, 0, 255]);
        out
    }

    #[test]
    fn palette_arg_maps_to_named_ramps() {
        assert_eq!(Palette::from(PaletteArg::Minimal), Palette::MINIMAL);
        assert_eq!(Palette::from(PaletteArg::Standard), Palette::STANDARD);
        assert_eq!(Palette::from(PaletteArg::Extended), Palette::EXTENDED);
    }

    #[test]
    fn process_renders_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&tiny_bmp()).unwrap();
        assert!(process(file.path(), &default_args()).is_ok());
    }

    #[test]
    fn process_reports_missing_file() {
        let err = process(Path::new("no/such/file.bmp"), &default_args()).unwrap_err();
        assert!(err.to_string().contains("reading file"));
    }

    #[test]
    fn process_reports_garbage_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not a bitmap").unwrap();
        let err = process(file.path(), &default_args()).unwrap_err();
        assert!(err.to_string().contains("decoding BMP"));
    }
}
