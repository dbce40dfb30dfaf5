use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use cold::{BorderKind, Cold, ColdConfig, ColdFeatures, Contour, Extraction, load_config};
use cold_contour::{approx_polygon, arc_length};
use cold_core::Image;
use image::{GrayImage, Rgb, RgbImage};
use log::info;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "cold")]
#[command(about = "Compute the COLD shape descriptor of an image")]
struct Cli {
    /// Input image (PNG, JPEG, BMP, TIFF).
    #[arg(long)]
    img_file: PathBuf,
    /// JSON configuration; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    sharpness_factor: Option<f32>,
    #[arg(long)]
    border_size: Option<usize>,
    /// Write binary.png, reference.png and contours.png into --diag-dir.
    #[arg(long)]
    show_images: bool,
    /// Treat the input as a binary mask.
    #[arg(long)]
    is_binary: bool,
    /// Write features and configuration as JSON.
    #[arg(long)]
    output: Option<PathBuf>,
    #[arg(long, default_value = "cold_diag")]
    diag_dir: PathBuf,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    image: &'a Path,
    config: &'a ColdConfig,
    features: &'a ColdFeatures,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = resolve_config(&cli)?;
    let cold = Cold::new(config).context("validating configuration")?;

    ensure_file_exists(&cli.img_file, "image")?;
    let features = if cold.config().show_images {
        let extraction = cold
            .extract_path_detailed(&cli.img_file)
            .with_context(|| format!("extracting features from {}", cli.img_file.display()))?;
        write_diagnostics(&cli.diag_dir, &extraction, cold.config())?;
        extraction.features
    } else {
        cold.extract_path(&cli.img_file)
            .with_context(|| format!("extracting features from {}", cli.img_file.display()))?
    };

    println!("shape of feature vector: ({},)", features.len());

    if let Some(path) = &cli.output {
        let report = Report {
            image: &cli.img_file,
            config: cold.config(),
            features: &features,
        };
        write_json(path, &report)?;
        info!("wrote {}", path.display());
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<ColdConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path).context("loading configuration")?,
        None => ColdConfig::default(),
    };
    if let Some(v) = cli.sharpness_factor {
        config.sharpness_factor = v;
    }
    if let Some(v) = cli.border_size {
        config.border_size = v;
    }
    config.show_images |= cli.show_images;
    config.is_binary |= cli.is_binary;
    Ok(config)
}

fn write_diagnostics(dir: &Path, extraction: &Extraction, config: &ColdConfig) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating diagnostics directory {}", dir.display()))?;

    save_u8_image(&dir.join("binary.png"), &extraction.binary)?;

    let reference = cold::planes_to_dynamic(&extraction.reference)
        .context("assembling reference image")?;
    let reference_path = dir.join("reference.png");
    reference
        .save(&reference_path)
        .with_context(|| format!("saving image {}", reference_path.display()))?;

    let overlay = render_contour_overlay(
        &extraction.binary,
        &extraction.contours,
        config.descriptor.approx_poly_factor,
    )?;
    let overlay_path = dir.join("contours.png");
    overlay
        .save(&overlay_path)
        .with_context(|| format!("saving image {}", overlay_path.display()))?;

    info!(
        "wrote diagnostics for {} contours to {}",
        extraction.contours.len(),
        dir.display()
    );
    Ok(())
}

/// Binary image dimmed to gray, borders drawn on top (outer red, hole
/// blue) and simplified polygon vertices marked in green.
fn render_contour_overlay(
    binary: &Image<u8>,
    contours: &[Contour],
    approx_poly_factor: f64,
) -> Result<RgbImage> {
    let gray = GrayImage::from_raw(
        binary.width() as u32,
        binary.height() as u32,
        binary.data().iter().map(|&v| v / 2 + 64).collect(),
    )
    .context("constructing GrayImage from binary image")?;
    let mut rgb = image::DynamicImage::ImageLuma8(gray).to_rgb8();

    for contour in contours {
        let color = match contour.kind {
            BorderKind::Outer => Rgb([230, 40, 40]),
            BorderKind::Hole => Rgb([40, 90, 230]),
        };
        for p in &contour.points {
            if p.x >= 0 && p.y >= 0 && (p.x as u32) < rgb.width() && (p.y as u32) < rgb.height() {
                rgb.put_pixel(p.x as u32, p.y as u32, color);
            }
        }

        let eps = approx_poly_factor * arc_length(&contour.points, true);
        for v in approx_polygon(&contour.points, eps, true) {
            draw_dot(&mut rgb, v.x, v.y, Rgb([40, 200, 60]));
        }
    }

    Ok(rgb)
}

fn draw_dot(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            let nx = x + dx;
            let ny = y + dy;
            if nx < 0 || ny < 0 {
                continue;
            }
            let (ux, uy) = (nx as u32, ny as u32);
            if ux >= img.width() || uy >= img.height() {
                continue;
            }
            img.put_pixel(ux, uy, color);
        }
    }
}

fn save_u8_image(path: &Path, img: &Image<u8>) -> Result<()> {
    let gray = cold::to_gray_image(img).context("constructing GrayImage from raw bytes")?;
    gray.save(path)
        .with_context(|| format!("saving image {}", path.display()))
}

fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(path, bytes).with_context(|| format!("writing json {}", path.display()))
}

fn ensure_file_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} file does not exist: {}", what, path.display());
    }
    if !path.is_file() {
        bail!("{} path is not a file: {}", what, path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use cold_core::{Image, Point2i};

    use super::{Cli, render_contour_overlay, resolve_config};
    use cold::{BorderKind, Contour};

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "cold",
            "--img-file",
            "a.png",
            "--sharpness-factor",
            "2.5",
            "--is-binary",
        ]);
        let cfg = resolve_config(&cli).expect("config");
        assert!((cfg.sharpness_factor - 2.5).abs() < 1e-6);
        assert_eq!(cfg.border_size, 3);
        assert!(cfg.is_binary);
        assert!(!cfg.show_images);
        assert_eq!(cli.diag_dir.to_str(), Some("cold_diag"));
    }

    #[test]
    fn flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "border_size": 7, "sharpness_factor": 4.0 }}"#).expect("write");
        let path = file.path().to_str().expect("utf-8 path").to_owned();

        let cli = Cli::parse_from([
            "cold",
            "--img-file",
            "a.png",
            "--config",
            path.as_str(),
            "--border-size",
            "1",
        ]);
        let cfg = resolve_config(&cli).expect("config");
        assert_eq!(cfg.border_size, 1);
        assert!((cfg.sharpness_factor - 4.0).abs() < 1e-6);
    }

    #[test]
    fn overlay_marks_contour_pixels() {
        let binary = Image::new_fill(6, 6, 255u8);
        let contour = Contour {
            id: 0,
            kind: BorderKind::Hole,
            parent: None,
            points: vec![Point2i::new(1, 1), Point2i::new(1, 4), Point2i::new(4, 4)],
        };
        let rgb = render_contour_overlay(&binary, &[contour], 0.01).expect("overlay");
        assert_eq!(rgb.dimensions(), (6, 6));
        assert_eq!(rgb.get_pixel(5, 0).0, [191, 191, 191]);
        assert_ne!(rgb.get_pixel(1, 4).0, [191, 191, 191]);
    }
}
