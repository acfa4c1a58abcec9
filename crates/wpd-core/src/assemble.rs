//! PDF assembly of a downloaded page set.
//!
//! Collects the numbered `<i>.png` files from an output directory, in
//! numeric order, normalizes each to an A4-proportioned canvas (fit inside,
//! centered on white, so mixed capture sizes do not skew), and writes one
//! PDF with a page per image.

use anyhow::{bail, Context, Result};
use image::imageops::FilterType;
use image::{DynamicImage, Rgb, RgbImage};
use printpdf::{Image, ImageTransform, Mm, PdfDocument};
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Normalized page canvas in pixels, A4 proportions (210:297).
pub const PAGE_WIDTH_PX: u32 = 2100;
pub const PAGE_HEIGHT_PX: u32 = 2970;

/// A4 page size for the output document.
const PAGE_WIDTH_MM: Mm = Mm(210.0);
const PAGE_HEIGHT_MM: Mm = Mm(297.0);

/// 10 px per mm: a 2100x2970 canvas fills the A4 page exactly.
const PAGE_DPI: f32 = 254.0;

/// Outcome of an assembly run.
#[derive(Debug)]
pub struct AssembleSummary {
    /// Number of page images placed into the document.
    pub page_count: usize,
    /// Path of the written PDF.
    pub output: PathBuf,
}

/// Numbered page images under `dir` (`<i>.png`), sorted numerically.
/// Files that are not a numbered PNG are ignored.
pub fn collect_pages(dir: &Path) -> Result<Vec<(u32, PathBuf)>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("cannot read directory {}", dir.display()))?;

    let mut pages = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let stem = path.file_stem().and_then(|s| s.to_str());
        let ext = path.extension().and_then(|s| s.to_str());
        let (Some(stem), Some(ext)) = (stem, ext) else {
            continue;
        };
        if !ext.eq_ignore_ascii_case("png") {
            continue;
        }
        if let Ok(page) = stem.parse::<u32>() {
            pages.push((page, path));
        }
    }
    pages.sort_by_key(|(page, _)| *page);
    Ok(pages)
}

/// Fits `img` inside a `target_width` x `target_height` white canvas,
/// preserving aspect ratio and centering the result.
pub fn normalize_page(img: &DynamicImage, target_width: u32, target_height: u32) -> RgbImage {
    let resized = img
        .resize(target_width, target_height, FilterType::Lanczos3)
        .to_rgb8();

    let mut canvas = RgbImage::from_pixel(target_width, target_height, Rgb([255, 255, 255]));
    let x = (target_width - resized.width()) / 2;
    let y = (target_height - resized.height()) / 2;
    image::imageops::overlay(&mut canvas, &resized, i64::from(x), i64::from(y));
    canvas
}

/// Assembles every numbered page image under `dir` into one PDF at `output`.
///
/// Pages appear in numeric order, one PDF page per image. Fails when the
/// directory holds no numbered PNGs or any page fails to decode; run an
/// audit first if the set may be incomplete.
pub fn assemble_pdf(dir: &Path, output: &Path, title: &str) -> Result<AssembleSummary> {
    let pages = collect_pages(dir)?;
    if pages.is_empty() {
        bail!("no numbered page images (<i>.png) in {}", dir.display());
    }

    let (doc, first_page, first_layer) =
        PdfDocument::new(title, PAGE_WIDTH_MM, PAGE_HEIGHT_MM, "page");

    for (i, (page, path)) in pages.iter().enumerate() {
        let img =
            image::open(path).with_context(|| format!("could not read {}", path.display()))?;
        let normalized = normalize_page(&img, PAGE_WIDTH_PX, PAGE_HEIGHT_PX);
        tracing::debug!("placing page {} from {}", page, path.display());

        let layer = if i == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_idx, layer_idx) = doc.add_page(PAGE_WIDTH_MM, PAGE_HEIGHT_MM, "page");
            doc.get_page(page_idx).get_layer(layer_idx)
        };
        let pdf_image = Image::from_dynamic_image(&DynamicImage::ImageRgb8(normalized));
        pdf_image.add_to_layer(
            layer,
            ImageTransform {
                dpi: Some(PAGE_DPI),
                ..Default::default()
            },
        );
    }

    let file = fs::File::create(output)
        .with_context(|| format!("could not create {}", output.display()))?;
    doc.save(&mut BufWriter::new(file))
        .with_context(|| format!("could not write {}", output.display()))?;

    tracing::info!("assembled {} page(s) into {}", pages.len(), output.display());
    Ok(AssembleSummary {
        page_count: pages.len(),
        output: output.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 3]) {
        let img = RgbImage::from_pixel(width, height, Rgb(color));
        img.save(dir.join(name)).unwrap();
    }

    #[test]
    fn collect_pages_sorts_numerically() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["10.png", "2.png", "1.png"] {
            fs::write(dir.path().join(name), b"stub").unwrap();
        }
        let pages: Vec<u32> = collect_pages(dir.path())
            .unwrap()
            .into_iter()
            .map(|(page, _)| page)
            .collect();
        assert_eq!(pages, vec![1, 2, 10]);
    }

    #[test]
    fn collect_pages_ignores_unnumbered_and_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("1.png"), b"stub").unwrap();
        fs::write(dir.path().join("cover.png"), b"stub").unwrap();
        fs::write(dir.path().join("notes.txt"), b"stub").unwrap();
        fs::write(dir.path().join("2.png.part"), b"stub").unwrap();
        let pages = collect_pages(dir.path()).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].0, 1);
    }

    #[test]
    fn normalize_fits_tall_canvas_with_white_margins() {
        // A square source on a taller canvas is centered with white above.
        let src = DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 10, Rgb([40, 80, 120])));
        let out = normalize_page(&src, 20, 30);
        assert_eq!((out.width(), out.height()), (20, 30));
        assert_eq!(*out.get_pixel(0, 0), Rgb([255, 255, 255]));
        let center = out.get_pixel(10, 15);
        for (got, want) in center.0.iter().zip([40u8, 80, 120]) {
            assert!((i16::from(*got) - i16::from(want)).abs() <= 2, "center {:?}", center);
        }
    }

    #[test]
    fn normalize_fits_wide_image_by_width() {
        let src = DynamicImage::ImageRgb8(RgbImage::from_pixel(30, 10, Rgb([0, 0, 0])));
        let out = normalize_page(&src, 20, 30);
        assert_eq!((out.width(), out.height()), (20, 30));
        // Fit by width leaves white bands top and bottom.
        assert_eq!(*out.get_pixel(10, 0), Rgb([255, 255, 255]));
        assert_eq!(*out.get_pixel(10, 29), Rgb([255, 255, 255]));
    }

    #[test]
    fn assemble_writes_a_pdf_for_the_page_set() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "1.png", 12, 16, [200, 10, 10]);
        write_png(dir.path(), "2.png", 16, 12, [10, 200, 10]);
        let output = dir.path().join("writeup.pdf");

        let summary = assemble_pdf(dir.path(), &output, "writeup").unwrap();
        assert_eq!(summary.page_count, 2);
        assert_eq!(summary.output, output);

        let bytes = fs::read(&output).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn assemble_empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("writeup.pdf");
        let err = assemble_pdf(dir.path(), &output, "writeup").unwrap_err();
        assert!(err.to_string().contains("no numbered page images"));
        assert!(!output.exists());
    }
}
