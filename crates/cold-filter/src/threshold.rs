use cold_core::{Image, ImageView};

/// Otsu threshold over the 256-bin intensity histogram.
///
/// Returns the level `t` maximizing the between-class variance of
/// `{v <= t}` and `{v > t}`; the first maximum wins. Levels leaving one class
/// empty are never selected, so a uniform (or empty) image yields `0`.
pub fn otsu_threshold_u8(src: &ImageView<'_, u8>) -> u8 {
    let mut histogram = [0u64; 256];
    for y in 0..src.height() {
        for &v in src.row(y) {
            histogram[v as usize] += 1;
        }
    }

    let total = src.width() as u64 * src.height() as u64;
    if total == 0 {
        return 0;
    }

    let sum_total: f64 = histogram
        .iter()
        .enumerate()
        .map(|(i, &count)| i as f64 * count as f64)
        .sum();

    let mut sum_background = 0.0f64;
    let mut weight_background = 0u64;
    let mut max_variance = 0.0f64;
    let mut best = 0u8;

    for (t, &count) in histogram.iter().enumerate() {
        weight_background += count;
        sum_background += t as f64 * count as f64;
        if weight_background == 0 {
            continue;
        }
        let weight_foreground = total - weight_background;
        if weight_foreground == 0 {
            break;
        }

        let mean_background = sum_background / weight_background as f64;
        let mean_foreground = (sum_total - sum_background) / weight_foreground as f64;
        let variance = weight_background as f64
            * weight_foreground as f64
            * (mean_background - mean_foreground).powi(2);

        if variance > max_variance {
            max_variance = variance;
            best = t as u8;
        }
    }

    best
}

/// `v > thresh -> 255`, otherwise `0`.
pub fn threshold_binary_u8(src: &ImageView<'_, u8>, thresh: u8) -> Image<u8> {
    let mut data = Vec::with_capacity(src.width() * src.height());
    for y in 0..src.height() {
        data.extend(src.row(y).iter().map(|&v| if v > thresh { 255 } else { 0 }));
    }
    Image::from_vec(src.width(), src.height(), data).expect("threshold output matches input size")
}

/// Otsu level selection followed by binary thresholding.
pub fn otsu_binarize_u8(src: &ImageView<'_, u8>) -> (u8, Image<u8>) {
    let t = otsu_threshold_u8(src);
    (t, threshold_binary_u8(src, t))
}
