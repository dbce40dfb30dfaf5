use crate::image::ImageView;

/// Rule for neighborhood taps that fall outside the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderMode {
    /// Replicate the nearest edge pixel (`aaa|abcd|ddd`).
    Clamp,
    /// Mirror around the edge pixel without repeating it (`dcb|abcd|cba`).
    Reflect101,
    /// The tap does not participate.
    Skip,
}

/// Maps a possibly out-of-range index onto `[0, len)`.
///
/// Returns `None` for an outside index under `Skip`, or when `len == 0`.
pub fn map_index(i: isize, len: usize, mode: BorderMode) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if i >= 0 && (i as usize) < len {
        return Some(i as usize);
    }

    match mode {
        BorderMode::Skip => None,
        BorderMode::Clamp => {
            if i < 0 {
                Some(0)
            } else {
                Some(len - 1)
            }
        }
        BorderMode::Reflect101 => {
            if len == 1 {
                return Some(0);
            }

            let period = (2 * len - 2) as isize;
            let r = i.rem_euclid(period) as usize;
            if r < len {
                Some(r)
            } else {
                Some((2 * len - 2) - r)
            }
        }
    }
}

/// Reads the pixel at `(x, y)` resolving out-of-image taps with `mode`.
///
/// `None` means the tap is skipped.
pub fn tap<T: Copy>(img: &ImageView<'_, T>, x: isize, y: isize, mode: BorderMode) -> Option<T> {
    let mx = map_index(x, img.width(), mode)?;
    let my = map_index(y, img.height(), mode)?;
    img.get(mx, my).copied()
}
