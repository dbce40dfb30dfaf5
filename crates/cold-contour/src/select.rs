use cold_core::ImageView;
use log::debug;

use crate::trace::{Contour, find_contours};

/// All borders of `img` ordered by enclosed area, largest first.
///
/// Equal areas keep their discovery order. With `drop_frame` the largest
/// contour is removed, which for an image padded with a foreground border is
/// the frame around the whole image. `id` and `parent` keep referring to
/// discovery order.
pub fn extract_shape_contours(img: &ImageView<'_, u8>, drop_frame: bool) -> Vec<Contour> {
    let mut ranked: Vec<(f64, Contour)> = find_contours(img)
        .into_iter()
        .map(|c| (c.area(), c))
        .collect();
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

    let skip = usize::from(drop_frame && !ranked.is_empty());
    if let Some((area, _)) = ranked.first().filter(|_| skip == 1) {
        debug!("dropping frame contour with area {area}");
    }

    let contours: Vec<Contour> = ranked.into_iter().skip(skip).map(|(_, c)| c).collect();
    debug!(
        "extracted {} shape contours from {}x{} image",
        contours.len(),
        img.width(),
        img.height()
    );
    contours
}

#[cfg(test)]
mod tests {
    use cold_core::Image;

    use super::extract_shape_contours;

    fn blocks(size: usize, rects: &[(usize, usize, usize, usize)]) -> Image<u8> {
        let mut data = vec![0u8; size * size];
        for &(x0, y0, x1, y1) in rects {
            for y in y0..y1 {
                for x in x0..x1 {
                    data[y * size + x] = 255;
                }
            }
        }
        Image::from_vec(size, size, data).expect("valid image")
    }

    #[test]
    fn sorted_by_area_descending() {
        let img = blocks(20, &[(1, 1, 4, 4), (6, 6, 16, 16), (17, 1, 19, 3)]);
        let contours = extract_shape_contours(&img.as_view(), false);

        assert_eq!(contours.len(), 3);
        let areas: Vec<f64> = contours.iter().map(|c| c.area()).collect();
        assert!(areas.windows(2).all(|w| w[0] >= w[1]));
        assert!((areas[0] - 81.0).abs() < 1e-9);
    }

    #[test]
    fn padded_frame_is_dropped() {
        let mask = blocks(12, &[(4, 4, 8, 8)]).map(|&v| 255 - v);
        let padded = mask.padded(3, 255);

        let all = extract_shape_contours(&padded.as_view(), false);
        let shapes = extract_shape_contours(&padded.as_view(), true);

        assert_eq!(all.len(), 2);
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0], all[1]);
        assert!(all[0].area() > shapes[0].area());
    }

    #[test]
    fn frame_only_image_yields_nothing() {
        let img = Image::new_fill(8, 8, 255u8);
        assert!(extract_shape_contours(&img.as_view(), true).is_empty());
        assert_eq!(extract_shape_contours(&img.as_view(), false).len(), 1);

        let blank = Image::new_fill(8, 8, 0u8);
        assert!(extract_shape_contours(&blank.as_view(), true).is_empty());
    }
}
