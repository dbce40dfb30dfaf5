use cold_core::{Error, Image, ImageView};

// ITU-R BT.601 luma weights in 14-bit fixed point.
const R_WEIGHT: u32 = 4899;
const G_WEIGHT: u32 = 9617;
const B_WEIGHT: u32 = 1868;
const SHIFT: u32 = 14;

/// Combines three equally sized channel planes into a luma plane,
/// `Y = 0.299 R + 0.587 G + 0.114 B`, rounded.
pub fn luma_from_rgb(
    r: &ImageView<'_, u8>,
    g: &ImageView<'_, u8>,
    b: &ImageView<'_, u8>,
) -> Result<Image<u8>, Error> {
    let expected = (r.width(), r.height());
    for plane in [g, b] {
        let actual = (plane.width(), plane.height());
        if actual != expected {
            return Err(Error::ChannelMismatch { expected, actual });
        }
    }

    let mut data = Vec::with_capacity(r.width() * r.height());
    for y in 0..r.height() {
        for ((&rv, &gv), &bv) in r.row(y).iter().zip(g.row(y)).zip(b.row(y)) {
            let acc = R_WEIGHT * u32::from(rv) + G_WEIGHT * u32::from(gv) + B_WEIGHT * u32::from(bv);
            data.push(((acc + (1 << (SHIFT - 1))) >> SHIFT) as u8);
        }
    }

    Image::from_vec(r.width(), r.height(), data)
}
