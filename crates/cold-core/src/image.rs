use crate::Error;

/// Owned, contiguous, row-major image.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T> Image<T> {
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, Error> {
        let expected = width.checked_mul(height).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn as_view(&self) -> ImageView<'_, T> {
        ImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    pub fn as_view_mut(&mut self) -> ImageViewMut<'_, T> {
        ImageViewMut {
            width: self.width,
            height: self.height,
            data: &mut self.data,
        }
    }

    /// Applies `f` to every pixel, producing a new image of the same size.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Image<U> {
        Image {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T: Clone> Image<T> {
    pub fn new_fill(width: usize, height: usize, value: T) -> Self {
        let len = width.checked_mul(height).expect("image size overflow");
        Self {
            width,
            height,
            data: vec![value; len],
        }
    }
}

impl<T: Copy> Image<T> {
    /// Returns a copy surrounded on all four sides by `border` pixels of
    /// `value`. Output size is `(width + 2*border, height + 2*border)`.
    pub fn padded(&self, border: usize, value: T) -> Image<T> {
        self.as_view().padded(border, value)
    }
}

impl Image<u8> {
    /// True if every pixel is either `0` or `255`.
    pub fn is_binary(&self) -> bool {
        self.data.iter().all(|&v| v == 0 || v == 255)
    }

    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}

/// Borrowed, row-major view of an [`Image`].
#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a, T> {
    width: usize,
    height: usize,
    data: &'a [T],
}

impl<'a, T> ImageView<'a, T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn row(&self, y: usize) -> &'a [T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&'a T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x)
    }
}

impl<T: Copy> ImageView<'_, T> {
    /// Copies the view into an owned image.
    pub fn to_image(&self) -> Image<T> {
        Image {
            width: self.width,
            height: self.height,
            data: self.data.to_vec(),
        }
    }

    pub fn padded(&self, border: usize, value: T) -> Image<T> {
        let out_w = self.width + 2 * border;
        let out_h = self.height + 2 * border;
        let mut data = Vec::with_capacity(out_w * out_h);

        data.extend(std::iter::repeat_n(value, out_w * border));
        for y in 0..self.height {
            data.extend(std::iter::repeat_n(value, border));
            data.extend_from_slice(self.row(y));
            data.extend(std::iter::repeat_n(value, border));
        }
        data.extend(std::iter::repeat_n(value, out_w * border));

        Image {
            width: out_w,
            height: out_h,
            data,
        }
    }
}

/// Mutable row access into an [`Image`], used by filters writing output rows.
#[derive(Debug)]
pub struct ImageViewMut<'a, T> {
    width: usize,
    height: usize,
    data: &'a mut [T],
}

impl<T> ImageViewMut<'_, T> {
    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }
}

#[cfg(test)]
mod tests {
    use super::Image;
    use crate::Error;

    #[test]
    fn from_vec_rejects_wrong_length() {
        let err = Image::from_vec(3, 2, vec![0u8; 5]).expect_err("length mismatch");
        assert_eq!(
            err,
            Error::SizeMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn view_rows_and_bounds() {
        let img = Image::from_vec(3, 2, vec![1u8, 2, 3, 4, 5, 6]).expect("valid image");
        let view = img.as_view();

        assert_eq!(view.row(0), &[1, 2, 3]);
        assert_eq!(view.row(1), &[4, 5, 6]);
        assert_eq!(view.get(2, 1), Some(&6));
        assert_eq!(view.get(3, 1), None);
        assert_eq!(view.to_image(), img);
    }

    #[test]
    fn padded_surrounds_with_constant_and_keeps_interior() {
        let img = Image::from_vec(2, 2, vec![1u8, 2, 3, 4]).expect("valid image");
        let out = img.padded(2, 255);

        assert_eq!((out.width(), out.height()), (6, 6));
        assert_eq!(out.as_view().row(0), &[255; 6]);
        assert_eq!(out.as_view().row(2), &[255, 255, 1, 2, 255, 255]);
        assert_eq!(out.as_view().row(3), &[255, 255, 3, 4, 255, 255]);
        assert_eq!(out.as_view().row(5), &[255; 6]);
        assert_eq!(img.padded(0, 9u8), img);
    }

    #[test]
    fn binary_check_and_map() {
        let img = Image::from_vec(3, 1, vec![0u8, 255, 255]).expect("valid image");
        assert!(img.is_binary());

        let inverted = img.map(|&v| 255 - v);
        assert_eq!(inverted.data(), &[255, 0, 0]);
        assert!(!img.map(|&v| v / 2).is_binary());
    }

    #[test]
    fn view_mut_writes_through() {
        let mut img = Image::new_fill(3, 2, 0u8);
        {
            let mut view = img.as_view_mut();
            view.row_mut(1)[2] = 7;
            view.row_mut(0)[0] = 3;
        }
        assert_eq!(img.data(), &[3, 0, 0, 0, 0, 7]);
    }
}
