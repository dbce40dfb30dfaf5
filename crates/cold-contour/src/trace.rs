use cold_core::{ImageView, Point2i};

use crate::polygon::{arc_length, contour_area};

// Neighbor order: E, NE, N, NW, W, SW, S, SE. Increasing index turns
// counterclockwise on screen (y down); decreasing index turns clockwise.
const DX: [isize; 8] = [1, 1, 0, -1, -1, -1, 0, 1];
const DY: [isize; 8] = [0, -1, -1, -1, 0, 1, 1, 1];
const EAST: usize = 0;
const WEST: usize = 4;

/// Label reserved for the virtual background frame around the image.
const FRAME_LABEL: i32 = 1;

pub type ContourId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderKind {
    /// Boundary between a foreground component and the background around it.
    Outer,
    /// Boundary between a foreground component and a hole it encloses.
    Hole,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub id: ContourId,
    pub kind: BorderKind,
    /// Enclosing border, `None` for top-level outer borders.
    pub parent: Option<ContourId>,
    pub points: Vec<Point2i>,
}

impl Contour {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn area(&self) -> f64 {
        contour_area(&self.points)
    }

    pub fn perimeter(&self) -> f64 {
        arc_length(&self.points, true)
    }
}

impl AsRef<[Point2i]> for Contour {
    fn as_ref(&self) -> &[Point2i] {
        &self.points
    }
}

/// Traces all outer and hole borders of `img` in raster discovery order.
///
/// `contours[i].id == i`. An image without foreground yields no contours.
pub fn find_contours(img: &ImageView<'_, u8>) -> Vec<Contour> {
    if img.is_empty() {
        return Vec::new();
    }

    let mut grid = LabelGrid::from_binary(img);
    let stride = grid.stride;
    let mut contours: Vec<Contour> = Vec::new();
    let mut nbd = FRAME_LABEL;

    for y in 1..=img.height() {
        let mut lnbd = FRAME_LABEL;
        for x in 1..=img.width() {
            let p = y * stride + x;
            let v = grid.cells[p];
            if v == 0 {
                continue;
            }

            let start = if v == 1 && grid.cells[p - 1] == 0 {
                Some((BorderKind::Outer, WEST))
            } else if v >= 1 && grid.cells[p + 1] == 0 {
                if v > 1 {
                    lnbd = v;
                }
                Some((BorderKind::Hole, EAST))
            } else {
                None
            };

            if let Some((kind, from_dir)) = start {
                nbd += 1;
                let parent = parent_of(kind, lnbd, &contours);
                let points = grid.follow_border(p, from_dir, nbd);
                contours.push(Contour {
                    id: contours.len(),
                    kind,
                    parent,
                    points,
                });
            }

            let v = grid.cells[p];
            if v != 1 {
                lnbd = v.abs();
            }
        }
    }

    contours
}

/// Parent of a new border given the last border met on the scan line.
fn parent_of(kind: BorderKind, lnbd: i32, contours: &[Contour]) -> Option<ContourId> {
    let last = usize::try_from(lnbd - FRAME_LABEL - 1)
        .ok()
        .and_then(|i| contours.get(i));

    // The frame behaves as a hole border without a parent.
    let (last_kind, last_id, last_parent) = match last {
        Some(c) => (c.kind, Some(c.id), c.parent),
        None => (BorderKind::Hole, None, None),
    };

    if kind == last_kind {
        last_parent
    } else {
        last_id
    }
}

/// Signed border labels over the image plus a one-pixel zero frame.
///
/// `0` background, `1` unvisited foreground, `+n` / `-n` pixels on border
/// `n` (negative when the pixel's east neighbor is background).
struct LabelGrid {
    stride: usize,
    cells: Vec<i32>,
}

impl LabelGrid {
    fn from_binary(img: &ImageView<'_, u8>) -> Self {
        let stride = img.width() + 2;
        let mut cells = vec![0_i32; stride * (img.height() + 2)];
        for y in 0..img.height() {
            let base = (y + 1) * stride + 1;
            for (x, &v) in img.row(y).iter().enumerate() {
                if v != 0 {
                    cells[base + x] = 1;
                }
            }
        }
        Self { stride, cells }
    }

    #[inline]
    fn neighbor(&self, p: usize, dir: usize) -> usize {
        (p as isize + DY[dir] * self.stride as isize + DX[dir]) as usize
    }

    fn direction(&self, from: usize, to: usize) -> usize {
        let delta = to as isize - from as isize;
        (0..8)
            .find(|&d| DY[d] * self.stride as isize + DX[d] == delta)
            .expect("border pixels are 8-neighbors")
    }

    fn point(&self, p: usize) -> Point2i {
        Point2i::new((p % self.stride) as i32 - 1, (p / self.stride) as i32 - 1)
    }

    fn follow_border(&mut self, start: usize, from_dir: usize, nbd: i32) -> Vec<Point2i> {
        let first = (0..8)
            .map(|s| (from_dir + 8 - s) % 8)
            .find(|&d| self.cells[self.neighbor(start, d)] != 0);

        let Some(first_dir) = first else {
            self.cells[start] = -nbd;
            return vec![self.point(start)];
        };

        let first_px = self.neighbor(start, first_dir);
        let mut prev = first_px;
        let mut cur = start;
        let mut points = Vec::new();

        loop {
            points.push(self.point(cur));

            let back = self.direction(cur, prev);
            let mut east_is_background = false;
            let mut next = prev;
            for s in 1..=8 {
                let d = (back + s) % 8;
                let q = self.neighbor(cur, d);
                if self.cells[q] != 0 {
                    next = q;
                    break;
                }
                if d == EAST {
                    east_is_background = true;
                }
            }

            if east_is_background {
                self.cells[cur] = -nbd;
            } else if self.cells[cur] == 1 {
                self.cells[cur] = nbd;
            }

            if next == start && cur == first_px {
                break;
            }
            prev = cur;
            cur = next;
        }

        points
    }
}
