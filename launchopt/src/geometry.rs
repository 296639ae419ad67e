//! X11 geometry strings: `[=][<width>{xX}<height>][{+-}<xoffset>{+-}<yoffset>]`.

use bitflags::bitflags;

bitflags! {
    /// Which components a geometry string carried. Bit values are the X11
    /// `XParseGeometry` ones.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct GeometryMask: u32 {
        const X = 0x0001;
        const Y = 0x0002;
        const WIDTH = 0x0004;
        const HEIGHT = 0x0008;
        const X_NEGATIVE = 0x0010;
        const Y_NEGATIVE = 0x0020;
    }
}

/// A parsed geometry string.
///
/// Offsets are stored as written after their `+`/`-` marker; the marker
/// itself is kept in `X_NEGATIVE`/`Y_NEGATIVE`, so `-0` and `+0` differ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Geometry {
    pub mask: GeometryMask,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Where a window ends up on a screen, after resolving edge-relative offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub width: u32,
    pub height: u32,
    pub x: Option<i32>,
    pub y: Option<i32>,
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    /// Digits only. `None` when not a single digit was read.
    fn read_unsigned(&mut self) -> Option<u32> {
        let start = self.pos;
        let mut result: u32 = 0;
        while let Some(d @ b'0'..=b'9') = self.peek() {
            result = result.wrapping_mul(10).wrapping_add(u32::from(d - b'0'));
            self.bump();
        }
        (self.pos != start).then_some(result)
    }

    /// Optional sign, then digits. A sign with no digits is no integer.
    fn read_integer(&mut self) -> Option<i32> {
        let start = self.pos;
        let negative = match self.peek() {
            Some(b'+') => {
                self.bump();
                false
            }
            Some(b'-') => {
                self.bump();
                true
            }
            _ => false,
        };
        match self.read_unsigned() {
            Some(n) => {
                let n = n as i32;
                Some(if negative { n.wrapping_neg() } else { n })
            }
            None => {
                self.pos = start;
                None
            }
        }
    }

    fn read_offset(&mut self) -> Option<(i32, bool)> {
        let negative = match self.peek() {
            Some(b'+') => false,
            Some(b'-') => true,
            _ => return None,
        };
        self.bump();
        self.read_integer().map(|n| (n, negative))
    }
}

impl Geometry {
    /// Parse a geometry string. Any malformed input yields an empty mask and
    /// zeroed fields, never an error.
    pub fn parse(s: &str) -> Geometry {
        Self::try_parse(s).unwrap_or_default()
    }

    fn try_parse(s: &str) -> Option<Geometry> {
        let s = s.strip_prefix('=').unwrap_or(s);
        let mut cur = Cursor {
            bytes: s.as_bytes(),
            pos: 0,
        };
        let mut geom = Geometry::default();

        if !matches!(cur.peek(), None | Some(b'+' | b'-' | b'x' | b'X')) {
            geom.width = cur.read_unsigned()?;
            geom.mask |= GeometryMask::WIDTH;
        }

        if let Some(b'x' | b'X') = cur.peek() {
            cur.bump();
            geom.height = cur.read_unsigned()?;
            geom.mask |= GeometryMask::HEIGHT;
        }

        if matches!(cur.peek(), Some(b'+' | b'-')) {
            let (x, negative) = cur.read_offset()?;
            geom.x = x;
            geom.mask |= GeometryMask::X;
            if negative {
                geom.mask |= GeometryMask::X_NEGATIVE;
            }

            if matches!(cur.peek(), Some(b'+' | b'-')) {
                let (y, negative) = cur.read_offset()?;
                geom.y = y;
                geom.mask |= GeometryMask::Y;
                if negative {
                    geom.mask |= GeometryMask::Y_NEGATIVE;
                }
            }
        }

        if cur.peek().is_some() {
            return None;
        }
        Some(geom)
    }

    pub fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }

    pub fn has_size(&self) -> bool {
        self.mask.contains(GeometryMask::WIDTH | GeometryMask::HEIGHT)
    }

    /// Resolve against a `(width, height)` screen. Missing size components
    /// come from `default_size`; negative offsets measure from the right or
    /// bottom edge.
    pub fn place(&self, screen: (u32, u32), default_size: (u32, u32)) -> Placement {
        let width = if self.mask.contains(GeometryMask::WIDTH) {
            self.width
        } else {
            default_size.0
        };
        let height = if self.mask.contains(GeometryMask::HEIGHT) {
            self.height
        } else {
            default_size.1
        };

        let x = self.mask.contains(GeometryMask::X).then(|| {
            if self.mask.contains(GeometryMask::X_NEGATIVE) {
                (screen.0 as i32).wrapping_sub(width as i32).wrapping_sub(self.x)
            } else {
                self.x
            }
        });
        let y = self.mask.contains(GeometryMask::Y).then(|| {
            if self.mask.contains(GeometryMask::Y_NEGATIVE) {
                (screen.1 as i32).wrapping_sub(height as i32).wrapping_sub(self.y)
            } else {
                self.y
            }
        });

        Placement {
            width,
            height,
            x,
            y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_geometry_with_negative_y() {
        let g = Geometry::parse("80x24+10-20");
        assert_eq!(
            g.mask,
            GeometryMask::WIDTH
                | GeometryMask::HEIGHT
                | GeometryMask::X
                | GeometryMask::Y
                | GeometryMask::Y_NEGATIVE
        );
        assert_eq!((g.width, g.height, g.x, g.y), (80, 24, 10, 20));
        assert!(!g.mask.contains(GeometryMask::X_NEGATIVE));
    }

    #[test]
    fn offsets_only_both_negative() {
        let g = Geometry::parse("-5-5");
        assert_eq!(
            g.mask,
            GeometryMask::X | GeometryMask::Y | GeometryMask::X_NEGATIVE | GeometryMask::Y_NEGATIVE
        );
        assert_eq!((g.x, g.y), (5, 5));
    }

    #[test]
    fn negative_zero_keeps_its_sign() {
        let g = Geometry::parse("+0-0");
        assert_eq!(g.y, 0);
        assert!(g.mask.contains(GeometryMask::Y_NEGATIVE));
        assert!(!g.mask.contains(GeometryMask::X_NEGATIVE));
    }

    #[test]
    fn size_only_and_uppercase_x() {
        let g = Geometry::parse("=100X40");
        assert_eq!(g.mask, GeometryMask::WIDTH | GeometryMask::HEIGHT);
        assert_eq!((g.width, g.height), (100, 40));
        assert!(g.has_size());
    }

    #[test]
    fn width_only_and_height_only() {
        let g = Geometry::parse("120");
        assert_eq!(g.mask, GeometryMask::WIDTH);
        assert_eq!(g.width, 120);
        let g = Geometry::parse("x50");
        assert_eq!(g.mask, GeometryMask::HEIGHT);
        assert_eq!(g.height, 50);
    }

    #[test]
    fn x_offset_without_y() {
        let g = Geometry::parse("+7");
        assert_eq!(g.mask, GeometryMask::X);
        assert_eq!(g.x, 7);
    }

    #[test]
    fn inner_sign_after_marker_is_read() {
        let g = Geometry::parse("+-5+3");
        assert_eq!(g.x, -5);
        assert!(!g.mask.contains(GeometryMask::X_NEGATIVE));
    }

    #[test]
    fn rejects_garbage() {
        for s in ["abc", "", "=", "80x", "80xy", "80x24+", "80x24+1-", "80x24+1+2+3", "80x-3", "80x24 "] {
            assert!(Geometry::parse(s).is_empty(), "{:?} should not parse", s);
        }
    }

    #[test]
    fn failed_parse_leaves_fields_zeroed() {
        assert_eq!(Geometry::parse("80x24+q"), Geometry::default());
    }

    #[test]
    fn digits_accumulate_without_overflow_checks() {
        let g = Geometry::parse("4294967296x1");
        assert_eq!(g.width, 0);
        assert_eq!(g.height, 1);
    }

    #[test]
    fn place_from_left_top() {
        let p = Geometry::parse("100x50+10+20").place((1920, 1080), (80, 24));
        assert_eq!(
            p,
            Placement {
                width: 100,
                height: 50,
                x: Some(10),
                y: Some(20)
            }
        );
    }

    #[test]
    fn place_from_right_bottom_with_default_size() {
        let p = Geometry::parse("-10-20").place((1920, 1080), (80, 24));
        assert_eq!(p.width, 80);
        assert_eq!(p.x, Some(1920 - 80 - 10));
        assert_eq!(p.y, Some(1080 - 24 - 20));
    }

    #[test]
    fn place_without_offsets_leaves_position_open() {
        let p = Geometry::parse("90x30").place((1920, 1080), (80, 24));
        assert_eq!((p.width, p.height, p.x, p.y), (90, 30, None, None));
    }
}
