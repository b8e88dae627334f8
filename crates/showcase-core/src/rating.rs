pub const MAX_STARS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

impl Star {
    /// Icon-font classes for the glyph.
    pub fn class(self) -> &'static str {
        match self {
            Star::Full => "fas fa-star",
            Star::Half => "fas fa-star-half-alt",
            Star::Empty => "far fa-star",
        }
    }
}

/// Five-glyph breakdown of a rating: whole stars, at most one half star
/// for a fractional part of at least one half, and empty stars for the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stars {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl Stars {
    /// Ratings outside `[0, 5]` are clamped; NaN counts as zero.
    pub fn from_rating(rating: f64) -> Self {
        let rating = if rating.is_nan() {
            0.0
        } else {
            rating.clamp(0.0, f64::from(MAX_STARS))
        };

        let full = rating.floor() as u8;
        let half = rating.fract() >= 0.5;
        let empty = MAX_STARS - full - u8::from(half);

        Self { full, half, empty }
    }

    pub fn glyphs(self) -> impl Iterator<Item = Star> {
        std::iter::repeat_n(Star::Full, usize::from(self.full))
            .chain(self.half.then_some(Star::Half))
            .chain(std::iter::repeat_n(Star::Empty, usize::from(self.empty)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stars(full: u8, half: bool, empty: u8) -> Stars {
        Stars { full, half, empty }
    }

    #[test]
    fn splits_ratings_into_glyph_counts() {
        assert_eq!(Stars::from_rating(4.5), stars(4, true, 0));
        assert_eq!(Stars::from_rating(4.2), stars(4, false, 1));
        assert_eq!(Stars::from_rating(5.0), stars(5, false, 0));
        assert_eq!(Stars::from_rating(0.0), stars(0, false, 5));
        assert_eq!(Stars::from_rating(2.49), stars(2, false, 3));
        assert_eq!(Stars::from_rating(0.5), stars(0, true, 4));
    }

    #[test]
    fn always_emits_five_glyphs() {
        let mut rating = 0.0;
        while rating <= 5.0 {
            let count = Stars::from_rating(rating).glyphs().count();
            assert_eq!(count, 5, "rating {rating}");
            rating += 0.05;
        }
    }

    #[test]
    fn glyph_order_is_full_half_empty() {
        let glyphs: Vec<Star> = Stars::from_rating(3.6).glyphs().collect();
        assert_eq!(
            glyphs,
            vec![Star::Full, Star::Full, Star::Full, Star::Half, Star::Empty]
        );
    }

    #[test]
    fn out_of_range_ratings_are_clamped() {
        assert_eq!(Stars::from_rating(7.3), stars(5, false, 0));
        assert_eq!(Stars::from_rating(-1.0), stars(0, false, 5));
        assert_eq!(Stars::from_rating(f64::NAN), stars(0, false, 5));
    }
}
