//! Masonry column layout.

use crate::config::MASONRY_BREAKPOINTS;
use crate::models::ArtworkPreview;

/// Column count for a viewport width in CSS pixels.
pub fn columns_for_width(width: u32) -> usize {
    MASONRY_BREAKPOINTS
        .iter()
        .rev()
        .find(|(min, _)| width >= *min)
        .map_or(1, |(_, cols)| *cols)
}

/// Split items into `columns` columns of indices into `items`.
///
/// Each item goes to the currently shortest column, measured in tile heights
/// at unit width. Ties go to the leftmost column, so equal-height items fill
/// left to right. Reading each column top to bottom preserves input order.
pub fn distribute(items: &[ArtworkPreview], columns: usize) -> Vec<Vec<usize>> {
    let columns = columns.max(1);
    let mut out = vec![Vec::new(); columns];
    let mut heights = vec![0.0_f64; columns];

    for (i, item) in items.iter().enumerate() {
        let mut shortest = 0;
        for (col, h) in heights.iter().enumerate().skip(1) {
            if *h < heights[shortest] {
                shortest = col;
            }
        }
        out[shortest].push(i);
        heights[shortest] += item.aspect_ratio.relative_height();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generate_mock_artworks;
    use crate::models::AspectRatio;

    fn with_ratios(ratios: &[AspectRatio]) -> Vec<ArtworkPreview> {
        let mut items = generate_mock_artworks(ratios.len());
        for (item, ratio) in items.iter_mut().zip(ratios) {
            item.aspect_ratio = *ratio;
        }
        items
    }

    #[test]
    fn test_columns_for_width() {
        assert_eq!(columns_for_width(0), 1);
        assert_eq!(columns_for_width(639), 1);
        assert_eq!(columns_for_width(640), 2);
        assert_eq!(columns_for_width(800), 3);
        assert_eq!(columns_for_width(1024), 4);
        assert_eq!(columns_for_width(1279), 4);
        assert_eq!(columns_for_width(1920), 5);
    }

    #[test]
    fn test_equal_heights_fill_left_to_right() {
        let items = with_ratios(&[AspectRatio::Square; 5]);
        assert_eq!(distribute(&items, 3), vec![vec![0, 3], vec![1, 4], vec![2]]);
    }

    #[test]
    fn test_tall_item_pushes_next_to_shorter_column() {
        let items = with_ratios(&[
            AspectRatio::Stories,
            AspectRatio::Widescreen,
            AspectRatio::Widescreen,
            AspectRatio::Widescreen,
        ]);
        assert_eq!(distribute(&items, 2), vec![vec![0], vec![1, 2, 3]]);
    }

    #[test]
    fn test_every_item_placed_once() {
        let items = generate_mock_artworks(23);
        let cols = distribute(&items, 4);
        let mut all: Vec<usize> = cols.concat();
        all.sort();
        assert_eq!(all, (0..23).collect::<Vec<_>>());
        for col in &cols {
            assert!(col.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_zero_columns_treated_as_one() {
        let items = generate_mock_artworks(3);
        assert_eq!(distribute(&items, 0), vec![vec![0, 1, 2]]);
        assert_eq!(distribute(&[], 3), vec![Vec::<usize>::new(); 3]);
    }
}
