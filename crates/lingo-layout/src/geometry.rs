//! Pane rect and divider line derivation.
//!
//! Everything here is a pure function of the [`PaneLayout`] value and the
//! container rect: the shell re-derives geometry whenever either changes
//! instead of mutating pane bounds imperatively.

use lingo_common::Rect;

use crate::panes::PaneLayout;

/// A divider line between two adjacent panes, in container coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct DividerLine {
    /// Index of the divider (0 sits between panes 0 and 1).
    pub index: usize,
    /// X position of the line's center.
    pub position: f64,
    /// Top of the line.
    pub start: f64,
    /// Bottom of the line.
    pub end: f64,
}

impl DividerLine {
    /// Test whether a point falls within `half_width` of this line.
    pub fn hit_test(&self, x: f64, y: f64, half_width: f64) -> bool {
        (x - self.position).abs() <= half_width && y >= self.start && y <= self.end
    }
}

/// Compute pane rects left to right. Each gap between panes gets `gap`
/// pixels; pane widths share the remainder in proportion to their fractions.
pub fn pane_rects(layout: &PaneLayout, container: Rect, gap: f64) -> Vec<Rect> {
    let divider_count = layout.divider_count() as f64;
    let available = (container.width - gap * divider_count).max(0.0);

    let mut rects = Vec::with_capacity(layout.pane_count());
    let mut x = container.x;
    for &fraction in layout.fractions() {
        let width = available * fraction / 100.0;
        rects.push(Rect {
            x,
            y: container.y,
            width,
            height: container.height,
        });
        x += width + gap;
    }
    rects
}

/// Compute the divider lines for a layout: one centered in each gap.
pub fn divider_lines(layout: &PaneLayout, container: Rect, gap: f64) -> Vec<DividerLine> {
    let rects = pane_rects(layout, container, gap);
    rects
        .iter()
        .take(rects.len().saturating_sub(1))
        .enumerate()
        .map(|(index, rect)| DividerLine {
            index,
            position: rect.x + rect.width + gap / 2.0,
            start: container.y,
            end: container.y + container.height,
        })
        .collect()
}

/// Find which divider line (if any) the pointer is near.
pub fn find_hovered_divider<'a>(
    lines: &'a [DividerLine],
    x: f64,
    y: f64,
    half_width: f64,
) -> Option<&'a DividerLine> {
    lines.iter().find(|line| line.hit_test(x, y, half_width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panes::ClampBounds;

    fn container() -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width: 806.0,
            height: 600.0,
        }
    }

    fn two_pane() -> PaneLayout {
        PaneLayout::even_split(2, ClampBounds::default()).unwrap()
    }

    #[test]
    fn even_split_rects_share_available_width() {
        let rects = pane_rects(&two_pane(), container(), 6.0);
        assert_eq!(rects.len(), 2);
        // 806 - 6 gap = 800 available, 400 each.
        assert_eq!(rects[0].width, 400.0);
        assert_eq!(rects[1].width, 400.0);
        assert_eq!(rects[0].x, 0.0);
        assert_eq!(rects[1].x, 406.0);
        assert_eq!(rects[0].height, 600.0);
    }

    #[test]
    fn rects_follow_fractions() {
        let mut layout = two_pane();
        layout.apply_drag(0, 60.0);
        let rects = pane_rects(&layout, container(), 6.0);
        assert_eq!(rects[0].width, 480.0);
        assert_eq!(rects[1].width, 320.0);
    }

    #[test]
    fn rects_offset_by_container_origin() {
        let offset = Rect {
            x: 10.0,
            y: 40.0,
            width: 806.0,
            height: 500.0,
        };
        let rects = pane_rects(&two_pane(), offset, 6.0);
        assert_eq!(rects[0].x, 10.0);
        assert_eq!(rects[0].y, 40.0);
        assert_eq!(rects[1].x, 416.0);
    }

    #[test]
    fn zero_width_container_produces_zero_rects() {
        let degenerate = Rect {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 600.0,
        };
        let rects = pane_rects(&two_pane(), degenerate, 6.0);
        assert_eq!(rects[0].width, 0.0);
        assert_eq!(rects[1].width, 0.0);
    }

    #[test]
    fn one_divider_between_two_panes() {
        let lines = divider_lines(&two_pane(), container(), 6.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].index, 0);
        // Left pane ends at 400, divider centered in the 6px gap.
        assert_eq!(lines[0].position, 403.0);
        assert_eq!(lines[0].start, 0.0);
        assert_eq!(lines[0].end, 600.0);
    }

    #[test]
    fn three_panes_two_dividers() {
        let bounds = ClampBounds {
            min: 10.0,
            max: 80.0,
        };
        let layout = PaneLayout::from_fractions(vec![25.0, 25.0, 50.0], bounds).unwrap();
        let wide = Rect {
            x: 0.0,
            y: 0.0,
            width: 812.0,
            height: 600.0,
        };
        let lines = divider_lines(&layout, wide, 6.0);
        assert_eq!(lines.len(), 2);
        // 812 - 12 = 800 available; panes 200/200/400.
        assert_eq!(lines[0].position, 203.0);
        assert_eq!(lines[1].position, 409.0);
    }

    #[test]
    fn hit_test_within_zone() {
        let lines = divider_lines(&two_pane(), container(), 6.0);
        let line = &lines[0];
        assert!(line.hit_test(403.0, 300.0, 6.0));
        assert!(line.hit_test(409.0, 300.0, 6.0));
        assert!(line.hit_test(397.0, 300.0, 6.0));
        assert!(!line.hit_test(410.0, 300.0, 6.0));
        assert!(!line.hit_test(403.0, -1.0, 6.0));
        assert!(!line.hit_test(403.0, 601.0, 6.0));
    }

    #[test]
    fn find_hovered_divider_picks_the_near_line() {
        let bounds = ClampBounds {
            min: 10.0,
            max: 80.0,
        };
        let layout = PaneLayout::from_fractions(vec![25.0, 25.0, 50.0], bounds).unwrap();
        let wide = Rect {
            x: 0.0,
            y: 0.0,
            width: 812.0,
            height: 600.0,
        };
        let lines = divider_lines(&layout, wide, 6.0);
        assert_eq!(
            find_hovered_divider(&lines, 204.0, 10.0, 6.0).map(|l| l.index),
            Some(0)
        );
        assert_eq!(
            find_hovered_divider(&lines, 410.0, 10.0, 6.0).map(|l| l.index),
            Some(1)
        );
        assert!(find_hovered_divider(&lines, 300.0, 10.0, 6.0).is_none());
    }

    #[test]
    fn find_hovered_divider_empty() {
        let lines: Vec<DividerLine> = Vec::new();
        assert!(find_hovered_divider(&lines, 0.0, 0.0, 6.0).is_none());
    }
}
