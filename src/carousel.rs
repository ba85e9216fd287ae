use crate::constants::{
    DRAG_THRESHOLD_PX, SLIDER_CONTAINER_CLASS, SLIDER_CONTROLS_ID, SLIDER_EDGE_PADDING_PX,
    SLIDER_SPEED_MS,
};

/// How far one prev/next step moves the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideBy {
    /// A full page of `items` slides
    Page,
    /// A fixed number of slides
    Count(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselConfig {
    pub container: String,
    pub looping: bool,
    pub slide_by: SlideBy,
    pub speed_ms: u32,
    pub mouse_drag: bool,
    pub lazyload: bool,
    pub controls_container: String,
    pub items: usize,
    pub edge_padding_px: u32,
}

impl CarouselConfig {
    /// Configuration of the subway line slider on the edge admin page
    #[must_use]
    pub fn subway_lines() -> Self {
        Self {
            container: SLIDER_CONTAINER_CLASS.to_string(),
            looping: true,
            slide_by: SlideBy::Page,
            speed_ms: SLIDER_SPEED_MS,
            mouse_drag: true,
            lazyload: true,
            controls_container: SLIDER_CONTROLS_ID.to_string(),
            items: 1,
            edge_padding_px: SLIDER_EDGE_PADDING_PX,
        }
    }

    fn items(&self) -> usize {
        self.items.max(1)
    }

    /// Number of slides moved by one step
    #[must_use]
    pub fn step(&self) -> usize {
        match self.slide_by {
            SlideBy::Page => self.items(),
            SlideBy::Count(n) => n.max(1),
        }
    }

    /// Highest index the first visible slide can take without leaving blanks
    fn last_start(&self, count: usize) -> usize {
        count.saturating_sub(self.items())
    }

    #[must_use]
    pub fn next(&self, index: usize, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        let target = index + self.step();
        if target <= self.last_start(count) {
            target
        } else if self.looping && index >= self.last_start(count) {
            0
        } else {
            self.last_start(count)
        }
    }

    #[must_use]
    pub fn prev(&self, index: usize, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        if index == 0 && self.looping {
            return self.last_start(count);
        }
        index.saturating_sub(self.step())
    }

    #[must_use]
    pub fn go(&self, direction: Direction, index: usize, count: usize) -> usize {
        match direction {
            Direction::Prev => self.prev(index, count),
            Direction::Next => self.next(index, count),
        }
    }

    /// Keep `index` pointing at a real page after the slide count changed
    #[must_use]
    pub fn clamp_index(&self, index: usize, count: usize) -> usize {
        index.min(self.last_start(count))
    }

    /// Whether a slide's content should be rendered
    ///
    /// With lazy loading, only the visible page and the pages on either side
    /// of it are loaded. Neighbours wrap around the ends when looping.
    #[must_use]
    pub fn is_loaded(&self, slide: usize, index: usize, count: usize) -> bool {
        if !self.lazyload || count == 0 {
            return true;
        }
        let step = self.step();
        let start = index.saturating_sub(step);
        let end = index + self.items() + step;
        if (start..end).contains(&slide) {
            return true;
        }
        if !self.looping {
            return false;
        }
        // Pages that wrap past either end
        let wrapped_tail = index < step && slide + step >= count + index;
        let wrapped_head = end > count && slide < end - count;
        wrapped_tail || wrapped_head
    }

    /// Step to take after a mouse drag of `dx` pixels, if any
    ///
    /// Dragging to the left reveals the next slide.
    #[must_use]
    pub fn drag_direction(&self, dx: i32) -> Option<Direction> {
        if !self.mouse_drag || dx.abs() < DRAG_THRESHOLD_PX {
            return None;
        }
        if dx < 0 {
            Some(Direction::Next)
        } else {
            Some(Direction::Prev)
        }
    }

    /// Width of one slide as a percentage of the viewport
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn slide_width_percent(&self) -> f64 {
        100.0 / self.items() as f64
    }

    /// Horizontal track offset that brings slide `index` to the left edge
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn track_offset_percent(&self, index: usize) -> f64 {
        -(index as f64) * self.slide_width_percent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paged(items: usize, looping: bool) -> CarouselConfig {
        CarouselConfig {
            items,
            looping,
            ..CarouselConfig::subway_lines()
        }
    }

    #[test]
    fn test_subway_lines_config() {
        let config = CarouselConfig::subway_lines();
        assert_eq!(config.container, "subway-lines-slider");
        assert!(config.looping);
        assert_eq!(config.slide_by, SlideBy::Page);
        assert_eq!(config.speed_ms, 400);
        assert!(config.mouse_drag);
        assert!(config.lazyload);
        assert_eq!(config.controls_container, "slider-controls");
        assert_eq!(config.items, 1);
        assert_eq!(config.edge_padding_px, 25);
    }

    #[test]
    fn test_next_wraps_when_looping() {
        let config = paged(1, true);
        assert_eq!(config.next(0, 3), 1);
        assert_eq!(config.next(1, 3), 2);
        assert_eq!(config.next(2, 3), 0);
    }

    #[test]
    fn test_prev_wraps_when_looping() {
        let config = paged(1, true);
        assert_eq!(config.prev(0, 3), 2);
        assert_eq!(config.prev(2, 3), 1);
    }

    #[test]
    fn test_navigation_clamps_without_loop() {
        let config = paged(1, false);
        assert_eq!(config.next(2, 3), 2);
        assert_eq!(config.prev(0, 3), 0);
    }

    #[test]
    fn test_page_step_with_multiple_items() {
        let config = paged(2, true);
        assert_eq!(config.step(), 2);
        assert_eq!(config.next(0, 5), 2);
        // A partial last page still starts so that no blank slots show
        assert_eq!(config.next(2, 5), 3);
        assert_eq!(config.next(3, 5), 0);
        assert_eq!(config.prev(0, 5), 3);
    }

    #[test]
    fn test_count_step() {
        let config = CarouselConfig {
            slide_by: SlideBy::Count(1),
            ..paged(3, false)
        };
        assert_eq!(config.next(0, 5), 1);
        assert_eq!(config.next(2, 5), 2);
    }

    #[test]
    fn test_empty_carousel_stays_at_zero() {
        let config = paged(1, true);
        assert_eq!(config.next(0, 0), 0);
        assert_eq!(config.prev(0, 0), 0);
        assert_eq!(config.clamp_index(4, 0), 0);
    }

    #[test]
    fn test_clamp_index_after_slides_removed() {
        let config = paged(1, true);
        assert_eq!(config.clamp_index(4, 3), 2);
        assert_eq!(config.clamp_index(1, 3), 1);
    }

    #[test]
    fn test_lazyload_window() {
        let config = paged(1, false);
        assert!(config.is_loaded(0, 1, 5));
        assert!(config.is_loaded(1, 1, 5));
        assert!(config.is_loaded(2, 1, 5));
        assert!(!config.is_loaded(3, 1, 5));
        assert!(!config.is_loaded(4, 0, 5));
    }

    #[test]
    fn test_lazyload_window_wraps_when_looping() {
        let config = paged(1, true);
        assert!(config.is_loaded(4, 0, 5));
        assert!(config.is_loaded(0, 4, 5));
        assert!(!config.is_loaded(2, 4, 5));
    }

    #[test]
    fn test_everything_loaded_without_lazyload() {
        let config = CarouselConfig {
            lazyload: false,
            ..paged(1, false)
        };
        assert!((0..10).all(|slide| config.is_loaded(slide, 0, 10)));
    }

    #[test]
    fn test_drag_direction() {
        let config = CarouselConfig::subway_lines();
        assert_eq!(config.drag_direction(-80), Some(Direction::Next));
        assert_eq!(config.drag_direction(80), Some(Direction::Prev));
        assert_eq!(config.drag_direction(10), None);

        let no_drag = CarouselConfig {
            mouse_drag: false,
            ..config
        };
        assert_eq!(no_drag.drag_direction(-200), None);
    }

    #[test]
    fn test_track_offset() {
        let config = paged(2, true);
        assert!((config.slide_width_percent() - 50.0).abs() < f64::EPSILON);
        assert!((config.track_offset_percent(3) + 150.0).abs() < f64::EPSILON);
    }
}
