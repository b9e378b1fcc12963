#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Flag {
    active: bool,
}

#[derive(Debug, Clone)]
pub struct SlideController {
    slides: Vec<Flag>,
    indicators: Vec<Flag>,
    current: usize,
    counter: usize,
}

impl SlideController {
    pub fn new(count: usize) -> Self {
        let mut controller = Self {
            slides: vec![Flag::default(); count],
            indicators: vec![Flag::default(); count],
            current: 0,
            counter: 0,
        };
        controller.show(0);
        controller
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn counter_text(&self) -> String {
        format!("{} / {}", self.counter, self.len())
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.len()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.slides.get(index).is_some_and(|s| s.active)
    }

    pub fn indicator_active(&self, index: usize) -> bool {
        self.indicators.get(index).is_some_and(|i| i.active)
    }

    pub fn active_count(&self) -> usize {
        self.slides.iter().filter(|s| s.active).count()
    }

    pub fn go_to_slide(&mut self, index: usize) -> Option<Transition> {
        if index >= self.len() {
            log::warn!(
                "Ignoring slide index {} (deck has {} slides)",
                index,
                self.len()
            );
            return None;
        }
        let from = self.current;
        self.show(index);
        log::debug!("slide {} -> {}", from, index);
        Some(Transition { from, to: index })
    }

    pub fn next_slide(&mut self) -> Option<Transition> {
        if self.is_last() {
            return None;
        }
        self.go_to_slide(self.current + 1)
    }

    pub fn previous_slide(&mut self) -> Option<Transition> {
        if self.is_first() {
            return None;
        }
        self.go_to_slide(self.current - 1)
    }

    fn show(&mut self, index: usize) {
        if index >= self.len() {
            return;
        }
        self.slides.iter_mut().for_each(|s| s.active = false);
        self.indicators.iter_mut().for_each(|i| i.active = false);

        self.slides[index].active = true;
        self.indicators[index].active = true;

        self.counter = index + 1;
        self.current = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_single_active(c: &SlideController) {
        assert_eq!(c.active_count(), 1);
        for i in 0..c.len() {
            assert_eq!(c.is_active(i), c.indicator_active(i), "indicator {i}");
            assert_eq!(c.is_active(i), i == c.current());
        }
    }

    #[test]
    fn starts_on_first_slide() {
        let c = SlideController::new(5);
        assert_eq!(c.current(), 0);
        assert_eq!(c.counter_text(), "1 / 5");
        assert_single_active(&c);
    }

    #[test]
    fn go_to_updates_counter() {
        let mut c = SlideController::new(13);
        for i in 0..13 {
            let t = c.go_to_slide(i).unwrap();
            assert_eq!(t.to, i);
            assert_eq!(c.counter_text(), format!("{} / 13", i + 1));
            assert_single_active(&c);
        }
    }

    #[test]
    fn reselecting_current_slide_is_a_transition() {
        let mut c = SlideController::new(3);
        assert_eq!(c.go_to_slide(0), Some(Transition { from: 0, to: 0 }));
    }

    #[test]
    fn next_is_clamped_at_end() {
        let mut c = SlideController::new(3);
        c.go_to_slide(2);
        assert_eq!(c.next_slide(), None);
        assert_eq!(c.current(), 2);
        assert_single_active(&c);
    }

    #[test]
    fn previous_is_clamped_at_start() {
        let mut c = SlideController::new(3);
        assert_eq!(c.previous_slide(), None);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn previous_twice_from_two_ends_at_zero() {
        let mut c = SlideController::new(5);
        c.go_to_slide(2);
        c.previous_slide();
        c.previous_slide();
        assert_eq!(c.current(), 0);
        assert_eq!(c.previous_slide(), None);
        assert_eq!(c.current(), 0);
        assert_single_active(&c);
    }

    #[test]
    fn out_of_range_leaves_display_untouched() {
        let mut c = SlideController::new(4);
        c.go_to_slide(1);
        assert_eq!(c.go_to_slide(4), None);
        assert_eq!(c.go_to_slide(usize::MAX), None);
        assert_eq!(c.current(), 1);
        assert_eq!(c.counter_text(), "2 / 4");
        assert_single_active(&c);
    }

    #[test]
    fn empty_deck_ignores_everything() {
        let mut c = SlideController::new(0);
        assert!(c.is_empty());
        assert_eq!(c.next_slide(), None);
        assert_eq!(c.previous_slide(), None);
        assert_eq!(c.go_to_slide(0), None);
        assert_eq!(c.active_count(), 0);
    }
}
