use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumString};

pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum NavKey {
    #[strum(to_string = "ArrowRight", serialize = "Right")]
    ArrowRight,
    #[strum(to_string = "ArrowLeft", serialize = "Left")]
    ArrowLeft,
    #[strum(to_string = "Space", serialize = " ")]
    Space,
    #[strum(to_string = "Escape", serialize = "Esc")]
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Next,
    Previous,
    CloseModal,
}

impl KeyAction {
    pub fn suppresses_default(&self) -> bool {
        matches!(self, Self::Next | Self::Previous)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct KeyBindings {
    #[serde(default = "default_next_keys")]
    pub next: Vec<NavKey>,
    #[serde(default = "default_previous_keys")]
    pub previous: Vec<NavKey>,
    #[serde(default = "default_close_keys")]
    pub close: Vec<NavKey>,
}

fn default_next_keys() -> Vec<NavKey> {
    vec![NavKey::ArrowRight, NavKey::Space]
}

fn default_previous_keys() -> Vec<NavKey> {
    vec![NavKey::ArrowLeft]
}

fn default_close_keys() -> Vec<NavKey> {
    vec![NavKey::Escape]
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            next: default_next_keys(),
            previous: default_previous_keys(),
            close: default_close_keys(),
        }
    }
}

impl KeyBindings {
    // Close is checked first so Escape keeps working even if it is also bound to
    // navigation.
    pub fn action_for(&self, key: NavKey) -> Option<KeyAction> {
        if self.close.contains(&key) {
            Some(KeyAction::CloseModal)
        } else if self.next.contains(&key) {
            Some(KeyAction::Next)
        } else if self.previous.contains(&key) {
            Some(KeyAction::Previous)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f64,
    start: Option<Point>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.abs(),
            start: None,
        }
    }

    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = threshold.abs();
    }

    pub fn touch_start(&mut self, at: Point) {
        self.start = Some(at);
    }

    pub fn touch_end(&mut self, at: Point) -> Option<SwipeDirection> {
        let start = self.start.take()?;
        let dx = at.x - start.x;

        match dx {
            d if d == 0.0 => None,
            d if d <= -self.threshold => Some(SwipeDirection::Left),
            d if d >= self.threshold => Some(SwipeDirection::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_key_deserialization() {
        let cases = vec![
            ("\"ArrowRight\"", NavKey::ArrowRight),
            ("\"arrowright\"", NavKey::ArrowRight),
            ("\"Right\"", NavKey::ArrowRight),
            ("\"Left\"", NavKey::ArrowLeft),
            ("\"space\"", NavKey::Space),
            ("\" \"", NavKey::Space),
            ("\"Escape\"", NavKey::Escape),
            ("\"esc\"", NavKey::Escape),
        ];

        for (json, expected) in cases {
            let deserialized: NavKey = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(serde_json::from_str::<NavKey>("\"Tab\"").is_err());
    }

    #[test]
    fn test_default_bindings() {
        let keys = KeyBindings::default();
        assert_eq!(keys.action_for(NavKey::ArrowRight), Some(KeyAction::Next));
        assert_eq!(keys.action_for(NavKey::Space), Some(KeyAction::Next));
        assert_eq!(keys.action_for(NavKey::ArrowLeft), Some(KeyAction::Previous));
        assert_eq!(keys.action_for(NavKey::Escape), Some(KeyAction::CloseModal));
        assert!(KeyAction::Next.suppresses_default());
        assert!(!KeyAction::CloseModal.suppresses_default());
    }

    #[test]
    fn test_partial_bindings_fill_defaults() {
        let keys: KeyBindings = serde_json::from_str(r#"{"next": ["Right"]}"#).unwrap();
        assert_eq!(keys.next, vec![NavKey::ArrowRight]);
        assert_eq!(keys.action_for(NavKey::Space), None);
        assert_eq!(keys.previous, vec![NavKey::ArrowLeft]);
    }

    #[test]
    fn test_swipe_threshold() {
        let cases = vec![
            (300.0, 250.0, Some(SwipeDirection::Left)),
            (300.0, 100.0, Some(SwipeDirection::Left)),
            (300.0, 350.0, Some(SwipeDirection::Right)),
            (300.0, 251.0, None),
            (300.0, 349.0, None),
            (300.0, 300.0, None),
        ];

        for (start, end, expected) in cases {
            let mut swipe = SwipeTracker::default();
            swipe.touch_start(Point::new(start, 0.0));
            assert_eq!(swipe.touch_end(Point::new(end, 0.0)), expected, "{start} -> {end}");
        }
    }

    #[test]
    fn test_tap_is_not_a_swipe_at_zero_threshold() {
        let mut swipe = SwipeTracker::new(0.0);
        swipe.touch_start(Point::new(100.0, 0.0));
        assert_eq!(swipe.touch_end(Point::new(100.0, 0.0)), None);

        swipe.touch_start(Point::new(100.0, 0.0));
        assert_eq!(
            swipe.touch_end(Point::new(99.0, 0.0)),
            Some(SwipeDirection::Left)
        );
    }

    #[test]
    fn test_vertical_travel_is_ignored() {
        let mut swipe = SwipeTracker::default();
        swipe.touch_start(Point::new(100.0, 0.0));
        assert_eq!(swipe.touch_end(Point::new(110.0, 400.0)), None);
    }

    #[test]
    fn test_end_without_start() {
        let mut swipe = SwipeTracker::default();
        assert_eq!(swipe.touch_end(Point::new(0.0, 0.0)), None);

        swipe.touch_start(Point::new(200.0, 0.0));
        assert_eq!(
            swipe.touch_end(Point::new(100.0, 0.0)),
            Some(SwipeDirection::Left)
        );
        // the start point is consumed
        assert_eq!(swipe.touch_end(Point::new(0.0, 0.0)), None);
    }
}
