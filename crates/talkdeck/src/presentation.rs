use crate::catalog::DepartmentCatalog;
use crate::command::Command;
use crate::input::{KeyAction, KeyBindings, NavKey, Point, SwipeDirection, SwipeTracker};
use crate::modal::{DepartmentModal, ModalChange};
use crate::particles::{self, ContainerId, Particle, ParticleField};
use crate::reanimate::{Reanimator, Ticket};
use crate::slides::{SlideController, Transition};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DeckSettings {
    pub slide_count: usize,
    pub particle_counts: Vec<usize>,
    pub keys: KeyBindings,
    pub swipe_threshold: f64,
    pub reanimate_delay: Duration,
    pub restore_delay: Duration,
    pub cancel_pending: bool,
}

impl DeckSettings {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            particle_counts: (0..slide_count)
                .map(|i| {
                    particles::count_for_slide(
                        i,
                        particles::FIRST_SLIDE_PARTICLES,
                        particles::SLIDE_PARTICLES,
                    )
                })
                .collect(),
            keys: KeyBindings::default(),
            swipe_threshold: crate::input::DEFAULT_SWIPE_THRESHOLD,
            reanimate_delay: crate::reanimate::REANIMATE_DELAY,
            restore_delay: crate::reanimate::RESTORE_DELAY,
            cancel_pending: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Effects {
    pub transition: Option<Transition>,
    pub reanimate: Option<Ticket>,
    pub modal: Option<ModalChange>,
    pub suppress_default: bool,
}

impl Effects {
    pub fn is_empty(&self) -> bool {
        self.transition.is_none() && self.modal.is_none()
    }
}

pub struct Presentation {
    slides: SlideController,
    modal: DepartmentModal,
    particles: ParticleField,
    reanimator: Reanimator,
    keys: KeyBindings,
    swipe: SwipeTracker,
}

impl Presentation {
    pub fn new(settings: DeckSettings) -> Self {
        Self::with_catalog(settings, DepartmentCatalog::builtin().clone())
    }

    pub fn with_catalog(settings: DeckSettings, catalog: DepartmentCatalog) -> Self {
        let mut particles = ParticleField::new();
        (0..settings.slide_count).for_each(|i| particles.register(ContainerId::for_slide(i)));

        for (i, count) in settings.particle_counts.iter().enumerate() {
            particles.create_particles(ContainerId::for_slide(i).as_str(), *count);
        }

        Self {
            slides: SlideController::new(settings.slide_count),
            modal: DepartmentModal::new(catalog),
            particles,
            reanimator: Reanimator::new(
                settings.reanimate_delay,
                settings.restore_delay,
                settings.cancel_pending,
            ),
            keys: settings.keys,
            swipe: SwipeTracker::new(settings.swipe_threshold),
        }
    }

    pub fn reconfigure(&mut self, settings: &DeckSettings) {
        if settings.slide_count != self.slides.len() {
            log::warn!(
                "Slide count changed ({} -> {}); restart to rebuild the deck",
                self.slides.len(),
                settings.slide_count
            );
        }
        self.keys = settings.keys.clone();
        self.swipe.set_threshold(settings.swipe_threshold);
        self.reanimator.configure(
            settings.reanimate_delay,
            settings.restore_delay,
            settings.cancel_pending,
        );
    }

    pub fn slides(&self) -> &SlideController {
        &self.slides
    }

    pub fn modal(&self) -> &DepartmentModal {
        &self.modal
    }

    pub fn particles_for(&self, slide: usize) -> &[Particle] {
        self.particles
            .particles(ContainerId::for_slide(slide).as_str())
    }

    pub fn active_particles(&self) -> &[Particle] {
        self.particles_for(self.slides.current())
    }

    pub fn restore_delay(&self) -> Duration {
        self.reanimator.restore_after()
    }

    pub fn go_to_slide(&mut self, index: usize) -> Effects {
        let transition = self.slides.go_to_slide(index);
        self.after_transition(transition)
    }

    pub fn next_slide(&mut self) -> Effects {
        let transition = self.slides.next_slide();
        self.after_transition(transition)
    }

    pub fn previous_slide(&mut self) -> Effects {
        let transition = self.slides.previous_slide();
        self.after_transition(transition)
    }

    pub fn open_department_modal(&mut self, department: &str) -> Effects {
        Effects {
            modal: self.modal.open(department),
            ..Effects::default()
        }
    }

    pub fn close_department_modal(&mut self) -> Effects {
        Effects {
            modal: self.modal.close(),
            ..Effects::default()
        }
    }

    pub fn handle_key(&mut self, key: NavKey) -> Effects {
        let Some(action) = self.keys.action_for(key) else {
            return Effects::default();
        };

        let effects = match action {
            KeyAction::Next => self.next_slide(),
            KeyAction::Previous => self.previous_slide(),
            KeyAction::CloseModal => self.close_department_modal(),
        };
        Effects {
            suppress_default: action.suppresses_default(),
            ..effects
        }
    }

    pub fn touch_start(&mut self, at: Point) {
        self.swipe.touch_start(at);
    }

    pub fn touch_end(&mut self, at: Point) -> Effects {
        match self.swipe.touch_end(at) {
            Some(SwipeDirection::Left) => self.next_slide(),
            Some(SwipeDirection::Right) => self.previous_slide(),
            None => Effects::default(),
        }
    }

    pub fn apply(&mut self, command: &Command) -> Effects {
        match command {
            Command::Next => self.next_slide(),
            Command::Previous => self.previous_slide(),
            Command::GoTo(index) => self.go_to_slide(*index),
            Command::Open(id) => self.open_department_modal(id),
            Command::Close => self.close_department_modal(),
        }
    }

    pub fn fire_reanimation(&self, ticket: Ticket) -> Option<usize> {
        if self.slides.is_empty() {
            return None;
        }
        self.reanimator.fire(ticket, self.slides.current())
    }

    fn after_transition(&mut self, transition: Option<Transition>) -> Effects {
        if let Some(t) = transition {
            log::debug!("Slide {} -> {}", t.from + 1, t.to + 1);
        }
        Effects {
            transition,
            reanimate: transition.map(|t| self.reanimator.schedule(t)),
            ..Effects::default()
        }
    }
}
