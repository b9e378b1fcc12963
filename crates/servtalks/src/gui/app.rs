use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::modal;
use crate::gui::particles;
use crate::gui::slides::SlidePage;
use crate::gui::theme::{self, ACTIVE_CLASS, ThemeColors};
use crate::gui::window;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;
use std::time::Instant;
use talkdeck::Presentation;
use talkdeck::catalog::DepartmentId;
use talkdeck::command::Command;
use talkdeck::input::{NavKey, Point};
use talkdeck::modal::ModalChange;
use talkdeck::presentation::Effects;
use talkdeck::reanimate::Ticket;

pub struct AppModel {
    pub presentation: Rc<RefCell<Presentation>>,
    pub title: String,
    pub counter: String,
    pub at_first: bool,
    pub at_last: bool,
    pub modal_open: bool,
    pub scroll_locked: bool,
    pub stack: gtk::Stack,
    pub pages: Vec<SlidePage>,
    pub indicators: Vec<gtk::Button>,
    pub modal_body: gtk::Box,
    pub particle_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Handled(Effects),
    Next,
    Previous,
    GoTo(usize),
    OpenDepartment(DepartmentId),
    CloseDepartment,
    TouchStart(Point),
    TouchEnd(Point),
    Remote(Command),
    Reanimate(Ticket),
    RestoreAnimation(usize),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Command(c) => AppMsg::Remote(c),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

fn nav_key(key: gdk4::Key) -> Option<NavKey> {
    key.name().and_then(|name| NavKey::from_str(name.as_str()).ok())
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, Presentation, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            set_title: Some(&model.title),
            set_default_size: (1280, 720),
            add_css_class: "servtalks-window",

            gtk::Overlay {
                #[name = "particle_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,
                    set_can_target: false,
                    add_css_class: "particle-layer",
                },

                add_overlay = &gtk::Box {
                    set_orientation: gtk::Orientation::Vertical,
                    add_css_class: "deck",

                    gtk::ScrolledWindow {
                        set_vexpand: true,
                        set_hscrollbar_policy: gtk::PolicyType::Never,
                        #[watch]
                        set_can_target: !model.scroll_locked,

                        #[name = "stack"]
                        gtk::Stack {
                            set_transition_type: gtk::StackTransitionType::Crossfade,
                            set_transition_duration: 400,
                        },
                    },

                    gtk::Box {
                        set_orientation: gtk::Orientation::Horizontal,
                        set_spacing: 16,
                        add_css_class: "deck-controls",

                        gtk::Button {
                            set_label: "‹",
                            add_css_class: "nav-button",
                            #[watch]
                            set_sensitive: !model.at_first,
                            connect_clicked => AppMsg::Previous,
                        },

                        #[name = "indicator_row"]
                        gtk::Box {
                            set_orientation: gtk::Orientation::Horizontal,
                            set_spacing: 8,
                            set_hexpand: true,
                            set_halign: gtk::Align::Center,
                            set_valign: gtk::Align::Center,
                        },

                        gtk::Label {
                            add_css_class: "slide-counter",
                            #[watch]
                            set_label: &model.counter,
                        },

                        gtk::Button {
                            set_label: "›",
                            add_css_class: "nav-button",
                            #[watch]
                            set_sensitive: !model.at_last,
                            connect_clicked => AppMsg::Next,
                        },
                    },
                },

                add_overlay = &gtk::Box {
                    add_css_class: "modal-backdrop",
                    #[watch]
                    set_visible: model.modal_open,

                    gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        set_hexpand: true,
                        set_halign: gtk::Align::Center,
                        set_valign: gtk::Align::Center,
                        set_width_request: 720,
                        add_css_class: "modal",

                        gtk::Button {
                            set_label: "×",
                            set_halign: gtk::Align::End,
                            add_css_class: "modal-close",
                            connect_clicked => AppMsg::CloseDepartment,
                        },

                        gtk::ScrolledWindow {
                            set_hscrollbar_policy: gtk::PolicyType::Never,
                            set_propagate_natural_height: true,
                            set_max_content_height: 640,

                            #[name = "modal_body"]
                            gtk::Box {
                                set_orientation: gtk::Orientation::Vertical,
                                set_spacing: 24,
                                add_css_class: "modal-body",
                            },
                        },
                    },
                },
            },
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, presentation, rx) = init;

        theme::load_css();

        let model = AppModel {
            title: config.deck.title.clone(),
            counter: presentation.slides().counter_text(),
            at_first: presentation.slides().is_first(),
            at_last: presentation.slides().is_last(),
            modal_open: false,
            scroll_locked: false,
            presentation: Rc::new(RefCell::new(presentation)),
            stack: gtk::Stack::default(),
            pages: Vec::new(),
            indicators: Vec::new(),
            modal_body: gtk::Box::default(),
            particle_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.stack = widgets.stack.clone();
        model.modal_body = widgets.modal_body.clone();
        model.particle_area = widgets.particle_area.clone();

        for (i, slide) in config.slides.iter().enumerate() {
            let page = SlidePage::build(slide, &sender);
            widgets
                .stack
                .add_named(&page.root, Some(&format!("slide-{}", i + 1)));
            model.pages.push(page);

            let indicator = gtk::Button::new();
            indicator.add_css_class("indicator");
            indicator.set_tooltip_text(Some(&slide.title));
            let indicator_sender = sender.clone();
            indicator.connect_clicked(move |_| indicator_sender.input(AppMsg::GoTo(i)));
            widgets.indicator_row.append(&indicator);
            model.indicators.push(indicator);
        }
        model.sync_slides();

        let state_draw = model.presentation.clone();
        let started = Instant::now();
        widgets
            .particle_area
            .set_draw_func(move |area, cr, width, height| {
                let colors = ThemeColors::from_context(&area.style_context());
                let state = state_draw.borrow();
                if let Err(e) = particles::draw(
                    cr,
                    state.active_particles(),
                    width as f64,
                    height as f64,
                    started.elapsed().as_secs_f64(),
                    &colors,
                ) {
                    log::error!("Drawing error: {}", e);
                }
            });
        widgets.particle_area.add_tick_callback(|area, _| {
            area.queue_draw();
            glib::ControlFlow::Continue
        });

        // Capture phase so Escape and the arrows work whatever has focus.
        let keys = gtk::EventControllerKey::new();
        keys.set_propagation_phase(gtk::PropagationPhase::Capture);
        let key_state = model.presentation.clone();
        let key_sender = sender.clone();
        keys.connect_key_pressed(move |_, key, _, _| {
            let Some(nav) = nav_key(key) else {
                return glib::Propagation::Proceed;
            };
            let effects = key_state.borrow_mut().handle_key(nav);
            let suppress = effects.suppress_default;
            if !effects.is_empty() {
                key_sender.input(AppMsg::Handled(effects));
            }
            if suppress {
                glib::Propagation::Stop
            } else {
                glib::Propagation::Proceed
            }
        });
        root.add_controller(keys);

        let swipe = gtk::GestureDrag::new();
        swipe.set_touch_only(true);
        let begin_sender = sender.clone();
        swipe.connect_drag_begin(move |_, x, y| {
            begin_sender.input(AppMsg::TouchStart(Point::new(x, y)));
        });
        let end_sender = sender.clone();
        swipe.connect_drag_end(move |gesture, dx, dy| {
            if let Some((x, y)) = gesture.start_point() {
                end_sender.input(AppMsg::TouchEnd(Point::new(x + dx, y + dy)));
            }
        });
        root.add_controller(swipe);

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        window::apply_display(&root, &config.display);

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        let effects = match msg {
            AppMsg::Handled(effects) => effects,
            AppMsg::Next => self.presentation.borrow_mut().next_slide(),
            AppMsg::Previous => self.presentation.borrow_mut().previous_slide(),
            AppMsg::GoTo(index) => self.presentation.borrow_mut().go_to_slide(index),
            AppMsg::OpenDepartment(id) => {
                self.presentation.borrow_mut().open_department_modal(&id)
            }
            AppMsg::CloseDepartment => self.presentation.borrow_mut().close_department_modal(),
            AppMsg::TouchStart(point) => {
                self.presentation.borrow_mut().touch_start(point);
                return;
            }
            AppMsg::TouchEnd(point) => self.presentation.borrow_mut().touch_end(point),
            AppMsg::Remote(command) => {
                log::info!("Remote command: {}", command);
                self.presentation.borrow_mut().apply(&command)
            }
            AppMsg::Reanimate(ticket) => {
                self.reanimate(ticket, &sender);
                return;
            }
            AppMsg::RestoreAnimation(slide) => {
                if let Some(page) = self.pages.get(slide) {
                    page.resume_animations();
                }
                return;
            }
            AppMsg::ConfigReload => {
                self.reload_config();
                return;
            }
        };
        self.apply_effects(effects, &sender);
    }
}

impl AppModel {
    fn apply_effects(&mut self, effects: Effects, sender: &ComponentSender<Self>) {
        if effects.transition.is_some() {
            self.sync_slides();
        }

        if let Some(ticket) = effects.reanimate {
            let sender = sender.clone();
            glib::timeout_add_local_once(ticket.delay, move || {
                sender.input(AppMsg::Reanimate(ticket));
            });
        }

        if let Some(change) = effects.modal {
            let state = self.presentation.borrow();
            if let (ModalChange::Opened(_), Some(body)) = (&change, state.modal().body()) {
                modal::populate(&self.modal_body, body);
            }
            self.modal_open = state.modal().is_open();
            self.scroll_locked = state.modal().scroll_locked();
        }
    }

    fn sync_slides(&mut self) {
        let state = self.presentation.borrow();
        let slides = state.slides();

        if let Some(page) = self.pages.get(slides.current()) {
            self.stack.set_visible_child(&page.root);
        }
        for (i, indicator) in self.indicators.iter().enumerate() {
            if slides.indicator_active(i) {
                indicator.add_css_class(ACTIVE_CLASS);
            } else {
                indicator.remove_css_class(ACTIVE_CLASS);
            }
        }

        self.counter = slides.counter_text();
        self.at_first = slides.is_first();
        self.at_last = slides.is_last();
        self.particle_area.queue_draw();
    }

    fn reanimate(&self, ticket: Ticket, sender: &ComponentSender<Self>) {
        let (slide, restore_after) = {
            let state = self.presentation.borrow();
            (state.fire_reanimation(ticket), state.restore_delay())
        };
        let Some(slide) = slide else {
            return;
        };
        let Some(page) = self.pages.get(slide) else {
            return;
        };

        page.pause_animations();
        let sender = sender.clone();
        glib::timeout_add_local_once(restore_after, move || {
            sender.input(AppMsg::RestoreAnimation(slide));
        });
    }

    fn reload_config(&mut self) {
        match config::load_config() {
            Ok(new_config) => {
                self.presentation
                    .borrow_mut()
                    .reconfigure(&new_config.deck_settings());
                log::info!("Configuration reloaded");
            }
            Err(e) => log::error!("Failed to reload config: {}", e),
        }
    }
}
