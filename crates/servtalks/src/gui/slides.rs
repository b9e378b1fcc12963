use crate::config::SlideConfig;
use crate::gui::app::{AppModel, AppMsg};
use crate::gui::theme::PAUSED_CLASS;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::ComponentSender;
use talkdeck::catalog::DepartmentCatalog;

#[derive(Debug, Clone)]
pub struct SlidePage {
    pub root: gtk::Box,
    pub content: gtk::Box,
}

impl SlidePage {
    pub fn build(slide: &SlideConfig, sender: &ComponentSender<AppModel>) -> Self {
        let root = gtk::Box::builder()
            .orientation(gtk::Orientation::Vertical)
            .hexpand(true)
            .vexpand(true)
            .valign(gtk::Align::Center)
            .build();
        root.add_css_class("slide");

        let content = gtk::Box::builder()
            .orientation(gtk::Orientation::Vertical)
            .spacing(16)
            .halign(gtk::Align::Center)
            .build();
        content.add_css_class("slide-content");

        content.append(&label(&slide.title, "slide-title"));
        if let Some(subtitle) = &slide.subtitle {
            content.append(&label(subtitle, "slide-subtitle"));
        }
        for line in &slide.body {
            content.append(&label(line, "slide-body"));
        }

        if !slide.departments.is_empty() {
            let row = gtk::Box::builder()
                .orientation(gtk::Orientation::Horizontal)
                .spacing(16)
                .halign(gtk::Align::Center)
                .build();
            row.add_css_class("department-row");

            let catalog = DepartmentCatalog::builtin();
            for id in &slide.departments {
                let text = catalog
                    .get(id)
                    .map(|d| format!("{}  {}", d.icon, d.title))
                    .unwrap_or_else(|| id.to_string());

                let button = gtk::Button::builder().label(text).build();
                button.add_css_class("department-button");

                let sender = sender.clone();
                let id = id.clone();
                button.connect_clicked(move |_| {
                    sender.input(AppMsg::OpenDepartment(id.clone()));
                });
                row.append(&button);
            }
            content.append(&row);
        }

        root.append(&content);
        Self { root, content }
    }

    pub fn pause_animations(&self) {
        self.for_each_child(|w| w.add_css_class(PAUSED_CLASS));
    }

    pub fn resume_animations(&self) {
        self.for_each_child(|w| w.remove_css_class(PAUSED_CLASS));
    }

    fn for_each_child(&self, f: impl Fn(&gtk::Widget)) {
        let mut child = self.content.first_child();
        while let Some(widget) = child {
            f(&widget);
            child = widget.next_sibling();
        }
    }
}

fn label(text: &str, class: &str) -> gtk::Label {
    let label = gtk::Label::builder()
        .label(text)
        .wrap(true)
        .justify(gtk::Justification::Center)
        .build();
    label.add_css_class(class);
    label
}
