use gtk::prelude::*;
use gtk4 as gtk;
use talkdeck::modal::{FeatureBlock, KeyPointEntry, ModalContent};

pub fn populate(body: &gtk::Box, content: &ModalContent) {
    while let Some(child) = body.first_child() {
        body.remove(&child);
    }

    let header = vbox(4, "modal-header");
    header.append(&label(&content.icon, "modal-dept-icon"));
    header.append(&label(&content.title, "modal-title"));
    header.append(&label(&content.subtitle, "modal-subtitle"));
    body.append(&header);

    let features = vbox(12, "features-section");
    features.append(&label(&content.intro, "features-intro"));
    for block in &content.features {
        features.append(&feature_card(block));
    }
    body.append(&features);

    let key_points = vbox(8, "key-points");
    key_points.append(&label(&content.key_points_heading, "key-points-title"));
    let list = gtk::FlowBox::builder()
        .selection_mode(gtk::SelectionMode::None)
        .max_children_per_line(2)
        .column_spacing(8)
        .row_spacing(8)
        .build();
    list.add_css_class("key-points-list");
    for entry in &content.key_points {
        list.insert(&key_point(entry), -1);
    }
    key_points.append(&list);
    body.append(&key_points);
}

fn feature_card(block: &FeatureBlock) -> gtk::Box {
    let card = vbox(8, "feature-card");

    let header = gtk::Box::new(gtk::Orientation::Horizontal, 12);
    header.add_css_class("feature-header");
    header.append(&label(&block.icon, "feature-icon"));
    header.append(&label(&block.title, "feature-title"));
    card.append(&header);

    card.append(&label(&block.description, "feature-description"));

    if let Some(bullets) = &block.bullets {
        let list = vbox(4, "feature-list");
        for item in bullets {
            list.append(&label(&format!("•  {}", item), "feature-list-item"));
        }
        card.append(&list);
    }
    card
}

fn key_point(entry: &KeyPointEntry) -> gtk::Box {
    let item = gtk::Box::new(gtk::Orientation::Horizontal, 8);
    item.add_css_class("key-point-item");
    item.append(&label(&entry.icon, "key-point-icon"));
    item.append(&label(&entry.text, "key-point-text"));
    item
}

fn vbox(spacing: i32, class: &str) -> gtk::Box {
    let b = gtk::Box::new(gtk::Orientation::Vertical, spacing);
    b.add_css_class(class);
    b
}

fn label(text: &str, class: &str) -> gtk::Label {
    let label = gtk::Label::builder()
        .label(text)
        .wrap(true)
        .xalign(0.0)
        .build();
    label.add_css_class(class);
    label
}
