use crate::catalog::{DepartmentCatalog, DepartmentDescriptor, DepartmentId};

pub const KEY_POINTS_ICON: &str = "⚡";
pub const KEY_POINTS_HEADING: &str = "Key Capabilities";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureBlock {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub bullets: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPointEntry {
    pub icon: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub department: DepartmentId,
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub intro: String,
    pub features: Vec<FeatureBlock>,
    pub key_points_heading: String,
    pub key_points: Vec<KeyPointEntry>,
}

impl ModalContent {
    pub fn render(dept: &DepartmentDescriptor) -> Self {
        Self {
            department: dept.id.clone(),
            icon: dept.icon.clone(),
            title: dept.title.clone(),
            subtitle: dept.subtitle.clone(),
            intro: dept.intro.clone(),
            features: dept
                .features
                .iter()
                .map(|f| FeatureBlock {
                    icon: f.icon.clone(),
                    title: f.title.clone(),
                    description: f.description.clone(),
                    bullets: (!f.list.is_empty()).then(|| f.list.clone()),
                })
                .collect(),
            key_points_heading: format!("{} {}", KEY_POINTS_ICON, KEY_POINTS_HEADING),
            key_points: dept
                .key_points
                .iter()
                .map(|k| KeyPointEntry {
                    icon: k.icon.clone(),
                    text: k.text.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalChange {
    Opened(DepartmentId),
    Closed,
}

#[derive(Debug, Clone)]
pub struct DepartmentModal {
    catalog: DepartmentCatalog,
    open: bool,
    body: Option<ModalContent>,
    scroll_locked: bool,
}

impl DepartmentModal {
    pub fn new(catalog: DepartmentCatalog) -> Self {
        Self {
            catalog,
            open: false,
            body: None,
            scroll_locked: false,
        }
    }

    pub fn with_builtin() -> Self {
        Self::new(DepartmentCatalog::builtin().clone())
    }

    pub fn catalog(&self) -> &DepartmentCatalog {
        &self.catalog
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn body(&self) -> Option<&ModalContent> {
        self.body.as_ref()
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn open(&mut self, department: &str) -> Option<ModalChange> {
        let Some(dept) = self.catalog.get(department) else {
            log::warn!("Unknown department '{}'", department);
            return None;
        };

        self.body = Some(ModalContent::render(dept));
        self.open = true;
        self.scroll_locked = true;
        log::debug!("Opened department modal '{}'", dept.id);
        Some(ModalChange::Opened(dept.id.clone()))
    }

    pub fn close(&mut self) -> Option<ModalChange> {
        if !self.open {
            return None;
        }
        self.open = false;
        self.scroll_locked = false;
        Some(ModalChange::Closed)
    }
}

impl Default for DepartmentModal {
    fn default() -> Self {
        Self::with_builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_management() {
        let mut modal = DepartmentModal::default();
        let change = modal.open("management");

        assert_eq!(change, Some(ModalChange::Opened(DepartmentId::new("management"))));
        assert!(modal.is_open());
        assert!(modal.scroll_locked());

        let body = modal.body().unwrap();
        assert_eq!(body.icon, "📊");
        assert_eq!(body.title, "Management");
        assert_eq!(body.subtitle, "Strategic Business Insights");
        assert_eq!(body.features.len(), 2);
        assert_eq!(body.key_points.len(), 4);
        assert_eq!(body.key_points_heading, "⚡ Key Capabilities");

        let dept = modal.catalog().get("management").unwrap();
        for (block, feature) in body.features.iter().zip(&dept.features) {
            assert_eq!(block.title, feature.title);
            assert_eq!(block.description, feature.description);
            assert_eq!(block.bullets, None);
        }
        for (entry, point) in body.key_points.iter().zip(&dept.key_points) {
            assert_eq!(entry.icon, point.icon);
            assert_eq!(entry.text, point.text);
        }
    }

    #[test]
    fn bullet_list_only_when_present() {
        let mut modal = DepartmentModal::default();
        modal.open("sales");
        let body = modal.body().unwrap();
        assert_eq!(body.features[0].bullets.as_ref().map(Vec::len), Some(4));
        assert_eq!(body.features[1].bullets, None);
    }

    #[test]
    fn unknown_department_is_ignored() {
        let mut modal = DepartmentModal::default();
        assert_eq!(modal.open("not-a-real-dept"), None);
        assert!(!modal.is_open());
        assert!(modal.body().is_none());
        assert!(!modal.scroll_locked());
    }

    #[test]
    fn unknown_department_keeps_previous_body() {
        let mut modal = DepartmentModal::default();
        modal.open("finance");
        let before = modal.body().cloned();

        modal.open("not-a-real-dept");
        assert!(modal.is_open());
        assert_eq!(modal.body().cloned(), before);
    }

    #[test]
    fn opening_again_replaces_content() {
        let mut modal = DepartmentModal::default();
        modal.open("finance");
        modal.open("operations");
        assert_eq!(modal.body().unwrap().title, "Operations");
        assert_eq!(modal.body().unwrap().features.len(), 3);
    }

    #[test]
    fn close_is_idempotent() {
        let mut modal = DepartmentModal::default();
        modal.open("management");

        assert_eq!(modal.close(), Some(ModalChange::Closed));
        assert!(!modal.is_open());
        assert!(!modal.scroll_locked());

        assert_eq!(modal.close(), None);
        assert!(!modal.is_open());
        assert!(!modal.scroll_locked());
    }
}
