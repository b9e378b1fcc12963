use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;
use thiserror::Error;

const BUILTIN_DEPARTMENTS: &str = include_str!("departments.toml");

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct DepartmentId(String);

crate::impl_string_newtype!(DepartmentId);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub list: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct KeyPoint {
    pub icon: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DepartmentDescriptor {
    pub id: DepartmentId,
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub intro: String,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub key_points: Vec<KeyPoint>,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to parse department table: {0}")]
    Parse(#[from] config::ConfigError),
    #[error("Department '{id}' has an empty {field}")]
    MissingField { id: String, field: &'static str },
    #[error("Department '{0}' is defined more than once")]
    Duplicate(String),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DepartmentCatalog {
    #[serde(default)]
    departments: Vec<DepartmentDescriptor>,
}

impl DepartmentCatalog {
    pub fn from_toml(source: &str) -> Result<Self, CatalogError> {
        let catalog: Self = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn builtin() -> &'static DepartmentCatalog {
        static BUILTIN: OnceLock<DepartmentCatalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Self::from_toml(BUILTIN_DEPARTMENTS).unwrap_or_else(|e| {
                log::error!("Built-in department table is invalid: {}", e);
                Self::default()
            })
        })
    }

    pub fn get(&self, id: &str) -> Option<&DepartmentDescriptor> {
        self.departments.iter().find(|d| d.id.as_str() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DepartmentDescriptor> {
        self.departments.iter()
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for dept in &self.departments {
            let missing = |field| CatalogError::MissingField {
                id: dept.id.to_string(),
                field,
            };

            if dept.id.trim().is_empty() {
                return Err(missing("id"));
            }
            if !seen.insert(dept.id.as_str()) {
                return Err(CatalogError::Duplicate(dept.id.to_string()));
            }

            [
                (&dept.icon, "icon"),
                (&dept.title, "title"),
                (&dept.subtitle, "subtitle"),
                (&dept.intro, "intro"),
            ]
            .into_iter()
            .find(|(value, _)| value.trim().is_empty())
            .map_or(Ok(()), |(_, field)| Err(missing(field)))?;

            if dept
                .features
                .iter()
                .any(|f| f.title.trim().is_empty() || f.description.trim().is_empty())
            {
                return Err(missing("feature"));
            }
            if dept.key_points.iter().any(|k| k.text.trim().is_empty()) {
                return Err(missing("key point"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_departments() {
        let catalog = DepartmentCatalog::builtin();
        let ids: Vec<_> = catalog.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["management", "operations", "finance", "sales"]);
    }

    #[test]
    fn test_management_descriptor() {
        let dept = DepartmentCatalog::builtin().get("management").unwrap();
        assert_eq!(dept.icon, "📊");
        assert_eq!(dept.title, "Management");
        assert_eq!(dept.subtitle, "Strategic Business Insights");
        assert_eq!(dept.features.len(), 2);
        assert_eq!(dept.features[0].title, "Interactive Dashboards");
        assert_eq!(dept.key_points.len(), 4);
        assert_eq!(dept.key_points[3].text, "Real-time Updates");
    }

    #[test]
    fn test_feature_lists_are_optional() {
        let catalog = DepartmentCatalog::builtin();
        let sales = catalog.get("sales").unwrap();
        assert_eq!(sales.features[0].list.len(), 4);
        assert_eq!(sales.features[0].list[2], "Navigation to prospective customer villages");
        assert!(sales.features[1].list.is_empty());

        let ops = catalog.get("operations").unwrap();
        assert_eq!(ops.features.len(), 3);
        assert!(ops.features.iter().all(|f| f.list.is_empty()));
    }

    #[test]
    fn test_unknown_department() {
        assert!(DepartmentCatalog::builtin().get("not-a-real-dept").is_none());
    }

    #[test]
    fn test_rejects_empty_title() {
        let source = r#"
            [[departments]]
            id = "hr"
            icon = "👥"
            title = ""
            subtitle = "People"
            intro = "Hiring."
        "#;
        let err = DepartmentCatalog::from_toml(source).unwrap_err();
        assert!(matches!(err, CatalogError::MissingField { field: "title", .. }));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let dept = r#"
            [[departments]]
            id = "hr"
            icon = "👥"
            title = "HR"
            subtitle = "People"
            intro = "Hiring."
        "#;
        let err = DepartmentCatalog::from_toml(&format!("{dept}{dept}")).unwrap_err();
        assert!(matches!(err, CatalogError::Duplicate(id) if id == "hr"));
    }

    #[test]
    fn test_rejects_missing_fields() {
        let source = r#"
            [[departments]]
            id = "hr"
            title = "HR"
        "#;
        assert!(matches!(
            DepartmentCatalog::from_toml(source),
            Err(CatalogError::Parse(_))
        ));
    }
}
