use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use talkdeck::DeckSettings;
use talkdeck::catalog::DepartmentId;
use talkdeck::input::{KeyBindings, NavKey};
use talkdeck::particles;
use thiserror::Error;

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeckConfig {
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_title() -> String {
    "ServTalks".to_string()
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub fullscreen: bool,
    pub monitor: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fullscreen: true,
            monitor: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NavigationConfig {
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f64,
    #[serde(default)]
    pub next_keys: Option<Vec<NavKey>>,
    #[serde(default)]
    pub previous_keys: Option<Vec<NavKey>>,
    #[serde(default)]
    pub close_keys: Option<Vec<NavKey>>,
}

fn default_swipe_threshold() -> f64 {
    talkdeck::input::DEFAULT_SWIPE_THRESHOLD
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: default_swipe_threshold(),
            next_keys: None,
            previous_keys: None,
            close_keys: None,
        }
    }
}

impl NavigationConfig {
    pub fn key_bindings(&self) -> KeyBindings {
        let defaults = KeyBindings::default();
        KeyBindings {
            next: self.next_keys.clone().unwrap_or(defaults.next),
            previous: self.previous_keys.clone().unwrap_or(defaults.previous),
            close: self.close_keys.clone().unwrap_or(defaults.close),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnimationConfig {
    #[serde(default = "default_reanimate_delay")]
    pub reanimate_delay_ms: u64,
    #[serde(default = "default_restore_delay")]
    pub restore_delay_ms: u64,
    #[serde(default)]
    pub cancel_pending: bool,
}

fn default_reanimate_delay() -> u64 {
    talkdeck::reanimate::REANIMATE_DELAY.as_millis() as u64
}

fn default_restore_delay() -> u64 {
    talkdeck::reanimate::RESTORE_DELAY.as_millis() as u64
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            reanimate_delay_ms: default_reanimate_delay(),
            restore_delay_ms: default_restore_delay(),
            cancel_pending: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParticleConfig {
    #[serde(default = "default_first_particles")]
    pub first: usize,
    #[serde(default = "default_rest_particles")]
    pub rest: usize,
}

fn default_first_particles() -> usize {
    particles::FIRST_SLIDE_PARTICLES
}

fn default_rest_particles() -> usize {
    particles::SLIDE_PARTICLES
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            first: default_first_particles(),
            rest: default_rest_particles(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SlideConfig {
    pub title: String,
    pub subtitle: Option<String>,
    #[serde(default)]
    pub body: Vec<String>,
    #[serde(default)]
    pub departments: Vec<DepartmentId>,
    pub particles: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub deck: DeckConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub particles: ParticleConfig,
    #[serde(default)]
    pub slides: Vec<SlideConfig>,
}

impl Config {
    pub fn deck_settings(&self) -> DeckSettings {
        let particle_counts = self
            .slides
            .iter()
            .enumerate()
            .map(|(i, slide)| {
                slide.particles.unwrap_or_else(|| {
                    particles::count_for_slide(i, self.particles.first, self.particles.rest)
                })
            })
            .collect();

        DeckSettings {
            slide_count: self.slides.len(),
            particle_counts,
            keys: self.navigation.key_bindings(),
            swipe_threshold: self.navigation.swipe_threshold,
            reanimate_delay: Duration::from_millis(self.animation.reanimate_delay_ms),
            restore_delay: Duration::from_millis(self.animation.restore_delay_ms),
            cancel_pending: self.animation.cancel_pending,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
    #[error("Config has no slides")]
    NoSlides,
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "servcrust", "servtalks").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

// Embedded defaults, then the user's `config.toml`, then `SERVTALKS_*` variables
// (`SERVTALKS_NAVIGATION__SWIPE_THRESHOLD=80`).
pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;
    build_config(Some(config_path))
}

fn build_config(user_file: Option<PathBuf>) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder().add_source(config::File::from_str(
        DEFAULT_CONFIG,
        config::FileFormat::Toml,
    ));
    if let Some(path) = user_file {
        builder = builder.add_source(config::File::from(path).required(false));
    }

    let s = builder
        .add_source(
            config::Environment::with_prefix("SERVTALKS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: Config = s.try_deserialize()?;
    if config.slides.is_empty() {
        return Err(ConfigError::NoSlides);
    }
    Ok(config)
}

pub fn default_config() -> Result<Config, ConfigError> {
    build_config(None)
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config, using built-in deck: {}", e);
            default_config().unwrap_or_else(|e| {
                log::error!("Built-in config is invalid: {}", e);
                Config::default()
            })
        }
    }
}

use crate::events::AppEvent;
use async_channel::Sender;

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", ConfigError::from(e));
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let relevant = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if relevant
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_deck() {
        let config = default_config().unwrap();
        assert_eq!(config.deck.title, "ServTalks");
        assert_eq!(config.slides.len(), 13);

        let settings = config.deck_settings();
        assert_eq!(settings.slide_count, 13);
        assert_eq!(settings.particle_counts[0], 50);
        assert!(settings.particle_counts[1..].iter().all(|&n| n == 30));
        assert_eq!(settings.swipe_threshold, 50.0);
        assert_eq!(settings.reanimate_delay, Duration::from_millis(50));
        assert_eq!(settings.restore_delay, Duration::from_millis(10));
        assert!(!settings.cancel_pending);
        assert_eq!(settings.keys, KeyBindings::default());
    }

    #[test]
    fn test_default_departments_exist() {
        let config = default_config().unwrap();
        let catalog = talkdeck::catalog::DepartmentCatalog::builtin();
        for id in config.slides.iter().flat_map(|s| &s.departments) {
            assert!(catalog.get(id).is_some(), "unknown department {}", id);
        }
    }

    #[test]
    fn test_slide_particle_override() {
        let config: Config = serde_json::from_str(
            r#"{
                "particles": { "first": 10, "rest": 5 },
                "slides": [
                    { "title": "One" },
                    { "title": "Two", "particles": 0 },
                    { "title": "Three" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(config.deck_settings().particle_counts, vec![10, 0, 5]);
    }

    #[test]
    fn test_key_overrides() {
        let config: Config = serde_json::from_str(
            r#"{ "navigation": { "next_keys": ["right"], "close_keys": ["esc", "Left"] } }"#,
        )
        .unwrap();
        let keys = config.navigation.key_bindings();
        assert_eq!(keys.next, vec![NavKey::ArrowRight]);
        assert_eq!(keys.previous, vec![NavKey::ArrowLeft]);
        assert_eq!(keys.close, vec![NavKey::Escape, NavKey::ArrowLeft]);
        assert_eq!(config.navigation.swipe_threshold, 50.0);
    }
}
