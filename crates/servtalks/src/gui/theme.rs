use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub particle: Srgba<f64>,
    pub particle_glow: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            particle: Self::lookup_color(
                context,
                "particle_color",
                Srgba::new(1.0, 1.0, 1.0, 0.08),
                None,
            ),
            particle_glow: Self::lookup_color(
                context,
                "accent_bg_color",
                Srgba::new(0.55, 0.45, 0.95, 0.12),
                Some(0.12),
            ),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

// Slides replay their entry animation when `paused` is removed from their content
// children.
pub const PAUSED_CLASS: &str = "paused";
pub const ACTIVE_CLASS: &str = "active";

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
@define-color particle_color rgba(255, 255, 255, 0.08);

.servtalks-window {
    background-image: linear-gradient(135deg, #1e1b4b, #4c1d95 60%, #7c3aed);
    color: white;
}

.particle-layer, .deck, .deck scrolledwindow, .deck stack {
    background: none;
    background-color: transparent;
}

@keyframes rise-in {
    from { opacity: 0; transform: translateY(30px); }
    to { opacity: 1; transform: none; }
}

.slide-content > * {
    animation: rise-in 800ms ease-out;
}

.slide-content > .paused {
    animation: none;
}

.slide-title { font-size: 48px; font-weight: 800; }
.slide-subtitle { font-size: 24px; opacity: 0.85; }
.slide-body { font-size: 20px; }

.department-button {
    padding: 16px 24px;
    border-radius: 16px;
    background: alpha(white, 0.12);
    color: white;
    font-size: 18px;
}

.deck-controls { padding: 16px 32px; }

.indicator {
    min-width: 12px;
    min-height: 12px;
    padding: 0;
    border-radius: 6px;
    background: alpha(white, 0.3);
}

.indicator.active {
    min-width: 32px;
    background: white;
}

.slide-counter { font-size: 16px; opacity: 0.8; }

.modal-backdrop { background-color: alpha(black, 0.6); }

.modal {
    background-color: #ffffff;
    color: #1f2937;
    border-radius: 24px;
    padding: 32px;
}

.modal-dept-icon { font-size: 56px; }
.modal-title { font-size: 32px; font-weight: 800; }
.modal-subtitle { font-size: 18px; opacity: 0.7; }
.features-intro { font-size: 16px; }

.feature-card {
    background-color: #f3f4f6;
    border-radius: 16px;
    padding: 16px;
}

.feature-icon { font-size: 28px; }
.feature-title { font-size: 18px; font-weight: 700; }
.key-points-title { font-size: 20px; font-weight: 700; }
.key-point-item { background-color: #ede9fe; border-radius: 12px; padding: 12px; }
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
