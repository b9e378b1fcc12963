use crate::gui::theme::ThemeColors;
use cairo::Context;
use std::f64::consts::PI;
use talkdeck::particles::Particle;

const DRIFT_X: f64 = 20.0;
const DRIFT_Y: f64 = 40.0;

fn float_offset(particle: &Particle, elapsed: f64) -> (f64, f64, f64) {
    match particle.phase_at(elapsed) {
        Some(phase) => {
            let angle = 2.0 * PI * phase;
            (
                DRIFT_X * (2.0 * angle).sin(),
                -DRIFT_Y * angle.sin(),
                0.6 + 0.4 * angle.cos().abs(),
            )
        }
        None => (0.0, 0.0, 0.6),
    }
}

pub fn draw(
    cr: &Context,
    particles: &[Particle],
    width: f64,
    height: f64,
    elapsed: f64,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let (r, g, b, a) = colors.particle.into_components();
    let (gr, gg, gb, ga) = colors.particle_glow.into_components();

    for particle in particles {
        let (dx, dy, fade) = float_offset(particle, elapsed);
        let (cx, cy) = (
            particle.x / 100.0 * width + dx,
            particle.y / 100.0 * height + dy,
        );
        let radius = particle.size / 2.0;

        cr.set_source_rgba(gr, gg, gb, ga * fade);
        cr.arc(cx, cy, radius * 1.4, 0.0, 2.0 * PI);
        cr.fill()?;

        cr.set_source_rgba(r, g, b, a * fade);
        cr.arc(cx, cy, radius, 0.0, 2.0 * PI);
        cr.fill()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(delay: f64, duration: f64) -> Particle {
        Particle {
            size: 40.0,
            x: 10.0,
            y: 90.0,
            delay,
            duration,
        }
    }

    #[test]
    fn test_still_before_delay() {
        assert_eq!(float_offset(&particle(3.0, 10.0), 1.0), (0.0, 0.0, 0.6));
    }

    #[test]
    fn test_offset_stays_within_drift() {
        let p = particle(0.5, 12.0);
        for step in 0..200 {
            let (dx, dy, fade) = float_offset(&p, step as f64 * 0.1);
            assert!(dx.abs() <= DRIFT_X + 1e-9);
            assert!(dy.abs() <= DRIFT_Y + 1e-9);
            assert!((0.6..=1.0 + 1e-9).contains(&fade));
        }
    }
}
