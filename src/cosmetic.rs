//! Motion and tilt parameters for the cartoon styling.
//!
//! Tilts are derived from the text they decorate rather than drawn at
//! random, so the server-rendered markup and the hydrated DOM agree. The
//! hash is FNV-1a over fixed-width bytes, which gives the same result on
//! the 64-bit server and the wasm32 client.

pub const MAX_TILT_DEG: f64 = 3.0;
pub const SKILL_BAR_STAGGER_SECS: f64 = 0.2;
pub const SKILL_BAR_FILL_SECS: f64 = 1.0;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn fnv1a(bytes: impl IntoIterator<Item = u8>) -> u64 {
    bytes.into_iter().fold(FNV_OFFSET_BASIS, |hash, b| {
        (hash ^ u64::from(b)).wrapping_mul(FNV_PRIME)
    })
}

/// Rotation in degrees within `[-MAX_TILT_DEG, MAX_TILT_DEG]`.
pub fn tilt_deg(label: &str, index: usize) -> f64 {
    let bytes = label
        .bytes()
        .chain((index as u64).to_le_bytes());
    // 601 steps of 0.01 degrees
    let step = (fnv1a(bytes) % 601) as f64;
    step / 100.0 - MAX_TILT_DEG
}

pub fn tilt_style(label: &str, index: usize) -> String {
    format!("transform: rotate({:.2}deg)", tilt_deg(label, index))
}

/// Bars fill one after another in list order.
pub fn skill_bar_delay_secs(index: usize) -> f64 {
    index as f64 * SKILL_BAR_STAGGER_SECS
}

/// Inline style for a skill bar; the width stays at zero until revealed.
pub fn skill_bar_style(level: u8, index: usize, revealed: bool) -> String {
    let width = if revealed { level.min(100) } else { 0 };
    format!(
        "width: {width}%; transition: width {SKILL_BAR_FILL_SECS}s ease-out {:.1}s",
        skill_bar_delay_secs(index)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tilt_is_bounded_and_stable() {
        let labels = ["HTML/CSS", "JavaScript", "", "Web Development Course", "🦀"];
        for label in labels {
            for index in 0..50 {
                let deg = tilt_deg(label, index);
                assert!((-MAX_TILT_DEG..=MAX_TILT_DEG).contains(&deg), "{deg} out of range");
                assert_eq!(deg, tilt_deg(label, index));
            }
        }
    }

    #[test]
    fn test_tilt_is_platform_independent() {
        // reference FNV-1a vectors
        assert_eq!(fnv1a(*b""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a(*b"a"), 0xaf63_dc4c_8601_ec8c);

        // fixed expected values; must match on every target
        assert_eq!(tilt_style("JavaScript", 1), "transform: rotate(-0.64deg)");
        assert_eq!(tilt_style("HTML/CSS", 0), "transform: rotate(-1.19deg)");
    }

    #[test]
    fn test_tilt_style() {
        let style = tilt_style("JavaScript", 1);
        assert!(style.starts_with("transform: rotate("));
        assert!(style.ends_with("deg)"));
    }

    #[test]
    fn test_skill_bars_stagger() {
        assert_eq!(skill_bar_delay_secs(0), 0.0);
        assert!((skill_bar_delay_secs(1) - 0.2).abs() < f64::EPSILON);
        assert!((skill_bar_delay_secs(3) - 0.6).abs() < 1e-9);

        assert_eq!(
            skill_bar_style(90, 0, true),
            "width: 90%; transition: width 1s ease-out 0.0s"
        );
        assert_eq!(
            skill_bar_style(85, 1, false),
            "width: 0%; transition: width 1s ease-out 0.2s"
        );
        assert!(skill_bar_style(250, 0, true).starts_with("width: 100%;"));
    }
}
