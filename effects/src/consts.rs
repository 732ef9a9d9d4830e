//! Shared tuning constants for the page effects.

// ── Particle field ──────────────────────────────────────────────

/// Surface area (px^2) per spawned particle.
pub const AREA_PER_PARTICLE: f64 = 14000.0;

/// Maximum distance (px) at which two particles are linked by a line.
pub const LINK_DISTANCE: f64 = 120.0;

/// Link opacity at zero distance; fades linearly to 0 at [`LINK_DISTANCE`].
pub const LINK_BASE_ALPHA: f64 = 0.06;

/// Link stroke color channels, without alpha.
pub const LINK_RGB: &str = "255, 214, 10";

/// Smallest particle radius (px).
pub const RADIUS_MIN: f64 = 0.5;

/// Width of the particle radius range (px).
pub const RADIUS_SPAN: f64 = 2.2;

/// Width of the per-axis velocity range (px per frame), centered on zero.
pub const SPEED_SPAN: f64 = 0.35;

/// Smallest particle opacity.
pub const ALPHA_MIN: f64 = 0.15;

/// Width of the particle opacity range.
pub const ALPHA_SPAN: f64 = 0.5;

/// Particle fill palette. The lead accent appears twice so it is picked
/// twice as often.
pub const PALETTE: [&str; 6] = [
    "#FFD60A", "#FFD60A", "#1D4ED8", "#3B82F6", "#FFAA00", "#60A5FA",
];

// ── Scroll and reveal ───────────────────────────────────────────

/// Scroll offset (px) past which the navbar takes its scrolled style.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Visible fraction of a reveal element that triggers it.
pub const REVEAL_THRESHOLD: f64 = 0.12;

/// Root margin for the reveal observer; trims 40px off the viewport bottom
/// so elements reveal slightly after entering.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";

/// Delay step (ms) between reveal-tagged siblings.
pub const REVEAL_STAGGER_MS: u32 = 80;

// ── Counters ────────────────────────────────────────────────────

/// Visible fraction of a stat element that starts its counter.
pub const COUNTER_THRESHOLD: f64 = 0.5;

/// Total counter animation duration (ms).
pub const COUNTER_DURATION_MS: f64 = 1800.0;

/// Counter update interval (ms).
pub const COUNTER_TICK_MS: u32 = 16;

// ── Card tilt ───────────────────────────────────────────────────

/// Peak rotation (deg) for an ordinary card corner.
pub const TILT_MAX_DEG: f64 = 6.0;

/// Peak rotation (deg) for the featured card corner.
pub const TILT_FEATURED_MAX_DEG: f64 = 5.0;

/// Perspective depth (px) for the tilt transform.
pub const TILT_PERSPECTIVE_PX: f64 = 800.0;

/// Vertical lift (px) applied while a card tilts.
pub const TILT_LIFT_PX: f64 = -8.0;

/// Scale the featured card keeps at rest and while tilting.
pub const FEATURED_SCALE: f64 = 1.04;

// ── Timers ──────────────────────────────────────────────────────

/// Resize settling delay (ms); only the last resize in a burst regenerates
/// the particle field.
pub const RESIZE_DEBOUNCE_MS: u32 = 200;

/// Interval (ms) between headline shimmer pulses.
pub const SHIMMER_PERIOD_MS: u32 = 4000;

/// How long (ms) the brightness pulse holds before reverting.
pub const SHIMMER_HOLD_MS: u32 = 600;

/// Filter applied to the gradient spans during the bright phase.
pub const SHIMMER_FILTER: &str = "brightness(1.3)";

// ── Observers ───────────────────────────────────────────────────

/// Visible fraction of a section that marks its nav link active.
pub const SECTION_THRESHOLD: f64 = 0.4;

/// Visible fraction of a call-to-action that hides the floating button.
pub const CTA_THRESHOLD: f64 = 0.5;
