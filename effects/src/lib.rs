//! Decorative page behaviors as plain state machines and math.
//!
//! Everything here runs without a browser: timers, observers, and pointer
//! events are modeled as explicit inputs (ticks, visibility reports, local
//! coordinates) so the whole crate is testable natively. The `site` crate
//! wires these types to real DOM events; [`render`] is the one module that
//! touches a canvas context.
//!
//! | Module | Role |
//! |--------|------|
//! | [`consts`] | Shared tuning constants |
//! | [`counter`] | Stat counter animation state machine |
//! | [`field`] | Particle spawn, integration, link computation |
//! | [`nav`] | Navbar scroll state, active section, float visibility |
//! | [`render`] | Canvas 2D drawing of the particle field |
//! | [`reveal`] | One-shot reveal latching and stagger timing |
//! | [`tilt`] | Pointer-tilt math and transform strings |
//! | [`timing`] | Resize debounce and headline shimmer phase |

pub mod consts;
pub mod counter;
pub mod field;
pub mod nav;
pub mod render;
pub mod reveal;
pub mod tilt;
pub mod timing;
