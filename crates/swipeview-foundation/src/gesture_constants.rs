//! Shared gesture constants for the swipe recognizer.
//!
//! All distances are in logical pixels, speeds in logical pixels per second.
//! For very high-density touch screens, hosts should scale the slop by the
//! device's DPI factor through `SwipeConfig::with_touch_slop`.

/// Minimum intentional horizontal drag before a contact becomes a swipe.
///
/// Matches the platform paging slop (twice the regular touch slop of ~8dp),
/// so a vertical list scroll keeps its gesture until the finger has clearly
/// travelled sideways.
pub const PAGING_TOUCH_SLOP: f32 = 16.0;

/// Floor for the width-derived swipe-out distance and speed.
///
/// Keeps a very narrow (or zero-width) surface from dismissing on any
/// twitch of the finger.
pub const MIN_SWIPE_OUT_THRESHOLD: f32 = 24.0;

/// Threshold used until a surface width is known. No real gesture reaches it.
pub const UNREACHABLE_THRESHOLD: f32 = f32::MAX;

/// How far the surface flies when it is dismissed before any width is known.
pub const OFFSCREEN_FALLBACK_DISTANCE: f32 = 2_000.0;

/// Alpha reached at full swipe-out distance during a live drag.
pub const MIN_FADE_ALPHA: f32 = 0.1;

/// Bounce-back transition length in milliseconds.
pub const BOUNCE_BACK_DURATION_MILLIS: u64 = 200;

/// Bounds for the velocity-derived swipe-out flight time, in milliseconds.
pub const MIN_SWIPE_OUT_DURATION_MILLIS: u64 = 100;
pub const MAX_SWIPE_OUT_DURATION_MILLIS: u64 = 400;
