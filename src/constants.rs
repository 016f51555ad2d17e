use glam::DVec3;
use once_cell::sync::Lazy;

// ===== Placement =====
pub const DEFAULT_SHELL_MIN: f64 = 24.0;
pub const DEFAULT_SHELL_MAX: f64 = 96.0;
pub const DEFAULT_JITTER: f64 = 0.4;
pub const SHELL_SCALE: f64 = 1.8; // shell radius -> scene units
pub const FALLBACK_DIRECTION: DVec3 = DVec3::X;

// FNV-1a (32 bit)
pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
pub const FNV_PRIME: u32 = 16_777_619;

// mulberry32
pub const MULBERRY_INCREMENT: u32 = 0x6D2B_79F5;
pub const JITTER_SEED_MASK: u32 = 0x9E37_79B9;

// ===== Visual radius =====
pub const EARTH_RADIUS_SCENE: f64 = 0.5;
pub const MIN_VISUAL_RADIUS: f64 = 0.35;
pub const MAX_VISUAL_RADIUS: f64 = 1.6;
pub const VISUAL_RADIUS_SCALE: f64 = 0.3;
pub const FALLBACK_VISUAL_RADIUS: f64 = 0.8;

// ===== Equilibrium temperature =====
pub const DEFAULT_ALBEDO: f64 = 0.3;
pub const DAYS_PER_YEAR: f64 = 365.25;
pub const SOLAR_RADIUS_AU: f64 = 0.004_650_47;
pub const MIN_TEQ_K: f64 = 50.0;
pub const MAX_TEQ_K: f64 = 4000.0;

// radius heuristic tiers: (min radius in Earth radii, temperature)
pub const GIANT_RADIUS_EARTH: f64 = 6.0;
pub const GIANT_TEQ_K: f64 = 1200.0;
pub const SUB_NEPTUNE_RADIUS_EARTH: f64 = 2.0;
pub const SUB_NEPTUNE_TEQ_K: f64 = 600.0;
pub const ROCKY_TEQ_K: f64 = 300.0;

// ===== Camera focus =====
pub const FOCUS_RADIUS_FACTOR: f64 = 6.0;
pub const MIN_FOCUS_DISTANCE: f64 = 2.0;
pub const MAX_FOCUS_DISTANCE: f64 = 3.5;

// ===== Reference bodies =====
pub const SUN_SCENE_RADIUS: f64 = 2.0;
pub const SUN_SHADER_TEQ_K: f64 = 6000.0;
pub const SUN_COLOR_HEX: &str = "#ffce5d";
pub const EARTH_SCENE_POSITION: DVec3 = DVec3::new(8.0, 0.0, 0.0);
pub const EARTH_SHADER_TEQ_K: f64 = 288.0;
pub const EARTH_COLOR_HEX: &str = "#4A90E2";

pub const UNKNOWN_LABEL: &str = "—";

pub static DEFAULT_LIGHT_DIR: Lazy<DVec3> = Lazy::new(|| DVec3::new(0.7, 0.6, 1.0).normalize());
pub static SUN_LIGHT_DIR: Lazy<DVec3> = Lazy::new(|| DVec3::new(1.0, 0.2, 0.1).normalize());
