use crate::catalog::CatalogEntry;
use crate::constants::{
    DAYS_PER_YEAR, DEFAULT_ALBEDO, EARTH_RADIUS_SCENE, FALLBACK_VISUAL_RADIUS, FOCUS_RADIUS_FACTOR,
    GIANT_RADIUS_EARTH, GIANT_TEQ_K, MAX_FOCUS_DISTANCE, MAX_TEQ_K, MAX_VISUAL_RADIUS,
    MIN_FOCUS_DISTANCE, MIN_TEQ_K, MIN_VISUAL_RADIUS, ROCKY_TEQ_K, SOLAR_RADIUS_AU,
    SUB_NEPTUNE_RADIUS_EARTH, SUB_NEPTUNE_TEQ_K, VISUAL_RADIUS_SCALE,
};
use crate::helpers::{clamp_range, positive};

/// Rendered sphere radius for a mass in Earth masses. Radius grows with the
/// cube root of mass (constant density) inside a fixed band.
pub fn mass_to_visual_radius(mass_earth: Option<f64>) -> f64 {
    match positive(mass_earth) {
        None => FALLBACK_VISUAL_RADIUS,
        Some(mass) => {
            let r = EARTH_RADIUS_SCENE * mass.cbrt();
            clamp_range(r, MIN_VISUAL_RADIUS, MAX_VISUAL_RADIUS) * VISUAL_RADIUS_SCALE
        }
    }
}

/// Kepler's third law in solar units: a³ = M·P², a in AU, P in years.
pub fn estimate_semi_major_axis_au(period_days: Option<f64>, stellar_mass_msun: Option<f64>) -> Option<f64> {
    let period = positive(period_days)?;
    let mass = positive(stellar_mass_msun)?;
    let years = period / DAYS_PER_YEAR;
    Some((mass * years * years).cbrt())
}

/// Blackbody equilibrium temperature with full heat redistribution,
/// clamped to [50, 4000] K.
pub fn equilibrium_temperature(
    stellar_teff_k: f64,
    stellar_radius_rsun: f64,
    semi_major_axis_au: f64,
    albedo: f64,
) -> f64 {
    let rstar_au = stellar_radius_rsun * SOLAR_RADIUS_AU;
    let teq = stellar_teff_k * (rstar_au / (2.0 * semi_major_axis_au)).sqrt() * (1.0 - albedo).powf(0.25);
    clamp_range(teq, MIN_TEQ_K, MAX_TEQ_K)
}

/// Coarse guess from planet size alone: bigger planets are assumed hotter.
pub fn radius_tier_temperature(radius_earth: Option<f64>) -> f64 {
    let r = radius_earth.filter(|r| r.is_finite()).unwrap_or(1.0);
    if r >= GIANT_RADIUS_EARTH {
        GIANT_TEQ_K
    } else if r >= SUB_NEPTUNE_RADIUS_EARTH {
        SUB_NEPTUNE_TEQ_K
    } else {
        ROCKY_TEQ_K
    }
}

/// Equilibrium temperature used for shading. Prefers the catalog value, then
/// the stellar estimate, then the radius tiers. Always returns a usable value.
pub fn compute_equilibrium_temperature(entry: &CatalogEntry) -> f64 {
    if let Some(teq) = entry.equilibrium_temp_k.filter(|t| t.is_finite() && *t != 0.0) {
        return teq;
    }

    let distance_au = positive(entry.semi_major_axis_au).or_else(|| {
        estimate_semi_major_axis_au(entry.orbital_period_days, entry.stellar_mass)
    });

    match (positive(entry.stellar_teff), positive(entry.stellar_radius), distance_au) {
        (Some(teff), Some(rstar), Some(a)) => equilibrium_temperature(teff, rstar, a, DEFAULT_ALBEDO),
        _ => radius_tier_temperature(entry.radius),
    }
}

/// Camera distance when focusing a body of the given visual radius.
pub fn focus_distance(visual_radius: f64) -> f64 {
    clamp_range(
        visual_radius * FOCUS_RADIUS_FACTOR,
        MIN_FOCUS_DISTANCE,
        MAX_FOCUS_DISTANCE,
    )
}
