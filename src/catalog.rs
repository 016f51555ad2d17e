use std::collections::HashSet;
use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::DataError;
use crate::mass::{MassValue, ParsedMass, RawMass};

/// One catalog row as stored in the dataset file.
///
/// Numeric columns are read leniently: `null`, strings and other non-number
/// values become `None` instead of failing the whole file.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RawCatalogRecord {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub x: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub y: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub z: Option<f64>,
    #[serde(default)]
    pub pl_masse: Option<RawMass>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub pl_rade: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub st_teff: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub st_rad: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub st_mass: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub pl_orbsmax: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub pl_orbper: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub pl_eqt: Option<f64>,
    #[serde(default, rename = "isPlanet", deserialize_with = "lenient_number")]
    pub is_planet: Option<f64>,
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_f64))
}

impl RawCatalogRecord {
    /// Catalog direction; a missing coordinate yields the zero vector, which
    /// placement maps to +X.
    pub fn direction(&self) -> DVec3 {
        match (self.x, self.y, self.z) {
            (Some(x), Some(y), Some(z)) => DVec3::new(x, y, z),
            _ => DVec3::ZERO,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlanetStatus {
    Confirmed,
    Candidate,
    #[default]
    Unknown,
}

impl PlanetStatus {
    pub fn from_flag(flag: Option<f64>) -> Self {
        match flag {
            Some(f) if f == 1.0 => PlanetStatus::Confirmed,
            Some(f) if f == 0.0 => PlanetStatus::Candidate,
            _ => PlanetStatus::Unknown,
        }
    }
}

/// A normalized catalog body. Physical fields are independently optional.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    /// Stable identifier; seeds the body's scene position.
    pub id: String,
    pub name: String,
    pub direction: DVec3,
    pub mass: ParsedMass,
    /// Earth radii
    pub radius: Option<f64>,
    /// Kelvin
    pub stellar_teff: Option<f64>,
    /// Solar radii
    pub stellar_radius: Option<f64>,
    /// Solar masses
    pub stellar_mass: Option<f64>,
    pub semi_major_axis_au: Option<f64>,
    pub orbital_period_days: Option<f64>,
    pub equilibrium_temp_k: Option<f64>,
    pub status: PlanetStatus,
}

impl CatalogEntry {
    /// Bare entry with only an identity; every physical field unset.
    pub fn named(name: &str) -> Self {
        Self {
            id: name.to_string(),
            name: name.to_string(),
            direction: DVec3::ZERO,
            mass: ParsedMass::unknown(),
            radius: None,
            stellar_teff: None,
            stellar_radius: None,
            stellar_mass: None,
            semi_major_axis_au: None,
            orbital_period_days: None,
            equilibrium_temp_k: None,
            status: PlanetStatus::Unknown,
        }
    }

    pub fn with_direction(mut self, direction: DVec3) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_mass(mut self, mass: MassValue) -> Self {
        self.mass = mass.into();
        self
    }
}

impl From<RawCatalogRecord> for CatalogEntry {
    fn from(raw: RawCatalogRecord) -> Self {
        let id = raw
            .id
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| raw.name.clone());

        CatalogEntry {
            id,
            direction: raw.direction(),
            mass: MassValue::from(raw.pl_masse).into(),
            radius: raw.pl_rade,
            stellar_teff: raw.st_teff,
            stellar_radius: raw.st_rad,
            stellar_mass: raw.st_mass,
            semi_major_axis_au: raw.pl_orbsmax,
            orbital_period_days: raw.pl_orbper,
            equilibrium_temp_k: raw.pl_eqt,
            status: PlanetStatus::from_flag(raw.is_planet),
            name: raw.name,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn from_records(records: Vec<RawCatalogRecord>) -> Self {
        let entries: Vec<CatalogEntry> = records.into_iter().map(CatalogEntry::from).collect();

        // shared ids collapse onto the same scene position
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                log::warn!("duplicate catalog id {:?}; bodies will overlap", entry.id);
            }
        }

        Catalog { entries }
    }

    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        let records: Vec<RawCatalogRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        log::info!("loaded {} catalog entries from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn with_status(&self, status: PlanetStatus) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(move |e| e.status == status)
    }

    /// Entries passing `filter`, in catalog order. Only entries with a known
    /// mass are listed.
    pub fn search(&self, filter: &CatalogFilter) -> Vec<&CatalogEntry> {
        let hits: Vec<&CatalogEntry> = self
            .entries
            .iter()
            .filter(|e| filter.matches(e) && e.mass.is_known())
            .collect();
        log::debug!("catalog search {:?}: {} of {} entries", filter, hits.len(), self.len());
        hits
    }
}

/// Search criteria for [`Catalog::search`]. Every field is optional; an
/// unset field does not restrict the result.
///
/// A set bound excludes entries whose value is missing, and a non-finite
/// bound excludes every entry.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFilter {
    /// Case-insensitive substring of the entry name.
    pub name_query: Option<String>,
    /// Earth masses
    pub min_mass: Option<f64>,
    pub max_mass: Option<f64>,
    /// Earth radii
    pub min_radius: Option<f64>,
    pub max_radius: Option<f64>,
    /// Kelvin, against the catalog equilibrium temperature
    pub min_temp: Option<f64>,
    pub max_temp: Option<f64>,
}

impl CatalogFilter {
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        if let Some(query) = self.name_query.as_deref().filter(|q| !q.is_empty()) {
            if !entry.name.to_lowercase().contains(&query.to_lowercase()) {
                return false;
            }
        }

        within(entry.mass.mass_earth, self.min_mass, self.max_mass)
            && within(entry.radius, self.min_radius, self.max_radius)
            && within(entry.equilibrium_temp_k, self.min_temp, self.max_temp)
    }
}

fn within(value: Option<f64>, min: Option<f64>, max: Option<f64>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }
    let Some(v) = value else {
        return false;
    };
    let above_min = min.is_none_or(|lo| lo.is_finite() && v >= lo);
    let below_max = max.is_none_or(|hi| hi.is_finite() && v <= hi);
    above_min && below_max
}
