//! Filter specifications built from partially populated planet templates.
//!
//! A [`PlanetTemplate`] expresses filter intent: every field that is set to a
//! non-empty value becomes an exact-match [`Predicate`], everything else is
//! ignored. An all-empty template yields a filter without predicates, which
//! matches every record.

use crate::domain::entities::Planet;

/// Planet columns that can take part in a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanetField {
    Terrain,
    Climate,
}

impl PlanetField {
    /// Database column backing this field.
    pub fn column(self) -> &'static str {
        match self {
            PlanetField::Terrain => "terrain",
            PlanetField::Climate => "climate",
        }
    }

    fn value_of(self, planet: &Planet) -> &str {
        match self {
            PlanetField::Terrain => &planet.terrain,
            PlanetField::Climate => &planet.climate,
        }
    }
}

/// Exact, case-sensitive equality on a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub field: PlanetField,
    pub value: String,
}

/// Conjunction of field-equality predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetFilter {
    predicates: Vec<Predicate>,
}

impl PlanetFilter {
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// True when the filter has no predicates and matches everything.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Evaluates the filter against a single planet.
    pub fn matches(&self, planet: &Planet) -> bool {
        self.predicates
            .iter()
            .all(|p| p.field.value_of(planet) == p.value)
    }
}

/// Optional filter values for a planet listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetTemplate {
    pub terrain: Option<String>,
    pub climate: Option<String>,
}

impl PlanetTemplate {
    pub fn new(terrain: Option<String>, climate: Option<String>) -> Self {
        Self { terrain, climate }
    }

    pub fn with_terrain(mut self, terrain: impl Into<String>) -> Self {
        self.terrain = Some(terrain.into());
        self
    }

    pub fn with_climate(mut self, climate: impl Into<String>) -> Self {
        self.climate = Some(climate.into());
        self
    }
}

/// Builds the filter specification for a template.
///
/// `None` and empty strings are both treated as "no filter" for that field.
/// Predicates are emitted in a fixed order (terrain, then climate), so equal
/// templates always produce equal filters.
pub fn make_query(template: &PlanetTemplate) -> PlanetFilter {
    let candidates = [
        (PlanetField::Terrain, template.terrain.as_deref()),
        (PlanetField::Climate, template.climate.as_deref()),
    ];

    let predicates = candidates
        .into_iter()
        .filter_map(|(field, value)| match value {
            Some(v) if !v.is_empty() => Some(Predicate {
                field,
                value: v.to_string(),
            }),
            _ => None,
        })
        .collect();

    PlanetFilter { predicates }
}
