//! Sector construction from level documents.
//!
//! The builder records sector settings and the kind/name of every placed
//! object. Object internals (positions, tile data, scripts of individual
//! objects) are left to the game.

use tuxlevel_domain::{Level, Sector, SectorName, SectorObject};

use crate::infrastructure::ports::{SectorBuilderPort, SectorError};
use crate::infrastructure::reader::ReaderMapping;

/// Sector setting keys; everything else in a sector mapping is an object.
const SETTING_KEYS: &[&str] = &["name", "music", "gravity", "ambient-light", "init-script"];

/// Nested object list used by older current-format files.
const OBJECTS_KEY: &str = "objects";

/// Tilemap fields of the flat legacy format, solid layer first.
const LEGACY_TILEMAPS: &[&str] = &["interactive-tm", "background-tm", "foreground-tm"];

#[derive(Debug, Default)]
pub struct BasicSectorBuilder;

impl BasicSectorBuilder {
    pub fn new() -> Self {
        Self
    }

    fn read_settings(mut sector: Sector, mapping: &ReaderMapping<'_>) -> Result<Sector, SectorError> {
        if let Some(music) = mapping.get::<String>("music") {
            sector = sector.with_music(music);
        }
        if let Some(gravity) = mapping.get::<f32>("gravity") {
            if !gravity.is_finite() {
                return Err(SectorError::invalid(sector.name(), "gravity must be finite"));
            }
            sector = sector.with_gravity(gravity);
        }
        Ok(sector)
    }

    fn push_object(sector: &mut Sector, object: SectorObject, editable: bool) {
        if editable || !object.is_editor_only() {
            sector.add_object(object);
        }
    }

    fn objects_from(sector: &mut Sector, mapping: &ReaderMapping<'_>, editable: bool) {
        for node in mapping.iter() {
            let mut object = SectorObject::new(node.name());
            if let Some(name) = node.mapping().get::<String>("name") {
                object = object.with_name(name);
            }
            Self::push_object(sector, object, editable);
        }
    }
}

impl SectorBuilderPort for BasicSectorBuilder {
    fn from_mapping(
        &self,
        _level: &Level,
        mapping: &ReaderMapping<'_>,
        editable: bool,
    ) -> Result<Sector, SectorError> {
        let name = match mapping.get::<String>("name") {
            Some(raw) => SectorName::new(raw)?,
            None => SectorName::main(),
        };
        let mut sector = Self::read_settings(Sector::new(name), mapping)?;

        if mapping.contains("ambient-light") {
            match mapping.get::<Vec<f32>>("ambient-light").as_deref() {
                Some(&[r, g, b]) => sector = sector.with_ambient_light([r, g, b]),
                _ => {
                    return Err(SectorError::invalid(
                        sector.name(),
                        "ambient-light needs three numbers",
                    ))
                }
            }
        }
        if let Some(script) = mapping.get::<String>("init-script") {
            sector = sector.with_init_script(script);
        }

        for node in mapping.iter() {
            if SETTING_KEYS.contains(&node.name()) {
                continue;
            }
            if node.name() == OBJECTS_KEY {
                Self::objects_from(&mut sector, &node.mapping(), editable);
                continue;
            }
            let mut object = SectorObject::new(node.name());
            if let Some(name) = node.mapping().get::<String>("name") {
                object = object.with_name(name);
            }
            Self::push_object(&mut sector, object, editable);
        }

        tracing::debug!(
            context = mapping.context(),
            sector = %sector.name(),
            objects = sector.objects().len(),
            "Built sector"
        );
        Ok(sector)
    }

    fn from_legacy_mapping(
        &self,
        _level: &Level,
        mapping: &ReaderMapping<'_>,
        editable: bool,
    ) -> Result<Sector, SectorError> {
        let mut sector = Self::read_settings(Sector::new(SectorName::main()), mapping)?;

        for field in LEGACY_TILEMAPS {
            if mapping.contains(field) {
                sector.add_object(SectorObject::new("tilemap").with_name(*field));
            }
        }
        if let Some(objects) = mapping.get_mapping(OBJECTS_KEY) {
            Self::objects_from(&mut sector, &objects, editable);
        }

        Ok(sector)
    }

    fn from_nothing(&self, level: &Level) -> Sector {
        let mut sector = Sector::new(SectorName::main());
        sector.add_object(SectorObject::new("tilemap").with_name("interactive"));
        if level.is_worldmap() {
            sector.add_object(SectorObject::new("worldmap-spawnpoint").with_name("main"));
        } else {
            sector.add_object(SectorObject::new("spawnpoint").with_name("main"));
            sector.add_object(SectorObject::new("camera"));
        }
        sector
    }
}
