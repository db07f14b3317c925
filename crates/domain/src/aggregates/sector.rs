//! Sector aggregate - one self-contained playable area of a level

use crate::value_objects::{SectorName, SectorObject};

/// Gravity used when a sector does not declare one.
pub const DEFAULT_GRAVITY: f32 = 10.0;

/// A playable area within a level.
///
/// # Invariants
///
/// - `name` is always non-empty (enforced by `SectorName`)
/// - `objects` keeps document order
#[derive(Debug, Clone, PartialEq)]
pub struct Sector {
    name: SectorName,
    music: Option<String>,
    gravity: f32,
    ambient_light: Option<[f32; 3]>,
    init_script: Option<String>,
    objects: Vec<SectorObject>,
}

impl Sector {
    // =========================================================================
    // Constructor
    // =========================================================================

    pub fn new(name: SectorName) -> Self {
        Self {
            name,
            music: None,
            gravity: DEFAULT_GRAVITY,
            ambient_light: None,
            init_script: None,
            objects: Vec::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn name(&self) -> &SectorName {
        &self.name
    }

    #[inline]
    pub fn music(&self) -> Option<&str> {
        self.music.as_deref()
    }

    #[inline]
    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    #[inline]
    pub fn ambient_light(&self) -> Option<[f32; 3]> {
        self.ambient_light
    }

    #[inline]
    pub fn init_script(&self) -> Option<&str> {
        self.init_script.as_deref()
    }

    #[inline]
    pub fn objects(&self) -> &[SectorObject] {
        &self.objects
    }

    // =========================================================================
    // Builder Methods (for construction)
    // =========================================================================

    pub fn with_music(mut self, music: impl Into<String>) -> Self {
        self.music = Some(music.into());
        self
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_ambient_light(mut self, rgb: [f32; 3]) -> Self {
        self.ambient_light = Some(rgb);
        self
    }

    pub fn with_init_script(mut self, script: impl Into<String>) -> Self {
        self.init_script = Some(script.into());
        self
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub fn set_name(&mut self, name: SectorName) {
        self.name = name;
    }

    /// Append an object, keeping placement order.
    pub fn add_object(&mut self, object: SectorObject) {
        self.objects.push(object);
    }
}
