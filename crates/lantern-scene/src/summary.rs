//! Inspection of a loaded glTF document.
//!
//! The renderer owns the actual GPU-side scene graph; the viewer only needs
//! the names, lights, and animation clips, so loading distills a document
//! down to a [`SceneSummary`] that the frame loop can reason about.

use gltf::khr_lights_punctual::Kind;

/// The punctual light categories glTF can express.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightKind {
    /// Infinitely distant light with parallel rays.
    Directional,
    /// Omnidirectional light at a point.
    Point,
    /// Cone-shaped light at a point.
    Spot,
}

impl LightKind {
    /// Short lowercase label for logs and debug reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Directional => "directional",
            Self::Point => "point",
            Self::Spot => "spot",
        }
    }
}

/// Shadow projection parameters applied to a light at load time.
///
/// Exported assets tend to carry degenerate shadow frustums, so each light
/// gets a known-good projection for its kind instead of whatever the
/// exporter wrote.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowCamera {
    /// Near plane distance.
    pub near: f32,
    /// Far plane distance.
    pub far: f32,
    /// Half-extent of the orthographic bounds. Directional lights only.
    pub ortho_extent: Option<f32>,
}

impl ShadowCamera {
    /// The shadow projection used for a light of the given kind.
    #[must_use]
    pub fn for_kind(kind: LightKind) -> Self {
        match kind {
            LightKind::Directional => Self {
                near: 0.1,
                far: 200.0,
                ortho_extent: Some(50.0),
            },
            LightKind::Point | LightKind::Spot => Self {
                near: 0.1,
                far: 100.0,
                ortho_extent: None,
            },
        }
    }
}

/// One punctual light found in the document.
#[derive(Clone, Debug)]
pub struct LightInfo {
    /// Light name, if the exporter wrote one.
    pub name: Option<String>,
    /// Directional, point, or spot.
    pub kind: LightKind,
    /// Intensity as authored in the asset.
    pub intensity: f32,
    /// Shadow projection assigned for this light's kind.
    pub shadow: ShadowCamera,
}

/// Everything the frame loop needs to know about a loaded asset.
#[derive(Clone, Debug, Default)]
pub struct SceneSummary {
    /// Names of all named nodes, in document order.
    pub node_names: Vec<String>,
    /// Number of meshes in the document.
    pub mesh_count: usize,
    /// All punctual lights, in declaration order.
    pub lights: Vec<LightInfo>,
    /// Names of all animation clips, in declaration order. Unnamed clips
    /// appear as empty strings so indices still line up.
    pub clip_names: Vec<String>,
}

impl SceneSummary {
    /// Distill a parsed glTF document.
    #[must_use]
    pub fn from_document(document: &gltf::Document) -> Self {
        let node_names = document
            .nodes()
            .filter_map(|n| n.name().map(str::to_owned))
            .collect();

        let lights = document
            .lights()
            .into_iter()
            .flatten()
            .map(|light| {
                let kind = match light.kind() {
                    Kind::Directional => LightKind::Directional,
                    Kind::Point => LightKind::Point,
                    Kind::Spot { .. } => LightKind::Spot,
                };
                LightInfo {
                    name: light.name().map(str::to_owned),
                    kind,
                    intensity: light.intensity(),
                    shadow: ShadowCamera::for_kind(kind),
                }
            })
            .collect();

        let clip_names = document
            .animations()
            .map(|a| a.name().unwrap_or_default().to_owned())
            .collect();

        Self {
            node_names,
            mesh_count: document.meshes().count(),
            lights,
            clip_names,
        }
    }

    /// Find a named node, exact match.
    #[must_use]
    pub fn has_node(&self, name: &str) -> bool {
        self.node_names.iter().any(|n| n == name)
    }

    /// Find a light by name, exact match.
    #[must_use]
    pub fn light_by_name(&self, name: &str) -> Option<&LightInfo> {
        self.lights
            .iter()
            .find(|l| l.name.as_deref() == Some(name))
    }
}
