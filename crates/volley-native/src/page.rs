//! In-memory page used by the headless harness.

use fnv::FnvHashMap;
use glam::Vec3;
use volley_core::{
    EntityTransform, HeaderStyle, PageLayer, RevealEvent, Rgb, SceneNode, ScrollLayout,
    ScrollRegion, SectionRect,
};

pub struct SimulatedPage {
    pub layout: ScrollLayout,
    sections: FnvHashMap<String, ScrollRegion>,
    pub offset: f32,
    pub background: Rgb,
    pub header: Option<HeaderStyle>,
    pub transitions: Vec<RevealEvent>,
}

impl SimulatedPage {
    pub fn new(layout: ScrollLayout) -> Self {
        Self {
            layout,
            sections: FnvHashMap::default(),
            offset: 0.0,
            background: Rgb::default(),
            header: None,
            transitions: Vec::new(),
        }
    }

    pub fn with_section(mut self, id: &str, region: ScrollRegion) -> Self {
        self.sections.insert(id.to_string(), region);
        self
    }

    pub fn max_offset(&self) -> f32 {
        (self.layout.document_height - self.layout.viewport_height).max(0.0)
    }
}

impl PageLayer for SimulatedPage {
    fn section_rect(&self, id: &str) -> Option<SectionRect> {
        self.sections.get(id).map(|r| SectionRect {
            top: r.top - self.offset,
            height: r.height,
        })
    }

    fn viewport_height(&self) -> f32 {
        self.layout.viewport_height
    }

    fn set_background(&mut self, color: Rgb) {
        self.background = color;
    }

    fn set_header_style(&mut self, style: HeaderStyle) {
        log::info!("[page] header -> {:?}", style);
        self.header = Some(style);
    }

    fn transition_content(&mut self, direction: RevealEvent) {
        self.transitions.push(direction);
    }
}

/// Scene node that only remembers what it was last given.
#[derive(Default)]
pub struct RecordedNode {
    pub transform: EntityTransform,
    pub peak_scale: f32,
}

impl SceneNode for RecordedNode {
    fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
    }

    fn set_rotation(&mut self, rotation: Vec3) {
        self.transform.rotation = rotation;
    }

    fn set_scale(&mut self, scale: Vec3) {
        self.transform.scale = scale;
        self.peak_scale = self.peak_scale.max(scale.max_element());
    }
}
