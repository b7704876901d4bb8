use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug)]
/// Dynamic text component for screen-space strings (score, panel captions).
pub struct DynamicText {
    /// The text content to render.
    pub content: String,
    /// Font size in pixels.
    pub font_size: f32,
    /// Screen position of the top-left corner, in pixels.
    pub x: i32,
    pub y: i32,
}

impl DynamicText {
    /// Creates a new DynamicText component.
    pub fn new(content: impl Into<String>, font_size: f32, x: i32, y: i32) -> Self {
        Self {
            content: content.into(),
            font_size,
            x,
            y,
        }
    }
    /// Updates the text content.
    pub fn set_content(&mut self, new_content: impl Into<String>) {
        self.content = new_content.into();
    }
}
