//! Input state for game interaction

/// Primary mouse button state for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    pub left_pressed: bool, // Just pressed this frame
}

impl MouseState {
    /// Snapshot the mouse from macroquad (call once per frame, before update)
    pub fn poll() -> Self {
        use macroquad::prelude::{
            is_mouse_button_down, is_mouse_button_pressed, mouse_position, MouseButton,
        };

        let (x, y) = mouse_position();
        Self {
            x,
            y,
            left_down: is_mouse_button_down(MouseButton::Left),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
        }
    }

    #[cfg(test)]
    /// Cursor hovering at (x, y) with the button up
    pub fn hover(x: f32, y: f32) -> Self {
        Self { x, y, ..Default::default() }
    }

    #[cfg(test)]
    /// Button went down this frame at (x, y)
    pub fn press(x: f32, y: f32) -> Self {
        Self { x, y, left_down: true, left_pressed: true }
    }

    #[cfg(test)]
    /// Button held (not a new press) at (x, y)
    pub fn drag(x: f32, y: f32) -> Self {
        Self { x, y, left_down: true, ..Default::default() }
    }

    #[cfg(test)]
    /// Button up at (x, y). A release is the first frame this follows a
    /// held button; the game tracks that through what is being dragged.
    pub fn release(x: f32, y: f32) -> Self {
        Self::hover(x, y)
    }
}
