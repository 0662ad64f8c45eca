use macroquad::prelude::*;

/// Button UI component with hover and click detection
#[derive(Clone, Debug)]
pub struct Button {
    rect: Rect,
    text: String,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            text: text.into(),
            color: Color::from_rgba(2, 179, 228, 255),
            hover_color: Color::from_rgba(46, 61, 73, 255),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if a point lies on the button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.is_hovered(mouse_pos) {
            self.hover_color
        } else {
            self.color
        };

        draw_rectangle(self.rect.x, self.rect.y, self.rect.w, self.rect.h, color);
        draw_rectangle_lines(self.rect.x, self.rect.y, self.rect.w, self.rect.h, 2.0, WHITE);

        let text_size = measure_text(&self.text, None, 20, 1.0);
        draw_text(
            &self.text,
            self.rect.x + (self.rect.w - text_size.width) / 2.0,
            self.rect.y + (self.rect.h + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
