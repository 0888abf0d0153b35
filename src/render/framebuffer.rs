use raylib::core::texture::RaylibTexture2D; // trait for .update_texture()
use raylib::prelude::*;
use tracing::warn;

/// CPU color buffer the whole frame is drawn into before upload.
pub struct Framebuffer {
    pub color_buffer: Vec<Color>,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    pub current_color: Color,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        let bg = Color::BLACK;
        Self {
            color_buffer: vec![bg; size],
            width,
            height,
            background_color: bg,
            current_color: Color::WHITE,
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.color_buffer.fill(self.background_color);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32) {
        if x < self.width && y < self.height {
            self.color_buffer[(y * self.width + x) as usize] = self.current_color;
        }
    }

    #[inline]
    pub fn set_pixel_color(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width && y < self.height {
            self.color_buffer[(y * self.width + x) as usize] = color;
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        if x < self.width && y < self.height {
            return self.color_buffer[(y * self.width + x) as usize];
        }
        self.background_color
    }

    #[inline] pub fn set_current_color(&mut self, c: Color) { self.current_color = c; }
    #[inline] pub fn set_background_color(&mut self, c: Color) { self.background_color = c; }

    /// Solid rectangle, clipped to the buffer. Coordinates may be negative.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let (x0, y0, x1, y1) = self.clip(x, y, w, h);
        for py in y0..y1 {
            let row = (py * self.width) as usize;
            self.color_buffer[row + x0 as usize..row + x1 as usize].fill(color);
        }
    }

    /// Mixes `color` over the rectangle with opacity `alpha` in `0..=1`.
    pub fn blend_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color, alpha: f32) {
        let (x0, y0, x1, y1) = self.clip(x, y, w, h);
        for py in y0..y1 {
            for px in x0..x1 {
                let idx = (py * self.width + px) as usize;
                self.color_buffer[idx] = mix(self.color_buffer[idx], color, alpha);
            }
        }
    }

    /// Outline `t` pixels thick drawn just outside the rectangle.
    pub fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32, t: i32, color: Color) {
        self.fill_rect(x - t, y - t, w + 2 * t, t, color);
        self.fill_rect(x - t, y + h, w + 2 * t, t, color);
        self.fill_rect(x - t, y, t, h, color);
        self.fill_rect(x + w, y, t, h, color);
    }

    pub fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color) {
        let r2 = r * r;
        let x0 = (cx - r).floor() as i32;
        let x1 = (cx + r).ceil() as i32;
        let y0 = (cy - r).floor() as i32;
        let y1 = (cy + r).ceil() as i32;
        for py in y0..=y1 {
            for px in x0..=x1 {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 && px >= 0 && py >= 0 {
                    self.set_pixel_color(px as u32, py as u32, color);
                }
            }
        }
    }

    /// Bresenham line.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let (mut x, mut y) = (x0, y0);
        let mut err = dx + dy;
        loop {
            if x >= 0 && y >= 0 {
                self.set_pixel_color(x as u32, y as u32, color);
            }
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn clip(&self, x: i32, y: i32, w: i32, h: i32) -> (u32, u32, u32, u32) {
        let x0 = x.clamp(0, self.width as i32) as u32;
        let y0 = y.clamp(0, self.height as i32) as u32;
        let x1 = (x.saturating_add(w)).clamp(0, self.width as i32) as u32;
        let y1 = (y.saturating_add(h)).clamp(0, self.height as i32) as u32;
        (x0, y0, x1.max(x0), y1.max(y0))
    }

    /// Uploads the pixels into a texture of the same size.
    pub fn upload_to_texture(&self, tex: &mut Texture2D) {
        // &[Color] -> &[u8] (RGBA8) without copying
        let byte_len = self.color_buffer.len() * std::mem::size_of::<Color>();
        let bytes: &[u8] = unsafe {
            std::slice::from_raw_parts(self.color_buffer.as_ptr() as *const u8, byte_len)
        };
        if let Err(err) = tex.update_texture(bytes) {
            warn!(?err, "texture upload failed");
        }
    }
}

/// Linear blend of two colors, `t` clamped to `0..=1`.
#[inline]
pub fn mix(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let f = |x: u8, y: u8| -> u8 { ((x as f32) * (1.0 - t) + (y as f32) * t).round() as u8 };
    Color::new(f(a.r, b.r), f(a.g, b.g), f(a.b, b.b), 255)
}

/// Largest rectangle of the framebuffer's aspect ratio that fits the window,
/// centred. Returns `(x, y, w, h)` in window pixels.
pub fn letterbox(fb_w: u32, fb_h: u32, win_w: i32, win_h: i32) -> (f32, f32, f32, f32) {
    let (ww, wh) = (win_w.max(1) as f32, win_h.max(1) as f32);
    let aspect = fb_w.max(1) as f32 / fb_h.max(1) as f32;
    let (w, h) = if ww / wh > aspect { (wh * aspect, wh) } else { (ww, ww / aspect) };
    ((ww - w) * 0.5, (wh - h) * 0.5, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_rect_clips_to_bounds() {
        let mut fb = Framebuffer::new(4, 4);
        fb.fill_rect(-2, -2, 4, 4, Color::RED);
        assert_eq!(fb.get_pixel(0, 0), Color::RED);
        assert_eq!(fb.get_pixel(1, 1), Color::RED);
        assert_eq!(fb.get_pixel(2, 2), Color::BLACK);
    }

    #[test]
    fn line_hits_both_endpoints() {
        let mut fb = Framebuffer::new(8, 8);
        fb.draw_line(1, 6, 6, 1, Color::WHITE);
        assert_eq!(fb.get_pixel(1, 6), Color::WHITE);
        assert_eq!(fb.get_pixel(6, 1), Color::WHITE);
    }
}
