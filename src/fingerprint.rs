use xxhash_rust::xxh3::Xxh3;

use crate::scene::model::{
    BackdropElement, CaptionElement, HeaderElement, SceneBody, SceneDescription, SlideElement,
};
use crate::theme::color::{Color, LinearGradient};

const XXH3_SEED: u64 = 0x6361_726f_7573_656c;

/// Stable fingerprint of everything visible in a composed scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct SceneFingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl std::fmt::Display for SceneFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Fingerprint a scene.
///
/// The global frame index is not hashed, so two frames that look the same share a fingerprint.
pub fn fingerprint_scene(scene: &SceneDescription) -> SceneFingerprint {
    let mut h = StableHasher::new();
    h.write_u32(scene.show_id);
    h.write_str(&scene.composition);
    h.write_u32(scene.canvas.width);
    h.write_u32(scene.canvas.height);
    h.write_color(scene.background);
    write_header(&mut h, &scene.header);
    match &scene.body {
        SceneBody::Slide(slide) => {
            h.write_u8(0);
            write_slide(&mut h, slide);
        }
        SceneBody::EndOfShow(card) => {
            h.write_u8(1);
            h.write_str(&card.text);
            h.write_color(card.color);
        }
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_i64(&mut self, v: i64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
    }

    fn write_opt_str(&mut self, s: Option<&str>) {
        match s {
            None => self.write_u8(0),
            Some(s) => {
                self.write_u8(1);
                self.write_str(s);
            }
        }
    }

    fn write_color(&mut self, c: Color) {
        self.write_bytes(&[c.r, c.g, c.b]);
        self.write_f64(c.a);
    }

    fn write_gradient(&mut self, g: LinearGradient) {
        self.write_f64(g.angle_deg);
        for stop in g.stops {
            self.write_color(stop.color);
            self.write_f64(stop.offset);
        }
    }

    fn finish(self) -> SceneFingerprint {
        let v = self.inner.digest128();
        SceneFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_header(h: &mut StableHasher, header: &HeaderElement) {
    h.write_str(&header.title);
    h.write_gradient(header.fill);
    h.write_color(header.border);
    h.write_color(header.text_color);
    h.write_color(header.divider);
    let s = header.state;
    for v in [s.entry, s.opacity, s.offset_y, s.scale] {
        h.write_f64(v);
    }
}

fn write_slide(h: &mut StableHasher, slide: &SlideElement) {
    h.write_u64(slide.index as u64);
    h.write_i64(slide.relative_frame);
    h.write_str(&slide.image);
    write_backdrop(h, &slide.backdrop);
    let s = slide.state;
    for v in [
        s.entry,
        s.opacity,
        s.scale,
        s.rotation_deg,
        s.offset_x,
        s.float_y,
        s.glow_opacity,
        s.shadow_blur,
        s.shadow_opacity,
    ] {
        h.write_f64(v);
    }
    for c in slide.transform.as_coeffs() {
        h.write_f64(c);
    }
    h.write_f64(slide.max_size.0);
    h.write_f64(slide.max_size.1);
    h.write_color(slide.border);
    h.write_color(slide.glow);
    write_caption(h, &slide.caption);
}

fn write_backdrop(h: &mut StableHasher, b: &BackdropElement) {
    h.write_opt_str(b.image.as_deref());
    h.write_f64(b.image_opacity);
    h.write_color(b.scrim);
    h.write_f64(b.scrim_opacity);
    h.write_color(b.glow);
    h.write_f64(b.glow_center_y_pct);
}

fn write_caption(h: &mut StableHasher, c: &CaptionElement) {
    h.write_str(&c.label);
    h.write_str(&c.text);
    h.write_gradient(c.fill);
    h.write_color(c.border);
    h.write_color(c.text_color);
    h.write_color(c.glow);
    let s = c.state;
    for v in [s.entry, s.opacity, s.scale, s.offset_y, s.glow_opacity] {
        h.write_f64(v);
    }
}

#[cfg(test)]
#[path = "../tests/unit/pipeline/fingerprint.rs"]
mod tests;
