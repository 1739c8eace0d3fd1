use crate::foundation::core::{Rgba8, Transform2D};
use crate::scene::tree::{Props, VisualNode};
use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x5e1f_a11c_0ffe_e7a5;

/// Stable 128-bit digest of a visual tree.
///
/// Floats are hashed by bit pattern, so two trees share a fingerprint only if every value is
/// bit-identical. The frame index is not part of the digest; a still frame repeats its
/// fingerprint across time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TreeFingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl TreeFingerprint {
    pub fn to_hex(self) -> String {
        format!("{:016x}{:016x}", self.hi, self.lo)
    }
}

impl std::fmt::Display for TreeFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

pub fn fingerprint_tree(tree: &VisualNode) -> TreeFingerprint {
    let mut h = StableHasher::new();
    write_node(&mut h, tree);
    h.finish()
}

/// Fingerprint of a whole sequence of trees, order-sensitive.
pub fn fingerprint_trees<'a>(trees: impl IntoIterator<Item = &'a VisualNode>) -> TreeFingerprint {
    let mut h = StableHasher::new();
    let mut n = 0u64;
    for t in trees {
        let fp = fingerprint_tree(t);
        h.write_u64(fp.hi);
        h.write_u64(fp.lo);
        n += 1;
    }
    h.write_u64(n);
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

    fn write_u16(&mut self, v: u16) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> TreeFingerprint {
        let v = self.inner.digest128();
        TreeFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_node(h: &mut StableHasher, n: &VisualNode) {
    match n {
        VisualNode::Rect(r) => {
            h.write_u8(0);
            write_props(h, &r.props);
            write_color(h, r.color);
            h.write_f64(r.corner_radius);
            h.write_f64(r.blur);
            match &r.border {
                Some(b) => {
                    h.write_u8(1);
                    h.write_f64(b.width);
                    write_color(h, b.color);
                }
                None => h.write_u8(0),
            }
        }
        VisualNode::Text(t) => {
            h.write_u8(1);
            write_props(h, &t.props);
            h.write_str(&t.content);
            write_color(h, t.color);
            h.write_f64(t.font_size);
            h.write_u16(t.font_weight);
            h.write_f64(t.letter_spacing);
        }
        VisualNode::Image(i) => {
            h.write_u8(2);
            write_props(h, &i.props);
            h.write_str(&i.asset);
        }
        VisualNode::Group(g) => {
            h.write_u8(3);
            write_props(h, &g.props);
            match &g.name {
                Some(name) => {
                    h.write_u8(1);
                    h.write_str(name);
                }
                None => h.write_u8(0),
            }
            h.write_u32(g.children.len() as u32);
            for c in &g.children {
                write_node(h, c);
            }
        }
    }
}

fn write_props(h: &mut StableHasher, p: &Props) {
    h.write_f64(p.x);
    h.write_f64(p.y);
    h.write_f64(p.width);
    h.write_f64(p.height);
    h.write_f64(p.opacity);
    write_transform(h, &p.transform);
}

fn write_transform(h: &mut StableHasher, t: &Transform2D) {
    h.write_f64(t.translate.x);
    h.write_f64(t.translate.y);
    h.write_f64(t.rotation_rad);
    h.write_f64(t.scale.x);
    h.write_f64(t.scale.y);
    h.write_f64(t.anchor.x);
    h.write_f64(t.anchor.y);
}

fn write_color(h: &mut StableHasher, c: Rgba8) {
    h.write_bytes(&[c.r, c.g, c.b, c.a]);
}

#[cfg(test)]
#[path = "../../tests/unit/render/fingerprint.rs"]
mod tests;
