use std::collections::HashMap;

/// Ordinal color assignment: each distinct key takes the next palette slot
/// in first-seen order, cycling once the palette is exhausted. A key keeps
/// its slot for the lifetime of the scale, so rebuilding a chart with the
/// same key order reproduces the same colors.
#[derive(Debug, Clone)]
pub struct ColorScale {
    palette: Vec<String>,
    mapping: HashMap<String, usize>,
    next: usize,
}

impl ColorScale {
    /// An empty palette falls back to a single black slot so lookups stay
    /// total; composers resolve a non-empty cycle before getting here.
    pub fn new(palette: Vec<String>) -> Self {
        let palette = if palette.is_empty() {
            vec!["#000000".to_string()]
        } else {
            palette
        };
        Self {
            palette,
            mapping: HashMap::new(),
            next: 0,
        }
    }

    pub fn color_for(&mut self, key: &str) -> String {
        if let Some(idx) = self.mapping.get(key).copied() {
            return self.palette[idx % self.palette.len()].clone();
        }
        let idx = self.next;
        self.next += 1;
        self.mapping.insert(key.to_string(), idx);
        self.palette[idx % self.palette.len()].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::ColorScale;

    #[test]
    fn assigns_palette_slots_in_first_seen_order() {
        let mut scale = ColorScale::new(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(scale.color_for("x"), "a");
        assert_eq!(scale.color_for("y"), "b");
        assert_eq!(scale.color_for("x"), "a");
        assert_eq!(scale.color_for("z"), "c");
    }

    #[test]
    fn cycles_past_the_palette_end() {
        let mut scale = ColorScale::new(vec!["a".into(), "b".into()]);
        scale.color_for("k1");
        scale.color_for("k2");
        assert_eq!(scale.color_for("k3"), "a");
        assert_eq!(scale.color_for("k4"), "b");
        // Earlier keys keep their slots after the cycle wraps.
        assert_eq!(scale.color_for("k1"), "a");
    }

    #[test]
    fn empty_palette_stays_total() {
        let mut scale = ColorScale::new(Vec::new());
        assert_eq!(scale.color_for("anything"), "#000000");
    }
}
