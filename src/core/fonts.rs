use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use egui::{FontData, FontDefinitions, FontFamily};
use fontdb::{Database, Family, Query, Stretch, Style, Weight};

use super::layout::FontSpec;

/// A parsed font face registered under a family name
#[derive(Debug, Clone)]
pub struct FontFace {
    pub family: String,
    /// Face index inside a font collection, 0 for plain files
    pub index: u32,
    bytes: Vec<u8>,
}

/// Family a text run ends up using
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontChoice {
    Named(String),
    DefaultSans,
}

impl FontChoice {
    pub fn to_egui(&self) -> FontFamily {
        match self {
            FontChoice::Named(name) => FontFamily::Name(name.as_str().into()),
            FontChoice::DefaultSans => FontFamily::Proportional,
        }
    }
}

/// Font families available to the painter
#[derive(Debug, Clone, Default)]
pub struct FontRegistry {
    faces: Vec<FontFace>,
}

impl FontRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up each family among the installed system fonts
    pub fn discover(families: &[&str]) -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        log::debug!("font database holds {} faces", db.len());
        Self::from_database(&db, families)
    }

    /// Look up each family in `db` by the name stored inside the font files
    ///
    /// Families without a usable face are left to fall back to the default sans.
    pub fn from_database(db: &Database, families: &[&str]) -> Self {
        let mut registry = Self::empty();
        for &family in families {
            let query = Query {
                families: &[Family::Name(family)],
                weight: Weight::NORMAL,
                style: Style::Normal,
                stretch: Stretch::Normal,
            };

            let result = db
                .query(&query)
                .ok_or_else(|| anyhow!("not installed"))
                .and_then(|id| registry.register_face(db, id, family));
            if let Err(e) = result {
                log::warn!("font family '{family}' unavailable ({e:#}), using default sans");
            }
        }
        registry
    }

    /// Use the first face in the file at `path` for `family`, replacing any discovered face
    pub fn with_override(mut self, family: &str, path: &Path) -> Self {
        if let Err(e) = self.load_override(family, path) {
            log::warn!("ignoring font override {}: {e:#}", path.display());
        }
        self
    }

    fn load_override(&mut self, family: &str, path: &Path) -> Result<()> {
        let mut db = Database::new();
        db.load_font_file(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let id = db
            .faces()
            .next()
            .map(|face| face.id)
            .ok_or_else(|| anyhow!("no usable face"))?;
        self.register_face(&db, id, family)
    }

    fn register_face(&mut self, db: &Database, id: fontdb::ID, family: &str) -> Result<()> {
        let (bytes, index) = db
            .with_face_data(id, |data, index| (data.to_vec(), index))
            .ok_or_else(|| anyhow!("face data could not be loaded"))?;
        self.register(family, bytes, index)
    }

    /// Register raw font bytes for `family` after checking that they parse
    pub fn register(&mut self, family: &str, bytes: Vec<u8>, index: u32) -> Result<()> {
        ttf_parser::Face::parse(&bytes, index)
            .map_err(|e| anyhow!("invalid font data for '{family}': {e}"))?;

        self.faces.retain(|face| face.family != family);
        log::debug!("font '{family}' registered (face {index}, {} bytes)", bytes.len());
        self.faces.push(FontFace {
            family: family.to_owned(),
            index,
            bytes,
        });
        Ok(())
    }

    pub fn contains(&self, family: &str) -> bool {
        self.faces.iter().any(|face| face.family == family)
    }

    pub fn faces(&self) -> &[FontFace] {
        &self.faces
    }

    /// Registered family, or the default sans when it is missing
    pub fn resolve(&self, font: FontSpec) -> FontChoice {
        match font.family {
            Some(family) if self.contains(family) => FontChoice::Named(family.to_owned()),
            _ => FontChoice::DefaultSans,
        }
    }

    /// Add every registered face to egui's fonts
    ///
    /// Each family keeps the proportional chain behind it so glyphs missing
    /// from a display font still render.
    pub fn install(&self, ctx: &egui::Context) {
        let mut defs = FontDefinitions::default();
        let fallback = defs
            .families
            .get(&FontFamily::Proportional)
            .cloned()
            .unwrap_or_default();

        for face in &self.faces {
            let data = FontData {
                index: face.index,
                ..FontData::from_owned(face.bytes.clone())
            };
            defs.font_data.insert(face.family.clone(), Arc::new(data));

            let mut chain = vec![face.family.clone()];
            chain.extend(fallback.iter().cloned());
            defs.families
                .insert(FontFamily::Name(face.family.as_str().into()), chain);
        }

        ctx.set_fonts(defs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::canvas::{Canvas, TextBlock, TextRun};
    use crate::core::egui_canvas::EguiCanvas;
    use crate::core::layout::{CanvasSize, LayoutScale, PaintStyle, BODY_FAMILY, DISPLAY_FAMILY};
    use std::fs;
    use std::path::PathBuf;

    const TTF_HEADER: [u8; 8] = [0x00, 0x01, 0x00, 0x00, 0, 0, 0, 0];

    /// One of egui's bundled faces and the family name stored inside it
    fn bundled_face() -> (Vec<u8>, String) {
        FontDefinitions::default()
            .font_data
            .values()
            .find_map(|data| {
                let mut db = Database::new();
                db.load_font_data(data.font.to_vec());
                let family = db.faces().next()?.families.first()?.0.clone();
                Some((data.font.to_vec(), family))
            })
            .expect("egui ships default fonts")
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("clock-face-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_resolve_falls_back() {
        let registry = FontRegistry::empty();
        assert_eq!(registry.resolve(FontSpec::named(DISPLAY_FAMILY)), FontChoice::DefaultSans);
        assert_eq!(registry.resolve(FontSpec::default_sans()), FontChoice::DefaultSans);
        assert_eq!(FontChoice::DefaultSans.to_egui(), FontFamily::Proportional);
    }

    #[test]
    fn test_register_and_resolve() {
        let (bytes, _) = bundled_face();
        let mut registry = FontRegistry::empty();
        registry.register(DISPLAY_FAMILY, bytes, 0).unwrap();

        assert_eq!(
            registry.resolve(FontSpec::named(DISPLAY_FAMILY)),
            FontChoice::Named(DISPLAY_FAMILY.to_owned())
        );
        assert_eq!(registry.resolve(FontSpec::named(BODY_FAMILY)), FontChoice::DefaultSans);
    }

    #[test]
    fn test_register_rejects_header_only_file() {
        let mut registry = FontRegistry::empty();
        assert!(registry.register(DISPLAY_FAMILY, TTF_HEADER.to_vec(), 0).is_err());
        assert!(registry.register("X", b"<html>".to_vec(), 0).is_err());
        assert!(!registry.contains(DISPLAY_FAMILY));
        assert!(registry.faces().is_empty());
    }

    #[test]
    fn test_register_replaces_family() {
        let (bytes, _) = bundled_face();
        let mut registry = FontRegistry::empty();
        registry.register("X", bytes.clone(), 0).unwrap();
        registry.register("X", bytes, 0).unwrap();
        assert_eq!(registry.faces().len(), 1);
    }

    #[test]
    fn test_corrupt_face_still_renders_with_fallback() {
        let mut registry = FontRegistry::empty();
        let _ = registry.register(DISPLAY_FAMILY, TTF_HEADER.to_vec(), 0);

        let ctx = egui::Context::default();
        registry.install(&ctx);
        let style = PaintStyle::day(LayoutScale::for_size(CanvasSize::new(600.0, 300.0)));

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            let painter = ctx.layer_painter(egui::LayerId::background());
            let mut canvas = EguiCanvas::new(&painter, &registry);
            let block = canvas.layout_text(&TextRun::new("TUESDAY", style));
            assert!(block.size().x > 0.0);
        });
    }

    #[test]
    fn test_installed_face_lays_out() {
        let (bytes, _) = bundled_face();
        let mut registry = FontRegistry::empty();
        registry.register(DISPLAY_FAMILY, bytes, 0).unwrap();

        let ctx = egui::Context::default();
        registry.install(&ctx);
        let style = PaintStyle::day(LayoutScale::for_size(CanvasSize::new(600.0, 300.0)));

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            let painter = ctx.layer_painter(egui::LayerId::background());
            let mut canvas = EguiCanvas::new(&painter, &registry);
            let block = canvas.layout_text(&TextRun::new("MONDAY", style));
            assert!(block.size().x > 0.0);
        });
    }

    #[test]
    fn test_lookup_by_internal_family_name() {
        let (bytes, family) = bundled_face();
        let dir = scratch_dir("lookup");
        fs::write(dir.join("NotoSans[wdth,wght].ttf"), &bytes).unwrap();

        let mut db = Database::new();
        db.load_fonts_dir(&dir);
        let registry = FontRegistry::from_database(&db, &[family.as_str(), DISPLAY_FAMILY]);

        assert!(registry.contains(&family));
        assert!(!registry.contains(DISPLAY_FAMILY));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_override_uses_file_regardless_of_name() {
        let (bytes, _) = bundled_face();
        let dir = scratch_dir("override");
        let path = dir.join("display-face.ttf");
        fs::write(&path, &bytes).unwrap();

        let registry = FontRegistry::empty().with_override(DISPLAY_FAMILY, &path);
        assert!(registry.contains(DISPLAY_FAMILY));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_override_corrupt_file_is_ignored() {
        let dir = scratch_dir("corrupt");
        let path = dir.join("Anurati.otf");
        fs::write(&path, TTF_HEADER).unwrap();

        let registry = FontRegistry::empty().with_override(DISPLAY_FAMILY, &path);
        assert!(!registry.contains(DISPLAY_FAMILY));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_override_missing_file_is_ignored() {
        let registry = FontRegistry::empty()
            .with_override(DISPLAY_FAMILY, Path::new("/nonexistent/clock-face/Anurati.otf"));
        assert!(!registry.contains(DISPLAY_FAMILY));
    }
}
