use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::assets::decode::{PreparedImage, decode_image};
use crate::assets::media::{VideoSourceInfo, has_video_extension, probe_video};
use crate::assets::text::{FontBook, TextBrushRgba8, TextLayoutEngine};
use crate::foundation::error::ReelResult;
use crate::layout::text::{ApproxTextMeasure, TextMeasure, TextStyle};
use crate::params::TemplateParams;

/// A referenced asset that could not be used; rendering continues without it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct AssetNotice {
    pub reference: String,
    pub message: String,
}

/// Immutable, fully prepared assets for one template render.
///
/// Built once before frame 0 by [`AssetStore::prepare`]; frame rendering only reads from it.
pub struct AssetStore {
    root: PathBuf,
    images: BTreeMap<String, PreparedImage>,
    fonts: FontBook,
    video: Option<VideoSourceInfo>,
    notices: Vec<AssetNotice>,
    text: Option<RefCell<TextLayoutEngine>>,
    approx: ApproxTextMeasure,
}

impl std::fmt::Debug for AssetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetStore")
            .field("root", &self.root)
            .field("images", &self.images.keys().collect::<Vec<_>>())
            .field("fonts", &self.fonts.len())
            .field("video", &self.video)
            .field("notices", &self.notices)
            .finish()
    }
}

impl Default for AssetStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl AssetStore {
    /// Store without images, fonts or video. Text is measured approximately.
    pub fn empty() -> Self {
        Self {
            root: PathBuf::from("."),
            images: BTreeMap::new(),
            fonts: FontBook::new(),
            video: None,
            notices: Vec::new(),
            text: None,
            approx: ApproxTextMeasure::default(),
        }
    }

    /// Store with the given fonts registered for shaping.
    pub fn with_fonts(fonts: FontBook) -> ReelResult<Self> {
        let text = if fonts.is_empty() {
            None
        } else {
            Some(RefCell::new(TextLayoutEngine::new(&fonts)?))
        };
        Ok(Self {
            fonts,
            text,
            ..Self::empty()
        })
    }

    /// Resolve every asset `params` references, relative to `root`.
    ///
    /// Unusable images and videos become [`AssetNotice`]s. Only font registration is fatal.
    #[tracing::instrument(skip(params, fonts), fields(template = params.kind_name(), fonts = fonts.len()))]
    pub fn prepare(params: &TemplateParams, root: &Path, fonts: FontBook) -> ReelResult<Self> {
        let mut store = Self::with_fonts(fonts)?;
        store.root = root.to_path_buf();

        for reference in params.image_refs() {
            let path = root.join(reference);
            let loaded = std::fs::read(&path)
                .map_err(|e| format!("read '{}': {e}", path.display()))
                .and_then(|bytes| decode_image(&bytes).map_err(|e| e.to_string()));
            match loaded {
                Ok(img) => {
                    tracing::debug!(reference, width = img.width, height = img.height, "image ready");
                    store.images.insert(reference.to_owned(), img);
                }
                Err(message) => store.notice(reference, message),
            }
        }

        if let Some(reference) = params.video_ref() {
            let path = root.join(reference);
            if !has_video_extension(&path) {
                store.notice(reference, "not a supported video file (mp4, webm, mov, mkv, m4v)");
            } else {
                match probe_video(&path) {
                    Ok(info) => {
                        tracing::debug!(reference, width = info.width, height = info.height, "video ready");
                        store.video = Some(info);
                    }
                    Err(e) => store.notice(reference, e.to_string()),
                }
            }
        }

        if store.fonts.is_empty() {
            tracing::warn!("no fonts loaded, text is measured approximately and not drawn");
        }
        Ok(store)
    }

    fn notice(&mut self, reference: &str, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(reference, "asset skipped: {message}");
        self.notices.push(AssetNotice {
            reference: reference.to_owned(),
            message,
        });
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn insert_image(&mut self, reference: impl Into<String>, image: PreparedImage) {
        self.images.insert(reference.into(), image);
    }

    pub fn image(&self, reference: &str) -> Option<&PreparedImage> {
        self.images.get(reference)
    }

    /// Natural size of a prepared image.
    pub fn image_size(&self, reference: &str) -> Option<(f64, f64)> {
        self.image(reference).map(PreparedImage::size)
    }

    pub fn set_video(&mut self, info: VideoSourceInfo) {
        self.video = Some(info);
    }

    pub fn video(&self) -> Option<&VideoSourceInfo> {
        self.video.as_ref()
    }

    pub fn fonts(&self) -> &FontBook {
        &self.fonts
    }

    pub fn notices(&self) -> &[AssetNotice] {
        &self.notices
    }

    /// Shape one line with the face resolved for `style`; `None` without fonts.
    pub(crate) fn shape_line(
        &self,
        text: &str,
        style: &TextStyle<'_>,
        brush: TextBrushRgba8,
    ) -> Option<ReelResult<(usize, parley::Layout<TextBrushRgba8>)>> {
        let engine = self.text.as_ref()?;
        let face = self.fonts.resolve(style.family, style.weight)?;
        let layout =
            engine
                .borrow_mut()
                .layout_line(face, text, style.size_px as f32, style.weight, brush);
        Some(layout.map(|l| (face, l)))
    }
}

impl TextMeasure for AssetStore {
    fn advance(&self, text: &str, style: &TextStyle<'_>) -> f64 {
        match self.shape_line(text, style, TextBrushRgba8::default()) {
            Some(Ok((_, layout))) => f64::from(layout.width()),
            _ => self.approx.advance(text, style),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
