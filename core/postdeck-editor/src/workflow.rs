//! Pick, crop and edit flow for slide images.

use crate::config::{CropConfig, EditorConfig};
use crate::error::{EditorError, EditorResult};
use crate::handles::ObjectHandles;
use crate::surface::{EditorSurface, SessionHandle};
use postdeck_intake::{FileCandidate, validate_file};
use postdeck_store::PostStore;
use postdeck_types::ImageRef;
use tracing::debug;

#[derive(Debug)]
struct CropSession {
    session: SessionHandle,
    preview: ImageRef,
}

#[derive(Debug)]
struct EditSession {
    session: SessionHandle,
    source: ImageRef,
}

/// What an Escape key press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeOutcome {
    ClosedEditor,
    CancelledCrop,
    Nothing,
}

/// Drives the crop and full-editor surfaces and writes their results into
/// the store.
///
/// Surfaces are expected to be used one at a time, but that is left to the
/// caller; the workflow tracks each independently.
#[derive(Debug)]
pub struct ImageWorkflow<S: EditorSurface> {
    surface: S,
    handles: ObjectHandles,
    crop_config: CropConfig,
    editor_config: EditorConfig,
    crop: Option<CropSession>,
    editor: Option<EditSession>,
}

impl<S: EditorSurface> ImageWorkflow<S> {
    pub fn new(surface: S) -> Self {
        Self::with_configs(surface, CropConfig::default(), EditorConfig::default())
    }

    pub fn with_configs(surface: S, crop_config: CropConfig, editor_config: EditorConfig) -> Self {
        Self {
            surface,
            handles: ObjectHandles::new(),
            crop_config,
            editor_config,
            crop: None,
            editor: None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn handles(&self) -> &ObjectHandles {
        &self.handles
    }

    pub fn crop_config(&self) -> &CropConfig {
        &self.crop_config
    }

    pub fn editor_config(&self) -> &EditorConfig {
        &self.editor_config
    }

    pub fn is_cropping(&self) -> bool {
        self.crop.is_some()
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// Preview handle shown by the open crop session.
    pub fn crop_preview(&self) -> Option<&ImageRef> {
        self.crop.as_ref().map(|c| &c.preview)
    }

    /// Image the open editor session started from.
    pub fn editor_source(&self) -> Option<&ImageRef> {
        self.editor.as_ref().map(|e| &e.source)
    }

    // ── Crop ─────────────────────────────────────────────────────

    /// Validates a picked file and opens the crop surface on a fresh preview
    /// handle.
    ///
    /// A rejected file leaves everything as it was, including a crop that
    /// is already open. An accepted file replaces any pending crop and its
    /// preview handle.
    pub fn pick_file(&mut self, file: &FileCandidate) -> EditorResult<ImageRef> {
        validate_file(file)?;
        self.close_crop();

        let preview = self.handles.issue();
        let session = self.surface.open_crop(&preview, &self.crop_config);
        debug!(%session, size_bytes = file.size_bytes, mime = %file.mime_type, "crop opened");
        self.crop = Some(CropSession {
            session,
            preview: preview.clone(),
        });
        Ok(preview)
    }

    /// Writes the cropped payload to the selected slide and closes the crop.
    /// Returns whether the store changed.
    pub fn apply_crop(&mut self, store: &mut PostStore, payload: ImageRef) -> EditorResult<bool> {
        if self.crop.is_none() {
            return Err(EditorError::CropNotOpen);
        }
        let written = store.set_slide_image(payload);
        self.close_crop();
        Ok(written)
    }

    /// Closes the crop without writing. Returns false if none was open.
    pub fn cancel_crop(&mut self) -> bool {
        self.close_crop()
    }

    fn close_crop(&mut self) -> bool {
        let Some(crop) = self.crop.take() else {
            return false;
        };
        self.surface.close(crop.session);
        self.handles.revoke(&crop.preview);
        true
    }

    // ── Full editor ──────────────────────────────────────────────

    /// Opens the full editor on the selected slide's image.
    pub fn open_full_editor(&mut self, store: &PostStore) -> EditorResult<SessionHandle> {
        let source = store
            .current_slide()
            .and_then(|s| s.src.clone())
            .ok_or(EditorError::NoImage)?;
        self.close_editor();

        let session = self.surface.open_editor(&source, &self.editor_config);
        debug!(%session, "editor opened");
        self.editor = Some(EditSession { session, source });
        Ok(session)
    }

    /// Ends the editor session. `None` means the editor was closed without
    /// saving, which writes nothing. Returns whether the store changed.
    pub fn finish_editor(
        &mut self,
        store: &mut PostStore,
        payload: Option<ImageRef>,
    ) -> EditorResult<bool> {
        if self.editor.is_none() {
            return Err(EditorError::EditorNotOpen);
        }
        let written = payload.is_some_and(|p| store.set_slide_image(p));
        self.close_editor();
        Ok(written)
    }

    /// Closes the editor without writing. Returns false if none was open.
    pub fn close_editor(&mut self) -> bool {
        let Some(edit) = self.editor.take() else {
            return false;
        };
        self.surface.close(edit.session);
        true
    }

    /// Escape closes the editor if it is open, otherwise cancels the crop.
    pub fn escape(&mut self) -> EscapeOutcome {
        if self.close_editor() {
            EscapeOutcome::ClosedEditor
        } else if self.close_crop() {
            EscapeOutcome::CancelledCrop
        } else {
            EscapeOutcome::Nothing
        }
    }
}
