//! One command against the persisted draft.

use crate::cli::Command;
use crate::config::{ComposerConfig, ContainerConfig};
use anyhow::{Context, Result};
use postdeck_api::{MockPostApi, publish_draft};
use postdeck_draft::DraftStore;
use postdeck_editor::{HeadlessSurface, ImageWorkflow};
use postdeck_intake::{FileCandidate, parse_tag_strict};
use postdeck_layout::{ContainerMetrics, compute_layout};
use postdeck_store::{ComposerState, DragEnd, PostStore};
use postdeck_types::ImageRef;
use std::fmt::Write as _;
use std::io::Write;
use tracing::debug;

/// The restored draft plus everything a command needs to change it.
pub struct Session {
    store: PostStore,
    drafts: DraftStore,
    workflow: ImageWorkflow<HeadlessSurface>,
    autosave: bool,
    container: ContainerConfig,
}

impl Session {
    /// Opens the draft named by `config`.
    pub fn open(config: &ComposerConfig) -> Self {
        Self::with_drafts(config.draft_store(), config)
    }

    /// Opens a session over an explicit draft store.
    pub fn with_drafts(drafts: DraftStore, config: &ComposerConfig) -> Self {
        let mut store = PostStore::new();
        drafts.restore_into(&mut store);
        if config.autosave {
            drafts.attach(&mut store);
        }
        Self {
            store,
            drafts,
            workflow: ImageWorkflow::new(HeadlessSurface::new()),
            autosave: config.autosave,
            container: config.container,
        }
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }

    /// Runs one command, writing its report to `out`.
    ///
    /// Rejected input comes back as an error carrying the message for the
    /// user, and leaves the draft untouched.
    pub async fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<()> {
        let before = (!self.autosave).then(|| self.store.state().clone());
        self.apply(command, out).await?;

        if let Some(before) = before {
            if &before != self.store.state() {
                self.drafts
                    .try_save(self.store.state())
                    .context("failed to save draft")?;
            }
        }
        Ok(())
    }

    async fn apply<W: Write>(&mut self, command: Command, out: &mut W) -> Result<()> {
        debug!(?command, "executing");
        match command {
            Command::Show => write!(out, "{}", render_state(self.store.state()))?,
            Command::Title { text } => {
                self.store.set_title(&text);
                writeln!(out, "title: {}", self.store.title())?;
            }
            Command::AddSlide => {
                let id = self.store.add_slide()?;
                writeln!(out, "added slide {id}")?;
            }
            Command::DeleteSlide { id } => {
                if self.store.delete_slide(id)? {
                    writeln!(out, "deleted slide {id}")?;
                } else {
                    writeln!(out, "no slide {id}")?;
                }
            }
            Command::Select { id } => {
                if self.store.slide(id).is_none() {
                    writeln!(out, "no slide {id}")?;
                } else {
                    self.store.select_slide(id);
                    writeln!(out, "selected slide {id}")?;
                }
            }
            Command::Move { active, over } => {
                if self.store.on_drag_end(DragEnd::new(active, Some(over)))? {
                    writeln!(out, "order: {}", join_ids(&self.store))?;
                } else {
                    writeln!(out, "order unchanged")?;
                }
            }
            Command::Tag { raw } => match parse_tag_strict(&raw)? {
                Some(tag) => {
                    if self.store.add_tag(tag.handle.clone(), tag.is_link) {
                        writeln!(out, "tagged @{}", tag.handle)?;
                    } else {
                        writeln!(out, "@{} is already tagged", tag.handle)?;
                    }
                }
                None => writeln!(out, "nothing to tag")?,
            },
            Command::Untag { handle } => {
                let handle = handle.trim().trim_start_matches('@');
                if self.store.remove_tag(handle) {
                    writeln!(out, "removed @{handle}")?;
                } else {
                    writeln!(out, "@{handle} is not tagged")?;
                }
            }
            Command::Attach {
                payload,
                size,
                mime,
            } => {
                let preview = self.workflow.pick_file(&FileCandidate::new(size, mime))?;
                debug!(%preview, "crop preview issued");
                self.workflow
                    .apply_crop(&mut self.store, ImageRef::new(payload))?;
                writeln!(out, "image set on slide {}", selected(&self.store))?;
            }
            Command::Edit { payload } => {
                self.workflow.open_full_editor(&self.store)?;
                let saved = payload.is_some();
                self.workflow
                    .finish_editor(&mut self.store, payload.map(ImageRef::new))?;
                if saved {
                    writeln!(out, "edited slide {}", selected(&self.store))?;
                } else {
                    writeln!(out, "editor closed without saving")?;
                }
            }
            Command::Layout {
                width,
                height,
                padding,
            } => {
                let configured = self.container.metrics();
                let metrics = ContainerMetrics::new(
                    width.unwrap_or(configured.width),
                    height.unwrap_or(configured.height),
                    padding.unwrap_or(configured.padding_x),
                );
                let layout = compute_layout(metrics);
                writeln!(
                    out,
                    "canvas {:.0}x{:.0}, details {:.0}, {}",
                    layout.canvas_width,
                    layout.canvas_height(),
                    layout.effective_details_width(),
                    if layout.is_stacked { "stacked" } else { "side by side" }
                )?;
            }
            Command::Sidebar => {
                self.store.toggle_sidebar();
                let state = if self.store.sidebar_open() { "open" } else { "closed" };
                writeln!(out, "sidebar {state}")?;
            }
            Command::Discard => {
                self.drafts.discard().context("failed to discard draft")?;
                writeln!(out, "draft discarded")?;
            }
            Command::Publish => {
                let api = MockPostApi::new();
                let report = publish_draft(&api, self.store.state(), None)
                    .await
                    .context("failed to publish draft")?;
                let replaced = report.apply_media(&mut self.store);
                writeln!(
                    out,
                    "published post {} with {} slides ({replaced} images uploaded)",
                    report.post_id,
                    report.slides.len()
                )?;
            }
        }
        Ok(())
    }
}

fn selected(store: &PostStore) -> String {
    store
        .selected_slide_id()
        .map_or_else(|| "-".to_string(), |id| id.to_string())
}

fn join_ids(store: &PostStore) -> String {
    store
        .slide_ids()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Human-readable summary of the draft, one slide per line with the
/// selected slide marked `>`.
#[must_use]
pub fn render_state(state: &ComposerState) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{}", state.post_title);
    for slide in &state.slides {
        let marker = if state.selected_slide_id == Some(slide.id) { '>' } else { ' ' };
        let image = if slide.has_image() { "[image]" } else { "[empty]" };
        let _ = write!(text, "{marker} {} {image}", slide.id);
        for tag in &slide.tags {
            let _ = write!(text, " @{}", tag.handle);
            if tag.is_link {
                let _ = write!(text, "(link)");
            }
        }
        text.push('\n');
    }
    let sidebar = if state.sidebar_open { "open" } else { "closed" };
    let _ = writeln!(text, "sidebar {sidebar}");
    text
}
