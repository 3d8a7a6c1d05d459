//! Main application for the YouTube video wall GUI

// Catalog enrichment fan-out
mod enrich;
// Video id extraction from watch URLs
mod extract;
// Data models for catalog entries and UI state
mod model;
// oEmbed metadata client
mod oembed;
// Embed-URL construction and browser launch
mod player;
// View-model state transitions
mod state;
// Thumbnail fetching module
mod thumbnail;

// eframe/egui for GUI application framework
use eframe::{egui, App, Frame};
// OnceCell for single-time runtime initialization
use once_cell::sync::OnceCell;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use tokio::{
    runtime::Runtime,
    sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender},
};
use egui::{ColorImage, TextureOptions, Visuals};

use model::EnrichedVideo;
use oembed::OembedClient;
use state::ViewState;

// Global Tokio runtime stored in a OnceCell for lazy init
static RUNTIME: OnceCell<Arc<Runtime>> = OnceCell::new();

/// Thumbnail tile size in the grid (0.jpg assets are 4:3)
const TILE_WIDTH: f32 = 160.0;
const TILE_HEIGHT: f32 = 120.0;

/// Program entry point: initializes logging and runtime, launches the GUI
fn main() -> Result<(), eframe::Error> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Create a new Tokio runtime and store it globally
    let rt = Arc::new(Runtime::new().unwrap());
    RUNTIME.set(rt).unwrap();

    // Configure default native options for egui window
    let options = eframe::NativeOptions::default();
    // Run the application
    eframe::run_native(
        "YouTube Video Player",
        options,
        Box::new(|cc| {
            // Use dark theme visuals
            let visuals = Visuals::dark();
            cc.egui_ctx.set_visuals(visuals);
            Box::new(WallApp::new(cc))
        }),
    )
}

/// Application state for the GUI
struct WallApp {
    /// View-model snapshot the panels render from
    view: ViewState,
    /// Shared oEmbed client for all metadata lookups
    resolver: Arc<OembedClient>,
    /// Slot filled once the startup enrichment fan-out settles
    enriched_batch: Arc<Mutex<Option<Vec<EnrichedVideo>>>>,
    /// Incoming thumbnail fetch results (video_id, image)
    thumbnail_results: Arc<Mutex<Vec<(String, ColorImage)>>>,
    /// Cached textures for video thumbnails, keyed by video id
    thumbnails: HashMap<String, egui::TextureHandle>,
    /// Completed click-time resolutions waiting to become the selection
    selection_tx: UnboundedSender<EnrichedVideo>,
    selection_rx: UnboundedReceiver<EnrichedVideo>,
}

impl WallApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let resolver = Arc::new(OembedClient::new());
        let enriched_batch = Arc::new(Mutex::new(None));
        let (selection_tx, selection_rx) = unbounded_channel();

        // Kick off the catalog-wide metadata fan-out. The full batch lands
        // in the slot in one piece once every lookup has settled; nothing
        // is rendered from partial results.
        {
            let resolver = Arc::clone(&resolver);
            let slot = Arc::clone(&enriched_batch);
            let ctx = cc.egui_ctx.clone();
            RUNTIME.get().unwrap().spawn(async move {
                let catalog = model::seed_catalog();
                let enriched = enrich::enrich_catalog(&resolver, &catalog).await;
                log::info!("catalog enriched: {} videos", enriched.len());
                slot.lock().unwrap().replace(enriched);
                ctx.request_repaint();
            });
        }

        Self {
            view: ViewState::new(),
            resolver,
            enriched_batch,
            thumbnail_results: Arc::new(Mutex::new(Vec::new())),
            thumbnails: HashMap::new(),
            selection_tx,
            selection_rx,
        }
    }

    /// Spawn one blocking thumbnail download per video that has an id and
    /// no cached texture yet
    fn spawn_thumbnail_fetches(&self, ctx: &egui::Context) {
        for video in &self.view.videos {
            let Some(video_id) = video.video_id.clone() else {
                continue;
            };
            if self.thumbnails.contains_key(&video_id) {
                continue;
            }
            let url = video.thumbnail.clone();
            let results = Arc::clone(&self.thumbnail_results);
            let ctx_c = ctx.clone();
            RUNTIME.get().unwrap().spawn_blocking(move || {
                if let Some(img) = thumbnail::fetch_thumbnail(&url) {
                    results.lock().unwrap().push((video_id, img));
                    ctx_c.request_repaint();
                }
            });
        }
    }
}

/// GUI update loop: called each frame to redraw and handle interactions
impl App for WallApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 1️⃣ Publish the enriched catalog once the fan-out has settled
        let batch = self.enriched_batch.lock().unwrap().take();
        if let Some(videos) = batch {
            self.view.publish_videos(videos);
            self.spawn_thumbnail_fetches(ctx);
        }

        // 2️⃣ Handle completed thumbnail fetches
        {
            let mut pending = self.thumbnail_results.lock().unwrap();
            for (vid, img) in pending.drain(..) {
                // Load image into egui texture and cache it
                let tex = ctx.load_texture(&vid, img, TextureOptions::default());
                self.thumbnails.insert(vid, tex);
            }
        }

        // 3️⃣ Apply click-time resolutions: the video becomes the current
        //     selection and its embed page opens with autoplay
        while let Ok(video) = self.selection_rx.try_recv() {
            if let Some(video_id) = &video.video_id {
                player::open_in_browser(&player::embed_url(video_id));
            } else {
                log::warn!("no video id in {}, playback skipped", video.url);
            }
            log::info!("now playing [{}] {}", video.id, video.title);
            self.view.select(video);
        }

        // Interactions gathered while rendering, applied as transitions below
        let mut clicked: Option<EnrichedVideo> = None;
        let mut hovered: Option<(String, egui::Pos2)> = None;

        // 4️⃣ Central panel: player area and the sectioned thumbnail grid
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("YouTube Video Player");
            ui.separator();

            // Player area: currently playing video or the placeholder
            match &self.view.selected {
                Some(video) => {
                    ui.label(egui::RichText::new(video.title.as_str()).strong().size(18.0));
                    if let Some(author) = &video.author {
                        ui.label(format!("by {}", author));
                    }
                    if let Some(video_id) = &video.video_id {
                        if ui.button("▶ Open again in browser").clicked() {
                            player::open_in_browser(&player::embed_url(video_id));
                        }
                    }
                }
                None => {
                    ui.label("Click on any video to play");
                }
            }
            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    for section in 1..=3 {
                        ui.heading(format!("Section {}", section));
                        ui.horizontal_wrapped(|ui| {
                            for video in &self.view.videos {
                                ui.vertical(|ui| {
                                    ui.set_width(TILE_WIDTH);
                                    // Thumbnail (or placeholder) is the click target
                                    let tile = match video
                                        .video_id
                                        .as_deref()
                                        .and_then(|id| self.thumbnails.get(id))
                                    {
                                        Some(tex) => ui.add(egui::ImageButton::new((
                                            tex.id(),
                                            egui::vec2(TILE_WIDTH, TILE_HEIGHT),
                                        ))),
                                        None => ui.add_sized(
                                            [TILE_WIDTH, TILE_HEIGHT],
                                            egui::Button::new("🎬"),
                                        ),
                                    };
                                    if tile.clicked() {
                                        clicked = Some(video.clone());
                                    }
                                    // Title label feeds the hover tooltip
                                    let title =
                                        ui.add(egui::Label::new(&video.title).truncate(true));
                                    if title.hovered() {
                                        if let Some(pos) = ctx.pointer_hover_pos() {
                                            hovered = Some((video.title.clone(), pos));
                                        }
                                    }
                                });
                            }
                        });
                        ui.add_space(12.0);
                    }
                });
        });

        // 5️⃣ Tooltip transitions from this frame's pointer events
        match hovered {
            Some((text, pos)) => self.view.show_tooltip(&text, pos.x, pos.y),
            None => self.view.hide_tooltip(),
        }

        // 6️⃣ A click triggers a fresh metadata lookup before the video is
        //     marked as playing; the result lands in the selection channel
        if let Some(video) = clicked {
            let resolver = Arc::clone(&self.resolver);
            let tx = self.selection_tx.clone();
            let ctx_c = ctx.clone();
            RUNTIME.get().unwrap().spawn(async move {
                let refreshed = enrich::refresh_selection(&resolver, video).await;
                let _ = tx.send(refreshed);
                ctx_c.request_repaint();
            });
        }

        // Tooltip floats just below-right of the pointer
        if self.view.tooltip.visible {
            egui::Area::new(egui::Id::new("title_tooltip"))
                .fixed_pos(egui::pos2(
                    self.view.tooltip.x + 10.0,
                    self.view.tooltip.y + 10.0,
                ))
                .interactable(false)
                .show(ctx, |ui| {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.label(&self.view.tooltip.text);
                    });
                });
        }

        // Request periodic repaint so async results are picked up
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
