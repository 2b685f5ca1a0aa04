// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
    thread,
};

use eframe::egui;

use crate::{
    analysis::{analyze, Analysis},
    config::{consts::APP_TITLE, state::{AppState, Theme}},
    core::url::is_valid_http_url,
    error::AnalysisError,
    extract::HttpExtractor,
};

use super::{components, lock, progress::GuiProgress, theme};

type Outcome = Result<Analysis, AnalysisError>;

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,

    // worker drops its outcome here; UI thread takes it on the next frame
    pending: Arc<Mutex<Option<Outcome>>>,

    // what the panels show
    pub result: Option<Analysis>,
    pub error: Option<String>,

    applied_theme: Option<Theme>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!("Init: theme={:?}, timeout={:?}", state.gui.theme, state.options.fetch.timeout);
        Self {
            state,
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            pending: Arc::new(Mutex::new(None)),
            result: None,
            error: None,
            applied_theme: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *lock(&self.status) = msg.into();
    }

    #[inline]
    pub fn status_text(&self) -> String {
        lock(&self.status).clone()
    }

    /// Kick off an analysis of whatever is in the URL field.
    ///
    /// Validation happens here, on the UI thread, so a bad URL is reported
    /// immediately and never reaches the network.
    pub fn start_analysis(&mut self, ctx: &egui::Context) {
        if self.running {
            return;
        }
        let url = s!(self.state.gui.url_text.trim());
        if url.is_empty() {
            return;
        }

        if !is_valid_http_url(&url) {
            let err = AnalysisError::InvalidUrl(url);
            loge!("UI: {err}");
            self.error = Some(err.user_message());
            self.result = None;
            self.status("Idle");
            return;
        }

        logf!("UI: Analyze {url}");
        self.running = true;
        self.error = None;

        let extractor = HttpExtractor::new(self.state.options.fetch.clone());
        let rates = self.state.options.rates;
        let status = Arc::clone(&self.status);
        let pending = Arc::clone(&self.pending);
        let ctx = ctx.clone();

        thread::spawn(move || {
            let mut prog = GuiProgress::new(status, ctx.clone());
            let outcome = analyze(&url, &extractor, &rates, Some(&mut prog));
            *lock(&pending) = Some(outcome);
            ctx.request_repaint();
        });
    }

    /// Pick up a finished worker result, if any.
    fn poll_worker(&mut self) {
        let Some(outcome) = lock(&self.pending).take() else { return };
        self.running = false;

        match outcome {
            Ok(analysis) => {
                self.status("Analysis complete!");
                self.result = Some(analysis);
                self.error = None;
            }
            Err(e) => {
                self.status("Failed");
                self.error = Some(e.user_message());
                self.result = None;
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();

        let active_theme = self.state.gui.theme;
        if self.applied_theme != Some(active_theme) {
            theme::apply(ctx, active_theme);
            self.applied_theme = Some(active_theme);
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            components::header::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            components::footer::draw(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                components::url_bar::draw(ui, self);

                if let Some(msg) = &self.error {
                    ui.add_space(6.0);
                    ui.colored_label(theme::error_color(active_theme), msg.as_str());
                }

                if let Some(analysis) = &self.result {
                    ui.add_space(6.0);
                    ui.colored_label(
                        theme::success_color(active_theme),
                        format!("Analysis complete! {}", analysis.url),
                    );
                    ui.separator();

                    components::cost_cards::draw(ui, analysis);
                    ui.add_space(8.0);
                    components::breakdown_table::draw(ui, analysis);

                    ui.separator();

                    components::complexity::draw(ui, analysis, active_theme);
                }
            });
        });
    }
}
