// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use super::lock;
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, done: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        *lock(&self.status) = msg.into();
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        self.done += 1;
        if self.total == 0 {
            self.set_status(s!(msg));
        } else {
            self.set_status(format!("{} ({}/{})", msg, self.done.min(self.total), self.total));
        }
    }
}
