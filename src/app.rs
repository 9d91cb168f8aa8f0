use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use eframe::egui;

use crate::processor;
use crate::summary::BatchSummary;
use crate::utils;

/// How long the success alert stays visible before the app quits.
const ALERT_DISPLAY_DURATION: Duration = Duration::from_secs(3);

/// Overall application phase.
#[derive(PartialEq)]
enum AppPhase {
    Idle,
    Processing,
    Summarized,
}

/// Alert content derived from a finished batch.
struct Alert {
    title: &'static str,
    message: String,
    has_failures: bool,
}

impl Alert {
    fn from_summary(summary: &BatchSummary) -> Self {
        Self {
            title: summary.title(),
            message: summary.message(),
            has_failures: summary.has_failures(),
        }
    }
}

pub struct DequarantineApp {
    phase: AppPhase,
    receiver: Option<mpsc::Receiver<BatchSummary>>,
    batch_size: usize,
    alert: Option<Alert>,
    quit_at: Option<Instant>,
}

impl DequarantineApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            phase: AppPhase::Idle,
            receiver: None,
            batch_size: 0,
            alert: None,
            quit_at: None,
        }
    }

    fn start_batch(&mut self, paths: Vec<PathBuf>) {
        self.batch_size = paths.len();
        self.phase = AppPhase::Processing;

        let (tx, rx) = mpsc::channel::<BatchSummary>();
        self.receiver = Some(rx);
        processor::process_files(paths, move |summary| {
            let _ = tx.send(summary);
        });
    }

    fn drain_messages(&mut self) {
        let summary = match self.receiver.as_ref() {
            Some(rx) => rx.try_recv().ok(),
            None => None,
        };
        if let Some(summary) = summary {
            self.receiver = None;
            let alert = Alert::from_summary(&summary);
            // Only a failure-free batch arms the auto-quit timer; errors wait
            // for manual dismissal.
            self.quit_at = if alert.has_failures {
                None
            } else {
                Some(Instant::now() + ALERT_DISPLAY_DURATION)
            };
            self.alert = Some(alert);
            self.phase = AppPhase::Summarized;
        }
    }

    fn handle_drops(&mut self, ctx: &egui::Context) {
        // Drops are ignored while a batch is in flight or an alert is up.
        if self.phase != AppPhase::Idle {
            return;
        }
        // Items the host could not resolve to a path are skipped entirely.
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        if !dropped.is_empty() {
            self.start_batch(dropped);
        }
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.heading(
                egui::RichText::new("Dequarantine")
                    .size(24.0)
                    .strong()
                    .color(egui::Color32::from_rgb(80, 180, 220)),
            );
            ui.label(
                egui::RichText::new("Remove the quarantine attribute from files")
                    .size(13.0)
                    .color(egui::Color32::GRAY),
            );
        });
        ui.add_space(8.0);
    }

    fn render_drop_zone(&self, ui: &mut egui::Ui, hovered: &[String]) {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            if hovered.is_empty() {
                ui.label(
                    egui::RichText::new("Drag files here")
                        .size(20.0)
                        .strong()
                        .color(egui::Color32::from_rgb(160, 160, 170)),
                );
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new("Dropped files are processed immediately.")
                        .size(12.0)
                        .color(egui::Color32::GRAY),
                );
            } else {
                ui.label(
                    egui::RichText::new("Release to remove quarantine")
                        .size(20.0)
                        .strong()
                        .color(egui::Color32::from_rgb(80, 200, 80)),
                );
                ui.add_space(6.0);
                for name in hovered.iter().take(6) {
                    ui.label(egui::RichText::new(name).size(12.0).color(egui::Color32::GRAY));
                }
                if hovered.len() > 6 {
                    ui.label(
                        egui::RichText::new(format!("...and {} more", hovered.len() - 6))
                            .size(12.0)
                            .italics()
                            .color(egui::Color32::GRAY),
                    );
                }
            }
        });
    }

    fn render_processing(&self, ui: &mut egui::Ui) {
        ui.add_space(32.0);
        ui.vertical_centered(|ui| {
            ui.spinner();
            ui.add_space(8.0);
            ui.label(format!("Processing {} file(s)...", self.batch_size));
        });
    }

    fn render_alert(&mut self, ctx: &egui::Context) {
        let Some(alert) = self.alert.as_ref() else {
            return;
        };
        let mut dismissed = false;
        let countdown = self
            .quit_at
            .map(|t| t.saturating_duration_since(Instant::now()));

        // Dark overlay behind the dialog to block background interaction
        egui::Area::new(egui::Id::new("summary_overlay"))
            .fixed_pos(egui::Pos2::ZERO)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                let screen = ui.ctx().screen_rect();
                ui.allocate_rect(screen, egui::Sense::click());
                ui.painter()
                    .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(160));
            });

        egui::Window::new("")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([300.0, 0.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if alert.has_failures {
                        ui.label(
                            egui::RichText::new("\u{26A0}")
                                .size(32.0)
                                .color(egui::Color32::from_rgb(220, 80, 80)),
                        );
                    } else {
                        ui.label(
                            egui::RichText::new("\u{2713}")
                                .size(32.0)
                                .color(egui::Color32::from_rgb(80, 200, 80)),
                        );
                    }
                    ui.add_space(4.0);
                    ui.label(egui::RichText::new(alert.title).size(17.0).strong());
                    ui.add_space(6.0);
                    ui.label(&alert.message);
                    ui.add_space(10.0);

                    if alert.has_failures {
                        if ui.add_sized([120.0, 28.0], egui::Button::new("OK")).clicked() {
                            dismissed = true;
                        }
                    } else if let Some(remaining) = countdown {
                        ui.label(
                            egui::RichText::new(format!(
                                "Quitting in {}s",
                                remaining.as_secs() + 1
                            ))
                            .small()
                            .color(egui::Color32::GRAY),
                        );
                    }
                });
                ui.add_space(8.0);
            });

        if dismissed {
            self.alert = None;
            self.phase = AppPhase::Idle;
        }
    }
}

impl eframe::App for DequarantineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_messages();

        if self.phase == AppPhase::Processing {
            ctx.request_repaint();
        }

        if let Some(quit_at) = self.quit_at {
            let now = Instant::now();
            if now >= quit_at {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            } else {
                ctx.request_repaint_after(quit_at - now);
            }
        }

        self.handle_drops(ctx);

        let hovered: Vec<String> = ctx.input(|i| {
            i.raw
                .hovered_files
                .iter()
                .filter_map(|f| f.path.as_deref().map(utils::display_path))
                .collect()
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui);
            ui.separator();
            if self.phase == AppPhase::Processing {
                self.render_processing(ui);
            } else {
                self.render_drop_zone(ui, &hovered);
            }
        });

        if self.alert.is_some() {
            self.render_alert(ctx);
        }
    }
}
