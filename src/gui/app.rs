use crate::core::error::Result;
use crate::operation::{dispatch, Operation};
use crate::python::PipManager;
use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::Mutex;
use tracing::debug;

const TITLE: &str = "PIP Package Manager";
const ITEM_SPACING: f32 = 6.0;
const SECTION_SPACING: f32 = 12.0;

struct Outcome {
    message: String,
    python_path: PathBuf,
}

pub struct PipApp {
    manager: Arc<Mutex<PipManager>>,
    runtime: Handle,
    python_path: String,
    operation: Operation,
    package: String,
    new_python_path: String,
    output: String,
    pending: Option<Receiver<Outcome>>,
}

impl PipApp {
    pub fn new(manager: PipManager, runtime: Handle) -> Self {
        let python_path = manager.python_path().display().to_string();
        Self {
            manager: Arc::new(Mutex::new(manager)),
            runtime,
            python_path,
            operation: Operation::UpdatePip,
            package: String::new(),
            new_python_path: String::new(),
            output: String::new(),
            pending: None,
        }
    }

    /// Run the selected operation on the runtime; the result arrives through `pending`.
    fn execute(&mut self, ctx: &egui::Context) {
        let (tx, rx) = mpsc::channel();
        let manager = Arc::clone(&self.manager);
        let op = self.operation;
        let package = self.package.clone();
        let new_python_path = self.new_python_path.clone();
        let ctx = ctx.clone();

        debug!("gui: {}", op);
        self.runtime.spawn(async move {
            let mut manager = manager.lock().await;
            let message = match dispatch(&mut manager, op, &package, &new_python_path).await {
                Ok(message) => message,
                Err(e) => e.to_string(),
            };
            let _ = tx.send(Outcome {
                message,
                python_path: manager.python_path().to_path_buf(),
            });
            ctx.request_repaint();
        });

        self.pending = Some(rx);
    }

    fn poll_pending(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };

        match rx.try_recv() {
            Ok(outcome) => {
                self.output = outcome.message;
                self.python_path = outcome.python_path.display().to_string();
                self.pending = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.output = "Error: operation was interrupted".to_string();
                self.pending = None;
            }
        }
    }

    fn inputs_ui(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label(egui::RichText::new("Select Operation").strong());
            ui.label(
                egui::RichText::new("Choose the operation you want to perform")
                    .small()
                    .weak(),
            );
            ui.add_space(ITEM_SPACING);

            for op in Operation::ALL {
                ui.radio_value(&mut self.operation, op, op.label());
            }
        });

        ui.add_space(ITEM_SPACING);

        if self.operation.requires_package() {
            ui.label("Package Name");
            ui.add(
                egui::TextEdit::singleline(&mut self.package)
                    .hint_text("Enter package name (e.g., requests, pandas)")
                    .desired_width(f32::INFINITY),
            );
        }

        if self.operation.requires_python_path() {
            ui.label("Python Path");
            ui.add(
                egui::TextEdit::singleline(&mut self.new_python_path)
                    .hint_text("Full path to the Python executable")
                    .desired_width(f32::INFINITY),
            );
        }
    }

    fn output_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Output").strong());
            if ui.small_button("Copy").clicked() {
                ui.ctx().copy_text(self.output.clone());
            }
        });

        egui::ScrollArea::vertical()
            .max_height(260.0)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.output.as_str())
                        .font(egui::TextStyle::Monospace)
                        .desired_rows(10)
                        .desired_width(f32::INFINITY),
                );
            });
    }
}

impl eframe::App for PipApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_pending();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(TITLE);
            ui.label("Manage Python packages in your environment");
            ui.add_space(ITEM_SPACING);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Current Python Path:").strong());
                ui.monospace(&self.python_path);
            });

            ui.add_space(SECTION_SPACING);
            self.inputs_ui(ui);
            ui.add_space(SECTION_SPACING);

            ui.horizontal(|ui| {
                let idle = self.pending.is_none();
                if ui
                    .add_enabled(idle, egui::Button::new("Execute"))
                    .clicked()
                {
                    self.execute(ctx);
                }
                if ui.button("Clear Output").clicked() {
                    self.output.clear();
                }
                if !idle {
                    ui.spinner();
                }
            });

            ui.add_space(SECTION_SPACING);
            self.output_ui(ui);
            ui.add_space(SECTION_SPACING);

            ui.group(|ui| {
                ui.label(egui::RichText::new("Notes").strong());
                ui.label("• The package name is case-sensitive");
                ui.label("• For specific versions, use: package==version (e.g., requests==2.31.0)");
                ui.label("• The Python path should be the full path to the interpreter executable");
            });
        });
    }
}

pub fn run(manager: PipManager) -> Result<()> {
    let runtime = Handle::current();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 720.0])
            .with_title(TITLE),
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(PipApp::new(manager, runtime)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run egui application: {}", e))?;

    Ok(())
}
