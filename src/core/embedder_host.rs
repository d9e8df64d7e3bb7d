use crate::interface::runtime::EmbedderRuntime;
use crate::interface::window::WindowHandle;
use crate::model::error::platform::PlatformError;
use crate::model::error::runtime::RuntimeError;
use crate::model::error::Error;
use crate::model::icon::IconImage;
use crate::model::startup_options::StartupOptions;
use crate::platform::main_thread::MainThread;
use eframe::egui;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

pub const APP_NAME: &str = "Flutter Bootstrap";

/// Native window host backed by `eframe`.
///
/// It owns the event loop for the rest of the process and shows the bundle it was launched
/// with; the hosted UI itself is not rendered here.
pub struct EmbedderHost;

impl EmbedderRuntime for EmbedderHost {
    fn run(&self, main_thread: &MainThread, options: StartupOptions) -> Result<(), Error> {
        if !main_thread.is_current() {
            return Err(PlatformError::NotMainThread.into());
        }

        let (width, height) = (options.window_width(), options.window_height());

        let mut viewport = egui::ViewportBuilder::default().with_title(APP_NAME);
        if width > 0 && height > 0 {
            viewport = viewport.with_inner_size([width as f32, height as f32]);
        }
        let native_options = eframe::NativeOptions {
            viewport,
            ..Default::default()
        };

        let shell = HostShell {
            asset_path: options.asset_path().to_path_buf(),
            icu_data_path: options.icu_data_path().to_path_buf(),
            vm_arguments: options.vm_arguments().to_vec(),
        };
        let pixel_ratio = options.pixel_ratio() as f32;
        let window_initializer = options.into_window_initializer();

        // eframe flattens creator errors into a string; keep the typed one.
        let initializer_failure: Rc<RefCell<Option<Error>>> = Rc::new(RefCell::new(None));
        let failure_slot = initializer_failure.clone();

        let result = eframe::run_native(
            APP_NAME,
            native_options,
            Box::new(move |cc| {
                cc.egui_ctx.set_pixels_per_point(pixel_ratio);
                let mut window = EguiWindow { ctx: &cc.egui_ctx };
                if let Err(err) = window_initializer(&mut window) {
                    *failure_slot.borrow_mut() = Some(err.clone());
                    return Err(err.into());
                }
                Ok(Box::new(shell))
            }),
        );

        if let Some(err) = initializer_failure.borrow_mut().take() {
            return Err(err);
        }
        result.map_err(RuntimeError::RuntimeLaunchFailure)?;
        Ok(())
    }
}

struct EguiWindow<'a> {
    ctx: &'a egui::Context,
}

impl WindowHandle for EguiWindow<'_> {
    fn set_icon(&mut self, icon: IconImage) {
        let icon = egui::IconData {
            rgba: icon.rgba,
            width: icon.width,
            height: icon.height,
        };
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Icon(Some(Arc::new(icon))));
    }
}

struct HostShell {
    asset_path: PathBuf,
    icu_data_path: PathBuf,
    vm_arguments: Vec<String>,
}

impl eframe::App for HostShell {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(APP_NAME);
            ui.separator();
            egui::Grid::new("startup_options").num_columns(2).show(ui, |ui| {
                ui.label("Assets");
                ui.monospace(self.asset_path.display().to_string());
                ui.end_row();

                ui.label("ICU data");
                ui.monospace(self.icu_data_path.display().to_string());
                ui.end_row();

                ui.label("VM arguments");
                ui.monospace(self.vm_arguments.join(" "));
                ui.end_row();
            });
        });
    }
}
