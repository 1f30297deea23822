use std::time::Duration;

use eframe::{egui, Frame};
use egui::Context;

use reqwest::blocking::Client;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use reqwest::{Result, StatusCode};

use lorem_core::{ConfigSnapshot, Language, SizeTier, UnitType};

const SERVER: &str = "http://127.0.0.1:5000";

const UNIT_TYPES: [UnitType; 6] = [
    UnitType::Paragraph,
    UnitType::Sentence,
    UnitType::Word,
    UnitType::Link,
    UnitType::OrderedList,
    UnitType::UnorderedList,
];

const SIZES: [SizeTier; 5] = [SizeTier::Any, SizeTier::Short, SizeTier::Medium, SizeTier::Long, SizeTier::VeryLong];

const LANGUAGES: [Language; 5] = [
    Language::English,
    Language::SimplifiedChinese,
    Language::HongKongChinese,
    Language::TaiwanChinese,
    Language::Japanese,
];

/// What the server answered to a command.
enum Reply {
    Text(String),
    OpenHelp(String),
    OpenSettings(ConfigSnapshot),
    Rejected(String),
}

/// REST context holding a reusable blocking HTTP client.
struct RESTContext {
    client: Client,
}

impl RESTContext {
    /// Creates a new REST context with a timeout.
    ///
    /// Redirects are not followed: a redirect is the help request.
    fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::new(5, 0))
            .redirect(Policy::none())
            .build()?;
        Ok(Self { client })
    }

    /// Sends a GET request to `/v1/generate`.
    fn get_generated(&self, command: &str) -> Result<Reply> {
        let response = self.client
            .get(format!("{SERVER}/v1/generate"))
            .query(&[("command", command)])
            .send()?;

        match response.status() {
            StatusCode::SEE_OTHER => {
                let url = response
                    .headers()
                    .get(LOCATION)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_owned();
                Ok(Reply::OpenHelp(url))
            }
            StatusCode::BAD_REQUEST => Ok(Reply::Rejected(response.text()?)),
            _ => {
                let response = response.error_for_status()?;
                let is_json = response
                    .headers()
                    .get(reqwest::header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .is_some_and(|v| v.starts_with("application/json"));
                if is_json {
                    Ok(Reply::OpenSettings(response.json()?))
                } else {
                    Ok(Reply::Text(response.text()?))
                }
            }
        }
    }

    /// Sends a GET request to `/v1/config`.
    fn get_config(&self) -> Result<ConfigSnapshot> {
        self.client
            .get(format!("{SERVER}/v1/config"))
            .send()?
            .error_for_status()?
            .json()
    }

    /// Sends a PUT request to `/v1/config`.
    fn put_config(&self, snapshot: &ConfigSnapshot) -> Result<ConfigSnapshot> {
        self.client
            .put(format!("{SERVER}/v1/config"))
            .json(snapshot)
            .send()?
            .error_for_status()?
            .json()
    }
}

/// Global UI state (MUST persist between frames in egui).
struct LoremUI {
    rest: RESTContext,
    command: String,
    output: Option<String>,
    status: String,

    show_settings: bool,
    draft: ConfigSnapshot,
}

impl LoremUI {
    fn new() -> Result<Self> {
        let mut ui = Self {
            rest: RESTContext::new()?,
            command: "lorem_p3".to_owned(),
            output: None,
            status: String::new(),
            show_settings: false,
            draft: ConfigSnapshot::default(),
        };
        ui.get_config();
        Ok(ui)
    }

    /// Runs the current command and performs the requested side effect.
    fn generate(&mut self, ctx: &Context) {
        match self.rest.get_generated(&self.command) {
            Ok(Reply::Text(text)) => {
                self.output = Some(text);
                self.status.clear();
            }
            Ok(Reply::OpenHelp(url)) => {
                ctx.open_url(egui::OpenUrl::new_tab(&url));
                self.status = format!("Opened {url}");
            }
            Ok(Reply::OpenSettings(snapshot)) => {
                self.draft = snapshot;
                self.show_settings = true;
                self.status.clear();
            }
            Ok(Reply::Rejected(message)) => self.status = message,
            Err(e) => self.status = format!("Error: {e}"),
        }
    }

    fn get_config(&mut self) {
        match self.rest.get_config() {
            Ok(snapshot) => self.draft = snapshot,
            Err(e) => self.status = format!("Error: {e}"),
        }
    }

    fn put_config(&mut self) {
        match self.rest.put_config(&self.draft) {
            Ok(snapshot) => {
                self.draft = snapshot;
                self.status = "Settings saved".to_owned();
            }
            Err(e) => self.status = format!("Error: {e}"),
        }
    }

    /// Editor for the snapshot defaults and delimiters.
    fn settings_panel(&mut self, ui: &mut egui::Ui) {
        let defaults = &mut self.draft.defaults;

        egui::Grid::new("settings_grid")
            .num_columns(2)
            .spacing([20.0, 6.0])
            .striped(true)
            .show(ui, |ui| {
                ui.label("Unit");
                egui::ComboBox::from_id_salt("unit_type")
                    .selected_text(format!("{:?}", defaults.unit_type))
                    .show_ui(ui, |ui| {
                        for unit_type in UNIT_TYPES {
                            ui.selectable_value(&mut defaults.unit_type, unit_type, format!("{unit_type:?}"));
                        }
                    });
                ui.end_row();

                ui.label("Count");
                ui.add(egui::DragValue::new(&mut defaults.unit_count).range(0..=100).speed(1));
                ui.end_row();

                ui.label("Size");
                egui::ComboBox::from_id_salt("unit_size")
                    .selected_text(format!("{:?}", defaults.unit_size))
                    .show_ui(ui, |ui| {
                        for size in SIZES {
                            ui.selectable_value(&mut defaults.unit_size, size, format!("{size:?}"));
                        }
                    });
                ui.end_row();

                ui.label("Language");
                egui::ComboBox::from_id_salt("unit_language")
                    .selected_text(defaults.unit_language.tag())
                    .show_ui(ui, |ui| {
                        for language in LANGUAGES {
                            ui.selectable_value(&mut defaults.unit_language, language, language.tag());
                        }
                    });
                ui.end_row();

                ui.checkbox(&mut defaults.is_wrapped, "Wrap");
                ui.add(egui::DragValue::new(&mut defaults.wrap_width).range(1..=500).speed(1));
                ui.end_row();

                ui.label("HTML");
                ui.checkbox(&mut defaults.is_html, "");
                ui.end_row();
            });

        ui.separator();
        ui.label("Delimiters");
        let mut delimiters: Vec<String> = self.draft.commands.split_reg_exp.as_slice().to_vec();
        let mut remove = None;
        for (i, delimiter) in delimiters.iter_mut().enumerate() {
            ui.horizontal(|ui| {
                ui.add(egui::TextEdit::singleline(delimiter).desired_width(60.0));
                if ui.button("Remove").clicked() {
                    remove = Some(i);
                }
            });
        }
        if let Some(i) = remove {
            delimiters.remove(i);
        }
        if ui.button("Add delimiter").clicked() {
            delimiters.push("_".to_owned());
        }
        self.draft.commands.split_reg_exp = lorem_core::model::configuration::DelimiterSet::new(delimiters);

        ui.horizontal(|ui| {
            ui.label("Help URL");
            ui.text_edit_singleline(&mut self.draft.commands.help_url);
        });

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Save").clicked() {
                self.put_config();
            }
            if ui.button("Reload").clicked() {
                self.get_config();
            }
        });
    }
}

impl eframe::App for LoremUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        let mut show_settings = self.show_settings;
        egui::Window::new("Settings")
            .open(&mut show_settings)
            .resizable(true)
            .show(ctx, |ui| self.settings_panel(ui));
        self.show_settings = show_settings;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                let field = ui.add(egui::TextEdit::singleline(&mut self.command).desired_width(260.0));
                let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.add_sized([100.0, 24.0], egui::Button::new("Generate")).clicked() || submitted {
                    self.generate(ctx);
                }
                if ui.button("Settings").clicked() {
                    self.show_settings = true;
                }
            });

            if !self.status.is_empty() {
                ui.label(&self.status);
            }
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| match &self.output {
                Some(text) => {
                    ui.add(egui::TextEdit::multiline(&mut text.as_str()).desired_width(f32::INFINITY));
                }
                None => {
                    ui.label("Type a command (ex. lorem_p3_medium) and click Generate");
                }
            });
        });
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 480.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "lorem",
        options,
        Box::new(|_| Ok(Box::new(LoremUI::new()?))),
    )
}
