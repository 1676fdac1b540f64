use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use numguess_domain::{Difficulty, StatisticsRecord};
use numguess_game::{GameError, GameFlow, GuessFeedback, RandomSecret, Screen};
use numguess_stats::{resolve_stats_path, StatisticsStore};
use numguess_ui::{theme, widgets};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Number guessing game", long_about = None)]
struct Cli {
    /// Statistics file; falls back to $NUMGUESS_STATS_FILE, then game_stats_ngg.json
    #[arg(long)]
    stats_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let path = resolve_stats_path(cli.stats_file);
    let store = StatisticsStore::load(&path)
        .with_context(|| format!("cannot start with statistics file {}", path.display()))?;
    info!(path = %path.display(), "statistics ready");
    let flow = GameFlow::new(store, Box::new(RandomSecret));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Main Menu")
            .with_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Number Guessing Game",
        options,
        Box::new(move |cc| {
            theme::apply(&cc.egui_ctx);
            Box::new(DesktopApp::new(flow))
        }),
    )
    .map_err(|e| anyhow::anyhow!(format!("{e:?}")))?;
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DialogKind {
    Info,
    Warning,
    Error,
    ConfirmQuit,
}

#[derive(Clone, Debug)]
struct Dialog {
    title: String,
    body: String,
    kind: DialogKind,
}

impl Dialog {
    fn new(kind: DialogKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            kind,
        }
    }

    fn statistics(stats: &StatisticsRecord) -> Self {
        let mut body = stats.to_string();
        if stats.games_played > 0 {
            body.push_str(&format!("\nWin Rate: {:.0}%", stats.win_rate() * 100.0));
        }
        Self::new(DialogKind::Info, "Game Statistics", body)
    }
}

enum DialogAnswer {
    Dismissed,
    Confirmed,
}

struct DesktopApp {
    flow: GameFlow,
    guess_input: String,
    last_hint: Option<String>,
    dialog: Option<Dialog>,
    shown_title: &'static str,
}

impl DesktopApp {
    fn new(flow: GameFlow) -> Self {
        Self {
            flow,
            guess_input: String::new(),
            last_hint: None,
            dialog: None,
            shown_title: "Main Menu",
        }
    }

    fn main_menu_ui(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            widgets::title(ui, "NUMBER GUESSING GAME");
            ui.add_space(20.0);
            let tokens = theme::tokens();
            if widgets::filled_button(ui, "Start Game", tokens.go).clicked() {
                self.run(|flow| flow.start_game());
            }
            ui.add_space(20.0);
            if widgets::filled_button(ui, "View Stats", tokens.go).clicked() {
                self.dialog = Some(Dialog::statistics(&self.flow.statistics()));
            }
            ui.add_space(20.0);
            if widgets::filled_button(ui, "Quit", tokens.quit).clicked() {
                self.dialog = Some(Dialog::new(
                    DialogKind::ConfirmQuit,
                    "Quit",
                    "Are you sure you want to quit?",
                ));
            }
        });
    }

    fn difficulty_ui(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            widgets::prompt(ui, "Select Difficulty Level", 24.0);
            ui.add_space(20.0);
            for difficulty in Difficulty::ALL {
                let fill = theme::difficulty_fill(difficulty);
                if widgets::filled_button(ui, difficulty.label(), fill).clicked() {
                    self.guess_input.clear();
                    self.last_hint = None;
                    self.run(|flow| flow.choose_difficulty(difficulty));
                }
                ui.add_space(10.0);
            }
            ui.add_space(10.0);
            if ui.button("Back").clicked() {
                self.run(|flow| flow.cancel());
            }
        });
    }

    fn guessing_ui(&mut self, ui: &mut egui::Ui, prompt: String) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            widgets::prompt(ui, &prompt, 14.0);
            ui.add_space(15.0);
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.guess_input)
                    .desired_width(200.0)
                    .font(egui::TextStyle::Body),
            );
            let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.add_space(10.0);
            let clicked = widgets::filled_button(ui, "Submit Guess", theme::tokens().go).clicked();
            if entered || clicked {
                self.submit_guess();
                response.request_focus();
            }
            ui.add_space(20.0);
            if ui.button("Give Up").clicked() {
                self.run(|flow| flow.cancel());
            }
        });
    }

    fn result_ui(&mut self, ui: &mut egui::Ui, title: &str, message: String) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            if let Some(hint) = &self.last_hint {
                widgets::prompt(ui, hint, 14.0);
                ui.add_space(10.0);
            }
            widgets::title(ui, title);
            ui.add_space(10.0);
            ui.label(message);
            ui.add_space(20.0);
            if widgets::filled_button(ui, "Back to Menu", theme::tokens().go).clicked() {
                self.last_hint = None;
                self.run(|flow| flow.acknowledge());
            }
        });
    }

    fn submit_guess(&mut self) {
        match self.flow.submit_guess(&self.guess_input) {
            Ok(GuessFeedback::Hint { hint, .. }) => {
                self.guess_input.clear();
                self.dialog = Some(Dialog::new(DialogKind::Info, "Try Again", hint.message()));
            }
            Ok(GuessFeedback::Lost { hint, .. }) => {
                self.guess_input.clear();
                self.last_hint = Some(hint.message().to_string());
            }
            Ok(GuessFeedback::Won { .. }) => self.guess_input.clear(),
            Err(GameError::Input(err)) => {
                self.dialog = Some(Dialog::new(DialogKind::Warning, err.title(), err.user_message()));
            }
            Err(err) => {
                if let GameError::Unsaved { feedback, .. } = &err {
                    self.guess_input.clear();
                    if let GuessFeedback::Lost { hint, .. } = feedback {
                        self.last_hint = Some(hint.message().to_string());
                    }
                }
                self.report(err);
            }
        }
    }

    fn run(&mut self, action: impl FnOnce(&mut GameFlow) -> Result<(), GameError>) {
        if let Err(err) = action(&mut self.flow) {
            self.report(err);
        }
    }

    fn report(&mut self, err: GameError) {
        error!(error = ?err, "game action failed");
        let body = match std::error::Error::source(&err) {
            Some(source) => format!("{err}: {source}"),
            None => err.to_string(),
        };
        self.dialog = Some(Dialog::new(DialogKind::Error, "Error", body));
    }

    fn dialog_ui(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.dialog.clone() else {
            return;
        };
        let mut answer = None;
        egui::Window::new(dialog.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                let color = match dialog.kind {
                    DialogKind::Info | DialogKind::ConfirmQuit => theme::tokens().text_primary,
                    DialogKind::Warning => theme::tokens().caution,
                    DialogKind::Error => theme::tokens().danger,
                };
                ui.label(egui::RichText::new(dialog.body.as_str()).color(color));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if dialog.kind == DialogKind::ConfirmQuit {
                        if ui.button("Yes").clicked() {
                            answer = Some(DialogAnswer::Confirmed);
                        }
                        if ui.button("No").clicked() {
                            answer = Some(DialogAnswer::Dismissed);
                        }
                    } else if ui.button("OK").clicked()
                        || ui.input(|i| i.key_pressed(egui::Key::Escape))
                    {
                        answer = Some(DialogAnswer::Dismissed);
                    }
                });
            });
        match answer {
            Some(DialogAnswer::Confirmed) => {
                info!("quit confirmed");
                self.dialog = None;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            Some(DialogAnswer::Dismissed) => self.dialog = None,
            None => {}
        }
    }

    fn window_title(&self) -> &'static str {
        match self.flow.screen() {
            Screen::MainMenu => "Main Menu",
            Screen::DifficultySelect => "Select Difficulty",
            Screen::Guessing(_) | Screen::Result(_) => "Guess the Number",
        }
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let title = self.window_title();
        if title != self.shown_title {
            self.shown_title = title;
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.to_string()));
        }

        let modal_open = self.dialog.is_some();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!modal_open, |ui| match self.flow.screen().clone() {
                Screen::MainMenu => self.main_menu_ui(ui),
                Screen::DifficultySelect => self.difficulty_ui(ui),
                Screen::Guessing(session) => self.guessing_ui(ui, session.prompt()),
                Screen::Result(summary) => self.result_ui(ui, summary.title(), summary.message()),
            });
        });
        self.dialog_ui(ctx);
    }
}
