use crate::libpanelik::cards::{CardAction, Catalog};
use crate::libpanelik::editor::{EditorAction, LogSink, QuizBoard, SaveSink};
use crate::libpanelik::fixtures::Dataset;
use crate::libpanelik::quizzes::QuizStatus;
use crate::Error;
use eframe::egui;
use eframe::egui::Align2;
use eframe::egui::Color32;
use eframe::egui::Frame;
use eframe::egui::Id;
use eframe::egui::RichText;
use eframe::egui::ScrollArea;
use eframe::egui::Ui;
use log::{debug, warn};

const CARD_WIDTH: f32 = 220.0;
const EDITOR_ID: &str = "quiz_editor";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Page {
    Cards,
    Quizzes,
}

struct PanelState<S: SaveSink> {
    catalog: Catalog,
    board: QuizBoard<S>,
    page: Page,
    last_error: Option<String>,
}

impl<S: SaveSink> PanelState<S> {
    fn new(catalog: Catalog, board: QuizBoard<S>) -> Self {
        Self {
            catalog,
            board,
            page: Page::Cards,
            last_error: None,
        }
    }

    fn apply_all(&mut self, actions: Vec<EditorAction>) {
        for action in actions {
            debug!("[Gui] {:?}", action);
            match self.board.apply(action) {
                Ok(()) => self.last_error = None,
                Err(err) => {
                    warn!("[Gui] {}", err);
                    self.last_error = Some(err.to_string());
                }
            }
        }
    }

    fn draw_cards(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.heading("Karty");
            if ui.button("+ Dodaj kartę").clicked() {
                self.catalog.request(CardAction::Add);
            }
        });
        ui.separator();

        ScrollArea::vertical().auto_shrink(false).show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for card in self.catalog.cards() {
                    Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(CARD_WIDTH);
                        ui.vertical(|ui| {
                            ui.add(
                                egui::Image::new(card.image_url.as_str())
                                    .max_width(CARD_WIDTH)
                                    .max_height(160.0),
                            );
                            ui.label(RichText::new(&card.title).strong().size(18.0));
                            ui.label(&card.description);
                            ui.horizontal(|ui| {
                                if ui.button("Edytuj").clicked() {
                                    self.catalog.request(CardAction::Edit(card.id.clone()));
                                }
                                if ui.button("Usuń").clicked() {
                                    self.catalog.request(CardAction::Delete(card.id.clone()));
                                }
                            });
                        });
                    });
                }
            });
        });
    }

    fn draw_quizzes(&self, ui: &mut Ui, actions: &mut Vec<EditorAction>) {
        ui.heading("Quizy");
        ui.separator();

        egui::Grid::new("quiz_table")
            .striped(true)
            .num_columns(6)
            .show(ui, |ui| {
                for header in ["ID", "Tytuł", "Pytania", "Status", "Utworzono", ""] {
                    ui.label(RichText::new(header).strong());
                }
                ui.end_row();

                for row in self.board.rows() {
                    ui.label(&row.id);
                    ui.label(&row.title);
                    ui.label(row.question_count.to_string());
                    ui.label(RichText::new(row.status.label()).color(status_color(row.status)));
                    ui.label(&row.created_at);
                    if ui.button("Edytuj").clicked() {
                        actions.push(EditorAction::Open(row.id.clone()));
                    }
                    ui.end_row();
                }
            });
    }

    /// Draws the editor window when a draft is open. Returns the number of
    /// question inputs drawn.
    fn draw_editor(&self, ctx: &egui::Context, actions: &mut Vec<EditorAction>) -> usize {
        let Some(draft) = self.board.draft() else {
            return 0;
        };
        let mut inputs = 0;

        egui::Window::new(format!("Edycja quizu {}", draft.id))
            .id(Id::new(EDITOR_ID))
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Tytuł");
                let mut title = draft.title.clone();
                if ui.text_edit_singleline(&mut title).changed() {
                    actions.push(EditorAction::EditTitle(title));
                }

                ui.add_space(8.0);
                ui.label(format!("Pytania ({})", draft.questions.len()));
                for (idx, question) in draft.questions.iter().enumerate() {
                    ui.horizontal(|ui| {
                        ui.label(format!("{}.", idx + 1));
                        let mut text = question.clone();
                        inputs += 1;
                        if ui.text_edit_singleline(&mut text).changed() {
                            actions.push(EditorAction::EditQuestion(idx, text));
                        }
                        if ui.button("Usuń").clicked() {
                            actions.push(EditorAction::RemoveQuestion(idx));
                        }
                    });
                }
                if ui.button("+ Dodaj pytanie").clicked() {
                    actions.push(EditorAction::AddQuestion);
                }

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Zapisz").clicked() {
                        actions.push(EditorAction::Save);
                    }
                    if ui.button("Anuluj").clicked() {
                        actions.push(EditorAction::Cancel);
                    }
                });
            });
        inputs
    }

    /// Draws one frame. Returns the number of question inputs in the editor.
    fn draw(&mut self, ctx: &egui::Context) -> usize {
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("pages").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.page, Page::Cards, "Karty");
                ui.selectable_value(&mut self.page, Page::Quizzes, "Quizy");
            })
        });

        if let Some(err) = &self.last_error {
            egui::TopBottomPanel::bottom("errors").show(ctx, |ui| {
                ui.colored_label(Color32::LIGHT_RED, err);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.page {
            Page::Cards => self.draw_cards(ui),
            Page::Quizzes => self.draw_quizzes(ui, &mut actions),
        });

        let inputs = self.draw_editor(ctx, &mut actions);
        self.apply_all(actions);
        inputs
    }
}

fn status_color(status: QuizStatus) -> Color32 {
    match status {
        QuizStatus::Published => Color32::from_rgb(60, 160, 90),
        QuizStatus::Draft => Color32::from_rgb(200, 150, 40),
        QuizStatus::Archived => Color32::GRAY,
    }
}

impl<S: SaveSink> eframe::App for PanelState<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let _ = self.draw(ctx);
    }
}

pub fn init_gui(dataset: Dataset) -> Result<(), Error> {
    let catalog = Catalog::new(dataset.cards);
    let board = QuizBoard::new(dataset.quizzes, LogSink);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Panelik",
        native_options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(PanelState::new(catalog, board)))
        }),
    )?;

    Ok(())
}
