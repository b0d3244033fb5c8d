// src/bin/dashboard.rs

use eframe::egui;
use egui::{Align2, Color32, FontId, RichText, Sense, Stroke, Vec2};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoint, Text};
use std::path::PathBuf;
use stock_dashboard::{
    COLUMNS, RowDraft, Statistic, StockTable, StoreError, TableSource, config, load_table,
};

/// Bar and pie colors, cycled when the table has more entries than colors.
const PALETTE: [Color32; 8] = [
    Color32::from_rgb(0x5d, 0xa5, 0xda),
    Color32::from_rgb(0xfa, 0xa4, 0x3a),
    Color32::from_rgb(0x60, 0xbd, 0x68),
    Color32::from_rgb(0xf1, 0x58, 0x54),
    Color32::from_rgb(0xb2, 0x76, 0xb2),
    Color32::from_rgb(0xde, 0xcf, 0x3f),
    Color32::from_rgb(0x4d, 0x4d, 0x4d),
    Color32::from_rgb(0xb3, 0x9c, 0x6b),
];

#[derive(Debug, Clone, Copy, PartialEq)]
enum NoticeKind {
    Success,
    Error,
}

/// The outcome of the last action, shown as a centered window with an OK
/// button until the user dismisses it.
struct Notice {
    kind: NoticeKind,
    title: String,
    text: String,
}

impl Notice {
    fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Success".to_string(),
            text: text.into(),
        }
    }

    /// A success notice with its own window title (the statistics report).
    fn report(title: String, text: String) -> Self {
        Self {
            kind: NoticeKind::Success,
            title,
            text,
        }
    }

    fn error(err: &StoreError) -> Self {
        let title = match err {
            StoreError::InvalidInput(_) => "Input Error",
            StoreError::NotFound(_) => "Not Found",
            StoreError::LoadFailure(_) => "Load Error",
        };
        Self {
            kind: NoticeKind::Error,
            title: title.to_string(),
            text: err.to_string(),
        }
    }
}

/// Data the two charts draw from. It is rebuilt after every successful
/// mutation and on the refresh button, never derived mid-render, so the
/// charts always show a consistent snapshot of the table.
#[derive(Default)]
struct ChartData {
    /// (symbol, price) per row, table order. Feeds the bar chart.
    bars: Vec<(String, f64)>,
    /// (group, row count), first-appearance order. Feeds the pie chart.
    slices: Vec<(String, usize)>,
}

/// The whole application state: the table plus every widget's backing field.
struct DashboardApp {
    table: StockTable,
    charts: ChartData,

    // --- Form state ---
    search_symbol: String,
    delete_symbol: String,
    draft: RowDraft,
    statistic: Statistic,

    // --- Last action outcome ---
    notice: Option<Notice>,
}

impl DashboardApp {
    fn new(table: StockTable) -> Self {
        let mut app = Self {
            table,
            charts: ChartData::default(),
            search_symbol: String::new(),
            delete_symbol: String::new(),
            draft: RowDraft::default(),
            statistic: Statistic::Mean,
            notice: None,
        };
        // Initial charts, like the initial grid, come from the loaded table.
        app.refresh_charts();
        app
    }

    fn refresh_charts(&mut self) {
        self.charts.bars = self.table.symbol_prices();
        self.charts.slices = self.table.group_counts();
    }

    // === One handler per button. Each runs the store operation, rebuilds
    // === the chart snapshot on success, and raises the matching notice.

    fn run_search(&mut self) {
        let symbol = self.search_symbol.trim().to_string();
        match self.table.halve_price(&symbol) {
            Ok(_) => {
                self.refresh_charts();
                self.notice = Some(Notice::success(format!(
                    "Price for {symbol} reduced by half."
                )));
            }
            Err(err) => {
                tracing::warn!(%err, "search rejected");
                self.notice = Some(Notice::error(&err));
            }
        }
    }

    fn run_add(&mut self) {
        match self.table.add(&self.draft) {
            Ok(_) => {
                self.draft.clear();
                self.refresh_charts();
                self.notice = Some(Notice::success("New data added successfully."));
            }
            Err(err) => {
                tracing::warn!(%err, "add rejected");
                self.notice = Some(Notice::error(&err));
            }
        }
    }

    fn run_delete(&mut self) {
        let symbol = self.delete_symbol.trim().to_string();
        match self.table.delete(&symbol) {
            Ok(_) => {
                self.refresh_charts();
                self.notice = Some(Notice::success(format!(
                    "Rows with Symbol {symbol} deleted."
                )));
            }
            Err(err) => {
                tracing::warn!(%err, "delete rejected");
                self.notice = Some(Notice::error(&err));
            }
        }
    }

    fn run_sort(&mut self) {
        self.table.sort_by_price();
        self.refresh_charts();
        self.notice = Some(Notice::success("Data sorted by Price (ascending)."));
    }

    fn run_stats(&mut self) {
        let report = self.table.aggregate(self.statistic);
        let label = self.statistic.label();
        let title = format!("Group {}{}", label[..1].to_uppercase(), &label[1..]);
        let text = format!("Results of {label} by Group:\n\n{report}");
        self.notice = Some(Notice::report(title, text));
    }

    // === Rendering helpers ===

    fn draw_table(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading("Stock Table");
        });
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("stock_grid")
                .striped(true)
                .min_col_width(90.0)
                .show(ui, |ui| {
                    // Header row first; it renders even when there are no rows.
                    for column in COLUMNS {
                        ui.label(RichText::new(column).underline().strong());
                    }
                    ui.end_row();

                    for row in self.table.rows() {
                        ui.label(&row.symbol);
                        ui.label(format!("{:.2}", row.price));
                        ui.label(format!("{:.2}", row.pe_ratio));
                        ui.label(&row.group);
                        ui.label(format!("{:.4}", row.usd_price));
                        ui.end_row();
                    }
                });

            if self.table.is_empty() {
                ui.label(RichText::new("No rows loaded.").italics().weak());
            }
        });
    }

    fn draw_bar_chart(&self, ui: &mut egui::Ui) {
        let bars: Vec<Bar> = self
            .charts
            .bars
            .iter()
            .enumerate()
            .map(|(i, (symbol, price))| {
                Bar::new(i as f64, *price)
                    .width(0.6)
                    .name(symbol)
                    .fill(PALETTE[i % PALETTE.len()])
            })
            .collect();

        Plot::new("price_by_symbol")
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .name("Price by Symbol")
                        .color(Color32::LIGHT_BLUE),
                );
                // Caption each bar with its symbol, floating just above the top.
                for (i, (symbol, price)) in self.charts.bars.iter().enumerate() {
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(i as f64, *price),
                            RichText::new(symbol.as_str()).small(),
                        )
                        .anchor(Align2::CENTER_BOTTOM),
                    );
                }
            });
    }

    fn draw_pie_chart(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Distribution by Group").strong());
        });

        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
        let rect = response.rect;
        let center = rect.center();
        let radius = rect.width().min(rect.height()) * 0.42;

        let total: usize = self.charts.slices.iter().map(|(_, n)| n).sum();
        if total == 0 {
            painter.text(
                center,
                Align2::CENTER_CENTER,
                "no data",
                FontId::proportional(14.0),
                ui.visuals().weak_text_color(),
            );
            return;
        }

        // egui_plot has no pie primitive, so each slice is a fan of small
        // triangles; every emitted polygon stays convex that way.
        let mut start_angle = -std::f64::consts::FRAC_PI_2;
        for (i, (group, count)) in self.charts.slices.iter().enumerate() {
            let fraction = *count as f64 / total as f64;
            let end_angle = start_angle + fraction * std::f64::consts::TAU;
            let color = PALETTE[i % PALETTE.len()];

            let arc_point = |angle: f64| {
                egui::pos2(
                    center.x + radius * angle.cos() as f32,
                    center.y + radius * angle.sin() as f32,
                )
            };

            let steps = ((fraction * 64.0).ceil() as usize).max(2);
            let mut previous = arc_point(start_angle);
            for step in 1..=steps {
                let angle =
                    start_angle + (end_angle - start_angle) * step as f64 / steps as f64;
                let next = arc_point(angle);
                painter.add(egui::Shape::convex_polygon(
                    vec![center, previous, next],
                    color,
                    Stroke::NONE,
                ));
                previous = next;
            }

            // Label at the middle of the slice: "Group share%".
            let mid_angle = (start_angle + end_angle) / 2.0;
            let label_pos = egui::pos2(
                center.x + radius * 0.62 * mid_angle.cos() as f32,
                center.y + radius * 0.62 * mid_angle.sin() as f32,
            );
            painter.text(
                label_pos,
                Align2::CENTER_CENTER,
                format!("{group} {:.1}%", fraction * 100.0),
                FontId::proportional(12.0),
                Color32::WHITE,
            );

            start_angle = end_angle;
        }
    }

    fn draw_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.notice else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(notice.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                let color = match notice.kind {
                    NoticeKind::Success => Color32::LIGHT_GREEN,
                    NoticeKind::Error => Color32::LIGHT_RED,
                };
                ui.label(RichText::new(&notice.text).monospace().color(color));
                ui.add_space(6.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.notice = None;
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // --- Action panel: one row of widgets per user command ---
        egui::TopBottomPanel::top("action_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.heading(config::WINDOW_TITLE);
            });
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Symbol:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.search_symbol)
                        .desired_width(70.0)
                        .hint_text("AAPL"),
                );
                if ui.button("🔍 Search & Halve Price").clicked() {
                    self.run_search();
                }
                ui.separator();
                ui.label("Symbol:");
                ui.add(egui::TextEdit::singleline(&mut self.delete_symbol).desired_width(70.0));
                if ui.button("🗑 Delete Rows").clicked() {
                    self.run_delete();
                }
                ui.separator();
                if ui.button("⬆ Sort by Price").clicked() {
                    self.run_sort();
                }
            });

            ui.horizontal(|ui| {
                ui.label("New row:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.draft.symbol)
                        .desired_width(70.0)
                        .hint_text("Symbol"),
                );
                ui.add(
                    egui::TextEdit::singleline(&mut self.draft.price)
                        .desired_width(70.0)
                        .hint_text("Price"),
                );
                ui.add(
                    egui::TextEdit::singleline(&mut self.draft.pe_ratio)
                        .desired_width(70.0)
                        .hint_text("PE"),
                );
                ui.add(
                    egui::TextEdit::singleline(&mut self.draft.group)
                        .desired_width(70.0)
                        .hint_text("Group"),
                );
                if ui.button("➕ Add Row").clicked() {
                    self.run_add();
                }
            });

            ui.horizontal(|ui| {
                ui.label("Statistic:");
                egui::ComboBox::from_id_source("statistic_combo")
                    .selected_text(self.statistic.label())
                    .show_ui(ui, |ui| {
                        for statistic in Statistic::ALL {
                            ui.selectable_value(&mut self.statistic, statistic, statistic.label());
                        }
                    });
                if ui.button("📊 Group Statistics").clicked() {
                    self.run_stats();
                }
                ui.separator();
                if ui.button("🔄 Refresh Charts").clicked() {
                    self.refresh_charts();
                }
            });
            ui.add_space(4.0);
        });

        // --- Chart panel: bar chart left, pie chart right ---
        egui::TopBottomPanel::bottom("chart_panel")
            .resizable(true)
            .min_height(220.0)
            .show(ctx, |ui| {
                ui.columns(2, |columns| {
                    self.draw_bar_chart(&mut columns[0]);
                    self.draw_pie_chart(&mut columns[1]);
                });
            });

        // --- The grid itself ---
        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_table(ui);
        });

        self.draw_notice(ctx);
    }
}

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    // An optional CSV path (header row: Symbol,Price,PE,Group) as the first
    // argument; otherwise the built-in sample universe.
    let source = match std::env::args().nth(1) {
        Some(path) => TableSource::CsvFile(PathBuf::from(path)),
        None => TableSource::Seed,
    };
    let table = load_table(&source);
    tracing::info!(rows = table.len(), "dashboard starting");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config::WINDOW_WIDTH, config::WINDOW_HEIGHT])
            .with_title(config::WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        config::WINDOW_TITLE,
        native_options,
        Box::new(|_cc| Box::new(DashboardApp::new(table))),
    )
}
