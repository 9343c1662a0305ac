//! Statement layout.
//!
//! [`StatementLayout`] turns one salary record into drawing instructions on
//! a single A4 page and asks the surface to persist it. Every position below
//! is fixed except the deduction table, net-pay box and footnote, which
//! follow the computed end of the table above them.

use chrono::{Local, NaiveDateTime};
use tracing::debug;

use crate::calculation::{
    compute_totals, deduction_lines, format_currency, format_generated_at, format_payment_date,
    labels, payment_lines, statement_file_name, translate,
};
use crate::config::StatementConfig;
use crate::error::StatementResult;
use crate::models::{SalaryRecord, StatementLine, StatementSummary};

use super::surface::{DocumentInfo, DrawingSurface, FontWeight, PaintStyle, Rect, Rgb, TextAlign};

/// Horizontal centre of the page.
const CENTER_X: f32 = 105.0;
/// Left margin shared by the captions, tables and net-pay box.
const MARGIN_X: f32 = 15.0;
/// x of the payment-date caption on the name line.
const PAYMENT_DATE_X: f32 = 120.0;
/// Top of the payment table.
const PAYMENT_TABLE_Y: f32 = 55.0;
/// Vertical gap between stacked blocks.
const BLOCK_GAP: f32 = 8.0;
/// Widths of the label and amount columns.
const COLUMN_WIDTHS: [f32; 2] = [90.0, 60.0];
/// Height of a table header row.
const HEADER_HEIGHT: f32 = 10.0;
/// Height of a table data row.
const ROW_HEIGHT: f32 = 8.0;
/// Horizontal padding inside a cell.
const CELL_PADDING: f32 = 2.0;
/// Size of the net-pay box.
const NET_PAY_BOX_WIDTH: f32 = 150.0;
const NET_PAY_BOX_HEIGHT: f32 = 15.0;

const HEADER_FILL: Rgb = Rgb::grey(220);
const NET_PAY_FILL: Rgb = Rgb::grey(240);

/// Lays out salary statements.
///
/// # Example
///
/// ```
/// use statement_engine::config::StatementConfig;
/// use statement_engine::models::{Employee, SalaryRecord};
/// use statement_engine::render::{RecordingSurface, StatementLayout};
/// use rust_decimal::Decimal;
///
/// let record = SalaryRecord {
///     year: 2024,
///     month: 3,
///     base_salary: Some(Decimal::from(300000)),
///     employee: Employee {
///         employee_id: 1,
///         name: "Jane Doe".to_string(),
///         employee_code: 101,
///     },
///     ..SalaryRecord::default()
/// };
///
/// let layout = StatementLayout::new(StatementConfig::default());
/// let mut surface = RecordingSurface::new();
/// let summary = layout.generate(&record, &mut surface).unwrap();
///
/// assert_eq!(summary.file_name, "2024-3-Jane_Doe.pdf");
/// assert_eq!(summary.totals.net_pay, Decimal::from(300000));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatementLayout {
    config: StatementConfig,
}

impl StatementLayout {
    /// Creates a layout using the given statement settings.
    pub fn new(config: StatementConfig) -> Self {
        Self { config }
    }

    /// Returns the statement settings.
    pub fn config(&self) -> &StatementConfig {
        &self.config
    }

    /// Renders `record` onto `surface`, stamped with the current local time,
    /// and saves it.
    pub fn generate<S: DrawingSurface + ?Sized>(
        &self,
        record: &SalaryRecord,
        surface: &mut S,
    ) -> StatementResult<StatementSummary> {
        self.generate_at(record, surface, Local::now().naive_local())
    }

    /// Renders `record` onto `surface` with an explicit generation time and
    /// saves it.
    pub fn generate_at<S: DrawingSurface + ?Sized>(
        &self,
        record: &SalaryRecord,
        surface: &mut S,
        generated_at: NaiveDateTime,
    ) -> StatementResult<StatementSummary> {
        let employee = &record.employee;
        let totals = compute_totals(record)?;

        surface.set_properties(DocumentInfo {
            title: format!(
                "Salary Statement {} {}/{}",
                employee.name, record.year, record.month
            ),
            subject: "Salary Statement".to_string(),
            author: self.config.author.clone(),
        });

        surface.set_font(FontWeight::Bold, 14.0)?;
        surface.draw_text(translate(labels::TITLE), CENTER_X, 15.0, TextAlign::Center);

        surface.set_font(FontWeight::Normal, 10.0)?;
        let period_line = format!(
            "{} {} {} {}",
            record.year,
            translate(labels::YEAR),
            record.month,
            translate(labels::MONTH_PERIOD)
        );
        surface.draw_text(&period_line, CENTER_X, 23.0, TextAlign::Center);

        surface.set_font(FontWeight::Normal, 9.0)?;
        surface.draw_text(
            &format!("{}: {}", translate(labels::NAME), employee.name),
            MARGIN_X,
            35.0,
            TextAlign::Left,
        );
        surface.draw_text(
            &format!("{}: {}", translate(labels::EMPLOYEE_ID), employee.employee_code),
            MARGIN_X,
            43.0,
            TextAlign::Left,
        );
        surface.draw_text(
            &format!(
                "{}: {}",
                translate(labels::PAYMENT_DATE),
                format_payment_date(record.payment_date())
            ),
            PAYMENT_DATE_X,
            35.0,
            TextAlign::Left,
        );

        let payments = self.table_rows(&payment_lines(record, &totals));
        let deductions = self.table_rows(&deduction_lines(record, &totals));

        let payment_table_end_y = draw_table(
            surface,
            MARGIN_X,
            PAYMENT_TABLE_Y,
            &[labels::PAYMENT, labels::AMOUNT],
            &payments,
            &COLUMN_WIDTHS,
        )?;

        let deduction_table_end_y = draw_table(
            surface,
            MARGIN_X,
            payment_table_end_y + BLOCK_GAP,
            &[labels::DEDUCTION, labels::AMOUNT],
            &deductions,
            &COLUMN_WIDTHS,
        )?;

        let net_pay_box = Rect::new(
            MARGIN_X,
            deduction_table_end_y + BLOCK_GAP,
            NET_PAY_BOX_WIDTH,
            NET_PAY_BOX_HEIGHT,
        );
        surface.set_fill_color(NET_PAY_FILL);
        surface.draw_rect(net_pay_box, PaintStyle::Fill);
        surface.set_draw_color(Rgb::BLACK);
        surface.draw_rect(net_pay_box, PaintStyle::Stroke);

        surface.set_font(FontWeight::Bold, 11.0)?;
        surface.draw_text(
            &format!(
                "{}: {}",
                translate(labels::NET_PAY),
                self.money(&format_currency(Some(totals.net_pay)))
            ),
            MARGIN_X + 3.0,
            deduction_table_end_y + 18.0,
            TextAlign::Left,
        );

        surface.set_font(FontWeight::Normal, 7.0)?;
        surface.draw_text(
            &format!(
                "{}: {}",
                translate(labels::GENERATED),
                format_generated_at(generated_at)
            ),
            MARGIN_X,
            deduction_table_end_y + 35.0,
            TextAlign::Left,
        );

        let file_name = statement_file_name(record);
        surface.save(&file_name)?;

        debug!(
            file_name = %file_name,
            employee = %employee.name,
            net_pay = %totals.net_pay,
            "Statement laid out"
        );

        Ok(StatementSummary {
            file_name,
            totals,
            payment_rows: payments.len(),
            deduction_rows: deductions.len(),
            payment_table_end_y,
            deduction_table_end_y,
            net_pay_box_end_y: net_pay_box.bottom(),
        })
    }

    fn money(&self, formatted: &str) -> String {
        format!("{}{}", self.config.currency_symbol, formatted)
    }

    fn table_rows(&self, lines: &[StatementLine]) -> Vec<Vec<String>> {
        lines
            .iter()
            .map(|line| {
                vec![
                    line.label.clone(),
                    self.money(&format_currency(Some(line.amount))),
                ]
            })
            .collect()
    }
}

/// Draws a bordered table with a shaded header row.
///
/// Header and cell texts pass through [`translate`]. The second column is
/// right-aligned, every other column left-aligned. Returns the y coordinate
/// just below the last row.
pub fn draw_table<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    x: f32,
    y: f32,
    headers: &[&str],
    rows: &[Vec<String>],
    column_widths: &[f32],
) -> StatementResult<f32> {
    let table_width: f32 = column_widths.iter().sum();
    let mut current_y = y;

    let header = Rect::new(x, current_y, table_width, HEADER_HEIGHT);
    surface.set_fill_color(HEADER_FILL);
    surface.draw_rect(header, PaintStyle::Fill);
    surface.set_draw_color(Rgb::BLACK);
    surface.draw_rect(header, PaintStyle::Stroke);

    surface.set_font(FontWeight::Bold, 8.0)?;
    let mut current_x = x;
    for (index, (text, width)) in headers.iter().zip(column_widths).enumerate() {
        surface.draw_text(
            translate(text),
            current_x + CELL_PADDING,
            current_y + 7.0,
            TextAlign::Left,
        );
        if index + 1 < headers.len() {
            surface.draw_line(
                current_x + width,
                current_y,
                current_x + width,
                current_y + HEADER_HEIGHT,
            );
        }
        current_x += width;
    }
    current_y += HEADER_HEIGHT;

    surface.set_font(FontWeight::Normal, 7.0)?;
    for row in rows {
        let row_rect = Rect::new(x, current_y, table_width, ROW_HEIGHT);
        surface.set_fill_color(Rgb::WHITE);
        surface.draw_rect(row_rect, PaintStyle::Fill);
        surface.draw_rect(row_rect, PaintStyle::Stroke);

        let mut current_x = x;
        for (index, (cell, width)) in row.iter().zip(column_widths).enumerate() {
            let (text_x, align) = if index == 1 {
                (current_x + width - CELL_PADDING, TextAlign::Right)
            } else {
                (current_x + CELL_PADDING, TextAlign::Left)
            };
            surface.draw_text(translate(cell), text_x, current_y + 6.0, align);

            if index + 1 < row.len() {
                surface.draw_line(
                    current_x + width,
                    current_y,
                    current_x + width,
                    current_y + ROW_HEIGHT,
                );
            }
            current_x += width;
        }
        current_y += ROW_HEIGHT;
    }

    Ok(current_y)
}
