// src/export/xlsx.rs

use crate::chart::layout::style;
use crate::chart::{ChartCell, ChartLayout, Shift, VerticalAlign};
use crate::errors::AppResult;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use unicode_width::UnicodeWidthStr;

const DAY_COL_WIDTH: f64 = 12.0;
const MIN_ROOM_COL_WIDTH: f64 = 16.0;
// Points per rendered line of 9 pt entry text.
const LINE_HEIGHT: f64 = 12.0;

fn base_format() -> Format {
    Format::new()
        .set_font_name(style::FONT)
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_text_wrap()
}

fn shift_font(shift: Option<Shift>, size: f32) -> Format {
    let fmt = Format::new()
        .set_font_name(style::FONT)
        .set_bold()
        .set_font_size(size);
    match shift {
        Some(s) => fmt.set_font_color(Color::RGB(s.rgb())),
        None => fmt,
    }
}

fn cell_format(valign: VerticalAlign) -> Format {
    let v = match valign {
        VerticalAlign::Top => FormatAlign::Top,
        VerticalAlign::Bottom => FormatAlign::Bottom,
    };
    base_format().set_font_size(style::ENTRY_PT).set_align(v)
}

/// Write one chart cell as a rich string, one colored segment per run of lines.
fn write_chart_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &ChartCell,
) -> AppResult<()> {
    let fmt = cell_format(cell.valign);

    if cell.is_empty() {
        worksheet.write_blank(row, col, &fmt)?;
        return Ok(());
    }

    let runs = cell.runs();
    let fonts: Vec<Format> = runs
        .iter()
        .map(|(shift, _)| shift_font(*shift, style::ENTRY_PT))
        .collect();

    // Each segment carries the line break that precedes it, except the first.
    let texts: Vec<String> = runs
        .iter()
        .enumerate()
        .map(|(i, (_, lines))| {
            let joined = lines.join("\n");
            if i == 0 { joined } else { format!("\n{joined}") }
        })
        .collect();

    let segments: Vec<(&Format, &str)> = fonts
        .iter()
        .zip(texts.iter())
        .filter(|(_, t)| !t.is_empty())
        .map(|(f, t)| (f, t.as_str()))
        .collect();

    worksheet.write_rich_string_with_format(row, col, &segments, &fmt)?;
    Ok(())
}

/// Render the chart as a single landscape worksheet, in memory.
pub(crate) fn render_xlsx(layout: &ChartLayout) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Room chart")?;
    worksheet.set_landscape();
    worksheet.set_paper_size(1); // US Letter
    worksheet.set_margins(0.5, 0.5, 0.5, 0.5, 0.3, 0.3);
    worksheet.set_print_fit_to_pages(1, 1);

    let last_col = layout.room_headers.len() as u16;

    // ---------------------------
    // Title
    // ---------------------------
    let title_fmt = Format::new()
        .set_font_name(style::FONT)
        .set_font_size(style::TITLE_PT)
        .set_bold()
        .set_align(FormatAlign::Center);
    if last_col == 0 {
        worksheet.write_with_format(0, 0, &layout.title, &title_fmt)?;
    } else {
        worksheet.merge_range(0, 0, 0, last_col, &layout.title, &title_fmt)?;
    }
    worksheet.set_row_height(0, 28)?;

    // ---------------------------
    // Header: legend + rooms
    // ---------------------------
    let legend_fonts: Vec<Format> = layout
        .legend
        .iter()
        .map(|s| shift_font(Some(*s), style::LEGEND_PT))
        .collect();
    let legend_texts: Vec<String> = layout
        .legend
        .iter()
        .enumerate()
        .map(|(i, s)| {
            if i == 0 {
                s.legend().to_string()
            } else {
                format!("\n{}", s.legend())
            }
        })
        .collect();
    let legend: Vec<(&Format, &str)> = legend_fonts
        .iter()
        .zip(legend_texts.iter().map(String::as_str))
        .collect();
    worksheet.write_rich_string_with_format(1, 0, &legend, &base_format())?;

    let room_fmt = base_format().set_font_size(style::ROOM_PT);
    let mut room_widths = Vec::with_capacity(layout.room_headers.len());
    for (i, header) in layout.room_headers.iter().enumerate() {
        worksheet.write_with_format(1, i as u16 + 1, header, &room_fmt)?;
        room_widths.push(UnicodeWidthStr::width(header.as_str()) as f64 * 1.8);
    }
    worksheet.set_row_height(1, 34)?;

    // ---------------------------
    // Day rows
    // ---------------------------
    let day_fmt = base_format()
        .set_font_size(style::DAY_PT)
        .set_align(FormatAlign::Top);

    for (r, row) in layout.rows.iter().enumerate() {
        let xl_row = r as u32 + 2;
        worksheet.write_with_format(xl_row, 0, &row.day_label, &day_fmt)?;

        let mut max_lines = 2;
        for (c, cell) in row.cells.iter().enumerate() {
            write_chart_cell(worksheet, xl_row, c as u16 + 1, cell)?;
            max_lines = max_lines.max(cell.lines.len());

            let widest = cell
                .lines
                .iter()
                .map(|l| UnicodeWidthStr::width(l.text.as_str()))
                .max()
                .unwrap_or(0) as f64;
            if let Some(w) = room_widths.get_mut(c) {
                *w = w.max(widest);
            }
        }

        worksheet.set_row_height(xl_row, max_lines as f64 * LINE_HEIGHT + 4.0)?;
    }

    // ---------------------------
    // Column widths
    // ---------------------------
    worksheet.set_column_width(0, DAY_COL_WIDTH)?;
    for (c, w) in room_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16 + 1, w.max(MIN_ROOM_COL_WIDTH) + 2.0)?;
    }

    Ok(workbook.save_to_buffer()?)
}
