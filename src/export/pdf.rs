use crate::chart::layout::style;
use crate::chart::{ChartCell, ChartLayout, Shift, VerticalAlign};
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

/// Average glyph width of Times Bold, as a fraction of the font size.
const GLYPH_RATIO: f32 = 0.5;
const LEADING: f32 = 1.2;
const CELL_PAD: f32 = 3.0;
const MIN_SCALE: f32 = 0.4;

/// Single-page landscape chart writer.
pub struct ChartPdf {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_id: Ref,
    content_id: Ref,
    font_id: Ref,

    page_w: f32,
    page_h: f32,
    margin: f32,
    table_w: f32,
    day_col_w: f32,
}

impl Default for ChartPdf {
    fn default() -> Self {
        Self::new()
    }
}

/// Lines of one cell after wrapping, with their color.
type WrappedLines = Vec<(String, Option<Shift>)>;

impl ChartPdf {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let page_id = Ref::new(4);
        let content_id = Ref::new(5);

        pdf.type1_font(font_id)
            .base_font(Name(b"Times-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_id,
            content_id,
            font_id,

            // US Letter, landscape
            page_w: 792.0,
            page_h: 612.0,
            margin: 36.0,
            table_w: 720.0,
            day_col_w: 86.4,
        }
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&latin1(text)));
        content.end_text();
    }

    /// Text centered horizontally inside `[x, x + w]`.
    fn draw_centered(&self, content: &mut Content, x: f32, w: f32, y: f32, size: f32, text: &str) {
        let tw = text_width(text, size);
        self.draw_text(content, x + ((w - tw) / 2.0).max(0.0), y, size, text);
    }

    fn draw_cell_border(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_line_width(0.5);
        content.set_stroke_rgb(0.0, 0.0, 0.0);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn set_color(content: &mut Content, rgb: Option<u32>) {
        let (r, g, b) = match rgb {
            Some(c) => (
                ((c >> 16) & 0xFF) as f32 / 255.0,
                ((c >> 8) & 0xFF) as f32 / 255.0,
                (c & 0xFF) as f32 / 255.0,
            ),
            None => (0.0, 0.0, 0.0),
        };
        content.set_fill_rgb(r, g, b);
    }

    fn wrap_cell(cell: &ChartCell, col_w: f32, size: f32) -> WrappedLines {
        let max_chars = (((col_w - 2.0 * CELL_PAD) / (size * GLYPH_RATIO)) as usize).max(4);
        let mut out = Vec::new();
        for line in &cell.lines {
            if line.text.is_empty() {
                out.push((String::new(), line.shift));
                continue;
            }
            for piece in textwrap::wrap(&line.text, max_chars) {
                out.push((piece.into_owned(), line.shift));
            }
        }
        out
    }

    /// Draw the whole chart on one page.
    pub fn write_chart(&mut self, layout: &ChartLayout) {
        let rooms = layout.room_headers.len().max(1) as f32;
        let room_w = (self.table_w - self.day_col_w) / rooms;
        let x0 = (self.page_w - self.table_w) / 2.0;

        let header_h = 2.0 * style::LEGEND_PT * LEADING + 2.0 * CELL_PAD;
        let table_top = self.page_h - self.margin - style::TITLE_PT * LEADING - 6.0;
        let available = table_top - header_h - self.margin;

        // Shrink entry text until every day row fits on the page.
        let mut scale = 1.0_f32;
        let (rows, heights) = loop {
            let size = style::ENTRY_PT * scale;
            let rows: Vec<Vec<WrappedLines>> = layout
                .rows
                .iter()
                .map(|r| {
                    r.cells
                        .iter()
                        .map(|c| Self::wrap_cell(c, room_w, size))
                        .collect()
                })
                .collect();
            let heights: Vec<f32> = rows
                .iter()
                .map(|cells| {
                    let lines = cells.iter().map(Vec::len).max().unwrap_or(0) as f32;
                    (lines * size * LEADING + 2.0 * CELL_PAD)
                        .max(style::DAY_PT * LEADING + 2.0 * CELL_PAD)
                })
                .collect();
            if heights.iter().sum::<f32>() <= available || scale <= MIN_SCALE {
                break (rows, heights);
            }
            scale = (scale - 0.05).max(MIN_SCALE);
        };
        let entry_size = style::ENTRY_PT * scale;

        let mut content = Content::new();

        // Title
        Self::set_color(&mut content, None);
        self.draw_centered(
            &mut content,
            0.0,
            self.page_w,
            self.page_h - self.margin - style::TITLE_PT,
            style::TITLE_PT,
            &layout.title,
        );

        // Header row
        let mut y = table_top - header_h;
        self.draw_cell_border(&mut content, x0, y, self.day_col_w, header_h);
        for (i, shift) in layout.legend.iter().enumerate() {
            Self::set_color(&mut content, Some(shift.rgb()));
            let line_y = y + header_h - CELL_PAD - (i as f32 + 1.0) * style::LEGEND_PT * LEADING
                + 2.0;
            self.draw_centered(
                &mut content,
                x0,
                self.day_col_w,
                line_y,
                style::LEGEND_PT * 0.8,
                shift.legend(),
            );
        }
        Self::set_color(&mut content, None);
        for (c, header) in layout.room_headers.iter().enumerate() {
            let x = x0 + self.day_col_w + c as f32 * room_w;
            self.draw_cell_border(&mut content, x, y, room_w, header_h);
            self.draw_centered(
                &mut content,
                x,
                room_w,
                y + (header_h - style::ROOM_PT) / 2.0 + 3.0,
                style::ROOM_PT,
                header,
            );
        }

        // Day rows
        for ((row, cells), h) in layout.rows.iter().zip(rows.iter()).zip(heights.iter()) {
            y -= h;

            Self::set_color(&mut content, None);
            self.draw_cell_border(&mut content, x0, y, self.day_col_w, *h);
            self.draw_centered(
                &mut content,
                x0,
                self.day_col_w,
                y + h - CELL_PAD - style::DAY_PT,
                style::DAY_PT,
                &row.day_label,
            );

            for (c, (lines, cell)) in cells.iter().zip(row.cells.iter()).enumerate() {
                let x = x0 + self.day_col_w + c as f32 * room_w;
                self.draw_cell_border(&mut content, x, y, room_w, *h);

                let block_h = lines.len() as f32 * entry_size * LEADING;
                let mut line_y = match cell.valign {
                    VerticalAlign::Top => y + h - CELL_PAD - entry_size,
                    VerticalAlign::Bottom => y + CELL_PAD + block_h - entry_size,
                };

                for (text, shift) in lines {
                    if !text.is_empty() {
                        Self::set_color(&mut content, shift.map(|s| s.rgb()));
                        self.draw_centered(&mut content, x, room_w, line_y, entry_size, text);
                    }
                    line_y -= entry_size * LEADING;
                }
            }
        }

        self.pdf.stream(self.content_id, &content.finish());
    }

    /// Close the document and return the PDF bytes.
    pub fn finish(mut self) -> Vec<u8> {
        let mut page = self.pdf.page(self.page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(self.content_id);
        page.resources().fonts().pair(Name(b"F1"), self.font_id);
        drop(page);

        self.pdf
            .pages(self.pages_id)
            .kids([self.page_id])
            .count(1);
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        self.pdf.finish()
    }
}

fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * GLYPH_RATIO
}

/// WinAnsi bytes for the standard fonts; characters outside Latin-1 become '?'.
fn latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (c as u32) < 256 { c as u32 as u8 } else { b'?' })
        .collect()
}

/// Render the chart as a one-page PDF, in memory.
pub(crate) fn render_pdf(layout: &ChartLayout) -> Vec<u8> {
    let mut pdf = ChartPdf::new();
    pdf.write_chart(layout);
    pdf.finish()
}
