// src/export/docx.rs

use crate::chart::layout::style;
use crate::chart::{CellLine, ChartCell, ChartLayout, Shift, VerticalAlign};
use crate::errors::AppResult;
use std::fmt::Write as _;
use std::io::{Cursor, Write};
use zip::ZipWriter;
use zip::write::FileOptions;

// Page geometry in twips (1 in = 1440).
const PAGE_W: u32 = 15_840;
const PAGE_H: u32 = 12_240;
const MARGIN: u32 = 720;
const TABLE_W: u32 = 14_400;
const DAY_COL_W: u32 = 1_728;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/></Relationships>"#;

/// Run properties of one styled text run.
struct RunStyle {
    size_pt: f32,
    bold: bool,
    rgb: Option<u32>,
}

impl RunStyle {
    fn to_xml(&self) -> String {
        let mut s = format!(
            r#"<w:rPr><w:rFonts w:ascii="{f}" w:hAnsi="{f}" w:cs="{f}"/>"#,
            f = style::FONT
        );
        if self.bold {
            s.push_str("<w:b/>");
        }
        if let Some(rgb) = self.rgb {
            let _ = write!(s, r#"<w:color w:val="{rgb:06X}"/>"#);
        }
        let half_points = (self.size_pt * 2.0).round() as u32;
        let _ = write!(s, r#"<w:sz w:val="{half_points}"/><w:szCs w:val="{half_points}"/></w:rPr>"#);
        s
    }
}

fn entry_style(shift: Option<Shift>) -> RunStyle {
    RunStyle {
        size_pt: style::ENTRY_PT,
        bold: true,
        rgb: shift.map(|s| s.rgb()),
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if (c as u32) < 0x20 && c != '\t' => {}
            c => out.push(c),
        }
    }
    out
}

/// A run, optionally preceded by a line break. Newlines inside `text`
/// become breaks as well.
fn run(text: &str, style: &RunStyle, line_break: bool) -> String {
    let body = text
        .split('\n')
        .map(escape_xml)
        .collect::<Vec<_>>()
        .join(r#"</w:t><w:br/><w:t xml:space="preserve">"#);
    format!(
        r#"<w:r>{}{}<w:t xml:space="preserve">{body}</w:t></w:r>"#,
        style.to_xml(),
        if line_break { "<w:br/>" } else { "" },
    )
}

fn paragraph(runs: &str) -> String {
    format!(r#"<w:p><w:pPr><w:spacing w:before="0" w:after="0"/><w:jc w:val="center"/></w:pPr>{runs}</w:p>"#)
}

fn table_cell(width: u32, valign: VerticalAlign, body: &str) -> String {
    let v = match valign {
        VerticalAlign::Top => "top",
        VerticalAlign::Bottom => "bottom",
    };
    format!(
        r#"<w:tc><w:tcPr><w:tcW w:w="{width}" w:type="dxa"/><w:vAlign w:val="{v}"/></w:tcPr>{}</w:tc>"#,
        paragraph(body)
    )
}

fn chart_cell_runs(cell: &ChartCell) -> String {
    cell.lines
        .iter()
        .enumerate()
        .map(|(i, CellLine { text, shift })| run(text, &entry_style(*shift), i > 0))
        .collect()
}

fn legend_runs(layout: &ChartLayout) -> String {
    layout
        .legend
        .iter()
        .enumerate()
        .map(|(i, shift)| {
            let st = RunStyle {
                size_pt: style::LEGEND_PT,
                bold: true,
                rgb: Some(shift.rgb()),
            };
            run(shift.legend(), &st, i > 0)
        })
        .collect()
}

fn document_xml(layout: &ChartLayout) -> String {
    let rooms = layout.room_headers.len().max(1) as u32;
    let room_w = (TABLE_W - DAY_COL_W) / rooms;

    let mut body = String::new();

    // Title
    let title_style = RunStyle {
        size_pt: style::TITLE_PT,
        bold: true,
        rgb: Some(0x000000),
    };
    body.push_str(&paragraph(&run(&layout.title, &title_style, false)));

    // Table properties and grid
    body.push_str(r#"<w:tbl><w:tblPr>"#);
    let _ = write!(body, r#"<w:tblW w:w="{TABLE_W}" w:type="dxa"/>"#);
    body.push_str(r#"<w:tblLayout w:type="fixed"/><w:tblBorders>"#);
    for edge in ["top", "left", "bottom", "right", "insideH", "insideV"] {
        let _ = write!(
            body,
            r#"<w:{edge} w:val="single" w:sz="4" w:space="0" w:color="000000"/>"#
        );
    }
    body.push_str("</w:tblBorders></w:tblPr><w:tblGrid>");
    let _ = write!(body, r#"<w:gridCol w:w="{DAY_COL_W}"/>"#);
    for _ in &layout.room_headers {
        let _ = write!(body, r#"<w:gridCol w:w="{room_w}"/>"#);
    }
    body.push_str("</w:tblGrid>");

    // Header row
    body.push_str("<w:tr>");
    body.push_str(&table_cell(DAY_COL_W, VerticalAlign::Top, &legend_runs(layout)));
    let room_style = RunStyle {
        size_pt: style::ROOM_PT,
        bold: true,
        rgb: None,
    };
    for header in &layout.room_headers {
        body.push_str(&table_cell(
            room_w,
            VerticalAlign::Top,
            &run(header, &room_style, false),
        ));
    }
    body.push_str("</w:tr>");

    // One row per weekday
    let day_style = RunStyle {
        size_pt: style::DAY_PT,
        bold: true,
        rgb: None,
    };
    for row in &layout.rows {
        body.push_str("<w:tr>");
        body.push_str(&table_cell(
            DAY_COL_W,
            VerticalAlign::Top,
            &run(&row.day_label, &day_style, false),
        ));
        for cell in &row.cells {
            body.push_str(&table_cell(room_w, cell.valign, &chart_cell_runs(cell)));
        }
        body.push_str("</w:tr>");
    }
    body.push_str("</w:tbl>");

    // Landscape letter section
    let _ = write!(
        body,
        r#"<w:sectPr><w:pgSz w:w="{PAGE_W}" w:h="{PAGE_H}" w:orient="landscape"/><w:pgMar w:top="{MARGIN}" w:right="{MARGIN}" w:bottom="{MARGIN}" w:left="{MARGIN}" w:header="{MARGIN}" w:footer="{MARGIN}" w:gutter="0"/></w:sectPr>"#
    );

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    )
}

fn core_xml(layout: &ChartLayout) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/"><dc:title>{}</dc:title><dc:creator>roomchart</dc:creator></cp:coreProperties>"#,
        escape_xml(&layout.title)
    )
}

/// Pack the chart as a WordprocessingML document, in memory.
pub(crate) fn render_docx(layout: &ChartLayout) -> AppResult<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    let parts = [
        ("[Content_Types].xml", CONTENT_TYPES.to_string()),
        ("_rels/.rels", ROOT_RELS.to_string()),
        ("docProps/core.xml", core_xml(layout)),
        ("word/document.xml", document_xml(layout)),
    ];

    for (name, content) in parts {
        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        zip.start_file(name, options)?;
        zip.write_all(content.as_bytes())?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}
