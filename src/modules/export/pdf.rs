use std::ops::Range;

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb,
};

use super::report::{status_label, CategoryReport, ReportRow};
use super::ExportError;

// A4 landscape, millimetres
const PAGE_WIDTH: f32 = 297.0;
const PAGE_HEIGHT: f32 = 210.0;
const MARGIN: f32 = 15.0;

const ROW_HEIGHT: f32 = 7.0;
const FIRST_PAGE_TABLE_TOP: f32 = 160.0;
const NEXT_PAGE_TABLE_TOP: f32 = 190.0;
const TABLE_BOTTOM: f32 = 28.0;

/// Rows that fit under the title block on page one
pub const FIRST_PAGE_ROWS: usize = ((FIRST_PAGE_TABLE_TOP - TABLE_BOTTOM) / ROW_HEIGHT) as usize - 1;
/// Rows that fit on continuation pages
pub const NEXT_PAGE_ROWS: usize = ((NEXT_PAGE_TABLE_TOP - TABLE_BOTTOM) / ROW_HEIGHT) as usize - 1;

struct Column {
    title: &'static str,
    x: f32,
    max_chars: usize,
}

// Widths follow 8/25/42/12/13 percent of the printable width
const COLUMNS: [Column; 5] = [
    Column { title: "ID", x: MARGIN, max_chars: 10 },
    Column { title: "Nombre", x: 36.0, max_chars: 40 },
    Column { title: "Descripción", x: 103.0, max_chars: 68 },
    Column { title: "Estado", x: 215.0, max_chars: 12 },
    Column { title: "Fecha Creación", x: 247.0, max_chars: 16 },
];

const BRAND_BLUE: (f32, f32, f32) = (0.145, 0.388, 0.922);
const TEXT_GREY: (f32, f32, f32) = (0.2, 0.2, 0.2);
const MUTED_GREY: (f32, f32, f32) = (0.42, 0.45, 0.5);
const RULE_GREY: (f32, f32, f32) = (0.898, 0.906, 0.922);

/// Split `total` rows into per-page index ranges. An empty table still gets one page.
pub fn paginate(total: usize) -> Vec<Range<usize>> {
    let mut pages = Vec::new();
    let mut start = 0;
    let mut capacity = FIRST_PAGE_ROWS;

    loop {
        let end = (start + capacity).min(total);
        pages.push(start..end);
        if end >= total {
            break;
        }
        start = end;
        capacity = NEXT_PAGE_ROWS;
    }

    pages
}

/// Shorten `text` to at most `max_chars` characters, marking the cut with "..."
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

// Characters WinAnsiEncoding places in 0x80..=0x9F
const WINANSI_EXTRAS: [char; 27] = [
    '\u{20AC}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{017D}', '\u{2018}',
    '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}', '\u{02DC}',
    '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{017E}', '\u{0178}',
];

/// Replace characters the built-in Helvetica (WinAnsi) cannot show with `?`
pub fn winansi(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            ' '..='~' | '\u{A0}'..='\u{FF}' => c,
            c if WINANSI_EXTRAS.contains(&c) => c,
            _ => '?',
        })
        .collect()
}

fn rgb((r, g, b): (f32, f32, f32)) -> Color {
    Color::Rgb(Rgb::new(r, g, b, None))
}

fn rule(layer: &PdfLayerReference, y: f32, color: (f32, f32, f32), thickness: f32) {
    layer.set_outline_color(rgb(color));
    layer.set_outline_thickness(thickness);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(MARGIN), Mm(y)), false),
            (Point::new(Mm(PAGE_WIDTH - MARGIN), Mm(y)), false),
        ],
        is_closed: false,
    });
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Render the report as an A4 landscape PDF
pub fn write_pdf(report: &CategoryReport) -> Result<Vec<u8>, ExportError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "Reporte de Categorías",
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Contenido",
    );

    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ExportError::Pdf(format!("{:?}", e)))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ExportError::Pdf(format!("{:?}", e)))?,
    };

    let pages = paginate(report.rows.len());
    let page_count = pages.len();

    for (page_number, rows) in pages.into_iter().enumerate() {
        let layer = if page_number == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Contenido");
            doc.get_page(page).get_layer(layer)
        };

        let table_top = if page_number == 0 {
            draw_title_block(&layer, &fonts, report);
            FIRST_PAGE_TABLE_TOP
        } else {
            NEXT_PAGE_TABLE_TOP
        };

        draw_table(&layer, &fonts, table_top, &report.rows[rows]);

        if report.rows.is_empty() {
            layer.set_fill_color(rgb(MUTED_GREY));
            layer.use_text(
                "No hay categorías registradas",
                10.0,
                Mm(120.0),
                Mm(table_top - 2.0 * ROW_HEIGHT),
                &fonts.regular,
            );
        }

        draw_footer(&layer, &fonts, report, page_number + 1, page_count);
    }

    doc.save_to_bytes()
        .map_err(|e| ExportError::Pdf(format!("{:?}", e)))
}

fn draw_title_block(layer: &PdfLayerReference, fonts: &Fonts, report: &CategoryReport) {
    layer.set_fill_color(rgb(BRAND_BLUE));
    layer.use_text("Reporte de Categorías", 20.0, Mm(MARGIN), Mm(190.0), &fonts.bold);

    layer.set_fill_color(rgb(MUTED_GREY));
    layer.use_text(
        format!(
            "Generado el {}",
            report.generated_at.format("%d/%m/%Y %H:%M:%S")
        ),
        9.0,
        Mm(MARGIN),
        Mm(183.0),
        &fonts.regular,
    );
    rule(layer, 179.0, BRAND_BLUE, 1.5);

    let stats = [
        ("Total Categorías", report.total()),
        ("Activas", report.active_count()),
        ("Inactivas", report.inactive_count()),
    ];
    for (i, (label, value)) in stats.iter().enumerate() {
        let x = MARGIN + 20.0 + i as f32 * 90.0;
        layer.set_fill_color(rgb(BRAND_BLUE));
        layer.use_text(value.to_string(), 18.0, Mm(x), Mm(170.0), &fonts.bold);
        layer.set_fill_color(rgb(MUTED_GREY));
        layer.use_text(label.to_uppercase(), 8.0, Mm(x), Mm(165.0), &fonts.regular);
    }
}

fn draw_table(layer: &PdfLayerReference, fonts: &Fonts, top: f32, rows: &[ReportRow]) {
    layer.set_fill_color(rgb(BRAND_BLUE));
    for column in &COLUMNS {
        layer.use_text(
            column.title.to_uppercase(),
            9.0,
            Mm(column.x),
            Mm(top - 5.0),
            &fonts.bold,
        );
    }
    rule(layer, top - ROW_HEIGHT, BRAND_BLUE, 1.0);

    layer.set_fill_color(rgb(TEXT_GREY));
    for (i, row) in rows.iter().enumerate() {
        let baseline = top - ROW_HEIGHT * (i as f32 + 2.0) + 2.0;
        let cells = [
            row.id.to_string(),
            row.name.clone(),
            row.description.clone().unwrap_or_else(|| "-".to_string()),
            status_label(row.active).to_string(),
            row.created_at.format("%d/%m/%Y").to_string(),
        ];

        for (column, text) in COLUMNS.iter().zip(cells.iter()) {
            let font = if column.title == "Nombre" {
                &fonts.bold
            } else {
                &fonts.regular
            };
            layer.use_text(
                truncate(&winansi(text), column.max_chars),
                9.0,
                Mm(column.x),
                Mm(baseline),
                font,
            );
        }
        rule(layer, baseline - 2.0, RULE_GREY, 0.5);
    }
}

fn draw_footer(
    layer: &PdfLayerReference,
    fonts: &Fonts,
    report: &CategoryReport,
    page: usize,
    pages: usize,
) {
    rule(layer, 20.0, RULE_GREY, 0.5);
    layer.set_fill_color(rgb(MUTED_GREY));
    layer.use_text(
        format!(
            "Sistema de Gestión de Categorías - {}",
            winansi(&report.app_name)
        ),
        8.0,
        Mm(MARGIN),
        Mm(15.0),
        &fonts.regular,
    );
    layer.use_text(
        "Este documento fue generado automáticamente",
        8.0,
        Mm(MARGIN),
        Mm(11.0),
        &fonts.regular,
    );
    layer.use_text(
        format!("Página {} de {}", page, pages),
        8.0,
        Mm(PAGE_WIDTH - MARGIN - 25.0),
        Mm(15.0),
        &fonts.regular,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn report(n: i64) -> CategoryReport {
        let rows = (1..=n)
            .map(|id| ReportRow {
                id,
                name: format!("Categoria {}", id),
                description: None,
                active: true,
                created_at: Utc::now(),
            })
            .collect();
        CategoryReport::new(rows, "Test")
    }

    #[test]
    fn test_paginate_empty_has_one_page() {
        assert_eq!(paginate(0), vec![0..0]);
    }

    #[test]
    fn test_paginate_covers_every_row_once() {
        for total in [1, FIRST_PAGE_ROWS, FIRST_PAGE_ROWS + 1, 100] {
            let pages = paginate(total);
            let covered: usize = pages.iter().map(|r| r.len()).sum();
            assert_eq!(covered, total);
            assert_eq!(pages.first().map(|r| r.start), Some(0));
            assert_eq!(pages.last().map(|r| r.end), Some(total));
            for pair in pages.windows(2) {
                assert_eq!(pair[0].end, pair[1].start);
            }
        }
    }

    #[test]
    fn test_paginate_page_capacities() {
        let pages = paginate(FIRST_PAGE_ROWS + NEXT_PAGE_ROWS + 1);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].len(), FIRST_PAGE_ROWS);
        assert_eq!(pages[1].len(), NEXT_PAGE_ROWS);
        assert_eq!(pages[2].len(), 1);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("corto", 10), "corto");
        assert_eq!(truncate("descripción larga", 10), "descrip...");
        assert_eq!(truncate("ñandúñandú", 10), "ñandúñandú");
    }

    #[test]
    fn test_winansi() {
        assert_eq!(winansi("Lácteos y Ñandú"), "Lácteos y Ñandú");
        assert_eq!(winansi("Caf\u{e9} \u{2014} \u{20AC}5"), "Caf\u{e9} \u{2014} \u{20AC}5");
        assert_eq!(winansi("東京 Łódź"), "?? ?ód?");
    }

    #[test]
    fn test_write_pdf_produces_document() {
        for n in [0, 3, 60] {
            let bytes = write_pdf(&report(n)).unwrap();
            assert!(bytes.starts_with(b"%PDF"));
        }
    }

    /// Text shown by `Tj`/`TJ` operators, one entry per operator, per page
    fn page_texts(bytes: &[u8]) -> Vec<Vec<String>> {
        fn shown(operand: &lopdf::Object) -> String {
            match operand {
                lopdf::Object::String(bytes, _) => bytes.iter().map(|&b| b as char).collect(),
                lopdf::Object::Array(items) => items.iter().map(shown).collect(),
                _ => String::new(),
            }
        }

        let doc = lopdf::Document::load_mem(bytes).unwrap();
        doc.get_pages()
            .values()
            .map(|&page_id| {
                let raw = doc.get_page_content(page_id).unwrap();
                lopdf::content::Content::decode(&raw)
                    .unwrap()
                    .operations
                    .iter()
                    .filter(|op| op.operator == "Tj" || op.operator == "TJ")
                    .map(|op| op.operands.iter().map(shown).collect())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_pdf_rows_match_report() {
        for n in [0, 1, FIRST_PAGE_ROWS + 1, 60] {
            let pages = page_texts(&write_pdf(&report(n as i64)).unwrap());
            let expected = paginate(n);
            assert_eq!(pages.len(), expected.len(), "pages for {} rows", n);

            for (texts, range) in pages.iter().zip(&expected) {
                let rows = texts.iter().filter(|t| t.as_str() == "Activo").count();
                assert_eq!(rows, range.len(), "rows on a page of {} rows", n);
            }

            let total: usize = pages
                .iter()
                .flatten()
                .filter(|t| t.as_str() == "Activo")
                .count();
            assert_eq!(total, n);
        }

        assert_eq!(page_texts(&write_pdf(&report(60)).unwrap()).len(), 3);

        let empty = page_texts(&write_pdf(&report(0)).unwrap());
        assert!(empty[0].iter().any(|t| t == "No hay categorías registradas"));
    }

    #[test]
    fn test_pdf_replaces_unsupported_characters() {
        let mut report = report(1);
        report.rows[0].name = "東京 Łódź".to_string();

        let pages = page_texts(&write_pdf(&report).unwrap());
        assert!(pages[0].iter().any(|t| t == "?? ?ód?"));
    }
}
