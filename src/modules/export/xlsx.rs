use rust_xlsxwriter::{Format, Workbook};

use super::report::{status_label, CategoryReport};
use super::ExportError;

const SHEET_NAME: &str = "Categorías";

const HEADERS: [&str; 5] = ["ID", "Nombre", "Descripción", "Estado", "Fecha Creación"];

/// Render the report as an `.xlsx` workbook: bold header row, one row per category
pub fn write_xlsx(report: &CategoryReport) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;

        for (col, title) in HEADERS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *title, &bold)?;
        }

        for (index, row) in report.rows.iter().enumerate() {
            let r = (index + 1) as u32;
            sheet.write_number(r, 0, row.id as f64)?;
            sheet.write_string(r, 1, row.name.as_str())?;
            if let Some(description) = row.description.as_deref() {
                sheet.write_string(r, 2, description)?;
            }
            sheet.write_string(r, 3, status_label(row.active))?;
            sheet.write_string(r, 4, row.created_at.format("%d/%m/%Y %H:%M").to_string())?;
        }

        sheet.autofit();
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::export::ReportRow;
    use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
    use chrono::{TimeZone, Utc};
    use std::io::Cursor;

    fn report(n: i64) -> CategoryReport {
        let rows = (1..=n)
            .map(|id| ReportRow {
                id,
                name: format!("Categoria {}", id),
                description: (id % 2 == 0).then(|| "Con descripción".to_string()),
                active: id % 3 != 0,
                created_at: Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap(),
            })
            .collect();
        CategoryReport::new(rows, "Test")
    }

    fn read_back(bytes: Vec<u8>) -> calamine::Range<Data> {
        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).unwrap();
        workbook.worksheet_range(SHEET_NAME).unwrap()
    }

    #[test]
    fn test_row_count_matches_report() {
        let range = read_back(write_xlsx(&report(7)).unwrap());
        // header + one row per category
        assert_eq!(range.rows().count(), 8);
    }

    #[test]
    fn test_empty_report_has_header_only() {
        let range = read_back(write_xlsx(&report(0)).unwrap());
        assert_eq!(range.rows().count(), 1);
    }

    #[test]
    fn test_cell_contents() {
        let range = read_back(write_xlsx(&report(3)).unwrap());
        let rows: Vec<_> = range.rows().collect();

        assert_eq!(rows[0][0], Data::String("ID".to_string()));
        assert_eq!(rows[0][4], Data::String("Fecha Creación".to_string()));

        assert_eq!(rows[1][0], Data::Float(1.0));
        assert_eq!(rows[1][1], Data::String("Categoria 1".to_string()));
        assert_eq!(rows[1][3], Data::String("Activo".to_string()));
        assert_eq!(rows[1][4], Data::String("15/01/2025 10:30".to_string()));
        assert_eq!(rows[2][2], Data::String("Con descripción".to_string()));
        assert_eq!(rows[3][3], Data::String("Inactivo".to_string()));
    }
}
