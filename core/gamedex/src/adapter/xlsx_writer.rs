//! xlsxファイルへのSheetWriter実装
//!
//! 行0はEXPORT_COLUMNSのヘッダ、以降は結果セット順に1レコード1行。
//! 出力先は上書き。書き込み失敗はExportエラーとして返し、
//! 途中まで書けたファイルのロールバックはしない。

use crate::ports::outbound::SheetWriter;
use common::domain::{export_row, ResultSet, EXPORT_COLUMNS};
use common::error::Error;
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// xlsx形式で書き出すSheetWriter
#[derive(Debug, Clone, Default)]
pub struct XlsxSheetWriter;

impl XlsxSheetWriter {
    pub fn new() -> Self {
        Self
    }
}

impl SheetWriter for XlsxSheetWriter {
    fn write(&self, results: &ResultSet, path: &Path) -> Result<(), Error> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        for (col, header) in EXPORT_COLUMNS.iter().enumerate() {
            worksheet
                .write_string(0, col as u16, *header)
                .map_err(|e| Error::export(e.to_string()))?;
        }

        for (i, record) in results.records().iter().enumerate() {
            let row = (i + 1) as u32;
            for (col, cell) in export_row(record).iter().enumerate() {
                worksheet
                    .write_string(row, col as u16, cell)
                    .map_err(|e| Error::export(e.to_string()))?;
            }
        }

        workbook
            .save(path)
            .map_err(|e| Error::export(format!("cannot write {}: {}", path.display(), e)))
    }
}
