//! XLSX reader
//!
//! A string-oriented reader: every cell value is loaded as text, whatever its
//! stored type. That is all the core model holds and all the inspection
//! commands and round-trip tests need.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::a1::parse_cell_ref;
use crate::error::{XlsxError, XlsxResult};
use ismr_sheets_core::{Sheet, Workbook};

/// XLSX file reader
pub struct XlsxReader;

impl XlsxReader {
    /// Read a workbook from a file path
    pub fn read_file<P: AsRef<Path>>(path: P) -> XlsxResult<Workbook> {
        let file = File::open(path)?;
        Self::read(file)
    }

    /// Read a workbook from a reader
    pub fn read<R: Read + Seek>(reader: R) -> XlsxResult<Workbook> {
        let mut archive = zip::ZipArchive::new(reader)?;

        if archive.by_name("[Content_Types].xml").is_err() {
            return Err(XlsxError::InvalidFormat(
                "Missing [Content_Types].xml".into(),
            ));
        }

        let shared_strings = Self::read_shared_strings(&mut archive)?;
        let sheet_info = Self::read_workbook_xml(&mut archive)?;
        let sheet_paths = Self::read_workbook_rels(&mut archive)?;

        let mut workbook = Workbook::new();

        for (name, r_id) in &sheet_info {
            if let Some(path) = sheet_paths.get(r_id) {
                let (rows, header_row) =
                    Self::read_worksheet(&mut archive, path, &shared_strings)?;

                let mut sheet = Sheet::new(name.clone());
                for row in rows {
                    sheet.append_row(row);
                }
                sheet.set_header_row(header_row);
                workbook.add_sheet(sheet)?;
            }
        }

        Ok(workbook)
    }

    /// Read the shared strings table (absent in this tool's own output)
    fn read_shared_strings<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<Vec<String>> {
        let mut strings = Vec::new();

        let file = match archive.by_name("xl/sharedStrings.xml") {
            Ok(f) => f,
            Err(_) => return Ok(strings), // No shared strings is valid
        };

        let reader = BufReader::new(file);
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut current_string = String::new();
        let mut in_si = false;
        let mut in_t = false;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"si" => {
                        in_si = true;
                        current_string.clear();
                    }
                    b"t" if in_si => {
                        in_t = true;
                    }
                    _ => {}
                },
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"si" => {
                        strings.push(std::mem::take(&mut current_string));
                        in_si = false;
                    }
                    b"t" => {
                        in_t = false;
                    }
                    _ => {}
                },
                Ok(Event::Text(e)) if in_t => {
                    if let Ok(text) = e.unescape() {
                        current_string.push_str(&text);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(strings)
    }

    /// Read workbook.xml to get sheet names and rIds, in workbook order
    fn read_workbook_xml<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<Vec<(String, String)>> {
        let file = archive
            .by_name("xl/workbook.xml")
            .map_err(|_| XlsxError::MissingPart("xl/workbook.xml".into()))?;

        let reader = BufReader::new(file);
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut sheets = Vec::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e)) if e.name().as_ref() == b"sheet" => {
                    let mut name = None;
                    let mut r_id = None;

                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"name" => {
                                name = attr.unescape_value().ok().map(|s| s.to_string());
                            }
                            b"r:id" => {
                                r_id = attr.unescape_value().ok().map(|s| s.to_string());
                            }
                            _ => {}
                        }
                    }

                    if let (Some(name), Some(r_id)) = (name, r_id) {
                        sheets.push((name, r_id));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(sheets)
    }

    /// Read workbook.xml.rels to get worksheet part paths by rId
    fn read_workbook_rels<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<HashMap<String, String>> {
        let file = archive
            .by_name("xl/_rels/workbook.xml.rels")
            .map_err(|_| XlsxError::MissingPart("xl/_rels/workbook.xml.rels".into()))?;

        let reader = BufReader::new(file);
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut rels = HashMap::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e))
                    if e.name().as_ref() == b"Relationship" =>
                {
                    let mut id = None;
                    let mut target = None;
                    let mut rel_type = None;

                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"Id" => {
                                id = attr.unescape_value().ok().map(|s| s.to_string());
                            }
                            b"Target" => {
                                target = attr.unescape_value().ok().map(|s| s.to_string());
                            }
                            b"Type" => {
                                rel_type = attr.unescape_value().ok().map(|s| s.to_string());
                            }
                            _ => {}
                        }
                    }

                    if let (Some(id), Some(target), Some(rel_type)) = (id, target, rel_type) {
                        if rel_type.ends_with("/worksheet") {
                            // Target is relative to the xl/ folder
                            let full_path = if let Some(stripped) = target.strip_prefix('/') {
                                stripped.to_string()
                            } else {
                                format!("xl/{}", target)
                            };
                            rels.insert(id, full_path);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(rels)
    }

    /// Read one worksheet part into rows of strings plus the header flag
    fn read_worksheet<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
        path: &str,
        shared_strings: &[String],
    ) -> XlsxResult<(Vec<Vec<String>>, bool)> {
        let file = archive
            .by_name(path)
            .map_err(|_| XlsxError::MissingPart(path.to_string()))?;

        let reader = BufReader::new(file);
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.trim_text(true);

        let mut buf = Vec::new();

        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut header_row = false;

        // Position falls back to "next row / next column" when a cell or row
        // carries no reference attribute.
        let mut current_row: usize = 0;
        let mut next_col: usize = 0;

        // Current cell state
        let mut cell_row: usize = 0;
        let mut cell_col: usize = 0;
        let mut cell_type: Option<String> = None;
        let mut cell_value: Option<String> = None;
        let mut in_cell = false;
        let mut in_value = false;
        let mut in_inline_text = false;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) | Ok(Event::Empty(e))
                    if e.name().as_ref() == b"pane" =>
                {
                    header_row = Self::pane_is_frozen_top_row(&e);
                }
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) if e.name().as_ref() == b"row" => {
                    let explicit = e.attributes().flatten().find_map(|attr| {
                        (attr.key.as_ref() == b"r")
                            .then(|| attr.unescape_value().ok())
                            .flatten()
                            .and_then(|s| s.parse::<usize>().ok())
                    });
                    current_row = match explicit {
                        Some(r) if r >= 1 => r - 1,
                        _ => rows.len(),
                    };
                    next_col = 0;
                }
                Ok(Event::Start(e)) if e.name().as_ref() == b"c" => {
                    in_cell = true;
                    cell_type = None;
                    cell_value = None;
                    cell_row = current_row;
                    cell_col = next_col;

                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"r" => {
                                if let Some(reference) =
                                    attr.unescape_value().ok().and_then(|s| parse_cell_ref(&s))
                                {
                                    (cell_row, cell_col) = reference;
                                }
                            }
                            b"t" => {
                                cell_type =
                                    attr.unescape_value().ok().map(|s| s.to_string());
                            }
                            _ => {}
                        }
                    }

                    next_col = cell_col + 1;
                }
                Ok(Event::Empty(e)) if e.name().as_ref() == b"c" => {
                    // A self-closing cell has no value; it still advances the
                    // column cursor.
                    let mut col = next_col;
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"r" {
                            if let Some((_, c)) =
                                attr.unescape_value().ok().and_then(|s| parse_cell_ref(&s))
                            {
                                col = c;
                            }
                        }
                    }
                    next_col = col + 1;
                }
                Ok(Event::Start(e)) if in_cell && e.name().as_ref() == b"v" => {
                    in_value = true;
                }
                Ok(Event::Start(e)) if in_cell && e.name().as_ref() == b"t" => {
                    in_inline_text = true;
                }
                Ok(Event::Text(e)) if in_value || in_inline_text => {
                    if let Ok(text) = e.unescape() {
                        cell_value.get_or_insert_with(String::new).push_str(&text);
                    }
                }
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"v" => in_value = false,
                    b"t" => in_inline_text = false,
                    b"c" => {
                        if in_cell {
                            let text = Self::resolve_cell_value(
                                cell_type.as_deref(),
                                cell_value.take(),
                                shared_strings,
                            );
                            Self::place_cell(&mut rows, cell_row, cell_col, text);
                            in_cell = false;
                        }
                    }
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok((rows, header_row))
    }

    fn pane_is_frozen_top_row(e: &quick_xml::events::BytesStart<'_>) -> bool {
        let mut y_split = false;
        let mut frozen = false;

        for attr in e.attributes().flatten() {
            match attr.key.as_ref() {
                b"ySplit" => {
                    y_split = attr
                        .unescape_value()
                        .ok()
                        .and_then(|s| s.parse::<u32>().ok())
                        .is_some_and(|n| n >= 1);
                }
                b"state" => {
                    frozen = attr
                        .unescape_value()
                        .ok()
                        .is_some_and(|s| s.as_ref() == "frozen" || s.as_ref() == "frozenSplit");
                }
                _ => {}
            }
        }

        y_split && frozen
    }

    /// Resolve the stored cell value to text by cell type
    fn resolve_cell_value(
        cell_type: Option<&str>,
        value: Option<String>,
        shared_strings: &[String],
    ) -> String {
        let value = value.unwrap_or_default();
        match cell_type {
            Some("s") => value
                .parse::<usize>()
                .ok()
                .and_then(|i| shared_strings.get(i).cloned())
                .unwrap_or_default(),
            // inlineStr, str, b, e and untyped numeric cells all read as
            // their stored text
            _ => value,
        }
    }

    /// Put a value at (row, col), growing the table and padding gaps with
    /// empty strings
    fn place_cell(rows: &mut Vec<Vec<String>>, row: usize, col: usize, value: String) {
        if rows.len() <= row {
            rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut rows[row];
        if cells.len() <= col {
            cells.resize(col + 1, String::new());
        }
        cells[col] = value;
    }
}
