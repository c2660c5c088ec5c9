//! Inline HTML pages
//!
//! Self-contained pages with no external resources. Everything interpolated
//! from user input (file names, status messages) goes through
//! [`escape_html`].

use ismr_sheets::{FileOutcome, FileStatus};
use uuid::Uuid;

/// The upload form served at `/`
pub const FORM_PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>ISMR to Excel</title>
  <style>
    * { box-sizing: border-box; margin: 0; padding: 0; }
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', system-ui, sans-serif;
      background: #fafaf9; color: #1c1917;
      min-height: 100vh; display: flex; flex-direction: column;
      align-items: center; justify-content: center; padding: 24px;
    }
    h1 { font-size: 24px; margin-bottom: 8px; }
    p { color: #78716c; font-size: 14px; margin-bottom: 24px; text-align: center; }
    form { display: flex; flex-direction: column; gap: 16px; width: 100%; max-width: 420px; }
    input[type="file"] {
      padding: 16px; background: white; border: 2px dashed #d6d3d1; border-radius: 12px;
    }
    label.checkbox { display: flex; align-items: center; gap: 8px; font-size: 14px; }
    button {
      padding: 16px; border-radius: 12px; font-size: 16px; font-weight: 500;
      cursor: pointer; border: none; background: #4a7c59; color: white;
    }
  </style>
</head>
<body>
  <h1>ISMR to Excel</h1>
  <p>Upload one or more .ismr or .txt files to merge them into a single workbook, one sheet per file.</p>
  <form action="/convert" method="post" enctype="multipart/form-data">
    <input type="file" name="files" accept=".ismr,.txt" multiple required>
    <label class="checkbox">
      <input type="checkbox" name="use_header">
      Use first non-comment row as headers
    </label>
    <button type="submit">Convert</button>
  </form>
</body>
</html>"#;

const RESULT_PAGE_STYLE: &str = r#"
    * { box-sizing: border-box; margin: 0; padding: 0; }
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', system-ui, sans-serif;
      background: #fafaf9; color: #1c1917;
      min-height: 100vh; display: flex; flex-direction: column;
      align-items: center; justify-content: center; padding: 24px;
    }
    h1 { font-size: 24px; margin-bottom: 16px; }
    ul { list-style: none; margin-bottom: 24px; max-width: 520px; width: 100%; }
    li { padding: 8px 12px; border-radius: 8px; font-size: 14px; margin-bottom: 4px; background: white; }
    li.success { color: #16a34a; }
    li.warning { color: #b45309; }
    li.error { color: #dc2626; }
    a.download {
      padding: 16px 32px; border-radius: 12px; font-size: 16px; font-weight: 500;
      background: #4a7c59; color: white; text-decoration: none;
    }
    a.back { margin-top: 24px; color: #78716c; font-size: 14px; }
"#;

/// Render the per-file results page with an optional download action
pub fn render_results(statuses: &[FileStatus], download: Option<Uuid>) -> String {
    let mut items = String::new();
    for status in statuses {
        let (class, text) = status_line(status);
        items.push_str(&format!(
            "        <li class=\"{}\">{}</li>\n",
            class,
            escape_html(&text)
        ));
    }

    let action = match download {
        Some(id) => format!(
            "    <a class=\"download\" href=\"/download/{}\">Download workbook</a>\n",
            id
        ),
        None => "    <p>No workbook was produced.</p>\n".to_string(),
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  \
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n  \
         <title>Conversion results</title>\n  <style>{}</style>\n</head>\n<body>\n  \
         <h1>Conversion results</h1>\n    <ul>\n{}    </ul>\n{}    \
         <a class=\"back\" href=\"/\">Convert more files</a>\n</body>\n</html>",
        RESULT_PAGE_STYLE, items, action
    )
}

/// Render a bare message page (used for request errors)
pub fn render_message(message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  \
         <title>ISMR to Excel</title>\n  <style>{}</style>\n</head>\n<body>\n  \
         <h1>ISMR to Excel</h1>\n  <p>{}</p>\n  \
         <a class=\"back\" href=\"/\">Back</a>\n</body>\n</html>",
        RESULT_PAGE_STYLE,
        escape_html(message)
    )
}

fn status_line(status: &FileStatus) -> (&'static str, String) {
    match &status.outcome {
        FileOutcome::Success { sheet, rows } => (
            "success",
            format!(
                "{}: {} row(s) -> sheet \"{}\"",
                status.file_name, rows, sheet
            ),
        ),
        FileOutcome::Warning(reason) => {
            ("warning", format!("{}: {}", status.file_name, reason))
        }
        FileOutcome::Error(reason) => ("error", format!("{}: {}", status.file_name, reason)),
    }
}

/// Escape text for interpolation into HTML content
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
