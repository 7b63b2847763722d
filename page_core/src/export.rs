//! # Static HTML Export
//!
//! Renders the document to a standalone HTML page and writes it to disk.
//!
//! ## Architecture
//!
//! - Markup is assembled by string formatting from the document model
//! - A minimal embedded stylesheet carries the brand palette
//! - Saves are atomic: write to `.tmp`, then rename
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use page_core::clock::SystemClock;
//! use page_core::export::save_html;
//!
//! let doc = page_core::content::document(&SystemClock);
//! save_html(&doc, Path::new("index.html")).unwrap();
//! ```

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::blocks::{BodyBlock, HeadingLevel, Inline, ListKind, Simulation, PLACEHOLDER_NOTICE};
use crate::document::{Document, Section};
use crate::errors::{PageError, PageResult};

/// Embedded stylesheet with the brand palette. The `.secundario` media rule
/// hides the secondary logo on narrow viewports.
const STYLE: &str = "\
body { margin: 0; background: #18181b; color: #d4d4d8; font-family: sans-serif; }
header, footer { background: #09090b; padding: 1.5rem 2rem; }
header { display: flex; align-items: center; justify-content: space-between; }
header .marca { display: flex; align-items: center; gap: 1rem; }
header h1 { color: #8b5cf6; margin: 0; }
header .mascota { border-radius: 50%; }
main { max-width: 56rem; margin: 0 auto; padding: 2rem 1rem; }
.intro { text-align: center; font-size: 1.1rem; margin-bottom: 3rem; }
section { background: #27272a; border-radius: 0.5rem; padding: 1.5rem; margin-bottom: 3rem; }
section > h2 { color: #8b5cf6; border-bottom: 2px solid #f97316; padding-bottom: 0.5rem; }
h3 { color: #f97316; }
h4 { color: #8b5cf6; }
code.formula { font-family: monospace; background: #3f3f46; color: #fafafa; \
padding: 0.15rem 0.3rem; border-radius: 0.25rem; font-size: 0.9rem; }
p.formula-bloque { text-align: center; }
.simulacion { margin: 2rem 0; padding: 1rem; border: 2px dashed #22c55e; \
border-radius: 0.375rem; background: #1c1c1f; }
.simulacion h3 { color: #22c55e; margin-top: 0; }
.simulacion .aviso { text-align: center; color: #f97316; }
footer { text-align: center; color: #a1a1aa; }
@media (max-width: 640px) { .secundario { display: none; } }
";

/// Render the complete page as a standalone HTML document.
pub fn render_html(doc: &Document) -> String {
    let mut html = String::with_capacity(16 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape(&doc.meta.title));
    let _ = writeln!(
        html,
        "<meta name=\"description\" content=\"{}\">",
        escape(&doc.meta.description)
    );
    let _ = writeln!(
        html,
        "<link rel=\"icon\" href=\"{}\">",
        escape(&doc.meta.icon)
    );
    let _ = writeln!(html, "<style>\n{}</style>", STYLE);
    html.push_str("</head>\n<body>\n");

    push_header(&mut html, doc);
    push_main(&mut html, doc);
    push_footer(&mut html, doc);

    html.push_str("</body>\n</html>\n");
    html
}

fn push_header(html: &mut String, doc: &Document) {
    let branding = &doc.header.branding;
    html.push_str("<header>\n<div class=\"marca\">\n");
    let _ = writeln!(
        html,
        "<img src=\"{}\" alt=\"Logo {}\" width=\"60\" height=\"60\">",
        escape(&branding.primary_logo),
        escape(&doc.header.title)
    );
    let _ = writeln!(
        html,
        "<img class=\"secundario\" src=\"{}\" alt=\"Logo Adicional\" width=\"150\" height=\"50\">",
        escape(&branding.secondary_logo)
    );
    let _ = writeln!(html, "<h1>{}</h1>", escape(&doc.header.title));
    html.push_str("</div>\n");
    let _ = writeln!(
        html,
        "<img class=\"mascota\" src=\"{}\" alt=\"Mascota\" width=\"80\" height=\"80\">",
        escape(&branding.mascot)
    );
    html.push_str("</header>\n");
}

fn push_main(html: &mut String, doc: &Document) {
    html.push_str("<main>\n<p class=\"intro\">");
    push_inlines(html, &doc.intro);
    html.push_str("</p>\n");

    for section in &doc.sections {
        push_section(html, section);
    }

    html.push_str("</main>\n");
}

fn push_footer(html: &mut String, doc: &Document) {
    html.push_str("<footer>\n");
    let _ = writeln!(html, "<p>{}</p>", escape(&doc.footer.copyright_line()));
    let _ = writeln!(html, "<p>{}</p>", escape(&doc.footer.attribution));
    html.push_str("</footer>\n");
}

fn push_section(html: &mut String, section: &Section) {
    html.push_str("<section>\n");
    let _ = writeln!(html, "<h2>{}</h2>", escape(&section.title));
    for block in &section.body {
        push_block(html, block);
    }
    html.push_str("</section>\n");
}

fn push_block(html: &mut String, block: &BodyBlock) {
    match block {
        BodyBlock::SubHeading { level, text } => {
            let tag = match level {
                HeadingLevel::Topic => "h3",
                HeadingLevel::Concept => "h4",
            };
            let _ = writeln!(html, "<{tag}>{}</{tag}>", escape(text));
        }
        BodyBlock::Paragraph { content } => {
            html.push_str("<p>");
            push_inlines(html, content);
            html.push_str("</p>\n");
        }
        BodyBlock::List { kind, items } => {
            let tag = match kind {
                ListKind::Unordered => "ul",
                ListKind::Ordered => "ol",
            };
            let _ = writeln!(html, "<{tag}>");
            for item in items {
                html.push_str("<li>");
                push_inlines(html, item);
                html.push_str("</li>\n");
            }
            let _ = writeln!(html, "</{tag}>");
        }
        BodyBlock::Formula { display } => {
            let _ = writeln!(
                html,
                "<p class=\"formula-bloque\"><code class=\"formula\">{}</code></p>",
                escape(display.as_str())
            );
        }
        BodyBlock::Simulation { slot } => push_simulation(html, slot),
    }
}

fn push_inlines(html: &mut String, inlines: &[Inline]) {
    for inline in inlines {
        match inline {
            Inline::Text(text) => html.push_str(&escape(text)),
            Inline::Emph(text) => {
                let _ = write!(html, "<em>{}</em>", escape(text));
            }
            Inline::Strong(text) => {
                let _ = write!(html, "<strong>{}</strong>", escape(text));
            }
            Inline::Formula(token) => {
                let _ = write!(
                    html,
                    "<code class=\"formula\">{}</code>",
                    escape(token.as_str())
                );
            }
        }
    }
}

fn push_simulation(html: &mut String, slot: &Simulation) {
    let spec = slot.spec();
    html.push_str("<div class=\"simulacion\">\n");
    let _ = writeln!(html, "<h3>{}</h3>", escape(&spec.heading()));
    let _ = writeln!(
        html,
        "<p class=\"descripcion\"><em>{}</em></p>",
        escape(&spec.description)
    );
    let _ = writeln!(
        html,
        "<p class=\"aviso\">{}</p>",
        escape(PLACEHOLDER_NOTICE)
    );
    html.push_str("</div>\n");
}

/// Escape text for HTML element and attribute positions.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the document and save it atomically.
///
/// Writes to `<path>.tmp` first and renames into place, so a crash mid-write
/// never leaves a truncated page behind. Returns the final path.
pub fn save_html(doc: &Document, path: &Path) -> PageResult<PathBuf> {
    let html = render_html(doc);

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, &html)
        .map_err(|e| PageError::file_error("write", tmp.display().to_string(), e.to_string()))?;

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(PageError::file_error(
            "rename",
            path.display().to_string(),
            e.to_string(),
        ));
    }

    tracing::info!(path = %path.display(), bytes = html.len(), "page exported");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn rendered(year: i32) -> String {
        render_html(&crate::content::document(&FixedClock::for_year(year)))
    }

    #[test]
    fn test_html_contains_section_titles_in_order() {
        let html = rendered(2025);
        let titles = [
            "1. Probabilidad",
            "2. Teorema de Bayes",
            "3. Distribuciones de Medias Muestrales",
            "4. Intervalos de Confianza para la Media",
            "5. Inferencia Estadística (Pruebas de Hipótesis)",
        ];

        let mut last = 0;
        for title in titles {
            let pos = html[last..]
                .find(title)
                .unwrap_or_else(|| panic!("missing or out of order: {}", title));
            last += pos;
        }
    }

    #[test]
    fn test_html_contains_footer_year() {
        assert!(rendered(2025).contains("© 2025 La Bruja de las Mates®"));
        assert!(rendered(2030).contains("© 2030 La Bruja de las Mates®"));
    }

    #[test]
    fn test_every_placeholder_carries_the_notice() {
        let html = rendered(2025);
        assert_eq!(html.matches(PLACEHOLDER_NOTICE).count(), 6);
        assert!(html.contains("Simulación Interactiva: Lanzamiento de Moneda"));
        assert!(html.contains("Simulación Interactiva: Visualizador de p-valor y Región de Rechazo"));
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape("P(B) > 0 & <x>"), "P(B) &gt; 0 &amp; &lt;x&gt;");
    }

    #[test]
    fn test_save_is_atomic() {
        let dir = std::env::temp_dir().join("page_core_export_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("index.html");

        let doc = crate::content::document(&FixedClock::for_year(2025));
        let saved = save_html(&doc, &path).unwrap();

        assert_eq!(saved, path);
        assert!(path.exists());
        assert!(!dir.join("index.html.tmp").exists());

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("La Bruja de las Mates®"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
