use super::theme::{Tone, LIGHT, RULE};
use super::ReportError;
use chrono::{NaiveDate, NaiveTime};
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, OffsetDateTime, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rect,
};

pub(crate) const PAGE_WIDTH: f32 = 210.0;
pub(crate) const PAGE_HEIGHT: f32 = 297.0;
pub(crate) const MARGIN: f32 = 18.0;
pub(crate) const CONTENT_WIDTH: f32 = PAGE_WIDTH - MARGIN * 2.0;

/// Bottom clearance reserved for the footer band.
const FOOTER_CLEARANCE: f32 = 8.0;

/// Smallest visible bar fill, in millimetres. A zero value still
/// renders a sliver rather than disappearing.
pub(crate) const MIN_BAR_FILL_MM: f32 = 2.0;

const PT_TO_MM: f32 = 25.4 / 72.0;

/// Average Helvetica glyph advance as a fraction of the point size.
/// Good enough for wrapping; the layout never depends on exact widths.
const GLYPH_WIDTH_FACTOR: f32 = 0.5;

/// Filled width of a proportional bar, floored so near-zero values stay
/// visible.
pub(crate) fn fill_width(value: f32, max_value: f32, track_width: f32) -> f32 {
    if max_value <= 0.0 {
        return MIN_BAR_FILL_MM;
    }
    let proportional = (value / max_value).clamp(0.0, 1.0) * track_width;
    proportional.max(MIN_BAR_FILL_MM)
}

pub(crate) fn text_width_mm(text: &str, size_pt: f32) -> f32 {
    text.chars().count() as f32 * size_pt * GLYPH_WIDTH_FACTOR * PT_TO_MM
}

/// Greedy word wrap against an estimated column width.
pub(crate) fn wrap_text(text: &str, size_pt: f32, max_width_mm: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_owned()
        } else {
            format!("{current} {word}")
        };
        if text_width_mm(&candidate, size_pt) <= max_width_mm || current.is_empty() {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_owned();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Hard truncation with an ellipsis marker, for single-line contexts.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

/// Page composer: owns the document, the active layer, and a running
/// top-down cursor. All drawing coordinates are measured from the top
/// of the page and converted to the PDF origin at draw time.
pub(crate) struct PageComposer {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
    pages: usize,
}

impl PageComposer {
    pub(crate) fn new(title: &str, generated_on: NaiveDate) -> Result<Self, ReportError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Content");

        // Document metadata defaults to the wall clock; pin it to the
        // report date so identical input yields identical bytes.
        let stamp = OffsetDateTime::from_unix_timestamp(
            generated_on.and_time(NaiveTime::MIN).and_utc().timestamp(),
        )
        .unwrap_or(OffsetDateTime::UNIX_EPOCH);
        let doc = doc
            .with_creation_date(stamp)
            .with_metadata_date(stamp)
            .with_mod_date(stamp);

        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            y: MARGIN,
            pages: 1,
        })
    }

    pub(crate) fn pages(&self) -> usize {
        self.pages
    }

    pub(crate) fn y(&self) -> f32 {
        self.y
    }

    pub(crate) fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    /// Pagination guard: if the next block of `needed` millimetres
    /// would collide with the footer band, close the page (footer
    /// included) and continue at the top of a fresh one.
    pub(crate) fn ensure_space(&mut self, needed: f32) {
        if self.y + needed > PAGE_HEIGHT - MARGIN - FOOTER_CLEARANCE {
            self.break_page();
        }
    }

    /// Footer pass plus a fresh page with the cursor reset.
    pub(crate) fn break_page(&mut self) {
        self.footer();
        self.push_page();
        self.y = MARGIN + 5.0;
    }

    /// New page without a footer on the page being left. Used when the
    /// previous page draws its own closing line (the cover).
    pub(crate) fn new_section_page(&mut self) {
        self.push_page();
        self.y = MARGIN;
    }

    /// Closes the current section: footer pass, then a fresh page with
    /// the cursor at the top margin.
    pub(crate) fn next_section(&mut self) {
        self.footer();
        self.push_page();
        self.y = MARGIN;
    }

    fn push_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Content");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.pages += 1;
    }

    /// Branding rule, imprint, and page number at the foot of the
    /// current page.
    pub(crate) fn footer(&self) {
        let rule_y = PAGE_HEIGHT - 14.0;
        self.line(MARGIN, rule_y, PAGE_WIDTH - MARGIN, rule_y, RULE, 0.3);
        let text_y = PAGE_HEIGHT - 10.0;
        self.text(
            "© Whetstone Advisory LLC  ·  hello@whetstoneadmissions.com",
            7.5,
            false,
            MARGIN,
            text_y,
            LIGHT,
        );
        self.text(
            &format!("Page {}", self.pages),
            7.5,
            false,
            PAGE_WIDTH - MARGIN - 12.0,
            text_y,
            LIGHT,
        );
    }

    pub(crate) fn text(&self, text: &str, size_pt: f32, bold: bool, x: f32, y_top: f32, tone: Tone) {
        let font = if bold { &self.bold } else { &self.regular };
        self.layer.set_fill_color(tone.color());
        self.layer
            .use_text(text, size_pt, Mm(x), Mm(PAGE_HEIGHT - y_top), font);
    }

    /// Writes wrapped lines starting at `y_top`; returns the number of
    /// lines written.
    pub(crate) fn wrapped_text(
        &self,
        text: &str,
        size_pt: f32,
        bold: bool,
        x: f32,
        y_top: f32,
        max_width_mm: f32,
        line_height: f32,
        tone: Tone,
    ) -> usize {
        let lines = wrap_text(text, size_pt, max_width_mm);
        for (index, line) in lines.iter().enumerate() {
            self.text(line, size_pt, bold, x, y_top + index as f32 * line_height, tone);
        }
        lines.len()
    }

    pub(crate) fn rect(&self, x: f32, y_top: f32, width: f32, height: f32, fill: Tone) {
        self.layer.set_fill_color(fill.color());
        self.layer.add_rect(
            Rect::new(
                Mm(x),
                Mm(PAGE_HEIGHT - y_top - height),
                Mm(x + width),
                Mm(PAGE_HEIGHT - y_top),
            )
            .with_mode(PaintMode::Fill),
        );
    }

    pub(crate) fn framed_rect(
        &self,
        x: f32,
        y_top: f32,
        width: f32,
        height: f32,
        fill: Tone,
        stroke: Tone,
    ) {
        self.layer.set_fill_color(fill.color());
        self.layer.set_outline_color(stroke.color());
        self.layer.set_outline_thickness(0.3);
        self.layer.add_rect(
            Rect::new(
                Mm(x),
                Mm(PAGE_HEIGHT - y_top - height),
                Mm(x + width),
                Mm(PAGE_HEIGHT - y_top),
            )
            .with_mode(PaintMode::FillStroke),
        );
    }

    pub(crate) fn line(&self, x1: f32, y1: f32, x2: f32, y2: f32, tone: Tone, thickness: f32) {
        self.layer.set_outline_color(tone.color());
        self.layer.set_outline_thickness(thickness);
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(x1), Mm(PAGE_HEIGHT - y1)), false),
                (Point::new(Mm(x2), Mm(PAGE_HEIGHT - y2)), false),
            ],
            is_closed: false,
        });
    }

    /// Track plus proportional fill with the minimum-width floor.
    pub(crate) fn bar(
        &self,
        x: f32,
        y_top: f32,
        track_width: f32,
        height: f32,
        fraction: f32,
        fill: Tone,
        track: Tone,
    ) {
        self.rect(x, y_top, track_width, height, track);
        self.rect(x, y_top, fill_width(fraction, 1.0, track_width), height, fill);
    }

    pub(crate) fn finish(self) -> Result<Vec<u8>, ReportError> {
        Ok(self.doc.save_to_bytes()?)
    }
}
