//! Daily hours bar chart rendered as a single-page PDF.

use crate::errors::{AppError, AppResult};
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

const Y_TICKS: usize = 5;

pub struct DailyChart {
    title: String,

    page_w: f32,
    page_h: f32,
    margin: f32,
    label_band: f32,

    font_size: f32,
    title_font_size: f32,
}

impl DailyChart {
    /// A4 landscape.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            page_w: 842.0,
            page_h: 595.0,
            margin: 60.0,
            label_band: 60.0,
            font_size: 9.0,
            title_font_size: 14.0,
        }
    }

    /// Render `totals` (date → hours, already sorted) into PDF bytes.
    pub fn render(&self, totals: &BTreeMap<String, f64>) -> AppResult<Vec<u8>> {
        if totals.is_empty() {
            return Err(AppError::Chart("no data to plot".into()));
        }

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let page_id = Ref::new(4);
        let content_id = Ref::new(5);

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(pages_id);
        pdf.pages(pages_id).kids([page_id]).count(1);
        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        {
            let mut page = pdf.page(page_id);
            page.parent(pages_id)
                .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
                .contents(content_id);
            page.resources().fonts().pair(Name(b"F1"), font_id);
        }

        let mut content = Content::new();
        self.draw(&mut content, totals);
        pdf.stream(content_id, &content.finish());

        Ok(pdf.finish())
    }

    pub fn save(&self, path: &Path, totals: &BTreeMap<String, f64>) -> AppResult<()> {
        let bytes = self.render(totals)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }

    fn draw(&self, content: &mut Content, totals: &BTreeMap<String, f64>) {
        let left = self.margin;
        let right = self.page_w - self.margin;
        let bottom = self.margin + self.label_band;
        let top = self.page_h - self.margin - 20.0;

        let (lo, hi) = value_range(totals);
        let scale = (top - bottom) / (hi - lo) as f32;
        let y_of = |v: f64| bottom + ((v - lo) as f32) * scale;
        let baseline = y_of(0.0);

        self.draw_text(
            content,
            left,
            self.page_h - self.margin + 10.0,
            self.title_font_size,
            &self.title,
        );
        self.draw_text(content, 10.0, top + 10.0, self.font_size, "Hours");

        // y grid + labels
        content.save_state();
        content.set_line_width(0.5);
        content.set_stroke_rgb(0.85, 0.85, 0.85);
        for i in 0..=Y_TICKS {
            let v = lo + (hi - lo) * i as f64 / Y_TICKS as f64;
            let y = y_of(v);
            content.move_to(left, y);
            content.line_to(right, y);
            content.stroke();
            self.draw_text(content, left - 40.0, y - 3.0, self.font_size, &format!("{v:.1}"));
        }
        content.restore_state();

        // bars
        let slot = (right - left) / totals.len() as f32;
        let bar_w = slot * 0.7;

        for (i, (date, hours)) in totals.iter().enumerate() {
            let x = left + slot * i as f32 + (slot - bar_w) / 2.0;
            let y = y_of(*hours);
            let (bar_y, bar_h) = if y >= baseline {
                (baseline, y - baseline)
            } else {
                (y, baseline - y)
            };

            content.save_state();
            content.set_fill_rgb(0.53, 0.81, 0.92);
            content.rect(x, bar_y, bar_w, bar_h);
            content.fill_nonzero();
            content.restore_state();

            self.draw_text(
                content,
                x,
                bar_y + bar_h + 3.0,
                self.font_size,
                &format!("{hours:.2}"),
            );
            self.draw_rotated_text(content, x + bar_w / 2.0, bottom - 10.0, date);
        }

        // axes
        content.save_state();
        content.set_line_width(1.0);
        content.set_stroke_rgb(0.2, 0.2, 0.2);
        content.move_to(left, bottom);
        content.line_to(left, top);
        content.move_to(left, baseline);
        content.line_to(right, baseline);
        content.stroke();
        content.restore_state();

        self.draw_text(content, right - 20.0, self.margin - 30.0, self.font_size, "Date");
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }

    /// Date labels run down-left at 45° so long ranges stay readable.
    fn draw_rotated_text(&self, content: &mut Content, x: f32, y: f32, text: &str) {
        let c = std::f32::consts::FRAC_1_SQRT_2;
        let width = text.len() as f32 * self.font_size * 0.5;
        content.begin_text();
        content.set_font(Name(b"F1"), self.font_size);
        content.set_text_matrix([c, c, -c, c, x - width * c, y - width * c]);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }
}

/// Axis bounds that always include zero and never collapse to an empty range.
fn value_range(totals: &BTreeMap<String, f64>) -> (f64, f64) {
    let lo = totals.values().copied().fold(0.0_f64, f64::min);
    let hi = totals.values().copied().fold(0.0_f64, f64::max);
    if hi - lo < f64::EPSILON {
        (lo, lo + 1.0)
    } else {
        (lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn totals(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(d, h)| (d.to_string(), *h)).collect()
    }

    #[test]
    fn range_includes_zero() {
        assert_eq!(value_range(&totals(&[("a", 8.0), ("b", 2.0)])), (0.0, 8.0));
        assert_eq!(value_range(&totals(&[("a", -8.0), ("b", 2.0)])), (-8.0, 2.0));
        assert_eq!(value_range(&totals(&[("a", 0.0)])), (0.0, 1.0));
    }

    #[test]
    fn renders_a_pdf_with_every_date() {
        let chart = DailyChart::new("Daily work time");
        let bytes = chart
            .render(&totals(&[("2024-01-01", 8.0), ("2024-01-02", 6.5)]))
            .unwrap();

        assert!(bytes.starts_with(b"%PDF-"));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("Helvetica"));
    }

    #[test]
    fn empty_totals_are_an_error() {
        let chart = DailyChart::new("x");
        assert!(matches!(
            chart.render(&BTreeMap::new()),
            Err(AppError::Chart(_))
        ));
    }

    #[test]
    fn save_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("work_plot.pdf");
        DailyChart::new("t")
            .save(&path, &totals(&[("2024-01-01", 8.0)]))
            .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".worklog").join("charts").join("work_plot.pdf");
        DailyChart::new("t")
            .save(&path, &totals(&[("2024-01-01", 8.0)]))
            .unwrap();
        assert!(fs::read(&path).unwrap().starts_with(b"%PDF-"));
    }
}
