// src/report.rs

use crate::edit_types::edit_type_name;
use crate::error::Result;
use crate::model::*;
use crate::stats::{self, HistogramShape};
use std::io::Write;

/// Default width of the longest histogram bar
pub const DEFAULT_BAR_WIDTH: usize = 60;

/// Per-type edit counts for one editor.
pub fn write_editor_breakdown<W: Write>(w: &mut W, es: &EditorStats) -> Result<()> {
    for (&et, &n) in &es.edits {
        writeln!(w, "{:<37}  {:5}", edit_type_name(et), n)?;
    }
    Ok(())
}

pub fn write_editor_histogram<W: Write>(
    w: &mut W,
    stats: &[EditorStats],
    et: EditType,
    shape: HistogramShape,
    bar_width: usize,
) -> Result<()> {
    let hist = stats::editor_histogram(stats, et, shape)?;
    hist.write(w, 0, bar_width)?;
    Ok(())
}

pub fn write_editor_list<W: Write>(w: &mut W, stats: &[EditorStats], et: EditType) -> Result<()> {
    for (name, n) in stats::editor_list(stats, et) {
        writeln!(w, "{:5}  {}", n, name)?;
    }
    Ok(())
}

pub fn write_edit_type_totals<W: Write>(w: &mut W, stats: &[EditorStats]) -> Result<()> {
    for t in stats::edit_type_totals(stats) {
        writeln!(
            w,
            "{:5} editors  {} ({} edits)",
            t.editors,
            edit_type_name(t.edit_type),
            t.edits
        )?;
    }
    Ok(())
}

pub fn write_correlations<W: Write>(w: &mut W, stats: &[EditorStats]) -> Result<()> {
    for c in stats::edit_type_correlations(stats) {
        writeln!(
            w,
            "({}, {}) = {:.3}",
            edit_type_name(c.first),
            edit_type_name(c.second),
            c.coefficient
        )?;
    }
    Ok(())
}

pub fn write_yearly_editors<W: Write>(w: &mut W, years: &[YearSummary], et: EditType) -> Result<()> {
    for (year, n) in stats::yearly_editors(years, et) {
        writeln!(w, "{:4}  {:5}", year, n)?;
    }
    Ok(())
}

pub fn write_yearly_edits<W: Write>(w: &mut W, years: &[YearSummary], et: EditType) -> Result<()> {
    for (year, n) in stats::yearly_edits(years, et) {
        writeln!(w, "{:4}  {:6}", year, n)?;
    }
    Ok(())
}

pub fn write_yearly_age<W: Write>(w: &mut W, years: &[YearSummary], et: EditType) -> Result<()> {
    for (year, age) in stats::yearly_average_age(years, et) {
        writeln!(w, "{:4}  {:.1}", year, age)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor(name: &str, edits: &[(EditType, u32)]) -> EditorStats {
        EditorStats {
            name: name.to_string(),
            edits: edits.iter().copied().collect(),
            ..Default::default()
        }
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn breakdown_names_each_type() {
        let es = editor("a", &[(1, 12), (9999, 1)]);
        let text = render(|w| write_editor_breakdown(w, &es));
        assert_eq!(
            text,
            format!("{:<37}  {:5}\n{:<37}  {:5}\n", "ARTIST_CREATE", 12, "UNKNOWN_9999", 1)
        );
    }

    #[test]
    fn list_and_totals() {
        let stats = vec![editor("a", &[(1, 3)]), editor("b", &[(2, 1)]), editor("c", &[(1, 10)])];
        assert_eq!(render(|w| write_editor_list(w, &stats, 1)), "    3  a\n   10  c\n");
        assert_eq!(
            render(|w| write_edit_type_totals(w, &stats)),
            "    2 editors  ARTIST_CREATE (13 edits)\n    1 editors  ARTIST_EDIT (1 edits)\n"
        );
    }

    #[test]
    fn yearly_lines() {
        let years = vec![
            YearSummary {
                year: 2019,
                stats: vec![editor("a", &[(1, 3)])],
            },
            YearSummary {
                year: 2020,
                stats: vec![],
            },
        ];
        assert_eq!(render(|w| write_yearly_edits(w, &years, 1)), "2019       3\n2020       0\n");
        assert_eq!(render(|w| write_yearly_editors(w, &years, 1)), "2019      1\n2020      0\n");
        assert_eq!(render(|w| write_yearly_age(w, &years, 1)), "2019  0.0\n2020  0.0\n");
    }

    #[test]
    fn correlation_lines() {
        let stats = vec![editor("a", &[(1, 1), (2, 1)]), editor("b", &[(1, 4), (2, 4)])];
        assert_eq!(
            render(|w| write_correlations(w, &stats)),
            "(ARTIST_EDIT, ARTIST_CREATE) = 1.000\n"
        );
    }
}
