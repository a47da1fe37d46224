//! Text reports for the CLI frontend.
//!
//! Writes a conductor summary and the span × hypothesis table to any
//! [`Write`] sink, usually stdout.

use std::io::Write;

use crate::conductor::Conductor;
use crate::error::Result;
use crate::mech::{MechAnalysisZone, SpanResults};

/// Column header of the span table.
const TABLE_HEADER: &str =
    "    span (m)  hypothesis              T ref (daN)   sag (m)   param (m)";

/// Write the conductor and section summary.
pub fn render_summary<W: Write>(
    out: &mut W,
    conductor: &Conductor,
    zone: MechAnalysisZone,
    ruling_span: f64,
) -> Result<()> {
    writeln!(out, "Conductor:    {}", conductor.designation)?;
    if let Some(legacy) = &conductor.legacy_code {
        writeln!(out, "Legacy code:  {}", legacy)?;
    }
    writeln!(out, "Zone:         {}", zone)?;
    writeln!(out, "RTS:          {:.1} daN", conductor.rated_strength)?;
    writeln!(out, "Unit weight:  {:.4} daN/m", conductor.unit_weight())?;
    writeln!(out, "Ruling span:  {:.2} m", ruling_span)?;
    writeln!(out)?;
    Ok(())
}

/// Write one row per span and hypothesis; the controlling row is starred.
pub fn render_table<W: Write>(out: &mut W, table: &[SpanResults]) -> Result<()> {
    writeln!(out, "{}", TABLE_HEADER)?;
    writeln!(out, "{}", "-".repeat(TABLE_HEADER.len()))?;

    for row in table {
        for (i, r) in row.results.iter().enumerate() {
            let marker = if i == row.controlling { '*' } else { ' ' };
            writeln!(
                out,
                "{} {:>10.2}  {:<22} {:>11.1} {:>9.3} {:>11.1}",
                marker,
                row.span,
                r.hypothesis.to_string(),
                r.state.tension,
                r.sag,
                r.state.catenary_parameter(),
            )?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mech::{MechAnalysis, MechAnalysisHypothesis, SagTensionAnalyzer};

    #[test]
    fn test_render_table_marks_controlling_row() {
        let c = Conductor::new("test")
            .with_areas(0.0, 0.0, 100.0)
            .with_mass(1000.0)
            .with_rated_strength(1000.0)
            .with_elastic_modulus(1.0);
        let mech = MechAnalysis::new(&c, MechAnalysisZone::A);
        let analyzer = SagTensionAnalyzer::new(
            mech,
            vec![
                MechAnalysisHypothesis::new(15.0, 0.15),
                MechAnalysisHypothesis::new(-5.0, 0.25),
            ],
        )
        .unwrap();
        let table = analyzer.tbl(&[100.0, 200.0]).unwrap();

        let mut out = Vec::new();
        render_table(&mut out, &table).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2 + 4);
        assert!(lines[2].starts_with('*'));
        assert!(lines[2].contains("15:0.15"));
        assert!(lines[3].starts_with(' '));
        assert!(lines[3].contains("-5:0.25"));
    }

    #[test]
    fn test_render_summary() {
        let c = Conductor::new("337-AL1/44-ST1A").with_legacy_code("LA 380");
        let mut out = Vec::new();
        render_summary(&mut out, &c, MechAnalysisZone::B, 212.13).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Legacy code:  LA 380"));
        assert!(text.contains("Zone:         B"));
        assert!(text.contains("Ruling span:  212.13 m"));
    }
}
