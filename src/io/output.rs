use crate::core::RankedPrograms;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_ranking(&mut self, report: &RankedPrograms) -> anyhow::Result<()>;
}

pub fn create_writer(
    writer: Box<dyn Write>,
    format: OutputFormat,
    show_subscores: bool,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, show_subscores)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_ranking(&mut self, report: &RankedPrograms) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_ranking(&mut self, report: &RankedPrograms) -> anyhow::Result<()> {
        writeln!(self.writer, "# Program Ranking")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Source: `{}`, generated {}",
            report.source.display(),
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;

        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "- Programs ranked: {}",
            report.summary.program_count
        )?;
        writeln!(
            self.writer,
            "- Average price: €{:.0}",
            report.summary.average_price_eur
        )?;
        if let Some(best) = &report.summary.best_value {
            writeln!(
                self.writer,
                "- Best value: {} (cost score {:.0}/100)",
                best.name, best.cost_score
            )?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "## Ranking")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| # | Program | University | City | Score | Price (€) | Warnings |"
        )?;
        writeln!(
            self.writer,
            "|---|---------|------------|------|-------|-----------|----------|"
        )?;
        for (rank, scored) in report.programs.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {:.1} | {:.0} | {} |",
                rank + 1,
                scored.program.name,
                scored.program.university,
                scored.program.city,
                scored.final_score,
                scored.program.total_price_eur,
                scored.warnings.len()
            )?;
        }
        writeln!(self.writer)?;

        let flagged: Vec<_> = report
            .programs
            .iter()
            .filter(|s| !s.warnings.is_empty())
            .collect();
        if !flagged.is_empty() {
            writeln!(self.writer, "## Data-quality warnings")?;
            writeln!(self.writer)?;
            for scored in flagged {
                for warning in &scored.warnings {
                    writeln!(self.writer, "- **{}**: {}", scored.program.name, warning)?;
                }
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    show_subscores: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, show_subscores: bool) -> Self {
        Self {
            writer,
            show_subscores,
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_ranking(&mut self, report: &RankedPrograms) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Program Ranking".bold())?;
        writeln!(
            self.writer,
            "  {} programs · average price €{:.0}",
            report.summary.program_count, report.summary.average_price_eur
        )?;
        if let Some(best) = &report.summary.best_value {
            writeln!(
                self.writer,
                "  best value: {} ({:.0}/100)",
                best.name.green(),
                best.cost_score
            )?;
        }
        writeln!(self.writer)?;

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        let mut header = vec!["#", "Program", "University", "City", "Score", "Price (€)"];
        if self.show_subscores {
            header.extend(["Profile", "Analytic", "Managerial", "Practical", "Cost"]);
        }
        header.push("⚠");
        table.set_header(header);

        for (rank, scored) in report.programs.iter().enumerate() {
            let mut row = vec![
                Cell::new(rank + 1),
                Cell::new(&scored.program.name),
                Cell::new(&scored.program.university),
                Cell::new(&scored.program.city),
                Cell::new(format!("{:.1}", scored.final_score)),
                Cell::new(format!("{:.0}", scored.program.total_price_eur)),
            ];
            if self.show_subscores {
                let s = &scored.scores;
                for sub in [s.profile_fit, s.analytic, s.managerial, s.practical, s.cost] {
                    row.push(Cell::new(format!("{sub:.0}")));
                }
            }
            row.push(Cell::new(scored.warnings.len()));
            table.add_row(row);
        }
        writeln!(self.writer, "{table}")?;

        for scored in report.programs.iter().filter(|s| !s.warnings.is_empty()) {
            for warning in &scored.warnings {
                writeln!(
                    self.writer,
                    "{} {}: {}",
                    "warning:".yellow().bold(),
                    scored.program.name,
                    warning
                )?;
            }
        }
        Ok(())
    }
}
