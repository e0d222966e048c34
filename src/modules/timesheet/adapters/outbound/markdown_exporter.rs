// TimesheetExporter that renders the month report as a Markdown document.
//
// Layout
// - Header with the user and the month.
// - One table row per entry. Special days put their label in the Start column and leave the remaining cells empty.
// - Summary block followed by the overtime disposition.

use crate::modules::timesheet::core::entry::{EntryKind, TimeEntry};
use crate::modules::timesheet::core::settings::Language;
use crate::modules::timesheet::use_cases::export_timesheet::exporter_port::{
    ExportArtifact, ExportError, ExportRequest, TimesheetExporter,
};
use std::fmt::Write;

pub const MARKDOWN_CONTENT_TYPE: &str = "text/markdown; charset=utf-8";

pub struct MarkdownExporter;

fn file_name_part(value: &str) -> String {
    let kept: String = value
        .chars()
        .filter(|c| c.is_whitespace() || !(c.is_control() || matches!(c, '"' | '\\' | '/')))
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join("_")
}

/// `timesheet_<user>_<month>.md`, whitespace runs replaced by `_`.
/// Quotes, slashes and control characters are dropped so the name fits a
/// `Content-Disposition` header.
pub fn report_file_name(user_name: &str, month_name: &str) -> String {
    format!(
        "timesheet_{}_{}.md",
        file_name_part(user_name),
        file_name_part(month_name)
    )
}

fn write_entry(out: &mut String, entry: &TimeEntry) -> std::fmt::Result {
    let date = entry.date.format("%d.%m.%Y");
    match entry.kind {
        EntryKind::Vacation => writeln!(
            out,
            "| {date} | {} | | | | |",
            Language::En.vacation_label()
        ),
        EntryKind::Holiday => writeln!(
            out,
            "| {date} | {} | | | | |",
            Language::En.holiday_label()
        ),
        EntryKind::Ordinary {
            start,
            end,
            pause_minutes,
        } => writeln!(
            out,
            "| {date} | {start} | {end} | {pause_minutes} | {:.2}h | {:.2}h |",
            entry.hours.total_hours, entry.hours.overtime_hours
        ),
    }
}

pub fn render_report(request: &ExportRequest) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "# {}", request.user_name)?;
    writeln!(out, "## {}", request.month_name)?;
    writeln!(out)?;
    writeln!(
        out,
        "| Date | Start | End | Pause (min) | Work hours | Overtime |"
    )?;
    writeln!(out, "|---|---|---|---|---|---|")?;
    for entry in &request.entries {
        write_entry(&mut out, entry)?;
    }

    let summary = &request.monthly_summary;
    writeln!(out)?;
    writeln!(out, "## Summary")?;
    writeln!(out)?;
    writeln!(out, "- Total work hours: {:.2}h", summary.total_work_hours)?;
    writeln!(out, "- Total overtime: {:.2}h", summary.total_overtime)?;
    writeln!(out, "- Total pause: {} min", summary.total_pause)?;
    writeln!(out, "- Vacation days: {}", summary.vacation_days)?;
    writeln!(out, "- Holidays: {}", summary.holiday_days)?;
    writeln!(out)?;
    writeln!(out, "**Overtime:** {}", request.overtime_option.label())?;
    Ok(out)
}

#[async_trait::async_trait]
impl TimesheetExporter for MarkdownExporter {
    async fn render(&self, request: &ExportRequest) -> Result<ExportArtifact, ExportError> {
        let report = render_report(request).map_err(|e| ExportError::Render(e.to_string()))?;
        Ok(ExportArtifact {
            file_name: report_file_name(&request.user_name, &request.month_name),
            content_type: MARKDOWN_CONTENT_TYPE.to_string(),
            content: report.into_bytes(),
        })
    }
}
