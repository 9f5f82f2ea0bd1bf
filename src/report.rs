//! 終端機輸出：告訴使用者要在 Texture Animation 屬性中填入的值

use crate::component::{BatchReport, SheetReport};
use console::style;
use rust_i18n::t;
use std::path::Path;

pub fn print_sheet_report(report: &SheetReport) {
    println!("{}", style(t!("report.header")).cyan().bold());
    print_sheet_lines(report);
}

fn print_sheet_lines(report: &SheetReport) {
    println!("\t{}", t!("report.texture", name = report.texture_name()));
    println!(
        "\t{}",
        t!("report.grid", columns = report.columns, rows = report.rows)
    );
    println!("\t{}", t!("report.cells", count = report.frame_count));
}

pub fn print_batch_report(report: &BatchReport, directory: &Path, descriptor_extension: &str) {
    if report.is_empty() && !report.interrupted {
        println!(
            "{}",
            style(t!(
                "report.no_sequences",
                ext = descriptor_extension,
                dir = directory.display()
            ))
            .yellow()
        );
        return;
    }

    if !report.sheets.is_empty() {
        println!("{}", style(t!("report.header")).cyan().bold());
        for sheet in &report.sheets {
            print_sheet_lines(sheet);
            println!();
        }
    }

    if !report.failures.is_empty() {
        println!("{}", style(t!("report.failed_header")).red().bold());
        for failure in &report.failures {
            println!(
                "  {} {}: {}",
                style("✗").red(),
                failure.base.display(),
                failure.error
            );
        }
    }

    if report.interrupted {
        println!("{}", style(t!("report.interrupted")).yellow());
    }
}
