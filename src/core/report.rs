use crate::domain::model::{PlatformCounts, Report, SearchResult};

const PLATFORM_WIDTH: usize = 20;

const RESULTS_BORDER: &str = "+------------------------+";
const RESULTS_TITLE: &str = "|     Search Results     |";

const SUMMARY_BORDER: &str = "+-------------------+";
const SUMMARY_TITLE: &str = "|   Summary Report   |";

fn boxed_header(border: &str, title: &str) -> String {
    format!("{border}\n{title}\n{border}\n\n")
}

pub fn format_results(results: &[SearchResult]) -> Report {
    let mut out = boxed_header(RESULTS_BORDER, RESULTS_TITLE);

    for result in results {
        out.push_str(&format!(
            "{:<width$}\n{}\n\n",
            result.platform,
            result.url,
            width = PLATFORM_WIDTH
        ));
    }

    out.push_str(RESULTS_BORDER);
    out.push('\n');
    Report::new(out)
}

pub fn format_summary(counts: &PlatformCounts, total_results: usize) -> Report {
    let mut out = boxed_header(SUMMARY_BORDER, SUMMARY_TITLE);
    out.push_str(&format!("Total links generated: {total_results}\n\n"));
    out.push_str("Breakdown by platform:\n----------------------\n");

    for (platform, count) in counts.iter() {
        out.push_str(&format!(
            "{:<width$} {} link(s)\n",
            platform,
            count,
            width = PLATFORM_WIDTH
        ));
    }

    out.push_str(&format!("\n{SUMMARY_BORDER}\n"));
    Report::new(out)
}
