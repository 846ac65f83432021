use crate::api::FetchError;
use crate::models::{ApiResponse, Validator};

const PAGE_TITLE: &str = "Validator Downtime Leaderboard";

/// Human-readable downtime: 125 -> "2h 5m", 12.3 -> "12m". Hours are
/// floored, the leftover minutes rounded to nearest; no carry from the
/// minute field into hours (59.6 -> "60m"). Negative input clamps to zero.
pub fn format_downtime(minutes: f64) -> String {
    let minutes = minutes.max(0.0);
    let hours = (minutes / 60.0).floor();
    let mins = (minutes - hours * 60.0).round();

    if hours > 0.0 {
        format!("{}h {}m", hours as u64, mins as u64)
    } else {
        format!("{}m", mins as u64)
    }
}

// Every externally sourced string goes through here before it touches markup.
fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn website_cell(website: Option<&str>) -> String {
    match website {
        Some(url) => {
            let url = escape_html(url);
            format!(r#"<a href="{url}" target="_blank" rel="noopener noreferrer">{url}</a>"#)
        }
        None => "N/A".to_string(),
    }
}

fn table_row(rank: usize, validator: &Validator) -> String {
    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        rank,
        escape_html(&validator.name),
        website_cell(validator.website.as_deref()),
        format_downtime(validator.minutes),
        validator.incidents,
    )
}

fn page_shell(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{PAGE_TITLE}</title>\n\
         <link rel=\"stylesheet\" href=\"styles.css\">\n\
         </head>\n\
         <body>\n\
         {body}\n\
         </body>\n\
         </html>\n"
    )
}

/// Success state: summary header plus one table row per validator, in the
/// order the API returned them.
pub fn render_dashboard(board: &ApiResponse) -> String {
    let mut rows = String::new();
    for (i, validator) in board.data.iter().enumerate() {
        rows.push_str(&table_row(i + 1, validator));
        rows.push('\n');
    }

    let meta = &board.metadata;
    let body = format!(
        "<h1>{PAGE_TITLE}</h1>\n\
         <p class=\"summary\">{} validators tracked &middot; window: {} &middot; as of {}</p>\n\
         <table>\n\
         <thead><tr><th>Rank</th><th>Validator</th><th>Website</th><th>Downtime</th><th>Incidents</th></tr></thead>\n\
         <tbody>\n\
         {rows}</tbody>\n\
         </table>",
        meta.total_validators,
        escape_html(&meta.time_window),
        escape_html(&meta.as_of),
    );
    page_shell(&body)
}

/// Error state: the whole page is the failure description. Still a valid
/// build product.
pub fn render_error(error: &FetchError) -> String {
    let body = format!(
        "<h1>{PAGE_TITLE}</h1>\n\
         <p class=\"error\">Failed to load leaderboard: {}</p>",
        escape_html(&error.to_string()),
    );
    page_shell(&body)
}
