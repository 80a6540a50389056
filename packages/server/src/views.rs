//! HTML pages for the browser-facing routes.

use crate::models::student::LeaderboardEntry;

const STYLE: &str = "body{font-family:sans-serif;max-width:40rem;margin:2rem auto}\
label{display:block;margin-top:.75rem}\
.flash{padding:.5rem;background:#eef;border:1px solid #99c}\
table{border-collapse:collapse}td,th{padding:.25rem 1rem;border-bottom:1px solid #ccc}";

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>{STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        title = escape(title),
    )
}

pub fn index_page(flash: Option<&str>) -> String {
    let flash = flash
        .map(|msg| format!("<p class=\"flash\">{}</p>\n", escape(msg)))
        .unwrap_or_default();

    let body = format!(
        "<h1>Student Performance</h1>\n{flash}\
         <form method=\"post\" action=\"/submit\">\n\
         <label>Name <input type=\"text\" name=\"studentName\" required></label>\n\
         <label>Batch <input type=\"text\" name=\"batch\" required></label>\n\
         <label>Academic performance <input type=\"text\" name=\"academicPerformance\" \
         inputmode=\"numeric\" required></label>\n\
         <label>Hackathons <input type=\"text\" name=\"hackathons\" \
         inputmode=\"numeric\" required></label>\n\
         <label>Papers presented <input type=\"text\" name=\"papers\" \
         inputmode=\"numeric\" required></label>\n\
         <p><button type=\"submit\">Submit</button></p>\n\
         </form>\n\
         <p><a href=\"/top_students\">Top students</a></p>\n"
    );

    layout("Student Performance", &body)
}

pub fn leaderboard_page(entries: &[LeaderboardEntry]) -> String {
    let rows: String = entries
        .iter()
        .enumerate()
        .map(|(rank, entry)| {
            let score = entry
                .overall_score
                .map(|s| format!("{s:.2}"))
                .unwrap_or_else(|| "pending".into());
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                rank + 1,
                escape(&entry.name),
                score
            )
        })
        .collect();

    let table = if entries.is_empty() {
        "<p>No students yet.</p>\n".to_string()
    } else {
        format!(
            "<table>\n<tr><th>#</th><th>Name</th><th>Overall score</th></tr>\n{rows}</table>\n"
        )
    };

    let body = format!("<h1>Top Students</h1>\n{table}<p><a href=\"/\">Back</a></p>\n");
    layout("Top Students", &body)
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
