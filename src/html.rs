use crate::models::UserRecord;

const TITLE: &str = "Random users";
const HEADERS: [&str; 3] = ["First Name", "Last Name", "Picture"];

/// Render the complete index document in memory. One header row, then one
/// row per user in the given order, each referencing its thumbnail by the
/// relative filename. Names are treated as plain text and escaped.
pub fn render_index(users: &[UserRecord]) -> String {
    let mut doc = String::from("<!DOCTYPE html>\n<html>\n<head>\n");
    doc.push_str(&format!("<title>{}</title>\n", escape(TITLE)));
    doc.push_str("</head>\n<body>\n<h1>Random users:</h1>\n");
    doc.push_str("<table style=\"width:50%\">\n");

    doc.push_str("<tr>");
    for header in HEADERS {
        doc.push_str(&format!("<th>{}</th>", escape(header)));
    }
    doc.push_str("</tr>\n");

    for user in users {
        doc.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td><img src=\"{}\"></td></tr>\n",
            escape(&user.name.first),
            escape(&user.name.last),
            escape(&user.thumbnail_filename()),
        ));
    }

    doc.push_str("</table>\n</body>\n</html>\n");
    doc
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
