//! Server-rendered HTML view of a [`Report`]
//!
//! Every snapshot-derived string is escaped before it is embedded into
//! markup; `owner`, `description`, and `hostname` are operator-supplied
//! free text and must never reach the page verbatim.

use crate::report::Report;

/// Escape a string for embedding into HTML text or attribute values
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

/// Render the full report page
pub fn page(report: &Report) -> String {
    page_with_notice(report, None)
}

/// Render the defined error state: a header-only table plus the failure
/// notice. Still a complete, well-formed page.
pub fn error_page(message: &str) -> String {
    page_with_notice(&Report::empty(), Some(message))
}

fn page_with_notice(report: &Report, notice: Option<&str>) -> String {
    let header_cells: String = report
        .headers
        .iter()
        .map(|h| format!("<th>{}</th>", escape_html(h)))
        .collect();

    let rows: String = report.rows.iter().map(row_html).collect();

    let notice_html = match notice {
        Some(message) => format!(
            "<p class=\"notice\">Report unavailable: {}</p>",
            escape_html(message)
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>MeshReport - Peer Status</title>
    <style>
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{
            font-family: system-ui, -apple-system, sans-serif;
            background: #f5f5f5;
            color: #333;
            line-height: 1.6;
            padding: 20px;
        }}
        .container {{ max-width: 1100px; margin: 0 auto; }}
        h1 {{ margin-bottom: 4px; }}
        .subtitle {{ color: #666; margin-bottom: 20px; }}
        .notice {{
            background: #f8d7da;
            color: #721c24;
            padding: 12px 16px;
            border-radius: 6px;
            margin-bottom: 20px;
        }}
        table {{ width: 100%; border-collapse: collapse; background: white; }}
        th, td {{
            padding: 10px 14px;
            text-align: left;
            border-bottom: 1px solid #eee;
        }}
        th {{ background: #f8f9fa; font-weight: 600; color: #555; }}
        tr:hover {{ background: #f8f9fa; }}
        tr.dormant td {{ color: #999; }}
        .status {{ white-space: nowrap; }}
        .status.online {{ color: #155724; }}
        .status.offline {{ color: #721c24; }}
        .last-seen {{ display: block; color: #999; font-size: 0.8em; }}
        .summary {{ margin-top: 14px; color: #666; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>MeshReport</h1>
        <p class="subtitle">Peer connectivity report</p>
        {notice}
        <table>
            <thead>
                <tr>{headers}</tr>
            </thead>
            <tbody>
{rows}            </tbody>
        </table>
        <p class="summary"><em>{summary}</em></p>
    </div>
</body>
</html>
"#,
        notice = notice_html,
        headers = header_cells,
        rows = rows,
        summary = escape_html(&report.summary),
    )
}

fn row_html(row: &crate::report::PeerRow) -> String {
    let hostname = escape_html(&row.hostname);
    let row_class = if row.dormant { "peer dormant" } else { "peer" };

    format!(
        concat!(
            "                <tr id=\"peer-{id}\" class=\"{class}\">\n",
            "                    <td class=\"hostname\" title=\"{fqdn}\">{hostname}",
            "<span class=\"last-seen\">{hostname} &middot; {last_seen}</span></td>\n",
            "                    <td class=\"status {status}\" title=\"{tooltip}\">{status}</td>\n",
            "                    <td class=\"ip\">{ip}</td>\n",
            "                    <td class=\"owner\">{owner}</td>\n",
            "                    <td class=\"description\">{description}</td>\n",
            "                    <td class=\"up\">{up}</td>\n",
            "                    <td class=\"down\">{down}</td>\n",
            "                </tr>\n",
        ),
        id = hostname,
        class = row_class,
        fqdn = escape_html(&row.hostname_tooltip),
        hostname = hostname,
        last_seen = escape_html(&row.last_handshake),
        status = escape_html(&row.status_label),
        tooltip = escape_html(&row.status_tooltip),
        ip = escape_html(&row.ip),
        owner = escape_html(&row.owner),
        description = escape_html(&row.description),
        up = escape_html(&row.receive_bytes_si),
        down = escape_html(&row.transmit_bytes_si),
    )
}
