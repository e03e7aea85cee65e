use crate::domain::guidance::{
    ANALYZED_FIELDS, DISCLAIMER, EXAMPLE_TEXT, FIRST_AID_GUIDE, FIRST_AID_WARNING, INPUT_HELP,
    USAGE_GUIDE,
};
use crate::domain::{Notice, Session};

/// Everything the page needs for one render.
pub struct PageView<'a> {
    pub session: &'a Session,
    pub notice: Option<&'a Notice>,
    pub credential_configured: bool,
    pub init_error: Option<&'a str>,
    pub model: &'a str,
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

pub fn render(view: &PageView<'_>) -> String {
    let mut body = String::new();
    body.push_str(&render_sidebar(view));
    body.push_str("<main>\n<h1>&#x1F6A8; Hazardous Substance First Aid</h1>\n<hr>\n");
    if let Some(err) = view.init_error {
        body.push_str(&format!(
            "<div class=\"notice error\">{}</div>\n",
            escape_html(err)
        ));
    }
    body.push_str(&render_form(view.session));
    if let Some(notice) = view.notice {
        body.push_str(&render_notice(notice));
    }
    if let Some(result) = view.session.result() {
        body.push_str(&render_result(result));
    }
    body.push_str(&render_first_aid());
    body.push_str(&format!(
        "<hr>\n<footer>&#x1F4A1; {}</footer>\n</main>\n",
        escape_html(DISCLAIMER)
    ));

    format!("{PAGE_HEAD}{body}{PAGE_SCRIPT}</body>\n</html>\n")
}

fn render_sidebar(view: &PageView<'_>) -> String {
    let steps: String = USAGE_GUIDE
        .iter()
        .map(|s| format!("<li>{}</li>", escape_html(s)))
        .collect();
    let fields: String = ANALYZED_FIELDS
        .iter()
        .map(|s| format!("<li>{}</li>", escape_html(s)))
        .collect();
    let key_status = if view.credential_configured {
        "&#x2705; Configured"
    } else {
        "&#x274C; Not configured"
    };

    format!(
        "<aside>\n<h2>&#x1F4CB; Usage Guide</h2>\n<div class=\"info\"><ol>{steps}</ol>\
         <strong>Analyzed fields:</strong><ul>{fields}</ul></div>\n\
         <div class=\"metric\"><span>API Key Status</span><strong id=\"key-status\">{key_status}</strong></div>\n\
         <div class=\"metric\"><span>Model</span><strong>{}</strong></div>\n</aside>\n",
        escape_html(view.model)
    )
}

fn render_form(session: &Session) -> String {
    format!(
        "<h3>&#x1F4AC; Describe the exposure</h3>\n\
         <form id=\"triage-form\" method=\"post\" action=\"/action\">\n\
         <label for=\"input\">Please describe the situation in detail</label>\n\
         <textarea id=\"input\" name=\"input\" rows=\"7\" placeholder=\"{}\" title=\"{}\">{}</textarea>\n\
         <div class=\"buttons\">\n\
         <button type=\"submit\" name=\"action\" value=\"load_example\" class=\"secondary\">&#x1F4DD; Load example</button>\n\
         <button type=\"submit\" name=\"action\" value=\"submit\" class=\"primary\">&#x1F50D; Analyze</button>\n\
         <button type=\"submit\" name=\"action\" value=\"clear\">&#x1F504; Clear</button>\n\
         </div>\n<p id=\"progress\" hidden>&#x1F916; AI is analyzing...</p>\n</form>\n",
        escape_html(EXAMPLE_TEXT),
        escape_html(INPUT_HELP),
        escape_html(session.input_text())
    )
}

fn render_notice(notice: &Notice) -> String {
    match notice {
        Notice::Success(msg) => format!(
            "<div class=\"notice success\">&#x2705; {}</div>\n",
            escape_html(msg)
        ),
        Notice::Warning(msg) => format!(
            "<div class=\"notice warning\">&#x26A0;&#xFE0F; {}</div>\n",
            escape_html(msg)
        ),
        Notice::Error {
            message,
            diagnostics,
        } => {
            let mut out = format!(
                "<div class=\"notice error\">&#x274C; {}</div>\n",
                escape_html(message)
            );
            if let Some(d) = diagnostics {
                let checklist: String = d
                    .checklist
                    .iter()
                    .enumerate()
                    .map(|(i, step)| format!("{}. {}\n", i + 1, escape_html(step)))
                    .collect();
                out.push_str(&format!(
                    "<details class=\"debug\"><summary>&#x1F527; Debug information</summary>\n\
                     <p><strong>API key status:</strong> {}</p>\n\
                     <p><strong>Error message:</strong> {}</p>\n\
                     <pre>How to fix:\n{}</pre>\n</details>\n",
                    if d.credential_configured { "configured" } else { "not configured" },
                    escape_html(&d.detail),
                    checklist
                ));
            }
            out
        }
    }
}

fn render_result(result: &str) -> String {
    format!(
        "<hr>\n<section id=\"result-section\">\n<h3>&#x1F4CA; Analysis Result</h3>\n\
         <div class=\"info\" id=\"result\">{}</div>\n\
         <button type=\"button\" id=\"copy-result\" title=\"Copy the result to the clipboard\">&#x1F4CB; Copy result</button>\n\
         <span id=\"toast\" hidden>&#x2705; Copied to clipboard!</span>\n</section>\n",
        escape_html(result)
    )
}

fn render_first_aid() -> String {
    let sections: String = FIRST_AID_GUIDE
        .iter()
        .map(|section| {
            let steps: String = section
                .steps
                .iter()
                .map(|s| format!("<li>{}</li>", escape_html(s)))
                .collect();
            format!(
                "<p><strong>{}:</strong></p><ul>{}</ul>\n",
                escape_html(section.title),
                steps
            )
        })
        .collect();

    format!(
        "<details class=\"first-aid\"><summary>&#x1F3E5; General First-Aid Guide</summary>\n\
         <p><strong>&#x26A0;&#xFE0F; {}</strong></p>\n{}</details>\n",
        escape_html(FIRST_AID_WARNING),
        sections
    )
}

const PAGE_HEAD: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Hazardous Substance First Aid</title>
<style>
body { font-family: system-ui, sans-serif; margin: 0; display: flex; color: #262730; }
aside { width: 260px; padding: 1.5rem; background: #f0f2f6; min-height: 100vh; }
main { max-width: 720px; margin: 0 auto; padding: 2rem; flex: 1; }
textarea { width: 100%; box-sizing: border-box; font: inherit; padding: .5rem; }
.buttons { display: flex; gap: .5rem; margin: .75rem 0; }
button { padding: .5rem 1rem; border-radius: .4rem; border: 1px solid #ccc; background: #fff; cursor: pointer; }
button.primary { background: #ff4b4b; color: #fff; border-color: #ff4b4b; }
.info { background: #e8f0fe; padding: 1rem; border-radius: .4rem; white-space: pre-wrap; }
.notice { padding: .75rem 1rem; border-radius: .4rem; margin: .75rem 0; }
.success { background: #dff5e3; }
.warning { background: #fff6d6; }
.error { background: #fde2e2; }
.metric { margin-top: 1rem; display: flex; flex-direction: column; }
details { margin: 1rem 0; }
footer { color: #777; font-size: .85rem; }
</style>
</head>
<body>
"##;

const PAGE_SCRIPT: &str = r##"<script>
const form = document.getElementById("triage-form");
form.addEventListener("submit", (e) => {
  if (e.submitter && e.submitter.value === "submit") {
    document.getElementById("progress").hidden = false;
  }
  setTimeout(() => form.querySelectorAll("button").forEach((b) => (b.disabled = true)), 0);
});
const copy = document.getElementById("copy-result");
if (copy) {
  copy.addEventListener("click", async () => {
    await navigator.clipboard.writeText(document.getElementById("result").innerText);
    document.getElementById("toast").hidden = false;
  });
}
</script>
"##;
