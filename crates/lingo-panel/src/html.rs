//! Generated HTML for the panel pages.
//!
//! All three pages (source editor, target editor, control bar) are inline
//! strings — no bundled assets, no navigation. Text content always moves
//! over IPC after the page reports ready, so nothing user-controlled is
//! ever interpolated into markup.

/// Escape text for safe embedding in HTML content or attribute values.
fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const PAGE_STYLE: &str = "\
html, body { margin: 0; height: 100%; font-family: system-ui, sans-serif; }\n\
.pane { display: flex; flex-direction: column; height: 100%; box-sizing: border-box; }\n\
.pane h2 { margin: 0; padding: 8px 12px; font-size: 14px; border-bottom: 1px solid #ccc; }\n\
textarea { flex: 1; width: 100%; border: none; outline: none; resize: none; \
padding: 12px; box-sizing: border-box; font-family: monospace; font-size: 13px; }\n\
.bar { display: flex; align-items: center; gap: 12px; height: 100%; padding: 0 12px; \
box-sizing: border-box; }\n\
button { padding: 8px 24px; font-size: 14px; cursor: pointer; }\n\
button:disabled { cursor: default; opacity: 0.6; }\n\
.error { color: #c62828; font-size: 13px; display: none; }\n";

/// Build the page for an editor pane.
///
/// Editable panes post `source_changed` on every input; read-only panes
/// only ever receive `set_text`. Both announce `editor_ready` so the shell
/// can push the initial text.
pub fn editor_page(title: &str, placeholder: &str, read_only: bool) -> String {
    let readonly_attr = if read_only { " readonly" } else { "" };
    let change_wiring = if read_only {
        String::new()
    } else {
        "area.addEventListener('input', function () {\n\
         window.lingo.ipc.send('source_changed', area.value);\n\
         });\n"
            .to_string()
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
{style}</style>
</head>
<body>
<div class="pane">
<h2>{title}</h2>
<textarea id="code" placeholder="{placeholder}" spellcheck="false"{readonly_attr}></textarea>
</div>
<script>
(function () {{
    var area = document.getElementById('code');
    {change_wiring}window.lingo.ipc.on('set_text', function (p) {{
        area.value = (p && p.text) || '';
    }});
    window.lingo.ipc.send('editor_ready', null);
}})();
</script>
</body>
</html>
"#,
        style = PAGE_STYLE,
        title = html_escape(title),
        placeholder = html_escape(placeholder),
        readonly_attr = readonly_attr,
        change_wiring = change_wiring,
    )
}

/// Build the control bar page: the convert trigger and the error banner.
pub fn control_bar_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
{style}</style>
</head>
<body>
<div class="bar">
<button id="convert">Convert</button>
<span id="error" class="error"></span>
</div>
<script>
(function () {{
    var button = document.getElementById('convert');
    var error = document.getElementById('error');
    button.addEventListener('click', function () {{
        window.lingo.ipc.send('convert_clicked', null);
    }});
    window.lingo.ipc.on('set_busy', function (p) {{
        var busy = !!(p && p.busy);
        button.disabled = busy;
        button.textContent = busy ? 'Converting...' : 'Convert';
    }});
    window.lingo.ipc.on('set_error', function (p) {{
        var message = p && p.message;
        error.textContent = message || '';
        error.style.display = message ? 'inline' : 'none';
    }});
    window.lingo.ipc.send('editor_ready', null);
}})();
</script>
</body>
</html>
"#,
        style = PAGE_STYLE,
    )
}
