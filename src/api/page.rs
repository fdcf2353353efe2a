//! Server-side rendering of the single page.
//!
//! The page is rebuilt from scratch for every response. User text is always
//! escaped before it is written into the markup.
use base64::Engine;
use std::fmt::Write;

use crate::form::collector::{ImageSize, EXAMPLE_PROMPTS};
use crate::interaction::Download;

const STYLE: &str = r#"
body {
    margin: 0;
    min-height: 100vh;
    background: linear-gradient(to right, #141e30, #243b55);
    color: #ffffff;
    font-family: 'Segoe UI', sans-serif;
    display: flex;
}
aside { width: 260px; padding: 24px; background-color: #00000030; }
main { flex: 1; max-width: 720px; margin: 0 auto; padding: 32px; }
.title { font-size: 2.8em; font-weight: bold; text-align: center; margin-bottom: 5px; color: #00c6ff; }
.subtitle { font-size: 1.1em; text-align: center; color: #eeeeee; margin-bottom: 30px; }
textarea { width: 100%; height: 100px; border-radius: 8px; padding: 8px; box-sizing: border-box; }
button, .download {
    background-color: #00c6ff;
    color: #000000;
    border-radius: 8px;
    padding: 0.6em 1.4em;
    font-weight: bold;
    border: none;
    text-decoration: none;
    display: inline-block;
    margin-top: 12px;
    transition: background 0.3s ease;
}
button:hover, .download:hover { background-color: #7df9ff; }
.image-box {
    text-align: center;
    padding: 20px;
    background-color: #ffffff10;
    border-radius: 12px;
    box-shadow: 0px 4px 20px rgba(0,0,0,0.2);
    margin-top: 20px;
}
.image-box img { max-width: 100%; }
.warning { background: #5c4a00; padding: 12px; border-radius: 8px; margin-top: 16px; }
.error { background: #5c0011; padding: 12px; border-radius: 8px; margin-top: 16px; }
.footer { text-align: center; font-size: 0.9em; margin-top: 50px; color: #bbbbbb; }
"#;

/// Everything one render needs.
#[derive(Debug, Default)]
pub struct PageView<'a> {
    pub prompt: &'a str,
    pub size: ImageSize,
    pub warning: Option<String>,
    pub error: Option<String>,
    pub image_url: Option<&'a str>,
    pub download: Option<Download<'a>>,
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

fn data_uri(download: &Download<'_>) -> String {
    format!(
        "data:{};base64,{}",
        download.mime,
        base64::engine::general_purpose::STANDARD.encode(download.bytes)
    )
}

pub fn render_page(view: &PageView<'_>) -> String {
    let mut html = String::new();
    // Writing into a String cannot fail.
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>AI Image Generator</title>\n<style>{}</style>\n</head>\n<body>\n",
        STYLE
    );

    html.push_str("<aside>\n<h2>Image Configuration</h2>\n<p>Try prompts like:</p>\n<ul>\n");
    for example in EXAMPLE_PROMPTS {
        let _ = writeln!(html, "<li>{}</li>", escape_html(example));
    }
    html.push_str("</ul>\n</aside>\n<main>\n");

    html.push_str("<div class=\"title\">AI Image Generator</div>\n");
    html.push_str("<div class=\"subtitle\">Turn your ideas into images using OpenAI DALL\u{b7}E</div>\n");

    html.push_str("<form method=\"post\" action=\"/generate\">\n");
    html.push_str("<label for=\"prompt\">Describe your image</label>\n");
    let _ = writeln!(
        html,
        "<textarea id=\"prompt\" name=\"prompt\" placeholder=\"e.g. A robot painting a portrait of a cat\">{}</textarea>",
        escape_html(view.prompt)
    );
    html.push_str("<label for=\"size\">Choose image size</label>\n<select id=\"size\" name=\"size\">\n");
    for size in ImageSize::ALL {
        let selected = if size == view.size { " selected" } else { "" };
        let _ = writeln!(html, "<option value=\"{0}\"{1}>{0}</option>", size, selected);
    }
    html.push_str("</select>\n<button type=\"submit\">Generate Image</button>\n</form>\n");

    if let Some(warning) = &view.warning {
        let _ = writeln!(html, "<div class=\"warning\">{}</div>", escape_html(warning));
    }
    if let Some(error) = &view.error {
        let _ = writeln!(html, "<div class=\"error\">{}</div>", escape_html(error));
    }
    if let Some(url) = view.image_url {
        let _ = writeln!(
            html,
            "<div class=\"image-box\"><img src=\"{}\" alt=\"Your AI-generated image\"><p>Your AI-generated image</p></div>",
            escape_html(url)
        );
    }
    if let Some(download) = &view.download {
        let _ = writeln!(
            html,
            "<a class=\"download\" href=\"{}\" download=\"{}\">Download Image</a>",
            data_uri(download),
            download.file_name
        );
    }

    html.push_str("<div class=\"footer\">Created by PKK</div>\n</main>\n</body>\n</html>\n");
    html
}
