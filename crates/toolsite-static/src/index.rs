//! Launcher index page generation.

use minijinja::{context, AutoEscape, Environment};
use toolsite_manifest::ToolSpec;

/// A link card on the index page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Card {
    /// Visible label
    pub name: String,
    /// Secondary text
    pub description: String,
    /// Link target, relative to the index page
    pub href: String,
}

impl Card {
    pub fn from_tool(tool: &ToolSpec) -> Self {
        Self {
            name: tool.display_name().to_string(),
            description: tool.description_or_default().to_string(),
            href: format!("./{}", tool.output),
        }
    }
}

/// Builds the launcher page listing every tool.
///
/// Values are written verbatim by default since manifests are authored by
/// the site operator. Enable `escape_html` when that does not hold.
pub struct IndexBuilder {
    env: Environment<'static>,
}

impl IndexBuilder {
    pub fn new(escape_html: bool) -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(move |_| {
            if escape_html {
                AutoEscape::Html
            } else {
                AutoEscape::None
            }
        });

        Self { env }
    }

    /// Render the index page for `tools`, keeping their order.
    pub fn build(
        &self,
        site_title: &str,
        tools: &[ToolSpec],
    ) -> Result<String, minijinja::Error> {
        let cards: Vec<Card> = tools.iter().map(Card::from_tool).collect();

        self.env.render_str(
            INDEX_TEMPLATE,
            context! {
                site_title => site_title,
                cards => cards,
            },
        )
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Render the index page without escaping.
pub fn build_index(site_title: &str, tools: &[ToolSpec]) -> Result<String, minijinja::Error> {
    IndexBuilder::default().build(site_title, tools)
}

const INDEX_TEMPLATE: &str = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{{ site_title }}</title>
  <style>
    body {
      font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif;
      background: #0b1020;
      color: #eef1ff;
      margin: 0;
      padding: 40px;
    }
    h1 { margin: 0 0 18px; }
    .grid {
      display: grid;
      gap: 14px;
      grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
      margin-top: 18px;
    }
    .tool {
      display: block;
      padding: 16px 18px;
      border-radius: 12px;
      background: rgba(255,255,255,0.08);
      text-decoration: none;
      color: inherit;
      transition: transform 0.08s ease, background 0.2s ease;
    }
    .tool:hover {
      background: rgba(255,255,255,0.14);
      transform: translateY(-1px);
    }
    .name { font-size: 18px; font-weight: 650; }
    .desc { margin-top: 6px; font-size: 13px; opacity: 0.72; line-height: 1.35; }
    footer { margin-top: 40px; font-size: 12px; opacity: 0.5; }
  </style>
</head>
<body>
  <h1>{{ site_title }}</h1>
  <div class="grid">
    {%- for card in cards %}
    <a class="tool" href="{{ card.href }}">
      <div class="name">{{ card.name }}</div>
      <div class="desc">{{ card.description }}</div>
    </a>
    {%- endfor %}
  </div>
  <footer>Internal tools — please do not share externally</footer>
</body>
</html>
"##;
