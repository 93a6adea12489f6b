//! HTML preview rendering engine.
//!
//! The preview pane never interprets markup live; a [`PreviewDoc`] is built
//! once per view from the content handle and rendered as inert styled text.
//! This is a display transform, not an HTML parser: block-level tags break
//! lines, inline tags vanish, script/style/comment content is dropped, and
//! entities are decoded. Everything else passes through as text.

/// Block-level classification for each produced line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading(u8),
    ListItem,
    Pre,
    Rule,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLine {
    pub kind: BlockKind,
    pub text: String,
}

/// The rendered output for one record's content.
#[derive(Debug, Clone, Default)]
pub struct PreviewDoc {
    /// Contents of the document's `<title>`, when present.
    pub title: Option<String>,
    pub lines: Vec<PreviewLine>,
}

impl PreviewDoc {
    pub fn parse(src: &str) -> Self {
        Parser::new(src).run()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

// ---------------------------------------------------------------------------
// Tokenizing parser
// ---------------------------------------------------------------------------

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    doc: PreviewDoc,
    block: String,
    kind: BlockKind,
    /// Inside `<pre>`: whitespace is preserved and lines split on newline.
    pre_depth: usize,
    /// Inside `<script>`/`<style>`: content is dropped until the closing tag.
    raw_until: Option<&'static str>,
    /// Inside `<title>`: text accumulates into the doc title.
    in_title: bool,
    title: String,
    list_depth: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            doc: PreviewDoc::default(),
            block: String::new(),
            kind: BlockKind::Paragraph,
            pre_depth: 0,
            raw_until: None,
            in_title: false,
            title: String::new(),
            list_depth: 0,
        }
    }

    fn run(mut self) -> PreviewDoc {
        while self.pos < self.src.len() {
            if let Some(closer) = self.raw_until {
                self.skip_raw_text(closer);
                continue;
            }

            let rest = &self.src[self.pos..];
            if rest.starts_with("<!--") {
                self.skip_comment();
            } else if rest.starts_with('<') {
                self.handle_tag();
            } else {
                self.take_text();
            }
        }

        self.flush_block();
        if !self.title.trim().is_empty() {
            self.doc.title = Some(collapse_whitespace(&self.title));
        }
        self.doc
    }

    fn take_text(&mut self) {
        let rest = &self.src[self.pos..];
        let end = rest.find('<').unwrap_or(rest.len());
        let text = &rest[..end];
        self.pos += end;

        if self.in_title {
            self.title.push_str(&decode_entities(text));
            return;
        }

        if self.pre_depth > 0 {
            for (i, segment) in decode_entities(text).split('\n').enumerate() {
                if i > 0 {
                    self.flush_block();
                    self.kind = BlockKind::Pre;
                }
                self.block.push_str(segment);
            }
            return;
        }

        self.block.push_str(&decode_entities(text));
    }

    fn skip_comment(&mut self) {
        let rest = &self.src[self.pos..];
        match rest.find("-->") {
            Some(end) => self.pos += end + 3,
            None => self.pos = self.src.len(),
        }
    }

    fn skip_raw_text(&mut self, closer: &'static str) {
        let rest = &self.src[self.pos..];
        let lower = rest.to_ascii_lowercase();
        match lower.find(closer) {
            Some(at) => {
                let after = at + closer.len();
                let tail = &rest[after..];
                let gt = tail.find('>').map(|i| after + i + 1).unwrap_or(rest.len());
                self.pos += gt;
                self.raw_until = None;
            }
            None => self.pos = self.src.len(),
        }
    }

    fn handle_tag(&mut self) {
        let rest = &self.src[self.pos..];
        let Some(end) = rest.find('>') else {
            // Unterminated tag: drop the remainder.
            self.pos = self.src.len();
            return;
        };
        let inner = &rest[1..end];
        self.pos += end + 1;

        let (name, closing) = match inner.strip_prefix('/') {
            Some(n) => (n, true),
            None => (inner, false),
        };
        let name: String = name
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        match name.as_str() {
            "script" | "style" if !closing => {
                self.raw_until = if name == "script" {
                    Some("</script")
                } else {
                    Some("</style")
                };
            }
            "title" => self.in_title = !closing,
            "br" => {
                self.flush_block();
            }
            "hr" => {
                self.flush_block();
                self.doc.lines.push(PreviewLine {
                    kind: BlockKind::Rule,
                    text: String::new(),
                });
            }
            "pre" => {
                self.flush_block();
                if closing {
                    self.pre_depth = self.pre_depth.saturating_sub(1);
                    if self.pre_depth == 0 {
                        self.kind = BlockKind::Paragraph;
                    }
                } else {
                    self.pre_depth += 1;
                    self.kind = BlockKind::Pre;
                }
            }
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                self.flush_block();
                if !closing {
                    let level = name.as_bytes()[1] - b'0';
                    self.kind = BlockKind::Heading(level);
                }
            }
            "li" => {
                self.flush_block();
                if !closing {
                    self.kind = BlockKind::ListItem;
                }
            }
            "ul" | "ol" => {
                self.flush_block();
                if closing {
                    self.list_depth = self.list_depth.saturating_sub(1);
                } else {
                    self.list_depth += 1;
                }
            }
            // Other block-level boundaries just terminate the current line.
            "p" | "div" | "section" | "article" | "header" | "footer" | "main" | "nav"
            | "aside" | "table" | "tr" | "thead" | "tbody" | "blockquote" | "form"
            | "figure" | "figcaption" | "dl" | "dt" | "dd" | "body" | "head" | "html" => {
                self.flush_block();
            }
            // Inline tags (b, i, span, a, td, ...) contribute nothing.
            _ => {}
        }
    }

    fn flush_block(&mut self) {
        let text = if self.kind == BlockKind::Pre {
            std::mem::take(&mut self.block)
        } else {
            collapse_whitespace(&std::mem::take(&mut self.block))
        };

        if !text.is_empty() {
            let text = match self.kind {
                BlockKind::ListItem => {
                    let indent = "  ".repeat(self.list_depth.saturating_sub(1));
                    format!("{indent}• {text}")
                }
                _ => text,
            };
            self.doc.lines.push(PreviewLine {
                kind: self.kind,
                text,
            });
        }

        self.kind = if self.pre_depth > 0 {
            BlockKind::Pre
        } else {
            BlockKind::Paragraph
        };
    }
}

// ---------------------------------------------------------------------------
// Text helpers
// ---------------------------------------------------------------------------

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
    }
    out
}

fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        // Byte-wise scan: a 16-byte window may end mid-codepoint.
        let semi = rest.as_bytes().iter().take(16).position(|&b| b == b';');
        let Some(semi) = semi else {
            out.push('&');
            rest = &rest[1..];
            continue;
        };

        let entity = &rest[1..semi];
        match decode_entity(entity) {
            Some(decoded) => out.push_str(&decoded),
            None => out.push_str(&rest[..semi + 1]),
        }
        rest = &rest[semi + 1..];
    }
    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<String> {
    let decoded = match entity {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => " ",
        _ => {
            let code = entity
                .strip_prefix("#x")
                .or_else(|| entity.strip_prefix("#X"))
                .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                .or_else(|| entity.strip_prefix('#').and_then(|dec| dec.parse().ok()))?;
            return char::from_u32(code).map(String::from);
        }
    };
    Some(decoded.to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/preview.rs"]
mod tests;
