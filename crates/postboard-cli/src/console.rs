//! Console rendering of the virtual document.
//!
//! `render_document` is pure string building so it can be snapshot
//! tested; `ConsoleView` owns the terminal concerns (color on ttys,
//! status lines).

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use postboard_engine::{Document, NodeId};

/// Render the employee list and the main container as plain text.
/// Hidden comment sections and empty text lines are elided.
pub fn render_document(doc: &Document) -> String {
    let mut out = String::new();

    out.push_str("Employees:\n");
    for option in doc.children_of(doc.select()) {
        let value = doc
            .get(option)
            .and_then(|n| n.option_value)
            .map(|v| v.to_string())
            .unwrap_or_default();
        out.push_str(&format!(
            "  ({}) {}\n",
            value,
            doc.text_of(option).unwrap_or_default()
        ));
    }

    out.push_str("\nPosts:\n");
    for child in doc.children_of(doc.main()) {
        let Some(node) = doc.get(child) else { continue };
        if node.tag == "article" {
            render_post_entry(doc, child, &mut out);
        } else {
            // The no-posts placeholder.
            out.push_str(&format!("  {}\n", node.text));
        }
    }
    out
}

fn render_post_entry(doc: &Document, article: NodeId, out: &mut String) {
    for child in doc.children_of(article) {
        let Some(node) = doc.get(child) else { continue };
        match node.tag.as_str() {
            "h2" => out.push_str(&format!("  {}\n", node.text)),
            "p" if !node.text.is_empty() => out.push_str(&format!("    {}\n", node.text)),
            "button" => out.push_str(&format!("    [{}]\n", node.text)),
            "section" if !node.hidden => {
                out.push_str("    Comments:\n");
                for entry in doc.children_of(child) {
                    render_comment_entry(doc, entry, out);
                }
            }
            _ => {}
        }
    }
}

fn render_comment_entry(doc: &Document, entry: NodeId, out: &mut String) {
    for part in doc.children_of(entry) {
        let Some(node) = doc.get(part) else { continue };
        match node.tag.as_str() {
            "h3" => out.push_str(&format!("      {}\n", node.text)),
            "p" if !node.text.is_empty() => out.push_str(&format!("        {}\n", node.text)),
            _ => {}
        }
    }
}

/// Terminal-facing view: prints the rendered document and status lines,
/// colored only when stdout is a tty.
pub struct ConsoleView {
    color: bool,
}

impl Default for ConsoleView {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleView {
    pub fn new() -> Self {
        Self {
            color: std::io::stdout().is_terminal(),
        }
    }

    pub fn show_document(&self, doc: &Document) {
        let rendered = render_document(doc);
        for line in rendered.lines() {
            if self.color && (line == "Employees:" || line == "Posts:") {
                println!("{}", line.bold());
            } else {
                println!("{}", line);
            }
        }
    }

    pub fn greeting(&self) {
        println!("postboard - employee post browser");
        println!("Commands: <employee id> to select, t <post id> to toggle comments, list, help, q");
    }

    pub fn info(&self, message: &str) {
        if self.color {
            println!("{}", message.dimmed());
        } else {
            println!("{}", message);
        }
    }

    pub fn warn(&self, message: &str) {
        if self.color {
            eprintln!("{}", message.yellow());
        } else {
            eprintln!("{}", message);
        }
    }
}
