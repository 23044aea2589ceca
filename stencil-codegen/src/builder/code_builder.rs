//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Indentation-aware buffer that fragments are rendered into.
///
/// # Example
///
/// ```
/// use stencil_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::default();
/// builder
///     .push_line("function main() {")
///     .push_indent()
///     .push_line("run();")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "function main() {\n    run();\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add caller-supplied multi-line text at the current indentation.
    ///
    /// Leading and trailing blank lines are dropped and the common
    /// indentation of the remaining lines is removed. When the text starts
    /// directly with code (no leading newline), its first line is taken as
    /// written and only the following lines are dedented against each other,
    /// which is how text continued from an opening quote is usually laid out.
    pub fn push_text(&mut self, text: &str) -> &mut Self {
        let hugs_quote = !text.starts_with('\n') && !text.starts_with("\r\n");
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();

        let Some(start) = lines.iter().position(|l| !l.is_empty()) else {
            return self;
        };
        let end = lines.iter().rposition(|l| !l.is_empty()).unwrap_or(start);
        let lines = &lines[start..=end];

        let (first, rest) = if hugs_quote {
            (Some(lines[0].trim_start()), &lines[1..])
        } else {
            (None, lines)
        };

        let margin = rest
            .iter()
            .filter(|l| !l.is_empty())
            .map(|l| l.len() - l.trim_start_matches([' ', '\t']).len())
            .min()
            .unwrap_or(0);

        if let Some(first) = first {
            self.push_line(first);
        }
        for line in rest {
            if line.is_empty() {
                self.push_blank();
            } else {
                self.push_line(&line[margin..]);
            }
        }
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Text(s) => {
                self.push_text(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
        }
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_text(text: &str) -> String {
        let mut builder = CodeBuilder::new(Indent::FOUR);
        builder.push_indent().push_text(text);
        builder.build()
    }

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::new(Indent::TWO);
        builder
            .push_line("class A {")
            .push_indent()
            .push_line("x = 1;")
            .push_dedent()
            .push_dedent()
            .push_line("}");
        assert_eq!(builder.build(), "class A {\n  x = 1;\n}\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::default();
        builder.push_indent().push_line("a;").push_blank().push_line("b;");
        assert_eq!(builder.build(), "    a;\n\n    b;\n");
    }

    #[test]
    fn test_text_single_line() {
        assert_eq!(render_text("super();"), "    super();\n");
    }

    #[test]
    fn test_text_hugging_quote_dedents_rest() {
        let text = "if (this.busy) return;\n        this.busy = true;\n        load();";
        assert_eq!(
            render_text(text),
            "    if (this.busy) return;\n    this.busy = true;\n    load();\n"
        );
    }

    #[test]
    fn test_text_hugging_quote_keeps_relative_indent() {
        let text = "if (ok) {\n            run();\n        }";
        assert_eq!(render_text(text), "    if (ok) {\n        run();\n    }\n");
    }

    #[test]
    fn test_text_leading_newline_dedents_all() {
        let text = "\n        const a = 1;\n          const b = 2;\n\n        return a;\n    ";
        assert_eq!(
            render_text(text),
            "    const a = 1;\n      const b = 2;\n\n    return a;\n"
        );
    }

    #[test]
    fn test_text_blank_only_emits_nothing() {
        assert_eq!(render_text("\n   \n"), "");
    }

    #[test]
    fn test_apply_block_fragment() {
        let mut builder = CodeBuilder::default();
        builder.apply_fragment(CodeFragment::block(
            "constructor() {",
            vec![CodeFragment::text("super();")],
            "}",
        ));
        assert_eq!(builder.build(), "constructor() {\n    super();\n}\n");
    }
}
