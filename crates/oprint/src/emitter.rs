//! Output Emitter
//!
//! Abstraction for output production during rendering. The engine writes
//! lines through an emitter; the string-based implementation is the one
//! used by [`Printer::render`](crate::Printer::render).
//!
//! Indentation is emitted as tab characters, one per nesting level.

/// Trait for emitting rendered output.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self);

    /// Emit indentation as the given number of tab characters.
    fn emit_indent(&mut self, levels: usize);
}

/// String-based emitter for in-memory rendering.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create a new string emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Get the current buffer contents without consuming.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Get the rendered output.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_indent(&mut self, levels: usize) {
        for _ in 0..levels {
            self.buffer.push('\t');
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn string_emitter_basic() {
        let mut emitter = StringEmitter::new();
        emitter.emit("name");
        emitter.emit(" = ");
        emitter.emit("Alice");
        assert_eq!(emitter.output(), "name = Alice");
    }

    #[test]
    fn string_emitter_newline() {
        let mut emitter = StringEmitter::new();
        emitter.emit("line1");
        emitter.emit_newline();
        emitter.emit("line2");
        assert_eq!(emitter.output(), "line1\nline2");
    }

    #[test]
    fn string_emitter_indentation() {
        let mut emitter = StringEmitter::new();
        emitter.emit("Person");
        emitter.emit_newline();
        emitter.emit_indent(1);
        emitter.emit("name");
        emitter.emit_newline();
        emitter.emit_indent(2);
        emitter.emit("nested");
        assert_eq!(emitter.output(), "Person\n\tname\n\t\tnested");
    }

    #[test]
    fn string_emitter_zero_indent() {
        let mut emitter = StringEmitter::new();
        emitter.emit_indent(0);
        emitter.emit("top");
        assert_eq!(emitter.as_str(), "top");
    }
}
