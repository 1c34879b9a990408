/// Class code → display symbol for the recognized Sinhala sign alphabet.
/// Fixed at build time; codes are the class names the bundled snapshots use.
const LETTERS: [(&str, &str); 14] = [
    ("ah", "අ"),
    ("ahh", "ආ"),
    ("aeh", "ඇ"),
    ("ee", "ඉ"),
    ("eeh", "ඊ"),
    ("uh", "උ"),
    ("uhh", "ඌ"),
    ("a", "එ"),
    ("ae", "ඒ"),
    ("o", "ඔ"),
    ("ohh", "ඕ"),
    ("k", "ක්"),
    ("ig", "ග්"),
    ("t", "ටී"),
];

/// Unknown codes map to the empty string, never an error.
pub fn symbol_for(code: &str) -> &'static str {
    LETTERS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, symbol)| *symbol)
        .unwrap_or("")
}

/// Running text accumulated from confirmed predictions.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Appends the symbol for a confirmed class code; a no-op for codes
    /// outside the alphabet.
    pub fn append_confirmed(&mut self, code: &str) {
        self.text.push_str(symbol_for(code));
    }

    pub fn append_space(&mut self) {
        self.text.push(' ');
    }

    /// Removes the last char, one combining mark at a time.
    pub fn delete_last(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}
