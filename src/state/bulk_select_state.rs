//! BulkSelectState - "Select first N rows" popover state
//!
//! Transient view state only. Nothing here touches the selection set; the
//! controller reads [`BulkSelectState::submit`] and forwards the value.

/// Longest accepted input, in digits
const MAX_DIGITS: usize = 4;

/// State of the bulk-select popover next to the title header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkSelectState {
    open: bool,
    input: String,
}

impl BulkSelectState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current raw input
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Parsed input, if any
    pub fn value(&self) -> Option<usize> {
        self.input.parse().ok()
    }

    /// Open or close the popover; closing resets the input
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open = true;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.input.clear();
    }

    /// Set the value from the picker
    pub fn pick(&mut self, n: usize) {
        self.input = n.to_string();
    }

    /// Append a typed character; non-digits are ignored
    pub fn push_digit(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() || self.input.len() >= MAX_DIGITS {
            return false;
        }
        if self.input == "0" {
            self.input.clear();
        }
        self.input.push(c);
        true
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Take the entered value and close the popover
    ///
    /// An empty input yields `Some(0)`, which callers treat as out of range.
    pub fn submit(&mut self) -> Option<usize> {
        let value = if self.input.is_empty() {
            Some(0)
        } else {
            self.value()
        };
        self.close();
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_close_reset_input() {
        let mut state = BulkSelectState::default();
        state.toggle();
        assert!(state.is_open());
        state.pick(5);
        assert_eq!(state.value(), Some(5));
        state.toggle();
        assert!(!state.is_open());
        assert_eq!(state.input(), "");
    }

    #[test]
    fn test_typing() {
        let mut state = BulkSelectState::default();
        assert!(state.push_digit('0'));
        assert!(state.push_digit('7'));
        assert_eq!(state.input(), "7");
        assert!(!state.push_digit('x'));
        assert!(state.push_digit('2'));
        assert_eq!(state.value(), Some(72));
        state.backspace();
        assert_eq!(state.value(), Some(7));
    }

    #[test]
    fn test_input_length_is_bounded() {
        let mut state = BulkSelectState::default();
        for _ in 0..MAX_DIGITS {
            assert!(state.push_digit('9'));
        }
        assert!(!state.push_digit('9'));
        assert_eq!(state.value(), Some(9999));
    }

    #[test]
    fn test_submit_closes() {
        let mut state = BulkSelectState::default();
        state.toggle();
        state.pick(3);
        assert_eq!(state.submit(), Some(3));
        assert!(!state.is_open());
        assert_eq!(state.input(), "");

        state.toggle();
        assert_eq!(state.submit(), Some(0));
    }
}
