//! Vocabulary: mapping between character ids and characters.

use std::collections::HashMap;

/// Maps ids to characters and back. Ids are contiguous from `0` to `len - 1`.
#[derive(Clone, Debug)]
pub struct Vocab {
    id_to_char: Vec<char>,
    char_to_id: HashMap<char, usize>,
}

impl Vocab {
    /// Builds a vocab with the given characters in order. Duplicates are skipped (first occurrence wins).
    #[must_use]
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut id_to_char = Vec::new();
        let mut char_to_id = HashMap::new();
        for ch in chars {
            if char_to_id.contains_key(&ch) {
                continue;
            }
            char_to_id.insert(ch, id_to_char.len());
            id_to_char.push(ch);
        }
        Vocab {
            id_to_char,
            char_to_id,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.id_to_char.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id_to_char.is_empty()
    }

    /// Returns the character for `id`, or `None` if out of range.
    #[must_use]
    pub fn get_char(&self, id: usize) -> Option<char> {
        self.id_to_char.get(id).copied()
    }

    /// Returns the id for `ch`, or `None` if not in vocab.
    #[must_use]
    pub fn get_id(&self, ch: char) -> Option<usize> {
        self.char_to_id.get(&ch).copied()
    }

    /// Characters in id order.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.id_to_char
    }
}
