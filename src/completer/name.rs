//! Person-name completion for author and editor fields.
//!
//! A person list separates names with the word `and`, as in
//! `"Einstein, Albert and Boris Podolsky"`. Names are written either as
//! `Last, First` or as `First Last`. Text inside braces is kept together, so
//! `{Barnes and Noble}` is one name rather than two.

use crate::completer::{AutoCompleter, CompleterKind};
use crate::index::PrefixIndex;
use crate::record::Record;

/// Indexes the last name and the full name of every person in one field.
#[derive(Debug, Clone)]
pub struct NameCompleter {
    field: String,
    index: PrefixIndex,
}

impl NameCompleter {
    pub fn new<S: Into<String>>(field: S) -> Self {
        Self::with_index(field, PrefixIndex::new())
    }

    pub fn with_index<S: Into<String>>(field: S, index: PrefixIndex) -> Self {
        NameCompleter {
            field: field.into(),
            index,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

impl AutoCompleter for NameCompleter {
    fn add_record(&mut self, record: &Record) {
        let Some(value) = record.field(&self.field) else {
            return;
        };

        for name in split_names(value) {
            if let Some(last) = last_name(&name) {
                self.index.insert(last);
            }
            self.index.insert(name);
        }
    }

    fn index(&self) -> &PrefixIndex {
        &self.index
    }

    fn index_mut(&mut self) -> &mut PrefixIndex {
        &mut self.index
    }

    fn is_single_unit_field(&self) -> bool {
        false
    }

    fn kind(&self) -> CompleterKind {
        CompleterKind::Name
    }
}

/// Split a person list on top-level `and` separators.
///
/// Braces are removed from the returned names and whitespace is collapsed.
pub fn split_names(value: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut depth: usize = 0;

    for token in value.split_whitespace() {
        if depth == 0 && token == "and" {
            push_name(&mut names, &current);
            current.clear();
            continue;
        }
        for c in token.chars() {
            match c {
                '{' => depth += 1,
                '}' => depth = depth.saturating_sub(1),
                _ => {}
            }
        }
        current.push(token);
    }
    push_name(&mut names, &current);

    names
}

fn push_name(names: &mut Vec<String>, tokens: &[&str]) {
    let name: String = tokens
        .join(" ")
        .chars()
        .filter(|c| *c != '{' && *c != '}')
        .collect();
    let name = name.trim();
    if !name.is_empty() {
        names.push(name.to_string());
    }
}

/// The last name of a single person: the part before the first comma, or the final word.
pub fn last_name(name: &str) -> Option<&str> {
    let last = match name.split_once(',') {
        Some((last, _)) => last.trim(),
        None => name.split_whitespace().last()?,
    };
    if last.is_empty() { None } else { Some(last) }
}
