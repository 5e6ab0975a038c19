use tcpu::Word;

/// A label table in declaration order, so snapshots list labels the way the
/// source introduced them.
pub type LabelTable = Vec<(String, Word)>;

pub fn insert(table: &mut LabelTable, name: &str, value: Word) {
    match table.iter_mut().find(|(existing, _)| existing == name) {
        Some(entry) => entry.1 = value,
        None => table.push((name.to_string(), value)),
    }
}

pub fn lookup(table: &LabelTable, name: &str) -> Option<Word> {
    table
        .iter()
        .find(|(existing, _)| existing == name)
        .map(|(_, value)| *value)
}
