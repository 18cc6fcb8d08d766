use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

/// Read side of the field capability set: a record that can answer "what is
/// the value of the field named `name`?".
pub trait FieldSource {
    fn field(&self, name: &str) -> Option<&str>;
}

/// Write side of the field capability set: a slot made of named text cells.
pub trait FieldTarget {
    /// Visits the names of this slot's field cells, in display order.
    fn field_names(&self, emit: &mut dyn FnMut(&str));

    /// Writes `value` as the text content of the named cell. Unknown names
    /// are ignored.
    fn set_field_text(&mut self, name: &str, value: &str);
}

/// Default fill: for every field cell the slot declares, write the record's
/// same-named value as its text.
///
/// Never fails: a record missing a field blanks that cell instead. Pass this
/// straight to [`rowlist::RowListOptions::new`] as the fill callback.
pub fn fill_fields<S, R>(slot: &mut S, record: &R)
where
    S: FieldTarget + ?Sized,
    R: FieldSource + ?Sized,
{
    let mut names: Vec<String> = Vec::new();
    slot.field_names(&mut |name| names.push(String::from(name)));
    for name in &names {
        let value = record.field(name).unwrap_or("");
        slot.set_field_text(name, value);
    }
}

impl FieldSource for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// A plain text-cell slot for hosts (and tests) that only need named text.
///
/// Cell order is the declaration order and never changes; cloning a template
/// row yields independent cells, so pooled slots stay independently mutable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextRow {
    cells: Vec<(String, String)>,
}

impl TextRow {
    /// An empty template row with the given field cells.
    pub fn new<I, N>(field_names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self {
            cells: field_names
                .into_iter()
                .map(|name| (name.into(), String::new()))
                .collect(),
        }
    }

    /// Current text of the named cell.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, text)| text.as_str())
    }
}

impl FieldTarget for TextRow {
    fn field_names(&self, emit: &mut dyn FnMut(&str)) {
        for (name, _) in &self.cells {
            emit(name);
        }
    }

    fn set_field_text(&mut self, name: &str, value: &str) {
        if let Some((_, text)) = self.cells.iter_mut().find(|(n, _)| n == name) {
            text.clear();
            text.push_str(value);
        }
    }
}
