//! In-memory table of text cells

/// Column holding the free-text tags used by the classifier
pub const TAGS: &str = "Tags";
/// Sector column, appended to output when absent
pub const SECTOR: &str = "Sector";
/// Category column, appended to output when absent
pub const CATEGORY: &str = "Category";
/// Organisation name column
pub const ORGANISATION: &str = "Organisation";
/// Preferred organisation name column in master files
pub const NAME: &str = "Name";

/// A header row plus data rows, all cells plain text.
///
/// Every row holds exactly one cell per header. Rows supplied shorter than the
/// header are padded with empty cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                if row.len() < width {
                    row.resize(width, String::new());
                }
                row
            })
            .collect();

        Table { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the first column with this exact name
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Return the column index for `name`, appending an empty column at the end
    /// when the table does not have one yet.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(idx) = self.column(name) {
            return idx;
        }

        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.headers.len() - 1
    }

    pub fn rows_mut(&mut self) -> std::slice::IterMut<'_, Vec<String>> {
        self.rows.iter_mut()
    }

    /// Iterate rows as name-addressable records
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().map(move |values| Record {
            headers: &self.headers,
            values,
        })
    }
}

/// Borrowed view of one row, addressed by column name
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    headers: &'a [String],
    values: &'a [String],
}

impl<'a> Record<'a> {
    /// Cell value for the first column named `name`, if the column exists
    pub fn get(&self, name: &str) -> Option<&'a str> {
        let idx = self.headers.iter().position(|h| h == name)?;
        self.values.get(idx).map(String::as_str)
    }

    /// Cell value, treating a missing column as an empty cell
    pub fn get_or_empty(&self, name: &str) -> &'a str {
        self.get(name).unwrap_or("")
    }
}
