use serde::Serialize;

// ============================================================================
// Constants
// ============================================================================

/// Longest department code (overseas departments: "971".."976")
pub const MAX_CODE_LENGTH: usize = 3;

/// Letter suffixes used by the two Corsican departments ("2A", "2B")
pub const CODE_LETTER_SUFFIXES: [char; 2] = ['A', 'B'];

// ============================================================================
// Aggregate
// ============================================================================

/// Французский департамент: код, название и ссылка на статью Википедии.
///
/// Records are generated at build time from `departments.json` and live in a
/// `static` slice, so every field is a `&'static str`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DepartmentRecord {
    pub code: &'static str,
    pub name: &'static str,

    #[serde(rename = "wikiUrl")]
    pub reference_url: &'static str,
}

impl DepartmentRecord {
    pub const fn new(code: &'static str, name: &'static str, reference_url: &'static str) -> Self {
        Self {
            code,
            name,
            reference_url,
        }
    }

    /// Label shown next to a match, e.g. "Haut-Rhin (68)"
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

/// Checks the shape of a department code.
///
/// Accepted: two digits ("01", "95"), one digit followed by a letter suffix
/// ("2A", "2B"), or three digits ("971").
pub fn is_well_formed_code(code: &str) -> bool {
    let chars: Vec<char> = code.chars().collect();
    match chars.as_slice() {
        [a, b] if a.is_ascii_digit() && b.is_ascii_digit() => true,
        [a, b] if a.is_ascii_digit() && CODE_LETTER_SUFFIXES.contains(b) => true,
        [a, b, c] => a.is_ascii_digit() && b.is_ascii_digit() && c.is_ascii_digit(),
        _ => false,
    }
}
