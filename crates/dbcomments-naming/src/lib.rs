//! Naming conventions for dbcomments.
//!
//! These helpers mirror the defaults an ORM applies when a model or field has
//! no explicit human-readable name: labels derived from column names, table
//! names derived from the application label, and the title casing used for
//! table comments. This crate has no dependencies.

// ============================================================================
// Field Labels
// ============================================================================

/// Derive the default display label for a column.
///
/// Underscores become spaces, nothing else changes.
///
/// # Examples
/// ```
/// use dbcomments_naming::auto_label;
///
/// assert_eq!(auto_label("full_name"), "full name");
/// assert_eq!(auto_label("age"), "age");
/// ```
pub fn auto_label(column: &str) -> String {
    column.replace('_', " ")
}

/// Returns true when `label` is what [`auto_label`] would produce for `column`,
/// ignoring case.
///
/// # Examples
/// ```
/// use dbcomments_naming::is_autogenerated_label;
///
/// assert!(is_autogenerated_label("Full name", "full_name"));
/// assert!(is_autogenerated_label("FULL NAME", "Full_Name"));
/// assert!(!is_autogenerated_label("Name of person", "full_name"));
/// ```
pub fn is_autogenerated_label(label: &str, column: &str) -> bool {
    label.to_lowercase() == auto_label(&column.to_lowercase())
}

// ============================================================================
// Model Labels
// ============================================================================

/// Split a CamelCase model name into lower-cased words.
///
/// A space is inserted before an upper-case letter that follows a lower-case
/// letter, or that starts a new word inside an acronym run.
///
/// # Examples
/// ```
/// use dbcomments_naming::camel_case_to_spaces;
///
/// assert_eq!(camel_case_to_spaces("Person"), "person");
/// assert_eq!(camel_case_to_spaces("UserProfile"), "user profile");
/// assert_eq!(camel_case_to_spaces("HTTPRequest"), "http request");
/// ```
pub fn camel_case_to_spaces(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let after_lower = i > 0 && chars[i - 1].is_lowercase();
            let starts_word = chars.get(i + 1).is_some_and(|next| !next.is_uppercase());
            if after_lower || starts_word {
                out.push(' ');
            }
        }
        out.push(c);
    }

    out.trim().to_lowercase()
}

/// Title-case a label the way a table comment is presented.
///
/// The first cased character of every run of cased characters is upper-cased
/// and the rest are lower-cased. Digits and punctuation break runs, so
/// `"2nd place"` becomes `"2Nd Place"`.
///
/// # Examples
/// ```
/// use dbcomments_naming::title_case;
///
/// assert_eq!(title_case("person"), "Person");
/// assert_eq!(title_case("user profile"), "User Profile");
/// assert_eq!(title_case("o'neil FAMILY"), "O'Neil Family");
/// ```
pub fn title_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut prev_cased = false;

    for c in label.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased && !prev_cased {
            out.extend(c.to_uppercase());
        } else if cased {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        prev_cased = cased;
    }

    out
}

// ============================================================================
// Table Naming
// ============================================================================

/// Default physical table name for a model of an application.
/// Format: {app_label}_{lower(model_name)}
pub fn default_table_name(app_label: &str, model_name: &str) -> String {
    format!("{}_{}", app_label, model_name.to_lowercase())
}
