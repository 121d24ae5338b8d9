//! Plain-text rendering of view models.
//!
//! Formats a [`DirectoryViewModel`] as aligned columns, and a single record
//! as a detail card. Output is unstyled text suitable for any terminal.

use crate::domain::person::Person;
use crate::ui::viewmodel::DirectoryViewModel;

const ID_WIDTH: usize = 12;
const NAME_WIDTH: usize = 24;
const EMAIL_WIDTH: usize = 28;
const PHONE_WIDTH: usize = 16;
const UPDATED_WIDTH: usize = 10;

/// Renders the list view: header, optional banners, and one row per record.
#[must_use]
pub fn render_table(viewmodel: &DirectoryViewModel) -> String {
    let mut out = String::new();

    out.push_str(&viewmodel.header.title);
    out.push('\n');

    if let Some(error) = &viewmodel.error {
        out.push_str(&format!("error: {error}\n"));
    }
    if let Some(busy) = viewmodel.busy {
        out.push_str(busy);
        out.push('\n');
    }

    if let Some(empty_state) = &viewmodel.empty_state {
        out.push_str(empty_state);
        out.push('\n');
        return out;
    }

    out.push_str(&format!(
        "{:<ID_WIDTH$}  {:<NAME_WIDTH$}  {:<EMAIL_WIDTH$}  {:<PHONE_WIDTH$}  {:<UPDATED_WIDTH$}\n",
        "ID", "NAME", "EMAIL", "PHONE", "UPDATED",
    ));

    for row in &viewmodel.rows {
        let marker = if row.pending_delete { " (deleting)" } else { "" };
        out.push_str(&format!(
            "{:<ID_WIDTH$}  {:<NAME_WIDTH$}  {:<EMAIL_WIDTH$}  {:<PHONE_WIDTH$}  {:<UPDATED_WIDTH$}{marker}\n",
            clip(&row.id, ID_WIDTH),
            clip(&row.name, NAME_WIDTH),
            clip(&row.email, EMAIL_WIDTH),
            clip(&row.phone, PHONE_WIDTH),
            clip(&row.updated, UPDATED_WIDTH),
        ));
    }

    out
}

/// Renders a single record as a detail card.
#[must_use]
pub fn render_detail(person: &Person) -> String {
    let field = |value: &Option<String>| value.clone().unwrap_or_else(|| "—".to_string());

    format!(
        "{name}\n  id:       {id}\n  email:    {email}\n  phone:    {phone}\n  address:  {address}\n  created:  {created}\n  updated:  {updated} ({ago})\n",
        name = person.full_name(),
        id = person.id,
        email = field(&person.email),
        phone = field(&person.phone),
        address = field(&person.address),
        created = person.created_at.format("%Y-%m-%d %H:%M UTC"),
        updated = person.updated_at.format("%Y-%m-%d %H:%M UTC"),
        ago = person.updated_ago(),
    )
}

/// Truncates to `width` characters, marking the cut with an ellipsis.
///
/// Counts characters rather than bytes so multi-byte names never split.
fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        let kept: String = value.chars().take(width.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::DirectoryState;
    use crate::domain::person::{Person, PersonId};
    use chrono::Utc;

    fn person(id: &str, first: &str, last: &str) -> Person {
        let now = Utc::now();
        Person {
            id: PersonId::from(id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: Some(format!("{}@example.com", first.to_lowercase())),
            phone: None,
            address: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn table_lists_every_record_under_the_header() {
        let mut state = DirectoryState::new();
        state.loading = false;
        state.replace_all(vec![person("a", "Ada", "Lovelace"), person("b", "Grace", "Hopper")]);

        let rendered = render_table(&crate::ui::viewmodel::DirectoryViewModel::from_state(&state));

        assert!(rendered.starts_with("Directory (2 persons)"));
        assert!(rendered.contains("Ada Lovelace"));
        assert!(rendered.contains("grace@example.com"));
    }

    #[test]
    fn empty_directory_renders_the_empty_state_without_columns() {
        let mut state = DirectoryState::new();
        state.loading = false;

        let rendered = render_table(&crate::ui::viewmodel::DirectoryViewModel::from_state(&state));

        assert!(rendered.contains("The directory is empty"));
        assert!(!rendered.contains("EMAIL"));
    }

    #[test]
    fn detail_card_shows_placeholders_for_absent_fields() {
        let rendered = render_detail(&person("a", "Ada", "Lovelace"));
        assert!(rendered.starts_with("Ada Lovelace\n"));
        assert!(rendered.contains("ada@example.com"));
        assert!(rendered.contains("phone:    —"));
    }

    #[test]
    fn clip_counts_characters_not_bytes() {
        assert_eq!(clip("short", 10), "short");
        assert_eq!(clip("ééééééé", 5), "éééé…");
    }
}
