//! Stateless builders for leaf nodes. No decisions beyond what the
//! inputs dictate, no lookups, no side effects outside the arena.

use postboard_types::{User, UserId};

use crate::dom::{Document, NodeId};

/// Option descriptor for the employee select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: UserId,
    pub label: String,
}

/// Create a detached element with text content and an optional class.
pub fn build_text_element(
    doc: &mut Document,
    tag: &str,
    text: &str,
    class: Option<&str>,
) -> NodeId {
    let id = doc.create_element(tag);
    doc.set_text(id, text);
    if let Some(class) = class {
        doc.add_class(id, class);
    }
    id
}

/// Map employees to select options, preserving input order.
/// "No data" in means "no data" out.
pub fn build_select_options(users: Option<&[User]>) -> Option<Vec<SelectOption>> {
    let users = users?;
    Some(
        users
            .iter()
            .map(|user| SelectOption {
                value: user.id,
                label: user.name.clone(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use postboard_types::Company;

    fn user(id: u64, name: &str) -> User {
        User {
            id: UserId(id),
            name: name.to_string(),
            company: Company {
                name: "Acme".to_string(),
                catch_phrase: "Ship it".to_string(),
            },
        }
    }

    #[test]
    fn text_element_applies_class_only_when_given() {
        let mut doc = Document::new();

        let plain = build_text_element(&mut doc, "p", "hello", None);
        let classed = build_text_element(&mut doc, "p", "bye", Some("default-text"));

        assert_eq!(doc.text_of(plain), Some("hello"));
        assert!(doc.get(plain).unwrap().classes.is_empty());
        assert_eq!(doc.get(classed).unwrap().classes, vec!["default-text"]);
        // Detached: not parented anywhere.
        assert!(doc.get(plain).unwrap().parent.is_none());
    }

    #[test]
    fn select_options_preserve_order_and_fields() {
        let users = vec![user(1, "A"), user(2, "B")];

        let options = build_select_options(Some(&users)).unwrap();

        assert_eq!(
            options,
            vec![
                SelectOption {
                    value: UserId(1),
                    label: "A".to_string()
                },
                SelectOption {
                    value: UserId(2),
                    label: "B".to_string()
                },
            ]
        );
    }

    #[test]
    fn no_users_means_no_options() {
        assert!(build_select_options(None).is_none());
    }
}
