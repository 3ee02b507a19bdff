//! Server-rendered HTML pages.
//!
//! Every page is wrapped in the shared layout. All user-supplied text goes
//! through [`escape`] before it is written into markup.

use crate::models::{Contact, ContactFields};
use crate::services::ValidationErrors;
use std::fmt::Write;

const APP_NAME: &str = "Contact Book";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Path segment for a contact name, percent-encoded.
fn name_segment(name: &str) -> String {
    urlencoding::encode(name).into_owned()
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
<nav>
<a href="/">{app}</a>
<a href="/about">About</a>
<a href="/contact">Contact</a>
</nav>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        app = APP_NAME,
        body = body,
    )
}

pub fn home() -> String {
    layout(
        "Home Page",
        "<h1>Contact Book</h1>\n<p>Keep track of the names, email addresses, and mobile numbers of the people you know.</p>\n<p><a href=\"/contact\">Open your contacts</a></p>",
    )
}

pub fn about() -> String {
    layout(
        "About Page",
        "<h1>About</h1>\n<p>A small server-rendered contact manager.</p>",
    )
}

pub fn contact_list(contacts: &[Contact], notices: &[String]) -> String {
    let mut body = String::from("<h1>Contacts</h1>\n");

    for notice in notices {
        let _ = writeln!(body, "<div class=\"notice\" role=\"status\">{}</div>", escape(notice));
    }

    body.push_str("<p><a href=\"/contact/add\">Add contact</a></p>\n");

    if contacts.is_empty() {
        body.push_str("<p class=\"empty\">No contacts yet.</p>\n");
        return layout("Contact Page", &body);
    }

    body.push_str("<table>\n<thead><tr><th>#</th><th>Name</th><th>Email</th><th></th></tr></thead>\n<tbody>\n");
    for (index, contact) in contacts.iter().enumerate() {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td><a href=\"/contact/{}\">Detail</a></td></tr>",
            index + 1,
            escape(&contact.name),
            escape(&contact.email),
            name_segment(&contact.name),
        );
    }
    body.push_str("</tbody>\n</table>\n");

    layout("Contact Page", &body)
}

fn error_list(errors: &ValidationErrors) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let mut out = String::from("<ul class=\"errors\" role=\"alert\">\n");
    for error in errors.iter() {
        let _ = writeln!(
            out,
            "<li data-field=\"{}\">{}</li>",
            error.field(),
            escape(&error.to_string())
        );
    }
    out.push_str("</ul>\n");
    out
}

fn field_inputs(values: &ContactFields) -> String {
    format!(
        r#"<label>Name <input type="text" name="name" value="{}" required></label>
<label>Email <input type="email" name="email" value="{}" required></label>
<label>Mobile number <input type="text" name="phone" value="{}" required></label>
"#,
        escape(&values.name),
        escape(&values.email),
        escape(&values.phone),
    )
}

/// The add-contact form, optionally refilled after a failed submission.
pub fn add_contact_form(values: &ContactFields, errors: &ValidationErrors) -> String {
    let body = format!(
        "<h1>Add Contact</h1>\n{errors}<form method=\"post\" action=\"/contact\">\n{inputs}<button type=\"submit\">Add contact</button>\n</form>\n<p><a href=\"/contact\">Back</a></p>\n",
        errors = error_list(errors),
        inputs = field_inputs(values),
    );
    layout("Add Contact Page", &body)
}

/// The edit form for the contact `id`, whose stored name is `old_name`.
pub fn edit_contact_form(
    id: &str,
    old_name: &str,
    values: &ContactFields,
    errors: &ValidationErrors,
) -> String {
    let body = format!(
        "<h1>Edit Contact</h1>\n{errors}<form method=\"post\" action=\"/contact?_method=PUT\">\n<input type=\"hidden\" name=\"id\" value=\"{id}\">\n<input type=\"hidden\" name=\"oldName\" value=\"{old_name}\">\n{inputs}<button type=\"submit\">Save changes</button>\n</form>\n<p><a href=\"/contact\">Back</a></p>\n",
        errors = error_list(errors),
        id = escape(id),
        old_name = escape(old_name),
        inputs = field_inputs(values),
    );
    layout("Edit Contact Page", &body)
}

pub fn contact_detail(contact: &Contact) -> String {
    let body = format!(
        r#"<h1>{name}</h1>
<dl>
<dt>Email</dt><dd>{email}</dd>
<dt>Mobile number</dt><dd>{phone}</dd>
</dl>
<p><a href="/contact/edit/{segment}">Edit</a></p>
<form method="post" action="/contact?_method=DELETE">
<input type="hidden" name="name" value="{name}">
<button type="submit">Delete</button>
</form>
<p><a href="/contact">Back to contacts</a></p>
"#,
        name = escape(&contact.name),
        email = escape(&contact.email),
        phone = escape(&contact.phone),
        segment = name_segment(&contact.name),
    );
    layout("Detail Page", &body)
}

pub fn not_found(message: &str) -> String {
    let body = format!(
        "<h1>404 | Not Found</h1>\n<p>{}</p>\n<p><a href=\"/contact\">Back to contacts</a></p>\n",
        escape(message)
    );
    layout("Not Found", &body)
}

pub fn server_error() -> String {
    layout(
        "Server Error",
        "<h1>500 | Server Error</h1>\n<p>Something went wrong while handling your request.</p>",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactId;
    use crate::services::FieldError;

    fn aceng() -> Contact {
        Contact::from_fields(
            ContactId::generate(),
            ContactFields::new("Aceng", "aceng@gmail.com", "081234567890"),
        )
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_contact_list_escapes_names_and_links() {
        let mut contact = aceng();
        contact.name = "<script>Ann Lee</script>".to_string();

        let html = contact_list(&[contact], &[]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;Ann Lee&lt;/script&gt;"));
        assert!(html.contains("/contact/%3Cscript%3EAnn%20Lee%3C%2Fscript%3E"));
    }

    #[test]
    fn test_contact_list_shows_notices() {
        let html = contact_list(&[aceng()], &["Contact added!".to_string()]);
        assert!(html.contains("Contact added!"));
        assert!(html.contains("Aceng"));
    }

    #[test]
    fn test_empty_contact_list() {
        let html = contact_list(&[], &[]);
        assert!(html.contains("No contacts yet."));
    }

    #[test]
    fn test_add_form_refills_values_and_lists_errors() {
        let values = ContactFields::new("Aceng", "a@b", "123");
        let mut errors = ValidationErrors::new();
        errors.push(FieldError::InvalidEmail("a@b".to_string()));
        errors.push(FieldError::InvalidPhone("123".to_string()));

        let html = add_contact_form(&values, &errors);
        assert!(html.contains("value=\"a@b\""));
        assert!(html.contains("Invalid email address!"));
        assert!(html.contains("Invalid mobile number!"));
    }

    #[test]
    fn test_edit_form_carries_id_and_old_name() {
        let contact = aceng();
        let html = edit_contact_form(
            &contact.id.to_string(),
            &contact.name,
            &contact.fields(),
            &ValidationErrors::new(),
        );
        assert!(html.contains(&format!("name=\"id\" value=\"{}\"", contact.id)));
        assert!(html.contains("name=\"oldName\" value=\"Aceng\""));
        assert!(html.contains("action=\"/contact?_method=PUT\""));
        assert!(!html.contains("class=\"errors\""));
    }

    #[test]
    fn test_detail_has_delete_form() {
        let html = contact_detail(&aceng());
        assert!(html.contains("action=\"/contact?_method=DELETE\""));
        assert!(html.contains("081234567890"));
        assert!(html.contains("href=\"/contact/edit/Aceng\""));
    }
}
