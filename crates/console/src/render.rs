//! HTML and plain-text output of the customer page.

use crate::escape::escape_html;
use crate::model::CustomerRecord;
use crate::page::Page;

const MISSING_ID: &str = "N/A";
const EMPTY_STATE: &str = "No customers found";
const COLUMNS: [&str; 5] = ["ID", "Name", "Email", "Phone", "Address"];

fn display_id(record: &CustomerRecord) -> String {
    match &record.id {
        Some(id) if !id.as_str().is_empty() => escape_html(Some(id.as_str())),
        _ => MISSING_ID.to_string(),
    }
}

/// One `<tr>` per record, in list order.
pub fn table_rows(customers: &[CustomerRecord]) -> String {
    let mut out = String::new();
    for customer in customers {
        let id = display_id(customer);
        out.push_str("<tr>\n");
        out.push_str(&format!("    <td>{}</td>\n", id));
        for value in [
            &customer.name,
            &customer.email,
            &customer.phone,
            &customer.address,
        ] {
            out.push_str(&format!("    <td>{}</td>\n", escape_html(value.as_deref())));
        }
        out.push_str("    <td>\n");
        out.push_str(&format!(
            "        <button class=\"btn btn-primary btn-sm edit-btn\" data-id=\"{}\">Edit</button>\n",
            id
        ));
        out.push_str(&format!(
            "        <button class=\"btn btn-danger btn-sm delete-btn\" data-id=\"{}\">Delete</button>\n",
            id
        ));
        out.push_str("    </td>\n");
        out.push_str("</tr>\n");
    }
    out
}

fn display_style(visible: bool) -> &'static str {
    if visible {
        "display: block"
    } else {
        "display: none"
    }
}

fn alert(id: &str, class: &str, message_id: &str, message: Option<&str>) -> String {
    format!(
        "<div id=\"{id}\" class=\"alert {class}\" style=\"{style}\">\n\
         \x20   <span id=\"{message_id}\">{message}</span>\n\
         \x20   <button type=\"button\" class=\"close\">&times;</button>\n\
         </div>\n",
        style = display_style(message.is_some()),
        message = escape_html(message),
    )
}

fn input(id: &str, kind: &str, label: &str, value: &str, required: bool) -> String {
    format!(
        "<div class=\"form-group\">\n\
         \x20   <label for=\"{id}\">{label}</label>\n\
         \x20   <input type=\"{kind}\" class=\"form-control\" id=\"{id}\" name=\"{id}\" value=\"{value}\"{required}>\n\
         </div>\n",
        value = escape_html(Some(value)),
        required = if required { " required" } else { "" },
    )
}

/// The complete customer screen as an HTML document.
pub fn page(page: &Page) -> String {
    let form = &page.form;
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"UTF-8\">\n<title>Customer Management System</title>\n");
    out.push_str("</head>\n<body>\n<div class=\"container\">\n");
    out.push_str("<h1>Customer Management System</h1>\n");

    out.push_str(&alert(
        "errorAlert",
        "alert-danger",
        "errorMessage",
        page.error.as_ref().map(|b| b.message.as_str()),
    ));
    out.push_str(&alert(
        "successAlert",
        "alert-success",
        "successMessage",
        page.success.as_ref().map(|b| b.message.as_str()),
    ));

    out.push_str(&format!(
        "<div id=\"loadingSpinner\" class=\"spinner-border\" style=\"{}\"></div>\n",
        display_style(page.loading)
    ));

    out.push_str(&format!(
        "<h2 id=\"formTitle\">{}</h2>\n",
        page.mode.title()
    ));
    out.push_str("<form id=\"customerForm\">\n");
    out.push_str(&format!(
        "<input type=\"hidden\" id=\"customerId\" value=\"{}\">\n",
        escape_html(Some(&form.id))
    ));
    out.push_str(&input("name", "text", "Name", &form.name, true));
    out.push_str(&input("email", "email", "Email", &form.email, true));
    out.push_str(&input("phone", "text", "Phone", &form.phone, false));
    out.push_str(&input("address", "text", "Address", &form.address, false));
    if let Some(message) = &page.validation {
        out.push_str(&format!(
            "<div class=\"invalid-feedback\">{}</div>\n",
            escape_html(Some(message))
        ));
    }
    out.push_str(&format!(
        "<button type=\"submit\" id=\"submitBtn\" class=\"btn btn-primary\">{}</button>\n",
        page.mode.submit_label()
    ));
    out.push_str("<button type=\"button\" id=\"resetBtn\" class=\"btn btn-secondary\">Reset</button>\n");
    out.push_str("</form>\n");

    out.push_str("<table class=\"table\">\n<thead>\n<tr>");
    for column in COLUMNS {
        out.push_str(&format!("<th>{}</th>", column));
    }
    out.push_str("<th>Actions</th></tr>\n</thead>\n<tbody id=\"customerTableBody\">\n");
    out.push_str(&table_rows(&page.customers));
    out.push_str("</tbody>\n</table>\n");
    out.push_str(&format!(
        "<div id=\"noCustomers\" style=\"{}\">{}</div>\n",
        display_style(page.show_empty_state()),
        EMPTY_STATE
    ));

    out.push_str("</div>\n</body>\n</html>\n");
    out
}

/// The customer screen for a terminal: banners, then an aligned table.
pub fn text(page: &Page) -> String {
    let mut out = String::new();

    if let Some(banner) = &page.error {
        out.push_str(&format!("[error] {}\n", banner.message));
    }
    if let Some(banner) = &page.success {
        out.push_str(&format!("[ok] {}\n", banner.message));
    }
    if let Some(message) = &page.validation {
        out.push_str(&format!("[invalid] {}\n", message));
    }
    if page.loading {
        out.push_str("Loading...\n");
    }

    if page.show_empty_state() {
        out.push_str(EMPTY_STATE);
        out.push('\n');
        return out;
    }

    let rows: Vec<[String; 5]> = page
        .customers
        .iter()
        .map(|c| {
            [
                c.id
                    .as_ref()
                    .map(|id| id.to_string())
                    .filter(|id| !id.is_empty())
                    .unwrap_or_else(|| MISSING_ID.to_string()),
                c.name.clone().unwrap_or_default(),
                c.email.clone().unwrap_or_default(),
                c.phone.clone().unwrap_or_default(),
                c.address.clone().unwrap_or_default(),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: [&str; 5]| -> String {
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ");
        format!("{}\n", line.trim_end())
    };

    out.push_str(&format_row(COLUMNS));
    for row in &rows {
        out.push_str(&format_row(row.each_ref().map(String::as_str)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::Banner;
    use crate::model::RecordId;
    use crate::page::FormMode;

    fn record(id: Option<&str>, name: &str) -> CustomerRecord {
        CustomerRecord {
            id: id.map(RecordId::from),
            name: Some(name.to_string()),
            email: Some(format!("{}@example.com", name.to_lowercase())),
            phone: None,
            address: Some("1 Road".to_string()),
        }
    }

    #[test]
    fn test_rows_escape_values_and_carry_ids() {
        let html = table_rows(&[record(Some("5"), "<b>Ann</b>")]);

        assert_eq!(html.matches("<tr>").count(), 1);
        assert!(html.contains("<td>5</td>"));
        assert!(html.contains("<td>&lt;b&gt;Ann&lt;/b&gt;</td>"));
        assert!(!html.contains("<b>Ann</b>"));
        assert!(html.contains("data-id=\"5\">Edit</button>"));
        assert!(html.contains("data-id=\"5\">Delete</button>"));
    }

    #[test]
    fn test_missing_values_render_empty_and_missing_id_as_na() {
        let html = table_rows(&[record(None, "Ann")]);

        assert!(html.contains("<td>N/A</td>"));
        assert!(html.contains("<td></td>"));
        assert!(html.contains("data-id=\"N/A\""));
    }

    #[test]
    fn test_rows_follow_list_order() {
        let html = table_rows(&[record(Some("1"), "Ann"), record(Some("2"), "Bob")]);
        let ann = html.find("Ann").unwrap();
        let bob = html.find("Bob").unwrap();
        assert!(ann < bob);
    }

    #[test]
    fn test_empty_page_shows_empty_state_and_hides_alerts() {
        let html = page(&Page::new());

        assert!(html.contains("<div id=\"noCustomers\" style=\"display: block\">No customers found</div>"));
        assert!(html.contains("id=\"errorAlert\" class=\"alert alert-danger\" style=\"display: none\""));
        assert!(html.contains("id=\"successAlert\" class=\"alert alert-success\" style=\"display: none\""));
        assert!(html.contains("<h2 id=\"formTitle\">Add New Customer</h2>"));
        assert!(html.contains(">Save Customer</button>"));
    }

    #[test]
    fn test_edit_page_uses_edit_labels_and_escaped_values() {
        let mut state = Page::new();
        state.mode = FormMode::Edit {
            id: RecordId::from("5"),
        };
        state.form.id = "5".to_string();
        state.form.name = "O'Brien".to_string();
        state.success = Some(Banner::success("Customer updated successfully"));
        state.set_customers(vec![record(Some("5"), "Ann")]);

        let html = page(&state);

        assert!(html.contains("<h2 id=\"formTitle\">Edit Customer</h2>"));
        assert!(html.contains(">Update Customer</button>"));
        assert!(html.contains("value=\"O&#039;Brien\""));
        assert!(html.contains("<span id=\"successMessage\">Customer updated successfully</span>"));
        assert!(html.contains("<div id=\"noCustomers\" style=\"display: none\">"));
    }

    #[test]
    fn test_text_aligns_columns() {
        let mut state = Page::new();
        state.set_customers(vec![record(Some("5"), "Ann"), record(None, "Roberta")]);

        let out = text(&state);
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID   Name     Email"));
        assert!(lines[1].starts_with("5    Ann      ann@example.com"));
        assert!(lines[2].starts_with("N/A  Roberta  roberta@example.com"));
    }

    #[test]
    fn test_text_empty_state_with_banner() {
        let mut state = Page::new();
        state.show_error("Error loading customers: Failed to fetch customers");

        assert_eq!(
            text(&state),
            "[error] Error loading customers: Failed to fetch customers\nNo customers found\n"
        );
    }
}
