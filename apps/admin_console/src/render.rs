use std::fmt::Write as _;

use admin_core::TableView;

const ID_WIDTH: usize = 6;
const NAME_WIDTH: usize = 24;
const EMAIL_WIDTH: usize = 32;

fn marker(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Renders the current page as a fixed-width text table.
pub fn render_table(view: &TableView) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}   {:<ID_WIDTH$} {:<NAME_WIDTH$} {:<EMAIL_WIDTH$} ROLE",
        marker(view.all_selected),
        "ID",
        "NAME",
        "EMAIL",
    );

    if view.rows.is_empty() {
        let _ = writeln!(out, "    (no members)");
    }

    for row in &view.rows {
        let member = &row.member;
        let _ = writeln!(
            out,
            "{} {} {:<ID_WIDTH$} {:<NAME_WIDTH$} {:<EMAIL_WIDTH$} {}",
            marker(row.selected),
            if row.editing { '*' } else { ' ' },
            member.id.as_str(),
            member.name,
            member.email,
            member.role,
        );
    }

    let _ = write!(
        out,
        "{} | {} of {} members",
        view.page_label(),
        view.matching,
        view.total
    );
    if !view.search_term.is_empty() {
        let _ = write!(out, " | search: \"{}\"", view.search_term);
    }
    out.push('\n');
    out
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
