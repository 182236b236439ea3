use super::*;

use shared::domain::Member;

fn controller_with(count: usize) -> MemberTableController {
    MemberTableController::with_members(
        (1..=count)
            .map(|n| Member {
                id: MemberId::new(n.to_string()),
                name: format!("Member {n}"),
                email: format!("member{n}@mailinator.com"),
                role: if n == 1 { "admin".into() } else { "member".into() },
            })
            .collect(),
    )
}

#[test]
fn parses_navigation_and_selection_commands() {
    assert_eq!(parse_command("page 3"), Ok(ConsoleCommand::Page(3)));
    assert_eq!(parse_command("  NEXT "), Ok(ConsoleCommand::Next));
    assert_eq!(parse_command("prev"), Ok(ConsoleCommand::Previous));
    assert_eq!(
        parse_command("select 17"),
        Ok(ConsoleCommand::Select(MemberId::from("17")))
    );
    assert_eq!(parse_command("delete-selected"), Ok(ConsoleCommand::DeleteSelected));
}

#[test]
fn search_keeps_inner_spaces_and_allows_blank() {
    assert_eq!(
        parse_command("search  Aaron Miles "),
        Ok(ConsoleCommand::Search("Aaron Miles".into()))
    );
    assert_eq!(parse_command("search"), Ok(ConsoleCommand::Search(String::new())));
}

#[test]
fn set_takes_the_rest_of_the_line_as_value() {
    assert_eq!(
        parse_command("set 3 name Jane  Doe"),
        Ok(ConsoleCommand::Set {
            id: MemberId::from("3"),
            field: EditableField::Name,
            value: "Jane  Doe".into(),
        })
    );
    assert_eq!(
        parse_command("set 3 role"),
        Ok(ConsoleCommand::Set {
            id: MemberId::from("3"),
            field: EditableField::Role,
            value: String::new(),
        })
    );
}

#[test]
fn rejects_malformed_lines() {
    assert_eq!(parse_command("   "), Err(CommandError::Empty));
    assert_eq!(
        parse_command("frobnicate"),
        Err(CommandError::Unknown("frobnicate".into()))
    );
    assert_eq!(
        parse_command("page two"),
        Err(CommandError::InvalidPage("two".into()))
    );
    assert!(matches!(
        parse_command("delete"),
        Err(CommandError::MissingArgument { command: "delete", .. })
    ));
    assert!(matches!(
        parse_command("set 3 id 9"),
        Err(CommandError::InvalidField(_))
    ));
}

#[test]
fn out_of_range_page_reports_a_notice_without_moving() {
    let mut controller = controller_with(25);
    assert_eq!(
        dispatch(&mut controller, ConsoleCommand::Page(4)),
        Outcome::Notice("page 4 is out of range (1-3)".into())
    );
    assert_eq!(controller.current_page(), 1);

    assert_eq!(dispatch(&mut controller, ConsoleCommand::Last), Outcome::Render);
    assert_eq!(controller.current_page(), 3);
    assert_eq!(
        dispatch(&mut controller, ConsoleCommand::Next),
        Outcome::Notice("page 4 is out of range (1-3)".into())
    );
}

#[test]
fn edit_flow_updates_the_row() {
    let mut controller = controller_with(10);
    for line in ["edit 3", "set 3 email new@x.com", "save 3"] {
        let cmd = parse_command(line).expect("parse");
        assert_eq!(dispatch(&mut controller, cmd), Outcome::Render);
    }

    let row = controller
        .working_records()
        .iter()
        .find(|member| member.id == MemberId::from("3"))
        .expect("row");
    assert_eq!(row.email, "new@x.com");
    assert!(!controller.is_editing(&MemberId::from("3")));
}

#[test]
fn bulk_delete_reports_how_many_rows_went() {
    let mut controller = controller_with(10);
    assert_eq!(
        dispatch(&mut controller, ConsoleCommand::DeleteSelected),
        Outcome::Notice("nothing selected".into())
    );

    dispatch(&mut controller, ConsoleCommand::Select(MemberId::from("3")));
    dispatch(&mut controller, ConsoleCommand::Select(MemberId::from("7")));
    assert_eq!(
        dispatch(&mut controller, ConsoleCommand::DeleteSelected),
        Outcome::Notice("deleted 2 rows".into())
    );
    assert_eq!(controller.working_records().len(), 8);
}

#[test]
fn deleting_an_unknown_row_is_reported() {
    let mut controller = controller_with(2);
    assert_eq!(
        dispatch(&mut controller, ConsoleCommand::Delete(MemberId::from("99"))),
        Outcome::Notice("no row with id '99'".into())
    );
    assert_eq!(controller.working_records().len(), 2);
}

#[test]
fn search_then_blank_search_round_trips_through_dispatch() {
    let mut controller = controller_with(10);
    dispatch(&mut controller, ConsoleCommand::Search("ADMIN".into()));
    assert_eq!(controller.working_records().len(), 1);

    dispatch(&mut controller, ConsoleCommand::Search(String::new()));
    assert_eq!(controller.working_records().len(), 10);
}

#[test]
fn previous_on_the_first_page_says_so() {
    let mut controller = controller_with(25);
    assert_eq!(
        dispatch(&mut controller, ConsoleCommand::Previous),
        Outcome::Notice("already on the first page".into())
    );
    assert_eq!(controller.current_page(), 1);

    dispatch(&mut controller, ConsoleCommand::Next);
    assert_eq!(dispatch(&mut controller, ConsoleCommand::Previous), Outcome::Render);
    assert_eq!(controller.current_page(), 1);
}

#[test]
fn deleting_a_row_hidden_by_search_keeps_it() {
    let mut controller = controller_with(10);
    dispatch(&mut controller, ConsoleCommand::Search("admin".into()));
    assert_eq!(
        dispatch(&mut controller, ConsoleCommand::Delete(MemberId::from("2"))),
        Outcome::Notice("no row with id '2'".into())
    );

    dispatch(&mut controller, ConsoleCommand::Search(String::new()));
    assert_eq!(controller.working_records().len(), 10);
}
