use tkdash::utils::colors::{GREEN, paint};
use tkdash::utils::table::{Column, Table, visible_width};

#[test]
fn test_visible_width_skips_color_codes() {
    assert_eq!(visible_width(&paint(GREEN, "on-time")), 7);
    assert_eq!(visible_width("plain"), 5);
}

#[test]
fn test_visible_width_skips_erase_line_codes() {
    assert_eq!(visible_width("ab\x1b[Kcd"), 4);
    assert_eq!(visible_width("\x1b[1;31mab\x1b[0m\x1b[Kcd"), 4);
}

#[test]
fn test_colored_cells_keep_columns_aligned() {
    let mut table = Table::new(vec![Column::new("STATUS"), Column::new("N")]);
    table.add_row(vec![paint(GREEN, "ok"), "1".to_string()]);
    table.add_row(vec!["late".to_string(), "2".to_string()]);
    let out = table.render();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "STATUS  N");
    assert_eq!(visible_width(lines[2]), "ok      1".len());
    assert_eq!(lines[3], "late    2");
}
