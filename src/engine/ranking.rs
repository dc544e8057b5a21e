// * Ranking Formatter
// * Orders a roster by event rank with missing data last and renders it as a fixed-width table.

use std::cmp::Ordering;

use crate::config::constants::{
    EVENT_RANK_COLUMN_WIDTH, NAME_COLUMN_WIDTH, NO_DATA_SENTINEL, SERVER_RANK_COLUMN_WIDTH,
};
use crate::engine::layout::{fit_to_width, pad_to_width};
use crate::engine::numfmt::parse_display_int;
use crate::refinery::MemberStanding;

const POSITION_WIDTH: usize = 2;

// * "No data." and anything else unparsable map to None
fn event_rank_value(member: &MemberStanding) -> Option<i64> {
    if member.event_rank.trim() == NO_DATA_SENTINEL {
        return None;
    }
    parse_display_int(&member.event_rank)
}

/// Numeric ranks ascending, members without a rank after all of them
pub fn compare_event_rank(a: &MemberStanding, b: &MemberStanding) -> Ordering {
    match (event_rank_value(a), event_rank_value(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort; equal keys keep roster order
pub fn rank(mut members: Vec<MemberStanding>) -> Vec<MemberStanding> {
    members.sort_by(compare_event_rank);
    members
}

pub fn render(members: &[MemberStanding]) -> String {
    let mut lines = Vec::with_capacity(members.len() + 1);
    lines.push(render_line("", "Player", "Rank", "GW rank", "Honor"));

    for (i, member) in members.iter().enumerate() {
        lines.push(render_line(
            &(i + 1).to_string(),
            &member.name,
            &member.server_rank,
            &member.event_rank,
            &member.total_honor,
        ));
    }

    lines.join("\n")
}

fn render_line(
    position: &str,
    name: &str,
    server_rank: &str,
    event_rank: &str,
    honor: &str,
) -> String {
    format!(
        "{} {}{}{}{}",
        pad_to_width(position, POSITION_WIDTH),
        fit_to_width(name, NAME_COLUMN_WIDTH),
        fit_to_width(server_rank, SERVER_RANK_COLUMN_WIDTH),
        fit_to_width(event_rank, EVENT_RANK_COLUMN_WIDTH),
        honor
    )
    .trim_end()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::layout::display_width;

    fn member(name: &str, event_rank: &str) -> MemberStanding {
        MemberStanding {
            name: name.to_string(),
            server_rank: "Member".to_string(),
            event_rank: event_rank.to_string(),
            total_honor: "1,000".to_string(),
        }
    }

    fn names(members: &[MemberStanding]) -> Vec<&str> {
        members.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn test_no_data_sorts_last() {
        let sorted = rank(vec![
            member("a", "No data."),
            member("b", "12,000"),
            member("c", "5"),
            member("d", "No data."),
            member("e", "300"),
        ]);
        assert_eq!(names(&sorted), vec!["c", "e", "b", "a", "d"]);
    }

    #[test]
    fn test_sorting_is_idempotent() {
        let once = rank(vec![
            member("x", "No data."),
            member("y", "2"),
            member("z", "2"),
            member("w", "1"),
        ]);
        let twice = rank(once.clone());
        assert_eq!(once, twice);
        assert_eq!(names(&once), vec!["w", "y", "z", "x"]);
    }

    #[test]
    fn test_numeric_not_lexicographic() {
        let sorted = rank(vec![member("ten", "10"), member("nine", "9")]);
        assert_eq!(names(&sorted), vec!["nine", "ten"]);
    }

    #[test]
    fn test_render_positions_and_widths() {
        let rendered = render(&[member("Alice", "5"), member("ジータ", "No data.")]);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("1  Alice"));
        assert!(lines[2].starts_with("2  ジータ"));

        // * Honor column starts at the same display cell on every row
        let prefix = POSITION_WIDTH
            + 1
            + NAME_COLUMN_WIDTH
            + SERVER_RANK_COLUMN_WIDTH
            + EVENT_RANK_COLUMN_WIDTH;
        for line in &lines[1..] {
            let honor_at = line.find("1,000").unwrap();
            assert_eq!(display_width(&line[..honor_at]), prefix);
        }
    }

    #[test]
    fn test_two_digit_positions() {
        let roster: Vec<MemberStanding> =
            (0..10).map(|i| member(&format!("m{}", i), "1")).collect();
        let rendered = render(&roster);
        assert!(rendered.lines().last().unwrap().starts_with("10 m9"));
    }
}
