use pretty_assertions::assert_eq;
use quake_log_stats::aggregator::{aggregate, calculate_summary, Aggregator, RankedPlayer};
use quake_log_stats::parser::{classify_line, parse_lines, LineEvent};

fn kill_line(killer: &str, victim: &str) -> String {
    format!("1:00 Kill: 2 3 7: {} killed {} by MOD_ROCKET", killer, victim)
}

#[test]
fn test_markers_without_kills() {
    let log = parse_lines(["0:00 InitGame: a", "1:00 InitGame: b", "2:00 InitGame: c"]);

    assert_eq!(log.ids(), vec!["match_1", "match_2", "match_3"]);
    assert!(log.iter().all(|m| m.total_kills() == 0 && m.players().is_empty()));
}

#[test]
fn test_no_markers_no_kills() {
    let log = parse_lines(["20:34 ClientConnect: 2", "", "20:37 ShutdownGame:"]);
    assert!(log.is_empty());
}

#[test]
fn test_world_never_a_player() {
    let lines = [
        "0:00 InitGame: ".to_string(),
        kill_line("<world>", "Zeh"),
        kill_line("Zeh", "Mal"),
        "0:00 InitGame: ".to_string(),
        kill_line("<world>", "Mal"),
        kill_line("<world>", "<world>"),
    ];
    let log = parse_lines(lines.iter().map(String::as_str));

    for stats in &log {
        assert!(!stats.has_player("<world>"));
        assert!(stats.score("<world>").is_none());
        for name in stats.kills().keys() {
            assert!(stats.has_player(name));
        }
    }
    assert_eq!(log.get("match_2").unwrap().total_kills(), 2);
    assert_eq!(log.get("match_2").unwrap().score("Mal"), Some(-1));
}

#[test]
fn test_repeated_parses_are_independent() {
    let first = parse_lines(["0:00 InitGame: ", "0:00 InitGame: ", "0:00 InitGame: "]);
    assert_eq!(first.len(), 3);

    let second_lines = [kill_line("Alice", "Bob")];
    let second = parse_lines(second_lines.iter().map(String::as_str));

    assert_eq!(second.ids(), vec!["match_1"]);
    assert_eq!(second.get("match_1").unwrap().total_kills(), 1);
}

#[test]
fn test_aggregator_matches_aggregate() {
    let lines = [
        "0:00 InitGame: ".to_string(),
        kill_line("Alice", "Bob"),
        kill_line("<world>", "Alice"),
    ];

    let mut aggregator = Aggregator::new();
    for line in &lines {
        aggregator.apply(classify_line(line));
    }

    let events: Vec<LineEvent> = lines.iter().map(|l| classify_line(l)).collect();
    assert_eq!(aggregator.finish(), aggregate(events));
}

#[test]
fn test_summary_ranking_across_matches() {
    let lines = [
        "0:00 InitGame: ".to_string(),
        kill_line("Alice", "Bob"),
        kill_line("Alice", "Bob"),
        kill_line("<world>", "Carol"),
        "0:00 InitGame: ".to_string(),
        kill_line("Bob", "Alice"),
        kill_line("Carol", "Bob"),
        kill_line("Carol", "Bob"),
        kill_line("Carol", "Alice"),
    ];
    let log = parse_lines(lines.iter().map(String::as_str));
    let summary = calculate_summary(&log);

    assert_eq!(summary.total_matches, 2);
    assert_eq!(summary.total_kills, 7);
    assert_eq!(summary.unique_players(), 3);
    assert_eq!(
        summary.top_players(2),
        vec![
            RankedPlayer { name: "Alice".to_string(), score: 2 },
            RankedPlayer { name: "Carol".to_string(), score: 2 },
        ]
    );
}

#[test]
fn test_kill_with_unusual_ids_is_counted() {
    let log = parse_lines([
        "0:00 InitGame: ",
        "0:05 Kill: 99999999999999999999999 2 3: Alice killed Bob by MOD_ROCKET",
        "0:06 Kill: \u{661} 2 3: Carol killed Bob by MOD_ROCKET",
    ]);
    let stats = log.get("match_1").unwrap();

    assert_eq!(stats.total_kills(), 2);
    assert_eq!(stats.players(), vec!["Alice", "Bob", "Carol"]);
    assert_eq!(stats.score("Alice"), Some(1));
    assert_eq!(stats.score("Carol"), Some(1));
    assert_eq!(stats.score("Bob"), None);
}
