//! Terminal rendering for CLI commands.

use colored::Colorize;
use swimlanes_core::project::Project;
use swimlanes_core::story::model::WorkflowState;
use swimlanes_core::swimlane::{Developer, Swimlanes};

const CELL_SEPARATOR: &str = "\t|   ";

/// Render swimlanes as the tab-delimited report table.
///
/// Developers without stories are skipped. Each lane is emitted from its last
/// story to its first. Unassigned stories are not part of the table; see
/// [`unassigned_note`].
pub fn render_report(swimlanes: &Swimlanes) -> String {
    let mut out = String::from("owner\t");
    for state in WorkflowState::LANES {
        out.push_str(state.as_str());
        out.push('\t');
    }
    out.push('\n');

    for dev in swimlanes.developers_with_stories() {
        render_developer(&mut out, dev);
    }

    out
}

/// Notice for stories that no project member owns, if there are any.
pub fn unassigned_note(swimlanes: &Swimlanes) -> Option<String> {
    match swimlanes.unassigned.len() {
        0 => None,
        n => Some(format!("unassigned: {} stories", n)),
    }
}

fn render_developer(out: &mut String, dev: &Developer) {
    let states: Vec<&str> = WorkflowState::LANES.iter().map(|s| s.as_str()).collect();
    out.push_str(&format!(
        "{} ({}/{} in {}){}{}\n",
        dev.member.name,
        dev.points_left,
        dev.points_total,
        dev.story_count,
        CELL_SEPARATOR,
        states.join(CELL_SEPARATOR)
    ));

    for row in 0..dev.deepest_lane(&WorkflowState::LANES) {
        out.push('\t');
        for state in WorkflowState::LANES {
            let lane = dev.stories_in(state);
            match lane.len().checked_sub(row + 1).and_then(|i| lane.get(i)) {
                Some(story) => out.push_str(&format!("| {}\t", story.name)),
                None => out.push_str("|\t"),
            }
        }
        out.push('\n');
    }
    out.push('\n');
}

pub fn print_projects(projects: &[Project]) {
    if projects.is_empty() {
        println!("{}", "No projects visible with this token.".yellow());
        return;
    }

    println!("{}", "Projects".bold());
    for project in projects {
        println!(
            "  {:>10}  {}",
            project.id.to_string().cyan(),
            project.name
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swimlanes_core::config::DisplayConfig;
    use swimlanes_core::member::Member;
    use swimlanes_core::story::model::{Story, StoryType};
    use swimlanes_core::swimlane;

    fn member(id: u64, name: &str) -> Member {
        Member {
            id,
            name: name.into(),
            initials: name[..2].to_uppercase(),
            email: format!("{}@example.com", name.to_lowercase()),
            username: None,
            role: None,
        }
    }

    fn story(id: u64, owner: Option<&str>, state: &str, estimate: Option<f64>) -> Story {
        Story {
            id,
            project_id: 1,
            name: format!("S{}", id),
            description: None,
            estimate,
            current_state: WorkflowState::parse(state),
            raw_state: state.into(),
            owned_by: owner.map(str::to_string),
            story_type: StoryType::Feature,
            url: None,
        }
    }

    #[test]
    fn report_header_lists_lane_states() {
        let lanes = swimlane::group(&[], &[], &DisplayConfig::default());
        assert_eq!(
            render_report(&lanes),
            "owner\tunstarted\trejected\tstarted\tfinished\tdelivered\t\n"
        );
    }

    #[test]
    fn report_pops_stories_from_end_of_each_lane() {
        let members = vec![member(1, "Alice")];
        let stories = vec![
            story(1, Some("Alice"), "started", Some(2.0)),
            story(2, Some("Alice"), "started", Some(1.0)),
            story(3, Some("Alice"), "finished", Some(3.0)),
        ];
        let lanes = swimlane::group(&stories, &members, &DisplayConfig::default());

        let report = render_report(&lanes);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(
            lines[1],
            concat!(
                "Alice (3/6 in 3)",
                "\t|   unstarted\t|   rejected\t|   started\t|   finished\t|   delivered"
            )
        );
        assert_eq!(lines[2], "\t|\t|\t| S2\t| S3\t|\t");
        assert_eq!(lines[3], "\t|\t|\t| S1\t|\t|\t");
        assert_eq!(lines[4], "");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn report_skips_developers_without_stories() {
        let members = vec![member(1, "Alice"), member(2, "Bob")];
        let stories = vec![story(1, Some("Bob"), "unstarted", None)];
        let lanes = swimlane::group(&stories, &members, &DisplayConfig::default());

        let report = render_report(&lanes);
        assert!(!report.contains("Alice"));
        assert!(report.contains("Bob (0/0 in 1)"));
    }

    #[test]
    fn unassigned_stories_stay_out_of_the_table() {
        let members = vec![member(1, "Alice")];
        let stories = vec![
            story(1, Some("Alice"), "started", Some(1.0)),
            story(2, Some("Mallory"), "started", Some(1.0)),
            story(3, None, "unstarted", None),
        ];
        let lanes = swimlane::group(&stories, &members, &DisplayConfig::default());

        let report = render_report(&lanes);
        assert!(!report.contains("unassigned"));
        assert!(report.ends_with("| S1\t|\t|\t\n\n"));
        assert_eq!(unassigned_note(&lanes).as_deref(), Some("unassigned: 2 stories"));
    }

    #[test]
    fn no_note_when_every_story_is_owned() {
        let members = vec![member(1, "Alice")];
        let stories = vec![story(1, Some("Alice"), "started", Some(1.0))];
        let lanes = swimlane::group(&stories, &members, &DisplayConfig::default());
        assert_eq!(unassigned_note(&lanes), None);
    }

    #[test]
    fn fractional_points_in_summary() {
        let members = vec![member(1, "Alice")];
        let stories = vec![
            story(1, Some("Alice"), "started", Some(0.5)),
            story(2, Some("Alice"), "finished", Some(1.0)),
        ];
        let lanes = swimlane::group(&stories, &members, &DisplayConfig::default());

        let report = render_report(&lanes);
        assert!(report.contains("Alice (0.5/1.5 in 2)\t|   "));
    }
}
