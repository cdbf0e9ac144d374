use crate::domain::entities::cluster::ClusterEntry;
use crate::domain::entities::finding::Finding;
use crate::domain::value_objects::check_state::CheckState;

const NO_CLUSTER: &str = "There is no cluster configuration!";

/// Grades cluster quorum and node liveness from `cluster/status`.
pub fn evaluate(entries: &[ClusterEntry]) -> Vec<Finding> {
    let Some((summary, nodes)) = entries.split_first() else {
        return vec![Finding::new(CheckState::Warning, "cluster", NO_CLUSTER)];
    };
    match summary.quorate {
        None => vec![Finding::new(CheckState::Warning, "cluster", NO_CLUSTER)],
        Some(1) => {
            let offline: Vec<&str> = nodes
                .iter()
                .filter(|node| node.online != Some(1))
                .map(|node| node.name.as_str())
                .collect();
            if offline.is_empty() {
                vec![Finding::new(
                    CheckState::Ok,
                    &summary.name,
                    format!("{} cluster is working well.", summary.name),
                )]
            } else {
                vec![Finding::new(
                    CheckState::Warning,
                    &summary.name,
                    format!(
                        "{} cluster are working, but there is offline nodes: {}!",
                        summary.name,
                        tuple_list(&offline),
                    ),
                )]
            }
        }
        Some(_) => vec![Finding::new(
            CheckState::Critical,
            &summary.name,
            format!("There is no quorum in {} cluster!", summary.name),
        )],
    }
}

/// Offline nodes render as a parenthesized quoted list; a single element
/// keeps a trailing comma, e.g. `('pve2',)`. Dashboards parse this exact
/// shape.
fn tuple_list(items: &[&str]) -> String {
    match items {
        [single] => format!("('{single}',)"),
        _ => {
            let quoted: Vec<String> = items.iter().map(|item| format!("'{item}'")).collect();
            format!("({})", quoted.join(", "))
        }
    }
}
