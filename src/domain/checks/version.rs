use crate::domain::entities::finding::Finding;
use crate::domain::entities::node::NodeStatus;
use crate::domain::value_objects::check_state::CheckState;

/// Reports the installed package and version, always OK. Only the first two
/// slash-separated fields are shown; the release hash is dropped.
pub fn evaluate(status: &NodeStatus) -> Vec<Finding> {
    let mut fields = status.pveversion.split('/');
    let package = fields.next().unwrap_or_default();
    let version = fields.next().unwrap_or_default();
    vec![Finding::new(
        CheckState::Ok,
        "pveversion",
        format!("{package}/{version}"),
    )]
}
