use crate::extension::is_foreign;

/// The foreign files among `file_names`, in their original order.
///
/// The host does not parse these itself; reporting them keeps them tracked
/// as part of the project.
pub fn external_files(file_names: &[String]) -> Vec<String> {
    file_names
        .iter()
        .filter(|name| is_foreign(name))
        .cloned()
        .collect()
}
